use monoglyph::{
    ast::Position,
    interpreter::{
        grammar::{KindSet, SyntaxKind, entries, table::ROOT},
        parser::core::parse_program,
        validator::validate,
    },
};

fn violation(source: &str) -> monoglyph::error::GrammarViolation {
    let tree = parse_program(source).unwrap();
    validate(&tree).unwrap_err()
}

#[test]
fn well_formed_programs_pass() {
    let sources = ["{ ! x #41 ; x }",
                   "{ ! s \\ [ n ] ? n | + n ~ s ( - n 1 ) 0 ; ~ s ( a ) }",
                   "{ ~ \\ _ 1 _ }",
                   "{ ! x { ! y 2 ; y } ; x }",
                   "{ ! f \\ [ x . y . z ] : x : y z ; ~ f ( 1 , 2 , N ) }"];

    for source in sources {
        let tree = parse_program(source).unwrap();
        assert!(validate(&tree).is_ok(), "{source} was rejected");
    }
}

#[test]
fn the_root_must_be_a_program() {
    let error = violation("x");

    assert_eq!(error.symbol, 'x');
    assert_eq!(error.kind, SyntaxKind::Variable);
    assert_eq!(error.allowed, ROOT);
}

#[test]
fn only_variables_can_be_assigned() {
    let error = violation("{ ! 1 2 }");

    assert_eq!(error.symbol, '1');
    assert_eq!(error.kind, SyntaxKind::Hex);
    assert_eq!(error.position, Position::new(1, 4));
    assert_eq!(error.allowed, KindSet::of(&[SyntaxKind::Variable]));
}

#[test]
fn the_first_violation_is_reported() {
    assert_eq!(violation("{ ! 1 2 ; ~ x 3 }").symbol, '1');
    assert_eq!(violation("{ + ) ] }").symbol, ')');
    assert_eq!(violation("{ ~ x 3 ; ! 1 2 }").symbol, '3');
}

#[test]
fn children_are_checked_against_their_parent() {
    assert_eq!(violation("{ # x 1 }").symbol, 'x');
    assert_eq!(violation("{ ? 1 2 }").symbol, '2');
    assert_eq!(violation("{ \\ ( 1 ) 2 }").symbol, '(');
    assert_eq!(violation("{ 1 2").symbol, '2');
}

#[test]
fn leaves_accept_nothing_and_parents_accept_something() {
    for (symbol, descriptor) in entries() {
        if descriptor.is_leaf() {
            assert!(descriptor.left.is_empty() && descriptor.right.is_empty(),
                    "{symbol:?} is a leaf with children");
        } else {
            assert!(!descriptor.left.is_empty() && !descriptor.right.is_empty(),
                    "{symbol:?} accepts no children");
        }
    }
}

#[test]
fn violations_list_the_allowed_kinds() {
    let error = violation("{ ! 1 2 }");

    assert_eq!(error.to_string(),
               "Error at line 1, column 4: '1' (Hex) is not allowed here, expected one of \
                {Variable}.");
}
