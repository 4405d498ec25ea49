use monoglyph::{
    ast::Position,
    error::ParseError,
    interpreter::{grammar::SyntaxKind, parser::core::parse_program},
};

#[test]
fn serializing_a_tree_reproduces_the_program() {
    let sources = ["{ ! x #41 ; x }",
                   "{ ! s \\ [ n ] ? n | + n ~ s ( - n 1 ) 0 ; ~ s ( a ) }",
                   "{\n\t: : # 4 8 : # 6 9 N N\n}",
                   "{ ~ \\ _ 1 _ }"];

    for source in sources {
        let tree = parse_program(source).unwrap();
        let compact = source.chars()
                            .filter(|c| !c.is_whitespace())
                            .collect::<String>();

        assert_eq!(tree.to_string(), compact);
        assert_eq!(parse_program(&tree.to_string()).unwrap().to_string(), compact);
    }
}

#[test]
fn parsing_only_looks_at_shapes() {
    let tree = parse_program("{ ! 1 2 }").unwrap();
    let (assign, end) = tree.children().unwrap();

    assert_eq!(assign.kind(), SyntaxKind::AssignExp);
    assert_eq!(assign.left().unwrap().kind(), SyntaxKind::Hex);
    assert_eq!(end.kind(), SyntaxKind::ProgramEnd);
    assert!(end.is_leaf());
    assert_eq!(tree.size(), 5);
}

#[test]
fn unknown_characters_are_rejected() {
    assert_eq!(parse_program("{ @ }"),
               Err(ParseError::MalformedInput { symbol:   '@',
                                                position: Position::new(1, 2), }));
    assert_eq!(parse_program("{ G }").map(|tree| tree.to_string()),
               Ok("{G}".to_string()));
}

#[test]
fn input_after_the_program_is_rejected() {
    assert_eq!(parse_program("{ x } y"),
               Err(ParseError::TrailingInput { symbol:   'y',
                                               position: Position::new(1, 6), }));
}

#[test]
fn truncated_input_names_the_incomplete_node() {
    assert_eq!(parse_program("{ ! x"),
               Err(ParseError::UnexpectedEndOfInput { symbol:   '!',
                                                      position: Position::new(1, 2), }));
    assert_eq!(parse_program("{"),
               Err(ParseError::UnexpectedEndOfInput { symbol:   '{',
                                                      position: Position::new(1, 0), }));
}

#[test]
fn empty_programs_are_rejected() {
    assert_eq!(parse_program(""), Err(ParseError::EmptyProgram));
    assert_eq!(parse_program(" \n\t "), Err(ParseError::EmptyProgram));
}

#[test]
fn positions_count_lines_and_columns() {
    let tree = parse_program("\t{\n x\n}").unwrap();
    let (x, end) = tree.children().unwrap();

    assert_eq!(tree.position, Position::new(1, 4));
    assert_eq!(x.position, Position::new(2, 1));
    assert_eq!(end.position, Position::new(3, 0));
}

#[test]
fn trees_render_as_an_outline() {
    let tree = parse_program("{ ! x 1 }").unwrap();

    assert_eq!(tree.render_tree(), "{\n !\n  x\n  1\n }\n");
}

#[test]
fn parse_errors_describe_the_problem() {
    let error = parse_program("{ @ }").unwrap_err();

    assert_eq!(error.to_string(),
               "Error at line 1, column 2: Malformed input, '@' is not part of the language.");
}
