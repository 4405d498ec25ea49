use std::fs::{self};

use monoglyph::{
    error::{Error, ParseError, RuntimeError},
    get_result,
};
use walkdir::WalkDir;

/// A program from the book, with the output its text promises if any.
struct BookExample {
    code:   String,
    prints: Option<String>,
}

#[test]
fn book_examples_work() {
    let mut count = 0;
    let mut checked = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, example) in book_examples(&content).into_iter().enumerate() {
            count += 1;
            let output = get_result(&example.code, "".as_bytes()).unwrap_or_else(|e| {
                             panic!("Example {} in {:?} failed:\n{}\nError: {:?}",
                                    i + 1,
                                    path,
                                    example.code,
                                    e)
                         });

            if let Some(expected) = example.prints {
                checked += 1;
                assert_eq!(output.trim_end(),
                           expected,
                           "Example {} in {:?} printed something else",
                           i + 1,
                           path);
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
    assert!(checked > 0, "No example in book/src states its output");
}

/// Collects the `monoglyph` blocks of a page. A block followed by a line
/// starting with ``prints `...` `` records that text as its output.
fn book_examples(content: &str) -> Vec<BookExample> {
    let mut examples: Vec<BookExample> = Vec::new();
    let mut code = None::<String>;
    let mut awaiting_prose = false;

    for line in content.lines() {
        let trimmed = line.trim_start();

        if let Some(buf) = code.as_mut() {
            if trimmed.starts_with("```") {
                examples.push(BookExample { code:   std::mem::take(buf),
                                            prints: None, });
                code = None;
                awaiting_prose = true;
            } else {
                buf.push_str(line);
                buf.push('\n');
            }
            continue;
        }

        if trimmed.starts_with("```monoglyph") {
            code = Some(String::new());
            awaiting_prose = false;
            continue;
        }

        if awaiting_prose && !trimmed.is_empty() {
            awaiting_prose = false;
            let promised = trimmed.strip_prefix("prints `")
                                  .and_then(|rest| rest.split_once('`'))
                                  .map(|(text, _)| text.to_string());
            if let Some(last) = examples.last_mut() {
                last.prints = promised;
            }
        }
    }

    examples
}

fn assert_output(src: &str, input: &str, expected: &str) {
    match get_result(src, input.as_bytes()) {
        Ok(output) => assert_eq!(output, expected, "Unexpected output of {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn run_failure(src: &str, input: &str) -> Error {
    match get_result(src, input.as_bytes()) {
        Ok(output) => panic!("Script succeeded with {output:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn hex_literals() {
    assert_output("{ ! x #41 ; x }", "", "65\n");
    assert_output("{ a }", "", "10\n");
    assert_output("{ # f f }", "", "255\n");
}

#[test]
fn arithmetic_and_comparison() {
    assert_output("{ + 2 3 }", "", "5\n");
    assert_output("{ - 1 2 }", "", "-1\n");
    assert_output("{ < 1 2 }", "", "1\n");
    assert_output("{ > 1 2 }", "", "0\n");
    assert_output("{ = 7 7 }", "", "1\n");
}

#[test]
fn equality_of_lists_is_identity() {
    assert_output("{ ! x : 1 N ; ! y : 1 N ; = x y }", "", "0\n");
    assert_output("{ ! x : 1 N ; = x x }", "", "1\n");
    assert_output("{ = N N }", "", "1\n");
    assert_output("{ = F F }", "", "1\n");
    assert_output("{ = F R }", "", "0\n");
    assert_output("{ = 1 N }", "", "0\n");
}

#[test]
fn conditionals_follow_truthiness() {
    assert_output("{ ? 0 | 1 2 }", "", "2\n");
    assert_output("{ ? 5 | 1 2 }", "", "1\n");
    assert_output("{ ? N | 1 2 }", "", "2\n");
    assert_output("{ ? : 0 N | 1 2 }", "", "1\n");
    assert_output("{ ? \\ _ 0 | 1 2 }", "", "1\n");
}

#[test]
fn only_the_chosen_branch_runs() {
    assert_output("{ ? 1 | 3 y }", "", "3\n");
    assert_output("{ ? 0 | ~ F ( N ) 4 }", "", "4\n");
}

#[test]
fn recursion() {
    assert_output("{ ! s \\ [ n ] ? n | + n ~ s ( - n 1 ) 0 ; ~ s ( a ) }", "", "55\n");
}

#[test]
fn closures_capture_their_frame() {
    assert_output("{ ! m \\ [ x ] \\ [ y ] + x y ; ! p ~ m ( 3 ) ; ~ p ( 4 ) }", "", "7\n");
}

#[test]
fn scoping_is_lexical() {
    assert_output("{ ! x 1 ; ! f \\ _ x ; ! g \\ [ x ] ~ f _ ; ~ g ( 9 ) }", "", "1\n");
}

#[test]
fn assignment_in_a_call_stays_local() {
    assert_output("{ ! x 1 ; ! f \\ _ ! x 2 ; ~ f _ ; x }", "", "1\n");
}

#[test]
fn arguments_are_evaluated_in_the_callers_frame() {
    assert_output("{ ! x 5 ; ! f \\ [ y . x ] + x y ; ~ f ( x , 1 ) }", "", "6\n");
}

#[test]
fn nested_blocks_share_the_frame() {
    assert_output("{ ! x { ! y 2 ; + y 1 } ; + x y }", "", "5\n");
}

#[test]
fn list_output() {
    assert_output("{ : : # 4 8 : # 6 9 N N }", "", "Hi\n");
    assert_output("{ : 1 : 2 N }", "", "1\n2\n");
    assert_output("{ N }", "", "");
}

#[test]
fn closure_output() {
    assert_output("{ \\ _ 1 }", "", "<lambda at line 1, column 2>\n");
    assert_output("{ F }", "", "<builtin first>\n");
}

#[test]
fn reading_input() {
    assert_output("{ + ~ I _ ~ I _ }", "3 4", "7\n");
    assert_output("{ - ~ I _ ~ I _ }", "  10\n\n-2 ", "12\n");
    assert_output("{ : ~ S _ N }", "hello world", "hello\n");
    assert_output("{ ~ S _ }", "", "");
}

#[test]
fn read_built_ins_skip_their_arguments() {
    assert_output("{ ~ I ( y ) }", "5", "5\n");
    assert_output("{ : ~ S ( y ) N }", "ok", "ok\n");
    assert_output("{ ! x 0 ; ~ S ( ! x 1 ) ; x }", "word", "0\n");
}

#[test]
fn long_input_tokens() {
    let word = "x".repeat(1_000_000);
    let output = get_result("{ : ~ S _ N }", word.as_bytes()).unwrap();

    assert_eq!(output.len(), word.len() + 1);
    assert!(output.starts_with("xxx"));
}

#[test]
fn invalid_utf8_input_reads_as_replacement_characters() {
    let output = get_result("{ ~ F ( ~ S _ ) }", &b"\xff"[..]).unwrap();
    assert_eq!(output, "65533\n");
}

#[test]
fn reversing_a_token() {
    let src = "{
        ! v \\ [ l . r ] ? l | ~ v ( ~ R ( l ) , : ~ F ( l ) r ) r ;
        ! w ~ S _ ;
        : ~ v ( w , N ) N
    }";

    assert_output(src, "abc", "cba\n");
}

#[test]
fn first_and_rest() {
    assert_output("{ ~ F ( : 4 : 5 N ) }", "", "4\n");
    assert_output("{ ~ F ( ~ R ( : 4 : 5 N ) ) }", "", "5\n");
    assert_output("{ ~ R ( : 4 9 ) }", "", "9\n");
}

#[test]
fn arity_is_checked() {
    let e = run_failure("{ ! f \\ [ x ] x ; ~ f ( 1 , 2 ) }", "");
    assert!(matches!(e,
                     Error::Runtime(RuntimeError::ArityMismatch { expected: 1,
                                                                  found: 2,
                                                                  .. })),
            "{e:?}");

    let e = run_failure("{ ! f \\ [ x . y ] x ; ~ f _ }", "");
    assert!(matches!(e,
                     Error::Runtime(RuntimeError::ArityMismatch { expected: 2,
                                                                  found: 0,
                                                                  .. })),
            "{e:?}");

    let e = run_failure("{ ~ F _ }", "");
    assert!(matches!(e, Error::Runtime(RuntimeError::ArityMismatch { expected: 1, .. })),
            "{e:?}");
}

#[test]
fn empty_list_access_fails() {
    let e = run_failure("{ ~ F ( N ) }", "");
    assert!(matches!(e, Error::Runtime(RuntimeError::EmptyListAccess { .. })), "{e:?}");

    let e = run_failure("{ ~ R ( N ) }", "");
    assert!(matches!(e, Error::Runtime(RuntimeError::EmptyListAccess { .. })), "{e:?}");
}

#[test]
fn type_errors() {
    let e = run_failure("{ + 1 N }", "");
    assert!(matches!(e,
                     Error::Runtime(RuntimeError::TypeMismatch { expected: "integer",
                                                                 found: "list",
                                                                 .. })),
            "{e:?}");

    let e = run_failure("{ ~ 1 _ }", "");
    assert!(matches!(e,
                     Error::Runtime(RuntimeError::TypeMismatch { expected: "closure", .. })),
            "{e:?}");

    let e = run_failure("{ : F N }", "");
    assert!(matches!(e, Error::Runtime(RuntimeError::TypeMismatch { .. })), "{e:?}");
}

#[test]
fn unbound_variables_fail() {
    let e = run_failure("{ y }", "");
    assert!(matches!(e, Error::Runtime(RuntimeError::UnboundVariable { name: 'y', .. })),
            "{e:?}");
    assert_eq!(e.exit_code(), 4);
}

#[test]
fn overflow_is_reported() {
    let e = run_failure("{ + ~ I _ 1 }", "9223372036854775807");
    assert!(matches!(e, Error::Runtime(RuntimeError::Overflow { .. })), "{e:?}");
}

#[test]
fn bad_input_fails() {
    let e = run_failure("{ ~ I _ }", "");
    assert!(matches!(e, Error::Runtime(RuntimeError::InputExhausted { .. })), "{e:?}");

    let e = run_failure("{ ~ I _ }", "twelve");
    assert!(matches!(e, Error::Runtime(RuntimeError::InvalidInteger { .. })), "{e:?}");
}

#[test]
fn invalid_character_codes_fail_on_output() {
    let e = run_failure("{ : : - 0 1 N N }", "");
    assert!(matches!(e, Error::Runtime(RuntimeError::InvalidCharacterCode { code: -1, .. })),
            "{e:?}");
}

#[test]
fn syntax_errors_fail_before_running() {
    let e = run_failure("{ ~ I _ } x", "1");
    assert!(matches!(e, Error::Parse(ParseError::TrailingInput { symbol: 'x', .. })),
            "{e:?}");
    assert_eq!(e.exit_code(), 3);

    let e = run_failure("{ ! 1 2 }", "");
    assert!(matches!(e, Error::Grammar(_)), "{e:?}");
    assert_eq!(e.exit_code(), 3);
}

#[test]
fn runtime_errors_point_at_the_source() {
    let e = run_failure("{\n  ! x 1 ;\n  ~ x _\n}", "");
    assert_eq!(e.to_string(),
               "Error at '~' at line 3, column 2: Type error, expected closure but found \
                integer.");
}
