//! # monoglyph
//!
//! monoglyph is an interpreter for a small functional language in which every
//! token is a single character. Programs are written in prefix form and parsed
//! by a table driven recursive descent parser; a validator checks the tree
//! against the grammar before a tree walking evaluator runs it.
//!
//! ```
//! let output = monoglyph::get_result("{ ! s \\ [ n ] ? n | + n ~ s ( - n 1 ) 0 ; ~ s ( a ) }",
//!                                    "".as_bytes());
//! assert_eq!(output.unwrap(), "55\n");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::{io::BufRead, rc::Rc};

use tracing::debug;

use crate::{
    ast::Node,
    error::Error,
    interpreter::{
        evaluator::core::Context,
        parser::core::parse_program,
        validator::validate,
        value::{core::Value, list::render_output},
    },
};

/// Defines the syntax tree.
///
/// This module declares `Node`, the single node type of the tree, together
/// with source positions and the operators an `OpExp` node can stand for.
///
/// # Responsibilities
/// - Stores each node's character, grammar entry, position and children.
/// - Prints trees back as source or as an indented outline.
pub mod ast;
/// Provides unified error types for parsing, validation and evaluation.
///
/// Each phase has its own error type; `Error` wraps them all and maps each to
/// the process exit code.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together the grammar table, lexing, parsing, validation,
/// evaluation and value representations.
///
/// # Responsibilities
/// - Coordinates all core components.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General helpers for digits and character codes.
pub mod util;

/// Parses and validates a program without running it.
///
/// # Example
/// ```
/// assert!(monoglyph::check("{ ! x 1 ; x }").is_ok());
///
/// // `1` cannot be assigned to.
/// assert!(monoglyph::check("{ ! 1 2 }").is_err());
/// ```
pub fn check(source: &str) -> Result<Rc<Node>, Error> {
    let tree = parse_program(source)?;
    validate(&tree)?;

    Ok(Rc::new(tree))
}

/// Parses, validates and runs a program, returning its final value.
///
/// `input` feeds the read built-ins.
///
/// # Example
/// ```
/// let value = monoglyph::run("{ + ~ I _ ~ I _ }", "3 4".as_bytes()).unwrap();
/// assert_eq!(value.to_string(), "7");
/// ```
pub fn run<R: BufRead>(source: &str, input: R) -> Result<Value, Error> {
    let tree = check(source)?;
    let mut context = Context::new(input);

    Ok(context.exec(&tree)?)
}

/// Runs an already validated tree and formats its value for output.
pub fn execute<R: BufRead>(tree: &Rc<Node>, input: R) -> Result<String, Error> {
    let mut context = Context::new(input);
    let value = context.exec(tree)?;
    debug!(result = %value, "evaluated program");

    Ok(render_output(&value, tree.location())?)
}

/// Returns the output a program prints.
///
/// This function parses, validates and executes the source, reading program
/// input from `input`, and formats the final value the way the command line
/// prints it.
///
/// # Errors
/// Returns an error if parsing, validation or evaluation fails.
///
/// # Examples
/// ```
/// use monoglyph::get_result;
///
/// // A list of character codes prints as text.
/// let res = get_result("{ : : # 4 8 : # 6 9 N N }", "".as_bytes());
/// assert_eq!(res.unwrap(), "Hi\n");
///
/// // `y` is not bound.
/// let res = get_result("{ y }", "".as_bytes());
/// assert!(res.is_err());
/// ```
pub fn get_result<R: BufRead>(source: &str, input: R) -> Result<String, Error> {
    let tree = check(source)?;
    execute(&tree, input)
}
