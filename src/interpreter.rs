/// The evaluator module executes syntax trees and computes results.
///
/// The evaluator walks a validated tree, threading frames through lambdas and
/// calls, performs the integer and list operations, and produces the
/// program's final value.
///
/// # Responsibilities
/// - Evaluates every expression kind of the grammar.
/// - Creates closures and runs them in frames below the one they captured.
/// - Reports runtime errors such as unbound variables or arity mismatches.
pub mod evaluator;
/// The grammar table.
///
/// Every source character has one entry: whether it is a leaf or a parent,
/// the syntax kind it produces and, for parents, which kinds each child may
/// have. Parser and validator both consult it.
pub mod grammar;
/// The lexer turns source text into positioned characters.
///
/// Whitespace is skipped, everything else is a single character token carrying
/// its line and column.
pub mod lexer;
/// The parser module builds the syntax tree from characters.
///
/// Parsing only looks at node shapes; kinds are checked afterwards by the
/// validator.
///
/// # Responsibilities
/// - Turns the character stream into a tree of leaves and two-child parents.
/// - Reports characters outside the grammar, truncated input and trailing
///   input.
pub mod parser;
/// Checks a parsed tree against the grammar's child kinds.
pub mod validator;
/// The value module defines the runtime data of evaluation.
///
/// Integers, immutable cons lists and closures, plus the frames closures
/// capture.
pub mod value;
