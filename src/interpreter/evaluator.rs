/// Core evaluation logic and context management.
///
/// Contains the evaluation context, the root frame every program starts in,
/// and the dispatch over syntax kinds.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles the operators of `OpExp` nodes: integer arithmetic, integer
/// comparison, identity equality and list construction.
pub mod binary;

/// Function evaluation.
///
/// Handles calls of user lambdas and of the built-in closures, including
/// binding arguments to parameters and arity checking.
pub mod function;

/// The program's input.
///
/// Reads whitespace delimited tokens for the read built-ins.
pub mod input;
