/// Runtime values.
///
/// Defines `Value` with its three kinds (integer, list, closure), the cons
/// cells lists are made of, closures and the built-in closures. Includes
/// kind checks, truthiness and identity equality.
pub mod core;
/// Lexical scopes.
///
/// A `Frame` maps single character names to values and links to the frame it
/// was created in. Closures keep their defining frame alive.
pub mod frame;
/// List helpers.
///
/// Walking cons chains, converting between text and lists of character codes,
/// and formatting a program's final value for output.
pub mod list;
