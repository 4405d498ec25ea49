/// Calls.
///
/// Evaluates the callee of a `CallExp`, then either binds arguments and runs a
/// user lambda or hands over to a built-in. Also declares which built-ins the
/// root frame provides and under which names.
pub mod core;

/// The built-in closures.
///
/// Reading integers and tokens from the input, and taking lists apart.
pub mod builtin;
