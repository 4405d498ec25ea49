/// Dispatch from operator to handler.
pub mod core;

/// Integer addition and subtraction.
pub mod scalar;

/// `<`, `>` and `=`.
pub mod comparison;

/// Building pairs with `:`.
pub mod list;
