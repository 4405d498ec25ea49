/// Syntax kinds and sets of them.
///
/// Every symbol of the language produces one syntax kind, and every parent
/// symbol declares which kinds it accepts on each side. Kind sets are small
/// constant bit sets so the table can be built at compile time.
pub mod kind;
/// The grammar table itself.
///
/// Maps each source character to its symbol descriptor. The table is a single
/// static slice; there is no way to change it at runtime.
pub mod table;

pub use kind::{KindSet, SyntaxKind};
pub use table::{Shape, SymbolDescriptor, entries, lookup};
