/// Core parsing logic.
///
/// Builds the syntax tree directly from the character source. Shapes come from
/// the grammar table: a leaf symbol is a node on its own, a parent symbol is
/// followed by its left and then its right subtree. Whether the children are of
/// an acceptable kind is left to the validator.
pub mod core;
