/// Numeric conversion helpers.
///
/// This module provides the conversions between digits, integers and
/// characters the evaluator needs. Every conversion that can fail returns an
/// `Option` instead of truncating or panicking.
pub mod num;
