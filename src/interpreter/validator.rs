use tracing::debug;

use crate::{
    ast::Node,
    error::GrammarViolation,
    interpreter::grammar::{KindSet, table::ROOT},
};

/// Checks a whole tree against the grammar.
///
/// The root must be a `Program`; below it every node must be of a kind its
/// parent accepts on that side.
///
/// # Example
/// ```
/// use monoglyph::interpreter::{parser::core::parse_program, validator::validate};
///
/// let good = parse_program("{ ! x 1 ; x }").unwrap();
/// assert!(validate(&good).is_ok());
///
/// let bad = parse_program("{ ! 1 2 }").unwrap();
/// let error = validate(&bad).unwrap_err();
/// assert_eq!(error.symbol, '1');
/// ```
///
/// # Errors
/// The first `GrammarViolation` found, depth first and left before right.
pub fn validate(tree: &Node) -> Result<(), GrammarViolation> {
    validate_node(tree, ROOT)?;
    debug!("program is well formed");
    Ok(())
}

/// Checks that `node` is one of `allowed`, then checks its children against
/// the sets its own descriptor declares.
///
/// # Errors
/// The first `GrammarViolation` in the subtree.
pub fn validate_node(node: &Node, allowed: KindSet) -> Result<(), GrammarViolation> {
    if !allowed.contains(node.kind()) {
        return Err(GrammarViolation { symbol: node.symbol,
                                      kind: node.kind(),
                                      position: node.position,
                                      allowed });
    }

    if let Some((left, right)) = node.children() {
        validate_node(left, node.descriptor.left)?;
        validate_node(right, node.descriptor.right)?;
    }

    Ok(())
}
