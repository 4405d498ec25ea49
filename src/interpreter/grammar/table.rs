use crate::interpreter::grammar::kind::{
    KindSet,
    SyntaxKind::{self, *},
};

/// Whether a symbol stands alone or takes two subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// No children.
    Leaf,
    /// Exactly two children, left then right.
    Parent,
}

/// Everything the grammar says about one character.
///
/// Leaves always have empty acceptance sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolDescriptor {
    /// Leaf or parent.
    pub shape: Shape,
    /// The kind a node of this symbol produces.
    pub kind:  SyntaxKind,
    /// Kinds allowed as the left child.
    pub left:  KindSet,
    /// Kinds allowed as the right child.
    pub right: KindSet,
}

impl SymbolDescriptor {
    const fn leaf(kind: SyntaxKind) -> Self {
        Self { shape: Shape::Leaf,
               kind,
               left: KindSet::EMPTY,
               right: KindSet::EMPTY }
    }

    const fn parent(kind: SyntaxKind, left: KindSet, right: KindSet) -> Self {
        Self { shape: Shape::Parent,
               kind,
               left,
               right }
    }

    /// Returns `true` if nodes of this symbol are leaves.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self.shape, Shape::Leaf)
    }
}

/// Kinds that evaluate to a value.
pub const EXPRESSION: KindSet =
    KindSet::of(&[Program, AssignExp, CallExp, LambdaExp, OpExp, IfExp, Hex2, Hex, Variable]);
/// Kinds that may follow a statement.
pub const SEQUENCE_TAIL: KindSet = KindSet::of(&[ProgramCont, ProgramEnd]);
/// Kinds that may start the arguments of a call.
pub const CALL_ARGUMENTS: KindSet = KindSet::of(&[CallArgList]).union(NO_ARGUMENTS);
/// Kinds that may follow a call argument.
pub const CALL_ARGUMENT_TAIL: KindSet = KindSet::of(&[CallArgCont, CallArgEnd]);
/// Kinds that may start the parameters of a lambda.
pub const LAMBDA_PARAMETERS: KindSet = KindSet::of(&[LambdaArgList]).union(NO_ARGUMENTS);
/// Kinds that may follow a lambda parameter.
pub const LAMBDA_PARAMETER_TAIL: KindSet = KindSet::of(&[LambdaArgCont, LambdaArgEnd]);
/// The only kind a whole program may have.
pub const ROOT: KindSet = KindSet::of(&[Program]);

// `_` serves both calls and lambdas.
const NO_ARGUMENTS: KindSet = KindSet::of(&[CallArgEmpty]);
const VARIABLE: KindSet = KindSet::of(&[Variable]);
const HEX_DIGIT: KindSet = KindSet::of(&[Hex]);
const IF_BRANCH: KindSet = KindSet::of(&[IfBranch]);

/// One row of the table: an inclusive character range and its descriptor.
struct GrammarEntry {
    first:      char,
    last:       char,
    descriptor: SymbolDescriptor,
}

/// Declares the grammar table.
///
/// Each row maps a character, or an inclusive range of characters, to a
/// descriptor. The macro produces `GRAMMAR_TABLE`, searched by [`lookup`].
macro_rules! grammar_table {
    (@last $first:literal) => { $first };
    (@last $first:literal, $last:literal) => { $last };
    (
        $(
            $first:literal $(..= $last:literal)? => $descriptor:expr
        ),* $(,)?
    ) => {
        static GRAMMAR_TABLE: &[GrammarEntry] = &[
            $(
                GrammarEntry { first:      $first,
                               last:       grammar_table!(@last $first $(, $last)?),
                               descriptor: $descriptor, },
            )*
        ];
    };
}

grammar_table! {
    'g'..='z' => SymbolDescriptor::leaf(Variable),
    'A'..='Z' => SymbolDescriptor::leaf(Variable),
    'a'..='f' => SymbolDescriptor::leaf(Hex),
    '0'..='9' => SymbolDescriptor::leaf(Hex),
    '{'       => SymbolDescriptor::parent(Program, EXPRESSION, SEQUENCE_TAIL),
    ';'       => SymbolDescriptor::parent(ProgramCont, EXPRESSION, SEQUENCE_TAIL),
    '}'       => SymbolDescriptor::leaf(ProgramEnd),
    '!'       => SymbolDescriptor::parent(AssignExp, VARIABLE, EXPRESSION),
    '~'       => SymbolDescriptor::parent(CallExp, EXPRESSION, CALL_ARGUMENTS),
    '('       => SymbolDescriptor::parent(CallArgList, EXPRESSION, CALL_ARGUMENT_TAIL),
    ','       => SymbolDescriptor::parent(CallArgCont, EXPRESSION, CALL_ARGUMENT_TAIL),
    ')'       => SymbolDescriptor::leaf(CallArgEnd),
    '_'       => SymbolDescriptor::leaf(CallArgEmpty),
    '\\'      => SymbolDescriptor::parent(LambdaExp, LAMBDA_PARAMETERS, EXPRESSION),
    '['       => SymbolDescriptor::parent(LambdaArgList, VARIABLE, LAMBDA_PARAMETER_TAIL),
    '.'       => SymbolDescriptor::parent(LambdaArgCont, VARIABLE, LAMBDA_PARAMETER_TAIL),
    ']'       => SymbolDescriptor::leaf(LambdaArgEnd),
    '+'       => SymbolDescriptor::parent(OpExp, EXPRESSION, EXPRESSION),
    '-'       => SymbolDescriptor::parent(OpExp, EXPRESSION, EXPRESSION),
    '='       => SymbolDescriptor::parent(OpExp, EXPRESSION, EXPRESSION),
    '<'       => SymbolDescriptor::parent(OpExp, EXPRESSION, EXPRESSION),
    '>'       => SymbolDescriptor::parent(OpExp, EXPRESSION, EXPRESSION),
    ':'       => SymbolDescriptor::parent(OpExp, EXPRESSION, EXPRESSION),
    '?'       => SymbolDescriptor::parent(IfExp, EXPRESSION, IF_BRANCH),
    '|'       => SymbolDescriptor::parent(IfBranch, EXPRESSION, EXPRESSION),
    '#'       => SymbolDescriptor::parent(Hex2, HEX_DIGIT, HEX_DIGIT),
}

/// Looks up the descriptor of a character.
///
/// Returns `None` for characters that are not part of the language.
///
/// # Example
/// ```
/// use monoglyph::interpreter::grammar::{SyntaxKind, lookup};
///
/// assert_eq!(lookup('a').unwrap().kind, SyntaxKind::Hex);
/// assert_eq!(lookup('g').unwrap().kind, SyntaxKind::Variable);
/// assert_eq!(lookup('!').unwrap().kind, SyntaxKind::AssignExp);
/// assert!(lookup('@').is_none());
/// ```
#[must_use]
pub fn lookup(symbol: char) -> Option<&'static SymbolDescriptor> {
    GRAMMAR_TABLE.iter()
                 .find(|entry| (entry.first..=entry.last).contains(&symbol))
                 .map(|entry| &entry.descriptor)
}

/// Iterates every character the language knows, with its descriptor.
pub fn entries() -> impl Iterator<Item = (char, &'static SymbolDescriptor)> {
    GRAMMAR_TABLE.iter()
                 .flat_map(|entry| (entry.first..=entry.last).map(move |c| (c, &entry.descriptor)))
}
