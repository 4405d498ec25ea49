use std::fmt;

/// The grammar category a symbol produces.
///
/// The validator compares a node's kind against the set its parent accepts on
/// that side; the evaluator dispatches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    /// `{`, the start of a statement sequence.
    Program,
    /// `;`, a further statement of a sequence.
    ProgramCont,
    /// `}`, the end of a sequence.
    ProgramEnd,
    /// `!`, binding a variable in the current frame.
    AssignExp,
    /// `~`, a call.
    CallExp,
    /// `\`, a lambda.
    LambdaExp,
    /// `(`, the first call argument.
    CallArgList,
    /// `,`, a further call argument.
    CallArgCont,
    /// `)`, the end of the call arguments.
    CallArgEnd,
    /// `_`, an empty argument or parameter list.
    CallArgEmpty,
    /// `[`, the first lambda parameter.
    LambdaArgList,
    /// `.`, a further lambda parameter.
    LambdaArgCont,
    /// `]`, the end of the lambda parameters.
    LambdaArgEnd,
    /// A binary operator.
    OpExp,
    /// `?`, a conditional.
    IfExp,
    /// `|`, the two branches of a conditional.
    IfBranch,
    /// `#`, a two digit hexadecimal literal.
    Hex2,
    /// A single hexadecimal digit.
    Hex,
    /// A variable name.
    Variable,
}

impl SyntaxKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 19] = [Self::Program,
                                 Self::ProgramCont,
                                 Self::ProgramEnd,
                                 Self::AssignExp,
                                 Self::CallExp,
                                 Self::LambdaExp,
                                 Self::CallArgList,
                                 Self::CallArgCont,
                                 Self::CallArgEnd,
                                 Self::CallArgEmpty,
                                 Self::LambdaArgList,
                                 Self::LambdaArgCont,
                                 Self::LambdaArgEnd,
                                 Self::OpExp,
                                 Self::IfExp,
                                 Self::IfBranch,
                                 Self::Hex2,
                                 Self::Hex,
                                 Self::Variable];

    /// The kind's name as used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Program => "Program",
            Self::ProgramCont => "ProgramCont",
            Self::ProgramEnd => "ProgramEnd",
            Self::AssignExp => "AssignExp",
            Self::CallExp => "CallExp",
            Self::LambdaExp => "LambdaExp",
            Self::CallArgList => "CallArgList",
            Self::CallArgCont => "CallArgCont",
            Self::CallArgEnd => "CallArgEnd",
            Self::CallArgEmpty => "CallArgEmpty",
            Self::LambdaArgList => "LambdaArgList",
            Self::LambdaArgCont => "LambdaArgCont",
            Self::LambdaArgEnd => "LambdaArgEnd",
            Self::OpExp => "OpExp",
            Self::IfExp => "IfExp",
            Self::IfBranch => "IfBranch",
            Self::Hex2 => "Hex2",
            Self::Hex => "Hex",
            Self::Variable => "Variable",
        }
    }

    const fn bit(self) -> u32 {
        1 << self as u32
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of syntax kinds.
///
/// # Example
/// ```
/// use monoglyph::interpreter::grammar::{KindSet, SyntaxKind};
///
/// let set = KindSet::of(&[SyntaxKind::Hex, SyntaxKind::Variable]);
///
/// assert!(set.contains(SyntaxKind::Hex));
/// assert!(!set.contains(SyntaxKind::Program));
/// assert_eq!(set.to_string(), "{Hex, Variable}");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KindSet(u32);

impl KindSet {
    /// The set accepting nothing, used by leaves.
    pub const EMPTY: Self = Self(0);

    /// Builds a set from a list of kinds.
    #[must_use]
    pub const fn of(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0;
        let mut index = 0;
        while index < kinds.len() {
            bits |= kinds[index].bit();
            index += 1;
        }
        Self(bits)
    }

    /// The kinds in either set.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `true` if `kind` is a member.
    #[must_use]
    pub const fn contains(self, kind: SyntaxKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// Returns `true` if the set has no members.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the members in declaration order.
    pub fn iter(self) -> impl Iterator<Item = SyntaxKind> {
        SyntaxKind::ALL.into_iter().filter(move |kind| self.contains(*kind))
    }
}

impl fmt::Display for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;

        for (index, kind) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{kind}")?;
        }

        write!(f, "}}")
    }
}

impl fmt::Debug for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KindSet{self}")
    }
}
