use std::{fmt, rc::Rc};

use crate::interpreter::grammar::{SymbolDescriptor, SyntaxKind};

/// A point in the source text.
///
/// Lines are counted from 1, columns from 0. The column is the one the
/// character itself occupies; tabs advance the column by four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// The source line, starting at 1.
    pub line:   usize,
    /// The column on that line, starting at 0.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// The character of a node together with where it was read.
///
/// Runtime errors carry a `Location` so they can point back into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// The source character of the node.
    pub symbol:   char,
    /// Where the character was read.
    pub position: Position,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} at {}", self.symbol, self.position)
    }
}

/// The operators that an `OpExp` node can stand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `=`
    Equal,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `:`
    Cons,
}

impl BinaryOperator {
    /// Maps an operator character to its operator.
    ///
    /// # Example
    /// ```
    /// use monoglyph::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol(':'), Some(BinaryOperator::Cons));
    /// assert_eq!(BinaryOperator::from_symbol('!'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '=' => Some(Self::Equal),
            '<' => Some(Self::Less),
            '>' => Some(Self::Greater),
            ':' => Some(Self::Cons),
            _ => None,
        }
    }
}

/// A node of the abstract syntax tree.
///
/// Every node is one source character. Its descriptor comes from the grammar
/// table at parse time and decides the node's shape: leaves have no children,
/// parents have exactly two. Children are reference counted so that a closure
/// can keep the lambda it was created from alive after evaluation moves on.
///
/// Nodes are never mutated after construction.
#[derive(Debug, PartialEq)]
pub struct Node {
    /// The source character.
    pub symbol:     char,
    /// The grammar table entry of `symbol`.
    pub descriptor: &'static SymbolDescriptor,
    /// Where `symbol` was read.
    pub position:   Position,
    children:       Option<(Rc<Self>, Rc<Self>)>,
}

impl Node {
    /// Creates a childless node.
    #[must_use]
    pub const fn leaf(symbol: char,
                      descriptor: &'static SymbolDescriptor,
                      position: Position)
                      -> Self {
        Self { symbol,
               descriptor,
               position,
               children: None }
    }

    /// Creates a node owning two subtrees.
    #[must_use]
    pub fn parent(symbol: char,
                  descriptor: &'static SymbolDescriptor,
                  position: Position,
                  left: Self,
                  right: Self)
                  -> Self {
        Self { symbol,
               descriptor,
               position,
               children: Some((Rc::new(left), Rc::new(right))) }
    }

    /// The syntax kind this node produces.
    #[must_use]
    pub const fn kind(&self) -> SyntaxKind {
        self.descriptor.kind
    }

    /// The node's character and position.
    #[must_use]
    pub const fn location(&self) -> Location {
        Location { symbol:   self.symbol,
                   position: self.position, }
    }

    /// Returns `true` if the node has no children.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Both children, if this is a parent node.
    #[must_use]
    pub fn children(&self) -> Option<(&Rc<Self>, &Rc<Self>)> {
        self.children.as_ref().map(|(left, right)| (left, right))
    }

    /// The left child, if any.
    #[must_use]
    pub fn left(&self) -> Option<&Rc<Self>> {
        self.children.as_ref().map(|(left, _)| left)
    }

    /// The right child, if any.
    #[must_use]
    pub fn right(&self) -> Option<&Rc<Self>> {
        self.children.as_ref().map(|(_, right)| right)
    }

    /// Counts the nodes of this subtree.
    #[must_use]
    pub fn size(&self) -> usize {
        1 + self.children().map_or(0, |(left, right)| left.size() + right.size())
    }

    /// Renders the tree one symbol per line, indenting each level by one
    /// space.
    ///
    /// # Example
    /// ```
    /// use monoglyph::interpreter::parser::core::parse_program;
    ///
    /// let tree = parse_program("{ x }").unwrap();
    ///
    /// assert_eq!(tree.render_tree(), "{\n x\n }\n");
    /// ```
    #[must_use]
    pub fn render_tree(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    fn render_into(&self, out: &mut String, level: usize) {
        out.extend(std::iter::repeat_n(' ', level));
        out.push(self.symbol);
        out.push('\n');

        if let Some((left, right)) = self.children() {
            left.render_into(out, level + 1);
            right.render_into(out, level + 1);
        }
    }
}

/// Writes the tree back out in prefix order without whitespace.
///
/// Parsing the output again yields an equal tree, apart from positions.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)?;

        if let Some((left, right)) = self.children() {
            write!(f, "{left}{right}")?;
        }

        Ok(())
    }
}

