use std::{io::BufRead, rc::Rc};

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            function::core::{BUILTIN_BINDINGS, EMPTY_LIST_BINDING},
            input::TokenReader,
        },
        grammar::SyntaxKind,
        value::{
            core::{Closure, Value},
            frame::Frame,
        },
    },
    util::num::{combine_hex, hex_digit_value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context owns the program's input. Variable state does not live here but
/// in frames, which are passed along explicitly so that closures can hold on
/// to the frame they were created in.
///
/// The evaluator expects a validated tree. Shapes the grammar rules out are
/// still reported as `MalformedTree` instead of panicking.
pub struct Context<R> {
    pub(crate) input: TokenReader<R>,
}

impl<R: BufRead> Context<R> {
    /// Creates a context whose read built-ins consume `input`.
    pub const fn new(input: R) -> Self {
        Self { input: TokenReader::new(input) }
    }

    /// Creates the root frame a program runs in.
    ///
    /// It binds the four built-in closures and the empty list.
    ///
    /// # Example
    /// ```
    /// use monoglyph::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let root = Context::<&[u8]>::prelude();
    ///
    /// assert!(matches!(root.lookup('F'), Some(Value::Closure(_))));
    /// assert!(matches!(root.lookup('N'), Some(Value::List(None))));
    /// ```
    #[must_use]
    pub fn prelude() -> Rc<Frame> {
        let root = Frame::root();

        for (name, builtin) in BUILTIN_BINDINGS {
            root.define(*name, (*builtin).into());
        }
        root.define(EMPTY_LIST_BINDING, Value::NIL);

        root
    }

    /// Runs a validated program in a fresh root frame and returns its value.
    ///
    /// # Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use monoglyph::interpreter::{evaluator::core::Context, parser::core::parse_program};
    ///
    /// let tree = Rc::new(parse_program("{ ! x #41 ; x }").unwrap());
    /// let mut context = Context::new("".as_bytes());
    ///
    /// assert_eq!(context.exec(&tree).unwrap().to_string(), "65");
    /// ```
    pub fn exec(&mut self, tree: &Rc<Node>) -> EvalResult<Value> {
        let root = Self::prelude();
        self.eval(tree, &root)
    }

    /// Evaluates a node in `frame`.
    ///
    /// This is the main entry point for evaluation. It dispatches on the node's
    /// syntax kind: sequences, assignments, calls, lambdas, operators,
    /// conditionals, literals and variables. The list, argument and parameter
    /// kinds only appear inside those and are handled by them.
    pub fn eval(&mut self, node: &Rc<Node>, frame: &Rc<Frame>) -> EvalResult<Value> {
        match node.kind() {
            SyntaxKind::Program | SyntaxKind::ProgramCont => self.eval_sequence(node, frame),
            SyntaxKind::AssignExp => self.eval_assign(node, frame),
            SyntaxKind::CallExp => self.eval_call(node, frame),
            SyntaxKind::LambdaExp => Ok(Self::eval_lambda(node, frame)),
            SyntaxKind::OpExp => self.eval_binary_op(node, frame),
            SyntaxKind::IfExp => self.eval_if(node, frame),
            SyntaxKind::Hex2 => Self::eval_hex2(node),
            SyntaxKind::Hex => Self::eval_hex(node),
            SyntaxKind::Variable => Self::eval_variable(node, frame),
            SyntaxKind::ProgramEnd
            | SyntaxKind::CallArgList
            | SyntaxKind::CallArgCont
            | SyntaxKind::CallArgEnd
            | SyntaxKind::CallArgEmpty
            | SyntaxKind::LambdaArgList
            | SyntaxKind::LambdaArgCont
            | SyntaxKind::LambdaArgEnd
            | SyntaxKind::IfBranch => Err(RuntimeError::MalformedTree { at: node.location() }),
        }
    }

    /// Evaluates a statement sequence.
    ///
    /// Statements run in order in the same frame; the sequence's value is the
    /// value of its last statement.
    fn eval_sequence(&mut self, node: &Rc<Node>, frame: &Rc<Frame>) -> EvalResult<Value> {
        let mut current = node;

        loop {
            let (statement, rest) = children(current)?;
            let value = self.eval(statement, frame)?;

            match rest.kind() {
                SyntaxKind::ProgramEnd => return Ok(value),
                SyntaxKind::ProgramCont => current = rest,
                _ => return Err(RuntimeError::MalformedTree { at: rest.location() }),
            }
        }
    }

    /// Binds the variable on the left to the value on the right in the current
    /// frame and returns the value.
    fn eval_assign(&mut self, node: &Rc<Node>, frame: &Rc<Frame>) -> EvalResult<Value> {
        let (target, expr) = children(node)?;
        if target.kind() != SyntaxKind::Variable {
            return Err(RuntimeError::MalformedTree { at: target.location() });
        }

        let value = self.eval(expr, frame)?;
        frame.define(target.symbol, value.clone());
        Ok(value)
    }

    /// Creates a closure over the current frame. The body is not evaluated.
    fn eval_lambda(node: &Rc<Node>, frame: &Rc<Frame>) -> Value {
        Value::Closure(Rc::new(Closure::User { frame:  Rc::clone(frame),
                                               lambda: Rc::clone(node), }))
    }

    /// Evaluates the condition, then exactly one branch of the `IfBranch`
    /// node.
    fn eval_if(&mut self, node: &Rc<Node>, frame: &Rc<Frame>) -> EvalResult<Value> {
        let (condition, branches) = children(node)?;
        if branches.kind() != SyntaxKind::IfBranch {
            return Err(RuntimeError::MalformedTree { at: branches.location() });
        }
        let (then_branch, else_branch) = children(branches)?;

        if self.eval(condition, frame)?.is_truthy() {
            self.eval(then_branch, frame)
        } else {
            self.eval(else_branch, frame)
        }
    }

    /// `#` followed by two digits is a byte, high digit first.
    fn eval_hex2(node: &Node) -> EvalResult<Value> {
        let (high, low) = children(node)?;
        let high = digit(high)?;
        let low = digit(low)?;

        Ok(Value::Integer(combine_hex(high, low)))
    }

    fn eval_hex(node: &Node) -> EvalResult<Value> {
        Ok(Value::Integer(digit(node)?))
    }

    fn eval_variable(node: &Node, frame: &Frame) -> EvalResult<Value> {
        frame.lookup(node.symbol)
             .ok_or(RuntimeError::UnboundVariable { name: node.symbol,
                                                    at:   node.location(), })
    }
}

/// Both children of a parent node.
///
/// # Errors
/// `MalformedTree` if `node` is a leaf.
pub(crate) fn children(node: &Node) -> EvalResult<(&Rc<Node>, &Rc<Node>)> {
    node.children()
        .ok_or(RuntimeError::MalformedTree { at: node.location() })
}

fn digit(node: &Node) -> EvalResult<i64> {
    hex_digit_value(node.symbol).ok_or(RuntimeError::MalformedTree { at: node.location() })
}
