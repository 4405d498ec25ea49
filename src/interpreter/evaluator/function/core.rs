use std::{io::BufRead, rc::Rc};

use tracing::trace;

use crate::{
    ast::{Location, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, children},
            function::builtin,
        },
        grammar::SyntaxKind,
        value::{
            core::{Builtin, Closure, Value},
            frame::Frame,
        },
    },
};

/// Defines the names the root frame binds built-ins to.
///
/// Each entry provides a single character name and the built-in bound to it.
/// The macro produces `BUILTIN_BINDINGS`, read by [`Context::prelude`].
macro_rules! builtin_closures {
    (
        $(
            $name:literal => $builtin:ident
        ),* $(,)?
    ) => {
        /// Names of the built-in closures in the root frame.
        pub const BUILTIN_BINDINGS: &[(char, Builtin)] = &[
            $(
                ($name, Builtin::$builtin),
            )*
        ];
    };
}

builtin_closures! {
    'I' => ReadInt,
    'S' => ReadToken,
    'F' => First,
    'R' => Rest,
}

/// Name of the empty list in the root frame.
pub const EMPTY_LIST_BINDING: char = 'N';

impl<R: BufRead> Context<R> {
    /// Evaluates a call.
    ///
    /// The callee is evaluated first and must be a closure. A user lambda runs
    /// in a new frame below the frame it captured; the arguments are evaluated
    /// in the caller's frame. Built-ins decide for themselves which arguments
    /// they evaluate.
    ///
    /// # Errors
    /// - `TypeMismatch` if the callee is not a closure.
    /// - `ArityMismatch` if argument and parameter counts differ.
    /// - Anything raised while evaluating arguments or the body.
    pub(crate) fn eval_call(&mut self, node: &Rc<Node>, frame: &Rc<Frame>) -> EvalResult<Value> {
        let (callee, arguments) = children(node)?;
        let callee = self.eval(callee, frame)?;
        let closure = Rc::clone(callee.as_closure(node.location())?);

        trace!(callee = %closure, at = %node.location(), "call");

        match &*closure {
            Closure::User { frame: captured,
                            lambda, } => {
                self.call_user_defined_function(lambda, captured, arguments, frame, node.location())
            },
            Closure::Builtin(builtin) => {
                self.call_builtin(*builtin, arguments, frame, node.location())
            },
        }
    }

    /// Executes a user lambda.
    ///
    /// Parameters and arguments are walked in lockstep; each argument is
    /// evaluated in `caller` and bound to its parameter in the call frame.
    /// Both chains have to end together.
    fn call_user_defined_function(&mut self,
                                  lambda: &Rc<Node>,
                                  captured: &Rc<Frame>,
                                  arguments: &Rc<Node>,
                                  caller: &Rc<Frame>,
                                  at: Location)
                                  -> EvalResult<Value> {
        let (parameters, body) = children(lambda)?;
        let call_frame = Frame::child(captured);

        let mut parameter = parameters;
        let mut argument = arguments;
        loop {
            match (next_link(parameter)?, next_link(argument)?) {
                (None, None) => break,
                (Some((name, next_parameter)), Some((expr, next_argument))) => {
                    if name.kind() != SyntaxKind::Variable {
                        return Err(RuntimeError::MalformedTree { at: name.location() });
                    }

                    let value = self.eval(expr, caller)?;
                    call_frame.define(name.symbol, value);

                    parameter = next_parameter;
                    argument = next_argument;
                },
                _ => {
                    return Err(RuntimeError::ArityMismatch { expected: chain_length(parameters)?,
                                                             found: chain_length(arguments)?,
                                                             at });
                },
            }
        }

        self.eval(body, &call_frame)
    }

    /// Executes a built-in.
    ///
    /// The read built-ins ignore their arguments without evaluating them. The
    /// list built-ins evaluate their first argument only.
    fn call_builtin(&mut self,
                    builtin: Builtin,
                    arguments: &Rc<Node>,
                    frame: &Rc<Frame>,
                    at: Location)
                    -> EvalResult<Value> {
        match builtin {
            Builtin::ReadInt => builtin::read_int(&mut self.input, at),
            Builtin::ReadToken => builtin::read_token(&mut self.input, at),
            Builtin::First | Builtin::Rest => {
                let Some((expr, _)) = next_link(arguments)? else {
                    return Err(RuntimeError::ArityMismatch { expected: 1,
                                                             found: 0,
                                                             at });
                };

                let list = self.eval(expr, frame)?;
                if builtin == Builtin::First {
                    builtin::first(&list, expr.location())
                } else {
                    builtin::rest(&list, expr.location())
                }
            },
        }
    }
}

/// Splits one link off an argument or parameter chain.
///
/// Returns the element and the rest of the chain, or `None` at the end
/// (`)`, `]` or `_`).
fn next_link(link: &Node) -> EvalResult<Option<(&Rc<Node>, &Rc<Node>)>> {
    match link.kind() {
        SyntaxKind::CallArgList
        | SyntaxKind::CallArgCont
        | SyntaxKind::LambdaArgList
        | SyntaxKind::LambdaArgCont => children(link).map(Some),
        SyntaxKind::CallArgEnd | SyntaxKind::LambdaArgEnd | SyntaxKind::CallArgEmpty => Ok(None),
        _ => Err(RuntimeError::MalformedTree { at: link.location() }),
    }
}

/// Counts the elements of an argument or parameter chain.
fn chain_length(chain: &Node) -> EvalResult<usize> {
    let mut length = 0;
    let mut link = chain;

    while let Some((_, rest)) = next_link(link)? {
        length += 1;
        link = rest;
    }

    Ok(length)
}
