//! Recursive descent builder.
//!
//! There is no separate grammar pass, the shape of the tree falls out of
//! how the three functions below recurse into each other:
//!
//! - `+` and `-` take the whole rest of the line as their right side, so
//!   chains associate to the right: `10 - 2 - 3` is `10 - (2 - 3)`.
//! - `*` takes a single atom as its right side and then keeps going with the
//!   product as the new left side: `2 * 3 + 4` is `(2 * 3) + 4`.
//! - `(` builds a sub-expression and leaves the matching `)` in the stream.
//!   Whichever continuation reads it next drops it and returns what it has.
//!
//! Input is expected to have passed the validator, which is what keeps the
//! paren handling and the assignment targets sound.

use crate::classify;
use crate::error::BuildError;
use crate::operator::{ArithOp, Operator};
use crate::tree::Node;
use lexers::{ExprTokenizer, Scanner};

pub struct TreeBuilder;

impl TreeBuilder {
    pub fn build_str(expr: &str) -> Result<Node, BuildError> {
        Self::build(&mut ExprTokenizer::from_str(expr))
    }

    pub fn build<I>(tokens: &mut Scanner<I>) -> Result<Node, BuildError>
    where I: Iterator<Item = String> {
        let tree = Self::expression(tokens)?;
        if let Some(rest) = tokens.peek() {
            log::trace!("ignoring trailing tokens from {:?}", rest);
        }
        log::trace!("built {}", tree);
        Ok(tree)
    }

    // atom followed by whatever continues it
    fn expression<I>(tokens: &mut Scanner<I>) -> Result<Node, BuildError>
    where I: Iterator<Item = String> {
        let lhs = Self::atom(tokens)?;
        Self::continuation(lhs, tokens)
    }

    fn atom<I>(tokens: &mut Scanner<I>) -> Result<Node, BuildError>
    where I: Iterator<Item = String> {
        let token = tokens.next().ok_or(BuildError::UnexpectedEnd)?;
        if classify::is_number(&token) {
            return token.parse::<i64>()
                .map(Node::Literal)
                .map_err(|_| BuildError::LiteralOutOfRange(token));
        }
        if let Some(var) = classify::scan_variable(&token) {
            return Ok(Node::Var(var));
        }
        if let Some(var) = classify::scan_post_increment(&token) {
            return Ok(Node::PostIncrement(var));
        }
        if let Some(var) = classify::scan_pre_increment(&token) {
            return Ok(Node::pre_increment(var));
        }
        if classify::is_open_paren(&token) {
            // the matching ')' is left for a continuation to drop
            return Self::expression(tokens);
        }
        Err(BuildError::NotAnAtom(token))
    }

    fn continuation<I>(lhs: Node, tokens: &mut Scanner<I>) -> Result<Node, BuildError>
    where I: Iterator<Item = String> {
        let token = match tokens.next() {
            Some(token) => token,
            None => return Ok(lhs),
        };
        match Operator::from_token(&token) {
            Operator::Add => Ok(Node::binary(lhs, ArithOp::Add, Self::expression(tokens)?)),
            Operator::Sub => Ok(Node::binary(lhs, ArithOp::Sub, Self::expression(tokens)?)),
            Operator::Mul => {
                let product = Node::binary(lhs, ArithOp::Mul, Self::atom(tokens)?);
                if tokens.at_end() {
                    Ok(product)
                } else {
                    Self::continuation(product, tokens)
                }
            }
            Operator::Assign => {
                let target = Self::target(&lhs)?;
                Ok(Node::assign(target, Self::expression(tokens)?))
            }
            Operator::AddAssign => {
                let target = Self::target(&lhs)?;
                Ok(Node::add_assign(target, Self::expression(tokens)?))
            }
            Operator::Unknown => {
                log::trace!("dropping {:?}", token);
                Ok(lhs)
            }
        }
    }

    fn target(lhs: &Node) -> Result<char, BuildError> {
        match lhs {
            Node::Var(name) => Ok(*name),
            other => Err(BuildError::NotAssignable(other.to_string())),
        }
    }
}
