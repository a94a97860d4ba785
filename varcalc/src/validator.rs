//! Structural checks run on the raw line before any tree is built.
//!
//! Four checks, in order, stopping at the first failure:
//!
//! 1. only letters, digits, `+ - * = ( )` and whitespace (and not empty),
//! 2. balanced parentheses,
//! 3. the line is an assignment: a lone `++x`/`x++`, or a variable followed
//!    by `=` or `+=`,
//! 4. operands, operators and parens alternate properly.
//!
//! ```
//! use varcalc::validator::{check, validate, Rejection};
//!
//! assert!(validate("x += (1 + 2) * ++y + z++"));
//! assert!(!validate("x = 5 5"));
//! assert_eq!(check("y"), Err(Rejection::NotAnAssignment));
//! ```

use crate::classify;
use crate::operator::Operator;
use lexers::ExprTokenizer;
use thiserror::Error;

/// Why a line was rejected. Only useful for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("empty expression")]
    Empty,
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),
    #[error("unbalanced parentheses")]
    UnbalancedParens,
    #[error("not an assignment expression")]
    NotAnAssignment,
    #[error("expected operand after {previous:?} but found {token:?}")]
    UnexpectedOperator { previous: Option<String>, token: String },
    #[error("unexpected closing parenthesis after {previous:?}")]
    UnexpectedCloseParen { previous: Option<String> },
    #[error("unexpected {token:?} after {previous:?}")]
    UnexpectedOperand { previous: Option<String>, token: String },
    #[error("invalid token {0:?}")]
    InvalidToken(String),
    #[error("expression ends with an operator")]
    DanglingOperator,
}

pub fn validate(expression: &str) -> bool {
    match check(expression) {
        Ok(()) => true,
        Err(reason) => {
            log::debug!("rejected {:?}: {}", expression, reason);
            false
        }
    }
}

pub fn check(expression: &str) -> Result<(), Rejection> {
    check_characters(expression)?;
    check_parens(expression)?;
    check_assignment(expression)?;
    check_structure(expression)
}

// ASCII whitespace plus vertical tab
fn is_blank(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

fn allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || "+-*=()".contains(c) || is_blank(c)
}

fn check_characters(expression: &str) -> Result<(), Rejection> {
    if expression.is_empty() {
        return Err(Rejection::Empty);
    }
    match expression.chars().find(|&c| !allowed(c)) {
        Some(c) => Err(Rejection::InvalidCharacter(c)),
        None => Ok(()),
    }
}

fn check_parens(expression: &str) -> Result<(), Rejection> {
    let mut balance = 0isize;
    for token in ExprTokenizer::from_str(expression) {
        if classify::is_open_paren(&token) {
            balance += 1;
        } else if classify::is_close_paren(&token) {
            balance -= 1;
        }
        if balance < 0 {
            return Err(Rejection::UnbalancedParens);
        }
    }
    if balance != 0 {
        return Err(Rejection::UnbalancedParens);
    }
    Ok(())
}

// the whole raw line counts as a bare increment, surrounding space included
fn check_assignment(expression: &str) -> Result<(), Rejection> {
    if classify::is_unary_operator(expression) {
        return Ok(());
    }
    let mut tokens = ExprTokenizer::from_str(expression);
    match (tokens.next(), tokens.next()) {
        (Some(target), Some(op)) if classify::is_variable(&target) => {
            match Operator::from_token(&op) {
                Operator::Assign | Operator::AddAssign => Ok(()),
                _ => Err(Rejection::NotAnAssignment),
            }
        }
        _ => Err(Rejection::NotAnAssignment),
    }
}

fn check_structure(expression: &str) -> Result<(), Rejection> {
    if expression.trim().is_empty() {
        return Err(Rejection::Empty);
    }

    let mut previous: Option<String> = None;
    let mut expecting_operand = true;

    for token in ExprTokenizer::from_str(expression) {
        let prev = previous.as_deref();
        if classify::is_operator(&token) {
            if expecting_operand {
                return Err(Rejection::UnexpectedOperator { previous, token });
            }
            expecting_operand = true;
        } else if classify::is_close_paren(&token) {
            if expecting_operand || prev.map_or(true, classify::is_open_paren) {
                return Err(Rejection::UnexpectedCloseParen { previous });
            }
        } else if classify::is_operand(&token) || classify::is_open_paren(&token) {
            let bad_previous = prev.map_or(false, |p| {
                classify::is_operand(p) || classify::is_close_paren(p)
            });
            if !expecting_operand || bad_previous {
                return Err(Rejection::UnexpectedOperand { previous, token });
            }
            if classify::is_operand(&token) {
                expecting_operand = false;
            }
        } else {
            return Err(Rejection::InvalidToken(token));
        }
        previous = Some(token);
    }

    if expecting_operand {
        return Err(Rejection::DanglingOperator);
    }
    Ok(())
}
