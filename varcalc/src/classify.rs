//! Token predicates.
//!
//! Tokens are plain strings, these are reapplied wherever a token needs to
//! be interpreted. Each predicate matches the whole token.

use crate::operator::Operator;
use lexers::Scanner;

fn whole<T>(token: &str, scan: impl FnOnce(&mut Scanner<std::str::Chars>) -> Option<T>) -> Option<T> {
    let mut s = Scanner::from_str(token);
    let found = scan(&mut s)?;
    if s.at_end() { Some(found) } else { None }
}

// [a-z]
pub fn scan_variable(token: &str) -> Option<char> {
    whole(token, |s| s.scan_lowercase())
}

// \+\+[a-z]
pub fn scan_pre_increment(token: &str) -> Option<char> {
    whole(token, |s| if s.accept_str("++") { s.scan_lowercase() } else { None })
}

// [a-z]\+\+
pub fn scan_post_increment(token: &str) -> Option<char> {
    whole(token, |s| {
        let var = s.scan_lowercase()?;
        if s.accept_str("++") { Some(var) } else { None }
    })
}

// [0-9]+
pub fn is_number(token: &str) -> bool {
    whole(token, |s| s.scan_digits()).is_some()
}

pub fn is_variable(token: &str) -> bool {
    scan_variable(token).is_some()
}

pub fn is_pre_increment(token: &str) -> bool {
    scan_pre_increment(token).is_some()
}

pub fn is_post_increment(token: &str) -> bool {
    scan_post_increment(token).is_some()
}

pub fn is_unary_operator(token: &str) -> bool {
    is_pre_increment(token) || is_post_increment(token)
}

pub fn is_operator(token: &str) -> bool {
    Operator::from_token(token) != Operator::Unknown
}

pub fn is_open_paren(token: &str) -> bool {
    token == "("
}

pub fn is_close_paren(token: &str) -> bool {
    token == ")"
}

pub fn is_operand(token: &str) -> bool {
    is_number(token) || is_variable(token) || is_unary_operator(token)
}
