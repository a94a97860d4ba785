#![deny(warnings)]

use crate::char_scanner::WHITE;
use crate::scanner::Scanner;

static PARENS: &[char] = &['(', ')'];

// Splits on whitespace, parens are always tokens of their own
// regardless of surrounding space: "(x+1)" -> ["(", "x+1", ")"]
pub struct ExprTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    stops: Vec<char>,
}

impl<I: Iterator<Item=char>> ExprTokenizer<I> {
    pub fn new(source: I) -> Self {
        let stops = WHITE.iter().chain(PARENS.iter()).cloned().collect();
        ExprTokenizer{src: Scanner::new(source), stops}
    }

    pub fn scanner(source: I) -> Scanner<Self> {
        Scanner::new(Self::new(source))
    }
}

impl<'a> ExprTokenizer<std::str::Chars<'a>> {
    pub fn from_str(source: &'a str) -> Scanner<Self> {
        Self::scanner(source.chars())
    }
}

impl<I: Iterator<Item=char>> Iterator for ExprTokenizer<I> {
    type Item = String;
    fn next(&mut self) -> Option<Self::Item> {
        self.src.ignore_ws();
        if self.src.accept_any(PARENS).is_some() {
            Some(self.src.extract_string())
        } else if self.src.until_any(&self.stops) {
            Some(self.src.extract_string())
        } else {
            None
        }
    }
}
