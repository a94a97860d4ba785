#![deny(warnings)]

use crate::scanner::Scanner;

pub static WHITE: &[char] = &[' ', '\n', '\r', '\t', '\x0B', '\x0C'];
static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
static LOWER: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z'];


impl<'a> Scanner<std::str::Chars<'a>> {
    pub fn from_str(source: &'a str) -> Self {
        Scanner::new(source.chars())
    }
}

impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    pub fn accept_str(&mut self, s: &str) -> bool {
        let seq = s.chars().collect::<Vec<_>>();
        self.accept_all(&seq)
    }

    pub fn skip_ws(&mut self) -> bool {
        self.skip_all(WHITE)
    }

    // skip whitespace and forget about it
    pub fn ignore_ws(&mut self) {
        self.skip_ws();
        self.ignore();
    }

    // scan unsigned integers like [0-9]+
    pub fn scan_digits(&mut self) -> Option<String> {
        if !self.skip_all(DIGITS) {
            return None;
        }
        Some(self.extract_string())
    }

    // scan a single lowercase letter [a-z]
    pub fn scan_lowercase(&mut self) -> Option<char> {
        let c = self.accept_any(LOWER)?;
        self.ignore();
        Some(c)
    }
}

///////////////////////////////////////////////////////////////////////////////
