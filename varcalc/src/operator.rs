use std::fmt;

/// Operator vocabulary of the language.
///
/// `Unknown` is what any other token maps to. It is a regular value: the
/// builder treats it as a no-op, which is how stray `)` tokens get dropped.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Assign,
    AddAssign,
    Unknown,
}

impl Operator {
    pub fn from_token(token: &str) -> Operator {
        match token {
            "+" => Operator::Add,
            "-" => Operator::Sub,
            "*" => Operator::Mul,
            "=" => Operator::Assign,
            "+=" => Operator::AddAssign,
            _ => Operator::Unknown,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match *self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Assign => "=",
            Operator::AddAssign => "+=",
            Operator::Unknown => "",
        }
    }
}

/// The operators a binary tree node may hold.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
}

impl ArithOp {
    // two's complement wraparound on overflow
    pub fn apply(self, lhs: i64, rhs: i64) -> i64 {
        match self {
            ArithOp::Add => lhs.wrapping_add(rhs),
            ArithOp::Sub => lhs.wrapping_sub(rhs),
            ArithOp::Mul => lhs.wrapping_mul(rhs),
        }
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let op = match *self {
            ArithOp::Add => Operator::Add,
            ArithOp::Sub => Operator::Sub,
            ArithOp::Mul => Operator::Mul,
        };
        write!(f, "{}", op.symbol())
    }
}
