extern crate lexers;

pub use calculator::Calculator;
pub use error::{BuildError, CalcError};

mod calculator;
mod error;

pub use builder::TreeBuilder;
pub use operator::{ArithOp, Operator};
pub use store::VarStore;
pub use tree::Node;

pub mod builder;
#[cfg(test)]
mod builder_test;
pub mod classify;
mod operator;
mod store;
mod tree;
#[cfg(test)]
mod tree_test;
mod treeprint;
pub mod validator;
