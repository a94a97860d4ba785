use crate::builder::TreeBuilder;
use crate::error::CalcError;
use crate::store::VarStore;
use crate::validator;

use std::collections::HashMap;

/// One calculator session: a variable store plus the
/// validate → tokenize → build → evaluate pipeline that feeds it.
///
/// ```
/// use varcalc::{Calculator, CalcError};
///
/// let mut calc = Calculator::new();
/// assert_eq!(calc.calculate("x = 1"), Ok(1));
/// assert_eq!(calc.calculate("w = x++ + 1"), Ok(2));
/// assert_eq!(calc.variables_string(), "(w=2,x=2)");
/// assert_eq!(calc.calculate("w = y + 1"), Err(CalcError::UndefinedVariable('y')));
/// calc.reset();
/// assert_eq!(calc.variables_string(), "()");
/// ```
#[derive(Debug, Default)]
pub struct Calculator {
    store: VarStore,
}

impl Calculator {
    pub fn new() -> Self {
        Calculator { store: VarStore::new() }
    }

    pub fn validate(expression: &str) -> bool {
        validator::validate(expression)
    }

    /// Evaluates one line against the session's variables.
    ///
    /// Rejected lines leave the store untouched. A line that fails on an
    /// undefined variable keeps whatever it had assigned before failing.
    pub fn calculate(&mut self, expression: &str) -> Result<i64, CalcError> {
        if !validator::validate(expression) {
            return Err(CalcError::InvalidExpression);
        }
        let tree = TreeBuilder::build_str(expression)?;
        let result = tree.eval(&mut self.store);
        match &result {
            Ok(value) => log::debug!("{} => {}", tree, value),
            Err(err) => log::debug!("{} failed: {}", tree, err),
        }
        result
    }

    /// A copy of the current bindings.
    pub fn variables(&self) -> HashMap<char, i64> {
        self.store.snapshot()
    }

    /// Bindings sorted by name, like `(a=1,b=2)`.
    pub fn variables_string(&self) -> String {
        self.store.to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn reset(&mut self) {
        log::debug!("reset {} variable(s)", self.store.len());
        self.store.clear();
    }
}
