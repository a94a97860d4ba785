use crate::error::CalcError;

use std::collections::HashMap;
use std::fmt;

/// Variable bindings of one calculator session.
///
/// Slots are created by assignment and only go away on [`VarStore::clear`].
/// Reading a name that was never assigned is an error, there is no default.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VarStore {
    bindings: HashMap<char, i64>,
}

impl VarStore {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    pub fn get(&self, name: char) -> Option<i64> {
        self.bindings.get(&name).copied()
    }

    pub fn lookup(&self, name: char) -> Result<i64, CalcError> {
        self.get(name).ok_or_else(|| {
            log::debug!("variable '{}' is undefined", name);
            CalcError::UndefinedVariable(name)
        })
    }

    pub fn set(&mut self, name: char, value: i64) {
        self.bindings.insert(name, value);
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// An owned copy, changes to it don't reach the store.
    pub fn snapshot(&self) -> HashMap<char, i64> {
        self.bindings.clone()
    }
}

// (a=1,b=2) sorted by name, () when empty
impl fmt::Display for VarStore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut names = self.bindings.keys().collect::<Vec<_>>();
        names.sort();
        let pairs = names
            .into_iter()
            .map(|name| format!("{}={}", name, self.bindings[name]))
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "({})", pairs)
    }
}
