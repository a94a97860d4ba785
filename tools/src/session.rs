use varcalc::{CalcError, Calculator};

/// What a single input line produced.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Value(i64),
    // a blank line prints the variables and starts over
    Dump(String),
    Failed(String),
}

/// Line-oriented driver around a [`Calculator`].
pub struct Session {
    calc: Calculator,
}

impl Session {
    pub fn new() -> Self {
        Session { calc: Calculator::new() }
    }

    pub fn feed(&mut self, line: &str) -> Outcome {
        if line.trim().is_empty() {
            return Outcome::Dump(self.dump());
        }
        match self.calc.calculate(line) {
            Ok(value) => Outcome::Value(value),
            Err(err) => {
                log::debug!("{:?}: {}", line, err);
                Outcome::Failed(match err {
                    CalcError::InvalidExpression =>
                        format!("The expression '{}' is invalid.", line),
                    CalcError::UndefinedVariable(_) =>
                        format!("There is an undefined variable in the expression '{}'.", line),
                })
            }
        }
    }

    pub fn dump(&mut self) -> String {
        let vars = self.calc.variables_string();
        self.calc.reset();
        vars
    }

    pub fn is_empty(&self) -> bool {
        self.calc.is_empty()
    }
}
