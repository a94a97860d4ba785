use thiserror::Error;

/// Failures surfaced by [`Calculator::calculate`](crate::Calculator::calculate).
///
/// `InvalidExpression` is raised before the store is touched, so it is safe
/// to retry with corrected input. `UndefinedVariable` is raised mid
/// evaluation and may follow assignments already applied by the same
/// expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("invalid expression")]
    InvalidExpression,
    #[error("undefined variable '{0}'")]
    UndefinedVariable(char),
}

/// Failures of the tree builder.
///
/// Validated input can still hit `LiteralOutOfRange` and `NotAssignable`
/// (`x = 1 + 2 = 3` passes the validator but has no variable left of the
/// second `=`). The others mean the builder was fed a token stream the
/// validator would have rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("'{0}' is not an atom")]
    NotAnAtom(String),
    #[error("integer literal {0} does not fit")]
    LiteralOutOfRange(String),
    #[error("can't assign to '{0}'")]
    NotAssignable(String),
}

impl From<BuildError> for CalcError {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::LiteralOutOfRange(_) | BuildError::NotAssignable(_) =>
                log::debug!("rejected: {}", err),
            _ => log::error!("builder invariant broken: {}", err),
        }
        CalcError::InvalidExpression
    }
}
