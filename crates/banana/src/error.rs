use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    /// The call is not valid in the current episode state.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
    #[error("action {action} outside of action space Discrete({n})")]
    InvalidAction { action: usize, n: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("no environment registered under id `{0}`")]
    UnknownEnvironment(String),
}
