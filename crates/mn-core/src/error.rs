use thiserror::Error;

pub type MnResult<T> = Result<T, MnError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MnError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Not found: {what} '{identifier}'")]
    NotFound {
        what: &'static str,
        identifier: String,
    },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
