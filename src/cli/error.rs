//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::exitcode;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        ApplicationError::Domain(e).into()
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Domain error behind this error, if any.
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            CliError::Infra(InfraError::Application(ApplicationError::Domain(e))) => Some(e),
            _ => None,
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => exitcode::IOERR,
                InfraError::Application(ApplicationError::Store(_)) => exitcode::IOERR,
                InfraError::Application(ApplicationError::Config { .. }) => exitcode::CONFIG,
                InfraError::Application(ApplicationError::Domain(d)) => match d {
                    DomainError::GroupNotFound(_) => exitcode::NOINPUT,
                    DomainError::PayerNotMember { .. }
                    | DomainError::GroupAlreadyExists(_)
                    | DomainError::AmountOverflow
                    | DomainError::InvalidGroup(_)
                    | DomainError::InvalidExpense(_) => exitcode::DATAERR,
                },
            },
        }
    }
}
