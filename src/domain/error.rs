//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent business logic violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("グループ： {0} が存在しません")]
    GroupNotFound(String),

    #[error("支払い者がメンバーの中にいません")]
    PayerNotMember { payer: String, group: String },

    #[error("グループ名： {0} は既に登録されています")]
    GroupAlreadyExists(String),

    #[error("支出の合計が上限を超えています")]
    AmountOverflow,

    #[error("{}", .0.join(", "))]
    InvalidGroup(Vec<String>),

    #[error("{}", .0.join(", "))]
    InvalidExpense(Vec<String>),
}

impl DomainError {
    /// Validation messages carried by this error, if any.
    pub fn messages(&self) -> Vec<String> {
        match self {
            DomainError::InvalidGroup(msgs) | DomainError::InvalidExpense(msgs) => msgs.clone(),
            other => vec![other.to_string()],
        }
    }
}
