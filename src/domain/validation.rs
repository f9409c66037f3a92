//! Validation of candidate groups and expenses
//!
//! Each rule is checked independently; all violations are reported in
//! rule order. An empty result means the candidate is valid.

use itertools::Itertools;

use crate::domain::{Expense, Group, MAX_AMOUNT};

pub const GROUP_NAME_REQUIRED: &str = "グループ名は必須です";
pub const MEMBERS_TOO_FEW: &str = "メンバーは2人以上必要です";
pub const MEMBERS_DUPLICATED: &str = "メンバー名が重複しています";

pub const EXPENSE_NAME_REQUIRED: &str = "支出名は必須です";
pub const AMOUNT_NOT_POSITIVE: &str = "金額は1以上の整数で入力してください";
pub const AMOUNT_TOO_LARGE: &str = "金額が大きすぎます";
pub const PAYER_REQUIRED: &str = "支払い者は必須です";

const MIN_MEMBERS: usize = 2;

/// Validate a candidate group.
pub fn validate_group(candidate: &Group) -> Vec<String> {
    let mut errors = Vec::new();

    if candidate.name.trim().is_empty() {
        errors.push(GROUP_NAME_REQUIRED.to_string());
    }
    if candidate.members.len() < MIN_MEMBERS {
        errors.push(MEMBERS_TOO_FEW.to_string());
    }
    if !candidate.members.iter().all_unique() {
        errors.push(MEMBERS_DUPLICATED.to_string());
    }

    errors
}

/// Validate the shape of a candidate expense.
///
/// Group existence and payer membership are not checked here, they need
/// the store and belong to `ExpenseService::add_expense`.
pub fn validate_expense(candidate: &Expense) -> Vec<String> {
    let mut errors = Vec::new();

    if candidate.expense_name.trim().is_empty() {
        errors.push(EXPENSE_NAME_REQUIRED.to_string());
    }
    if candidate.amount == 0 {
        errors.push(AMOUNT_NOT_POSITIVE.to_string());
    } else if candidate.amount > MAX_AMOUNT {
        errors.push(AMOUNT_TOO_LARGE.to_string());
    }
    if candidate.payer.trim().is_empty() {
        errors.push(PAYER_REQUIRED.to_string());
    }

    errors
}
