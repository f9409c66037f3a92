//! Domain entities: core data structures

use serde::{Deserialize, Serialize};

/// Display name of a group member.
pub type MemberName = String;

/// Amount in the smallest currency unit.
pub type Amount = u64;

/// Largest amount a single expense, or a group's total, may reach.
///
/// Balances are signed, so totals must stay representable as `i64`.
pub const MAX_AMOUNT: Amount = i64::MAX as Amount;

/// A named set of members who share expenses.
///
/// Member order is significant: it is the tie-break key for fair-share
/// remainder distribution and settlement matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub members: Vec<MemberName>,
}

impl Group {
    pub fn new(name: impl Into<String>, members: Vec<MemberName>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    /// Check whether `name` is a member (exact match).
    pub fn has_member(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }
}

/// A single payment made by one member, split equally among all members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub group_name: String,
    pub expense_name: String,
    pub amount: Amount,
    pub payer: MemberName,
}

impl Expense {
    pub fn new(
        group_name: impl Into<String>,
        expense_name: impl Into<String>,
        amount: Amount,
        payer: impl Into<MemberName>,
    ) -> Self {
        Self {
            group_name: group_name.into(),
            expense_name: expense_name.into(),
            amount,
            payer: payer.into(),
        }
    }
}

/// One payment instruction from a debtor to a creditor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub from: MemberName,
    pub to: MemberName,
    pub amount: Amount,
}

/// Net position of a member within a group.
///
/// Derived on demand, never persisted. Positive `net` means the member is
/// owed money, negative means the member owes money.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Balance {
    pub member: MemberName,
    /// Sum of expenses this member paid
    pub paid: Amount,
    /// Allocated portion of the group's total spending
    pub fair_share: Amount,
    /// `paid - fair_share`
    pub net: i64,
}
