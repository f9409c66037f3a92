//! Settlement calculation
//!
//! Pure functions from a member list and a set of expenses to per-member
//! balances and a list of payments that zeroes every balance.
//!
//! Fair shares use integer division; the `total % n` leftover units go one
//! each to the first members in declared order, so shares always sum to
//! the total. Settlements are matched greedily: the largest remaining
//! creditor against the largest remaining debtor, ties broken by declared
//! member order.

use tracing::trace;

use crate::domain::{Amount, Balance, DomainError, Expense, MemberName, Settlement, MAX_AMOUNT};

/// Compute each member's balance, in declared member order.
///
/// Expenses paid by someone outside `members` are ignored, so that the
/// balances always sum to zero.
///
/// # Errors
/// `DomainError::AmountOverflow` if the counted expenses sum past `MAX_AMOUNT`.
pub fn compute_balances(
    members: &[MemberName],
    expenses: &[Expense],
) -> Result<Vec<Balance>, DomainError> {
    let n = members.len() as Amount;
    if n == 0 {
        return Ok(Vec::new());
    }

    let counted: Vec<&Expense> = expenses
        .iter()
        .filter(|e| members.contains(&e.payer))
        .collect();

    let total = counted
        .iter()
        .try_fold(0 as Amount, |acc, e| acc.checked_add(e.amount))
        .filter(|total| *total <= MAX_AMOUNT)
        .ok_or(DomainError::AmountOverflow)?;
    let base = total / n;
    let remainder = total % n;
    trace!(total, base, remainder, "fair share split");

    // paid and fair_share are both bounded by total, which fits in i64
    let balances = members
        .iter()
        .enumerate()
        .map(|(i, member)| {
            let fair_share = if (i as Amount) < remainder {
                base + 1
            } else {
                base
            };
            let paid: Amount = counted
                .iter()
                .filter(|e| &e.payer == member)
                .map(|e| e.amount)
                .sum();
            Balance {
                member: member.clone(),
                paid,
                fair_share,
                net: paid as i64 - fair_share as i64,
            }
        })
        .collect();
    Ok(balances)
}

/// Remaining balance of one participant during matching.
#[derive(Debug)]
struct Position<'a> {
    /// Index in declared member order (tie-break key)
    order: usize,
    member: &'a str,
    /// Absolute amount still to receive (creditor) or pay (debtor)
    remaining: Amount,
}

/// Pick the position with the largest remaining amount, earliest member on ties.
fn pick_largest(positions: &[Position<'_>]) -> Option<usize> {
    positions
        .iter()
        .enumerate()
        .filter(|(_, p)| p.remaining > 0)
        .max_by(|(_, a), (_, b)| {
            a.remaining
                .cmp(&b.remaining)
                .then_with(|| b.order.cmp(&a.order))
        })
        .map(|(idx, _)| idx)
}

/// Compute the payments that settle every member's balance.
///
/// Deterministic for identical input; produces at most `members.len() - 1`
/// settlements. Returns an empty list when nobody owes anything.
///
/// # Errors
/// Same as [`compute_balances`].
pub fn calculate_settlements(
    members: &[MemberName],
    expenses: &[Expense],
) -> Result<Vec<Settlement>, DomainError> {
    let balances = compute_balances(members, expenses)?;

    let mut creditors = Vec::new();
    let mut debtors = Vec::new();
    for (order, balance) in balances.iter().enumerate() {
        let position = Position {
            order,
            member: &balance.member,
            remaining: balance.net.unsigned_abs(),
        };
        if balance.net > 0 {
            creditors.push(position);
        } else if balance.net < 0 {
            debtors.push(position);
        }
    }

    let mut settlements = Vec::new();
    while let (Some(c), Some(d)) = (pick_largest(&creditors), pick_largest(&debtors)) {
        let amount = creditors[c].remaining.min(debtors[d].remaining);
        creditors[c].remaining -= amount;
        debtors[d].remaining -= amount;

        trace!(
            from = debtors[d].member,
            to = creditors[c].member,
            amount,
            "settlement"
        );
        settlements.push(Settlement {
            from: debtors[d].member.to_string(),
            to: creditors[c].member.to_string(),
            amount,
        });
    }

    Ok(settlements)
}
