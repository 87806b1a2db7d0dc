//! Rental transaction decision rules.
//!
//! The engine runs each multi-step operation as write-then-verify: the
//! mutation is issued unconditionally inside a transaction, the relevant
//! counters are re-read, and one of these pure functions decides whether
//! the transaction commits or rolls back. Business-rule failures are the
//! `RolledBack` branch of [`Outcome`], never an error.

use serde::Serialize;

use crate::types::DbId;

/// Rental row status: currently held.
pub const RENTAL_STATUS_OPEN: i64 = 1;

/// Rental row status: returned. Rows are closed, never deleted.
pub const RENTAL_STATUS_CLOSED: i64 = 0;

/// How a transactional operation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// All invariant checks passed; the writes are durable.
    Committed,
    /// An invariant check failed; every write was undone.
    RolledBack,
    /// Nothing to do (same-plan change); the write was undone.
    Noop,
}

/// Diagnostics for a `rent` attempt: the three values the decision rule saw.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RentCheck {
    pub valid_movie: bool,
    /// OPEN-rental count for the movie *after* the insert. Must be exactly 1.
    pub open_count_after: i64,
    /// Remaining-rentals for the customer *before* the insert.
    pub remaining_before: i64,
}

/// Diagnostics for a `return` attempt.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReturnCheck {
    pub valid_movie: bool,
    pub remaining_before: i64,
    /// Must equal `remaining_before + 1` for the return to commit.
    pub remaining_after: i64,
}

/// Diagnostics for a plan-change attempt.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlanChangeCheck {
    pub current_plan_id: DbId,
    pub new_plan_id: DbId,
    pub current_max_rentals: i64,
    pub new_max_rentals: i64,
    /// Remaining-rentals under the current plan, read before the write.
    pub remaining_before: i64,
}

impl PlanChangeCheck {
    /// Movies the customer currently holds under the old plan.
    pub fn currently_rented(&self) -> i64 {
        self.current_max_rentals - self.remaining_before
    }
}

/// Decide a `rent` attempt.
///
/// Rolls back if the movie id was invalid, if the post-insert OPEN count
/// for the movie is not exactly 1 (someone else already held it, or the
/// insert left the store inconsistent), or if the customer had no
/// remaining capacity before the insert.
pub fn decide_rent(check: &RentCheck) -> Outcome {
    if !check.valid_movie || check.open_count_after != 1 || check.remaining_before == 0 {
        Outcome::RolledBack
    } else {
        Outcome::Committed
    }
}

/// Decide a `return` attempt.
///
/// A valid return frees exactly one slot: `after - 1 == before`. Anything
/// else (invalid movie, no matching OPEN row, several rows closed at once)
/// rolls back.
pub fn decide_return(check: &ReturnCheck) -> Outcome {
    if !check.valid_movie || check.remaining_after - 1 != check.remaining_before {
        Outcome::RolledBack
    } else {
        Outcome::Committed
    }
}

/// Decide a plan-change attempt.
///
/// A same-plan "change" is a [`Outcome::Noop`]: the harmless write is
/// still undone, signalling that nothing happened rather than an error.
/// A real change commits only if the customer's currently-held movies fit
/// under the new plan's cap; otherwise they must return movies first.
pub fn decide_plan_change(check: &PlanChangeCheck) -> Outcome {
    if check.new_plan_id == check.current_plan_id {
        return Outcome::Noop;
    }
    if check.currently_rented() <= check.new_max_rentals {
        Outcome::Committed
    } else {
        Outcome::RolledBack
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn rent(valid_movie: bool, open_count_after: i64, remaining_before: i64) -> Outcome {
        decide_rent(&RentCheck {
            valid_movie,
            open_count_after,
            remaining_before,
        })
    }

    #[test]
    fn test_rent_commits_when_all_checks_pass() {
        assert_eq!(rent(true, 1, 3), Outcome::Committed);
        assert_eq!(rent(true, 1, 1), Outcome::Committed);
    }

    #[test]
    fn test_rent_rolls_back_invalid_movie() {
        assert_eq!(rent(false, 1, 3), Outcome::RolledBack);
    }

    #[test]
    fn test_rent_rolls_back_when_movie_already_held() {
        // Post-insert OPEN count of 2 means someone else already had it.
        assert_eq!(rent(true, 2, 3), Outcome::RolledBack);
    }

    #[test]
    fn test_rent_rolls_back_when_no_capacity() {
        assert_eq!(rent(true, 1, 0), Outcome::RolledBack);
    }

    fn ret(valid_movie: bool, before: i64, after: i64) -> Outcome {
        decide_return(&ReturnCheck {
            valid_movie,
            remaining_before: before,
            remaining_after: after,
        })
    }

    #[test]
    fn test_return_commits_when_one_slot_freed() {
        assert_eq!(ret(true, 2, 3), Outcome::Committed);
        assert_eq!(ret(true, 0, 1), Outcome::Committed);
    }

    #[test]
    fn test_return_rolls_back_invalid_movie() {
        assert_eq!(ret(false, 2, 3), Outcome::RolledBack);
    }

    #[test]
    fn test_return_rolls_back_when_nothing_was_open() {
        // Closing a row the customer never held frees no slot.
        assert_eq!(ret(true, 2, 2), Outcome::RolledBack);
    }

    fn plan(current: DbId, new: DbId, current_max: i64, new_max: i64, remaining: i64) -> Outcome {
        decide_plan_change(&PlanChangeCheck {
            current_plan_id: current,
            new_plan_id: new,
            current_max_rentals: current_max,
            new_max_rentals: new_max,
            remaining_before: remaining,
        })
    }

    #[test]
    fn test_plan_change_same_plan_is_noop() {
        assert_eq!(plan(1, 1, 3, 3, 3), Outcome::Noop);
        // Noop even when over-committed: nothing was going to change.
        assert_eq!(plan(1, 1, 3, 3, 0), Outcome::Noop);
    }

    #[test]
    fn test_plan_upgrade_commits() {
        // 3 held out of max 5, new max 10.
        assert_eq!(plan(1, 2, 5, 10, 2), Outcome::Committed);
    }

    #[test]
    fn test_plan_downgrade_at_capacity_commits() {
        // 2 held, new max exactly 2.
        assert_eq!(plan(1, 2, 5, 2, 3), Outcome::Committed);
    }

    #[test]
    fn test_plan_downgrade_over_capacity_rolls_back() {
        // 3 held, new max 2: must return movies first.
        assert_eq!(plan(1, 2, 5, 2, 2), Outcome::RolledBack);
    }
}
