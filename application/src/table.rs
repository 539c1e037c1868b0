//! Signup [`Eligibility`] table.

use itertools::iproduct;
use serde::Serialize;
use service::{
    domain::item::shift::{LockStatus, SignupState},
    Eligibility,
};

/// [`Eligibility`] of a single combination.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Row {
    /// [`LockStatus`] of the shift.
    pub lock_status: LockStatus,

    /// [`SignupState`] of the position.
    pub signup_state: SignupState,

    /// Indicator whether the volunteer assigned themselves.
    pub is_own_assignment: bool,

    /// Looked up [`Eligibility`].
    #[serde(flatten)]
    pub eligibility: Eligibility,
}

/// Looks up the [`Eligibility`] of every combination of a [`LockStatus`], a
/// [`SignupState`] and an assignment ownership.
#[must_use]
pub fn eligibility() -> Vec<Row> {
    iproduct!(LockStatus::ALL, SignupState::ALL, [true, false])
        .map(|(&lock_status, &signup_state, is_own_assignment)| Row {
            lock_status,
            signup_state,
            is_own_assignment,
            eligibility: Eligibility::of(
                lock_status,
                signup_state,
                is_own_assignment,
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use service::domain::item::shift::{LockStatus, SignupState};

    use super::eligibility;

    #[test]
    fn covers_every_combination() {
        let rows = eligibility();

        assert_eq!(rows.len(), 3 * 6 * 2);
        let invalid = rows
            .iter()
            .filter(|r| r.eligibility.is_invalid())
            .collect::<Vec<_>>();
        assert_eq!(invalid.len(), 4);
        assert!(invalid.iter().all(|r| {
            r.signup_state == SignupState::SignupOrTrade
                && r.lock_status != LockStatus::Locked
        }));
    }

    #[test]
    fn serializes_flat() {
        let json = serde_json::to_value(eligibility()[0]).unwrap();

        assert_eq!(json["lock_status"], "SELF_SIGNUP");
        assert_eq!(json["signup_state"], "SIGNUP_POSSIBLE");
        assert_eq!(json["is_own_assignment"], true);
        assert_eq!(json["action"], "SIGN_UP");
        assert!(json["header"].is_null());
    }
}
