//! Signup [`Eligibility`] of a volunteer for a position.
//!
//! The [`Eligibility`] is a pure lookup keyed by the [`LockStatus`] of a shift
//! and the [`SignupState`] of one of its positions. It is recomputed from
//! backend data on every render and keeps no state of its own.

use std::str::FromStr as _;

use common::define_kind;
#[cfg(feature = "serde")]
use serde::Serialize;
use tracing as log;

use crate::domain::item::shift::{LockStatus, SignupState};

/// Body rendered for a combination no decision exists for.
///
/// Must never be treated as a valid message.
pub const INVALID_STATE: &str = "INVALID_STATE";

/// Header rendered on positions the volunteer is signed up for.
pub const SIGNED_UP_HEADER: &str = "You are signed up for this position!";

/// Body of a free position under [`LockStatus::SelfSignup`].
const OPEN: &str = "This position is free. You can sign up right away.";

/// Body of a position offered for trade.
const TRADE: &str = "Another volunteer offers this position for trade. \
                     Sign up to take it over.";

/// Body of a position up for auction.
const AUCTION: &str = "This position is up for auction. \
                       Sign up to take it over.";

/// Body of a position taken by someone else.
const FULL: &str = "This position is already full.";

/// Body of an own position while self-signup is open.
const SIGN_OUT: &str = "You can sign out of this position while self-signup \
                        is open.";

/// Body of a position assigned to the volunteer by staff while self-signup is
/// open.
const STAFF_ASSIGNED: &str = "Staff assigned you to this position. \
                              Sign-out requests are checked by staff.";

/// Body of a free position under [`LockStatus::Supervised`].
const REQUEST_SIGN_UP: &str = "Sign-up requests for this shift are checked \
                               by staff before they take effect.";

/// Body of a held position under [`LockStatus::Supervised`].
const REQUEST_SIGN_OUT: &str = "Sign-out requests for this shift are checked \
                                by staff before they take effect.";

/// Body of a held position under [`LockStatus::Locked`].
const LOCKED_SIGNED_UP: &str = "This shift is locked. Contact staff to change \
                                your assignment.";

/// Body of any other position under [`LockStatus::Locked`].
const LOCKED: &str = "This shift is locked. Sign-ups are closed.";

define_kind! {
    #[doc = "Action a volunteer may take on a position."]
    enum Action {
        #[doc = "Take the position immediately."]
        SignUp = 1,

        #[doc = "Leave the position immediately."]
        SignOut = 2,

        #[doc = "Ask staff to be assigned to the position."]
        RequestSignUp = 3,

        #[doc = "Ask staff to be released from the position."]
        RequestSignOut = 4,
    }
}

/// Outcome of the signup lookup for one position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Eligibility {
    /// Header message, present only for signed up positions.
    pub header: Option<&'static str>,

    /// Body message explaining the [`Eligibility`].
    pub body: &'static str,

    /// [`Action`] exposed to the volunteer, if any.
    pub action: Option<Action>,
}

impl Eligibility {
    /// [`Eligibility`] of a combination no decision exists for.
    pub const INVALID: Self = Self {
        header: None,
        body: INVALID_STATE,
        action: None,
    };

    /// Looks up the [`Eligibility`] for the provided combination.
    ///
    /// `is_own_assignment` only matters for [`SignupState::SignedUp`] under
    /// [`LockStatus::SelfSignup`]: an assignment made by staff yields
    /// [`Action::RequestSignOut`] instead of [`Action::SignOut`]. This cell
    /// is a local decision awaiting product confirmation.
    ///
    /// [`SignupState::SignupOrTrade`] is unresolved under
    /// [`LockStatus::SelfSignup`] and [`LockStatus::Supervised`] and yields
    /// [`Eligibility::INVALID`].
    #[must_use]
    pub fn of(
        lock_status: LockStatus,
        signup_state: SignupState,
        is_own_assignment: bool,
    ) -> Self {
        use Action as A;
        use LockStatus as L;
        use SignupState as S;

        let (body, action) = match (lock_status, signup_state) {
            (L::SelfSignup, S::SignupPossible) => (OPEN, Some(A::SignUp)),
            (L::SelfSignup | L::Supervised, S::SignupViaTrade) => {
                (TRADE, Some(A::SignUp))
            }
            (L::SelfSignup | L::Supervised, S::SignupViaAuction) => {
                (AUCTION, Some(A::SignUp))
            }
            (L::SelfSignup | L::Supervised, S::SignupOrTrade) => {
                log::debug!(
                    "no `Eligibility` decision for `{lock_status}` and \
                     `{signup_state}`",
                );
                return Self::INVALID;
            }
            (L::SelfSignup, S::SignedUp) => {
                if is_own_assignment {
                    (SIGN_OUT, Some(A::SignOut))
                } else {
                    (STAFF_ASSIGNED, Some(A::RequestSignOut))
                }
            }
            (L::SelfSignup | L::Supervised, S::Full) => (FULL, None),
            (L::Supervised, S::SignupPossible) => {
                (REQUEST_SIGN_UP, Some(A::RequestSignUp))
            }
            (L::Supervised, S::SignedUp) => {
                (REQUEST_SIGN_OUT, Some(A::RequestSignOut))
            }
            (L::Locked, S::SignedUp) => (LOCKED_SIGNED_UP, None),
            (
                L::Locked,
                S::SignupPossible
                | S::SignupViaTrade
                | S::SignupViaAuction
                | S::SignupOrTrade
                | S::Full,
            ) => (LOCKED, None),
        };

        Self {
            header: (signup_state == S::SignedUp).then_some(SIGNED_UP_HEADER),
            body,
            action,
        }
    }

    /// Looks up the [`Eligibility`] for the raw `SCREAMING_SNAKE_CASE` names of
    /// a [`LockStatus`] and a [`SignupState`], as delivered by the backend.
    ///
    /// Unknown names yield [`Eligibility::INVALID`].
    #[must_use]
    pub fn from_raw(
        lock_status: &str,
        signup_state: &str,
        is_own_assignment: bool,
    ) -> Self {
        match (
            LockStatus::from_str(lock_status),
            SignupState::from_str(signup_state),
        ) {
            (Ok(lock), Ok(state)) => Self::of(lock, state, is_own_assignment),
            (lock, state) => {
                log::warn!(
                    "invalid signup state combination: lock status \
                     `{lock_status}` ({}), signup state `{signup_state}` ({})",
                    if lock.is_ok() { "known" } else { "unknown" },
                    if state.is_ok() { "known" } else { "unknown" },
                );
                Self::INVALID
            }
        }
    }

    /// Indicates whether this is the [`Eligibility::INVALID`] sentinel.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.body == INVALID_STATE
    }
}
