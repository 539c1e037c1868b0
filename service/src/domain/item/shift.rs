//! [`Shift`] [`Item`] definitions.

use common::define_kind;
use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{domain::Name, Eligibility};
#[cfg(doc)]
use crate::domain::Item;

/// Block of volunteer work split into [`Position`] slots.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Shift {
    /// [`LockStatus`] of this [`Shift`].
    pub lock_status: LockStatus,

    /// [`Position`] slots of this [`Shift`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub positions: Vec<Position>,
}

impl Shift {
    /// Pairs every [`Position`] of this [`Shift`] with its [`Eligibility`]
    /// for the current volunteer.
    pub fn eligibilities(
        &self,
    ) -> impl Iterator<Item = (&Position, Eligibility)> + '_ {
        self.positions
            .iter()
            .map(|p| (p, p.eligibility(self.lock_status)))
    }

    /// Indicates whether any [`Position`] of this [`Shift`] may still be taken
    /// by someone.
    #[must_use]
    pub fn has_open_positions(&self) -> bool {
        self.positions.iter().any(|p| p.signup_state.is_open())
    }
}

/// Single assignable role slot within a [`Shift`].
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Position {
    /// ID of this [`Position`].
    pub id: PositionId,

    /// [`Name`] of this [`Position`].
    pub name: Name,

    /// [`SignupState`] of this [`Position`] as seen by the current volunteer.
    pub signup_state: SignupState,

    /// Indicator whether the current volunteer's assignment to this
    /// [`Position`] was made by the volunteer themselves.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_own_assignment: bool,
}

impl Position {
    /// Looks up the [`Eligibility`] of this [`Position`] under the provided
    /// [`LockStatus`] of its [`Shift`].
    #[must_use]
    pub fn eligibility(&self, lock_status: LockStatus) -> Eligibility {
        Eligibility::of(lock_status, self.signup_state, self.is_own_assignment)
    }
}

/// ID of a [`Position`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct PositionId(Uuid);

impl PositionId {
    /// Creates a new random [`PositionId`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

define_kind! {
    #[doc = "Phase of a [`Shift`] gating volunteer self-service."]
    enum LockStatus {
        #[doc = "Volunteers sign up and out on their own."]
        SelfSignup = 1,

        #[doc = "Volunteer changes are requests checked by staff."]
        Supervised = 2,

        #[doc = "No volunteer changes are possible."]
        Locked = 3,
    }
}

define_kind! {
    #[doc = "Availability of a [`Position`] for the current volunteer."]
    enum SignupState {
        #[doc = "Position is free."]
        SignupPossible = 1,

        #[doc = "Position is offered for trade by its holder."]
        SignupViaTrade = 2,

        #[doc = "Position is up for auction by its holder."]
        SignupViaAuction = 3,

        #[doc = "Position is free or tradeable, reported as one state."]
        SignupOrTrade = 4,

        #[doc = "Current volunteer holds the position."]
        SignedUp = 5,

        #[doc = "Position is taken by someone else."]
        Full = 6,
    }
}

impl SignupState {
    /// Indicates whether a [`Position`] in this [`SignupState`] may still be
    /// taken by someone.
    #[must_use]
    pub fn is_open(self) -> bool {
        match self {
            Self::SignupPossible
            | Self::SignupViaTrade
            | Self::SignupViaAuction
            | Self::SignupOrTrade => true,
            Self::SignedUp | Self::Full => false,
        }
    }
}
