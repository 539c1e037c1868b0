//! [`Fixture`] definitions.

use std::{fs, io, path::Path};

use derive_more::{Display, From};
use serde::Deserialize;
use service::{
    domain::{Item, Venue},
    infra::Memory,
};

/// Schedule to preview the calendar over.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Fixture {
    /// [`Venue`]s in the order they are shown.
    #[serde(default)]
    pub venues: Vec<Venue>,

    /// Scheduled [`Item`]s.
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Fixture {
    /// Loads a [`Fixture`] from the JSON file at the provided `path`.
    ///
    /// # Errors
    ///
    /// If the file cannot be read or isn't a valid [`Fixture`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Turns this [`Fixture`] into a [`Memory`] backend.
    #[must_use]
    pub fn into_backend(self) -> Memory {
        Memory::new(self.venues, self.items)
    }
}

/// Error of loading a [`Fixture`].
#[derive(Debug, Display, derive_more::Error, From)]
pub enum Error {
    /// File cannot be read.
    #[display("cannot read fixture: {_0}")]
    Io(io::Error),

    /// File isn't a valid [`Fixture`].
    #[display("malformed fixture: {_0}")]
    Json(serde_json::Error),
}

#[cfg(test)]
mod tests {
    use service::domain::item::{self, shift::SignupState};

    use super::Fixture;

    const JSON: &str = r#"{
        "venues": [
            {"id": "0b7e4a8e-2b8c-4c61-9a53-6f0f4c9c1a01", "name": "Main stage"}
        ],
        "items": [
            {
                "id": "8c2d6f0e-5d7b-4f3a-b1f4-0e6a9d2c7b11",
                "name": "Bar",
                "interval": {
                    "start": "2025-03-01T09:00:00Z",
                    "end": "2025-03-01T12:00:00Z"
                },
                "venue_id": "0b7e4a8e-2b8c-4c61-9a53-6f0f4c9c1a01",
                "payload": {
                    "kind": "SHIFT",
                    "lock_status": "SUPERVISED",
                    "positions": [{
                        "id": "3f1c9b2a-7e4d-4a6b-8c5f-2d9e1b0a6c21",
                        "name": "Bartender",
                        "signup_state": "SIGNED_UP"
                    }]
                }
            },
            {
                "id": "a1f3e5c7-9b2d-4e6f-8a0c-1d3b5f7e9a31",
                "name": "Opening talk",
                "interval": {
                    "start": "2025-03-01T10:00:00Z",
                    "end": "2025-03-01T11:00:00Z"
                },
                "venue_id": null,
                "payload": {"kind": "ACTIVITY"}
            }
        ]
    }"#;

    #[test]
    fn parses_items() {
        let fixture = serde_json::from_str::<Fixture>(JSON).unwrap();

        assert_eq!(fixture.venues.len(), 1);
        assert_eq!(fixture.items.len(), 2);
        assert_eq!(fixture.items[0].venue_id, Some(fixture.venues[0].id));
        let shift = fixture.items[0].shift().unwrap();
        assert_eq!(shift.positions[0].signup_state, SignupState::SignedUp);
        assert!(!shift.positions[0].is_own_assignment);
        assert_eq!(fixture.items[1].kind(), item::Kind::Activity);
    }

    #[test]
    fn fails_on_missing_file() {
        let err = Fixture::load("no/such/fixture.json").unwrap_err();

        assert!(err.to_string().starts_with("cannot read fixture"));
    }
}
