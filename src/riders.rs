use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub mod directory;

pub use directory::{RiderDirectory, RiderSource, RiderSourceError};

/// A member of the pickup staff.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rider {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub area: String,
    pub status: RiderStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub joined: OffsetDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiderStatus {
    Active,
    Inactive,
    Suspended,
}

impl RiderStatus {
    pub const fn label(self) -> &'static str {
        match self {
            RiderStatus::Active => "active",
            RiderStatus::Inactive => "inactive",
            RiderStatus::Suspended => "suspended",
        }
    }
}

/// What the rider listing renders from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RiderFeed {
    /// Nothing has been fetched yet.
    #[default]
    Loading,
    Loaded(Vec<Rider>),
    Failed(String),
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn rider_uses_camel_case_and_rfc3339() {
        let rider: Rider = serde_json::from_str(
            r#"{
                "id": "r-1",
                "name": "Ayesha Khan",
                "email": "ayesha@example.com",
                "phone": "+92 300 0000000",
                "area": "Gulshan",
                "status": "suspended",
                "joined": "2023-04-01T09:30:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(rider.status, RiderStatus::Suspended);
        assert_eq!(rider.joined, datetime!(2023-04-01 09:30 UTC));

        let value = serde_json::to_value(&rider).unwrap();
        assert_eq!(value["status"], "suspended");
        assert_eq!(value["joined"], "2023-04-01T09:30:00Z");
    }

    #[test]
    fn feed_defaults_to_loading() {
        assert_eq!(RiderFeed::default(), RiderFeed::Loading);
    }
}
