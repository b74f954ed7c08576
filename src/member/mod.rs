//! # Member Module
//!
//! The record type shown in the admin table and the external source it is
//! loaded from.
//!
//! ## Payload Format
//!
//! The source is a JSON array; `selected` is local UI state and is never part
//! of the payload:
//!
//! ```json
//! [
//!   { "id": "1", "name": "Aaron Miles", "email": "aaron@mailinator.com", "role": "member" }
//! ]
//! ```
//!
//! Ids arrive as strings in the public dataset and as integers elsewhere; both
//! are accepted.

pub mod source;

pub use source::{fetch_members, load_members_from_file, parse_members, DEFAULT_SOURCE_URL};

use serde::{Deserialize, Deserializer, Serialize};

/// Stable identifier of a member. Never reused within one session.
pub type MemberId = i64;

/// A single row of the admin table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing)]
    pub selected: bool,
}

impl Member {
    pub fn new(
        id: MemberId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role: role.into(),
            selected: false,
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<MemberId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(MemberId),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid member id: {text:?}"))),
    }
}
