//! The flavor entity and its request payload.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::InvalidFlavorId;

/// Storage-assigned identifier of a flavor row (`SERIAL`).
///
/// Never supplied by clients in a body; only parsed from request paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlavorId(pub i32);

impl FlavorId {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for FlavorId {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

impl FromStr for FlavorId {
    type Err = InvalidFlavorId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i32>().map(Self).map_err(|_| InvalidFlavorId(s.to_owned()))
    }
}

impl fmt::Display for FlavorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A persisted ice cream flavor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flavor {
    pub id: FlavorId,
    pub name: String,
    pub is_favorite: bool,
    /// Set once when the row is inserted.
    pub created_at: DateTime<Utc>,
    /// Refreshed by every successful update.
    pub updated_at: DateTime<Utc>,
}

/// Body of create and update requests.
///
/// Update is a full replacement: both fields are written, absent ones included.
/// `name` stays optional here so that a missing name reaches storage, which
/// rejects it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_favorite: Option<bool>,
}

impl FlavorInput {
    pub fn new(name: impl Into<String>, is_favorite: bool) -> Self {
        Self { name: Some(name.into()), is_favorite: Some(is_favorite) }
    }

    /// The favorite flag, `false` when omitted.
    pub fn is_favorite_or_default(&self) -> bool {
        self.is_favorite.unwrap_or(false)
    }
}
