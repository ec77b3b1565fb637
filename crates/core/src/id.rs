//! Entity identity.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

const INVALID_ID: &str = "Invalid Id value.";

/// Integer identifier of a persisted entity.
///
/// Always non-negative. Entities created before a persistence layer assigns them an
/// identity carry [`EntityId::UNASSIGNED`].
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i32", into = "i32")]
pub struct EntityId(i32);

impl EntityId {
    /// Identity of an entity that has not been stored yet.
    pub const UNASSIGNED: EntityId = EntityId(0);

    pub fn new(raw: i32) -> DomainResult<Self> {
        if raw < 0 {
            return Err(DomainError::validation(INVALID_ID));
        }
        Ok(Self(raw))
    }

    pub fn get(self) -> i32 {
        self.0
    }

    pub fn is_unassigned(self) -> bool {
        self == Self::UNASSIGNED
    }
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i32> for EntityId {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EntityId> for i32 {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

impl FromStr for EntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<i32>()
            .map_err(|_| DomainError::validation(INVALID_ID))?;
        Self::new(raw)
    }
}
