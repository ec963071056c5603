//! Lighting GUIDs and the generators that hand out fresh ones

use crate::error::{GuidFixError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The identifier that tags an asset for the lighting/build cache.
///
/// The nil (all-zero) value means the asset has no identifier yet; every
/// other value is considered valid.
#[derive(Clone, Copy, Default, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LightingGuid(Uuid);

impl LightingGuid {
    /// The invalid, "missing" identifier
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Create from a raw 128-bit value (for deserialization/testing)
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    /// Whether this identifier is set
    pub fn is_valid(&self) -> bool {
        !self.0.is_nil()
    }
}

impl FromStr for LightingGuid {
    type Err = GuidFixError;

    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|e| GuidFixError::InvalidGuid {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl fmt::Debug for LightingGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LightingGuid({})", self.0)
    }
}

impl fmt::Display for LightingGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "<none>")
        }
    }
}

/// A source of fresh identifiers.
///
/// Implementations must never return the nil value and must never return
/// the same value twice.
pub trait GuidGenerator {
    fn generate(&mut self) -> LightingGuid;
}

/// Random version-4 identifiers
#[derive(Debug, Default)]
pub struct RandomGuids {
    issued: HashSet<LightingGuid>,
}

impl RandomGuids {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GuidGenerator for RandomGuids {
    fn generate(&mut self) -> LightingGuid {
        loop {
            let guid = LightingGuid(Uuid::new_v4());
            if guid.is_valid() && self.issued.insert(guid) {
                return guid;
            }
        }
    }
}

/// Counter-based identifiers, deterministic across runs.
///
/// Panics once `u128::MAX` has been issued rather than wrapping around.
#[derive(Debug)]
pub struct SequentialGuids {
    next: Option<u128>,
}

impl SequentialGuids {
    /// Start counting at `start` (zero is skipped since it is the nil value)
    pub fn starting_at(start: u128) -> Self {
        Self {
            next: Some(start.max(1)),
        }
    }
}

impl Default for SequentialGuids {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl GuidGenerator for SequentialGuids {
    fn generate(&mut self) -> LightingGuid {
        let Some(value) = self.next else {
            panic!("SequentialGuids exhausted: every u128 value has been issued");
        };
        self.next = value.checked_add(1);
        LightingGuid::from_u128(value)
    }
}
