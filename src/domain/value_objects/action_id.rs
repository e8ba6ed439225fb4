//! ActionId value object - one slot of an opener
//!
//! The game data uses a single signed integer per slot:
//! - `0` is the catch-all placeholder
//! - negative values are group markers (`-1` is group 1)
//! - positive values are concrete action ids
//!
//! `ActionId` keeps that wire form (it serializes as the raw integer) but
//! exposes it as a tagged variant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OpenerError;

/// Identifier of a concrete action as reported by the game client.
pub type RawActionId = u32;

/// Identifier of one step of a reference opener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ActionId {
    /// Matches any action at its position.
    CatchAll,
    /// A concrete action.
    Ordinary(RawActionId),
    /// Any member of the group with this (1-based) index.
    Group(u32),
}

impl ActionId {
    pub fn is_catch_all(&self) -> bool {
        matches!(self, ActionId::CatchAll)
    }

    /// Raw signed form (`0`, `-n` or the action id).
    pub fn raw(&self) -> i64 {
        match self {
            ActionId::CatchAll => 0,
            ActionId::Ordinary(id) => i64::from(*id),
            ActionId::Group(index) => -i64::from(*index),
        }
    }
}

impl TryFrom<i64> for ActionId {
    type Error = OpenerError;

    /// Fails when the magnitude does not fit an action or group id.
    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        let magnitude =
            u32::try_from(raw.unsigned_abs()).map_err(|_| OpenerError::InvalidActionId {
                value: raw.to_string(),
            })?;
        Ok(match raw {
            0 => ActionId::CatchAll,
            n if n < 0 => ActionId::Group(magnitude),
            _ => ActionId::Ordinary(magnitude),
        })
    }
}

impl From<ActionId> for i64 {
    fn from(id: ActionId) -> Self {
        id.raw()
    }
}

impl From<RawActionId> for ActionId {
    fn from(raw: RawActionId) -> Self {
        match raw {
            0 => ActionId::CatchAll,
            id => ActionId::Ordinary(id),
        }
    }
}

impl FromStr for ActionId {
    type Err = OpenerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == "*" {
            return Ok(ActionId::CatchAll);
        }
        let raw: i64 = trimmed.parse().map_err(|_| OpenerError::InvalidActionId {
            value: s.to_string(),
        })?;
        ActionId::try_from(raw).map_err(|_| OpenerError::InvalidActionId {
            value: s.to_string(),
        })
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw())
    }
}

/// Parse a comma and/or whitespace separated list of action ids.
pub fn parse_action_list(input: &str) -> Result<Vec<ActionId>, OpenerError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

/// Parse a recorded sequence: same syntax as [`parse_action_list`], but only
/// concrete action ids are allowed.
pub fn parse_recorded_list(input: &str) -> Result<Vec<RawActionId>, OpenerError> {
    parse_action_list(input)?
        .into_iter()
        .map(|id| match id {
            ActionId::Ordinary(raw) => Ok(raw),
            marker => Err(OpenerError::MarkerInRecording {
                value: marker.to_string(),
            }),
        })
        .collect()
}
