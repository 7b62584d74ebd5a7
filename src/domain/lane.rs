use crate::domain::card::CardStatus;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Key of one of the three swimlanes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LaneKey {
    Backlog,
    InProgress,
    Complete,
}

impl LaneKey {
    /// Lanes in board order, left to right
    pub const ALL: [LaneKey; 3] = [Self::Backlog, Self::InProgress, Self::Complete];

    /// Status a card takes on when it lands in this lane
    pub fn status(&self) -> CardStatus {
        match self {
            Self::Backlog => CardStatus::Backlog,
            Self::InProgress => CardStatus::InProgress,
            Self::Complete => CardStatus::Complete,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::InProgress => "inProgress",
            Self::Complete => "complete",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Backlog => 0,
            Self::InProgress => 1,
            Self::Complete => 2,
        }
    }
}

impl From<CardStatus> for LaneKey {
    fn from(status: CardStatus) -> Self {
        match status {
            CardStatus::Backlog => Self::Backlog,
            CardStatus::InProgress => Self::InProgress,
            CardStatus::Complete => Self::Complete,
        }
    }
}

impl fmt::Display for LaneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LaneKey {
    type Err = crate::error::SwimlaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backlog" => Ok(Self::Backlog),
            "inProgress" => Ok(Self::InProgress),
            "complete" => Ok(Self::Complete),
            _ => Err(crate::error::SwimlaneError::InvalidLaneKey(s.to_string())),
        }
    }
}
