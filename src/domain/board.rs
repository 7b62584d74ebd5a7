use crate::{
    domain::{
        card::{Card, CardId, CardStatus},
        lane::LaneKey,
    },
    error::{Result, SwimlaneError},
    source::CardSource,
};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, path::Path};
use tokio::fs;
use tracing::{debug, info};

/// Configuration for a board column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub key: LaneKey,
    pub title: String,
}

impl Column {
    pub fn new(key: LaneKey, title: impl Into<String>) -> Self {
        Self {
            key,
            title: title.into(),
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Shipping Requests".to_string(),
            columns: vec![
                Column::new(LaneKey::Backlog, "Backlog"),
                Column::new(LaneKey::InProgress, "In Progress"),
                Column::new(LaneKey::Complete, "Complete"),
            ],
        }
    }
}

impl BoardConfig {
    /// Loads a configuration from a JSON file and validates it
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).await?;
        let config: BoardConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Each lane must have exactly one column
    pub fn validate(&self) -> Result<()> {
        for lane in LaneKey::ALL {
            let count = self.columns.iter().filter(|col| col.key == lane).count();
            if count != 1 {
                return Err(SwimlaneError::ConfigError(format!(
                    "lane {} configured {} times, expected once",
                    lane, count
                )));
            }
        }
        if self.columns.len() != LaneKey::ALL.len() {
            return Err(SwimlaneError::ConfigError(format!(
                "expected {} columns, found {}",
                LaneKey::ALL.len(),
                self.columns.len()
            )));
        }
        Ok(())
    }

    /// Gets the column configuration for a lane
    pub fn get_column(&self, key: LaneKey) -> Option<&Column> {
        self.columns.iter().find(|col| col.key == key)
    }
}

/// A request to move a card, as produced by a resolved drop event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardMove {
    pub source: LaneKey,
    pub target: LaneKey,
    pub card_id: CardId,
    /// Card to insert before; `None` appends to the target lane
    pub sibling_id: Option<CardId>,
}

impl CardMove {
    pub fn new(source: LaneKey, target: LaneKey, card_id: impl Into<CardId>) -> Self {
        Self {
            source,
            target,
            card_id: card_id.into(),
            sibling_id: None,
        }
    }

    pub fn before(mut self, sibling_id: impl Into<CardId>) -> Self {
        self.sibling_id = Some(sibling_id.into());
        self
    }
}

/// What an applied move did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReceipt {
    pub card_id: CardId,
    pub from: LaneKey,
    pub from_index: usize,
    pub to: LaneKey,
    pub to_index: usize,
}

/// Kanban board state: three ordered lanes of cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub config: BoardConfig,
    backlog: Vec<Card>,
    in_progress: Vec<Card>,
    complete: Vec<Card>,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            backlog: Vec::new(),
            in_progress: Vec::new(),
            complete: Vec::new(),
        }
    }

    /// Builds the initial board. Every card starts in the backlog lane with
    /// backlog status, whatever status it arrived with.
    pub fn from_cards(config: BoardConfig, cards: Vec<Card>) -> Result<Self> {
        let mut seen = HashSet::new();
        for card in &cards {
            if !seen.insert(card.id.clone()) {
                return Err(SwimlaneError::DuplicateCardId(card.id.to_string()));
            }
        }

        let mut board = Self::new(config);
        board.backlog = cards
            .into_iter()
            .map(|card| Card {
                status: CardStatus::Backlog,
                ..card
            })
            .collect();
        Ok(board)
    }

    /// Loads cards from a source and builds the initial board
    pub async fn load(source: &dyn CardSource, config: BoardConfig) -> Result<Self> {
        let cards = source.load_cards().await?;
        info!(count = cards.len(), board = %config.name, "loaded cards");
        Self::from_cards(config, cards)
    }

    pub fn lane(&self, key: LaneKey) -> &[Card] {
        match key {
            LaneKey::Backlog => &self.backlog,
            LaneKey::InProgress => &self.in_progress,
            LaneKey::Complete => &self.complete,
        }
    }

    fn lane_mut(&mut self, key: LaneKey) -> &mut Vec<Card> {
        match key {
            LaneKey::Backlog => &mut self.backlog,
            LaneKey::InProgress => &mut self.in_progress,
            LaneKey::Complete => &mut self.complete,
        }
    }

    /// Lanes in board order
    pub fn iter_lanes(&self) -> impl Iterator<Item = (LaneKey, &[Card])> {
        LaneKey::ALL.into_iter().map(move |key| (key, self.lane(key)))
    }

    pub fn total_cards(&self) -> usize {
        self.iter_lanes().map(|(_, cards)| cards.len()).sum()
    }

    /// Finds a card anywhere on the board, with its lane and index
    pub fn find_card(&self, id: &CardId) -> Option<(LaneKey, usize, &Card)> {
        self.iter_lanes().find_map(|(key, cards)| {
            cards
                .iter()
                .position(|card| &card.id == id)
                .map(|index| (key, index, &cards[index]))
        })
    }

    pub fn lane_of(&self, id: &CardId) -> Option<LaneKey> {
        self.find_card(id).map(|(key, _, _)| key)
    }

    /// Checks that ids are unique and every status matches its lane
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (key, cards) in self.iter_lanes() {
            for card in cards {
                if !seen.insert(&card.id) {
                    return Err(SwimlaneError::DuplicateCardId(card.id.to_string()));
                }
                if card.status != key.status() {
                    return Err(SwimlaneError::InvariantViolation {
                        id: card.id.to_string(),
                        status: card.status.to_string(),
                        lane: key.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Moves a card in place.
    ///
    /// The card is removed from `source` and its status is set from `target`.
    /// It is then inserted before `sibling_id`, or appended when the sibling
    /// is absent or not in the target lane. Returns `None` and leaves the
    /// board untouched when the card is not in `source`.
    pub fn apply_move(&mut self, mv: &CardMove) -> Option<MoveReceipt> {
        let from_index = match self
            .lane(mv.source)
            .iter()
            .position(|card| card.id == mv.card_id)
        {
            Some(index) => index,
            None => {
                debug!(card = %mv.card_id, lane = %mv.source, "card not in source lane");
                return None;
            }
        };

        let mut card = self.lane_mut(mv.source).remove(from_index);
        card.status = mv.target.status();

        let target = self.lane_mut(mv.target);
        let to_index = mv
            .sibling_id
            .as_ref()
            .and_then(|sibling| target.iter().position(|c| &c.id == sibling))
            .unwrap_or(target.len());
        target.insert(to_index, card);

        debug!(
            card = %mv.card_id,
            from = %mv.source,
            to = %mv.target,
            index = to_index,
            "moved card"
        );

        Some(MoveReceipt {
            card_id: mv.card_id.clone(),
            from: mv.source,
            from_index,
            to: mv.target,
            to_index,
        })
    }

    /// Pure form of [`Board::apply_move`]: returns the board after the move,
    /// or an unchanged copy when the card is not in `source`.
    pub fn move_card(
        &self,
        source: LaneKey,
        target: LaneKey,
        card_id: &CardId,
        sibling_id: Option<&CardId>,
    ) -> Board {
        let mut next = self.clone();
        next.apply_move(&CardMove {
            source,
            target,
            card_id: card_id.clone(),
            sibling_id: sibling_id.cloned(),
        });
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
