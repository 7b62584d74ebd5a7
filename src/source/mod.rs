use crate::{domain::Card, error::Result};
use async_trait::async_trait;

pub mod file_source;
pub mod sample;

pub use file_source::JsonFileSource;
pub use sample::SampleCards;

/// Provider of the cards a board starts with
#[async_trait]
pub trait CardSource: Send + Sync {
    /// Loads every card, in display order
    async fn load_cards(&self) -> Result<Vec<Card>>;
}
