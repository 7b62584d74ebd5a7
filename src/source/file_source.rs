use crate::{
    domain::Card,
    error::{Result, SwimlaneError},
    source::CardSource,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Reads cards from a JSON array of `{id, name, description, status}` records
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CardSource for JsonFileSource {
    async fn load_cards(&self) -> Result<Vec<Card>> {
        if !self.path.exists() {
            return Err(SwimlaneError::SourceNotFound(
                self.path.display().to_string(),
            ));
        }

        let contents = fs::read_to_string(&self.path).await?;
        let cards: Vec<Card> = serde_json::from_str(&contents)?;
        debug!(path = %self.path.display(), count = cards.len(), "read card file");

        Ok(cards)
    }
}
