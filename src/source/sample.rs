use crate::{
    domain::{Card, CardStatus},
    error::Result,
    source::CardSource,
};
use async_trait::async_trait;

const SAMPLE_RECORDS: [(&str, &str, &str, CardStatus); 20] = [
    ("1", "Stark, White and Abbott", "Cloned Optimal Architecture", CardStatus::InProgress),
    ("2", "Wiza LLC", "Exclusive Bandwidth-Monitored Implementation", CardStatus::Complete),
    ("3", "Nolan LLC", "Vision-Oriented 4Thgeneration Graphicaluserinterface", CardStatus::Backlog),
    ("4", "Thompson PLC", "Streamlined Regional Knowledgeuser", CardStatus::InProgress),
    ("5", "Walker-Williamson", "Team-Oriented 6Thgeneration Matrix", CardStatus::InProgress),
    ("6", "Boehm and Sons", "Automated Systematic Paradigm", CardStatus::Backlog),
    ("7", "Runolfsson, Hegmann and Block", "Integrated Transitional Strategy", CardStatus::Backlog),
    ("8", "Schumm-Labadie", "Operative Heuristic Challenge", CardStatus::Backlog),
    ("9", "Kohler Group", "Re-Contextualized Multi-Tasking Attitude", CardStatus::Backlog),
    ("10", "Romaguera Inc", "Managed Foreground Toolset", CardStatus::Backlog),
    ("11", "Reilly-King", "Future-Proofed Interactive Toolset", CardStatus::Complete),
    (
        "12",
        "Emard, Champlin and Runolfsdottir",
        "Devolved Needs-Based Capability",
        CardStatus::Backlog,
    ),
    ("13", "Fritsch, Cronin and Wolff", "Open-Source 3Rdgeneration Website", CardStatus::Complete),
    ("14", "Borer LLC", "Profit-Focused Incremental Orchestration", CardStatus::Backlog),
    ("15", "Emmerich-Ankunding", "User-Centric Stable Extranet", CardStatus::InProgress),
    ("16", "Willms-Abbott", "Progressive Bandwidth-Monitored Access", CardStatus::InProgress),
    ("17", "Brekke PLC", "Intuitive User-Facing Customerloyalty", CardStatus::Complete),
    ("18", "Bins, Toy and Klocko", "Integrated Assymetric Software", CardStatus::Backlog),
    ("19", "Hodkiewicz-Hayes", "Programmable Systematic Securedline", CardStatus::Backlog),
    ("20", "Murphy, Lang and Ferry", "Organized Explicit Access", CardStatus::Backlog),
];

/// The fixed set of 20 shipping-request clients, with their recorded statuses
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleCards;

impl SampleCards {
    pub fn cards(&self) -> Vec<Card> {
        SAMPLE_RECORDS
            .iter()
            .map(|(id, name, description, status)| {
                Card::new(*id, *name, *description, *status)
            })
            .collect()
    }
}

#[async_trait]
impl CardSource for SampleCards {
    async fn load_cards(&self) -> Result<Vec<Card>> {
        Ok(self.cards())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_has_twenty_unique_ids() {
        let cards = SampleCards.cards();
        assert_eq!(cards.len(), 20);

        let ids: HashSet<_> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_sample_keeps_recorded_statuses() {
        let cards = SampleCards.cards();
        assert_eq!(cards[0].status, CardStatus::InProgress);
        assert_eq!(cards[1].status, CardStatus::Complete);
        assert_eq!(cards[2].status, CardStatus::Backlog);
    }

    #[tokio::test]
    async fn test_load_cards_in_order() {
        let cards = SampleCards.load_cards().await.unwrap();
        let ids: Vec<_> = cards.iter().map(|c| c.id.as_str()).collect();
        let expected: Vec<String> = (1..=20).map(|n| n.to_string()).collect();
        assert_eq!(ids, expected);
    }
}
