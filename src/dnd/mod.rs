//! Drag-and-drop integration.
//!
//! The drag library is treated purely as an event source. It reports drops
//! through [`DropEvent`] and is told to revert its own DOM insertion, so the
//! board state stays the only owner of card order and the view is rebuilt
//! from it.

use crate::domain::{CardId, LaneKey};

pub mod controller;

pub use controller::{BoardController, BoardView, DropOutcome, IgnoreReason};

/// A drag-and-drop library observing the three lane containers
pub trait DragAdapter {
    /// Handle to a lane container. Equality must be identity: two handles are
    /// equal only when they refer to the same container.
    type Container: PartialEq;

    /// Undoes the adapter's own placement of the dragged element.
    /// With `revert` set, the element returns to where the drag began.
    fn cancel(&mut self, revert: bool);

    /// Releases the adapter's observers; no events follow
    fn destroy(&mut self);
}

/// A finished drag gesture as reported by the adapter
#[derive(Debug, Clone, PartialEq)]
pub struct DropEvent<C> {
    /// `data-id` of the dragged element
    pub element_id: Option<CardId>,
    pub target: Option<C>,
    pub source: Option<C>,
    /// `data-id` of the element the drop landed before; `None` means the end
    pub sibling_id: Option<CardId>,
}

impl<C> DropEvent<C> {
    pub fn new(element_id: impl Into<CardId>, source: C, target: C) -> Self {
        Self {
            element_id: Some(element_id.into()),
            target: Some(target),
            source: Some(source),
            sibling_id: None,
        }
    }

    pub fn before(mut self, sibling_id: impl Into<CardId>) -> Self {
        self.sibling_id = Some(sibling_id.into());
        self
    }
}

/// Known lane containers, resolved by identity
#[derive(Debug, Clone)]
pub struct ContainerRegistry<C> {
    containers: [(LaneKey, C); 3],
}

impl<C: PartialEq> ContainerRegistry<C> {
    pub fn new(backlog: C, in_progress: C, complete: C) -> Self {
        Self {
            containers: [
                (LaneKey::Backlog, backlog),
                (LaneKey::InProgress, in_progress),
                (LaneKey::Complete, complete),
            ],
        }
    }

    /// Lane observed by `container`, or `None` for a container we don't own
    pub fn lane_for(&self, container: &C) -> Option<LaneKey> {
        self.containers
            .iter()
            .find(|(_, known)| known == container)
            .map(|(key, _)| *key)
    }

    pub fn container(&self, key: LaneKey) -> &C {
        &self.containers[key.index()].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (LaneKey, &C)> {
        self.containers.iter().map(|(key, c)| (*key, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_resolves_known_containers() {
        let registry = ContainerRegistry::new(10u32, 20, 30);

        assert_eq!(registry.lane_for(&10), Some(LaneKey::Backlog));
        assert_eq!(registry.lane_for(&20), Some(LaneKey::InProgress));
        assert_eq!(registry.lane_for(&30), Some(LaneKey::Complete));
        assert_eq!(registry.lane_for(&40), None);
        assert_eq!(*registry.container(LaneKey::InProgress), 20);
    }

    #[test]
    fn test_registry_iterates_in_board_order() {
        let registry = ContainerRegistry::new("b", "i", "c");
        let keys: Vec<_> = registry.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, LaneKey::ALL.to_vec());
    }

    #[test]
    fn test_drop_event_builder() {
        let event = DropEvent::new("5", 1u8, 2u8).before("9");

        assert_eq!(event.element_id, Some(CardId::new("5")));
        assert_eq!(event.source, Some(1));
        assert_eq!(event.target, Some(2));
        assert_eq!(event.sibling_id, Some(CardId::new("9")));
    }
}
