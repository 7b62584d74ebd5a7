use crate::{
    domain::{Board, CardMove, MoveReceipt},
    dnd::{ContainerRegistry, DragAdapter, DropEvent},
    error::Result,
};
use tracing::{debug, info, warn};

/// Receives the board after every accepted drop so it can re-render
pub trait BoardView {
    fn render(&mut self, board: &Board) -> Result<()>;
}

/// Why a drop event left the board unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    MissingContainer,
    UnknownContainer,
    MissingElementId,
    CardNotInSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    Moved(MoveReceipt),
    Ignored(IgnoreReason),
}

/// Owns the board and wires drop events from a [`DragAdapter`] into moves
pub struct BoardController<A: DragAdapter> {
    board: Board,
    containers: ContainerRegistry<A::Container>,
    adapter: Option<A>,
    views: Vec<Box<dyn BoardView>>,
    revision: u64,
}

impl<A: DragAdapter> BoardController<A> {
    pub fn new(board: Board, containers: ContainerRegistry<A::Container>) -> Self {
        Self {
            board,
            containers,
            adapter: None,
            views: Vec::new(),
            revision: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn containers(&self) -> &ContainerRegistry<A::Container> {
        &self.containers
    }

    /// Bumped once per accepted drop
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_mounted(&self) -> bool {
        self.adapter.is_some()
    }

    /// Registers a view and renders the current board into it
    pub fn add_view(&mut self, mut view: Box<dyn BoardView>) -> Result<()> {
        view.render(&self.board)?;
        self.views.push(view);
        Ok(())
    }

    /// Attaches an adapter built over the registered containers.
    /// An adapter that is already attached is destroyed first.
    pub fn mount(&mut self, adapter: A) {
        self.unmount();
        self.adapter = Some(adapter);
        info!(board = %self.board.config.name, "drag adapter mounted");
    }

    /// Destroys the attached adapter. Returns false if none was attached.
    pub fn unmount(&mut self) -> bool {
        match self.adapter.take() {
            Some(mut adapter) => {
                adapter.destroy();
                info!(board = %self.board.config.name, "drag adapter destroyed");
                true
            }
            None => false,
        }
    }

    /// Applies a drop reported by the adapter.
    ///
    /// Once both containers resolve to lanes, the adapter is told to revert
    /// its own insertion before the board is touched. Events that cannot be
    /// applied are ignored and leave the board as it was.
    pub fn handle_drop(&mut self, event: DropEvent<A::Container>) -> DropOutcome {
        let (target, source) = match (&event.target, &event.source) {
            (Some(target), Some(source)) => (target, source),
            _ => return self.ignore(IgnoreReason::MissingContainer),
        };

        let (source_key, target_key) = match (
            self.containers.lane_for(source),
            self.containers.lane_for(target),
        ) {
            (Some(source_key), Some(target_key)) => (source_key, target_key),
            _ => return self.ignore(IgnoreReason::UnknownContainer),
        };

        if let Some(adapter) = self.adapter.as_mut() {
            adapter.cancel(true);
        }

        let Some(card_id) = event.element_id else {
            return self.ignore(IgnoreReason::MissingElementId);
        };

        let mv = CardMove {
            source: source_key,
            target: target_key,
            card_id,
            sibling_id: event.sibling_id,
        };

        match self.board.apply_move(&mv) {
            Some(receipt) => {
                self.revision += 1;
                self.render();
                DropOutcome::Moved(receipt)
            }
            None => self.ignore(IgnoreReason::CardNotInSource),
        }
    }

    fn ignore(&self, reason: IgnoreReason) -> DropOutcome {
        debug!(?reason, "drop ignored");
        DropOutcome::Ignored(reason)
    }

    fn render(&mut self) {
        for view in &mut self.views {
            if let Err(err) = view.render(&self.board) {
                warn!(error = %err, revision = self.revision, "board render failed");
            }
        }
    }

    /// Tears down the adapter and hands back the final board
    pub fn into_board(mut self) -> Board {
        self.unmount();
        std::mem::take(&mut self.board)
    }
}

impl<A: DragAdapter> Drop for BoardController<A> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{BoardConfig, CardId, CardStatus, LaneKey},
        source::SampleCards,
    };
    use std::{cell::RefCell, rc::Rc};

    #[derive(Default)]
    struct Calls {
        cancels: Vec<bool>,
        destroyed: usize,
    }

    struct FakeAdapter(Rc<RefCell<Calls>>);

    impl DragAdapter for FakeAdapter {
        type Container = &'static str;

        fn cancel(&mut self, revert: bool) {
            self.0.borrow_mut().cancels.push(revert);
        }

        fn destroy(&mut self) {
            self.0.borrow_mut().destroyed += 1;
        }
    }

    fn setup() -> (BoardController<FakeAdapter>, Rc<RefCell<Calls>>) {
        let board = Board::from_cards(BoardConfig::default(), SampleCards.cards()).unwrap();
        let mut controller =
            BoardController::new(board, ContainerRegistry::new("backlog", "doing", "done"));
        let calls = Rc::new(RefCell::new(Calls::default()));
        controller.mount(FakeAdapter(calls.clone()));
        (controller, calls)
    }

    #[test]
    fn test_drop_moves_card_and_cancels_adapter() {
        let (mut controller, calls) = setup();

        let outcome = controller.handle_drop(DropEvent::new("5", "backlog", "doing"));

        assert!(matches!(outcome, DropOutcome::Moved(ref r) if r.to == LaneKey::InProgress));
        assert_eq!(calls.borrow().cancels, vec![true]);
        assert_eq!(controller.revision(), 1);

        let lane = controller.board().lane(LaneKey::InProgress);
        assert_eq!(lane.len(), 1);
        assert_eq!(lane[0].status, CardStatus::InProgress);
    }

    #[test]
    fn test_drop_with_missing_container_is_ignored() {
        let (mut controller, calls) = setup();
        let before = controller.board().clone();

        let mut event = DropEvent::new("5", "backlog", "doing");
        event.target = None;

        assert_eq!(
            controller.handle_drop(event),
            DropOutcome::Ignored(IgnoreReason::MissingContainer)
        );
        assert_eq!(controller.board(), &before);
        assert!(calls.borrow().cancels.is_empty());
        assert_eq!(controller.revision(), 0);
    }

    #[test]
    fn test_drop_on_unknown_container_is_ignored() {
        let (mut controller, calls) = setup();

        let outcome = controller.handle_drop(DropEvent::new("5", "backlog", "trash"));

        assert_eq!(outcome, DropOutcome::Ignored(IgnoreReason::UnknownContainer));
        assert!(calls.borrow().cancels.is_empty());
    }

    #[test]
    fn test_drop_of_card_not_in_source_still_reverts() {
        let (mut controller, calls) = setup();
        let before = controller.board().clone();

        let outcome = controller.handle_drop(DropEvent::new("5", "doing", "done"));

        assert_eq!(outcome, DropOutcome::Ignored(IgnoreReason::CardNotInSource));
        assert_eq!(controller.board(), &before);
        assert_eq!(calls.borrow().cancels, vec![true]);
    }

    #[test]
    fn test_drop_without_element_id() {
        let (mut controller, _calls) = setup();

        let mut event = DropEvent::new("5", "backlog", "done");
        event.element_id = None;

        assert_eq!(
            controller.handle_drop(event),
            DropOutcome::Ignored(IgnoreReason::MissingElementId)
        );
    }

    #[test]
    fn test_remount_destroys_previous_adapter() {
        let (mut controller, first) = setup();
        let second = Rc::new(RefCell::new(Calls::default()));

        controller.mount(FakeAdapter(second.clone()));
        assert_eq!(first.borrow().destroyed, 1);
        assert_eq!(second.borrow().destroyed, 0);

        assert!(controller.unmount());
        assert!(!controller.unmount());
        assert_eq!(second.borrow().destroyed, 1);
    }

    #[test]
    fn test_drop_of_controller_destroys_adapter_once() {
        let (controller, calls) = setup();
        drop(controller);
        assert_eq!(calls.borrow().destroyed, 1);

        let (controller, calls) = setup();
        let board = controller.into_board();
        assert_eq!(board.total_cards(), 20);
        assert_eq!(calls.borrow().destroyed, 1);
    }

    #[test]
    fn test_views_render_after_each_move() {
        struct Counting(Rc<RefCell<Vec<usize>>>);

        impl BoardView for Counting {
            fn render(&mut self, board: &Board) -> Result<()> {
                self.0
                    .borrow_mut()
                    .push(board.lane(LaneKey::Backlog).len());
                Ok(())
            }
        }

        let (mut controller, _calls) = setup();
        let seen = Rc::new(RefCell::new(Vec::new()));
        controller.add_view(Box::new(Counting(seen.clone()))).unwrap();

        controller.handle_drop(DropEvent::new("1", "backlog", "done"));
        controller.handle_drop(DropEvent::new("404", "backlog", "done"));
        controller.handle_drop(DropEvent::new("2", "backlog", "done").before("1"));

        assert_eq!(*seen.borrow(), vec![20, 19, 18]);
        let done: Vec<_> = controller
            .board()
            .lane(LaneKey::Complete)
            .iter()
            .map(|c| c.id.clone())
            .collect();
        assert_eq!(done, vec![CardId::new("2"), CardId::new("1")]);
    }
}
