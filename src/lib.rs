//! # Swimlane Core
//!
//! Board state and drag-and-drop reconciliation for a three-lane kanban view
//! (Backlog / In Progress / Complete).
//!
//! The board owns the card order. Drop events from a drag library are
//! resolved to lane moves and applied to the board, and the view is
//! re-rendered from the result.

pub mod dnd;
pub mod domain;
pub mod error;
pub mod source;
pub mod view;

// Re-export commonly used types
pub use dnd::{
    BoardController, BoardView, ContainerRegistry, DragAdapter, DropEvent, DropOutcome,
    IgnoreReason,
};
pub use domain::{
    board::{Board, BoardConfig, CardMove, Column, MoveReceipt},
    card::{Card, CardId, CardStatus},
    lane::LaneKey,
};
pub use error::{Result, SwimlaneError};
pub use source::{CardSource, JsonFileSource, SampleCards};
pub use view::{render_board, HtmlView};
