pub mod board;
pub mod card;
pub mod lane;

pub use board::{Board, BoardConfig, CardMove, Column, MoveReceipt};
pub use card::{Card, CardId, CardStatus};
pub use lane::LaneKey;
