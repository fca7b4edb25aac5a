//! State Management
//!
//! The shared board controller and the signals it renders into.

pub mod board;
pub mod dialogs;

pub use board::{provide_board, use_board, use_board_signals};
