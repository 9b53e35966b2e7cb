//! Keyboard and pointer transitions over `SelectionState`.

pub mod key;
pub mod pointer;

pub use key::{apply_key, next_index, KeyOutcome, NavKey};
pub use pointer::{handle_leave, handle_move, parse_index, IndexTarget};
