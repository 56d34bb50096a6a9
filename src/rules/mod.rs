//! Game rules for tic-tac-toe: win and draw detection.

pub(crate) mod draw;
pub(crate) mod win;

pub use draw::is_full;
pub use win::{check_winner, has_line};
