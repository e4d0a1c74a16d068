pub mod use_board;
pub mod use_theme;

pub use use_board::*;
pub use use_theme::*;
