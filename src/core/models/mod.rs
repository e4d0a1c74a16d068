pub mod board;
pub mod card;
pub mod drag;
pub mod theme;

// Board data model shared by the loader, the renderer and the card operations
pub use board::BoardStore;
pub use card::{Card, CardField};
pub use drag::DragState;
pub use theme::Theme;
