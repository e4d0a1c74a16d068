pub mod header;
pub mod board;
pub mod column;
pub mod card;

pub use header::BoardHeader;
pub use board::WeekBoard;
pub use column::DayColumn;
pub use card::CardItem;
