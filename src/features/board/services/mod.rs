pub mod card_operations;

pub use card_operations::*;
