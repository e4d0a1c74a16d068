pub mod browser;
pub mod exporter;
pub mod loader;
pub mod theme;

pub use exporter::*;
pub use loader::*;
pub use theme::*;
