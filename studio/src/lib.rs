pub mod dashboard;
mod error;
pub mod logging;
pub mod navigation;
pub mod site;
pub mod validators;

pub use error::StudioError;

// Always expose testing module (integration tests need it)
pub mod testing;
