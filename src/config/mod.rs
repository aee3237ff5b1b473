//! Configuration management
//!
//! Settings cover credentials and request behavior; nothing here is
//! persisted by the crate itself.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::Settings;
