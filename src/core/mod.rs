pub mod config;
pub mod error;

pub use config::BizdirConfig;
pub use error::{BizdirError, Result};
