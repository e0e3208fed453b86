pub mod models;
pub mod workflow;

pub use models::{DeletionError, DeletionOutcome, FileRemoval, PhotoCleanup};
pub use workflow::delete_business;
