pub mod businesses;
pub mod deletion;
pub mod events;
pub mod service;

#[cfg(test)]
pub mod testing;

pub use deletion::{DeletionError, DeletionOutcome, FileRemoval, PhotoCleanup};
pub use service::DirectoryService;
