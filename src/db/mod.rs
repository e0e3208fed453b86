pub mod client;
pub mod store;

pub use client::{RestClient, StoreError};
pub use store::DirectoryStore;
