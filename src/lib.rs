#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(unused_variables)]

pub mod core;
pub mod db;
pub mod directory;
pub mod models;
pub mod storage;

pub use core::config::BizdirConfig;
pub use core::error::{BizdirError, Result};
pub use db::{DirectoryStore, RestClient, StoreError};
pub use directory::deletion::{DeletionError, DeletionOutcome, FileRemoval, PhotoCleanup};
pub use directory::DirectoryService;
pub use models::{Business, Category, Coordinates, Event, NewBusiness, NewEvent, Photo};
pub use storage::{storage_path_from_url, EdgeFunctionRemover, FileRemover, RemovalError};

/// Storage bucket that holds business photo files.
pub const DEFAULT_PHOTOS_BUCKET: &str = "business-photos";

/// Path of the file-removal function relative to the platform base URL.
pub const DELETE_PHOTO_FN_PATH: &str = "/functions/v1/delete-photo";

/// REST surface of the record store relative to the platform base URL.
pub const REST_PATH: &str = "/rest/v1";

/// Default request timeout for remote calls, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
