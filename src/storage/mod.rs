pub mod path;
pub mod remover;

pub use path::storage_path_from_url;
pub use remover::{EdgeFunctionRemover, FileRemover, RemovalError};
