//! Record loading port

use std::path::Path;

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("decode error: {0}")]
    Decode(String),
}

/// Decodes an on-disk structured record into a nested value tree
pub trait RecordLoaderPort {
    fn load(&self, path: &Path) -> Result<Value, LoadError>;
}
