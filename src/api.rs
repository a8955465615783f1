use crate::collection::model::Collection;
use serde::Deserialize;
use std::fmt;

/// Backend failure taxonomy: the server either rejected the request with a
/// message of its own, or the request never completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Rejected(String),
    Transport(String),
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            Self::Rejected(message) | Self::Transport(message) => message,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(message) => write!(f, "request rejected: {message}"),
            Self::Transport(message) => write!(f, "request failed: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Channel for failures that have no field to attach to. The UI shows these
/// as a global notification.
pub trait ErrorSink {
    fn notify(&mut self, message: &str);
}

/// Collects notifications in memory. Handy default sink for tests and for
/// hosts that render notifications themselves.
#[derive(Debug, Default)]
pub struct CollectedErrors {
    messages: Vec<String>,
}

impl CollectedErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

impl ErrorSink for CollectedErrors {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// An existing collection or core reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImportableEntry {
    pub name: String,
    #[serde(default)]
    pub is_core: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectionsAndCores {
    #[serde(default)]
    pub collections: Vec<ImportableEntry>,
    #[serde(default)]
    pub cores: Vec<ImportableEntry>,
}

/// The backend operations the view models need. HTTP details live in the
/// host application; calls block until the backend answers and report the
/// outcome through `Result`.
pub trait CollectionApi {
    fn create_collection(&mut self, collection: &Collection) -> Result<(), ApiError>;

    fn collections_and_cores(&mut self) -> Result<CollectionsAndCores, ApiError>;

    fn import_collections(&mut self, names: &[String]) -> Result<(), ApiError>;
}
