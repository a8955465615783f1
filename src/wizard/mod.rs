pub mod builder;
pub mod definition;
pub mod navigator;
pub mod page;
pub mod page_registry;

use std::borrow::Borrow;
use std::fmt;

/// Identifier of a wizard page, matching the address fragment the host UI
/// routes on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageId(String);

impl PageId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Borrow<str> for PageId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for PageId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for PageId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PageId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
