use crate::api::ApiError;
use indexmap::IndexMap;

/// One entry in a tree listing. `has_children` lets the widget draw an
/// expander before anything underneath has been fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub name: String,
    pub has_children: bool,
}

impl TreeEntry {
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_children: false,
        }
    }

    pub fn branch(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_children: true,
        }
    }
}

/// Where tree data comes from. The host wires this to its listing endpoint.
pub trait ChildSource {
    fn fetch_children(&mut self, path: &str) -> Result<Vec<TreeEntry>, ApiError>;
}

/// Lazy data loader for a tree widget: children are fetched the first time a
/// path is expanded and served from the cache afterwards. Fetch failures are
/// not cached, so a retry hits the source again.
pub struct TreeLoader<S: ChildSource> {
    source: S,
    cache: IndexMap<String, Vec<TreeEntry>>,
}

impl<S: ChildSource> TreeLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: IndexMap::new(),
        }
    }

    pub fn is_loaded(&self, path: &str) -> bool {
        self.cache.contains_key(path)
    }

    pub fn children(&mut self, path: &str) -> Result<&[TreeEntry], ApiError> {
        if !self.cache.contains_key(path) {
            let entries = self.source.fetch_children(path)?;
            self.cache.insert(path.to_string(), entries);
        }
        Ok(self.cache.get(path).map(Vec::as_slice).unwrap_or(&[]))
    }

    /// Drops a cached listing so the next expansion refetches it.
    pub fn invalidate(&mut self, path: &str) {
        self.cache.shift_remove(path);
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
