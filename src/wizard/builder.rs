use crate::wizard::PageId;
use crate::wizard::navigator::WizardNavigator;
use crate::wizard::page::ValidateFn;
use crate::wizard::page_registry::PageRegistry;
use std::fmt;

/// Assembles a navigator from an ordered chain of pages. The first page
/// registered becomes the root unless `root` overrides it.
pub struct WizardBuilder {
    registry: PageRegistry,
    root: Option<PageId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    NoPages,
    UnknownRoot(String),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPages => write!(f, "wizard has no pages"),
            Self::UnknownRoot(url) => write!(f, "root page '{url}' is not registered"),
        }
    }
}

impl std::error::Error for BuildError {}

impl WizardBuilder {
    pub fn new() -> Self {
        Self {
            registry: PageRegistry::new(),
            root: None,
        }
    }

    pub fn page(self, url: impl Into<PageId>, name: impl Into<String>, next: Option<&str>) -> Self {
        self.register(url.into(), name.into(), next.map(PageId::new), None)
    }

    pub fn page_with(
        self,
        url: impl Into<PageId>,
        name: impl Into<String>,
        next: Option<&str>,
        validate: ValidateFn,
    ) -> Self {
        self.register(url.into(), name.into(), next.map(PageId::new), Some(validate))
    }

    pub fn root(mut self, url: impl Into<PageId>) -> Self {
        self.root = Some(url.into());
        self
    }

    pub fn build(self) -> Result<WizardNavigator, BuildError> {
        let Some(root) = self
            .root
            .or_else(|| self.registry.iter().next().map(|(url, _)| url.clone()))
        else {
            return Err(BuildError::NoPages);
        };

        if !self.registry.contains(root.as_str()) {
            return Err(BuildError::UnknownRoot(root.into_inner()));
        }

        WizardNavigator::new(self.registry, root.as_str())
            .ok_or(BuildError::NoPages)
    }

    fn register(
        mut self,
        url: PageId,
        name: String,
        next: Option<PageId>,
        validate: Option<ValidateFn>,
    ) -> Self {
        self.registry.get_or_create(url, name, next, validate);
        self
    }
}

impl Default for WizardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
