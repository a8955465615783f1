use crate::wizard::PageId;

pub type ValidateFn = Box<dyn Fn() -> bool>;

/// A node in the wizard's forward-linked navigation chain. Immutable once
/// created; instances are shared through `Rc` by the registry.
pub struct Page {
    url: PageId,
    name: String,
    next: Option<PageId>,
    validate: ValidateFn,
}

impl Page {
    pub fn new(
        url: impl Into<PageId>,
        name: impl Into<String>,
        next: Option<PageId>,
        validate: Option<ValidateFn>,
    ) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            next: next.filter(|id| !id.as_str().is_empty()),
            validate: validate.unwrap_or_else(|| Box::new(|| true)),
        }
    }

    pub fn url(&self) -> &PageId {
        &self.url
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn next(&self) -> Option<&PageId> {
        self.next.as_ref()
    }

    pub fn validate(&self) -> bool {
        (self.validate)()
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("url", &self.url)
            .field("name", &self.name)
            .field("next", &self.next)
            .finish_non_exhaustive()
    }
}
