use crate::wizard::PageId;
use crate::wizard::page::{Page, ValidateFn};
use indexmap::IndexMap;
use std::rc::Rc;

/// Memoizing page factory. The first call for a given url creates the page;
/// later calls return that same instance and ignore the other arguments.
///
/// Each navigator owns its own registry, so independent wizards never share
/// page state.
pub struct PageRegistry {
    pages: IndexMap<PageId, Rc<Page>>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self {
            pages: IndexMap::new(),
        }
    }

    pub fn get_or_create(
        &mut self,
        url: impl Into<PageId>,
        name: impl Into<String>,
        next: Option<PageId>,
        validate: Option<ValidateFn>,
    ) -> Rc<Page> {
        let url = url.into();
        if let Some(existing) = self.pages.get(&url) {
            return Rc::clone(existing);
        }
        let page = Rc::new(Page::new(url.clone(), name, next, validate));
        self.pages.insert(url, Rc::clone(&page));
        page
    }

    pub fn get(&self, url: &str) -> Option<&Rc<Page>> {
        self.pages.get(url)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.pages.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PageId, &Rc<Page>)> {
        self.pages.iter()
    }
}

impl Default for PageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
