use crate::wizard::PageId;
use crate::wizard::page::Page;
use crate::wizard::page_registry::PageRegistry;
use std::collections::HashSet;
use std::rc::Rc;

/// Validated traversal of a forward-linked page chain, with back-navigation
/// via a history stack and cursor resync from an external address change.
///
/// Every operation is a silent no-op when its preconditions fail; the
/// navigator never panics and never reports an error. Whether a refused
/// `advance` was blocked by validation or by the chain boundary is not
/// observable here, matching the form layer's contract of surfacing
/// validation errors through the page's own state.
pub struct WizardNavigator {
    registry: PageRegistry,
    root: Rc<Page>,
    current: Rc<Page>,
    // Stack of previous pages, most recent last.
    previous: Vec<Rc<Page>>,
}

impl WizardNavigator {
    /// Returns `None` when `root_url` is not in the registry.
    pub fn new(registry: PageRegistry, root_url: &str) -> Option<Self> {
        let root = Rc::clone(registry.get(root_url)?);
        Some(Self {
            registry,
            current: Rc::clone(&root),
            root,
            previous: Vec::new(),
        })
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn root_page(&self) -> &Rc<Page> {
        &self.root
    }

    pub fn current_page(&self) -> &Rc<Page> {
        &self.current
    }

    pub fn previous_pages(&self) -> &[Rc<Page>] {
        &self.previous
    }

    pub fn has_previous(&self) -> bool {
        !self.previous.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.current.next().is_some()
    }

    pub fn previous_url(&self) -> Option<&str> {
        self.previous.last().map(|page| page.url().as_str())
    }

    pub fn next_url(&self) -> Option<&str> {
        self.current.next().map(PageId::as_str)
    }

    /// The chain from the root, following `next` until a terminal page, an
    /// unregistered successor, or a repeated url. The visited set bounds the
    /// walk so a cyclic chain enumerates each page once instead of looping.
    pub fn page_list(&self) -> Vec<Rc<Page>> {
        let mut pages = Vec::new();
        let mut visited = HashSet::new();
        let mut cursor = Some(Rc::clone(&self.root));
        while let Some(page) = cursor {
            if !visited.insert(page.url().clone()) {
                break;
            }
            cursor = page
                .next()
                .and_then(|id| self.registry.get(id.as_str()))
                .cloned();
            pages.push(page);
        }
        pages
    }

    /// Moves to the successor page if there is one, it is registered, and the
    /// current page validates. Returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        if !self.has_next() || !self.current.validate() {
            return false;
        }
        let Some(next) = self
            .current
            .next()
            .and_then(|id| self.registry.get(id.as_str()))
            .cloned()
        else {
            return false;
        };
        self.previous.push(Rc::clone(&self.current));
        self.current = next;
        true
    }

    /// Pops the history stack into the cursor. Returns whether the cursor
    /// moved.
    pub fn retreat(&mut self) -> bool {
        let Some(page) = self.previous.pop() else {
            return false;
        };
        self.current = page;
        true
    }

    /// Resyncs the cursor to `target_url`, retreating when the target is in
    /// the history stack, advancing when it is in the forward chain, and
    /// leaving everything untouched for an unknown url. The backward walk is
    /// bounded by the stack depth; the forward walk carries a visited set so
    /// a cyclic chain terminates after at most one pass over the registered
    /// pages.
    pub fn go_to(&mut self, target_url: &str) {
        let in_history = self
            .previous
            .iter()
            .any(|page| page.url().as_str() == target_url);

        if in_history {
            // Entering back mode: the first retreat happens before any
            // condition is checked. Every iteration pops the stack, so this
            // cannot loop.
            self.retreat();
            while self.has_previous() && self.current.url().as_str() != target_url {
                self.retreat();
            }
            return;
        }

        let in_chain = self
            .page_list()
            .iter()
            .any(|page| page.url().as_str() == target_url);
        if !in_chain {
            return;
        }

        let mut visited = HashSet::new();
        visited.insert(self.current.url().clone());
        while self.has_next() && self.current.url().as_str() != target_url {
            if !self.advance() {
                break;
            }
            if !visited.insert(self.current.url().clone()) {
                break;
            }
        }
    }
}
