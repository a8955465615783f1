use crate::api::{ApiError, CollectionApi, ErrorSink, ImportableEntry};

/// An existing collection or core with its selection state in the import
/// list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Importable {
    pub entry: ImportableEntry,
    pub selected: bool,
}

/// Drives the import flow: list what already exists on the backend, let the
/// user tick entries, post the selection.
#[derive(Debug, Default)]
pub struct ImportCollectionViewModel {
    collections: Vec<Importable>,
    cores: Vec<Importable>,
}

impl ImportCollectionViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collections(&self) -> &[Importable] {
        &self.collections
    }

    pub fn cores(&self) -> &[Importable] {
        &self.cores
    }

    /// Collections first, then cores, the order the UI lists them in.
    pub fn importables(&self) -> impl Iterator<Item = &Importable> {
        self.collections.iter().chain(self.cores.iter())
    }

    pub fn selected_importables(&self) -> Vec<&Importable> {
        self.importables().filter(|item| item.selected).collect()
    }

    pub fn set_selected(&mut self, name: &str, selected: bool) {
        for item in self.collections.iter_mut().chain(self.cores.iter_mut()) {
            if item.entry.name == name {
                item.selected = selected;
            }
        }
    }

    /// Refreshes the list from the backend. Selections are reset; a failed
    /// fetch keeps the previous list and notifies the sink.
    pub fn load(&mut self, api: &mut dyn CollectionApi, errors: &mut dyn ErrorSink) -> bool {
        match api.collections_and_cores() {
            Ok(listing) => {
                self.collections = listing.collections.into_iter().map(unselected).collect();
                self.cores = listing.cores.into_iter().map(unselected).collect();
                true
            }
            Err(err) => {
                errors.notify(err.message());
                false
            }
        }
    }

    /// Posts the selected entries. A no-op when nothing is selected.
    pub fn import_selected(
        &mut self,
        api: &mut dyn CollectionApi,
        errors: &mut dyn ErrorSink,
    ) -> bool {
        let names: Vec<String> = self
            .selected_importables()
            .iter()
            .map(|item| item.entry.name.clone())
            .collect();
        if names.is_empty() {
            return true;
        }

        match api.import_collections(&names) {
            Ok(()) => true,
            Err(ApiError::Rejected(message)) | Err(ApiError::Transport(message)) => {
                errors.notify(&message);
                false
            }
        }
    }
}

fn unselected(entry: ImportableEntry) -> Importable {
    Importable {
        entry,
        selected: false,
    }
}

#[cfg(test)]
mod tests {
    use super::ImportCollectionViewModel;
    use crate::api::{
        ApiError, CollectedErrors, CollectionApi, CollectionsAndCores, ImportableEntry,
    };
    use crate::collection::model::Collection;

    struct FakeApi {
        listing: Result<CollectionsAndCores, ApiError>,
        imported: Vec<Vec<String>>,
    }

    impl FakeApi {
        fn with_entries(collections: &[&str], cores: &[&str]) -> Self {
            let entry = |name: &&str, is_core: bool| ImportableEntry {
                name: name.to_string(),
                is_core,
            };
            Self {
                listing: Ok(CollectionsAndCores {
                    collections: collections.iter().map(|n| entry(n, false)).collect(),
                    cores: cores.iter().map(|n| entry(n, true)).collect(),
                }),
                imported: Vec::new(),
            }
        }
    }

    impl CollectionApi for FakeApi {
        fn create_collection(&mut self, _collection: &Collection) -> Result<(), ApiError> {
            Ok(())
        }

        fn collections_and_cores(&mut self) -> Result<CollectionsAndCores, ApiError> {
            self.listing.clone()
        }

        fn import_collections(&mut self, names: &[String]) -> Result<(), ApiError> {
            self.imported.push(names.to_vec());
            Ok(())
        }
    }

    #[test]
    fn load_populates_both_lists_unselected() {
        let mut model = ImportCollectionViewModel::new();
        let mut api = FakeApi::with_entries(&["logs", "tweets"], &["core1"]);
        let mut errors = CollectedErrors::new();

        assert!(model.load(&mut api, &mut errors));
        assert_eq!(model.collections().len(), 2);
        assert_eq!(model.cores().len(), 1);
        assert!(model.selected_importables().is_empty());
    }

    #[test]
    fn load_failure_keeps_previous_list() {
        let mut model = ImportCollectionViewModel::new();
        let mut api = FakeApi::with_entries(&["logs"], &[]);
        let mut errors = CollectedErrors::new();
        model.load(&mut api, &mut errors);

        api.listing = Err(ApiError::Transport("connection refused".to_string()));
        assert!(!model.load(&mut api, &mut errors));
        assert_eq!(model.collections().len(), 1);
        assert_eq!(errors.messages(), ["connection refused"]);
    }

    #[test]
    fn import_posts_only_the_selection() {
        let mut model = ImportCollectionViewModel::new();
        let mut api = FakeApi::with_entries(&["logs", "tweets"], &["core1"]);
        let mut errors = CollectedErrors::new();
        model.load(&mut api, &mut errors);

        model.set_selected("tweets", true);
        model.set_selected("core1", true);

        assert!(model.import_selected(&mut api, &mut errors));
        assert_eq!(api.imported, [vec!["tweets".to_string(), "core1".to_string()]]);
    }

    #[test]
    fn import_with_nothing_selected_is_a_no_op() {
        let mut model = ImportCollectionViewModel::new();
        let mut api = FakeApi::with_entries(&["logs"], &[]);
        let mut errors = CollectedErrors::new();
        model.load(&mut api, &mut errors);

        assert!(model.import_selected(&mut api, &mut errors));
        assert!(api.imported.is_empty());
    }
}
