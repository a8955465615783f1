use crate::api::{ApiError, CollectionApi, ErrorSink};
use crate::collection::infer::FieldSniffer;
use crate::collection::model::{Collection, DataType};
use crate::wizard::navigator::WizardNavigator;

/// Outcome of a save attempt. Validation failures keep the user on the page;
/// the page's own error state carries the details, so there is no message
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    ValidationFailed,
    Failed,
}

/// Drives the create-collection flow: wizard navigation on one side, the
/// collection under construction on the other.
pub struct CreateCollectionViewModel {
    wizard: WizardNavigator,
    collection: Collection,
    sniffer: FieldSniffer,
    data_type: DataType,
    field_separator: String,
}

impl CreateCollectionViewModel {
    pub fn new(wizard: WizardNavigator) -> Self {
        Self {
            wizard,
            collection: Collection::default(),
            sniffer: FieldSniffer::new(),
            data_type: DataType::Separated,
            field_separator: ",".to_string(),
        }
    }

    pub fn wizard(&self) -> &WizardNavigator {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut WizardNavigator {
        &mut self.wizard
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut Collection {
        &mut self.collection
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn set_data_type(&mut self, data_type: DataType) {
        self.data_type = data_type;
    }

    pub fn field_separator(&self) -> &str {
        &self.field_separator
    }

    pub fn set_field_separator(&mut self, separator: impl Into<String>) {
        self.field_separator = separator.into();
    }

    /// Replaces the field list with types sniffed from sample data. The
    /// first row is taken as the header, the second as representative
    /// values; anything shorter leaves the fields untouched.
    pub fn infer_fields(&mut self, sample: &[Vec<String>]) {
        let [header, first_row, ..] = sample else {
            return;
        };
        let fields = self.sniffer.infer_fields(header, first_row);
        self.collection.set_fields(fields);
    }

    /// Posts the collection if the current page validates. Server and
    /// transport failures go to the error sink; validation failure is left
    /// to the page's own error state.
    pub fn save(&mut self, api: &mut dyn CollectionApi, errors: &mut dyn ErrorSink) -> SaveOutcome {
        if !self.wizard.current_page().validate() {
            return SaveOutcome::ValidationFailed;
        }

        match api.create_collection(&self.collection) {
            Ok(()) => SaveOutcome::Saved,
            Err(ApiError::Rejected(message)) | Err(ApiError::Transport(message)) => {
                errors.notify(&message);
                SaveOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CreateCollectionViewModel, SaveOutcome};
    use crate::api::{ApiError, CollectedErrors, CollectionApi, CollectionsAndCores};
    use crate::collection::model::{Collection, FieldType};
    use crate::wizard::builder::WizardBuilder;
    use crate::wizard::navigator::WizardNavigator;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeApi {
        created: Vec<Collection>,
        fail_with: Option<ApiError>,
    }

    impl CollectionApi for FakeApi {
        fn create_collection(&mut self, collection: &Collection) -> Result<(), ApiError> {
            if let Some(err) = self.fail_with.clone() {
                return Err(err);
            }
            self.created.push(collection.clone());
            Ok(())
        }

        fn collections_and_cores(&mut self) -> Result<CollectionsAndCores, ApiError> {
            Ok(CollectionsAndCores::default())
        }

        fn import_collections(&mut self, _names: &[String]) -> Result<(), ApiError> {
            Ok(())
        }
    }

    fn wizard() -> WizardNavigator {
        WizardBuilder::new()
            .page("name", "Name", Some("fields"))
            .page("fields", "Fields", None)
            .build()
            .expect("chain builds")
    }

    fn gated_wizard(allow: Rc<Cell<bool>>) -> WizardNavigator {
        WizardBuilder::new()
            .page_with("name", "Name", None, Box::new(move || allow.get()))
            .build()
            .expect("chain builds")
    }

    #[test]
    fn save_posts_the_collection() {
        let mut model = CreateCollectionViewModel::new(wizard());
        model.collection_mut().name = "logs".to_string();
        model.collection_mut().add_field("ts", FieldType::Integer);

        let mut api = FakeApi::default();
        let mut errors = CollectedErrors::new();
        assert_eq!(model.save(&mut api, &mut errors), SaveOutcome::Saved);
        assert_eq!(api.created.len(), 1);
        assert_eq!(api.created[0].name, "logs");
        assert!(errors.messages().is_empty());
    }

    #[test]
    fn save_stays_on_page_when_validation_fails() {
        let allow = Rc::new(Cell::new(false));
        let mut model = CreateCollectionViewModel::new(gated_wizard(Rc::clone(&allow)));

        let mut api = FakeApi::default();
        let mut errors = CollectedErrors::new();
        assert_eq!(
            model.save(&mut api, &mut errors),
            SaveOutcome::ValidationFailed
        );
        assert!(api.created.is_empty());
        assert!(errors.messages().is_empty());
    }

    #[test]
    fn server_rejection_reaches_the_error_sink() {
        let mut model = CreateCollectionViewModel::new(wizard());
        let mut api = FakeApi {
            fail_with: Some(ApiError::Rejected("name already in use".to_string())),
            ..FakeApi::default()
        };
        let mut errors = CollectedErrors::new();

        assert_eq!(model.save(&mut api, &mut errors), SaveOutcome::Failed);
        assert_eq!(errors.messages(), ["name already in use"]);
    }

    #[test]
    fn infer_fields_needs_a_header_and_a_data_row() {
        let mut model = CreateCollectionViewModel::new(wizard());
        model.collection_mut().add_field("keep", FieldType::String);

        model.infer_fields(&[vec!["only-header".to_string()]]);
        assert_eq!(model.collection().fields.len(), 1);
        assert_eq!(model.collection().fields[0].name, "keep");

        model.infer_fields(&[
            vec!["id".to_string(), "price".to_string()],
            vec!["1".to_string(), "2.5".to_string()],
        ]);
        let types: Vec<FieldType> = model
            .collection()
            .fields
            .iter()
            .map(|f| f.field_type)
            .collect();
        assert_eq!(types, [FieldType::Integer, FieldType::Float]);
    }
}
