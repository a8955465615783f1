pub mod api;
pub mod collection;
pub mod tree;
pub mod upload;
pub mod wizard;

pub use wizard::builder;
pub use wizard::definition;
pub use wizard::navigator;
pub use wizard::page;
pub use wizard::page_registry;

pub use collection::create;
pub use collection::import;
pub use collection::infer;
pub use collection::model;

pub use api::{ApiError, CollectionApi, ErrorSink};
pub use navigator::WizardNavigator;
pub use page::Page;
pub use page_registry::PageRegistry;
pub use wizard::PageId;
