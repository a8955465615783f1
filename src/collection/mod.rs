pub mod create;
pub mod import;
pub mod infer;
pub mod model;
