//! Branch and service reference data plus the sources that load it.

pub mod branch;
#[allow(clippy::module_inception)]
pub mod catalog;
pub mod service;
pub mod source;
pub mod text;

pub use branch::Branch;
pub use catalog::Catalog;
pub use service::Service;
pub use source::{CatalogSource, HttpCatalogSource, JsonFileSource, StaticSource};
pub use text::{Language, LocalizedText};
