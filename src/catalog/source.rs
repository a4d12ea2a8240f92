use std::fs;
use std::path::PathBuf;

use reqwest::blocking::Client;
use tracing::debug;

use crate::catalog::branch::Branch;
use crate::catalog::catalog::Catalog;
use crate::catalog::service::Service;
use crate::errors::CatalogError;
use crate::wizard::slots::SlotAvailability;

/// Where the wizard's reference data comes from.
///
/// Sources either return a populated catalog or an error; degrading to the
/// wizard's empty state is the caller's decision.
pub trait CatalogSource {
    fn fetch(&self) -> Result<Catalog, CatalogError>;
}

/// Loads a complete catalog from a local JSON document.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for JsonFileSource {
    fn fetch(&self) -> Result<Catalog, CatalogError> {
        let raw = fs::read_to_string(&self.path)?;
        let catalog: Catalog = serde_json::from_str(&raw)?;
        if catalog.is_empty() {
            return Err(CatalogError::Empty);
        }
        debug!(
            path = %self.path.display(),
            branches = catalog.branches.len(),
            services = catalog.services.len(),
            "catalog loaded from file"
        );
        Ok(catalog)
    }
}

/// Fetches the branch and service lists from the clinic backend.
///
/// Slot availability is not served by the backend; the static fixture is
/// attached until an availability endpoint exists.
pub struct HttpCatalogSource {
    client: Client,
    base_url: String,
}

impl HttpCatalogSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl CatalogSource for HttpCatalogSource {
    fn fetch(&self) -> Result<Catalog, CatalogError> {
        let branches: Vec<Branch> = self
            .client
            .get(self.endpoint("branches"))
            .send()?
            .error_for_status()?
            .json()?;
        let services: Vec<Service> = self
            .client
            .get(self.endpoint("services"))
            .send()?
            .error_for_status()?
            .json()?;
        debug!(
            base = %self.base_url,
            branches = branches.len(),
            services = services.len(),
            "catalog fetched from backend"
        );
        let catalog = Catalog::new(branches, services, SlotAvailability::fixture());
        if catalog.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(catalog)
    }
}

/// Serves a fixed catalog without touching disk or network.
pub struct StaticSource {
    catalog: Catalog,
}

impl StaticSource {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn sample() -> Self {
        Self::new(Catalog::sample())
    }
}

impl CatalogSource for StaticSource {
    fn fetch(&self) -> Result<Catalog, CatalogError> {
        if self.catalog.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(self.catalog.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn json_file_source_round_trips_the_sample() {
        let mut file = NamedTempFile::new().expect("create temp file");
        let json = serde_json::to_string_pretty(&Catalog::sample()).expect("serialize sample");
        file.write_all(json.as_bytes()).expect("write catalog");

        let loaded = JsonFileSource::new(file.path()).fetch().expect("fetch");
        assert_eq!(loaded, Catalog::sample());
    }

    #[test]
    fn json_file_source_rejects_an_empty_document() {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(b"{}").expect("write catalog");

        let err = JsonFileSource::new(file.path()).fetch().unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn json_file_source_reports_missing_file() {
        let err = JsonFileSource::new("/nonexistent/catalog.json")
            .fetch()
            .unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn static_source_serves_clones() {
        let source = StaticSource::sample();
        assert_eq!(source.fetch().expect("fetch"), Catalog::sample());
    }
}
