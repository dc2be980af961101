//! Country and province lookups used by several forms

use crate::error::Result;
use crate::fetch::Backend;
use crate::models::{Country, Province};

#[derive(Debug, Clone)]
pub struct GeoClient {
    backend: Backend,
}

impl GeoClient {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn countries(&self) -> Result<Vec<Country>> {
        self.backend.get("/country").execute().await
    }

    pub async fn provinces(&self) -> Result<Vec<Province>> {
        self.backend.get("/province").execute().await
    }
}

/// Display name of a country id, empty when unknown
pub fn country_name<'a>(countries: &'a [Country], id: &str) -> &'a str {
    countries
        .iter()
        .find(|country| country.id == id)
        .map(|country| country.country_name.as_str())
        .unwrap_or("")
}
