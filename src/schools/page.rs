use log::warn;

use super::{NewSchool, School, SchoolsClient};
use crate::error::{Error, Result};
use crate::geo::GeoClient;
use crate::models::{split_list, Country, Province};
use crate::toast::Toasts;
use crate::view::ListView;

#[derive(Debug, Clone, Default)]
pub struct SchoolForm {
    pub name: String,
    pub country_id: Option<String>,
    pub province_id: Option<String>,
    pub address: String,
    pub student_count: Option<u32>,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    /// Comma-separated photo URLs
    pub photos: String,
}

impl SchoolForm {
    fn validate(&self) -> Result<NewSchool> {
        let country_id = self
            .country_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty());
        let (name, country_id) = match (self.name.trim(), country_id) {
            (name, Some(country_id)) if !name.is_empty() => (name, country_id),
            _ => return Err(Error::validation("School Name and Country are required")),
        };
        Ok(NewSchool {
            name: name.to_string(),
            country_id: country_id.to_string(),
            province_id: self.province_id.clone(),
            address: self.address.clone(),
            student_count: self.student_count,
            contact_name: self.contact_name.clone(),
            contact_phone: self.contact_phone.clone(),
            contact_email: self.contact_email.clone(),
            photos: split_list(&self.photos),
        })
    }
}

pub struct SchoolsPage {
    client: SchoolsClient,
    geo: GeoClient,
    toasts: Toasts,
    pub schools: ListView<School>,
    countries: Vec<Country>,
    provinces: Vec<Province>,
    pub search: String,
}

impl SchoolsPage {
    pub fn new(client: SchoolsClient, geo: GeoClient, toasts: Toasts) -> Self {
        Self {
            client,
            geo,
            toasts,
            schools: ListView::new(),
            countries: Vec::new(),
            provinces: Vec::new(),
            search: String::new(),
        }
    }

    pub async fn load(&mut self) {
        let (schools, countries, provinces) = tokio::join!(
            self.client.list(),
            self.geo.countries(),
            self.geo.provinces()
        );
        match schools {
            Ok(schools) => self.schools.replace(schools),
            Err(err) => self.toasts.failure(&err, "Failed to fetch schools"),
        }
        match countries {
            Ok(countries) => self.countries = countries,
            Err(err) => warn!("failed to fetch countries: {}", err),
        }
        match provinces {
            Ok(provinces) => self.provinces = provinces,
            Err(err) => warn!("failed to fetch provinces: {}", err),
        }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    pub fn visible(&self) -> Vec<&School> {
        self.schools.filtered(&self.search)
    }

    pub async fn create(&mut self, form: &SchoolForm) -> Result<()> {
        let school = match form.validate() {
            Ok(school) => school,
            Err(err) => {
                self.toasts.failure(&err, "Failed to create school");
                return Err(err);
            }
        };

        if let Err(err) = self.client.create(&school).await {
            self.toasts.failure(&err, "Failed to create school");
            return Err(err);
        }
        self.toasts.success("School created successfully");
        self.schools
            .refresh(&self.client, &self.toasts, "Failed to fetch schools")
            .await;
        Ok(())
    }
}
