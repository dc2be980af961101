//! Three-step sign-up wizard

use log::warn;

use super::{AuthClient, Registration};
use crate::error::{Error, Result};
use crate::fetch::Upload;
use crate::geo::{self, GeoClient};
use crate::models::Country;
use crate::toast::Toasts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Account,
    Contact,
    Security,
}

impl WizardStep {
    pub fn number(&self) -> u8 {
        match self {
            Self::Account => 1,
            Self::Contact => 2,
            Self::Security => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Account => "Account Details",
            Self::Contact => "Location & Contact",
            Self::Security => "Security & Review",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Account => Self::Contact,
            Self::Contact | Self::Security => Self::Security,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Account | Self::Contact => Self::Account,
            Self::Security => Self::Contact,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar: Option<Upload>,
    pub address: String,
    pub country_id: String,
    pub contact_phone: String,
    pub password: String,
    pub confirm_password: String,
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

impl RegistrationForm {
    pub fn account_complete(&self) -> bool {
        filled(&self.first_name) && filled(&self.last_name) && filled(&self.email)
    }

    pub fn contact_complete(&self) -> bool {
        filled(&self.address) && filled(&self.country_id) && filled(&self.contact_phone)
    }

    pub fn security_complete(&self) -> bool {
        !self.password.is_empty() && self.password == self.confirm_password
    }

    /// Avatar placeholder letters; "U" before any name is typed
    pub fn initials(&self) -> String {
        let initials: String = [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|name| name.trim().chars().next())
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "U".to_string()
        } else {
            initials
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

pub struct RegistrationWizard {
    client: AuthClient,
    geo: GeoClient,
    toasts: Toasts,
    step: WizardStep,
    countries: Vec<Country>,
    pub form: RegistrationForm,
}

impl RegistrationWizard {
    pub fn new(client: AuthClient, geo: GeoClient, toasts: Toasts) -> Self {
        Self {
            client,
            geo,
            toasts,
            step: WizardStep::Account,
            countries: Vec::new(),
            form: RegistrationForm::default(),
        }
    }

    /// Fill the country dropdown. Failures only leave it empty.
    pub async fn load_countries(&mut self) {
        match self.geo.countries().await {
            Ok(countries) => self.countries = countries,
            Err(err) => warn!("failed to fetch countries: {}", err),
        }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Advance one step if the current step's fields are filled
    pub fn next(&mut self) -> bool {
        let blocked = match self.step {
            WizardStep::Account if !self.form.account_complete() => {
                Some("Please fill all required fields for Account Details.")
            }
            WizardStep::Contact if !self.form.contact_complete() => {
                Some("Please fill all required fields for Location & Contact.")
            }
            _ => None,
        };
        if let Some(message) = blocked {
            self.toasts.error(message);
            return false;
        }
        if self.step == WizardStep::Security {
            return false;
        }
        self.step = self.step.next();
        true
    }

    pub fn back(&mut self) {
        self.step = self.step.prev();
    }

    /// Name of the selected country, for the review step
    pub fn country_name(&self) -> &str {
        geo::country_name(&self.countries, &self.form.country_id)
    }

    /// Submit from the last step; returns the route to continue to
    pub async fn submit(&mut self) -> Result<&'static str> {
        if self.step != WizardStep::Security
            || !self.form.account_complete()
            || !self.form.contact_complete()
        {
            let message = "Please complete every step before submitting.";
            self.toasts.error(message);
            return Err(Error::validation(message));
        }
        if !self.form.security_complete() {
            let message = "Please ensure passwords match and are provided.";
            self.toasts.error(message);
            return Err(Error::validation(message));
        }

        let registration = Registration {
            full_name: self.form.full_name(),
            email: self.form.email.trim().to_string(),
            address: self.form.address.clone(),
            phone: self.form.contact_phone.clone(),
            password: self.form.password.clone(),
            country_id: self.form.country_id.clone(),
            avatar: self.form.avatar.clone(),
        };

        match self.client.register(registration).await {
            Ok(()) => {
                self.toasts.success("Registration complete!");
                Ok("/auth/login")
            }
            Err(err) => {
                let message = match &err {
                    Error::Api {
                        message: Some(message),
                        ..
                    } => format!("Registration failed: {}", message),
                    _ => "Something went wrong while registering. Please try again.".to_string(),
                };
                self.toasts.error(message);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_default_to_u() {
        let mut form = RegistrationForm::default();
        assert_eq!(form.initials(), "U");
        form.first_name = "anita".to_string();
        assert_eq!(form.initials(), "A");
        form.last_name = "sharma".to_string();
        assert_eq!(form.initials(), "AS");
    }

    #[test]
    fn whitespace_does_not_count_as_filled() {
        let form = RegistrationForm {
            first_name: "Ramesh".to_string(),
            last_name: "   ".to_string(),
            email: "ramesh@whv.org".to_string(),
            ..Default::default()
        };
        assert!(!form.account_complete());
    }

    #[test]
    fn passwords_must_match_and_be_present() {
        let mut form = RegistrationForm::default();
        assert!(!form.security_complete());
        form.password = "namaste123".to_string();
        form.confirm_password = "namaste124".to_string();
        assert!(!form.security_complete());
        form.confirm_password = "namaste123".to_string();
        assert!(form.security_complete());
    }

    #[test]
    fn step_titles_and_numbers() {
        assert_eq!(WizardStep::Account.number(), 1);
        assert_eq!(WizardStep::Security.title(), "Security & Review");
        assert_eq!(WizardStep::Account.prev(), WizardStep::Account);
        assert_eq!(WizardStep::Security.next(), WizardStep::Security);
    }
}
