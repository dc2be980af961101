//! NGO CRM Rust Client Library
//!
//! A typed client for the NGO management backend (`/api/v1`), plus the page
//! state behind each management screen: dashboards, expense and project review,
//! events, schools, messaging, notifications, user management and sign-in.

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod expenses;
pub mod fetch;
pub mod geo;
pub mod messages;
pub mod models;
pub mod notifications;
pub mod projects;
pub mod schools;
pub mod toast;
pub mod users;
pub mod view;

/// Client-held legal case, ticket and report stores
pub use ngo_crm_demo as demo;

use crate::auth::{AuthClient, Identity, IdentityStore, LoginPage, RegistrationWizard};
use crate::config::CrmConfig;
use crate::dashboard::{DashboardClient, DashboardPage, FinanceDashboardPage};
use crate::error::Result;
use crate::events::{EventsClient, EventsPage};
use crate::expenses::{ExpenseReviewPage, ExpensesClient};
use crate::fetch::Backend;
use crate::geo::GeoClient;
use crate::messages::{ChatPage, MessagesClient, MessagesPage};
use crate::notifications::{NotificationsClient, NotificationsPage};
use crate::projects::{ProjectApprovalPage, ProjectsClient};
use crate::schools::{SchoolsClient, SchoolsPage};
use crate::toast::Toasts;
use crate::users::{UserManagementPage, UsersClient};

/// The main entry point for the CRM client.
///
/// Owns the cookie-carrying HTTP client, the signed-in identity and the toast
/// feed; every resource client and page built from it shares all three.
#[derive(Debug, Clone)]
pub struct Crm {
    backend: Backend,
    identity: IdentityStore,
    toasts: Toasts,
}

impl Crm {
    /// Create a new client
    ///
    /// # Example
    ///
    /// ```
    /// use ngo_crm::{Crm, config::CrmConfig};
    ///
    /// let config = CrmConfig::new("http://localhost:4000").unwrap();
    /// let crm = Crm::new(config).unwrap();
    /// assert!(!crm.identity().is_signed_in());
    /// ```
    pub fn new(config: CrmConfig) -> Result<Self> {
        Ok(Self {
            backend: Backend::new(config)?,
            identity: IdentityStore::new(),
            toasts: Toasts::new(),
        })
    }

    /// Create a client from `NGO_CRM_BACKEND_URL` (a `.env` file is honoured)
    pub fn from_env() -> Result<Self> {
        Self::new(CrmConfig::from_env()?)
    }

    pub fn config(&self) -> &CrmConfig {
        self.backend.config()
    }

    pub fn identity(&self) -> &IdentityStore {
        &self.identity
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn auth(&self) -> AuthClient {
        AuthClient::new(self.backend.clone())
    }

    pub fn users(&self) -> UsersClient {
        UsersClient::new(self.backend.clone())
    }

    pub fn geo(&self) -> GeoClient {
        GeoClient::new(self.backend.clone())
    }

    pub fn events(&self) -> EventsClient {
        EventsClient::new(self.backend.clone())
    }

    pub fn schools(&self) -> SchoolsClient {
        SchoolsClient::new(self.backend.clone())
    }

    pub fn notifications(&self) -> NotificationsClient {
        NotificationsClient::new(self.backend.clone())
    }

    pub fn messages(&self) -> MessagesClient {
        MessagesClient::new(self.backend.clone())
    }

    pub fn expenses(&self) -> ExpensesClient {
        ExpensesClient::new(self.backend.clone())
    }

    pub fn projects(&self) -> ProjectsClient {
        ProjectsClient::new(self.backend.clone())
    }

    pub fn dashboard(&self) -> DashboardClient {
        DashboardClient::new(self.backend.clone())
    }

    /// Restore the session from the cookie jar if nobody is signed in yet
    pub async fn verify(&self) -> Option<Identity> {
        self.auth()
            .ensure_identity(&self.identity, &self.toasts)
            .await
    }

    pub fn login_page(&self) -> LoginPage {
        LoginPage::new(self.auth(), self.identity.clone(), self.toasts.clone())
    }

    pub fn registration_wizard(&self) -> RegistrationWizard {
        RegistrationWizard::new(self.auth(), self.geo(), self.toasts.clone())
    }

    pub fn dashboard_page(&self) -> DashboardPage {
        DashboardPage::new(self.dashboard(), self.toasts.clone())
    }

    pub fn finance_dashboard_page(&self, year: i32) -> FinanceDashboardPage {
        FinanceDashboardPage::new(self.dashboard(), self.toasts.clone(), year)
    }

    pub fn expense_review_page(&self) -> ExpenseReviewPage {
        ExpenseReviewPage::new(self.expenses(), self.toasts.clone())
    }

    pub fn project_approval_page(&self) -> ProjectApprovalPage {
        ProjectApprovalPage::new(self.projects(), self.toasts.clone())
    }

    pub fn events_page(&self) -> EventsPage {
        EventsPage::new(self.events(), self.users(), self.toasts.clone())
    }

    pub fn schools_page(&self) -> SchoolsPage {
        SchoolsPage::new(self.schools(), self.geo(), self.toasts.clone())
    }

    pub fn notifications_page(&self) -> NotificationsPage {
        NotificationsPage::new(self.notifications(), self.users(), self.toasts.clone())
    }

    pub fn messages_page(&self) -> MessagesPage {
        MessagesPage::new(self.messages(), self.users(), self.toasts.clone())
    }

    /// Conversation between `me` and `partner_id`
    pub fn chat_page(&self, me: &str, partner_id: &str) -> ChatPage {
        ChatPage::new(
            self.messages(),
            self.users(),
            self.toasts.clone(),
            me,
            partner_id,
        )
    }

    pub fn user_management_page(&self) -> UserManagementPage {
        UserManagementPage::new(self.users(), self.geo(), self.toasts.clone())
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::{ClientOptions, CrmConfig};
    pub use crate::error::{Error, Result};
    pub use crate::models::{ApprovalStatus, Channel, Role};
    pub use crate::toast::{Toast, ToastLevel, Toasts};
    pub use crate::Crm;
}
