//! Login, registration and session verification

mod login;
mod register;
mod session;
mod types;

pub use login::*;
pub use register::*;
pub use session::*;
pub use types::*;

use log::{info, warn};
use reqwest::multipart::Form;

use crate::error::Result;
use crate::fetch::{Backend, Upload};
use crate::toast::Toasts;

/// Fields posted as multipart to `/auth/register`
#[derive(Debug, Clone)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub password: String,
    pub country_id: String,
    pub avatar: Option<Upload>,
}

impl Registration {
    fn into_form(self) -> Result<Form> {
        let mut form = Form::new()
            .text("fullName", self.full_name)
            .text("email", self.email)
            .text("address", self.address)
            .text("phone", self.phone)
            .text("password", self.password)
            .text("countryId", self.country_id);
        if let Some(avatar) = self.avatar {
            form = form.part("avatar", avatar.into_part()?);
        }
        Ok(form)
    }
}

/// Client for `/auth`
#[derive(Debug, Clone)]
pub struct AuthClient {
    backend: Backend,
}

impl AuthClient {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// Sign in; the session cookie lands in the shared client's jar
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<Identity> {
        let user: AuthUser = self
            .backend
            .post("/auth/login")
            .json(credentials)?
            .execute()
            .await?;
        info!("signed in as {} ({})", user.email, user.role);
        Ok(user.into())
    }

    pub async fn register(&self, registration: Registration) -> Result<()> {
        let email = registration.email.clone();
        let form = registration.into_form()?;
        self.backend
            .post("/auth/register")
            .multipart(form)
            .execute_unit()
            .await?;
        info!("registered {}", email);
        Ok(())
    }

    /// Ask the backend who the session cookie belongs to
    pub async fn verify(&self) -> Result<Identity> {
        let user: AuthUser = self.backend.get("/auth/verify").execute().await?;
        Ok(user.into())
    }

    /// Restore the identity after a reload when the store is still empty.
    ///
    /// Returns what is in the store afterwards.
    pub async fn ensure_identity(
        &self,
        store: &IdentityStore,
        toasts: &Toasts,
    ) -> Option<Identity> {
        if let Some(identity) = store.get() {
            return Some(identity);
        }
        match self.verify().await {
            Ok(identity) => {
                toasts.success(format!("Welcome back {}", identity.full_name));
                store.set(identity.clone());
                Some(identity)
            }
            Err(err) => {
                warn!("session verification failed: {}", err);
                toasts.error("Login Now");
                None
            }
        }
    }
}
