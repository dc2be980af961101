use super::{AuthClient, IdentityStore, LoginCredentials};
use crate::error::{Error, Result};
use crate::toast::Toasts;

pub struct LoginPage {
    client: AuthClient,
    identity: IdentityStore,
    toasts: Toasts,
}

impl LoginPage {
    pub fn new(client: AuthClient, identity: IdentityStore, toasts: Toasts) -> Self {
        Self {
            client,
            identity,
            toasts,
        }
    }

    /// Sign in and return the route the user's role lands on, if any
    pub async fn submit(&self, email: &str, password: &str) -> Result<Option<&'static str>> {
        if email.trim().is_empty() || password.is_empty() {
            let message = "Please enter email and password!";
            self.toasts.error(message);
            return Err(Error::validation(message));
        }

        let credentials = LoginCredentials {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        match self.client.login(&credentials).await {
            Ok(identity) => {
                let route = identity.role.home_route();
                self.identity.set(identity);
                self.toasts.success("Login successful!");
                Ok(route)
            }
            Err(err) => {
                self.toasts.failure(&err, "Something went wrong");
                Err(err)
            }
        }
    }
}
