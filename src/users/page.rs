//! User management screen: country/role filters, role changes and deletion

use log::warn;

use super::UsersClient;
use crate::error::Result;
use crate::geo::GeoClient;
use crate::models::{Country, Role, User};
use crate::toast::Toasts;
use crate::view::{admits, Dialog};

/// Country dropdown plus role tab; `None` is the "All" entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub country: Option<String>,
    pub role: Option<Role>,
}

impl UserFilter {
    pub fn admits(&self, user: &User) -> bool {
        admits(&self.country, &user.country_id) && admits(&self.role, &user.role)
    }
}

pub struct UserManagementPage {
    client: UsersClient,
    geo: GeoClient,
    toasts: Toasts,
    users: Vec<User>,
    countries: Vec<Country>,
    pub filter: UserFilter,
    pub role_dialog: Dialog<User>,
    pub delete_dialog: Dialog<User>,
}

impl UserManagementPage {
    pub fn new(client: UsersClient, geo: GeoClient, toasts: Toasts) -> Self {
        Self {
            client,
            geo,
            toasts,
            users: Vec::new(),
            countries: Vec::new(),
            filter: UserFilter::default(),
            role_dialog: Dialog::new(),
            delete_dialog: Dialog::new(),
        }
    }

    /// Fetch users and countries; each slice updates on its own
    pub async fn load(&mut self) {
        let (users, countries) = tokio::join!(self.client.list(), self.geo.countries());
        match users {
            Ok(users) => self.users = users,
            Err(err) => self.toasts.failure(&err, "Failed to fetch users"),
        }
        match countries {
            Ok(countries) => self.countries = countries,
            Err(err) => warn!("error fetching countries: {}", err),
        }
    }

    async fn refetch_users(&mut self) {
        match self.client.list().await {
            Ok(users) => self.users = users,
            Err(err) => self.toasts.failure(&err, "Failed to fetch users"),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Rows matching both the country and the role selection
    pub fn visible(&self) -> Vec<&User> {
        self.users
            .iter()
            .filter(|user| self.filter.admits(user))
            .collect()
    }

    pub fn open_role_change(&mut self, user_id: &str) -> bool {
        match self.users.iter().find(|user| user.id == user_id) {
            Some(user) => {
                self.role_dialog.open(user.clone());
                true
            }
            None => false,
        }
    }

    /// Save the role picked in the dialog. Unchanged roles send nothing.
    pub async fn save_role(&mut self, new_role: Role) -> Result<bool> {
        let Some(user) = self.role_dialog.take() else {
            return Ok(false);
        };
        if user.role == new_role {
            return Ok(false);
        }

        if let Err(err) = self.client.update_role(&user.id, new_role).await {
            self.toasts.failure(&err, "Failed to update role");
            return Err(err);
        }
        self.toasts.success("Role updated successfully");
        self.refetch_users().await;
        Ok(true)
    }

    pub fn request_delete(&mut self, user_id: &str) -> bool {
        match self.users.iter().find(|user| user.id == user_id) {
            Some(user) => {
                self.delete_dialog.open(user.clone());
                true
            }
            None => false,
        }
    }

    /// Prompt text for the delete confirmation
    pub fn delete_prompt(&self) -> Option<String> {
        self.delete_dialog
            .target()
            .map(|user| format!("Are you sure you want to delete {}?", user.full_name))
    }

    pub async fn confirm_delete(&mut self) -> Result<bool> {
        let Some(user) = self.delete_dialog.take() else {
            return Ok(false);
        };

        if let Err(err) = self.client.delete(&user.id).await {
            self.toasts.failure(&err, "Failed to delete user");
            return Err(err);
        }
        self.toasts.success("User deleted successfully");
        self.refetch_users().await;
        Ok(true)
    }
}
