use log::warn;

use super::{NewNotification, Notification, NotificationsClient};
use crate::error::{Error, Result};
use crate::models::{Channel, User};
use crate::toast::Toasts;
use crate::users::UsersClient;
use crate::view::ListView;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationForm {
    pub title: String,
    pub body: String,
    pub channel: Channel,
    /// `None` sends to every user
    pub user_id: Option<String>,
}

pub struct NotificationsPage {
    client: NotificationsClient,
    users_client: UsersClient,
    toasts: Toasts,
    pub notifications: ListView<Notification>,
    users: Vec<User>,
    pub form: NotificationForm,
    pub search: String,
}

impl NotificationsPage {
    pub fn new(client: NotificationsClient, users_client: UsersClient, toasts: Toasts) -> Self {
        Self {
            client,
            users_client,
            toasts,
            notifications: ListView::new(),
            users: Vec::new(),
            form: NotificationForm::default(),
            search: String::new(),
        }
    }

    pub async fn load(&mut self) {
        let (notifications, users) =
            tokio::join!(self.client.list(), self.users_client.list());
        match notifications {
            Ok(notifications) => self.notifications.replace(notifications),
            Err(err) => self.toasts.failure(&err, "Failed to fetch notifications"),
        }
        match users {
            Ok(users) => self.users = users,
            Err(err) => warn!("failed to fetch recipients: {}", err),
        }
    }

    pub fn recipients(&self) -> &[User] {
        &self.users
    }

    pub fn visible(&self) -> Vec<&Notification> {
        self.notifications.filtered(&self.search)
    }

    /// Send what is in `self.form`; the form resets on success
    pub async fn create(&mut self) -> Result<()> {
        if self.form.title.trim().is_empty() || self.form.body.trim().is_empty() {
            let err = Error::validation("Title, body, and channel are required");
            self.toasts.failure(&err, "Failed to create notification");
            return Err(err);
        }

        let notification = NewNotification {
            title: self.form.title.trim().to_string(),
            body: self.form.body.clone(),
            channel: self.form.channel,
            user_id: self.form.user_id.clone(),
        };
        if let Err(err) = self.client.create(&notification).await {
            self.toasts.failure(&err, "Failed to create notification");
            return Err(err);
        }

        self.toasts.success("Notification created successfully");
        self.form = NotificationForm::default();
        self.notifications
            .refresh(&self.client, &self.toasts, "Failed to fetch notifications")
            .await;
        Ok(())
    }
}
