use log::warn;

use super::{MessagesClient, UnreadEntry};
use crate::models::{matches_any, User};
use crate::toast::Toasts;
use crate::users::UsersClient;

/// Contact list with unread badges; picking a contact opens a [`ChatPage`](super::ChatPage)
pub struct MessagesPage {
    client: MessagesClient,
    users_client: UsersClient,
    toasts: Toasts,
    me: String,
    users: Vec<User>,
    unread: Vec<UnreadEntry>,
    pub search: String,
}

impl MessagesPage {
    pub fn new(client: MessagesClient, users_client: UsersClient, toasts: Toasts) -> Self {
        Self {
            client,
            users_client,
            toasts,
            me: String::new(),
            users: Vec::new(),
            unread: Vec::new(),
            search: String::new(),
        }
    }

    pub async fn load(&mut self, me: &str) {
        self.me = me.to_string();
        let (users, unread) = tokio::join!(self.users_client.list(), self.client.private_counts());
        match users {
            Ok(users) => self.users = users,
            Err(err) => self.toasts.failure(&err, "Failed to fetch users"),
        }
        match unread {
            Ok(unread) => self.unread = unread,
            Err(err) => warn!("failed to fetch unread counts: {}", err),
        }
    }

    /// Everyone but the logged-in user, narrowed by the search box
    pub fn contacts(&self) -> Vec<&User> {
        let needle = self.search.to_lowercase();
        self.users
            .iter()
            .filter(|user| user.id != self.me)
            .filter(|user| {
                matches_any(
                    &needle,
                    [
                        Some(user.full_name.as_str()),
                        user.country_name.as_deref(),
                        Some(user.role.as_str()),
                    ],
                )
            })
            .collect()
    }

    pub fn unread_from(&self, user_id: &str) -> usize {
        self.unread
            .iter()
            .filter(|entry| entry.from_user_id == user_id)
            .count()
    }

    /// Route of the conversation with `user_id`
    pub fn chat_route(user_id: &str) -> String {
        format!("/admin/messages/{}", user_id)
    }
}
