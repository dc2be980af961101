use log::warn;

use super::{Message, MessagesClient, OutgoingMessage};
use crate::error::Result;
use crate::models::{Channel, User};
use crate::toast::Toasts;
use crate::users::UsersClient;

/// A conversation with one partner. Polls; there is no push transport.
pub struct ChatPage {
    client: MessagesClient,
    users_client: UsersClient,
    toasts: Toasts,
    me: String,
    partner_id: String,
    partner: Option<User>,
    messages: Vec<Message>,
}

impl ChatPage {
    pub fn new(
        client: MessagesClient,
        users_client: UsersClient,
        toasts: Toasts,
        me: &str,
        partner_id: &str,
    ) -> Self {
        Self {
            client,
            users_client,
            toasts,
            me: me.to_string(),
            partner_id: partner_id.to_string(),
            partner: None,
            messages: Vec::new(),
        }
    }

    /// Load the partner's profile and the conversation
    pub async fn open(&mut self) {
        let partner = self.users_client.get(&self.partner_id).await;
        match partner {
            Ok(partner) => self.partner = Some(partner),
            Err(err) => warn!("failed to fetch chat partner {}: {}", self.partner_id, err),
        }
        self.refresh().await;
    }

    /// Refetch every message and keep this pair's, oldest first
    pub async fn refresh(&mut self) -> bool {
        match self.client.list().await {
            Ok(all) => {
                let mut conversation: Vec<Message> = all
                    .into_iter()
                    .filter(|message| message.between(&self.me, &self.partner_id))
                    .collect();
                conversation.sort_by_key(|message| message.created_at);
                self.messages = conversation;
                true
            }
            Err(err) => {
                self.toasts.failure(&err, "Failed to fetch messages");
                false
            }
        }
    }

    pub fn partner(&self) -> Option<&User> {
        self.partner.as_ref()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_mine(&self, message: &Message) -> bool {
        message.from_user_id == self.me
    }

    /// Send `text`; blank input is ignored. Returns whether anything was sent.
    pub async fn send(&mut self, text: &str) -> Result<bool> {
        if text.trim().is_empty() {
            return Ok(false);
        }
        let message = OutgoingMessage {
            from_user_id: self.me.clone(),
            to_user_id: self.partner_id.clone(),
            body: text.to_string(),
            channel: Channel::Internal,
        };
        if let Err(err) = self.client.send(&message).await {
            self.toasts.failure(&err, "Failed to send message");
            return Err(err);
        }
        self.refresh().await;
        Ok(true)
    }
}
