use log::warn;

use super::{Event, EventsClient, NewEvent};
use crate::error::{Error, Result};
use crate::models::{split_list, User};
use crate::toast::Toasts;
use crate::users::UsersClient;
use crate::view::ListView;

/// Fields of the "Schedule a New Event" dialog
#[derive(Debug, Clone, Default)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    /// `datetime-local` style input, sent as typed
    pub start_at: String,
    pub end_at: String,
    pub organizer_id: Option<String>,
    pub location: String,
    /// Comma-separated URLs
    pub attachments: String,
}

impl EventForm {
    fn validate(&self) -> Result<NewEvent> {
        if self.title.trim().is_empty() || self.start_at.trim().is_empty() {
            return Err(Error::validation("Title and Start Date are required"));
        }
        Ok(NewEvent {
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            start_at: self.start_at.trim().to_string(),
            end_at: Some(self.end_at.trim())
                .filter(|end| !end.is_empty())
                .map(str::to_string),
            organizer_id: self.organizer_id.clone(),
            location: self.location.clone(),
            attachments: split_list(&self.attachments),
        })
    }
}

pub struct EventsPage {
    client: EventsClient,
    users_client: UsersClient,
    toasts: Toasts,
    pub events: ListView<Event>,
    users: Vec<User>,
    pub search: String,
}

impl EventsPage {
    pub fn new(client: EventsClient, users_client: UsersClient, toasts: Toasts) -> Self {
        Self {
            client,
            users_client,
            toasts,
            events: ListView::new(),
            users: Vec::new(),
            search: String::new(),
        }
    }

    pub async fn load(&mut self) {
        let (events, users) = tokio::join!(self.client.list(), self.users_client.list());
        match events {
            Ok(events) => self.events.replace(events),
            Err(err) => self.toasts.failure(&err, "Failed to fetch events"),
        }
        match users {
            Ok(users) => self.users = users,
            Err(err) => warn!("failed to fetch organizers: {}", err),
        }
    }

    /// Candidates for the organizer dropdown
    pub fn organizers(&self) -> &[User] {
        &self.users
    }

    pub fn visible(&self) -> Vec<&Event> {
        self.events.filtered(&self.search)
    }

    pub async fn create(&mut self, form: &EventForm) -> Result<()> {
        let event = match form.validate() {
            Ok(event) => event,
            Err(err) => {
                self.toasts.failure(&err, "Failed to create event");
                return Err(err);
            }
        };

        if let Err(err) = self.client.create(&event).await {
            self.toasts.failure(&err, "Failed to create event");
            return Err(err);
        }
        self.toasts.success("Event created successfully");
        self.events
            .refresh(&self.client, &self.toasts, "Failed to fetch events")
            .await;
        Ok(())
    }
}
