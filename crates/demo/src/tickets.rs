//! IT help-desk tickets with file attachments

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Duration, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{new_id, DemoError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketAttachment {
    pub id: String,
    pub name: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub requester_id: String,
    pub assignee_id: Option<String>,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub attachments: Vec<TicketAttachment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A file chosen in the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl PickedFile {
    pub fn new(name: &str, content_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            content_type: content_type.to_string(),
            bytes,
        }
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// How a pending attachment is shown before upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// Inline `data:` URL rendered as a thumbnail
    Thumbnail(String),
    /// Filename chip for anything that is not an image
    Badge(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingAttachment {
    pub id: String,
    pub file: PickedFile,
    pub preview: Preview,
}

/// Files picked for the ticket being drafted
#[derive(Debug, Clone, Default)]
pub struct PendingAttachments {
    items: Vec<PendingAttachment>,
}

impl PendingAttachments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append picked files, skipping any already pending with the same name and size
    pub fn add(&mut self, files: impl IntoIterator<Item = PickedFile>) {
        for file in files {
            let duplicate = self
                .items
                .iter()
                .any(|p| p.file.name == file.name && p.file.size() == file.size());
            if duplicate {
                debug!("skipping duplicate attachment {}", file.name);
                continue;
            }
            let preview = if file.is_image() {
                Preview::Thumbnail(data_url(&file))
            } else {
                Preview::Badge(file.name.clone())
            };
            self.items.push(PendingAttachment {
                id: new_id("file-"),
                file,
                preview,
            });
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[PendingAttachment] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn take(&mut self) -> Vec<PendingAttachment> {
        std::mem::take(&mut self.items)
    }
}

fn data_url(file: &PickedFile) -> String {
    format!("data:{};base64,{}", file.content_type, BASE64.encode(&file.bytes))
}

/// Fields of the "Create Ticket" dialog
#[derive(Debug, Clone, Default)]
pub struct TicketForm {
    pub title: String,
    pub description: String,
    pub requester_id: String,
    pub assignee_id: Option<String>,
    pub priority: TicketPriority,
    pub status: TicketStatus,
}

#[derive(Debug, Clone)]
pub struct TicketDesk {
    tickets: Vec<Ticket>,
}

impl Default for TicketDesk {
    fn default() -> Self {
        Self::seeded()
    }
}

impl TicketDesk {
    pub fn empty() -> Self {
        Self {
            tickets: Vec::new(),
        }
    }

    /// The desk with its three sample tickets
    pub fn seeded() -> Self {
        let now = Utc::now();
        let tickets = vec![
            Ticket {
                id: "t1".to_string(),
                title: "Email not syncing".to_string(),
                description: Some("User reports that emails are not syncing on mobile app.".to_string()),
                requester_id: "u1".to_string(),
                assignee_id: Some("u2".to_string()),
                priority: TicketPriority::High,
                status: TicketStatus::Open,
                attachments: vec![TicketAttachment {
                    id: new_id("att-"),
                    name: "screenshot1.png".to_string(),
                    url: Some("https://i.imgur.com/6rkZ0vZ.png".to_string()),
                }],
                created_at: now - Duration::days(2),
                updated_at: now - Duration::days(2),
            },
            Ticket {
                id: "t2".to_string(),
                title: "Request: New Laptop".to_string(),
                description: Some("Employee needs a new laptop for development work.".to_string()),
                requester_id: "u3".to_string(),
                assignee_id: None,
                priority: TicketPriority::Medium,
                status: TicketStatus::InProgress,
                attachments: Vec::new(),
                created_at: now - Duration::days(7),
                updated_at: now - Duration::days(3),
            },
            Ticket {
                id: "t3".to_string(),
                title: "VPN connectivity issue".to_string(),
                description: Some("Intermittent VPN drops for remote users.".to_string()),
                requester_id: "u2".to_string(),
                assignee_id: Some("u1".to_string()),
                priority: TicketPriority::Low,
                status: TicketStatus::Closed,
                attachments: vec![TicketAttachment {
                    id: new_id("att-"),
                    name: "vpn_log.txt".to_string(),
                    url: Some("https://example.com/vpn_log.txt".to_string()),
                }],
                created_at: now - Duration::days(20),
                updated_at: now - Duration::days(10),
            },
        ];
        Self { tickets }
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn get(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Tickets matching both dropdowns (`None` = all), newest first
    pub fn filtered(
        &self,
        status: Option<TicketStatus>,
        priority: Option<TicketPriority>,
    ) -> Vec<&Ticket> {
        let mut tickets: Vec<&Ticket> = self
            .tickets
            .iter()
            .filter(|t| status.map_or(true, |s| t.status == s))
            .filter(|t| priority.map_or(true, |p| t.priority == p))
            .collect();
        tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tickets
    }

    /// File a ticket with every pending attachment; `pending` is emptied on success
    pub fn submit(&mut self, form: TicketForm, pending: &mut PendingAttachments) -> Result<&Ticket> {
        if form.title.trim().is_empty() || form.requester_id.trim().is_empty() {
            return Err(DemoError::Validation(
                "Title and Requester are required.".to_string(),
            ));
        }

        let attachments = pending
            .take()
            .into_iter()
            .map(|pending| {
                let url = match pending.preview {
                    Preview::Thumbnail(url) => url,
                    Preview::Badge(_) => format!(
                        "https://example.com/files/{}",
                        urlencoding::encode(&pending.file.name)
                    ),
                };
                TicketAttachment {
                    id: new_id("att-"),
                    name: pending.file.name,
                    url: Some(url),
                }
            })
            .collect();

        let now = Utc::now();
        let description = form.description.trim();
        let ticket = Ticket {
            id: new_id("t-"),
            title: form.title.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            requester_id: form.requester_id,
            assignee_id: form.assignee_id.filter(|id| !id.is_empty()),
            priority: form.priority,
            status: form.status,
            attachments,
            created_at: now,
            updated_at: now,
        };
        debug!("filed ticket {}", ticket.id);
        self.tickets.insert(0, ticket);
        Ok(&self.tickets[0])
    }

    /// Detach one file from a filed ticket
    pub fn remove_attachment(&mut self, ticket_id: &str, attachment_id: &str) -> Result<()> {
        let ticket = self
            .tickets
            .iter_mut()
            .find(|t| t.id == ticket_id)
            .ok_or_else(|| DemoError::NotFound(format!("ticket {}", ticket_id)))?;
        ticket.attachments.retain(|a| a.id != attachment_id);
        Ok(())
    }
}
