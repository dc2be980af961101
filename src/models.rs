//! Entities shared across several pages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// System role attached to every user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Chairman,
    CountryManager,
    Finance,
    Legal,
    Hr,
    Admin,
    It,
    Councilor,
    Volunteer,
    Viewer,
}

impl Role {
    /// Every role, in the order the role tabs are shown
    pub const ALL: [Role; 10] = [
        Role::Chairman,
        Role::CountryManager,
        Role::Finance,
        Role::Legal,
        Role::Hr,
        Role::Admin,
        Role::It,
        Role::Councilor,
        Role::Volunteer,
        Role::Viewer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chairman => "chairman",
            Self::CountryManager => "country_manager",
            Self::Finance => "finance",
            Self::Legal => "legal",
            Self::Hr => "hr",
            Self::Admin => "admin",
            Self::It => "it",
            Self::Councilor => "councilor",
            Self::Volunteer => "volunteer",
            Self::Viewer => "viewer",
        }
    }

    /// Where a freshly logged-in user of this role lands.
    ///
    /// Roles without a dashboard of their own stay on the login page.
    pub fn home_route(&self) -> Option<&'static str> {
        match self {
            Self::Admin => Some("/admin/dashboard"),
            Self::CountryManager => Some("/manager/dashboard"),
            Self::It => Some("/it/dashboard"),
            Self::Finance => Some("/finance/dashboard"),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| Error::validation(format!("unknown role: {}", s)))
    }
}

/// Three-valued review state shared by projects and expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    /// Tab order on the review pages
    pub const ALL: [ApprovalStatus; 3] = [
        ApprovalStatus::Pending,
        ApprovalStatus::Approved,
        ApprovalStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery medium of a notification or message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[default]
    Internal,
    Email,
    Sms,
    Whatsapp,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::Email => "email",
            Self::Sms => "sms",
            Self::Whatsapp => "whatsapp",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user as listed by `/users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub country_id: String,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl User {
    /// First letter of the name, for avatar fallbacks
    pub fn initial(&self) -> String {
        self.full_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}

/// A user embedded in another entity (organizer, target, submitter)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "name")]
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: String,
    pub country_name: String,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Province {
    pub id: String,
    pub name: String,
}

/// Case-insensitive substring match of `needle` against any of `fields`.
///
/// `needle` must already be lowercased; an empty needle matches everything.
pub(crate) fn matches_any<'a, I>(needle: &str, fields: I) -> bool
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    if needle.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Split a comma-separated input into trimmed, non-empty entries
pub(crate) fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
