//! List-and-detail state: the last fetched collection plus one selected row

use async_trait::async_trait;
use log::debug;

use crate::error::Result;
use crate::toast::Toasts;

/// An entity shown in a searchable list
pub trait Listed {
    fn id(&self) -> &str;

    /// Whether any searchable field contains `needle` (already lowercased)
    fn matches(&self, needle: &str) -> bool;
}

/// A backend collection a [`ListView`] can be refreshed from
#[async_trait]
pub trait Collection: Send + Sync {
    type Item: Listed + Send;

    async fn fetch_all(&self) -> Result<Vec<Self::Item>>;
}

#[derive(Debug, Clone)]
pub struct ListView<T> {
    items: Vec<T>,
    selected: Option<String>,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
        }
    }
}

impl<T: Listed> ListView<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a fresh fetch, keeping the selection when the row survived
    pub fn replace(&mut self, items: Vec<T>) {
        let keep = self
            .selected
            .as_deref()
            .map_or(false, |id| items.iter().any(|item| item.id() == id));
        if !keep {
            self.selected = items.first().map(|item| item.id().to_string());
        }
        self.items = items;
    }

    /// Refetch from `source`; on failure toast and keep the previous rows
    pub async fn refresh<C>(&mut self, source: &C, toasts: &Toasts, fallback: &str) -> bool
    where
        C: Collection<Item = T>,
    {
        match source.fetch_all().await {
            Ok(items) => {
                debug!("list refreshed with {} rows", items.len());
                self.replace(items);
                true
            }
            Err(err) => {
                toasts.failure(&err, fallback);
                false
            }
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Rows whose searchable fields contain `query`, ignoring case
    pub fn filtered(&self, query: &str) -> Vec<&T> {
        let needle = query.to_lowercase();
        self.items.iter().filter(|item| item.matches(&needle)).collect()
    }

    pub fn select(&mut self, id: &str) -> bool {
        if self.items.iter().any(|item| item.id() == id) {
            self.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn selected(&self) -> Option<&T> {
        let id = self.selected.as_deref()?;
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
