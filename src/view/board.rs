//! Approval tabs: one bucket per [`ApprovalStatus`] with live counts

use crate::models::ApprovalStatus;

/// Something that moves through pending/approved/rejected
pub trait Reviewable {
    fn id(&self) -> &str;
    fn approval(&self) -> ApprovalStatus;
    fn set_approval(&mut self, status: ApprovalStatus);
}

#[derive(Debug, Clone)]
pub struct StatusBoard<T> {
    items: Vec<T>,
}

impl<T> Default for StatusBoard<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Reviewable> StatusBoard<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn bucket(&self, status: ApprovalStatus) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| item.approval() == status)
            .collect()
    }

    pub fn count(&self, status: ApprovalStatus) -> usize {
        self.items
            .iter()
            .filter(|item| item.approval() == status)
            .count()
    }

    /// Tab labels' counts, in tab order
    pub fn counts(&self) -> [(ApprovalStatus, usize); 3] {
        ApprovalStatus::ALL.map(|status| (status, self.count(status)))
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Move one item to another bucket without refetching
    pub fn patch(&mut self, id: &str, status: ApprovalStatus) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.set_approval(status);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
