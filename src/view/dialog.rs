//! Confirmation dialog holding the row it was opened for

#[derive(Debug, Clone)]
pub struct Dialog<T> {
    target: Option<T>,
}

impl<T> Default for Dialog<T> {
    fn default() -> Self {
        Self { target: None }
    }
}

impl<T> Dialog<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, target: T) {
        self.target = Some(target);
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    pub fn cancel(&mut self) {
        self.target = None;
    }

    /// Close the dialog, handing back what it was opened for
    pub fn take(&mut self) -> Option<T> {
        self.target.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_closes_the_dialog() {
        let mut dialog = Dialog::new();
        dialog.open("u1");
        assert!(dialog.is_open());
        assert_eq!(dialog.take(), Some("u1"));
        assert!(!dialog.is_open());
        assert_eq!(dialog.take(), None);
    }

    #[test]
    fn cancel_drops_target() {
        let mut dialog = Dialog::new();
        dialog.open(42);
        dialog.cancel();
        assert!(dialog.target().is_none());
    }
}
