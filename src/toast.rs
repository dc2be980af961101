//! Transient user-facing notifications.
//!
//! Pages never report errors on their own; they push onto a shared [`Toasts`]
//! feed which the front-end drains and renders.

use log::{info, warn};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

/// Cloneable handle to the toast feed
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    inner: Arc<Mutex<Vec<Toast>>>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, Vec<Toast>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn push(&self, level: ToastLevel, message: impl Into<String>) {
        let message = message.into();
        match level {
            ToastLevel::Error => warn!("toast: {}", message),
            _ => info!("toast: {}", message),
        }
        self.entries().push(Toast { level, message });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message);
    }

    /// Report a failed request: backend message if any, otherwise `fallback`
    pub fn failure(&self, err: &Error, fallback: &str) {
        self.error(err.user_message(fallback));
    }

    /// Take every pending toast
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.entries())
    }

    pub fn last(&self) -> Option<Toast> {
        self.entries().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}
