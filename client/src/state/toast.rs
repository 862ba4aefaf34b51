//! Dismissible user-facing notices.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every failed backend call ends here: views push a destructive toast with
//! a localized generic message. The `Toaster` component renders the queue.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Oldest toasts are dropped beyond this many.
pub const MAX_TOASTS: usize = 3;

/// Auto-dismiss delay applied by the toaster in the browser.
pub const TOAST_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, title: &str, description: &str, variant: ToastVariant) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            title: title.to_owned(),
            description: description.to_owned(),
            variant,
        });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn success(&mut self, title: &str, description: &str) -> u64 {
        self.push(title, description, ToastVariant::Default)
    }

    pub fn error(&mut self, title: &str, description: &str) -> u64 {
        self.push(title, description, ToastVariant::Destructive)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
