//! Toast Notifications
//!
//! A reactive queue of transient messages rendered by `<ToastHost/>`.
//! Toasts opened with a key replace the live toast with the same key in
//! place, so a sticky "working..." message can turn into the final result.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Auto-dismiss delay for ordinary toasts
pub const DEFAULT_DURATION_MS: u32 = 3000;
/// Duration value meaning "stay until replaced or closed"
pub const STICKY: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
    Loading,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Warning => "toast toast-warning",
            ToastKind::Info => "toast toast-info",
            ToastKind::Loading => "toast toast-loading",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub key: Option<String>,
    pub kind: ToastKind,
    pub message: String,
    /// Changes on every replacement; stale timers compare against it
    revision: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    counter: u64,
}

impl ToastQueue {
    /// Show a toast, replacing the live one with the same key.
    /// Returns `(id, revision)` for a later `expire`.
    pub fn push(&mut self, key: Option<&str>, kind: ToastKind, message: &str) -> (u64, u64) {
        self.counter += 1;
        let revision = self.counter;

        if let Some(key) = key {
            if let Some(existing) = self.toasts.iter_mut().find(|t| t.key.as_deref() == Some(key)) {
                existing.kind = kind;
                existing.message = message.to_string();
                existing.revision = revision;
                return (existing.id, revision);
            }
        }

        self.toasts.push(Toast {
            id: revision,
            key: key.map(str::to_string),
            kind,
            message: message.to_string(),
            revision,
        });
        (revision, revision)
    }

    /// Remove the toast if it has not been replaced since `revision`
    pub fn expire(&mut self, id: u64, revision: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| !(t.id == id && t.revision == revision));
        self.toasts.len() != before
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Handle to the app-wide toast queue
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
}

impl Toaster {
    pub fn new() -> Self {
        Self { queue: RwSignal::new(ToastQueue::default()) }
    }

    pub fn open(&self, key: Option<&str>, kind: ToastKind, message: &str, duration_ms: u32) {
        let mut handle = (0, 0);
        self.queue.update(|q| handle = q.push(key, kind, message));
        if duration_ms == STICKY {
            return;
        }
        let queue = self.queue;
        let (id, revision) = handle;
        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            let _ = queue.try_update(|q| q.expire(id, revision));
        });
    }

    pub fn success(&self, message: &str) {
        self.open(None, ToastKind::Success, message, DEFAULT_DURATION_MS);
    }

    pub fn error(&self, message: &str) {
        self.open(None, ToastKind::Error, message, DEFAULT_DURATION_MS);
    }

    pub fn warning(&self, message: &str) {
        self.open(None, ToastKind::Warning, message, DEFAULT_DURATION_MS);
    }

    pub fn info(&self, message: &str) {
        self.open(None, ToastKind::Info, message, DEFAULT_DURATION_MS);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();
    let toasts = move || toaster.queue.with(|q| q.toasts().to_vec());

    view! {
        <div class="toast-root">
            <For
                each=toasts
                key=|t| (t.id, t.revision)
                children=move |t| {
                    let id = t.id;
                    view! {
                        <div class=t.kind.class() role="status">
                            <span class="toast-message">{t.message}</span>
                            <button class="toast-close" on:click=move |_| toaster.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unkeyed_toasts_stack() {
        let mut queue = ToastQueue::default();
        queue.push(None, ToastKind::Info, "one");
        queue.push(None, ToastKind::Info, "two");
        assert_eq!(queue.toasts().len(), 2);
    }

    #[test]
    fn test_keyed_toast_replaced_in_place() {
        let mut queue = ToastQueue::default();
        queue.push(None, ToastKind::Info, "before");
        let (id, _) = queue.push(Some("generate"), ToastKind::Loading, "Generating questions...");
        let (same_id, _) = queue.push(Some("generate"), ToastKind::Success, "Generation request submitted");

        assert_eq!(id, same_id);
        assert_eq!(queue.toasts().len(), 2);
        assert_eq!(queue.toasts()[1].kind, ToastKind::Success);
        assert_eq!(queue.toasts()[1].message, "Generation request submitted");
    }

    #[test]
    fn test_stale_timer_does_not_remove_replacement() {
        let mut queue = ToastQueue::default();
        let (id, first) = queue.push(Some("k"), ToastKind::Info, "first");
        let (_, second) = queue.push(Some("k"), ToastKind::Error, "second");

        assert!(!queue.expire(id, first));
        assert_eq!(queue.toasts().len(), 1);
        assert!(queue.expire(id, second));
        assert!(queue.toasts().is_empty());
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::default();
        let (id, _) = queue.push(None, ToastKind::Warning, "x");
        queue.dismiss(id);
        assert!(queue.toasts().is_empty());
    }
}
