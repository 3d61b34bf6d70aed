use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use dioxus::prelude::*;

const MAX_VISIBLE: usize = 4;

static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn css_class(self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
            ToastKind::Error => "error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ️",
            ToastKind::Success => "✅",
            ToastKind::Warning => "⚠️",
            ToastKind::Error => "⛔",
        }
    }

    /// Validation and export failures stay up long enough to be read.
    fn lifetime(self) -> Duration {
        match self {
            ToastKind::Info | ToastKind::Success => Duration::from_secs(5),
            ToastKind::Warning => Duration::from_secs(8),
            ToastKind::Error => Duration::from_secs(10),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed),
            kind,
            text: text.into(),
        }
    }
}

/// Add a toast to the queue. Repeating the newest toast is a no-op, and the
/// oldest toast makes room once the stack is full.
pub fn enqueue_toast(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    let repeated = entries
        .last()
        .is_some_and(|last| last.kind == message.kind && last.text == message.text);
    if repeated {
        return;
    }
    if entries.len() >= MAX_VISIBLE {
        entries.remove(0);
    }
    entries.push(message);
}

pub fn dismiss_toast(entries: &mut Vec<ToastMessage>, id: u64) {
    entries.retain(|toast| toast.id != id);
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let message = ToastMessage::new(kind, message);
    if kind == ToastKind::Error {
        tracing::debug!(text = %message.text, "error toast shown");
    }
    toasts.with_mut(|entries| enqueue_toast(entries, message));
}

#[component]
pub fn ToastStack() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let current = toasts();

    if current.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "toast-stack",
            ul {
                for message in current {
                    ToastItem { key: "{message.id}", message, toasts }
                }
            }
        }
    }
}

#[component]
fn ToastItem(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let id = message.id;
    let lifetime = message.kind.lifetime();
    let mut toasts = toasts;

    use_future(move || async move {
        tokio::time::sleep(lifetime).await;
        toasts.with_mut(|entries| dismiss_toast(entries, id));
    });

    rsx! {
        li {
            class: "toast {message.kind.css_class()}",
            span { "{message.kind.icon()}" }
            p { "{message.text}" }
            button {
                class: "btn",
                onclick: move |_| toasts.with_mut(|entries| dismiss_toast(entries, id)),
                "Dismiss"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(entries: &[ToastMessage]) -> Vec<&str> {
        entries.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn full_stack_drops_oldest() {
        let mut entries = Vec::new();
        for n in 0..6 {
            enqueue_toast(&mut entries, ToastMessage::new(ToastKind::Info, format!("#{n}")));
        }
        assert_eq!(texts(&entries), vec!["#2", "#3", "#4", "#5"]);
    }

    #[test]
    fn repeated_toast_is_collapsed() {
        let mut entries = Vec::new();
        let msg = "Declared value must be greater than zero.";
        enqueue_toast(&mut entries, ToastMessage::new(ToastKind::Error, msg));
        enqueue_toast(&mut entries, ToastMessage::new(ToastKind::Error, msg));
        assert_eq!(entries.len(), 1);

        enqueue_toast(&mut entries, ToastMessage::new(ToastKind::Warning, msg));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn dismiss_removes_only_target() {
        let mut entries = Vec::new();
        let first = ToastMessage::new(ToastKind::Success, "Exported");
        let first_id = first.id;
        enqueue_toast(&mut entries, first);
        enqueue_toast(&mut entries, ToastMessage::new(ToastKind::Info, "Refreshing"));
        dismiss_toast(&mut entries, first_id);
        assert_eq!(texts(&entries), vec!["Refreshing"]);
    }

    #[test]
    fn errors_outlive_infos() {
        assert!(ToastKind::Error.lifetime() > ToastKind::Info.lifetime());
    }
}
