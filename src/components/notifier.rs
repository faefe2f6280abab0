use crate::components::Icon;
use crate::db::AppSettings;
use crate::notifications::{Notice, NotificationKind, NotificationQueue};
use crate::utils::delay;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use std::time::Duration;
use tracing::debug;

/// Handle for posting toasts from anywhere below the shell.
#[derive(Clone, Copy, PartialEq)]
pub struct Notifier {
    queue: Signal<NotificationQueue>,
    settings: Signal<AppSettings>,
}

impl Notifier {
    pub fn new(queue: Signal<NotificationQueue>, settings: Signal<AppSettings>) -> Self {
        Self { queue, settings }
    }

    pub fn notify(&self, notice: Notice) {
        debug!(kind = ?notice.kind, title = %notice.title, "notification");
        let mut queue = self.queue;
        let id = queue.with_mut(|queue| queue.push(notice));
        let lifetime = Duration::from_millis(self.settings.peek().notification_duration_ms);
        // Senders often unmount right after notifying; the timer lives on the root scope.
        spawn_forever(async move {
            delay(lifetime).await;
            if let Ok(mut queue) = queue.try_write() {
                queue.dismiss(id);
            }
        });
    }

    /// Posts `notice` once `wait` has passed, even if the caller is gone by then.
    pub fn notify_after(&self, wait: Duration, notice: Notice) {
        let notifier = *self;
        spawn_forever(async move {
            delay(wait).await;
            notifier.notify(notice);
        });
    }

    pub fn info(&self, title: &str, message: impl Into<String>) {
        self.notify(Notice::info(title, message));
    }

    pub fn send(&self, kind: NotificationKind, title: &str, message: impl Into<String>) {
        self.notify(Notice::new(kind, title, message));
    }

    pub fn dismiss(&self, id: u64) {
        let mut queue = self.queue;
        queue.with_mut(|queue| queue.dismiss(id));
    }

    pub fn clear(&self) {
        let mut queue = self.queue;
        queue.with_mut(NotificationQueue::clear);
    }
}

#[component]
pub fn NotificationStack() -> Element {
    let queue = use_context::<Signal<NotificationQueue>>();
    let notifier = use_context::<Notifier>();
    if queue().is_empty() {
        return rsx! {};
    }
    let items = queue().items().to_vec();

    rsx! {
        div { class: "notification-stack",
            for item in items {
                div {
                    key: "{item.id}",
                    class: "notification {item.notice.kind.accent_class()}",
                    Icon {
                        name: item.notice.kind.icon().to_string(),
                        class: "notification-icon".to_string(),
                    }
                    div { class: "notification-body",
                        p { class: "notification-title", "{item.notice.title}" }
                        p { class: "notification-message", "{item.notice.message}" }
                    }
                    button {
                        class: "notification-close",
                        aria_label: "Dismiss",
                        onclick: move |_| notifier.dismiss(item.id),
                        Icon { name: "x".to_string(), class: "w-4 h-4".to_string() }
                    }
                }
            }
            if queue().len() > 2 {
                button {
                    class: "notification-clear",
                    onclick: move |_| notifier.clear(),
                    "Dismiss all"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[component]
    fn Sender(delayed: bool) -> Element {
        let notifier = use_context::<Notifier>();
        let mut visible = use_context::<Signal<bool>>();
        use_hook(move || {
            if delayed {
                notifier.notify_after(
                    Duration::from_millis(30),
                    Notice::new(NotificationKind::Warning, "Setup Guide", "Read the guide"),
                );
            } else {
                notifier.info("Stopped", "All playback stopped");
            }
            spawn(async move { visible.set(false) });
        });
        rsx! { p { "sender" } }
    }

    #[component]
    fn Harness(lifetime_ms: u64, delayed: bool) -> Element {
        let settings = use_signal(|| AppSettings {
            notification_duration_ms: lifetime_ms,
            ..AppSettings::default()
        });
        let queue = use_signal(NotificationQueue::default);
        let visible = use_signal(|| true);
        use_context_provider(|| settings);
        use_context_provider(|| queue);
        use_context_provider(|| visible);
        use_context_provider(|| Notifier::new(queue, settings));

        rsx! {
            if visible() {
                Sender { delayed }
            }
            NotificationStack {}
        }
    }

    async fn run_for(lifetime_ms: u64, delayed: bool, window: Duration) -> (String, String) {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                lifetime_ms,
                delayed,
            },
        );
        dom.rebuild_in_place();
        let first = dioxus_ssr::render(&dom);

        let deadline = tokio::time::Instant::now() + window;
        while tokio::time::timeout_at(deadline, dom.wait_for_work())
            .await
            .is_ok()
        {
            let _ = dom.render_immediate_to_vec();
        }
        (first, dioxus_ssr::render(&dom))
    }

    #[tokio::test]
    async fn notice_expires_after_its_sender_unmounts() {
        let (first, last) = run_for(50, false, Duration::from_millis(400)).await;

        assert!(first.contains("All playback stopped"));
        assert!(!last.contains("sender"));
        assert_eq!(last.matches("notification-title").count(), 0);
    }

    #[tokio::test]
    async fn delayed_notice_arrives_after_its_sender_unmounts() {
        let (first, last) = run_for(10_000, true, Duration::from_millis(300)).await;

        assert!(!first.contains("Setup Guide"));
        assert!(!last.contains("sender"));
        assert_eq!(last.matches("Setup Guide").count(), 1);
    }
}
