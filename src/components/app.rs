use crate::api::SangamClient;
use crate::components::{
    view_icon, view_label, AppView, Icon, NotificationStack, Notifier, NAV_ITEMS,
};
use crate::db::{initialize_database, load_settings, AppSettings};
use crate::notifications::NotificationQueue;
use crate::provider::{probe_availability, Availability};
use dioxus::prelude::*;
use std::time::Duration;
use tracing::{info, warn};

/// Probes the health endpoint with the current settings and publishes the outcome.
pub async fn check_connection(
    settings: AppSettings,
    mut availability: Signal<Availability>,
    notifier: Notifier,
) {
    let client = SangamClient::from_settings(&settings);
    info!(base_url = client.base_url(), "checking API status");
    let status = probe_availability(
        &client,
        Duration::from_millis(settings.health_timeout_ms),
    )
    .await;
    availability.set(status);
    notifier.notify(status.status_notice());
}

#[component]
pub fn AppShell() -> Element {
    let mut app_settings = use_signal(AppSettings::default);
    let availability = use_signal(Availability::default);
    let notification_queue = use_signal(NotificationQueue::default);
    let notifier = Notifier::new(notification_queue, app_settings);

    // Provide state via context
    use_context_provider(|| app_settings);
    use_context_provider(|| availability);
    use_context_provider(|| notification_queue);
    use_context_provider(|| notifier);

    // Load settings, then probe the backend once
    use_effect(move || {
        spawn(async move {
            if let Err(err) = initialize_database().await {
                warn!(error = %err, "failed to initialize settings storage");
            }

            let settings = match load_settings().await {
                Ok(settings) => settings,
                Err(err) => {
                    warn!(error = %err, "failed to load settings, using defaults");
                    AppSettings::default()
                }
            };
            app_settings.set(settings.clone());

            check_connection(settings, availability, notifier).await;
            notifier.info("Welcome to Sangam!", "Discover amazing Indian music");
        });
    });

    let view = use_route::<AppView>();

    rsx! {
        document::Title { "{view_label(&view)} | Sangam" }
        div { class: "app-container",
            header { class: "app-header",
                Link { class: "brand", to: AppView::HomeView {},
                    Icon { name: "music".to_string(), class: "w-6 h-6".to_string() }
                    span { "Sangam" }
                }
                nav { class: "app-nav",
                    for item in NAV_ITEMS {
                        Link {
                            key: "{view_label(&item)}",
                            class: "nav-link",
                            active_class: "active",
                            to: item.clone(),
                            Icon {
                                name: view_icon(&item).to_string(),
                                class: "w-4 h-4".to_string(),
                            }
                            span { "{view_label(&item)}" }
                        }
                    }
                }
                StatusBadge {}
            }

            main { class: "app-main", Outlet::<AppView> {} }

            footer { class: "app-footer",
                p { "Sangam · Indian music discovery" }
            }

            NotificationStack {}
        }
    }
}

#[component]
fn StatusBadge() -> Element {
    let availability = use_context::<Signal<Availability>>();
    let status = availability();
    let (class, icon) = match status {
        Availability::Probing => ("status-badge probing", "loader"),
        Availability::Online(_) => ("status-badge online", "check"),
        Availability::Offline => ("status-badge offline", "warning"),
    };

    rsx! {
        div { class: "{class}", title: "{status.status_line()}",
            Icon { name: icon.to_string(), class: "w-4 h-4".to_string() }
            span { "{status.status_line()}" }
        }
    }
}
