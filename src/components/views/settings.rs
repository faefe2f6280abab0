use crate::api::{resolve_base_url, Mood};
use crate::components::{check_connection, Icon, Notifier};
use crate::db::{save_settings, AppSettings};
use crate::notifications::NotificationKind;
use crate::provider::Availability;
use dioxus::prelude::*;
use tracing::warn;

fn parse_number<T: std::str::FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}

#[component]
pub fn SettingsView() -> Element {
    let mut app_settings = use_context::<Signal<AppSettings>>();
    let availability = use_context::<Signal<Availability>>();
    let notifier = use_context::<Notifier>();

    let mut draft = use_signal(|| app_settings.peek().clone());
    let mut is_saving = use_signal(|| false);
    let mut is_checking = use_signal(|| false);

    // Saved settings win over unsaved edits.
    use_effect(move || draft.set(app_settings()));

    let on_save = move |_| {
        if is_saving() {
            return;
        }
        let settings = draft().sanitized();
        is_saving.set(true);
        spawn(async move {
            match save_settings(settings.clone()).await {
                Ok(()) => {
                    app_settings.set(settings);
                    notifier.send(
                        NotificationKind::Success,
                        "Settings Saved",
                        "Your preferences were updated",
                    );
                }
                Err(err) => {
                    warn!(error = %err, "failed to save settings");
                    notifier.send(NotificationKind::Error, "Save Failed", err.to_string());
                }
            }
            is_saving.set(false);
        });
    };

    let on_reset = move |_| draft.set(AppSettings::default());

    let on_check = move |_| {
        if is_checking() {
            return;
        }
        let settings = draft().sanitized();
        is_checking.set(true);
        spawn(async move {
            check_connection(settings, availability, notifier).await;
            is_checking.set(false);
        });
    };

    let current = draft();
    let resolved_base = resolve_base_url(&current.api_base_url);
    let status_line = availability().status_line();

    rsx! {
        div { class: "settings-page",
            h1 { class: "page-title", "Settings" }

            section { class: "settings-card",
                h2 { class: "section-title", "Music API" }
                label { class: "field",
                    span { "API base URL" }
                    input {
                        r#type: "text",
                        value: "{current.api_base_url}",
                        oninput: move |evt| draft.with_mut(|draft| draft.api_base_url = evt.value()),
                    }
                    small { class: "field-hint", "Requests go to {resolved_base}" }
                }
                label { class: "field",
                    span { "Connection timeout (ms)" }
                    input {
                        r#type: "number",
                        min: "500",
                        max: "30000",
                        value: "{current.health_timeout_ms}",
                        oninput: move |evt| {
                            if let Some(value) = parse_number(&evt.value()) {
                                draft.with_mut(|draft| draft.health_timeout_ms = value);
                            }
                        },
                    }
                }
                label { class: "field",
                    span { "Songs per search" }
                    input {
                        r#type: "number",
                        min: "1",
                        max: "50",
                        value: "{current.search_limit}",
                        oninput: move |evt| {
                            if let Some(value) = parse_number(&evt.value()) {
                                draft.with_mut(|draft| draft.search_limit = value);
                            }
                        },
                    }
                }
                div { class: "connection-row",
                    span { class: "connection-status", "{status_line}" }
                    button {
                        class: "btn-secondary",
                        disabled: is_checking(),
                        onclick: on_check,
                        if is_checking() {
                            Icon { name: "loader".to_string(), class: "w-4 h-4".to_string() }
                            span { "Checking..." }
                        } else {
                            Icon { name: "check".to_string(), class: "w-4 h-4".to_string() }
                            span { "Check Connection" }
                        }
                    }
                }
            }

            section { class: "settings-card",
                h2 { class: "section-title", "Experience" }
                label { class: "field",
                    span { "Notification duration (ms)" }
                    input {
                        r#type: "number",
                        min: "1000",
                        max: "30000",
                        value: "{current.notification_duration_ms}",
                        oninput: move |evt| {
                            if let Some(value) = parse_number(&evt.value()) {
                                draft.with_mut(|draft| draft.notification_duration_ms = value);
                            }
                        },
                    }
                }
                label { class: "field",
                    span { "Default mood" }
                    select {
                        value: "{current.default_mood.token()}",
                        onchange: move |evt| {
                            if let Some(mood) = Mood::from_token(&evt.value()) {
                                draft.with_mut(|draft| draft.default_mood = mood);
                            }
                        },
                        for mood in Mood::ALL {
                            option {
                                key: "{mood.token()}",
                                value: "{mood.token()}",
                                selected: mood == current.default_mood,
                                "{mood.label()}"
                            }
                        }
                    }
                }
            }

            div { class: "settings-actions",
                button { class: "btn-secondary", onclick: on_reset, "Reset to Defaults" }
                button {
                    class: "btn-primary",
                    disabled: is_saving(),
                    onclick: on_save,
                    if is_saving() {
                        "Saving..."
                    } else {
                        "Save Settings"
                    }
                }
            }
        }
    }
}
