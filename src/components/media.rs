//! DOM glue for the preview audio element and outbound links.
//!
//! The browser build talks to the element through `web-sys`. Desktop and mobile builds
//! render into a webview, so they go through `document::eval` instead. A missing
//! element is never an error: there is simply nothing to play or stop.

use crate::playback::{PlaybackError, PlaybackSurface};
use dioxus::prelude::*;
use tracing::{debug, warn};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

pub const PREVIEW_AUDIO_ID: &str = "sangam-preview-audio";

#[cfg(target_arch = "wasm32")]
fn preview_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;
    document
        .get_element_by_id(PREVIEW_AUDIO_ID)?
        .dyn_into::<HtmlAudioElement>()
        .ok()
}

/// Starts the rendered preview. `Err` means the platform refused to play without a gesture.
#[cfg(target_arch = "wasm32")]
pub async fn start_preview() -> Result<(), PlaybackError> {
    let Some(audio) = preview_audio_element() else {
        debug!("preview audio element not mounted");
        return Ok(());
    };
    let promise = audio
        .play()
        .map_err(|err| PlaybackError::Rejected(format!("{err:?}")))?;
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| PlaybackError::Rejected(format!("{err:?}")))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn start_preview() -> Result<(), PlaybackError> {
    let script = format!(
        "const el = document.getElementById('{PREVIEW_AUDIO_ID}');
         if (el) {{ await el.play(); }}
         return true;"
    );
    document::eval(&script)
        .await
        .map(|_| ())
        .map_err(|err| PlaybackError::Rejected(err.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn stop_preview() {
    if let Some(audio) = preview_audio_element() {
        let _ = audio.pause();
        audio.set_current_time(0.0);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn stop_preview() {
    let script = format!(
        "const el = document.getElementById('{PREVIEW_AUDIO_ID}');
         if (el) {{ el.pause(); el.currentTime = 0; }}"
    );
    let _ = document::eval(&script);
}

/// Silences the surface a transition just left. The embed goes away with its iframe.
pub fn silence(stopped: Option<PlaybackSurface>) {
    if let Some(PlaybackSurface::Audio) = stopped {
        stop_preview();
    }
}

/// Opens `url` in a new browsing context.
pub fn open_external(url: &str) {
    let Ok(quoted) = serde_json::to_string(url) else {
        warn!(%url, "could not quote outbound url");
        return;
    };
    debug!(%url, "opening external link");
    let _ = document::eval(&format!(
        "window.open({quoted}, '_blank', 'noopener,noreferrer');"
    ));
}
