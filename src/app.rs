//! Exported page surface and startup wiring.
//!
//! The page templates call the `#[wasm_bindgen]` functions below from
//! `onclick` handlers; [`start`] runs once when the module loads. Every
//! handler isolates its own failures, so nothing here is fatal to the
//! page.

#[cfg(feature = "browser")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "browser")]
use crate::vote::{Direction, TargetKind};

/// Module entry point: install diagnostics, apply the persisted theme,
/// and wire alert dismissal.
#[cfg(feature = "browser")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    crate::theme::apply(crate::theme::initial_theme(&crate::theme::LocalStorage));

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        crate::alert::wire(&document);
    }
}

/// Vote on a post. `direction` is `"upvote"` or `"downvote"`.
#[cfg(feature = "browser")]
#[wasm_bindgen]
pub fn vote_post(id: String, direction: String) {
    submit_vote(TargetKind::Post, id, direction);
}

/// Vote on a comment. `direction` is `"upvote"` or `"downvote"`.
#[cfg(feature = "browser")]
#[wasm_bindgen]
pub fn vote_comment(id: String, direction: String) {
    submit_vote(TargetKind::Comment, id, direction);
}

/// Fetch a post's share link and copy it to the clipboard.
#[cfg(feature = "browser")]
#[wasm_bindgen]
pub fn share_post(id: String) {
    wasm_bindgen_futures::spawn_local(async move {
        let link = match crate::share::fetch(&id).await {
            Ok(body) => body.link,
            Err(e) => {
                // Quieter than voting on purpose: log only, no alert.
                log::warn!("share link request for post {id} failed: {e}");
                return;
            }
        };
        if crate::share::copy_to_clipboard(&link).await.is_ok() {
            blocking_alert("Link copied to clipboard!");
        }
    });
}

/// Flip the theme. The live `data-theme` attribute is the source of
/// truth for the current state.
#[cfg(feature = "browser")]
#[wasm_bindgen]
pub fn toggle_theme() {
    let next = crate::theme::toggle(crate::theme::applied(), &crate::theme::LocalStorage);
    crate::theme::apply(next);
}

/// Fire one vote request and render the confirmed tallies.
#[cfg(feature = "browser")]
fn submit_vote(kind: TargetKind, id: String, direction: String) {
    let Some(direction) = Direction::parse(&direction) else {
        log::warn!("ignoring vote with unknown direction {direction:?}");
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        match crate::vote::submit(kind, &id, direction).await {
            Ok(counts) => crate::vote::render_counts(&id, counts),
            Err(e) => {
                log::error!("vote request for {} {id} failed: {e}", kind.as_segment());
                blocking_alert("Something went wrong while voting.");
            }
        }
    });
}

#[cfg(feature = "browser")]
fn blocking_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
