//! Per-widget window event plumbing: Escape, resize, and scroll.
//!
//! Listeners are installed through an eval bridge and keyed by widget id
//! via an `AbortController`, so teardown removes exactly this widget's
//! handlers and nothing else.

use dioxus::prelude::*;

use crate::popup::{PopupState, WidgetId};
use crate::widget::{POPUP_LAYER, hotspot_anchor, viewport_size};

pub(super) fn use_window_events(widget: WidgetId) {
    use_effect(move || {
        let js = format!(
            r#"
            (() => {{
                const ctl = new AbortController();
                (window.__spaListeners = window.__spaListeners || {{}})[{id}] = ctl;
                const opts = {{ signal: ctl.signal }};
                window.addEventListener('resize', () => dioxus.send('resize'), opts);
                window.addEventListener('scroll', () => dioxus.send('scroll'),
                    {{ signal: ctl.signal, capture: true }});
                document.addEventListener('keydown', (e) => {{
                    if (e.key === 'Escape') dioxus.send('escape');
                }}, opts);
            }})();
            "#,
            id = widget.0
        );
        spawn(async move {
            let mut events = document::eval(&js);
            while let Ok(event) = events.recv::<String>().await {
                handle_window_event(widget, &event);
            }
        });
    });
}

fn handle_window_event(widget: WidgetId, event: &str) {
    match event {
        "escape" => {
            if POPUP_LAYER.read().owned_by(widget) {
                POPUP_LAYER.write().close();
            }
        }
        "resize" => {
            if POPUP_LAYER.read().owned_by(widget) {
                POPUP_LAYER.write().resized();
            }
        }
        // Scroll re-places an anchored popup against the hotspot's new
        // viewport position without closing it.
        "scroll" => {
            let anchored_hotspot = {
                let layer = POPUP_LAYER.read();
                match layer.state() {
                    PopupState::Anchored { hotspot, .. } if layer.owned_by(widget) => {
                        Some(*hotspot)
                    }
                    _ => None,
                }
            };
            if let Some(index) = anchored_hotspot {
                if let Some(anchor) = hotspot_anchor(widget, index) {
                    POPUP_LAYER.write().scrolled(anchor, viewport_size());
                }
            }
        }
        _ => {}
    }
}

pub(super) fn remove_window_events(widget: WidgetId) {
    let _ = document::eval(&format!(
        "window.__spaListeners?.[{id}]?.abort(); \
         if (window.__spaListeners) delete window.__spaListeners[{id}];",
        id = widget.0
    ));
}
