//! The configurator widget component and the shared popup surface.

mod listeners;

use std::sync::atomic::{AtomicU32, Ordering};

use dioxus::logger::tracing::{error, warn};
use dioxus::prelude::*;

use crate::configurator::ConfiguratorCore;
use crate::model::HotspotKind;
use crate::popup::placement::{GridMetrics, Point, Size};
use crate::popup::{CLOSE_DELAY_MS, PopupLayer, PopupState, WidgetId};

/// The one popup surface shared by every widget on the page.
pub(crate) static POPUP_LAYER: GlobalSignal<PopupLayer> = Signal::global(PopupLayer::new);

static NEXT_WIDGET: AtomicU32 = AtomicU32::new(0);

pub(crate) fn viewport_size() -> Size {
    let window = web_sys::window();
    Size {
        w: window
            .as_ref()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0),
        h: window
            .as_ref()
            .and_then(|w| w.inner_height().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0),
    }
}

fn hotspot_dom_id(widget: WidgetId, index: usize) -> String {
    format!("spa-hotspot-{}-{}", widget.0, index)
}

/// Current viewport-space center of a hotspot element.
pub(crate) fn hotspot_anchor(widget: WidgetId, index: usize) -> Option<Point> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(&hotspot_dom_id(widget, index))?;
    let rect = element.get_bounding_client_rect();
    Some(Point {
        x: rect.x() + rect.width() / 2.0,
        y: rect.y() + rect.height() / 2.0,
    })
}

/// Fade state for the base product image. The first bitmap fades in on
/// its load event; on later src swaps the browser keeps the old bitmap
/// on screen until the replacement has decoded, so the element stays at
/// full opacity and a slow load never dims the view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct ImageFade {
    loaded_once: bool,
}

impl ImageFade {
    pub fn on_load(&mut self) {
        self.loaded_once = true;
    }

    /// True until the first load event; later swaps need no signal.
    pub fn awaiting_first_load(&self) -> bool {
        !self.loaded_once
    }

    pub fn opacity(&self) -> &'static str {
        if self.loaded_once { "1" } else { "0" }
    }
}

fn hotspot_glyph(kind: HotspotKind) -> &'static str {
    match kind {
        HotspotKind::Selector => "+",
        HotspotKind::TopAngle => "\u{2922}",
        HotspotKind::QrCode => "\u{25a6}",
    }
}

#[component]
pub fn Configurator(payload: String) -> Element {
    let widget_id = use_hook(|| WidgetId(NEXT_WIDGET.fetch_add(1, Ordering::Relaxed)));
    let core: Signal<Option<ConfiguratorCore>> = use_signal(|| {
        match ConfiguratorCore::new(&payload) {
            Ok(core) => Some(core),
            Err(err) => {
                error!("configurator: payload rejected: {err}");
                None
            }
        }
    });
    let mut fade = use_signal(ImageFade::default);

    listeners::use_window_events(widget_id);
    use_drop(move || {
        listeners::remove_window_events(widget_id);
        POPUP_LAYER.write().release(widget_id);
    });

    // Fade the base image in on its first load event. Later src swaps
    // skip the bridge; the element stays fully opaque and the old bitmap
    // holds the frame until the new one decodes.
    use_effect(move || {
        let src = core
            .read()
            .as_ref()
            .and_then(|c| c.current_image_url().map(String::from));
        let Some(_src) = src else { return };
        if !fade.peek().awaiting_first_load() {
            return;
        }
        let js = format!(
            r#"
            const img = document.getElementById('spa-image-{id}');
            if (!img || img.complete) {{ dioxus.send(true); }}
            else {{ img.addEventListener('load', () => dioxus.send(true), {{ once: true }}); }}
            "#,
            id = widget_id.0
        );
        spawn(async move {
            let mut loaded = document::eval(&js);
            if loaded.recv::<bool>().await.is_ok() {
                fade.write().on_load();
            }
        });
    });

    let snapshot = core.read().clone();
    let Some(view) = snapshot else {
        return rsx! {
            div {
                class: "spa-configurator spa-not-configured",
                style: "padding: 40px; text-align: center; background: #f3f4f6; border-radius: 10px; \
                        color: #6b7280; font-family: system-ui, sans-serif; font-size: 15px;",
                "This product is not configured yet."
            }
        };
    };

    let title = view.current_title();
    let title_opacity = if title.is_empty() { "0" } else { "1" };
    let image_url = view.current_image_url().unwrap_or_default().to_string();
    let image_opacity = fade.read().opacity();
    let product_title = view.config().product_title.clone();
    let hotspots = view.config().hotspots.clone();
    let img_id = format!("spa-image-{}", widget_id.0);

    let layer = POPUP_LAYER.read().clone();
    let popup = if layer.owned_by(widget_id) {
        popup_markup(&view, core, layer.state().clone())
    } else {
        rsx! {}
    };

    rsx! {
        div {
            class: "spa-configurator",
            style: "position: relative; width: 100%; max-width: 720px; font-family: system-ui, sans-serif;",

            if !product_title.is_empty() {
                h2 {
                    style: "margin: 0 0 12px 0; font-size: 22px; color: #111;",
                    "{product_title}"
                }
            }

            div {
                style: "position: relative;",

                if !image_url.is_empty() {
                    img {
                        id: "{img_id}",
                        class: "spa-base-image",
                        src: "{image_url}",
                        style: "width: 100%; display: block; border-radius: 10px; \
                                opacity: {image_opacity}; transition: opacity 0.3s;",
                    }
                }

                for (i, hotspot) in hotspots.iter().enumerate() {
                    {
                        let dom_id = hotspot_dom_id(widget_id, i);
                        let glyph = hotspot_glyph(hotspot.kind);
                        let x = hotspot.x_percent;
                        let y = hotspot.y_percent;

                        rsx! {
                            button {
                                id: "{dom_id}",
                                class: "spa-hotspot",
                                style: "position: absolute; left: {x}%; top: {y}%; \
                                        transform: translate(-50%, -50%); width: 32px; height: 32px; \
                                        border-radius: 50%; border: 2px solid white; background: rgba(79,70,229,0.85); \
                                        color: white; font-size: 16px; line-height: 1; cursor: pointer; \
                                        box-shadow: 0 2px 8px rgba(0,0,0,0.35);",
                                onclick: move |e| {
                                    e.stop_propagation();
                                    let anchor = hotspot_anchor(widget_id, i).unwrap_or_default();
                                    let outcome = core.with(|c| {
                                        c.as_ref().map(|c| {
                                            POPUP_LAYER.write().activate(
                                                widget_id,
                                                c.config(),
                                                i,
                                                anchor,
                                                viewport_size(),
                                            )
                                        })
                                    });
                                    if let Some(Err(reason)) = outcome {
                                        warn!("configurator: hotspot {i} ignored: {reason}");
                                    }
                                },
                                "{glyph}"
                            }
                        }
                    }
                }
            }

            // The title keeps its space; only its visibility toggles.
            div {
                class: "spa-title",
                style: "min-height: 24px; margin-top: 10px; font-size: 15px; color: #374151; \
                        opacity: {title_opacity}; transition: opacity 0.2s;",
                "{title}"
            }

            {popup}
        }
    }
}

/// Popup markup for the widget that currently owns the layer.
fn popup_markup(
    view: &ConfiguratorCore,
    mut core: Signal<Option<ConfiguratorCore>>,
    state: PopupState,
) -> Element {
    match state {
        PopupState::Closed => rsx! {},

        PopupState::Anchored { at, size, group, title, .. } => {
            let grid = GridMetrics::for_viewport(viewport_size().w);
            let choices = view.config().choices(group);
            let columns = grid.first_row(choices.len());
            let selected: Vec<bool> = choices
                .iter()
                .map(|choice| view.selection().is_selected(choice))
                .collect();

            rsx! {
                // Click-away backdrop
                div {
                    style: "position: fixed; inset: 0; z-index: 999;",
                    onclick: move |e| {
                        e.stop_propagation();
                        POPUP_LAYER.write().close();
                    },
                }

                div {
                    class: "spa-popup",
                    style: "position: fixed; left: {at.x}px; top: {at.y}px; width: {size.w}px; \
                            background: white; border-radius: 10px; box-sizing: border-box; \
                            box-shadow: 0 8px 28px rgba(0,0,0,0.25); z-index: 1000;",

                    PopupHeader { title: title.clone() }

                    div {
                        style: "display: grid; grid-template-columns: repeat({columns}, {grid.cell}px); \
                                gap: {grid.gap}px; padding: 0 14px 14px 14px; justify-content: center;",

                        for (i, choice) in choices.into_iter().enumerate() {
                            {
                                let name = choice.name().to_string();
                                let thumb = choice.image_url().unwrap_or_default().to_string();
                                let border = if selected[i] { "#4f46e5" } else { "transparent" };

                                rsx! {
                                    div {
                                        class: "spa-option",
                                        style: "width: {grid.cell}px; cursor: pointer; text-align: center; \
                                                border: 2px solid {border}; border-radius: 8px; box-sizing: border-box; \
                                                padding: 2px; transition: border-color 0.15s;",
                                        onclick: move |e| {
                                            e.stop_propagation();
                                            core.with_mut(|c| {
                                                if let Some(c) = c {
                                                    c.select(choice.clone());
                                                }
                                            });
                                            // Let the highlight register before closing.
                                            let generation = POPUP_LAYER.read().generation();
                                            spawn(async move {
                                                gloo_timers::future::TimeoutFuture::new(CLOSE_DELAY_MS).await;
                                                POPUP_LAYER.write().close_if(generation);
                                            });
                                        },

                                        if !thumb.is_empty() {
                                            img {
                                                src: "{thumb}",
                                                style: "width: 100%; aspect-ratio: 1; object-fit: cover; \
                                                        border-radius: 6px; display: block;",
                                            }
                                        }
                                        div {
                                            style: "font-size: 12px; color: #374151; padding: 4px 0; \
                                                    overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                                            "{name}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        PopupState::Centered { view: centered, image_url } => {
            let heading = centered.heading().to_string();
            rsx! {
                // Dimming overlay; clicking it closes the popup.
                div {
                    style: "position: fixed; inset: 0; background: rgba(0,0,0,0.6); z-index: 999;",
                    onclick: move |_| {
                        POPUP_LAYER.write().close();
                    },
                }

                div {
                    class: "spa-popup",
                    style: "position: fixed; left: 50%; top: 50%; transform: translate(-50%, -50%); \
                            background: white; border-radius: 10px; box-shadow: 0 8px 28px rgba(0,0,0,0.35); \
                            z-index: 1000; max-width: 80vw; padding-bottom: 14px;",

                    PopupHeader { title: heading }

                    img {
                        src: "{image_url}",
                        style: "display: block; max-width: 76vw; max-height: 70vh; margin: 0 14px;",
                    }
                }
            }
        }
    }
}

#[component]
fn PopupHeader(title: String) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; \
                    padding: 12px 14px 8px 14px;",
            h3 {
                style: "margin: 0; font-size: 15px; color: #111;",
                "{title}"
            }
            button {
                class: "spa-popup-close",
                style: "border: none; background: none; font-size: 20px; color: #6b7280; \
                        cursor: pointer; line-height: 1; padding: 0 2px;",
                onclick: move |e| {
                    e.stop_propagation();
                    POPUP_LAYER.write().close();
                },
                "\u{00d7}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ImageFade;

    #[test]
    fn image_is_hidden_only_until_the_first_load() {
        let mut fade = ImageFade::default();
        assert_eq!(fade.opacity(), "0");
        assert!(fade.awaiting_first_load());
        fade.on_load();
        assert_eq!(fade.opacity(), "1");
    }

    #[test]
    fn src_swap_after_first_load_never_dims() {
        let mut fade = ImageFade::default();
        fade.on_load();
        // A later swap installs no load bridge and keeps full opacity,
        // so the old bitmap stays visible while the new one loads.
        assert!(!fade.awaiting_first_load());
        assert_eq!(fade.opacity(), "1");
    }
}
