//! Demo pages: a single configurator, and a two-widget page that
//! exercises the shared popup layer.

use dioxus::prelude::*;

use crate::Route;
use crate::widget::Configurator;

const VISTA_PAYLOAD: &str = r#"{
    "product_title": "Vista 500 Spa",
    "enable_cabinet_options": true,
    "enable_shell_options": true,
    "cabinet_section_title": "Cabinet Colors",
    "shell_section_title": "Shell Colors",
    "cabinet_options": [
        { "name": "Slate", "thumbnail_url": "/assets/spa/cabinet-slate.jpg" },
        { "name": "Graphite", "thumbnail_url": "/assets/spa/cabinet-graphite.jpg" }
    ],
    "shell_options": [
        { "name": "Platinum", "preview_url": "/assets/spa/shell-platinum.jpg",
          "cabinet_images": [
            { "cabinet": "Slate", "url": "/assets/spa/platinum-slate.jpg" },
            { "cabinet": "Graphite", "url": "/assets/spa/platinum-graphite.jpg" }
          ] },
        { "name": "Midnight", "preview_url": "/assets/spa/shell-midnight.jpg",
          "cabinet_images": [
            { "cabinet": "Slate", "url": "/assets/spa/midnight-slate.jpg" },
            { "cabinet": "Graphite", "url": "/assets/spa/midnight-graphite.jpg" }
          ] },
        { "name": "Sterling", "preview_url": "/assets/spa/shell-sterling.jpg",
          "cabinet_images": [
            { "cabinet": "Slate", "url": "/assets/spa/sterling-slate.jpg" }
          ] }
    ],
    "hotspots": [
        { "name": "Cabinet Colors", "kind": "selector", "x_percent": 22, "y_percent": 72 },
        { "name": "Shell Colors", "kind": "selector", "x_percent": 58, "y_percent": 34 },
        { "name": "Top View", "kind": "top_angle", "x_percent": 50, "y_percent": 8,
          "top_angle_image": "/assets/spa/vista-top.jpg" },
        { "name": "View in AR", "kind": "qr_code", "x_percent": 88, "y_percent": 88,
          "qr_code_image": "/assets/spa/vista-qr.png" }
    ]
}"#;

const CASCADE_PAYLOAD: &str = r#"{
    "product_title": "Cascade 300 Spa",
    "enable_cabinet_options": true,
    "enable_shell_options": true,
    "cabinet_section_title": "Cabinets",
    "shell_section_title": "Shells",
    "cabinet_options": [
        { "name": "Driftwood", "thumbnail_url": "/assets/spa/cabinet-driftwood.jpg" },
        { "name": "Espresso", "thumbnail_url": "/assets/spa/cabinet-espresso.jpg" }
    ],
    "shell_options": [
        { "name": "Pearl", "preview_url": "/assets/spa/shell-pearl.jpg",
          "cabinet_images": [
            { "cabinet": "Driftwood", "url": "/assets/spa/pearl-driftwood.jpg" },
            { "cabinet": "Espresso", "url": "/assets/spa/pearl-espresso.jpg" }
          ] }
    ],
    "hotspots": [
        { "name": "Cabinet Colors", "kind": "selector", "x_percent": 30, "y_percent": 68 },
        { "name": "Shell Colors", "kind": "selector", "x_percent": 64, "y_percent": 30 }
    ],
    "default_shell": "Pearl",
    "default_cabinet": "Driftwood"
}"#;

#[component]
fn DemoHeader(subtitle: String) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 16px; align-items: center; margin-bottom: 24px;",
            h2 {
                style: "color: #e5e7eb; margin: 0; font-size: 20px;",
                "Spa Configurator"
            }
            span {
                style: "color: #6b7280; font-size: 14px;",
                "{subtitle}"
            }
            Link {
                to: Route::Demo {},
                style: "color: #6b7280; text-decoration: none; font-size: 14px;",
                "single"
            }
            Link {
                to: Route::DualDemo {},
                style: "color: #6b7280; text-decoration: none; font-size: 14px;",
                "dual"
            }
        }
    }
}

#[component]
pub fn Demo() -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; \
                    align-items: center; padding: 32px 20px; font-family: system-ui, sans-serif;",

            DemoHeader { subtitle: "hotspots, popups, image swapping".to_string() }

            div {
                style: "background: white; border-radius: 14px; padding: 24px; width: 100%; max-width: 760px;",
                Configurator { payload: VISTA_PAYLOAD.to_string() }
            }
        }
    }
}

#[component]
pub fn DualDemo() -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; \
                    align-items: center; padding: 32px 20px; font-family: system-ui, sans-serif;",

            DemoHeader { subtitle: "two widgets, one shared popup layer".to_string() }

            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 24px; width: 100%; max-width: 1200px;",

                div {
                    style: "background: white; border-radius: 14px; padding: 24px;",
                    Configurator { payload: VISTA_PAYLOAD.to_string() }
                }
                div {
                    style: "background: white; border-radius: 14px; padding: 24px;",
                    Configurator { payload: CASCADE_PAYLOAD.to_string() }
                }
            }
        }
    }
}
