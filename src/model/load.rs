//! Serialized-payload parsing.
//!
//! The payload is the JSON blob the host page embeds per widget. Only a
//! structurally malformed payload is an error; absent or unknown fields
//! default so a half-filled configuration still renders something.

use serde::Deserialize;
use thiserror::Error;

use super::{
    CabinetImage, CabinetOption, Configuration, Hotspot, HotspotKind, ShellOption,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed configuration payload: {0}")]
    Parse(#[from] serde_json::Error),
}

// ── Raw payload shape ───────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Payload {
    product_title: String,
    enable_cabinet_options: bool,
    enable_shell_options: bool,
    cabinet_section_title: String,
    shell_section_title: String,
    cabinet_options: Vec<CabinetPayload>,
    shell_options: Vec<ShellPayload>,
    hotspots: Vec<HotspotPayload>,
    default_shell: String,
    default_cabinet: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CabinetPayload {
    name: String,
    thumbnail_url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ShellPayload {
    name: String,
    preview_url: String,
    cabinet_images: Vec<CabinetImagePayload>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CabinetImagePayload {
    cabinet: String,
    url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HotspotPayload {
    name: String,
    kind: KindPayload,
    x_percent: f64,
    y_percent: f64,
    top_angle_image: String,
    qr_code_image: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum KindPayload {
    TopAngle,
    QrCode,
    // serde requires the catch-all variant to be declared last.
    #[default]
    #[serde(other)]
    Selector,
}

// ── Conversion ──────────────────────────────────────────────────────────

/// Parse a serialized payload into a `Configuration`.
///
/// Cross-references (default names vs. option lists) are deliberately not
/// checked here; `SelectionState::initialize_defaults` resolves them.
pub fn parse_payload(payload: &str) -> Result<Configuration, ConfigError> {
    let raw: Payload = serde_json::from_str(payload)?;
    Ok(Configuration {
        product_title: raw.product_title,
        enable_cabinet_options: raw.enable_cabinet_options,
        enable_shell_options: raw.enable_shell_options,
        cabinet_section_title: or_default(raw.cabinet_section_title, "Cabinet Options"),
        shell_section_title: or_default(raw.shell_section_title, "Shell Options"),
        cabinet_options: raw.cabinet_options.into_iter().map(cabinet).collect(),
        shell_options: raw.shell_options.into_iter().map(shell).collect(),
        hotspots: raw.hotspots.into_iter().map(hotspot).collect(),
        default_shell: raw.default_shell,
        default_cabinet: raw.default_cabinet,
    })
}

fn or_default(value: String, fallback: &str) -> String {
    if value.is_empty() { fallback.to_string() } else { value }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

fn cabinet(raw: CabinetPayload) -> CabinetOption {
    CabinetOption {
        name: raw.name,
        thumbnail_url: non_empty(raw.thumbnail_url),
    }
}

fn shell(raw: ShellPayload) -> ShellOption {
    ShellOption {
        name: raw.name,
        preview_url: non_empty(raw.preview_url),
        cabinet_images: raw
            .cabinet_images
            .into_iter()
            .map(|entry| CabinetImage {
                cabinet: entry.cabinet,
                url: entry.url,
            })
            .collect(),
    }
}

fn hotspot(raw: HotspotPayload) -> Hotspot {
    let kind = match raw.kind {
        KindPayload::TopAngle => HotspotKind::TopAngle,
        KindPayload::QrCode => HotspotKind::QrCode,
        KindPayload::Selector => HotspotKind::Selector,
    };
    // Only the image field matching the kind survives conversion.
    let top_angle_url = match kind {
        HotspotKind::TopAngle => non_empty(raw.top_angle_image),
        _ => None,
    };
    let qr_code_url = match kind {
        HotspotKind::QrCode => non_empty(raw.qr_code_image),
        _ => None,
    };
    Hotspot {
        name: raw.name,
        kind,
        x_percent: raw.x_percent.clamp(0.0, 100.0),
        y_percent: raw.y_percent.clamp(0.0, 100.0),
        top_angle_url,
        qr_code_url,
    }
}
