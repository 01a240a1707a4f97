//! Picks the product photo for the current shell/cabinet pair.
//!
//! Precedence is fixed: exact per-cabinet key, then one normalized-key
//! pass over the same map, then nothing. The normalized pass is a
//! compatibility shim for image maps keyed by older free-text cabinet
//! names with inconsistent casing or spacing.

use crate::model::Configuration;
use crate::selection::SelectionState;

/// Resolve the image URL for the current selection, or `None` when the
/// pair has no image. Callers keep the previously shown image on `None`
/// rather than blanking the view.
pub fn resolve_image_url(selection: &SelectionState, config: &Configuration) -> Option<String> {
    let shell = match selection.shell() {
        Some(shell) => shell,
        None => config.default_shell_option()?,
    };

    let cabinet_name = selection
        .cabinet()
        .map(|c| c.name.as_str())
        .or_else(|| {
            if config.default_cabinet.is_empty() {
                None
            } else {
                Some(config.default_cabinet.as_str())
            }
        })
        .unwrap_or("");

    // Exact key wins outright.
    if let Some(url) = shell.image_for(cabinet_name) {
        if !url.is_empty() {
            return Some(url.to_string());
        }
    }

    if !cabinet_name.is_empty() {
        let wanted = normalize_key(cabinet_name);
        if let Some(entry) = shell
            .cabinet_images
            .iter()
            .find(|entry| !entry.url.is_empty() && normalize_key(&entry.cabinet) == wanted)
        {
            return Some(entry.url.clone());
        }
    }

    None
}

/// Case-fold and strip all whitespace, matching how legacy cabinet keys
/// were derived from free text.
fn normalize_key(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
