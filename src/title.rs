//! Derives the selection summary line shown under the product image.

use crate::model::Configuration;
use crate::selection::SelectionState;

/// Render the title, or an empty string while nothing counts as selected
/// (the caller hides the element on empty).
///
/// Fixed order: cabinet, then shell. Each enabled group with a current
/// pick contributes `"<singular section title>: <option name>"`.
pub fn render_title(selection: &SelectionState, config: &Configuration) -> String {
    if !selection.user_selected() {
        return String::new();
    }

    let mut parts: Vec<String> = Vec::with_capacity(2);
    if config.enable_cabinet_options {
        if let Some(cabinet) = selection.cabinet() {
            parts.push(format!(
                "{}: {}",
                singularize(&config.cabinet_section_title),
                cabinet.name
            ));
        }
    }
    if config.enable_shell_options {
        if let Some(shell) = selection.shell() {
            parts.push(format!(
                "{}: {}",
                singularize(&config.shell_section_title),
                shell.name
            ));
        }
    }
    parts.join(" | ")
}

/// Strip one trailing 's' from the configured plural section title.
/// Deliberately naive; the section titles are merchant-authored and plural
/// by convention, not by grammar.
fn singularize(title: &str) -> &str {
    title.strip_suffix('s').unwrap_or(title)
}
