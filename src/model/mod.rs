//! Configuration model for one configurator widget instance.
//!
//! Loaded once from a JSON payload (see `load`) and immutable for the
//! widget's lifetime. Selection and popup state reference entries here
//! by value, so a reloaded configuration can never leave dangling picks.

pub mod load;

pub use load::{ConfigError, parse_payload};

// ── Option groups ───────────────────────────────────────────────────────

/// Which of the two option groups something refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Cabinet,
    Shell,
}

/// A cabinet (base/frame) color option.
#[derive(Debug, Clone, PartialEq)]
pub struct CabinetOption {
    pub name: String,
    pub thumbnail_url: Option<String>,
}

/// One entry of a shell's sparse per-cabinet image map, in payload order.
#[derive(Debug, Clone, PartialEq)]
pub struct CabinetImage {
    pub cabinet: String,
    pub url: String,
}

/// A shell (outer finish) option with its per-cabinet product photos.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellOption {
    pub name: String,
    pub preview_url: Option<String>,
    pub cabinet_images: Vec<CabinetImage>,
}

impl ShellOption {
    /// Exact-key lookup into the per-cabinet image map.
    pub fn image_for(&self, cabinet: &str) -> Option<&str> {
        self.cabinet_images
            .iter()
            .find(|entry| entry.cabinet == cabinet)
            .map(|entry| entry.url.as_str())
    }
}

/// A picked option, tagged by group. Replaces field-name switching on a
/// duck-typed option shape with one discriminated accessor pair.
#[derive(Debug, Clone, PartialEq)]
pub enum Choice {
    Cabinet(CabinetOption),
    Shell(ShellOption),
}

impl Choice {
    pub fn kind(&self) -> GroupKind {
        match self {
            Choice::Cabinet(_) => GroupKind::Cabinet,
            Choice::Shell(_) => GroupKind::Shell,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Choice::Cabinet(c) => &c.name,
            Choice::Shell(s) => &s.name,
        }
    }

    /// Thumbnail shown in the option grid.
    pub fn image_url(&self) -> Option<&str> {
        match self {
            Choice::Cabinet(c) => c.thumbnail_url.as_deref(),
            Choice::Shell(s) => s.preview_url.as_deref(),
        }
    }
}

// ── Hotspots ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HotspotKind {
    #[default]
    Selector,
    TopAngle,
    QrCode,
}

/// A positioned, clickable marker overlaid on the product image.
/// Only the image field matching `kind` is ever populated (the loader
/// drops the rest).
#[derive(Debug, Clone, PartialEq)]
pub struct Hotspot {
    pub name: String,
    pub kind: HotspotKind,
    /// Horizontal anchor as a percentage of the container, in [0, 100].
    pub x_percent: f64,
    /// Vertical anchor as a percentage of the container, in [0, 100].
    pub y_percent: f64,
    pub top_angle_url: Option<String>,
    pub qr_code_url: Option<String>,
}

// ── Configuration ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Configuration {
    pub product_title: String,
    pub enable_cabinet_options: bool,
    pub enable_shell_options: bool,
    pub cabinet_section_title: String,
    pub shell_section_title: String,
    pub cabinet_options: Vec<CabinetOption>,
    pub shell_options: Vec<ShellOption>,
    pub hotspots: Vec<Hotspot>,
    /// Configured default names; empty means "not configured".
    pub default_shell: String,
    pub default_cabinet: String,
}

impl Configuration {
    pub fn shell_by_name(&self, name: &str) -> Option<&ShellOption> {
        self.shell_options.iter().find(|s| s.name == name)
    }

    pub fn cabinet_by_name(&self, name: &str) -> Option<&CabinetOption> {
        self.cabinet_options.iter().find(|c| c.name == name)
    }

    /// The shell a widget falls back to: the configured default when it
    /// names a real shell, else the first shell, else none.
    pub fn default_shell_option(&self) -> Option<&ShellOption> {
        if !self.default_shell.is_empty() {
            if let Some(shell) = self.shell_by_name(&self.default_shell) {
                return Some(shell);
            }
        }
        self.shell_options.first()
    }

    /// Symmetric fallback for the cabinet group.
    pub fn default_cabinet_option(&self) -> Option<&CabinetOption> {
        if !self.default_cabinet.is_empty() {
            if let Some(cabinet) = self.cabinet_by_name(&self.default_cabinet) {
                return Some(cabinet);
            }
        }
        self.cabinet_options.first()
    }

    pub fn group_enabled(&self, group: GroupKind) -> bool {
        match group {
            GroupKind::Cabinet => self.enable_cabinet_options,
            GroupKind::Shell => self.enable_shell_options,
        }
    }

    pub fn section_title(&self, group: GroupKind) -> &str {
        match group {
            GroupKind::Cabinet => &self.cabinet_section_title,
            GroupKind::Shell => &self.shell_section_title,
        }
    }

    pub fn options_len(&self, group: GroupKind) -> usize {
        match group {
            GroupKind::Cabinet => self.cabinet_options.len(),
            GroupKind::Shell => self.shell_options.len(),
        }
    }

    /// The group's options as tagged choices, in display order.
    pub fn choices(&self, group: GroupKind) -> Vec<Choice> {
        match group {
            GroupKind::Cabinet => self
                .cabinet_options
                .iter()
                .cloned()
                .map(Choice::Cabinet)
                .collect(),
            GroupKind::Shell => self
                .shell_options
                .iter()
                .cloned()
                .map(Choice::Shell)
                .collect(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn shell(name: &str, images: &[(&str, &str)]) -> ShellOption {
        ShellOption {
            name: name.to_string(),
            preview_url: Some(format!("/assets/{}.jpg", name.to_lowercase())),
            cabinet_images: images
                .iter()
                .map(|(cabinet, url)| CabinetImage {
                    cabinet: cabinet.to_string(),
                    url: url.to_string(),
                })
                .collect(),
        }
    }

    pub fn cabinet(name: &str) -> CabinetOption {
        CabinetOption {
            name: name.to_string(),
            thumbnail_url: Some(format!("/assets/{}-thumb.jpg", name.to_lowercase())),
        }
    }

    /// The two-shell, two-cabinet configuration used across the test suite.
    pub fn spa_config() -> Configuration {
        Configuration {
            product_title: "Vista Spa".to_string(),
            enable_cabinet_options: true,
            enable_shell_options: true,
            cabinet_section_title: "Cabinets".to_string(),
            shell_section_title: "Shells".to_string(),
            cabinet_options: vec![cabinet("Slate"), cabinet("Graphite")],
            shell_options: vec![
                shell("Platinum", &[("Slate", "p-s.jpg"), ("Graphite", "p-g.jpg")]),
                shell("Midnight", &[("Slate", "m-s.jpg")]),
            ],
            hotspots: vec![
                Hotspot {
                    name: "Cabinet Colors".to_string(),
                    kind: HotspotKind::Selector,
                    x_percent: 20.0,
                    y_percent: 70.0,
                    top_angle_url: None,
                    qr_code_url: None,
                },
                Hotspot {
                    name: "Shell Colors".to_string(),
                    kind: HotspotKind::Selector,
                    x_percent: 60.0,
                    y_percent: 30.0,
                    top_angle_url: None,
                    qr_code_url: None,
                },
            ],
            default_shell: String::new(),
            default_cabinet: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::spa_config;
    use super::*;

    #[test]
    fn default_shell_falls_back_to_first() {
        let config = spa_config();
        assert_eq!(config.default_shell_option().unwrap().name, "Platinum");
    }

    #[test]
    fn default_shell_prefers_configured_name() {
        let mut config = spa_config();
        config.default_shell = "Midnight".to_string();
        assert_eq!(config.default_shell_option().unwrap().name, "Midnight");
    }

    #[test]
    fn unmatched_default_name_falls_back_to_first() {
        let mut config = spa_config();
        config.default_shell = "Bronze".to_string();
        assert_eq!(config.default_shell_option().unwrap().name, "Platinum");
    }

    #[test]
    fn no_shells_means_no_default() {
        let mut config = spa_config();
        config.shell_options.clear();
        assert!(config.default_shell_option().is_none());
    }

    #[test]
    fn image_for_is_exact_and_sparse() {
        let config = spa_config();
        let midnight = config.shell_by_name("Midnight").unwrap();
        assert_eq!(midnight.image_for("Slate"), Some("m-s.jpg"));
        assert_eq!(midnight.image_for("Graphite"), None);
        assert_eq!(midnight.image_for("slate"), None);
    }

    #[test]
    fn choice_accessors_discriminate() {
        let config = spa_config();
        let shell = Choice::Shell(config.shell_options[0].clone());
        let cabinet = Choice::Cabinet(config.cabinet_options[1].clone());
        assert_eq!(shell.kind(), GroupKind::Shell);
        assert_eq!(shell.name(), "Platinum");
        assert_eq!(cabinet.kind(), GroupKind::Cabinet);
        assert_eq!(cabinet.name(), "Graphite");
        assert_eq!(cabinet.image_url(), Some("/assets/graphite-thumb.jpg"));
    }

    #[test]
    fn choices_preserve_display_order() {
        let config = spa_config();
        let names: Vec<String> = config
            .choices(GroupKind::Cabinet)
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(names, ["Slate", "Graphite"]);
    }
}
