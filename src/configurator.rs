//! Host-facing handle for one widget instance: configuration, selection,
//! and the memoized resolved image.
//!
//! The Dioxus component in `widget` drives one of these; a host that owns
//! its own rendering can use it directly through the pure queries.

use crate::model::{Choice, ConfigError, Configuration, parse_payload};
use crate::resolve::resolve_image_url;
use crate::selection::SelectionState;
use crate::title::render_title;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfiguratorCore {
    config: Configuration,
    selection: SelectionState,
    image_url: Option<String>,
}

impl ConfiguratorCore {
    /// Parse a serialized payload and apply the default selections.
    pub fn new(payload: &str) -> Result<Self, ConfigError> {
        Ok(Self::from_config(parse_payload(payload)?))
    }

    pub fn from_config(config: Configuration) -> Self {
        let selection = SelectionState::initialize_defaults(&config);
        let mut core = Self { config, selection, image_url: None };
        core.refresh_image();
        core
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Apply a pick and re-resolve the image.
    pub fn select(&mut self, choice: Choice) {
        self.selection.select(choice);
        self.refresh_image();
    }

    /// The image currently shown. Stays on the previous value when the
    /// current pair resolves to nothing, so the view never flashes blank.
    pub fn current_image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn current_title(&self) -> String {
        render_title(&self.selection, &self.config)
    }

    fn refresh_image(&mut self) {
        if let Some(url) = resolve_image_url(&self.selection, &self.config) {
            self.image_url = Some(url);
        }
    }
}
