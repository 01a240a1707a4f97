//! The current shell/cabinet pick for one widget instance.
//!
//! This is the single source of truth the view renders from; nothing is
//! ever read back out of the DOM.

use crate::model::{CabinetOption, Choice, Configuration, GroupKind, ShellOption};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    shell: Option<ShellOption>,
    cabinet: Option<CabinetOption>,
    user_selected: bool,
}

impl SelectionState {
    /// Resolve the configured defaults against the option lists.
    ///
    /// Each group falls back to its first entry when the configured name is
    /// empty or matches nothing. `user_selected` starts true only when a
    /// configured (non-fallback) default actually matched, so a widget with
    /// no defaults keeps its title hidden until the shopper interacts.
    pub fn initialize_defaults(config: &Configuration) -> Self {
        let named_shell = match config.default_shell.as_str() {
            "" => None,
            name => config.shell_by_name(name),
        };
        let named_cabinet = match config.default_cabinet.as_str() {
            "" => None,
            name => config.cabinet_by_name(name),
        };
        let user_selected = named_shell.is_some() || named_cabinet.is_some();
        SelectionState {
            shell: named_shell.or(config.shell_options.first()).cloned(),
            cabinet: named_cabinet.or(config.cabinet_options.first()).cloned(),
            user_selected,
        }
    }

    /// Overwrite the field matching the choice's group.
    pub fn select(&mut self, choice: Choice) {
        match choice {
            Choice::Shell(shell) => self.shell = Some(shell),
            Choice::Cabinet(cabinet) => self.cabinet = Some(cabinet),
        }
        self.user_selected = true;
    }

    /// Name equality against the current pick of the choice's group.
    pub fn is_selected(&self, choice: &Choice) -> bool {
        match choice.kind() {
            GroupKind::Shell => self.shell.as_ref().is_some_and(|s| s.name == choice.name()),
            GroupKind::Cabinet => self
                .cabinet
                .as_ref()
                .is_some_and(|c| c.name == choice.name()),
        }
    }

    pub fn shell(&self) -> Option<&ShellOption> {
        self.shell.as_ref()
    }

    pub fn cabinet(&self) -> Option<&CabinetOption> {
        self.cabinet.as_ref()
    }

    /// True once the shopper picked something, or a configured default
    /// matched at init. Gates title visibility.
    pub fn user_selected(&self) -> bool {
        self.user_selected
    }
}
