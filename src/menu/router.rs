use super::screens::{action_screens, command_screens};
use super::{Action, Screen};
use crate::types::error::{BotError, Result};
use std::collections::HashMap;
use tracing::debug;

/// Lookup tables from inbound commands and button actions to screens.
///
/// Immutable after construction; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct MenuRouter {
    commands: HashMap<&'static str, Screen>,
    actions: HashMap<Action, Screen>,
}

impl MenuRouter {
    /// Build every screen with `contact` substituted into the copy
    pub fn new(contact: &str) -> Self {
        let commands: HashMap<_, _> = command_screens(contact).into_iter().collect();
        let actions: HashMap<_, _> = action_screens(contact).into_iter().collect();
        debug!(
            commands = commands.len(),
            actions = actions.len(),
            "Menu router built"
        );
        Self { commands, actions }
    }

    /// Screen for a slash-command name, or `None` for anything unregistered
    pub fn handle_command(&self, name: &str) -> Option<&Screen> {
        self.commands.get(name)
    }

    /// Screen for raw callback data. Data outside the action set yields
    /// `None`; the caller still acknowledges the press.
    pub fn handle_action(&self, data: &str) -> Option<&Screen> {
        let action = data.parse::<Action>().ok()?;
        self.actions.get(&action)
    }

    /// Registered command names, in no particular order
    pub fn command_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    /// Check that every button on every screen resolves to a screen
    pub fn validate(&self) -> Result<()> {
        let screens = self.commands.values().chain(self.actions.values());
        for screen in screens {
            for action in screen.keyboard.actions() {
                if !self.actions.contains_key(&action) {
                    return Err(BotError::dangling_action(
                        screen.id.as_str(),
                        action.as_str(),
                    ));
                }
            }
        }
        Ok(())
    }

    #[cfg(test)]
    fn without_action(mut self, action: Action) -> Self {
        self.actions.remove(&action);
        self
    }
}
