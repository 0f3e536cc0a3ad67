//! Static menu graph and lookup tables.
//!
//! Every screen is built once at startup from the templates in
//! [`screens`]. Navigation is a star through the start screen: each menu
//! button opens a leaf screen and each leaf links back.

mod router;
pub mod screens;

pub use router::MenuRouter;

use std::fmt;
use std::str::FromStr;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// Identifier carried in the callback data of every inline button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Plans,
    Buy,
    WhyUs,
    Reviews,
    Trial,
    Help,
    Back,
    Start,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::Plans,
        Action::Buy,
        Action::WhyUs,
        Action::Reviews,
        Action::Trial,
        Action::Help,
        Action::Back,
        Action::Start,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Plans => "plans",
            Action::Buy => "buy",
            Action::WhyUs => "whyus",
            Action::Reviews => "reviews",
            Action::Trial => "trial",
            Action::Help => "help",
            Action::Back => "back",
            Action::Start => "start",
        }
    }

    /// Screen this action navigates to. `Back` has no history.
    pub fn target(self) -> ScreenId {
        match self {
            Action::Plans => ScreenId::Plans,
            Action::Buy => ScreenId::Buy,
            Action::WhyUs => ScreenId::WhyUs,
            Action::Reviews => ScreenId::Reviews,
            Action::Trial => ScreenId::Trial,
            Action::Help => ScreenId::Help,
            Action::Back | Action::Start => ScreenId::Start,
        }
    }
}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Callback data outside the closed action set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown action: {}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Start,
    Plans,
    Buy,
    WhyUs,
    Reviews,
    Trial,
    Help,
}

impl ScreenId {
    pub fn as_str(self) -> &'static str {
        match self {
            ScreenId::Start => "start",
            ScreenId::Plans => "plans",
            ScreenId::Buy => "buy",
            ScreenId::WhyUs => "whyus",
            ScreenId::Reviews => "reviews",
            ScreenId::Trial => "trial",
            ScreenId::Help => "help",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub action: Action,
}

impl Button {
    pub fn new(label: &'static str, action: Action) -> Self {
        Self { label, action }
    }
}

/// Inline keyboard as ordered rows of buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    rows: Vec<Vec<Button>>,
}

impl Keyboard {
    pub fn new(rows: Vec<Vec<Button>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Button>] {
        &self.rows
    }

    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.rows.iter().flatten().map(|b| b.action)
    }

    /// Row-by-row action identifiers, handy for asserting layouts
    pub fn layout(&self) -> Vec<Vec<&'static str>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|b| b.action.as_str()).collect())
            .collect()
    }
}

impl From<&Keyboard> for InlineKeyboardMarkup {
    fn from(keyboard: &Keyboard) -> Self {
        InlineKeyboardMarkup::new(keyboard.rows().iter().map(|row| {
            row.iter()
                .map(|b| InlineKeyboardButton::callback(b.label, b.action.as_str()))
                .collect::<Vec<_>>()
        }))
    }
}

/// A rendered screen: Telegram-HTML body plus its keyboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub id: ScreenId,
    pub body: String,
    pub keyboard: Keyboard,
}
