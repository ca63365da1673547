//! Colours and display settings
//!
//! Game state never carries styling; marks and messages are painted here,
//! at render time.

use crossterm::style::{style, Stylize};

use crate::models::constants::HEADER_WIDTH;
use crate::models::player::PlayerId;

/// How the terminal should be driven
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    pub color: bool,
    pub clear_screen: bool,
    pub header_width: usize,
    /// Show the numbered guide board next to the live one without asking.
    pub guide: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            color: true,
            clear_screen: true,
            header_width: HEADER_WIDTH,
            guide: false,
        }
    }
}

/// What a piece of text is for, which decides its style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Player(PlayerId),
    Caution,
    Success,
    Title,
    Header,
    Prompt,
    Emphasis,
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    enabled: bool,
}

impl Theme {
    pub fn new(enabled: bool) -> Self {
        Theme { enabled }
    }

    pub fn plain() -> Self {
        Theme { enabled: false }
    }

    pub fn paint(&self, text: &str, role: Role) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let content = style(text);
        let styled = match role {
            Role::Player(PlayerId::One) => content.blue(),
            Role::Player(PlayerId::Two) => content.magenta(),
            Role::Caution => content.yellow(),
            Role::Success => content.green(),
            Role::Title => content.cyan(),
            Role::Header | Role::Emphasis => content.bold(),
            Role::Prompt => content.underlined(),
        };
        styled.to_string()
    }

    /// A player's mark in their colour.
    pub fn mark(&self, player: PlayerId) -> String {
        self.paint(&player.mark().to_string(), Role::Player(player))
    }
}
