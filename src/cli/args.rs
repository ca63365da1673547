use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};

use crate::io::terminal_width;
use crate::models::constants::HEADER_WIDTH;
use crate::ui::theme::DisplaySettings;

/// Two-player noughts & crosses in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Seed for choosing who moves first (random when omitted)
    #[arg(short, long, env = "NOUGHTS_SEED")]
    pub seed: Option<u64>,

    /// Disable colours and text styling
    #[arg(
        long,
        env = "NOUGHTS_NO_COLOR",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Never clear the screen between views
    #[arg(
        long,
        env = "NOUGHTS_NO_CLEAR",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub no_clear: bool,

    /// Header width in columns (follows the terminal when omitted)
    #[arg(
        short,
        long,
        env = "NOUGHTS_WIDTH",
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub width: Option<u16>,

    /// Always show the numbered guide board beside the game board
    #[arg(long)]
    pub guide: bool,
}

impl Args {
    /// Resolve display settings, querying the terminal if no width was given.
    pub fn display_settings(&self) -> DisplaySettings {
        self.display_settings_with(terminal_width())
    }

    fn display_settings_with(&self, terminal_width: Option<usize>) -> DisplaySettings {
        let header_width = self
            .width
            .map(usize::from)
            .or(terminal_width)
            .unwrap_or(HEADER_WIDTH);
        DisplaySettings {
            color: !self.no_color,
            clear_screen: !self.no_clear,
            header_width,
            guide: self.guide,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, MutexGuard};

    /// Tests here read process-wide environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn parse_with_env(vars: &[(&str, &str)]) -> Result<Args, clap::Error> {
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let parsed = Args::try_parse_from(["noughts"]);
        for (key, _) in vars {
            env::remove_var(key);
        }
        parsed
    }

    #[test]
    fn env_switches_accept_numeric_values() {
        let _guard = env_lock();

        let on = parse_with_env(&[("NOUGHTS_NO_COLOR", "1"), ("NOUGHTS_NO_CLEAR", "1")]).unwrap();
        assert!(on.no_color);
        assert!(on.no_clear);

        let off = parse_with_env(&[("NOUGHTS_NO_COLOR", "0"), ("NOUGHTS_NO_CLEAR", "0")]).unwrap();
        assert!(!off.no_color);
        assert!(!off.no_clear);

        let settings = parse_with_env(&[("NOUGHTS_NO_COLOR", "true")])
            .unwrap()
            .display_settings_with(None);
        assert!(!settings.color);
        assert!(settings.clear_screen);
    }

    #[test]
    fn env_supplies_seed_and_width() {
        let _guard = env_lock();
        let args = parse_with_env(&[("NOUGHTS_SEED", "99"), ("NOUGHTS_WIDTH", "60")]).unwrap();
        assert_eq!(args.seed, Some(99));
        assert_eq!(args.display_settings_with(Some(120)).header_width, 60);
    }

    #[test]
    fn defaults() {
        let _guard = env_lock();
        let args = Args::try_parse_from(["noughts"]).unwrap();
        assert_eq!(args.seed, None);
        let settings = args.display_settings_with(None);
        assert_eq!(settings, DisplaySettings::default());
    }

    #[test]
    fn flags_map_to_settings() {
        let _guard = env_lock();
        let args = Args::try_parse_from([
            "noughts", "--seed", "7", "--no-color", "--no-clear", "--width", "40", "--guide",
        ])
        .unwrap();
        assert_eq!(args.seed, Some(7));
        let settings = args.display_settings_with(Some(120));
        assert!(!settings.color);
        assert!(!settings.clear_screen);
        assert!(settings.guide);
        assert_eq!(settings.header_width, 40);
    }

    #[test]
    fn width_follows_terminal_when_unset() {
        let _guard = env_lock();
        let args = Args::try_parse_from(["noughts"]).unwrap();
        assert_eq!(args.display_settings_with(Some(132)).header_width, 132);
    }

    #[test]
    fn zero_width_rejected() {
        let _guard = env_lock();
        assert!(Args::try_parse_from(["noughts", "--width", "0"]).is_err());
    }

    #[test]
    fn bad_seed_rejected() {
        let _guard = env_lock();
        assert!(Args::try_parse_from(["noughts", "--seed", "abc"]).is_err());
    }
}
