use tracing::{debug, info};

use crate::game_engine::GameState;
use crate::io::{InputReader, OutputWriter};
use crate::models::errors::GameResult;
use crate::models::player::PlayerId;
use crate::models::position::parse_position_id;
use crate::services::session::Session;
use crate::ui::presenters::{
    show_header, BoardPresenter, RoundPresenter, ScoreboardPresenter, TitlePresenter,
};
use crate::ui::theme::{DisplaySettings, Role, Theme};

const MOVE_PROMPT: &str = ">>>";
const YES_NO_RETRY: &str = "Please only enter 'y' or 'n'.";

/// Interactive driver: menus, name entry, the round loop and replays.
pub struct Game<I: InputReader, O: OutputWriter> {
    session: Session,
    input: I,
    output: O,
    settings: DisplaySettings,
    theme: Theme,
    show_guide: bool,
}

impl<I: InputReader, O: OutputWriter> Game<I, O> {
    pub fn new(seed: u64, settings: DisplaySettings, input: I, output: O) -> Self {
        Game {
            session: Session::new(seed),
            input,
            output,
            theme: Theme::new(settings.color),
            show_guide: settings.guide,
            settings,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Play rounds until the players decline a replay.
    pub fn run(&mut self) -> GameResult<()> {
        self.intro()?;
        self.set_up_players()?;

        loop {
            self.play_round()?;
            RoundPresenter::show_result(&self.session, self.width(), &self.theme, &mut self.output);
            self.pause()?;

            self.clear()?;
            ScoreboardPresenter::show(&self.session, self.width(), &self.theme, &mut self.output);
            self.pause()?;

            if !self.ask_yes_no("Would you like to play each other again?")? {
                break;
            }
        }

        info!(rounds = self.session.rounds_played(), "session over");
        self.clear()?;
        TitlePresenter::show_farewell(self.width(), &self.theme, &mut self.output);
        Ok(())
    }

    fn intro(&mut self) -> GameResult<()> {
        self.clear()?;
        TitlePresenter::show_title(&self.theme, &mut self.output);
        show_header(Some("Welcome"), self.width(), &self.theme, &mut self.output);
        self.output.writeln("Welcome to noughts & crosses");

        if self.ask_yes_no("Would you like to see the rules?")? {
            self.clear()?;
            BoardPresenter::show_rules(self.width(), &self.theme, &mut self.output);
            self.pause()?;
        }
        Ok(())
    }

    fn set_up_players(&mut self) -> GameResult<()> {
        self.clear()?;
        show_header(Some("What's your name?"), self.width(), &self.theme, &mut self.output);

        for id in PlayerId::ALL {
            let prompt = self.theme.paint(&format!("{}, what's your name?", id), Role::Prompt);
            let name = self.input.read_line(&prompt)?;
            self.session.rename(id, &name);
            let player = self.session.player(id);
            self.output.writeln(&format!(
                "Welcome {}!\n",
                self.theme.paint(player.name(), Role::Player(id))
            ));
        }

        if !self.settings.guide {
            self.show_guide = self.ask_yes_no("Would you like to display help whilst playing?")?;
        }
        self.pause()
    }

    /// One round from an empty board to a win or draw.
    fn play_round(&mut self) -> GameResult<()> {
        self.session.start_round()?;

        loop {
            self.clear()?;
            show_header(Some("Play!"), self.width(), &self.theme, &mut self.output);
            BoardPresenter::show(
                self.session.engine().board(),
                self.show_guide,
                &self.theme,
                &mut self.output,
            );
            if let Some(player) = self.session.current_player() {
                RoundPresenter::show_turn(player, &self.theme, &mut self.output);
            }

            if let GameState::Finished(outcome) = self.take_turn()? {
                debug!(?outcome, "round finished");
                return Ok(());
            }
        }
    }

    /// Ask for a position until one is accepted.
    fn take_turn(&mut self) -> GameResult<GameState> {
        loop {
            let line = self.input.read_line(MOVE_PROMPT)?;
            let result = parse_position_id(&line).and_then(|id| self.session.submit_move(id));
            match result {
                Ok(state) => return Ok(state),
                Err(err) if err.is_recoverable() => {
                    RoundPresenter::show_rejected(
                        &err,
                        self.session.engine().board(),
                        &self.theme,
                        &mut self.output,
                    );
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn ask_yes_no(&mut self, question: &str) -> GameResult<bool> {
        let mut prompt = self.theme.paint(&format!("{} (y/n)", question), Role::Prompt);
        loop {
            let answer = self.input.read_line(&prompt)?;
            if let Some(yes) = parse_yes_no(&answer) {
                return Ok(yes);
            }
            prompt = self.theme.paint(YES_NO_RETRY, Role::Caution);
        }
    }

    fn pause(&mut self) -> GameResult<()> {
        let prompt = self.theme.paint("\nPress Enter to continue!", Role::Emphasis);
        self.input.read_line(&prompt)?;
        Ok(())
    }

    fn clear(&mut self) -> GameResult<()> {
        if self.settings.clear_screen {
            self.output.clear()?;
        }
        Ok(())
    }

    fn width(&self) -> usize {
        self.settings.header_width
    }
}

/// `y` or `n`, ignoring case and surrounding whitespace.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}
