use crate::game_engine::Outcome;
use crate::io::OutputWriter;
use crate::models::board::{Board, Cell};
use crate::models::constants::{LineKind, BOARD_SIZE};
use crate::models::errors::{GameError, PositionError};
use crate::models::player::{Player, PlayerId};
use crate::models::position::Position;
use crate::services::detector;
use crate::services::session::{Leader, Session};
use crate::ui::theme::{Role, Theme};

const GUIDE_GAP: usize = 20;
const CELL_WIDTH: usize = 9;

/// A `=` rule across `width` columns, with an optional centred title.
pub fn header(title: Option<&str>, width: usize) -> String {
    match title {
        None => "=".repeat(width),
        Some(title) => {
            let title = format!(" {} ", title);
            let half = width.saturating_sub(title.chars().count()) / 2;
            format!("{}{}{}", "=".repeat(half), title, "=".repeat(half))
        }
    }
}

pub fn show_header(
    title: Option<&str>,
    width: usize,
    theme: &Theme,
    output: &mut dyn OutputWriter,
) {
    output.writeln("");
    output.writeln(&theme.paint(&header(title, width), Role::Header));
    output.writeln("");
}

pub struct TitlePresenter;

impl TitlePresenter {
    pub fn show_title(theme: &Theme, output: &mut dyn OutputWriter) {
        let banner = [
            r"  _  _                 _   _          ___      ___                       ",
            r" | \| |___ _  _ __ _| |_| |_ ___   ( _ )    / __|_ _ ___ ______ ___ ___",
            r" | .` / _ \ || / _` | ' \  _(_-<   / _ \/\ | (__| '_/ _ (_-<_-</ -_|_-<",
            r" |_|\_\___/\_,_\__, |_||_\__/__/   \___/\/  \___|_| \___/__/__/\___/__/",
            r"               |___/                                                   ",
        ];
        output.writeln("");
        for line in banner {
            output.writeln(&theme.paint(line, Role::Title));
        }
    }

    pub fn show_farewell(width: usize, theme: &Theme, output: &mut dyn OutputWriter) {
        show_header(Some("See you later!"), width, theme, output);
        output.writeln("Thank you very much for playing");
    }
}

pub struct BoardPresenter;

impl BoardPresenter {
    /// Grid lines for the live board, marks in player colours.
    pub fn render(board: &Board, theme: &Theme) -> Vec<String> {
        Self::grid(|pos| match board.get(pos) {
            Cell::Empty => " ".to_string(),
            Cell::Marked(player) => theme.mark(player),
        })
    }

    /// Grid lines numbering each square with its position id.
    pub fn render_guide() -> Vec<String> {
        Self::grid(|pos| pos.id().to_string())
    }

    /// Print the board, optionally with the numbered guide beside it.
    pub fn show(
        board: &Board,
        with_guide: bool,
        theme: &Theme,
        output: &mut dyn OutputWriter,
    ) {
        let live = Self::render(board, theme);
        if !with_guide {
            for line in live {
                output.writeln(&line);
            }
            return;
        }
        let gap = " ".repeat(GUIDE_GAP);
        for (left, right) in live.iter().zip(Self::render_guide()) {
            output.writeln(&format!("{}{}{}", left, gap, right));
        }
    }

    pub fn show_rules(width: usize, theme: &Theme, output: &mut dyn OutputWriter) {
        show_header(Some("Rules"), width, theme, output);
        for line in Self::render_guide() {
            output.writeln(&line);
        }
        output.writeln("This is the board. Each square has a number from 1 to 9.");
        output.writeln(
            "On your turn, type the number of an empty square to place your mark there.",
        );
        output.writeln("Three of your marks in a row, column or diagonal wins the round.");
    }

    fn grid(label: impl Fn(Position) -> String) -> Vec<String> {
        let blank = vec![" ".repeat(CELL_WIDTH); BOARD_SIZE].join("|");
        let divider = vec!["-".repeat(CELL_WIDTH); BOARD_SIZE].join("|");
        let pad = " ".repeat(CELL_WIDTH / 2);

        let mut lines = Vec::with_capacity(BOARD_SIZE * 4 - 1);
        for row in 0..BOARD_SIZE {
            if row > 0 {
                lines.push(divider.clone());
            }
            let cells: Vec<String> = (0..BOARD_SIZE)
                .filter_map(|col| Position::new(row, col))
                .map(|pos| format!("{}{}{}", pad, label(pos), pad))
                .collect();
            lines.push(blank.clone());
            lines.push(cells.join("|"));
            lines.push(blank.clone());
        }
        lines
    }
}

pub struct RoundPresenter;

impl RoundPresenter {
    pub fn show_turn(player: &Player, theme: &Theme, output: &mut dyn OutputWriter) {
        output.writeln(&format!(
            "{} it is your go. (Enter a number between 1-9).",
            theme.paint(player.name(), Role::Player(player.id()))
        ));
    }

    /// Explain why a selector was refused so the player can try again.
    pub fn show_rejected(
        err: &GameError,
        board: &Board,
        theme: &Theme,
        output: &mut dyn OutputWriter,
    ) {
        let message = match err {
            GameError::InvalidPosition(PositionError::NotANumber(_)) => {
                "Please enter a number between 1 & 9.".to_string()
            }
            GameError::InvalidPosition(PositionError::TooBig(n)) => {
                format!("{} is too big. Choose a number between 1 & 9.", n)
            }
            GameError::InvalidPosition(PositionError::TooSmall(n)) => {
                format!("{} is too small. Choose a number between 1 & 9.", n)
            }
            GameError::OccupiedCell(pos) => {
                let mark = board
                    .get(*pos)
                    .owner()
                    .map(|owner| theme.mark(owner))
                    .unwrap_or_else(|| " ".to_string());
                format!("This space is occupied by '{}'", mark)
            }
            other => other.to_string(),
        };
        output.writeln(&theme.paint(&message, Role::Caution));
    }

    pub fn show_result(
        session: &Session,
        width: usize,
        theme: &Theme,
        output: &mut dyn OutputWriter,
    ) {
        let board = session.engine().board();
        let (title, message) = match session.engine().outcome() {
            Some(Outcome::Win(winner)) => {
                let name = session.player(winner).name();
                let how = detector::winning_line(board, winner)
                    .map(|line| format!(" Three in a {}.", LineKind::of(&line).label()))
                    .unwrap_or_default();
                ("We have a winner!", format!("Congratulations to {}!{}", name, how))
            }
            Some(Outcome::Draw) => (
                "Everyone's a winner!",
                "Congratulations to both of you!!".to_string(),
            ),
            None => return,
        };

        show_header(Some(title), width, theme, output);
        BoardPresenter::show(board, false, theme, output);
        output.writeln(&theme.paint(&message, Role::Success));
    }
}

pub struct ScoreboardPresenter;

impl ScoreboardPresenter {
    pub fn show(
        session: &Session,
        width: usize,
        theme: &Theme,
        output: &mut dyn OutputWriter,
    ) {
        show_header(Some("Scoreboard"), width, theme, output);

        for player in session.players() {
            output.writeln(&format!("{} wins: {}", player.name(), player.wins()));
        }
        output.writeln("");

        output.writeln(&theme.paint(&Self::standing(session), Role::Success));
        show_header(None, width, theme, output);
    }

    /// One-line summary of who is ahead.
    pub fn standing(session: &Session) -> String {
        match session.leader() {
            Leader::Player(id) => format!("{} is in the lead!", session.player(id).name()),
            Leader::Tie => format!(
                "{} and {} are drawing!",
                session.player(PlayerId::One).name(),
                session.player(PlayerId::Two).name()
            ),
        }
    }
}
