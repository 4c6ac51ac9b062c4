//! Line-based console front end: prompts on a writer, answers from a reader.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::config::GameConfig;
use crate::error::{PlacementError, SessionError};
use crate::game::{GameSession, MoveOutcome, Outcome, MAX_WIN_LENGTH, MIN_WIN_LENGTH};

use super::text::render_grid;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    #[cfg(test)]
    fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Ask for the game settings, then play one game to the end.
    pub fn run(&mut self, defaults: &GameConfig) -> io::Result<Outcome> {
        let config = self.setup(defaults)?;
        let mut session = GameSession::new(
            config.player_one.as_str(),
            config.player_two.as_str(),
            config.win_length,
        )
        .map_err(io::Error::other)?;

        self.welcome(&session)?;
        self.play(&mut session)
    }

    /// Prompt for both names and the win length. An empty answer keeps the
    /// value from `defaults`.
    pub fn setup(&mut self, defaults: &GameConfig) -> io::Result<GameConfig> {
        let player_one = self.ask_name("one(X)", &defaults.player_one)?;
        let player_two = self.ask_name("two(O)", &defaults.player_two)?;

        let win_length = loop {
            let answer = self.prompt(&format!(
                "Enter a number {MIN_WIN_LENGTH}-{MAX_WIN_LENGTH} indicating how many pieces in a row it takes to win [{}]: ",
                defaults.win_length
            ))?;
            if answer.is_empty() {
                break defaults.win_length;
            }
            match answer.parse::<usize>() {
                Ok(n) if (MIN_WIN_LENGTH..=MAX_WIN_LENGTH).contains(&n) => break n,
                _ => writeln!(
                    self.output,
                    "Please enter a value between {MIN_WIN_LENGTH} and {MAX_WIN_LENGTH}"
                )?,
            }
        };

        Ok(GameConfig {
            win_length,
            player_one,
            player_two,
        })
    }

    /// Take turns until the game is won or drawn.
    pub fn play(&mut self, session: &mut GameSession) -> io::Result<Outcome> {
        while !session.is_over() {
            let name = session.current_player().name().to_string();
            let answer = self.prompt(&format!(
                "{name}, which column do you want to place your piece: "
            ))?;
            writeln!(self.output)?;

            let Ok(column) = answer.parse::<isize>() else {
                debug!(input = %answer, "unparseable column");
                writeln!(self.output, "Invalid column! Try again.")?;
                continue;
            };

            match session.apply_move(column) {
                Ok(result) => {
                    self.output.write_all(render_grid(session.board()).as_bytes())?;
                    match result {
                        MoveOutcome::Continue => {}
                        MoveOutcome::Win(player) => {
                            writeln!(self.output, "{} wins!!!", player.name())?;
                        }
                        MoveOutcome::Draw => {
                            writeln!(self.output, "Game Over. It's a draw.")?;
                        }
                    }
                }
                Err(err) if !err.is_recoverable() => return Err(io::Error::other(err)),
                Err(SessionError::Placement(PlacementError::ColumnFull { .. })) => {
                    writeln!(self.output, "Column is full! Try again.")?;
                }
                Err(_) => writeln!(self.output, "Invalid column! Try again.")?,
            }
        }

        self.output.flush()?;
        Ok(session.outcome().clone())
    }

    fn welcome(&mut self, session: &GameSession) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Welcome to Connect four! Each user will go back and forth entering the number of the column they want to place their piece in."
        )?;
        writeln!(
            self.output,
            "Once one player gets {} pieces in a row, they win!",
            session.board().win_length()
        )?;
        writeln!(self.output, "This is your empty, starting board:\n")?;
        self.output.write_all(render_grid(session.board()).as_bytes())
    }

    fn ask_name(&mut self, seat: &str, default: &str) -> io::Result<String> {
        let answer = self.prompt(&format!("Enter name for player {seat} [{default}]: "))?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    /// Print `text` without a newline and read one trimmed line back.
    fn prompt(&mut self, text: &str) -> io::Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the game finished",
            ));
        }
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_inner().1).unwrap()
    }

    #[test]
    fn test_setup_reads_answers() {
        let mut c = console("Ada\nBob\n5\n");
        let config = c.setup(&GameConfig::default()).unwrap();
        assert_eq!(
            config,
            GameConfig {
                win_length: 5,
                player_one: "Ada".into(),
                player_two: "Bob".into(),
            }
        );
        let out = output_of(c);
        assert!(out.contains("Enter name for player one(X) [Player 1]: "));
        assert!(out.contains("Enter name for player two(O) [Player 2]: "));
    }

    #[test]
    fn test_setup_blank_answers_keep_defaults() {
        let mut c = console("\n\n\n");
        let config = c.setup(&GameConfig::default()).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_setup_reasks_bad_win_length() {
        let mut c = console("Ada\nBob\n2\nmany\n17\n99999999999999999999\n3\n");
        let config = c.setup(&GameConfig::default()).unwrap();
        assert_eq!(config.win_length, 3);
        let out = output_of(c);
        assert!(out.contains("Enter a number 3-16 indicating"));
        assert_eq!(out.matches("Please enter a value between 3 and 16").count(), 4);
    }

    #[test]
    fn test_full_game_vertical_win() {
        // Ada stacks column 0, Bob stacks column 1
        let mut c = console("Ada\nBob\n3\n0\n1\n0\n1\n0\n");
        let outcome = c.run(&GameConfig::default()).unwrap();

        match outcome {
            Outcome::Win(player) => assert_eq!(player.name(), "Ada"),
            other => panic!("expected a win, got {other:?}"),
        }
        let out = output_of(c);
        assert!(out.contains("Once one player gets 3 pieces in a row, they win!"));
        assert!(out.contains("Ada, which column do you want to place your piece: "));
        assert!(out.ends_with("Ada wins!!!\n"));
    }

    #[test]
    fn test_bad_columns_reprompt_same_player() {
        let mut session = GameSession::new("Ada", "Bob", 3).unwrap();
        for _ in 0..6 {
            session.apply_move(2).unwrap();
        }
        // Ada to move: garbage, too large, negative, full, then she completes
        // the bottom row next to her piece in column 2
        let mut c = console("x\n6\n-1\n2\n0\n0\n1\n");
        c.play(&mut session).unwrap();

        let out = output_of(c);
        assert_eq!(out.matches("Invalid column! Try again.").count(), 3);
        assert_eq!(out.matches("Column is full! Try again.").count(), 1);
        assert_eq!(
            out.matches("Ada, which column do you want to place your piece: ")
                .count(),
            6
        );
        assert!(out.ends_with("Ada wins!!!\n"));
    }

    #[test]
    fn test_draw_message() {
        let mut session = GameSession::new("Ada", "Bob", 3).unwrap();
        let mut moves = Vec::new();
        for pair in [(0, 1), (3, 2), (4, 5)] {
            for _ in 0..3 {
                moves.extend([pair.0, pair.1, pair.1, pair.0]);
            }
        }
        let input: String = moves.iter().map(|m| format!("{m}\n")).collect();

        let mut c = console(&input);
        assert_eq!(c.play(&mut session).unwrap(), Outcome::Draw);
        assert!(output_of(c).ends_with("Game Over. It's a draw.\n"));
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut c = console("Ada\nBob\n3\n0\n");
        let err = c.run(&GameConfig::default()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_play_on_finished_session_returns_outcome() {
        let mut session = GameSession::new("Ada", "Bob", 3).unwrap();
        for col in [0, 5, 1, 5, 2] {
            session.apply_move(col).unwrap();
        }
        assert!(session.is_over());

        let mut c = console("");
        let outcome = c.play(&mut session).unwrap();
        assert_eq!(outcome, session.outcome().clone());
    }
}
