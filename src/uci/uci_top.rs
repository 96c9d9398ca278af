//! UCI protocol front-end and command loop.
//!
//! Parses commands, keeps the current position, routes `go` to the engine and
//! writes protocol output. Command errors never end the loop: they are
//! reported as `info string` lines.

use std::io::{self, BufRead, Write};

use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::perft::divide;
use crate::search::board_scoring::evaluate;
use crate::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};

const UCI_ENGINE_NAME: &str = "Luna";
const UCI_ENGINE_AUTHOR: &str = "the Luna authors";

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_loop(stdin.lock(), &mut stdout)
}

/// Runs commands from `input` until `quit` or end of input.
pub fn run_loop(input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    let mut uci = UciState::new();
    for line in input.lines() {
        let should_quit = uci.handle_command(&line?, out)?;
        out.flush()?;
        if should_quit {
            break;
        }
    }
    Ok(())
}

pub struct UciState {
    game_state: GameState,
    engine: Box<dyn Engine>,
}

impl Default for UciState {
    fn default() -> Self {
        Self::new()
    }
}

impl UciState {
    pub fn new() -> Self {
        Self::with_engine(Box::new(MinimaxEngine::default()))
    }

    pub fn with_engine(engine: Box<dyn Engine>) -> Self {
        Self {
            game_state: GameState::new_game(),
            engine,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Handles one line; returns `true` on `quit`.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        let Some(cmd) = trimmed.split_whitespace().next() else {
            return Ok(false);
        };

        match cmd {
            "uci" => {
                writeln!(out, "id name {UCI_ENGINE_NAME}")?;
                writeln!(out, "id author {UCI_ENGINE_AUTHOR}")?;
                writeln!(out, "option name Depth type spin default 3 min 1 max 32")?;
                writeln!(out, "option name OwnBook type check default true")?;
                writeln!(
                    out,
                    "option name TimeStrategy type combo default adaptive var adaptive var fraction20"
                )?;
                writeln!(out, "uciok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "ucinewgame" => {
                self.game_state = GameState::new_game();
                self.engine.new_game();
            }
            "setoption" => {
                if let Err(err) = self.handle_setoption(trimmed) {
                    writeln!(out, "info string setoption error: {err}")?;
                }
            }
            "position" => {
                if let Err(err) = self.handle_position(trimmed) {
                    writeln!(out, "info string position error: {err}")?;
                }
            }
            "go" => {
                match self.handle_go(trimmed) {
                    Ok(text) => out.write_all(text.as_bytes())?,
                    Err(err) => {
                        writeln!(out, "info string go error: {err}")?;
                        writeln!(out, "bestmove 0000")?;
                    }
                }
            }
            "eval" => {
                writeln!(out, "info string eval {}", evaluate(&self.game_state))?;
            }
            "perft" => {
                match self.handle_perft(trimmed) {
                    Ok(text) => out.write_all(text.as_bytes())?,
                    Err(err) => writeln!(out, "info string perft error: {err}")?,
                }
            }
            // Search runs synchronously, so there is nothing to stop.
            "stop" => {}
            "quit" => return Ok(true),
            other => {
                writeln!(out, "info string unknown command: {other}")?;
            }
        }

        Ok(false)
    }

    fn handle_setoption(&mut self, line: &str) -> ChessResult<()> {
        let mut name_tokens = Vec::new();
        let mut value_tokens = Vec::new();
        let mut in_value = None;

        for token in line.split_whitespace().skip(1) {
            match token {
                "name" => in_value = Some(false),
                "value" => in_value = Some(true),
                _ => match in_value {
                    Some(false) => name_tokens.push(token),
                    Some(true) => value_tokens.push(token),
                    None => {}
                },
            }
        }

        if name_tokens.is_empty() {
            return Err(ChessError::InvalidCommand(line.to_owned()));
        }
        self.engine
            .set_option(&name_tokens.join(" "), &value_tokens.join(" "))
    }

    fn handle_position(&mut self, line: &str) -> ChessResult<()> {
        let mut tokens = line.split_whitespace().skip(1).peekable();

        let mut next_state = match tokens.next() {
            Some("startpos") => GameState::new_game(),
            Some("fen") => {
                let mut fen_fields = Vec::new();
                while let Some(token) = tokens.next_if(|token| *token != "moves") {
                    fen_fields.push(token);
                }
                GameState::from_fen(&fen_fields.join(" "))?
            }
            _ => return Err(ChessError::InvalidCommand(line.to_owned())),
        };

        if tokens.next_if_eq(&"moves").is_some() {
            for text in tokens {
                let mv = long_algebraic_to_move(text, &next_state)?;
                next_state.apply_move(mv);
            }
        } else if tokens.peek().is_some() {
            return Err(ChessError::InvalidCommand(line.to_owned()));
        }

        self.game_state = next_state;
        Ok(())
    }

    fn handle_go(&mut self, line: &str) -> ChessResult<String> {
        let params = parse_go_params(line)?;
        let result = self.engine.choose_move(&self.game_state, &params)?;

        let mut text = String::new();
        for info in &result.info_lines {
            text.push_str(info);
            text.push('\n');
        }
        let best = result
            .best_move
            .map_or_else(|| "0000".to_owned(), move_to_long_algebraic);
        text.push_str("bestmove ");
        text.push_str(&best);
        text.push('\n');

        Ok(text)
    }

    fn handle_perft(&self, line: &str) -> ChessResult<String> {
        let depth = line
            .split_whitespace()
            .nth(1)
            .and_then(|token| token.parse::<u8>().ok())
            .ok_or_else(|| ChessError::InvalidCommand(line.to_owned()))?;

        let split = divide(&LegalMoveGenerator, &self.game_state, depth);
        let total: u64 = if depth == 0 {
            1
        } else {
            split.iter().map(|(_, nodes)| nodes).sum()
        };

        let mut text = String::new();
        for (mv, nodes) in &split {
            text.push_str(&format!("{}: {nodes}\n", move_to_long_algebraic(*mv)));
        }
        text.push_str(&format!("Nodes searched: {total}\n"));

        Ok(text)
    }
}

fn parse_go_params(line: &str) -> ChessResult<GoParams> {
    fn value<T: std::str::FromStr>(line: &str, token: Option<&str>) -> ChessResult<T> {
        token
            .and_then(|text| text.parse::<T>().ok())
            .ok_or_else(|| ChessError::InvalidCommand(line.to_owned()))
    }

    let mut params = GoParams::default();
    let mut tokens = line.split_whitespace().skip(1);
    while let Some(token) = tokens.next() {
        match token {
            "depth" => params.depth = Some(value(line, tokens.next())?),
            "movetime" => params.movetime_ms = Some(value(line, tokens.next())?),
            "wtime" => params.wtime_ms = Some(value(line, tokens.next())?),
            "btime" => params.btime_ms = Some(value(line, tokens.next())?),
            "winc" => params.winc_ms = Some(value(line, tokens.next())?),
            "binc" => params.binc_ms = Some(value(line, tokens.next())?),
            "movestogo" => params.movestogo = Some(value(line, tokens.next())?),
            // Searches always run to their limits.
            "infinite" | "ponder" => {}
            _ => return Err(ChessError::InvalidCommand(line.to_owned())),
        }
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;

    fn run(commands: &str) -> String {
        let mut out = Vec::new();
        run_loop(commands.as_bytes(), &mut out).expect("loop should not fail on a Vec");
        String::from_utf8(out).expect("output is UTF-8")
    }

    #[test]
    fn handshake_lists_options() {
        let output = run("uci\nisready\nquit\n");
        assert!(output.starts_with("id name Luna\n"));
        assert!(output.contains("option name Depth type spin"));
        assert!(output.contains("uciok\nreadyok\n"));
    }

    #[test]
    fn quit_stops_reading() {
        let output = run("quit\nisready\n");
        assert!(output.is_empty());
    }

    #[test]
    fn position_startpos_with_moves_updates_state() {
        let mut state = UciState::new();
        state
            .handle_position("position startpos moves e2e4 e7e5 g1f3")
            .expect("position command should parse");
        assert_eq!(state.game_state().side_to_move, Color::Black);
        assert_eq!(
            state.game_state().get_fen(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
        );
    }

    #[test]
    fn position_fen_without_moves_updates_state() {
        let mut state = UciState::new();
        state
            .handle_position("position fen 8/8/8/8/8/8/4P3/4K2k w - - 0 1")
            .expect("position fen should parse");
        assert_eq!(state.game_state().get_fen(), "8/8/8/8/8/8/4P3/4K2k w - - 0 1");
    }

    #[test]
    fn illegal_move_keeps_previous_position() {
        let mut state = UciState::new();
        let err = state
            .handle_position("position startpos moves e2e4 e2e4")
            .expect_err("second e2e4 is illegal");
        assert!(matches!(err, ChessError::IllegalMove { .. }));
        assert_eq!(*state.game_state(), GameState::new_game());
    }

    #[test]
    fn go_with_depth_prints_info_and_bestmove() {
        let output = run("position fen 6k1/5ppp/8/8/8/8/8/3R2K1 w - - 0 1\ngo depth 2\n");
        assert!(output.contains("info depth 2 score mate 1 "));
        assert!(output.ends_with("bestmove d1d8\n"));
    }

    #[test]
    fn go_from_start_uses_the_opening_moves() {
        let output = run("go\n");
        let best = output
            .lines()
            .find_map(|line| line.strip_prefix("bestmove "))
            .expect("bestmove line");
        assert!(["d2d4", "e2e4", "c2c4", "g1f3"].contains(&best));
    }

    #[test]
    fn go_without_legal_moves_prints_null_move() {
        let output = run("position fen 7k/5Q2/6K1/8/8/8/8/8 b - - 0 1\ngo depth 2\n");
        assert!(output.ends_with("bestmove 0000\n"));
    }

    #[test]
    fn malformed_go_reports_error_and_null_move() {
        let output = run("go depth many\n");
        assert!(output.starts_with("info string go error: invalid command"));
        assert!(output.ends_with("bestmove 0000\n"));
    }

    #[test]
    fn setoption_errors_are_reported_without_stopping() {
        let output = run("setoption name Depth value 0\nsetoption name OwnBook value false\nisready\n");
        assert!(output.starts_with("info string setoption error: invalid option Depth"));
        assert!(output.ends_with("readyok\n"));
    }

    #[test]
    fn disabled_book_searches_from_the_start() {
        let output = run("setoption name OwnBook value false\nsetoption name Depth value 1\ngo\n");
        assert!(output.starts_with("info depth 1 score cp "));
        assert!(output.lines().any(|line| line.starts_with("bestmove ")));
    }

    #[test]
    fn parse_go_params_keeps_clock_fields() {
        let params = parse_go_params("go wtime 120000 btime 60000 winc 1000 binc 1000 movestogo 24")
            .expect("go params should parse");
        assert_eq!(params.movetime_ms, None);
        assert_eq!(params.wtime_ms, Some(120_000));
        assert_eq!(params.btime_ms, Some(60_000));
        assert_eq!(params.winc_ms, Some(1_000));
        assert_eq!(params.binc_ms, Some(1_000));
        assert_eq!(params.movestogo, Some(24));
    }

    #[test]
    fn perft_prints_divide_and_total() {
        let output = run("position startpos\nperft 2\n");
        assert!(output.contains("e2e4: 20\n"));
        assert_eq!(output.lines().count(), 21);
        assert!(output.ends_with("Nodes searched: 400\n"));
    }

    #[test]
    fn eval_and_unknown_commands_answer_with_info_strings() {
        let output = run("eval\nfrobnicate\n");
        assert_eq!(
            output,
            "info string eval 0\ninfo string unknown command: frobnicate\n"
        );
    }

    #[test]
    fn ucinewgame_resets_the_position() {
        let mut state = UciState::new();
        let mut sink = Vec::new();
        state
            .handle_command("position startpos moves d2d4", &mut sink)
            .expect("write to Vec");
        state.handle_command("ucinewgame", &mut sink).expect("write to Vec");
        assert_eq!(*state.game_state(), GameState::new_game());
        assert!(sink.is_empty());
    }
}
