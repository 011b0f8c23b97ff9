use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use log::info;

use crate::board::{Board, Color, Square};
use crate::movegen::{self, Move};
use crate::search::Bot;

pub struct Game {
    board: Board,
    turn: Color,
    bot: Option<Bot>,
}

impl Game {
    pub fn new(bot: Option<Bot>) -> Self {
        Self {
            board: Board::new(),
            turn: Color::White,
            bot,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut reader = stdin.lock();

        loop {
            println!("{}", self.board);
            println!("{} to move", self.turn);

            if movegen::in_check(&self.board, self.turn) {
                println!("{} is in check!", self.turn);
                if movegen::is_checkmate(&self.board, self.turn) {
                    println!("Checkmate! {} loses.", self.turn);
                    break;
                }
            } else if movegen::is_stalemate(&self.board, self.turn) {
                println!("Stalemate! The game is a draw.");
                break;
            }

            let mv = match &mut self.bot {
                Some(bot) if bot.color() == self.turn => {
                    println!("Bot is thinking...");
                    let Some(mv) = bot.choose_move(&self.board) else {
                        println!("The bot has no legal move.");
                        break;
                    };
                    println!("Bot plays {} {}", mv.from, mv.to);
                    mv
                }
                _ => match prompt_move(&mut reader)? {
                    Some(mv) => mv,
                    None => break,
                },
            };

            if self.board.apply_move(mv.from, mv.to) {
                info!("{} played {} {}", self.turn, mv.from, mv.to);
                self.turn = self.turn.opposite();
            } else {
                println!("Invalid move. Try again.");
            }
        }
        Ok(())
    }
}

// Reads moves like `e2 e4` until one parses. None means end of input.
fn prompt_move(reader: &mut impl BufRead) -> Result<Option<Move>> {
    loop {
        print!("Enter your move (e.g. `e2 e4`): ");
        io::stdout().flush().context("flushing prompt")?;

        let mut line = String::new();
        let read = reader.read_line(&mut line).context("reading move input")?;
        if read == 0 {
            return Ok(None);
        }

        let mut parts = line.split_whitespace();
        let (Some(from), Some(to), None) = (parts.next(), parts.next(), parts.next()) else {
            println!("Please enter two squares, e.g. `e2 e4`.");
            continue;
        };
        match (from.parse::<Square>(), to.parse::<Square>()) {
            (Ok(from), Ok(to)) => return Ok(Some(Move::new(from, to))),
            (Err(err), _) | (_, Err(err)) => println!("Bad square: {err}"),
        }
    }
}
