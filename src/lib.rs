pub mod board;
pub mod evaluation;
pub mod game;
pub mod movegen;
pub mod search;
