use anyhow::bail;

use woodpusher::board::Color;
use woodpusher::game::Game;
use woodpusher::search::{Bot, SearchStrategy};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mode = std::env::args().nth(1).unwrap_or_else(|| "bot".to_string());
    let bot = match mode.as_str() {
        "pvp" => None,
        "bot" => Some(Bot::new(Color::Black, 4, SearchStrategy::AlphaBeta)),
        "bot-minimax" => Some(Bot::new(Color::Black, 3, SearchStrategy::Minimax)),
        other => bail!("unknown mode `{other}` (expected `pvp`, `bot` or `bot-minimax`)"),
    };

    Game::new(bot).run()
}
