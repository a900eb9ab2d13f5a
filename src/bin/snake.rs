//! Snake on a wrapping board. WASD steers, Esc quits.

use anyhow::Result;

use tui_demos::core::{seed_from_clock, SnakeConfig};
use tui_demos::engine::{run_in_terminal, CancelToken, LoopExit, SnakeDemo};
use tui_demos::input::snake_keys;
use tui_demos::logging;
use tui_demos::term::terminal_size;

fn main() -> Result<()> {
    logging::init_from_env()?;

    let (cols, rows) = terminal_size();
    let config = SnakeConfig::default().fit_to(cols, rows);
    let mut demo = SnakeDemo::new(config, seed_from_clock());

    let report = run_in_terminal(&mut demo, snake_keys, CancelToken::new())?;
    if report.exit == LoopExit::Finished {
        println!("Game Over! Score: {}", demo.game().score());
    }
    Ok(())
}
