//! Matrix rain: a scrolling stream of green glyphs. Esc, q or Ctrl-C quits.

use anyhow::Result;

use tui_demos::core::{seed_from_clock, RainConfig};
use tui_demos::engine::{run_in_terminal, CancelToken, RainDemo};
use tui_demos::input::quit_keys;
use tui_demos::logging;
use tui_demos::term::terminal_size;

fn main() -> Result<()> {
    logging::init_from_env()?;

    let (cols, _) = terminal_size();
    let config = RainConfig::default().fit_to(cols);
    let mut demo = RainDemo::new(config, seed_from_clock());

    run_in_terminal(&mut demo, quit_keys, CancelToken::new())?;
    Ok(())
}
