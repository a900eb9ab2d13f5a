//! Fireworks: expanding coloured rings. Esc, q or Ctrl-C quits.

use anyhow::Result;

use tui_demos::core::{seed_from_clock, FireworksConfig};
use tui_demos::engine::{run_in_terminal, CancelToken, FireworksDemo};
use tui_demos::input::quit_keys;
use tui_demos::logging;
use tui_demos::term::terminal_size;

fn main() -> Result<()> {
    logging::init_from_env()?;

    let (cols, rows) = terminal_size();
    let config = FireworksConfig::default().fit_to(cols, rows);
    let mut demo = FireworksDemo::new(config, seed_from_clock());

    run_in_terminal(&mut demo, quit_keys, CancelToken::new())?;
    Ok(())
}
