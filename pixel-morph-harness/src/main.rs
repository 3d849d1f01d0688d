use std::env;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::info;
use ratatui::backend::CrosstermBackend;

use pixel_morph::animate::{self, MorphConfig};
use pixel_morph::loader;
use pixel_morph::plan::MorphPlan;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let source_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("imgs/source.jpg"));
    let target_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("imgs/target.jpg"));

    let config = MorphConfig::default();

    // Everything fallible happens before the terminal is touched, so a bad
    // input aborts the run with no partial animation.
    let source = loader::load(&source_path, config.grid)
        .with_context(|| format!("loading source image {}", source_path.display()))?;
    let target = loader::load(&target_path, config.grid)
        .with_context(|| format!("loading target image {}", target_path.display()))?;

    let started = Instant::now();
    let plan = MorphPlan::build(&source, &target, &config.weights)?;
    info!(
        "assignment over the {} grid solved in {:?}",
        config.grid,
        started.elapsed()
    );

    enable_raw_mode()?;
    crossterm::execute!(io::stdout(), EnterAlternateScreen, Hide)?;

    let result = run(&plan, &config);

    crossterm::execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;

    result
}

fn run(plan: &MorphPlan, config: &MorphConfig) -> Result<()> {
    let mut backend = CrosstermBackend::new(io::stdout());
    animate::play(&mut backend, plan, config)?;

    // Hold the final arrangement until the user leaves.
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => break,
                _ => continue,
            }
        }
    }

    Ok(())
}
