use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{SeedableRng, rngs::SmallRng};
use sweeper_core::{Coord, CellCount, GamePhase, Session};

use crate::command::Command;
use crate::config::ConfigOverrides;

mod command;
mod config;
mod render;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with `rows`, `cols` and `bombs`
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    rows: Option<Coord>,

    #[arg(long)]
    cols: Option<Coord>,

    #[arg(long)]
    bombs: Option<CellCount>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let overrides = ConfigOverrides {
        rows: args.rows,
        cols: args.cols,
        bombs: args.bombs,
    };
    let config = config::resolve(args.config.as_deref(), overrides)?;
    log::debug!("seed: {:?}, config: {:?}", args.seed, config);

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let mut session = Session::new(config).context("Could not start session")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", render::SessionView(&session))?;
    writeln!(stdout, "{}", command::HELP)?;

    for line in stdin.lock().lines() {
        let line = line.context("Could not read command")?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(stdout, "{err}")?;
                continue;
            }
        };

        let action = match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(stdout, "{}", command::HELP)?;
                continue;
            }
            Command::Play(action) => action,
        };

        let before = session.phase();
        match session.apply(action, &mut rng) {
            Ok(next) => session = next,
            Err(err) => {
                writeln!(stdout, "{err}")?;
                continue;
            }
        }

        write!(stdout, "{}", render::SessionView(&session))?;
        if before != session.phase() {
            match session.phase() {
                GamePhase::Won => writeln!(stdout, "Cleared! `n` for a new game.")?,
                GamePhase::Lost => writeln!(stdout, "Boom. `n` for a new game.")?,
                _ => {}
            }
        }
    }

    Ok(())
}
