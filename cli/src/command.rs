use std::str::FromStr;

use anyhow::{Context, anyhow, bail};
use sweeper_core::{Action, Coord, Coord2};

pub const HELP: &str = "commands: r ROW COL (reveal), m ROW COL (mark), n (new game), h (help), q (quit)";

/// One line of input resolved to exactly one engine action, or a host command.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Play(Action),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(Self::Help);
        };

        let command = match verb {
            "r" | "reveal" => Self::Play(Action::Reveal(parse_coords(&mut words)?)),
            "m" | "mark" => Self::Play(Action::ToggleMark(parse_coords(&mut words)?)),
            "n" | "new" => Self::Play(Action::Reset),
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" => Self::Quit,
            other => bail!("Unknown command `{other}`, try `h`"),
        };

        if let Some(extra) = words.next() {
            bail!("Unexpected argument `{extra}`");
        }
        Ok(command)
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> anyhow::Result<Coord2> {
    let mut next = |name: &str| -> anyhow::Result<Coord> {
        let word = words.next().ok_or_else(|| anyhow!("Missing {name}"))?;
        word.parse().with_context(|| format!("Invalid {name} `{word}`"))
    };
    let row = next("row")?;
    let col = next("col")?;
    Ok((row, col))
}
