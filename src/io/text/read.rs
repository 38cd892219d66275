//! Problem reading operations.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use crate::{graph::Road, io::text::Problem};

/// Reads a problem file from `path`.
pub fn read_problem(path: &Path) -> Result<Problem> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("[io::text::read] Failed to open problem file: {}", path.display()))?;
    parse_problem(&text)
        .with_context(|| format!("[io::text::read] Failed to parse problem from {:?}", path))
}

/// Parses a problem from text.
///
/// Only the token structure is checked here. Town ranges, road lengths and
/// duplicate seeds are validated when the graph and partition are built.
pub fn parse_problem(text: &str) -> Result<Problem> {
    let mut tokens = Tokens::new(text);

    let num_towns = tokens.count("town count")?;
    let num_roads = tokens.count("road count")?;

    let roads = (0..num_roads)
        .map(|i| {
            let first = tokens.count(&format!("road {i} first town"))?;
            let second = tokens.count(&format!("road {i} second town"))?;
            let length = tokens.integer(&format!("road {i} length"))?;
            Ok(Road::new(first, second, length))
        })
        .collect::<Result<Vec<_>>>()?;

    let num_countries = tokens.count("country count")?;
    let seeds = (0..num_countries)
        .map(|i| tokens.count(&format!("seed of country {i}")))
        .collect::<Result<Vec<_>>>()?;

    tokens.finish()?;

    Ok(Problem { num_towns, roads, seeds })
}

/// Whitespace tokens with their 1-based position, for error messages.
struct Tokens<'a> {
    inner: std::iter::Enumerate<std::str::SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self { inner: text.split_whitespace().enumerate() }
    }

    fn integer(&mut self, what: &str) -> Result<i64> {
        let Some((i, token)) = self.inner.next() else {
            bail!("[io::text] Unexpected end of input, expected {what}");
        };
        token.parse::<i64>()
            .with_context(|| format!("[io::text] Token {} ({what}): expected an integer, got {token:?}", i + 1))
    }

    fn count(&mut self, what: &str) -> Result<usize> {
        let value = self.integer(what)?;
        match usize::try_from(value) {
            Ok(value) => Ok(value),
            Err(_) => bail!("[io::text] {what} must be non-negative, got {value}"),
        }
    }

    fn finish(mut self) -> Result<()> {
        if let Some((i, token)) = self.inner.next() {
            bail!("[io::text] Unexpected trailing token {} ({token:?}) after the last seed", i + 1);
        }
        Ok(())
    }
}
