use anyhow::{Context, Result, anyhow, bail};
use sapper_core::{Coord, PlayerInput};

/// Parses a move script: one `reveal X Y` / `r X Y` or `flag X Y` / `f X Y` per line.
///
/// Blank lines and `#` comments are skipped. Coordinates that cannot lie on any board (negative or
/// larger than a coordinate holds) are dropped with a warning, like any other out-of-bounds move.
pub fn parse(source: &str) -> Result<Vec<PlayerInput>> {
    let mut inputs = Vec::new();
    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;
        if let Some(input) = parse_line(line).with_context(|| format!("line {line_no}"))? {
            inputs.push(input);
        }
    }
    Ok(inputs)
}

fn parse_line(line: &str) -> Result<Option<PlayerInput>> {
    let line = line.split('#').next().unwrap_or_default().trim();
    if line.is_empty() {
        return Ok(None);
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    let &[command, x, y] = parts.as_slice() else {
        bail!("expected `<command> X Y`, got {line:?}");
    };

    let make: fn((Coord, Coord)) -> PlayerInput = match command.to_lowercase().as_str() {
        "r" | "reveal" => PlayerInput::reveal,
        "f" | "flag" => PlayerInput::flag,
        other => bail!("unknown command {other:?}"),
    };

    let x = parse_coord(x)?;
    let y = parse_coord(y)?;
    match (x, y) {
        (Some(x), Some(y)) => Ok(Some(make((x, y)))),
        _ => {
            log::warn!("Dropping move outside any board: {line:?}");
            Ok(None)
        }
    }
}

fn parse_coord(value: &str) -> Result<Option<Coord>> {
    let value: i64 = value
        .parse()
        .map_err(|err| anyhow!("invalid coordinate {value:?}: {err}"))?;
    Ok(Coord::try_from(value).ok())
}
