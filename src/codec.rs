//! Flat text encoding of the live population.
//!
//! The format is `x,y-x,y-...`: signed decimal pairs, comma between the
//! two coordinates, hyphen between cells, trailing hyphen tolerated.
//! Tokens that do not parse are dropped silently on decode; a decode that
//! accepts nothing at all is a format error.

use crate::error::LifeError;
use crate::grid::{Cell, LiveSet};

const CELL_SEPARATOR: char = '-';
const FIELD_SEPARATOR: char = ',';

/// Serialize the population, one `x,y-` run per cell in stable order.
pub fn encode(live: &LiveSet) -> String {
    let mut out = String::new();
    for cell in live.sorted_cells() {
        out.push_str(&cell.x.to_string());
        out.push(FIELD_SEPARATOR);
        out.push_str(&cell.y.to_string());
        out.push(CELL_SEPARATOR);
    }
    out
}

/// Parse pattern text back into cells.
///
/// Duplicates may appear in the result; the caller's set construction
/// collapses them. Never mutates caller state: on [`LifeError::Format`]
/// the current grid is to be left exactly as it was.
pub fn decode(text: &str) -> Result<Vec<Cell>, LifeError> {
    let mut cells = Vec::new();
    for token in tokens(text) {
        if let Some(cell) = parse_cell(&token) {
            cells.push(cell);
        }
    }
    if cells.is_empty() {
        return Err(LifeError::Format);
    }
    Ok(cells)
}

/// Split on the cell separator. A hyphen at the start of a token or right
/// after the field separator is a minus sign, not a separator, so
/// negative coordinates survive the split.
fn tokens(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        let sign_position = current.is_empty() || current.ends_with(FIELD_SEPARATOR);
        if ch == CELL_SEPARATOR && !sign_position {
            tokens.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// A token is accepted only as exactly two integer fields.
fn parse_cell(token: &str) -> Option<Cell> {
    let mut fields = token.split(FIELD_SEPARATOR);
    let x = fields.next()?.trim().parse().ok()?;
    let y = fields.next()?.trim().parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(Cell::new(x, y))
}
