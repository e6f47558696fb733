//! Line classification for board files.
//!
//! Each normalized line is tokenized on whitespace and matched on its token
//! shape. Keywords are case-insensitive.

use crate::models::BlockKind;

/// The two grid section markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMarker {
    /// `GRID START`
    Start,
    /// `GRID STOP`
    Stop,
}

/// What a single line of a board file is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `GRID START` or `GRID STOP`
    GridMarker(GridMarker),
    /// A row of cell tokens inside the grid section
    GridRow(Vec<&'a str>),
    /// `<A|B|C> [placeholder] <count>`; holds every token of the line
    BlockEntry {
        /// Block type named by the first token
        kind: BlockKind,
        /// All tokens including the block letter
        tokens: Vec<&'a str>,
    },
    /// `L <x> <y> <dx> <dy>`; holds the tokens after the keyword
    Laser(Vec<&'a str>),
    /// `P <x> <y>`; holds the tokens after the keyword
    Point(Vec<&'a str>),
    /// Anything else
    Unrecognized,
}

/// Classifies one normalized line.
///
/// `in_grid` tells whether the line sits inside the grid section, where
/// every line other than `GRID STOP` is a grid row.
pub fn classify_line(line: &str, in_grid: bool) -> LineKind<'_> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if let Some(marker) = grid_marker(&tokens) {
        return LineKind::GridMarker(marker);
    }

    if in_grid {
        return LineKind::GridRow(tokens);
    }

    let Some((&keyword, rest)) = tokens.split_first() else {
        return LineKind::Unrecognized;
    };

    if let Some(kind) = BlockKind::from_token(keyword) {
        if rest.first().is_some_and(|value| is_numeric(value)) {
            return LineKind::BlockEntry { kind, tokens };
        }
        return LineKind::Unrecognized;
    }

    if keyword.eq_ignore_ascii_case("l") {
        return LineKind::Laser(rest.to_vec());
    }

    if keyword.eq_ignore_ascii_case("p") {
        return LineKind::Point(rest.to_vec());
    }

    LineKind::Unrecognized
}

fn grid_marker(tokens: &[&str]) -> Option<GridMarker> {
    match tokens {
        [grid, word] if grid.eq_ignore_ascii_case("grid") => {
            if word.eq_ignore_ascii_case("start") {
                Some(GridMarker::Start)
            } else if word.eq_ignore_ascii_case("stop") {
                Some(GridMarker::Stop)
            } else {
                None
            }
        }
        _ => None,
    }
}

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}
