//! Board interpretation.
//!
//! Turns normalized board lines into a [`BoardModel`] in two steps:
//!
//! 1. A single forward pass classifies every line, capturing grid rows
//!    between `GRID START` and `GRID STOP` and parsing block, laser and point
//!    entries as they appear.
//! 2. Once every line is seen, the grid is validated, fixed placements are
//!    removed from the inventory, and the lattice is expanded and marked.
//!
//! Points are marked before lasers, so a laser origin sharing a coordinate
//! with a required point shows as `L`.

use crate::error::BoardError;
use crate::export::BoardSink;
use crate::models::{
    BlockEntry, BlockKind, BoardModel, Cell, Laser, LatticeToken, Lattice, LayoutGrid, Point,
};
use crate::parser::classify::{classify_line, GridMarker, LineKind};
use tracing::debug;

/// Where the forward pass is relative to the grid section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// No `GRID START` seen yet
    BeforeGrid,
    /// Between `GRID START` and `GRID STOP`
    InGrid,
    /// Past `GRID STOP`; later markers are ignored
    AfterGrid,
}

/// A block line waiting for the grid to be known.
#[derive(Debug)]
struct BlockCandidate<'a> {
    line: usize,
    text: &'a str,
    kind: BlockKind,
    tokens: Vec<&'a str>,
}

/// Output of the classification pass.
#[derive(Debug, Default)]
struct Sections<'a> {
    grid_rows: Vec<(usize, Vec<&'a str>)>,
    blocks: Vec<BlockCandidate<'a>>,
    lasers: Vec<(usize, Laser)>,
    points: Vec<(usize, Point)>,
}

/// Configurable board interpreter.
///
/// ```
/// use lazor_board::parser::BoardInterpreter;
///
/// let lines = ["GRID START", "o o", "GRID STOP", "A 2", "L 0 1 1 -1", "P 2 1"];
/// let board = BoardInterpreter::new().interpret(&lines, None).unwrap();
/// assert_eq!(board.lattice.height(), 3);
/// assert_eq!(board.block_texts(), vec!["A2"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardInterpreter {
    strict: bool,
}

impl BoardInterpreter {
    /// Creates a permissive interpreter.
    #[must_use]
    pub const fn new() -> Self {
        Self { strict: false }
    }

    /// In strict mode a line that matches no known shape is an error instead
    /// of being skipped.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Interprets normalized lines.
    ///
    /// When `sink` is given it receives the finished board; it cannot change
    /// what is returned.
    pub fn interpret<S: AsRef<str>>(
        &self,
        lines: &[S],
        sink: Option<&mut dyn BoardSink>,
    ) -> Result<BoardModel, BoardError> {
        let sections = self.classify(lines)?;
        let board = build_board(sections)?;

        debug!(
            rows = board.layout.height(),
            cols = board.layout.width(),
            blocks = board.blocks.len(),
            lasers = board.lasers.len(),
            points = board.points.len(),
            "interpreted board"
        );

        if let Some(sink) = sink {
            sink.report(&board);
        }

        Ok(board)
    }

    fn classify<'a, S: AsRef<str>>(&self, lines: &'a [S]) -> Result<Sections<'a>, BoardError> {
        let mut state = ParseState::BeforeGrid;
        let mut sections = Sections::default();

        for (idx, raw) in lines.iter().enumerate() {
            let text = raw.as_ref();
            let line = idx + 1;

            match classify_line(text, state == ParseState::InGrid) {
                LineKind::GridMarker(GridMarker::Start) => {
                    if state == ParseState::BeforeGrid {
                        state = ParseState::InGrid;
                    } else {
                        debug!(line, "ignoring extra GRID START");
                    }
                }
                LineKind::GridMarker(GridMarker::Stop) => {
                    if state == ParseState::InGrid {
                        state = ParseState::AfterGrid;
                    } else {
                        debug!(line, "ignoring GRID STOP outside the grid section");
                    }
                }
                LineKind::GridRow(tokens) => sections.grid_rows.push((line, tokens)),
                LineKind::BlockEntry { kind, tokens } => {
                    sections.blocks.push(BlockCandidate {
                        line,
                        text,
                        kind,
                        tokens,
                    });
                }
                LineKind::Laser(args) => {
                    let [x, y, dx, dy] = parse_integers(line, text, &args)?;
                    let laser = Laser::try_new(x, y, dx, dy)
                        .map_err(|reason| BoardError::malformed_entry(line, text, reason))?;
                    sections.lasers.push((line, laser));
                }
                LineKind::Point(args) => {
                    let [x, y] = parse_integers(line, text, &args)?;
                    sections.points.push((line, Point::new(x, y)));
                }
                LineKind::Unrecognized => {
                    if self.strict {
                        return Err(BoardError::UnrecognizedLine {
                            line,
                            text: text.to_string(),
                        });
                    }
                    debug!(line, text, "skipping unrecognized line");
                }
            }
        }

        match state {
            ParseState::BeforeGrid => Err(BoardError::malformed_grid("no GRID START marker found")),
            ParseState::InGrid => Err(BoardError::malformed_grid(
                "GRID START has no matching GRID STOP",
            )),
            ParseState::AfterGrid => Ok(sections),
        }
    }
}

/// Interprets normalized lines with the default (permissive) settings.
pub fn interpret<S: AsRef<str>>(lines: &[S]) -> Result<BoardModel, BoardError> {
    BoardInterpreter::new().interpret(lines, None)
}

/// Interprets normalized lines and hands the result to `sink`.
pub fn interpret_verbose<S: AsRef<str>>(
    lines: &[S],
    sink: &mut dyn BoardSink,
) -> Result<BoardModel, BoardError> {
    BoardInterpreter::new().interpret(lines, Some(sink))
}

fn build_board(sections: Sections<'_>) -> Result<BoardModel, BoardError> {
    let layout = build_layout(&sections.grid_rows)?;
    let blocks = build_inventory(&layout, &sections.blocks)?;
    let lattice = build_lattice(&layout, &sections.points, &sections.lasers)?;

    Ok(BoardModel {
        layout,
        blocks,
        lasers: sections.lasers.into_iter().map(|(_, laser)| laser).collect(),
        points: sections.points.into_iter().map(|(_, point)| point).collect(),
        lattice,
    })
}

fn build_layout(grid_rows: &[(usize, Vec<&str>)]) -> Result<LayoutGrid, BoardError> {
    let mut rows = Vec::with_capacity(grid_rows.len());

    for (line, tokens) in grid_rows {
        let row = tokens
            .iter()
            .map(|token| token.parse::<Cell>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|reason| BoardError::malformed_grid(format!("{reason} on line {line}")))?;
        rows.push(row);
    }

    LayoutGrid::new(rows)
}

/// Keeps block lines that are real inventory, dropping any whose tokens
/// spell out a grid row (those blocks are already placed).
fn build_inventory(
    layout: &LayoutGrid,
    candidates: &[BlockCandidate<'_>],
) -> Result<Vec<BlockEntry>, BoardError> {
    let mut blocks = Vec::new();

    for candidate in candidates {
        if layout.has_row_matching(&candidate.tokens) {
            debug!(line = candidate.line, "block line matches a grid row; not inventory");
            continue;
        }

        if candidate.tokens.len() > 3 {
            return Err(BoardError::malformed_entry(
                candidate.line,
                candidate.text,
                format!(
                    "expected '<block> <count>' or '<block> <cell> <count>', found {} tokens",
                    candidate.tokens.len()
                ),
            ));
        }

        let count_token = candidate.tokens[candidate.tokens.len() - 1];
        let count = count_token.parse::<u32>().map_err(|_| {
            BoardError::malformed_entry(
                candidate.line,
                candidate.text,
                format!("block count '{count_token}' is not a non-negative integer"),
            )
        })?;

        blocks.push(BlockEntry::new(
            candidate.kind,
            count,
            candidate.tokens.concat(),
        ));
    }

    Ok(blocks)
}

fn build_lattice(
    layout: &LayoutGrid,
    points: &[(usize, Point)],
    lasers: &[(usize, Laser)],
) -> Result<Lattice, BoardError> {
    let mut lattice = Lattice::from_layout(layout);

    let markers = points
        .iter()
        .map(|(line, point)| (*line, *point, LatticeToken::Point, "point"))
        .chain(
            lasers
                .iter()
                .map(|(line, laser)| (*line, laser.origin(), LatticeToken::Laser, "laser origin")),
        );

    for (line, at, token, what) in markers {
        if token == LatticeToken::Laser && lattice.get(at) == Some(LatticeToken::Point) {
            debug!(line, x = at.x, y = at.y, "laser origin covers a required point");
        }
        if !lattice.mark(at, token) {
            return Err(BoardError::OutOfBounds {
                line,
                what,
                x: at.x,
                y: at.y,
                width: lattice.width(),
                height: lattice.height(),
            });
        }
    }

    Ok(lattice)
}

fn parse_integers<const N: usize>(
    line: usize,
    text: &str,
    args: &[&str],
) -> Result<[i64; N], BoardError> {
    if args.len() != N {
        return Err(BoardError::malformed_entry(
            line,
            text,
            format!("expected {N} integers, found {}", args.len()),
        ));
    }

    let mut values = [0_i64; N];
    for (slot, token) in values.iter_mut().zip(args) {
        *slot = token.parse().map_err(|_| {
            BoardError::malformed_entry(line, text, format!("'{token}' is not an integer"))
        })?;
    }

    Ok(values)
}
