//! Board interpretation tests over complete board files.

mod fixtures;

use fixtures::*;
use lazor_board::models::{BlockKind, Cell, LatticeToken, Point};
use lazor_board::parser::{interpret, BoardInterpreter};
use lazor_board::services::{BoardService, LoadOptions};
use lazor_board::BoardError;

fn assert_lattice_shape(content: &str) {
    let board = interpret(&lines_of(content)).unwrap();
    let layout = &board.layout;
    let lattice = &board.lattice;

    assert_eq!(lattice.height(), 2 * layout.height() + 1);
    for row in lattice.rows() {
        assert_eq!(row.len(), 2 * layout.width() + 1);
    }

    let markers: Vec<Point> = board
        .lasers
        .iter()
        .map(|l| l.origin())
        .chain(board.points.iter().copied())
        .collect();

    for i in 0..layout.height() {
        for j in 0..layout.width() {
            let at = Point::new(2 * j as i64 + 1, 2 * i as i64 + 1);
            if markers.contains(&at) {
                continue;
            }
            assert_eq!(
                lattice[2 * i + 1][2 * j + 1],
                LatticeToken::Cell(layout[i][j]),
                "cell center ({i}, {j}) should carry its layout token"
            );
        }
    }
}

#[test]
fn test_lattice_shape_for_all_fixtures() {
    for content in [MAD_1, DARK_1, TINY_5, SCENARIO] {
        assert_lattice_shape(content);
    }
}

#[test]
fn test_scenario() {
    let board = interpret(&lines_of(SCENARIO)).unwrap();
    let (layout, blocks, lasers, points, lattice) = board.into_parts();

    assert_eq!(layout.to_token_rows(), vec![vec!["o", "o"], vec!["o", "o"]]);
    assert_eq!(
        blocks.iter().map(ToString::to_string).collect::<Vec<_>>(),
        vec!["A02"]
    );
    assert_eq!(lasers[0].as_array(), [1, 0, 0, 1]);
    assert_eq!(points, vec![Point::new(0, 2)]);

    assert_eq!(lattice.height(), 5);
    assert_eq!(lattice.width(), 5);
    assert_eq!(lattice[1][1].to_string(), "o");
    assert_eq!(lattice[1][3].to_string(), "o");
    assert_eq!(lattice[3][1].to_string(), "o");
    assert_eq!(lattice[3][3].to_string(), "o");
    assert_eq!(lattice[0][1].to_string(), "L");
    assert_eq!(lattice[2][0].to_string(), "P");
}

#[test]
fn test_mad_1() {
    let board = interpret(&lines_of(MAD_1)).unwrap();

    assert_eq!(board.layout.height(), 4);
    assert_eq!(board.block_texts(), vec!["A2", "C1"]);
    assert_eq!(board.total_blocks(), 3);
    assert_eq!(board.lasers.len(), 1);
    assert_eq!(board.points.len(), 4);
    assert_eq!(board.lattice.get(Point::new(2, 7)), Some(LatticeToken::Laser));
    assert_eq!(board.lattice.get(Point::new(4, 3)), Some(LatticeToken::Point));
}

#[test]
fn test_dark_1_blocked_cells() {
    let board = interpret(&lines_of(DARK_1)).unwrap();

    assert_eq!(board.layout[0][0], Cell::new('x'));
    assert_eq!(board.layout[2][2], Cell::new('x'));
    assert_eq!(board.lattice[1][1], LatticeToken::Cell(Cell::new('x')));
    assert_eq!(board.lasers.len(), 4);
    assert_eq!(board.blocks[0].kind, BlockKind::Opaque);
    assert_eq!(board.blocks[0].count, 3);
}

#[test]
fn test_tiny_5_fixed_block() {
    let board = interpret(&lines_of(TINY_5)).unwrap();

    assert_eq!(board.layout[0][1], Cell::new('B'));
    assert_eq!(board.fixed_blocks(), vec![BlockKind::Opaque]);
    assert_eq!(board.block_texts(), vec!["A3", "C1"]);
}

#[test]
fn test_block_line_repeating_a_grid_row_is_excluded() {
    let content = "\
GRID START
o o
B 1
GRID STOP

B 1
A 2
";
    let board = interpret(&lines_of(content)).unwrap();

    assert_eq!(board.layout.to_token_rows()[1], ["B", "1"]);
    assert_eq!(board.block_texts(), vec!["A2"]);
    assert_eq!(board.fixed_blocks(), vec![BlockKind::Opaque]);
}

#[test]
fn test_layout_tokens_are_kept_as_written() {
    let content = "GRID START\nX O\no D\nGRID STOP\n";
    let board = interpret(&lines_of(content)).unwrap();

    assert_eq!(
        board.layout.to_token_rows(),
        vec![vec!["X", "O"], vec!["o", "D"]]
    );
    assert!(board.fixed_blocks().is_empty());
}

#[test]
fn test_interpret_is_idempotent() {
    let lines = lines_of(DARK_1);
    assert_eq!(interpret(&lines).unwrap(), interpret(&lines).unwrap());
}

#[test]
fn test_case_insensitive_keywords() {
    let content = "grid start\no o\nGrid Stop\na 1\nl 1 0 1 1\np 3 2\n";
    let board = interpret(&lines_of(content)).unwrap();

    assert_eq!(board.block_texts(), vec!["a1"]);
    assert_eq!(board.lasers.len(), 1);
    assert_eq!(board.points, vec![Point::new(3, 2)]);
}

#[test]
fn test_ragged_grid_file() {
    let content = "GRID START\no o o\no o\nGRID STOP\n";
    assert!(matches!(
        interpret(&lines_of(content)),
        Err(BoardError::MalformedGrid { .. })
    ));
}

#[test]
fn test_missing_grid_stop_file() {
    let content = "GRID START\no o\no o\nA 2\nL 1 0 1 1\n";
    assert!(matches!(
        interpret(&lines_of(content)),
        Err(BoardError::MalformedGrid { .. })
    ));
}

#[test]
fn test_strict_mode_over_file() {
    let content = format!("{MAD_1}\nS 4\n");
    let lines = lines_of(&content);

    assert!(interpret(&lines).is_ok());
    assert!(matches!(
        BoardInterpreter::new().strict(true).interpret(&lines, None),
        Err(BoardError::UnrecognizedLine { .. })
    ));
}

#[test]
fn test_service_reads_file_without_extension() {
    let (board_path, _temp_dir) = create_temp_board(TINY_5);
    let name = board_path.with_extension("");

    let board = BoardService::load(&name, &LoadOptions::default(), None).unwrap();
    assert_eq!(board.layout.width(), 3);
}
