use grid_util::point::Point;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PathError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("no path from {start} to {target} within the movement budget")]
    NotReachable { start: Point, target: Point },
    #[error("start {start} lies outside the {width}x{height} grid")]
    StartOutOfBounds {
        start: Point,
        width: usize,
        height: usize,
    },
    #[error("map is {found_width}x{found_height} but the search grid is {width}x{height}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        found_width: usize,
        found_height: usize,
    },
    #[error("unexpected tile {ch:?} at line {line}, column {column}")]
    InvalidTile { line: usize, column: usize, ch: char },
    #[error("line {line} is {found} tiles wide, expected {expected}")]
    RaggedMap {
        line: usize,
        expected: usize,
        found: usize,
    },
}
