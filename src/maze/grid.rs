//! The cells and rows of a maze, ordered by their coordinate so they can be
//! stored in an [`AVLTree`].

use std::fmt;

use super::{MazeError, FINISH, SPACE, START, WALL};
use crate::avl::AVLTree;
use crate::data::Keyed;

/// One cell of a maze. Ordered by its column only; the character shown in the
/// cell can change while the cell is in a row.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MazePoint {
    x: usize,
    pub value: char,
}

impl MazePoint {
    pub fn new(x: usize, value: char) -> MazePoint {
        MazePoint { x, value }
    }

    pub fn x(&self) -> usize {
        self.x
    }
}

impl Keyed for MazePoint {
    type Key = usize;
    fn key(&self) -> &usize {
        &self.x
    }
}

impl fmt::Display for MazePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// One line of a maze. Ordered by its row index only.
#[derive(Debug)]
pub struct MazeRow {
    y: usize,
    points: AVLTree<MazePoint>,
}

impl MazeRow {
    pub fn new(y: usize) -> MazeRow {
        MazeRow {
            y,
            points: AVLTree::new(),
        }
    }

    /// Reads the cells of row `y` from `line`. Every character must be one of
    /// `#`, space, `s` or `f`.
    pub fn parse(y: usize, line: &str) -> Result<MazeRow, MazeError> {
        let mut row = MazeRow::new(y);
        for (x, c) in line.chars().enumerate() {
            match c {
                WALL | SPACE | START | FINISH => row.points.insert(MazePoint::new(x, c))?,
                found => {
                    return Err(MazeError::InvalidCharacter {
                        row: y,
                        column: x,
                        found,
                    })
                }
            }
        }
        Ok(row)
    }

    pub fn y(&self) -> usize {
        self.y
    }

    /// The number of cells in the row.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &AVLTree<MazePoint> {
        &self.points
    }

    /// The character in column `x`, if the row is that long.
    pub fn get(&self, x: usize) -> Option<char> {
        self.points.find(&x).map(|point| point.value)
    }

    /// Changes the character in column `x`. Returns `false` if there is no such column.
    pub fn set(&mut self, x: usize, value: char) -> bool {
        match self.points.find_mut(&x) {
            Some(point) => {
                point.value = value;
                true
            }
            None => false,
        }
    }

    /// Returns `true` if there is a wall somewhere to the left of column `x`,
    /// and somewhere to its right.
    pub fn is_enclosed(&self, x: usize) -> bool {
        let wall_left = self
            .points
            .iter()
            .take_while(|point| point.x < x)
            .any(|point| point.value == WALL);
        let wall_right = self
            .points
            .iter()
            .skip_while(|point| point.x <= x)
            .any(|point| point.value == WALL);
        wall_left && wall_right
    }
}

impl Keyed for MazeRow {
    type Key = usize;
    fn key(&self) -> &usize {
        &self.y
    }
}

impl fmt::Display for MazeRow {
    /// Prints the cells in column order, without a line break.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for point in self.points.iter() {
            write!(f, "{}", point)?;
        }
        Ok(())
    }
}
