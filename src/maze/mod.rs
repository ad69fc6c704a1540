//! A maze solver that stores its grid in [`AVLTree`]s.
//!
//! The maze is read from text, one row per line. Every character is one of `#` (a wall),
//! a space, `s` (the start) or `f` (the finish). A path from the start to the finish
//! is searched depth first, moving down, up, right and left, and printed with `.`.
//!
//!```
//! use avl_maze::maze::Maze;
//!
//! let mut maze = Maze::parse("##f##\n#s  #\n#####").unwrap();
//! assert!(maze.solve());
//! assert_eq!(maze.to_string(), "##f##\n#s. #\n#####\n");
//!```

mod errors;
mod grid;

pub use errors::MazeError;
pub use grid::{MazePoint, MazeRow};

use std::fmt;
use std::path::Path;

use crate::avl::AVLTree;

pub const WALL: char = '#';
pub const SPACE: char = ' ';
pub const START: char = 's';
pub const FINISH: char = 'f';
/// Marks the cells on the path found.
pub const PATH: char = '.';
/// Marks cells while they are being searched.
const VISITED: char = '!';

/// The order in which the neighbours of a cell are tried: down, up, right, left.
const MOVES: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// A cell position, as `(x, y)`: column, then row.
pub type Position = (usize, usize);

/// A validated maze: exactly one start and one finish, both inside the walls.
#[derive(Debug)]
pub struct Maze {
    rows: AVLTree<MazeRow>,
    start: Position,
    finish: Position,
}

/// One step of the depth first search: a cell on the current path,
/// and the index of the next move to try from it.
struct Frame {
    position: Position,
    next_move: usize,
}

impl Maze {
    /// Reads a maze file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Maze, MazeError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("read maze file {}", path.as_ref().display());
        Maze::parse(&text)
    }

    /// Reads a maze from text, and checks that it is valid.
    pub fn parse(text: &str) -> Result<Maze, MazeError> {
        let mut rows = AVLTree::new();
        for (y, line) in text.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            rows.insert(MazeRow::parse(y, line)?)?;
        }
        log::debug!("loaded maze with {} rows", rows.len());

        let (start, finish) = Self::find_markers(&rows)?;
        let maze = Maze {
            rows,
            start,
            finish,
        };
        if !maze.is_enclosed(start) {
            return Err(MazeError::StartOutside);
        }
        if !maze.is_enclosed(finish) {
            return Err(MazeError::FinishOutside);
        }
        Ok(maze)
    }

    /// Finds the single start and the single finish.
    fn find_markers(rows: &AVLTree<MazeRow>) -> Result<(Position, Position), MazeError> {
        let mut starts = vec![];
        let mut finishes = vec![];
        for row in rows.iter() {
            for point in row.points().iter() {
                match point.value {
                    START => starts.push((point.x(), row.y())),
                    FINISH => finishes.push((point.x(), row.y())),
                    _ => {}
                }
            }
        }
        let start = match starts.as_slice() {
            [] => return Err(MazeError::MissingStart),
            [start] => *start,
            _ => return Err(MazeError::MultipleStarts),
        };
        let finish = match finishes.as_slice() {
            [] => return Err(MazeError::MissingFinish),
            [finish] => *finish,
            _ => return Err(MazeError::MultipleFinishes),
        };
        Ok((start, finish))
    }

    fn is_enclosed(&self, (x, y): Position) -> bool {
        self.rows.find(&y).map_or(false, |row| row.is_enclosed(x))
    }

    pub fn rows(&self) -> &AVLTree<MazeRow> {
        &self.rows
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn finish(&self) -> Position {
        self.finish
    }

    /// The character at a position, or [`None`] if the position is off the grid.
    pub fn cell(&self, (x, y): Position) -> Option<char> {
        self.rows.find(&y)?.get(x)
    }

    fn set_cell(&mut self, (x, y): Position, value: char) {
        if let Some(row) = self.rows.find_mut(&y) {
            row.set(x, value);
        }
    }

    fn neighbour((x, y): Position, (dx, dy): (isize, isize)) -> Option<Position> {
        Some((x.checked_add_signed(dx)?, y.checked_add_signed(dy)?))
    }

    /// Searches for a path from the start to the finish, depth first.
    ///
    /// If a path is found, every cell on it other than the start and the finish is
    /// marked with [`PATH`], and `true` is returned. Otherwise the maze is left
    /// unchanged and `false` is returned.
    pub fn solve(&mut self) -> bool {
        let mut stack = vec![Frame {
            position: self.start,
            next_move: 0,
        }];
        let mut visited = vec![];

        let found = loop {
            let Some(frame) = stack.last_mut() else {
                break false;
            };
            let Some(&step) = MOVES.get(frame.next_move) else {
                stack.pop();
                continue;
            };
            frame.next_move += 1;
            let Some(next) = Self::neighbour(frame.position, step) else {
                continue;
            };
            match self.cell(next) {
                Some(FINISH) => break true,
                Some(SPACE) => {
                    log::trace!("visiting {:?}", next);
                    self.set_cell(next, VISITED);
                    visited.push(next);
                    stack.push(Frame {
                        position: next,
                        next_move: 0,
                    });
                }
                _ => {}
            }
        };

        for position in visited {
            self.set_cell(position, SPACE);
        }
        if found {
            // the first frame is the start, which keeps its mark
            for frame in &stack[1..] {
                self.set_cell(frame.position, PATH);
            }
            log::debug!("found a path of {} steps", stack.len());
        } else {
            log::debug!("no path from {:?} to {:?}", self.start, self.finish);
        }
        found
    }
}

impl fmt::Display for Maze {
    /// Prints every row, each on its own line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SomeTree;

    #[test]
    fn parse_checks_markers() {
        assert!(matches!(
            Maze::parse("#####\n#   #\n##f##"),
            Err(MazeError::MissingStart)
        ));
        assert!(matches!(
            Maze::parse("##f##\n#s s#\n#####"),
            Err(MazeError::MultipleStarts)
        ));
        assert!(matches!(
            Maze::parse("#####\n#s  #\n#####"),
            Err(MazeError::MissingFinish)
        ));
        assert!(matches!(
            Maze::parse("#f f#\n#s  #\n#####"),
            Err(MazeError::MultipleFinishes)
        ));
    }

    #[test]
    fn parse_checks_markers_are_enclosed() {
        assert!(matches!(
            Maze::parse("##f##\ns   #\n#####"),
            Err(MazeError::StartOutside)
        ));
        assert!(matches!(
            Maze::parse("#####\n#s  #\n####f"),
            Err(MazeError::FinishOutside)
        ));
    }

    #[test]
    fn parse_accepts_windows_line_endings() {
        let maze = Maze::parse("##f##\r\n#s  #\r\n#####\r\n").unwrap();
        assert_eq!(maze.rows().len(), 3);
        assert_eq!(maze.start(), (1, 1));
        assert_eq!(maze.finish(), (2, 0));
        assert_eq!(maze.cell((4, 1)), Some(WALL));
        assert_eq!(maze.cell((5, 1)), None);
        maze.rows().assert_correctness();
    }

    #[test]
    fn solve_marks_path() {
        let mut maze = Maze::parse("##f##\n#s  #\n#####").unwrap();
        assert!(maze.solve());
        assert_eq!(maze.to_string(), "##f##\n#s. #\n#####\n");
    }

    #[test]
    fn solve_prefers_moving_down() {
        let text = "#####\n#s  #\n# # #\n#  f#\n#####";
        let mut maze = Maze::parse(text).unwrap();
        assert!(maze.solve());
        assert_eq!(maze.to_string(), "#####\n#s  #\n#.# #\n#..f#\n#####\n");
    }

    #[test]
    fn solve_clears_dead_ends() {
        let text = "#####\n#s  #\n# # #\n# #f#\n#####";
        let mut maze = Maze::parse(text).unwrap();
        assert!(maze.solve());
        let solved = maze.to_string();
        assert!(!solved.contains(VISITED));
        assert_eq!(solved, "#####\n#s..#\n# #.#\n# #f#\n#####\n");
    }

    #[test]
    fn unsolvable_maze_is_unchanged() {
        let text = "#####\n#s# #\n### #\n#  f#\n#####";
        let mut maze = Maze::parse(text).unwrap();
        assert!(!maze.solve());
        assert_eq!(maze.to_string(), format!("{}\n", text));
    }
}
