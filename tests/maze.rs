use avl_maze::maze::*;
use avl_maze::SomeTree;
use std::io::Write;

fn solved(text: &str) -> (bool, String) {
    let mut maze = Maze::parse(text).unwrap();
    let found = maze.solve();
    (found, maze.to_string())
}

#[test]
fn small_maze() {
    assert_eq!(
        solved("##f##\n#s  #\n#####"),
        (true, "##f##\n#s. #\n#####\n".to_string())
    );
}

#[test]
fn winding_maze() {
    let text = "\
#########
#s#     #
# # ### #
#   #f  #
#########";
    let expected = "\
#########
#s#.....#
#.#.###.#
#...#f..#
#########
";
    assert_eq!(solved(text), (true, expected.to_string()));
}

#[test]
fn finish_next_to_start() {
    assert_eq!(solved("####\n#sf#\n####"), (true, "####\n#sf#\n####\n".to_string()));
}

#[test]
fn no_path() {
    let text = "#####\n#s#f#\n#####";
    assert_eq!(solved(text), (false, format!("{}\n", text)));
}

#[test]
fn rows_are_trees() {
    let maze = Maze::parse("#####\n#s  #\n#  f#\n#####").unwrap();
    assert_eq!(maze.rows().size(), 4);
    maze.rows().assert_correctness();
    let row = maze.rows().find(&2).unwrap();
    assert_eq!(row.len(), 5);
    assert_eq!(row.points().find(&3), Some(&MazePoint::new(3, FINISH)));
    row.points().assert_balanced();
}

#[test]
fn invalid_mazes() {
    let cases = [
        ("##f##\n#s x#\n#####", "invalid character 'x' in maze at row 1, column 3"),
        ("#####\n#   #\n##f##", "no start found in maze"),
        ("##f##\n#ss #\n#####", "multiple starts found in maze"),
        ("#####\n#s  #\n#####", "no finish found in maze"),
        ("##f##\n#s f#\n#####", "multiple finishes found in maze"),
        ("##f##\ns   #\n#####", "start declared outside of maze"),
        ("#####\n#s  #\n#   f", "finish declared outside of maze"),
    ];
    for (text, message) in cases {
        match Maze::parse(text) {
            Err(err) => assert_eq!(err.to_string(), message),
            Ok(maze) => panic!("accepted invalid maze:\n{}", maze),
        }
    }
}

#[test]
fn load_from_file() {
    let path = std::env::temp_dir().join(format!("avl_maze_test_{}.txt", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"##f##\r\n#s  #\r\n#####\r\n").unwrap();
    drop(file);

    let mut maze = Maze::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(maze.solve());
    assert_eq!(maze.to_string(), "##f##\n#s. #\n#####\n");

    assert!(matches!(Maze::load(&path), Err(MazeError::Io(_))));
}
