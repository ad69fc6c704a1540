use std::path::PathBuf;
use std::process::ExitCode;

use avl_maze::maze::{Maze, MazeError};
use avl_maze::SomeTree;
use clap::Parser;

/// Finds a path through a maze of `#` walls, from `s` to `f`, and prints it.
#[derive(Parser)]
struct Cli {
    /// The maze file to read.
    maze_file: PathBuf,

    /// Print the shape of the row tree to stderr after loading.
    #[arg(long)]
    stats: bool,
}

fn print_stats(maze: &Maze) {
    let rows = maze.rows();
    eprintln!("rows: {}", rows.size());
    eprintln!("height: {}", rows.height());
    eprintln!("max depth: {}", rows.max_depth());
    eprintln!("leaves: {}", rows.leaf_count());
    eprintln!("balance: {:.3}", rows.balance());
    match rows.verify() {
        Ok(()) => eprintln!("verify: ok"),
        Err(reason) => eprintln!("verify: {}", reason),
    }
}

fn run(cli: &Cli) -> Result<(), MazeError> {
    let mut maze = Maze::load(&cli.maze_file)?;
    if cli.stats {
        print_stats(&maze);
    }
    if !maze.solve() {
        log::warn!("no path through {}", cli.maze_file.display());
    }
    print!("{}", maze);
    Ok(())
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error - {}", err);
            println!("Unable to load maze {}", cli.maze_file.display());
            ExitCode::FAILURE
        }
    }
}
