//! CLI for maze generation

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use log::info;
use prim_maze::{logging, MazeGenerator, Prim, Sampling};

/// Perfect maze generator using randomized Prim's algorithm
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(long, default_value_t = 10)]
    width: usize,

    /// Maze height in cells
    #[arg(long, default_value_t = 10)]
    height: usize,

    /// Random seed, drawn at random when omitted
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// How frontier cells and neighbors are drawn
    #[arg(long, value_enum, default_value_t = Sampling::Uniform)]
    sampling: Sampling,

    /// Number of mazes to print, generated from consecutive seeds and
    /// separated by an empty line
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Log more details to stderr; repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Install the stderr logger for the requested verbosity
fn init_logging(verbose: u8) -> anyhow::Result<()> {
    logging::init(logging::level_from_verbosity(verbose))?;
    Ok(())
}

/// Render all requested mazes.
///
/// Fails on the first maze that cannot be generated, so nothing is printed
/// for an invalid request.
fn run(args: &Args) -> anyhow::Result<String> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let prim = Prim::new(args.sampling);
    info!("using seed {seed} with {:?} sampling", prim.sampling());

    let mazes = (0..args.count as i64)
        .map(|i| {
            let seed = seed.wrapping_add(i);
            prim.generate_text(args.width, args.height, seed)
                .with_context(|| format!("cannot generate maze with seed {seed}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(mazes.iter().join("\n"))
}

/// Generate mazes, print them to stdout
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;
    print!("{}", run(&args)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{init_logging, run, Args};
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("prim-maze").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn invalid_size_is_reported() {
        let err = run(&args(&["--width", "1", "--seed", "3"])).unwrap_err();
        assert_eq!(err.to_string(), "cannot generate maze with seed 3");
        assert!(format!("{err:#}").contains("invalid maze dimensions 1x10"));
    }

    #[test]
    fn mazes_are_separated_by_empty_line() {
        let text = run(&args(&["--width", "3", "--height", "2", "--seed", "-4", "--count", "2"])).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2 * 3 + 1);
        assert_eq!(lines[3], "");
        assert!(text.ends_with("|\n"));
    }

    #[test]
    fn same_seed_same_output() {
        let argv = ["--width", "6", "--height", "4", "--seed", "11", "--sampling", "skip-last"];
        assert_eq!(run(&args(&argv)).unwrap(), run(&args(&argv)).unwrap());
    }

    #[test]
    fn logger_installs_once() {
        assert!(init_logging(2).is_ok());
        let err = init_logging(0).unwrap_err();
        assert!(err.downcast_ref::<log::SetLoggerError>().is_some());
    }
}
