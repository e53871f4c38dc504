use std::path::PathBuf;

use aoc::{
    commands::{self, Settings},
    date::{Part, PuzzleDate},
};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Directory holding the `<year>/day-<DD>/` folders and `solutions/`
    #[arg(long, env = "AOC_ROOT", default_value = ".", global = true)]
    root: PathBuf,
    /// Site to fetch from and submit to
    #[arg(long, env = "AOC_BASE_URL", default_value = aoc::client::DEFAULT_BASE_URL, global = true)]
    base_url: String,
    /// Value of the site's `session` cookie
    #[arg(long, env = aoc::client::SESSION_ENV, hide_env_values = true, global = true)]
    session: Option<String>,
    #[command(subcommand)]
    command: Command,
}

/// Defaults to today in US Eastern time.
#[derive(Args)]
struct DateArgs {
    /// Day of the month, 1-25
    #[arg(long)]
    day: Option<u8>,
    /// Event year, 2015 onwards
    #[arg(long)]
    year: Option<u16>,
}

impl DateArgs {
    fn resolve(&self) -> anyhow::Result<PuzzleDate> {
        Ok(PuzzleDate::resolve(self.day, self.year)?)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Download the puzzle input into input.txt
    Input(DateArgs),
    /// Download the puzzle description into puzzle.md
    Puzzle(DateArgs),
    /// Scaffold solutions/<year>/day<DD>.rs (never overwrites)
    Init(DateArgs),
    /// Run a solution and write its answer to solution-<N>.txt
    Solve {
        #[command(flatten)]
        date: DateArgs,
        /// Puzzle number: 1 or 2
        #[arg(long, default_value = "1")]
        puzzle: Part,
        /// Read this file instead of the day's input.txt; the answer is not saved
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Submit the answer in solution-<N>.txt and save the reply
    Submit {
        #[command(flatten)]
        date: DateArgs,
        /// Puzzle number: 1 or 2
        #[arg(long, default_value = "1")]
        puzzle: Part,
    },
    /// List puzzles that have a solution compiled in
    List,
}

fn enable_tracing() {
    use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    enable_tracing();
    let cli = Cli::parse();
    let settings = Settings {
        root: cli.root,
        base_url: cli.base_url,
        session: cli.session,
    };

    match cli.command {
        Command::Input(date) => {
            let date = date.resolve()?;
            let path = commands::fetch_input(&settings, date)?;
            println!("Puzzle input for {date} written to {}", path.display());
        }
        Command::Puzzle(date) => {
            let date = date.resolve()?;
            let path = commands::fetch_puzzle(&settings, date)?;
            println!("Puzzle description for {date} written to {}", path.display());
        }
        Command::Init(date) => {
            let date = date.resolve()?;
            let path = commands::init(&settings, date)?;
            println!("Initialised {date} at {}", path.display());
        }
        Command::Solve {
            date,
            puzzle,
            input,
        } => {
            let date = date.resolve()?;
            let (answer, saved) = commands::solve(&settings, date, puzzle, input.as_deref())?;
            println!("Solution: {answer}");
            if let Some(path) = saved {
                println!("Saved to {} for submission", path.display());
            }
        }
        Command::Submit { date, puzzle } => {
            let date = date.resolve()?;
            let (reply, path) = commands::submit(&settings, date, puzzle)?;
            println!("Got reply:\n{reply}\nThis reply has been saved to {}", path.display());
        }
        Command::List => {
            for date in commands::list() {
                println!("{date}");
            }
        }
    }
    Ok(())
}
