//! Weaver - CLI
//!
//! Word-ladder game and solver. Play interactively, solve a ladder, or survey
//! how well connected a dictionary is.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::sync::Arc;
use weaver::{
    commands::{SolveConfig, run_play, run_survey, solve_ladder},
    core::Lexicon,
    game::{GameConfig, GameSession},
    logging,
    output::{print_solve_result, print_survey_result},
    wordlists::{
        DEFAULT_WORD_LENGTH,
        loader::{embedded_lexicon, load_from_file},
    },
};

#[derive(Parser)]
#[command(
    name = "weaver",
    about = "Word-ladder puzzle: change one letter at a time from start to target",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Word length; entries of other lengths are ignored
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal (default)
    Play {
        /// Start word
        #[arg(short, long, default_value = "cold")]
        start: String,

        /// Target word
        #[arg(short, long, default_value = "warm")]
        target: String,

        /// Pick a random reachable start and target instead
        #[arg(short, long)]
        random: bool,

        /// Ignore invalid moves silently
        #[arg(long)]
        quiet_errors: bool,

        /// Show the shortest ladder instead of your path when you win
        #[arg(long)]
        show_solution: bool,

        /// Seed for random endpoint selection
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Find a shortest ladder between two words
    Solve {
        /// Word to start from
        start: String,

        /// Word to reach
        target: String,

        /// Give up after expanding this many words
        #[arg(short, long)]
        budget: Option<usize>,

        /// Show timing information
        #[arg(long)]
        timing: bool,
    },

    /// Sample random word pairs and report how many are connected
    Survey {
        /// Number of random pairs to solve
        #[arg(short = 'n', long, default_value = "500")]
        pairs: usize,

        /// Seed for pair sampling
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the lexicon selected by the -w flag
fn load_lexicon(wordlist: &str, length: usize) -> Result<Lexicon> {
    let lexicon = match wordlist {
        "embedded" => embedded_lexicon(length)?,
        path => load_from_file(path, length)
            .with_context(|| format!("failed to load word list '{path}'"))?,
    };
    log::info!("loaded {} words of length {length}", lexicon.len());
    Ok(lexicon)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let lexicon = load_lexicon(&cli.wordlist, cli.length)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        start: "cold".to_string(),
        target: "warm".to_string(),
        random: false,
        quiet_errors: false,
        show_solution: false,
        seed: None,
    });

    match command {
        Commands::Play {
            start,
            target,
            random,
            quiet_errors,
            show_solution,
            seed,
        } => {
            let config = GameConfig::default()
                .with_randomize_endpoints(random)
                .with_report_invalid_moves(!quiet_errors)
                .with_reveal_solution_path(show_solution);
            run_play_command(lexicon, config, &start, &target, seed)
        }
        Commands::Solve {
            start,
            target,
            budget,
            timing,
        } => run_solve_command(&lexicon, start, target, budget, timing),
        Commands::Survey { pairs, seed } => run_survey_command(&lexicon, pairs, seed),
    }
}

fn run_play_command(
    lexicon: Lexicon,
    config: GameConfig,
    start: &str,
    target: &str,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = make_rng(seed);
    let mut session = GameSession::new(Arc::new(lexicon), config);
    session.configure_endpoints_with_rng(Some(start), Some(target), &mut rng)?;

    let stdin = io::stdin();
    let summary = run_play(&mut session, stdin.lock(), io::stdout(), &mut rng)?;
    log::info!("game over: won={} moves={}", summary.won, summary.moves);
    Ok(())
}

fn run_solve_command(
    lexicon: &Lexicon,
    start: String,
    target: String,
    budget: Option<usize>,
    timing: bool,
) -> Result<()> {
    let mut config = SolveConfig::new(start, target);
    config.max_expansions = budget;
    let result = solve_ladder(config, lexicon)?;
    print_solve_result(&result, timing);
    Ok(())
}

fn run_survey_command(lexicon: &Lexicon, pairs: usize, seed: Option<u64>) -> Result<()> {
    println!("Surveying {pairs} random pairs from {} words...", lexicon.len());
    let mut rng = make_rng(seed);
    let result = run_survey(lexicon, pairs, &mut rng, true)?;
    print_survey_result(&result);
    Ok(())
}
