//! Expected-size Wordle solver - CLI
//!
//! Reference driver around the library: loads a word list, builds one game
//! context and plays or analyzes games from it.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_expected::{
    commands::{analyze_word, run_test_all, solve_random, solve_word},
    core::Rule,
    output::{print_analysis_result, print_opening, print_solve_result, print_test_all_statistics},
    solver::{GameConfig, GameContext},
    wordlists::load_from_file,
};

/// Word length handled by the CLI
const WORD_LEN: usize = 5;

#[derive(Parser)]
#[command(
    name = "wordle_expected",
    about = "Wordle solver minimizing the expected number of remaining candidates",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list, one word per line
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Duplicate-letter scoring rule
    #[arg(short, long, global = true, value_enum, default_value_t = RuleArg::Standard)]
    rule: RuleArg,

    /// Compute the opening guess on all cores
    #[arg(short, long, global = true)]
    parallel: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum RuleArg {
    /// Each target letter marks at most one guessed letter
    Standard,
    /// A guessed letter is present whenever the target contains it
    Membership,
}

impl From<RuleArg> for Rule {
    fn from(value: RuleArg) -> Self {
        match value {
            RuleArg::Standard => Self::Standard,
            RuleArg::Membership => Self::Membership,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the best opening guess for the word list
    Opening,

    /// Analyze the partition a specific guess induces on the word list
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts for every turn
        #[arg(long)]
        details: bool,
    },

    /// Solve a target drawn at random from the word list
    Random {
        /// Seed for reproducible draws
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Solve every word in the list
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().default_filter_or(level);
    env_logger::Builder::from_env(env).init();
}

fn load_context(cli: &Cli) -> Result<GameContext<WORD_LEN>> {
    let Some(path) = cli.wordlist.as_deref() else {
        bail!("no word list given; pass --wordlist <PATH>");
    };
    let words = load_from_file(path)
        .with_context(|| format!("reading word list {path}"))?;
    let config = GameConfig::default()
        .with_rule(cli.rule.into())
        .with_parallel(cli.parallel);

    GameContext::from_strs(&words[..], config)
        .with_context(|| format!("building context from {path}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut context = load_context(&cli)?;

    match cli.command {
        Commands::Opening => print_opening(context.opening()),
        Commands::Analyze { word } => {
            let result = analyze_word(&mut context, &word)?;
            print_analysis_result(&result);
        }
        Commands::Solve { word, details } => {
            let result = solve_word(&mut context, &word)?;
            print_solve_result(&result, details);
        }
        Commands::Random { seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_rng(&mut rand::rng()),
            };
            let result = solve_random(&mut context, &mut rng)?;
            print_solve_result(&result, true);
        }
        Commands::TestAll { limit } => {
            println!(
                "Testing against {} words (opening {})",
                context.dictionary().len(),
                context.opening().word
            );
            let stats = run_test_all(&mut context, limit, true)?;
            print_test_all_statistics(&stats);
        }
    }

    Ok(())
}
