//! Wordle Arena - CLI
//!
//! Play Wordle in the terminal, host games over HTTP, or duel through a
//! running server.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::sync::Arc;
use wordle_arena::{
    client::{ArenaClient, DEFAULT_SERVER, DuelOutcome, run_duel},
    commands::{run_benchmark, run_simple},
    config::{GameConfig, make_rng},
    core::WordList,
    game::{DEFAULT_MAX_TURNS, Game},
    output::print_benchmark_result,
    server,
    service::GameService,
    wordlists::loader::{EMBEDDED, load_word_list},
};

#[derive(Parser)]
#[command(
    name = "wordle_arena",
    about = "Wordle with a plain and an adversarial engine, in the terminal or over HTTP",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game mode: plain (fixed random answer) or cheat (adaptive adversary)
    #[arg(short, long, global = true, env = "WORDLE_MODE", default_value = "plain")]
    mode: String,

    /// Turns per game
    #[arg(long, global = true, env = "WORDLE_MAX_TURNS", default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: usize,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, env = "WORDLE_WORD_FILE", default_value = EMBEDDED)]
    words: String,

    /// Seed for answer selection
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI board (default)
    Play,

    /// Line-based game without TUI
    Simple,

    /// Serve games over HTTP
    Serve {
        /// Address to listen on
        #[arg(short, long, env = "WORDLE_BIND", default_value = "127.0.0.1:8080")]
        bind: String,
    },

    /// Two players take turns against a running server
    Duel {
        /// Base URL of the server
        #[arg(short, long, default_value = DEFAULT_SERVER)]
        server: String,
    },

    /// Measure how a simple guesser fares against the chosen mode
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = GameConfig::from_name(&cli.mode, cli.max_turns);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config, &cli.words, cli.seed),
        Commands::Simple => run_simple_command(config, &cli.words, cli.seed),
        Commands::Serve { bind } => run_serve_command(config, &cli.words, cli.seed, &bind),
        Commands::Duel { server } => run_duel_command(&server),
        Commands::Benchmark { count } => run_benchmark_command(config, &cli.words, count),
    }
}

fn load_words(source: &str) -> Result<Arc<WordList>> {
    Ok(Arc::new(load_word_list(source)?))
}

fn run_play_command(config: GameConfig, words: &str, seed: Option<u64>) -> Result<()> {
    use wordle_arena::interactive::{App, run_tui};

    let app = App::new(config, load_words(words)?, seed)?;
    run_tui(app)
}

fn run_simple_command(config: GameConfig, words: &str, seed: Option<u64>) -> Result<()> {
    let mut rng = make_rng(seed);
    let mut game = Game::new(config.mode, config.max_turns, load_words(words)?, &mut rng)?;

    let stdin = io::stdin();
    run_simple(&mut game, &mut stdin.lock(), &mut io::stdout())?;
    Ok(())
}

fn run_serve_command(
    config: GameConfig,
    words: &str,
    seed: Option<u64>,
    bind: &str,
) -> Result<()> {
    let service = Arc::new(GameService::new(config, load_words(words)?, seed));
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(bind, service))
}

fn run_duel_command(server: &str) -> Result<()> {
    let client = ArenaClient::new(server);
    let runtime = tokio::runtime::Runtime::new()?;

    let stdin = io::stdin();
    let outcome = runtime.block_on(run_duel(&client, &mut stdin.lock(), &mut io::stdout()))?;
    if outcome == DuelOutcome::Quit {
        println!("Duel abandoned.");
    }
    Ok(())
}

fn run_benchmark_command(config: GameConfig, words: &str, count: usize) -> Result<()> {
    let words = load_words(words)?;
    println!("Running {count} {} games...", config.mode);

    let result = run_benchmark(config, &words, count, true)?;
    print_benchmark_result(&result);
    Ok(())
}
