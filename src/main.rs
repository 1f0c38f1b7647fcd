use anyhow::Context as _;
use clap::Parser;
use opener::{Deck, Game};
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

/// Deal bridge hands and report the opening bid of each round
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of rounds to play; the dealer rotates clockwise every round
    #[arg(short = 'n', long, default_value_t = 1)]
    rounds: usize,

    /// Read the deck from a file of 52 card codes instead of shuffling
    #[arg(short, long)]
    deck: Option<PathBuf>,

    /// Seed the shuffle for reproducible deals
    #[arg(short, long, conflicts_with = "deck")]
    seed: Option<u64>,

    /// Print the deck before each deal
    #[arg(long)]
    show_deck: bool,
}

fn load_deck(path: &Path) -> anyhow::Result<Deck> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read deck file {}", path.display()))?;
    text.parse()
        .with_context(|| format!("invalid deck file {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (mut game, from_file) = match &args.deck {
        Some(path) => (Game::with_deck(load_deck(path)?), true),
        None => (Game::new(), false),
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    for round in 1..=args.rounds {
        log::info!("round {round}, {} dealing", game.dealer());

        if !from_file {
            game.shuffle(&mut rng);
        }
        game.setup();

        if args.show_deck {
            println!("{}", game.deck());
        }

        game.deal()?;
        game.auction();
        println!("{game}");
        game.next_dealer();
    }

    Ok(())
}
