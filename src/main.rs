use std::path::PathBuf;

use clap::Parser;
use gridgames::{cli, init_logging, GameKind};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Skip the game menu and play this variant directly.
    #[arg(long, value_enum)]
    game: Option<GameKind>,

    /// Fix the RNG seed for reproducible computer play (e.g., --seed 12345).
    #[arg(long)]
    seed: Option<u64>,

    /// Directory holding the per-variant save files.
    #[arg(long, default_value = ".")]
    save_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Cli::parse();

    if let Some(s) = args.seed {
        println!("Using fixed seed: {} (computer moves will be reproducible)", s);
    }
    let mut rng = match args.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    cli::run(&args.save_dir, args.game, &mut rng)
}
