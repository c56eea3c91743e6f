//! Roster listing and export.

use clap::Args;
use std::path::Path;

use rivals_core::{roster, Config};

use super::load_recommender;

#[derive(Args)]
pub struct HeroesArgs {
    /// Only list heroes that can play this role
    #[arg(long)]
    role: Option<String>,
    /// Print the roster as a TOML roster file
    #[arg(long, conflicts_with = "role")]
    export: bool,
}

pub fn run(args: HeroesArgs, roster_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let recommender = load_recommender(roster_path, &config)?;

    if args.export {
        print!("{}", roster::to_toml(recommender.heroes())?);
        return Ok(());
    }

    let heroes: Vec<_> = recommender
        .heroes()
        .iter()
        .filter(|h| args.role.as_deref().map_or(true, |role| h.can_play(role)))
        .collect();

    if heroes.is_empty() {
        println!("No heroes found.");
        return Ok(());
    }

    for hero in heroes {
        let roles: Vec<&str> = hero.roles().collect();
        println!("{} ({})", hero.name(), roles.join(", "));
    }
    Ok(())
}
