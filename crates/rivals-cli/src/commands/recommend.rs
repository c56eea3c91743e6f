//! One-shot hero recommendation command.

use clap::Args;
use serde::Serialize;
use std::path::Path;

use rivals_core::{find_map, Config, RecommendOptions, ScoreBreakdown, ScoreResult};

use super::load_recommender;

#[derive(Args)]
pub struct RecommendArgs {
    /// Role to pick (e.g. DPS, Support, Tank)
    #[arg(long)]
    role: String,
    /// Map being played
    #[arg(long)]
    map: String,
    /// Number of heroes to show (defaults to config `top_n`)
    #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    top: Option<usize>,
    /// Override the map score weight
    #[arg(long)]
    map_weight: Option<f64>,
    /// Override the role proficiency weight
    #[arg(long)]
    role_weight: Option<f64>,
    /// Override the bonus exponent weight
    #[arg(long)]
    bonus_weight: Option<f64>,
    /// Show the score terms for each hero
    #[arg(long)]
    explain: bool,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct RankedHero<'a> {
    rank: usize,
    name: &'a str,
    score: f64,
    breakdown: &'a ScoreBreakdown,
}

pub fn run(args: RecommendArgs, roster: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let options = build_options(&args, &config)?;
    let recommender = load_recommender(roster, &config)?;

    let role = args.role.trim();
    let map = canonical_map(&args.map);
    let results = recommender.recommend(role, &map, &options);

    if args.json {
        let ranked: Vec<RankedHero<'_>> = results
            .iter()
            .enumerate()
            .map(|(i, r)| RankedHero {
                rank: i + 1,
                name: r.hero.name(),
                score: r.score,
                breakdown: &r.breakdown,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        print_results(role, &map, &results, &options, args.explain);
    }
    Ok(())
}

fn build_options(
    args: &RecommendArgs,
    config: &Config,
) -> Result<RecommendOptions, Box<dyn std::error::Error>> {
    let mut options = config.recommend_options();
    if let Some(top) = args.top {
        options.top_n = top;
    }
    if let Some(w) = args.map_weight {
        options.weights.map = w;
    }
    if let Some(w) = args.role_weight {
        options.weights.role = w;
    }
    if let Some(w) = args.bonus_weight {
        options.weights.bonus = w;
    }
    options.weights.validate()?;
    Ok(options)
}

/// Canonical spelling of a known map; unknown maps pass through with a warning.
pub(crate) fn canonical_map(map: &str) -> String {
    match find_map(map) {
        Some((_, canonical)) => canonical.to_string(),
        None => {
            tracing::warn!(map, "map is not in any game mode; map scores will be 0");
            map.trim().to_string()
        }
    }
}

pub(crate) fn print_results(
    role: &str,
    map: &str,
    results: &[ScoreResult<'_>],
    options: &RecommendOptions,
    explain: bool,
) {
    if options.top_n == 0 {
        println!("Nothing to show: top_n is 0. Set it with `rivals config set top_n <N>`.");
        return;
    }
    if results.is_empty() {
        println!(
            "No heroes found for role \"{role}\". Try another role or add heroes to the dataset."
        );
        return;
    }

    println!("Top {} heroes for role \"{role}\" on {map}:", results.len());
    for (i, result) in results.iter().enumerate() {
        println!("{}. {} - score: {:?}", i + 1, result.hero.name(), result.score);
        if explain {
            let b = &result.breakdown;
            println!(
                "   map {:.4} x {} + role {:.4} x {} = base {:.4}; bonus x{}^{}",
                b.map_norm,
                options.weights.map,
                b.role_proficiency,
                options.weights.role,
                b.base,
                b.bonus,
                options.weights.bonus * 10.0,
            );
        }
    }
}
