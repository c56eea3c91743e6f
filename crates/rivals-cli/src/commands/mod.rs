pub mod config;
pub mod heroes;
pub mod maps;
pub mod pick;
pub mod recommend;

use std::path::Path;

use rivals_core::{roster, Config, Recommender};

/// Build the recommender from, in order: `--roster`, the configured
/// roster file, or the built-in heroes.
pub(crate) fn load_recommender(
    roster_override: Option<&Path>,
    config: &Config,
) -> Result<Recommender, Box<dyn std::error::Error>> {
    let configured = config.roster_path();
    let heroes = match roster_override.or(configured.as_deref()) {
        Some(path) => roster::load_from_path(path)?,
        None => roster::builtin(),
    };
    Ok(Recommender::new(heroes))
}
