//! Interactive mode: ask for game mode, map and role, then recommend.

use dialoguer::{theme::ColorfulTheme, Input};
use std::path::Path;

use rivals_core::{resolve_choice, Config, GameMode};

use super::load_recommender;
use super::recommend::print_results;

pub fn run(roster: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let options = config.recommend_options();
    options.weights.validate()?;
    let recommender = load_recommender(roster, &config)?;
    let theme = ColorfulTheme::default();

    let mode_names = GameMode::names();
    let mode = prompt_choice(&theme, "Which gamemode are you playing?", &mode_names)?;
    let mode = GameMode::find(&mode).ok_or("game mode vanished from catalogue")?;

    let map = prompt_choice(&theme, "Which map are you playing?", mode.maps)?;

    let role: String = Input::with_theme(&theme)
        .with_prompt(format!(
            "Which role are you picking? (e.g. {})",
            recommender.known_roles().join(", ")
        ))
        .interact_text()?;
    let role = role.trim();

    tracing::debug!(mode = mode.name, map = %map, role, "interactive pick");
    let results = recommender.recommend(role, &map, &options);
    print_results(role, &map, &results, &options, false);
    Ok(())
}

/// Prompt until the answer matches one of `options` (case-insensitive).
/// Returns the option in its canonical spelling.
fn prompt_choice(
    theme: &ColorfulTheme,
    prompt: &str,
    options: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    let answer: String = Input::with_theme(theme)
        .with_prompt(format!("{prompt} [{}]", options.join(", ")))
        .validate_with(|input: &String| -> Result<(), String> {
            match resolve_choice(input, options) {
                Some(_) => Ok(()),
                None => Err(format!(
                    "Invalid choice. Options are:\n - {}",
                    options.join("\n - ")
                )),
            }
        })
        .interact_text()?;

    resolve_choice(&answer, options)
        .map(str::to_string)
        .ok_or_else(|| format!("invalid choice: {answer}").into())
}
