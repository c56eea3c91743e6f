//! Hero recommendation scoring.
//!
//! Each hero that can play the requested role gets a composite score:
//!
//! ```text
//! map_norm = clamp(raw_map_score / 10, 0, 1)
//! base     = map_norm * weights.map + role_proficiency * weights.role
//! final    = base * bonus ^ (weights.bonus * 10)
//! ```
//!
//! The bonus multiplier is raised to a small exponent so that a 1.1 bonus
//! nudges the score instead of swinging it by a full 10%. Final scores are
//! rounded to four decimals, then ranked by score descending and by
//! case-insensitive name ascending.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::ValidationError;
use crate::hero::Hero;

/// Raw map scores are expressed on a 0..10 scale.
const MAP_SCORE_SCALE: f64 = 10.0;

/// Weights for each scoring term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendWeights {
    /// Weight of the normalized map score
    #[serde(default = "default_map_weight")]
    pub map: f64,
    /// Weight of the role proficiency
    #[serde(default = "default_role_weight")]
    pub role: f64,
    /// Exponent scale for the map/role bonus (applied as `bonus * 10`)
    #[serde(default = "default_bonus_weight")]
    pub bonus: f64,
}

fn default_map_weight() -> f64 {
    0.6
}
fn default_role_weight() -> f64 {
    0.35
}
fn default_bonus_weight() -> f64 {
    0.05
}

impl Default for RecommendWeights {
    fn default() -> Self {
        Self {
            map: default_map_weight(),
            role: default_role_weight(),
            bonus: default_bonus_weight(),
        }
    }
}

impl RecommendWeights {
    /// Check that every weight is finite and non-negative.
    ///
    /// The scorer does not call this; callers accepting user input should.
    /// Weights are not required to sum to one.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("weights.map", self.map),
            ("weights.role", self.role),
            ("weights.bonus", self.bonus),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidValue {
                    field: field.to_string(),
                    message: format!("must be a non-negative number, got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// Query options for [`Recommender::recommend`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendOptions {
    /// Maximum number of results. Zero yields an empty result.
    pub top_n: usize,
    pub weights: RecommendWeights,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            top_n: 3,
            weights: RecommendWeights::default(),
        }
    }
}

/// Intermediate terms of one hero's score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Map score scaled to 0..1
    pub map_norm: f64,
    /// Role proficiency (0..1)
    pub role_proficiency: f64,
    /// Weighted sum before the bonus
    pub base: f64,
    /// Map/role bonus multiplier (1.0 when none)
    pub bonus: f64,
    /// Final score rounded to four decimals
    pub final_score: f64,
}

/// A ranked hero and its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreResult<'a> {
    pub hero: &'a Hero,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Compute the score terms for a single hero.
///
/// Missing map, proficiency, or bonus data falls back to 0, 0, and 1.0, so
/// this never fails. It does not check whether the hero can play `role`.
pub fn score_hero(
    hero: &Hero,
    role: &str,
    map: &str,
    weights: &RecommendWeights,
) -> ScoreBreakdown {
    let raw = hero.raw_map_score(map);
    let map_norm = (raw / MAP_SCORE_SCALE).clamp(0.0, 1.0);
    let role_proficiency = hero.role_proficiency(role);
    let base = map_norm * weights.map + role_proficiency * weights.role;
    let bonus = hero.map_role_bonus(map, role);
    let final_score = round4(base * bonus.powf(weights.bonus * 10.0));

    ScoreBreakdown {
        map_norm,
        role_proficiency,
        base,
        bonus,
        final_score,
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Ranks heroes from an immutable roster.
#[derive(Debug, Clone)]
pub struct Recommender {
    heroes: Vec<Hero>,
}

impl Recommender {
    pub fn new(heroes: Vec<Hero>) -> Self {
        Self { heroes }
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    /// Find a hero by name (case-insensitive). First match wins.
    pub fn find_hero(&self, name: &str) -> Option<&Hero> {
        let wanted = name.trim().to_lowercase();
        self.heroes
            .iter()
            .find(|h| h.name().to_lowercase() == wanted)
    }

    /// Every role at least one hero can play, lowercased and sorted.
    pub fn known_roles(&self) -> Vec<&str> {
        let roles: BTreeSet<&str> = self.heroes.iter().flat_map(|h| h.roles()).collect();
        roles.into_iter().collect()
    }

    /// Top heroes for `role` on `map`.
    ///
    /// Returns at most `options.top_n` results. An empty vector means no
    /// hero can play the role (or `top_n` is zero); it is not an error.
    pub fn recommend(
        &self,
        role: &str,
        map: &str,
        options: &RecommendOptions,
    ) -> Vec<ScoreResult<'_>> {
        let mut scored: Vec<ScoreResult<'_>> = self
            .heroes
            .iter()
            .filter(|hero| hero.can_play(role))
            .map(|hero| {
                let breakdown = score_hero(hero, role, map, &options.weights);
                ScoreResult {
                    hero,
                    score: breakdown.final_score,
                    breakdown,
                }
            })
            .collect();

        tracing::debug!(role, map, candidates = scored.len(), "scored candidates");

        scored.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.hero.name().to_lowercase().cmp(&b.hero.name().to_lowercase()))
        });
        scored.truncate(options.top_n);
        scored
    }
}
