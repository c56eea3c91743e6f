//! Hero model.
//!
//! A [`Hero`] is a plain value record. Every lookup key (roles, map names,
//! bonus pairs) is lowercased at construction so that queries can match
//! case-insensitively without touching the stored data again.

use std::collections::{BTreeSet, HashMap};

/// A playable hero and the data the recommender scores it with.
///
/// Heroes are built once (from [`crate::roster::builtin`] or a roster file)
/// and never mutated afterwards; the `with_*` methods consume and return
/// `self` and are only meant for construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    name: String,
    roles: BTreeSet<String>,
    map_scores: HashMap<String, f64>,
    role_proficiencies: HashMap<String, f64>,
    map_role_bonus: HashMap<(String, String), f64>,
}

impl Hero {
    /// Create a hero with a display name and the roles it can play.
    pub fn new<I, S>(name: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.into(),
            roles: roles.into_iter().map(|r| normalize(r.as_ref())).collect(),
            map_scores: HashMap::new(),
            role_proficiencies: HashMap::new(),
            map_role_bonus: HashMap::new(),
        }
    }

    /// Set the raw (nominally 0..10) score for a map.
    pub fn with_map_score(mut self, map: &str, score: f64) -> Self {
        self.map_scores.insert(normalize(map), score);
        self
    }

    /// Set the 0..1 proficiency for a role.
    pub fn with_role_proficiency(mut self, role: &str, proficiency: f64) -> Self {
        self.role_proficiencies.insert(normalize(role), proficiency);
        self
    }

    /// Set the multiplier applied when this hero plays `role` on `map`.
    pub fn with_map_role_bonus(mut self, map: &str, role: &str, multiplier: f64) -> Self {
        self.map_role_bonus
            .insert((normalize(map), normalize(role)), multiplier);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercased roles, in sorted order.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(String::as_str)
    }

    /// Whether the hero can play `role` (case-insensitive).
    pub fn can_play(&self, role: &str) -> bool {
        self.roles.contains(&normalize(role))
    }

    /// Raw map score, defaulting to 0 for maps without data.
    ///
    /// Not clamped: misconfigured data may fall outside 0..10.
    pub fn raw_map_score(&self, map: &str) -> f64 {
        self.map_scores.get(&normalize(map)).copied().unwrap_or(0.0)
    }

    /// Role proficiency, defaulting to 0 for roles without data.
    pub fn role_proficiency(&self, role: &str) -> f64 {
        self.role_proficiencies
            .get(&normalize(role))
            .copied()
            .unwrap_or(0.0)
    }

    /// Map/role bonus multiplier, defaulting to 1.0 (no effect).
    pub fn map_role_bonus(&self, map: &str, role: &str) -> f64 {
        self.map_role_bonus
            .get(&(normalize(map), normalize(role)))
            .copied()
            .unwrap_or(1.0)
    }

    pub(crate) fn map_scores(&self) -> &HashMap<String, f64> {
        &self.map_scores
    }

    pub(crate) fn role_proficiencies(&self) -> &HashMap<String, f64> {
        &self.role_proficiencies
    }

    pub(crate) fn map_role_bonuses(&self) -> &HashMap<(String, String), f64> {
        &self.map_role_bonus
    }
}

/// Lowercase a lookup key. Whitespace is significant.
pub(crate) fn normalize(key: &str) -> String {
    key.to_lowercase()
}
