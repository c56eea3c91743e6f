//! Hero rosters.
//!
//! The recommender works on any `Vec<Hero>`. This module supplies one of two
//! ways: the built-in demonstration roster, or a TOML roster file:
//!
//! ```toml
//! [[heroes]]
//! name = "Spider-Man"
//! roles = ["DPS"]
//!
//! [heroes.map_scores]
//! midtown = 9.5
//!
//! [heroes.role_proficiencies]
//! dps = 0.95
//!
//! [[heroes.map_role_bonus]]
//! map = "midtown"
//! role = "dps"
//! multiplier = 1.05
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::RosterError;
use crate::hero::Hero;

/// On-disk roster layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterFile {
    #[serde(default)]
    pub heroes: Vec<HeroRecord>,
}

/// One `[[heroes]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroRecord {
    pub name: String,
    pub roles: Vec<String>,
    #[serde(default)]
    pub map_scores: BTreeMap<String, f64>,
    #[serde(default)]
    pub role_proficiencies: BTreeMap<String, f64>,
    #[serde(default)]
    pub map_role_bonus: Vec<BonusRecord>,
}

/// One `[[heroes.map_role_bonus]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusRecord {
    pub map: String,
    pub role: String,
    pub multiplier: f64,
}

impl From<HeroRecord> for Hero {
    fn from(record: HeroRecord) -> Self {
        let mut hero = Hero::new(record.name, &record.roles);
        for (map, score) in &record.map_scores {
            hero = hero.with_map_score(map, *score);
        }
        for (role, proficiency) in &record.role_proficiencies {
            hero = hero.with_role_proficiency(role, *proficiency);
        }
        for bonus in &record.map_role_bonus {
            hero = hero.with_map_role_bonus(&bonus.map, &bonus.role, bonus.multiplier);
        }
        hero
    }
}

impl From<&Hero> for HeroRecord {
    fn from(hero: &Hero) -> Self {
        let mut map_role_bonus: Vec<BonusRecord> = hero
            .map_role_bonuses()
            .iter()
            .map(|((map, role), multiplier)| BonusRecord {
                map: map.clone(),
                role: role.clone(),
                multiplier: *multiplier,
            })
            .collect();
        map_role_bonus.sort_by(|a, b| (&a.map, &a.role).cmp(&(&b.map, &b.role)));

        Self {
            name: hero.name().to_string(),
            roles: hero.roles().map(str::to_string).collect(),
            map_scores: hero
                .map_scores()
                .iter()
                .map(|(k, v)| (k.clone(), *v))
                .collect(),
            role_proficiencies: hero
                .role_proficiencies()
                .iter()
                .map(|(k, v)| (k.clone(), *v))
                .collect(),
            map_role_bonus,
        }
    }
}

/// Parse a roster from TOML text. `origin` is only used in error messages.
pub fn parse(content: &str, origin: &Path) -> Result<Vec<Hero>, RosterError> {
    let file: RosterFile = toml::from_str(content).map_err(|e| RosterError::Parse {
        path: origin.to_path_buf(),
        message: e.to_string(),
    })?;
    if file.heroes.is_empty() {
        return Err(RosterError::Empty(origin.to_path_buf()));
    }
    Ok(file.heroes.into_iter().map(Hero::from).collect())
}

/// Load a roster file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a valid roster,
/// or lists no heroes.
pub fn load_from_path(path: &Path) -> Result<Vec<Hero>, RosterError> {
    let content = std::fs::read_to_string(path).map_err(|source| RosterError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let heroes = parse(&content, path)?;
    tracing::info!(path = %path.display(), heroes = heroes.len(), "loaded roster");
    Ok(heroes)
}

/// Render heroes in the roster file format.
pub fn to_toml(heroes: &[Hero]) -> Result<String, RosterError> {
    let file = RosterFile {
        heroes: heroes.iter().map(HeroRecord::from).collect(),
    };
    toml::to_string_pretty(&file).map_err(|e| RosterError::Serialize(e.to_string()))
}

/// The built-in demonstration roster.
///
/// Made-up data: flex roles and numbers are rough guesses.
pub fn builtin() -> Vec<Hero> {
    vec![
        Hero::new("Spider-Man", ["DPS"])
            .with_map_score("midtown", 9.5)
            .with_map_score("arakko", 7.0)
            .with_map_score("central park", 9.0)
            .with_role_proficiency("DPS", 0.95)
            .with_map_role_bonus("midtown", "DPS", 1.05),
        Hero::new("Wolverine", ["DPS", "Tank"])
            .with_map_score("midtown", 8.0)
            .with_map_score("yggdrasill path", 8.5)
            .with_map_score("krakoa", 7.5)
            .with_role_proficiency("DPS", 0.85)
            .with_role_proficiency("Tank", 0.9),
        Hero::new("Storm", ["Support", "DPS"])
            .with_map_score("central park", 8.5)
            .with_map_score("symbiotic surface", 9.0)
            .with_role_proficiency("Support", 0.9)
            .with_role_proficiency("DPS", 0.7)
            .with_map_role_bonus("symbiotic surface", "support", 1.08),
        Hero::new("Doctor Strange", ["Support"])
            .with_map_score("central park", 7.0)
            .with_map_score("hall of djalia", 8.5)
            .with_role_proficiency("Support", 0.92),
        Hero::new("Magneto", ["DPS"])
            .with_map_score("shin-shibuya", 8.8)
            .with_map_score("spider-islands", 7.9)
            .with_role_proficiency("DPS", 0.88)
            .with_map_role_bonus("shin-shibuya", "dps", 1.12),
        Hero::new("Iron Man", ["DPS", "Support"])
            .with_map_score("central park", 8.0)
            .with_map_score("midtown", 8.8)
            .with_map_score("royal palace", 7.2)
            .with_role_proficiency("DPS", 0.9)
            .with_role_proficiency("Support", 0.6)
            .with_map_role_bonus("midtown", "dps", 1.04),
        Hero::new("Black Panther", ["DPS", "Support"])
            .with_map_score("birnin tchalla", 9.4)
            .with_map_score("central park", 7.8)
            .with_map_score("krakoa", 8.2)
            .with_role_proficiency("DPS", 0.9)
            .with_role_proficiency("Support", 0.7)
            .with_map_role_bonus("birnin tchalla", "dps", 1.08),
        Hero::new("Hulk", ["Tank", "DPS"])
            .with_map_score("krakoa", 9.0)
            .with_map_score("hells heaven", 8.6)
            .with_map_score("yggdrasill path", 7.0)
            .with_role_proficiency("Tank", 0.95)
            .with_role_proficiency("DPS", 0.6),
        Hero::new("Scarlet Witch", ["Support", "DPS"])
            .with_map_score("hall of djalia", 9.1)
            .with_map_score("symbiotic surface", 8.4)
            .with_map_score("shin-shibuya", 8.0)
            .with_role_proficiency("Support", 0.9)
            .with_role_proficiency("DPS", 0.75)
            .with_map_role_bonus("hall of djalia", "support", 1.07),
        Hero::new("Groot", ["Tank", "Support"])
            .with_map_score("royal palace", 8.6)
            .with_map_score("yggdrasill path", 8.0)
            .with_role_proficiency("Tank", 0.88)
            .with_role_proficiency("Support", 0.7),
        Hero::new("Punisher", ["DPS"])
            .with_map_score("midtown", 8.9)
            .with_map_score("spider-islands", 7.6)
            .with_map_score("arakko", 6.5)
            .with_role_proficiency("DPS", 0.86),
        Hero::new("Black Widow", ["DPS", "Support"])
            .with_map_score("midtown", 8.3)
            .with_map_score("shin-shibuya", 8.1)
            .with_map_score("central park", 7.5)
            .with_role_proficiency("DPS", 0.82)
            .with_role_proficiency("Support", 0.65),
    ]
}
