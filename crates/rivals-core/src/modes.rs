//! Game modes and their maps.
//!
//! Used by front ends to validate a typed map or mode name before asking
//! the recommender. Matching is case-insensitive and returns the canonical
//! spelling.

use serde::Serialize;

/// A game mode and the maps played in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameMode {
    pub name: &'static str,
    pub maps: &'static [&'static str],
}

const CATALOGUE: &[GameMode] = &[
    GameMode {
        name: "Convergence",
        maps: &["Central Park", "Hall of Djalia", "Symbiotic Surface", "Shin-Shibuya"],
    },
    GameMode {
        name: "Convoy",
        maps: &["Midtown", "Arakko", "Spider-Islands", "Yggdrasill Path"],
    },
    GameMode {
        name: "Domination",
        maps: &[
            "Birnin TChalla",
            "Celestial Husk",
            "Hells Heaven",
            "Krakoa",
            "Royal Palace",
        ],
    },
];

impl GameMode {
    /// All known game modes.
    pub fn all() -> &'static [GameMode] {
        CATALOGUE
    }

    pub fn names() -> Vec<&'static str> {
        CATALOGUE.iter().map(|m| m.name).collect()
    }

    /// Look up a mode by name, ignoring case and surrounding whitespace.
    pub fn find(name: &str) -> Option<&'static GameMode> {
        let wanted = name.trim().to_lowercase();
        CATALOGUE.iter().find(|m| m.name.to_lowercase() == wanted)
    }

    /// Canonical spelling of `map` if it belongs to this mode.
    pub fn resolve_map(&self, map: &str) -> Option<&'static str> {
        resolve_choice(map, self.maps)
    }
}

/// Find the mode containing `map` and the map's canonical spelling.
pub fn find_map(map: &str) -> Option<(&'static GameMode, &'static str)> {
    CATALOGUE
        .iter()
        .find_map(|mode| mode.resolve_map(map).map(|canonical| (mode, canonical)))
}

/// Return the option matching `input` case-insensitively, in its original casing.
pub fn resolve_choice<'a>(input: &str, options: &[&'a str]) -> Option<&'a str> {
    let wanted = input.trim().to_lowercase();
    options
        .iter()
        .copied()
        .find(|option| option.to_lowercase() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_has_three_modes() {
        assert_eq!(GameMode::names(), vec!["Convergence", "Convoy", "Domination"]);
        assert_eq!(GameMode::find("domination").unwrap().maps.len(), 5);
    }

    #[test]
    fn resolve_choice_returns_canonical_case() {
        let options = ["Central Park", "Midtown"];
        assert_eq!(resolve_choice("  central PARK ", &options), Some("Central Park"));
        assert_eq!(resolve_choice("krakoa", &options), None);
    }

    #[test]
    fn resolve_map_is_scoped_to_mode() {
        let convoy = GameMode::find("CONVOY").unwrap();
        assert_eq!(convoy.resolve_map("midtown"), Some("Midtown"));
        assert_eq!(convoy.resolve_map("krakoa"), None);
    }

    #[test]
    fn find_map_reports_owning_mode() {
        let (mode, map) = find_map("hells heaven").unwrap();
        assert_eq!(mode.name, "Domination");
        assert_eq!(map, "Hells Heaven");
        assert!(find_map("asgard").is_none());
    }

    #[test]
    fn unknown_mode_is_none() {
        assert!(GameMode::find("Deathmatch").is_none());
    }
}
