//! Basic CLI E2E tests.
//!
//! Tests run the built binary with a throwaway config directory.

mod common;

use common::{assert_contains, run_cli, run_cli_failure, run_cli_success};

const ROSTER: &str = r#"
[[heroes]]
name = "Venom"
roles = ["Tank"]

[heroes.map_scores]
"spider-islands" = 9.2

[heroes.role_proficiencies]
tank = 0.9
"#;

#[test]
fn test_recommend_dps_midtown() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(home.path(), &["recommend", "--role", "DPS", "--map", "midtown"]);
    assert_contains(&stdout, "Top 3 heroes for role \"DPS\" on Midtown:");
    assert_contains(&stdout, "1. Spider-Man - score: 0.9248");
    assert_contains(&stdout, "2. Iron Man - score: 0.8597");
    assert_contains(&stdout, "3. Punisher - score: 0.835");
}

#[test]
fn test_recommend_unknown_role() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(
        home.path(),
        &["recommend", "--role", "Healer", "--map", "Midtown"],
    );
    assert_contains(&stdout, "No heroes found for role \"Healer\"");
}

#[test]
fn test_recommend_json() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(
        home.path(),
        &["recommend", "--role", "tank", "--map", "Krakoa", "--top", "2", "--json"],
    );
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let items = parsed.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["rank"], 1);
    assert_eq!(items[0]["name"], "Hulk");
    assert_eq!(items[0]["score"], 0.8725);
    assert!(items[0]["breakdown"]["base"].is_number());
}

#[test]
fn test_recommend_explain() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(
        home.path(),
        &["recommend", "--role", "dps", "--map", "midtown", "--top", "1", "--explain"],
    );
    assert_contains(&stdout, "base 0.9025");
    assert_contains(&stdout, "bonus x1.05");
}

#[test]
fn test_recommend_rejects_negative_weight() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli_failure(
        home.path(),
        &["recommend", "--role", "dps", "--map", "midtown", "--map-weight=-1"],
    );
    assert_eq!(code, 1);
    assert_contains(&stderr, "error:");
}

#[test]
fn test_recommend_with_roster_file() {
    let home = tempfile::tempdir().unwrap();
    let roster = home.path().join("heroes.toml");
    std::fs::write(&roster, ROSTER).unwrap();
    let stdout = run_cli_success(
        home.path(),
        &[
            "recommend",
            "--role",
            "tank",
            "--map",
            "Spider-Islands",
            "--roster",
            roster.to_str().unwrap(),
        ],
    );
    assert_contains(&stdout, "Top 1 heroes for role \"tank\" on Spider-Islands:");
    assert_contains(&stdout, "1. Venom - score: 0.867");
}

#[test]
fn test_recommend_hero_without_data_scores_zero() {
    let home = tempfile::tempdir().unwrap();
    let roster = home.path().join("heroes.toml");
    std::fs::write(&roster, "[[heroes]]\nname = \"Rookie\"\nroles = [\"Tank\"]\n").unwrap();
    let stdout = run_cli_success(
        home.path(),
        &["recommend", "--role", "tank", "--map", "Krakoa", "--roster", roster.to_str().unwrap()],
    );
    assert_contains(&stdout, "1. Rookie - score: 0.0");
}

#[test]
fn test_recommend_rejects_top_zero() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, stderr, _) = run_cli_failure(
        home.path(),
        &["recommend", "--role", "dps", "--map", "midtown", "--top", "0"],
    );
    assert!(!stdout.contains("No heroes found"));
    assert_contains(&stderr, "--top");
}

#[test]
fn test_recommend_with_top_n_zero_in_config() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["config", "set", "top_n", "0"]);
    let stdout = run_cli_success(home.path(), &["recommend", "--role", "dps", "--map", "midtown"]);
    assert_contains(&stdout, "Nothing to show: top_n is 0");
    assert!(!stdout.contains("No heroes found"));
}

#[test]
fn test_recommend_trims_padded_arguments() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(
        home.path(),
        &["recommend", "--role", " DPS ", "--map", " midtown "],
    );
    assert_contains(&stdout, "Top 3 heroes for role \"DPS\" on Midtown:");
    assert_contains(&stdout, "1. Spider-Man - score: 0.9248");
}

#[test]
fn test_missing_roster_file_fails() {
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("missing.toml");
    let (_, stderr, _) = run_cli_failure(
        home.path(),
        &["heroes", "--roster", missing.to_str().unwrap()],
    );
    assert_contains(&stderr, "Failed to read roster");
}

#[test]
fn test_heroes_filtered_by_role() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(home.path(), &["heroes", "--role", "tank"]);
    assert_contains(&stdout, "Hulk");
    assert_contains(&stdout, "Groot");
    assert!(!stdout.contains("Storm"));
}

#[test]
fn test_heroes_export_is_loadable_roster() {
    let home = tempfile::tempdir().unwrap();
    let exported = run_cli_success(home.path(), &["heroes", "--export"]);
    let roster = home.path().join("export.toml");
    std::fs::write(&roster, exported).unwrap();
    let stdout = run_cli_success(
        home.path(),
        &["recommend", "--role", "dps", "--map", "midtown", "--roster", roster.to_str().unwrap()],
    );
    assert_contains(&stdout, "1. Spider-Man - score: 0.9248");
}

#[test]
fn test_maps_lists_modes() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(home.path(), &["maps"]);
    assert_contains(&stdout, "Convergence");
    assert_contains(&stdout, "  - Yggdrasill Path");
}

#[test]
fn test_config_set_changes_top_n() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["config", "set", "top_n", "1"]);
    assert_eq!(run_cli_success(home.path(), &["config", "get", "top_n"]).trim(), "1");

    let stdout = run_cli_success(home.path(), &["recommend", "--role", "dps", "--map", "midtown"]);
    assert_contains(&stdout, "Top 1 heroes");

    run_cli_success(home.path(), &["config", "reset"]);
    assert_eq!(run_cli_success(home.path(), &["config", "get", "top_n"]).trim(), "3");
}

#[test]
fn test_config_get_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["config", "get", "weights.speed"]);
    assert_eq!(code, 1);
    assert_contains(&stderr, "unknown config key");
}

#[test]
fn test_config_list_is_json() {
    let home = tempfile::tempdir().unwrap();
    let stdout = run_cli_success(home.path(), &["config", "list"]);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["weights"]["map"], 0.6);
}
