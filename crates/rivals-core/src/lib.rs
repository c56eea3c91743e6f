//! # Rivals Helper Core Library
//!
//! Recommends heroes for a role on a given map using a weighted composite
//! score. The CLI is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Hero model**: immutable records with lowercased lookup keys
//! - **Recommender**: filters heroes by role, scores, ranks and truncates
//! - **Roster**: built-in demonstration heroes or a TOML roster file
//! - **Modes**: game modes and their maps, for validating user input
//! - **Storage**: TOML configuration with recommendation defaults
//!
//! ## Key Components
//!
//! - [`Hero`]: One hero's roles, map scores, proficiencies and bonuses
//! - [`Recommender`]: Pure, deterministic ranking over a roster
//! - [`Config`]: Application configuration management

pub mod error;
pub mod hero;
pub mod modes;
pub mod recommend;
pub mod roster;
pub mod storage;

pub use error::{ConfigError, CoreError, RosterError, ValidationError};
pub use hero::Hero;
pub use modes::{find_map, resolve_choice, GameMode};
pub use recommend::{
    score_hero, RecommendOptions, RecommendWeights, Recommender, ScoreBreakdown, ScoreResult,
};
pub use storage::{Config, RosterConfig};
