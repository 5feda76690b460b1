//! Pythagorean numerology: life path, destiny, soul urge, personality, cycles,
//! pinnacles, challenges, planes of expression, inclusion grid and applied
//! numbers, each with a readable derivation trace.
//!
//! ```
//! use celestial_numerology::{calculate_destiny, calculate_life_path, BirthDate};
//!
//! let dob: BirthDate = "1990-11-22".parse().unwrap();
//! assert_eq!(calculate_life_path(&dob).value, 7);
//! assert_eq!(calculate_destiny("Eric").math, "E(5) + R(9) + I(9) + C(3) = 26 → 26 → 8");
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::toml_config::TomlProfile;

pub use crate::app::meanings::{generate_summary, get_meaning, Category};
pub use crate::app::render::{render, OutputFormat};
pub use crate::core::calculator::{
    calculate_applied, calculate_birthday_number, calculate_challenges, calculate_compatibility,
    calculate_destiny, calculate_inclusion_grid, calculate_life_path, calculate_personal_day,
    calculate_personal_month, calculate_personal_year, calculate_personality,
    calculate_pinnacles, calculate_planes, calculate_soul_urge,
};
pub use crate::core::letters::calculate_string_value;
pub use crate::core::reducer::{reduce, reduce_number};
pub use crate::core::report::{NumerologyReport, ReportEngine};
pub use crate::domain::model::{
    BirthDate, Challenge, Challenges, InclusionGrid, LetterFilter, NumerologyResult, Pinnacles,
    Planes, ReportRequest,
};
pub use crate::domain::ports::ProfileProvider;
pub use crate::utils::error::{NumerologyError, Result};
