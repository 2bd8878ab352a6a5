//! Fixtures

use std::{fs, path::PathBuf};

use thiserror::Error;

use crate::menu::{Menu, MenuError};

pub mod menu;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Unknown menu category
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// No drinks defined
    #[error("No drinks in fixture; currency unknown")]
    NoDrinks,

    /// Menu construction error
    #[error("Failed to build menu: {0}")]
    Menu(#[from] MenuError),
}

/// Load a menu from a fixture file under `base_path`.
///
/// The file is expected at `<base_path>/menu/<name>.yml`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the drinks
/// it defines do not form a valid single-currency menu.
pub fn load_menu_file(base_path: impl Into<PathBuf>, name: &str) -> Result<Menu, FixtureError> {
    let file_path = base_path.into().join("menu").join(format!("{name}.yml"));
    let contents = fs::read_to_string(&file_path)?;

    menu::load_menu(&contents)
}
