//! Restloop: a Zellij plugin for browsing and managing highway rest points.
//!
//! Restloop keeps an in-memory catalogue of rest points (name, address,
//! postcode, hours, phone, amenities) and shows it two ways:
//! - a public listing, searchable by suburb, address or postcode and grouped
//!   by postcode
//! - an admin dashboard with add, edit and delete dialogs
//!
//! A "Movies" category exists as a placeholder on both pages.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, dialogs, loading timer           │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Store         │   │ Form          │
//! │ (ui/)         │   │ (store/)      │   │ (form/)       │
//! │ - Rendering   │   │ - Filtering   │   │ - Field edit  │
//! │ - Theming     │   │ - Grouping    │   │ - Validation  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - RestPoint, Category, errors (domain/)            │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OTLP JSON span export to a rotating file         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/restloop.wasm" {
//!         theme "catppuccin-latte"
//!         loading_delay "0.5"
//!         seed "sample"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use restloop::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default())?;
//! handle_event(&mut state, &Event::Started)?;
//! handle_event(&mut state, &Event::LoadingElapsed)?;
//!
//! handle_event(&mut state, &Event::SearchMode)?;
//! for c in "2000".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! assert_eq!(state.store.filtered().len(), 2);
//! # Ok::<(), restloop::RestloopError>(())
//! ```

pub mod app;
pub mod domain;
pub mod form;
pub mod infrastructure;
pub mod observability;
pub mod store;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, Page, SearchFocus};
pub use domain::{RestPoint, RestloopError, Result};
pub use store::RestPointStore;
pub use ui::Theme;

use std::collections::BTreeMap;
use std::str::FromStr;

/// Seconds the loading skeleton stays up when `loading_delay` is not set.
pub const DEFAULT_LOADING_DELAY: f64 = 1.5;

/// Which records the store starts with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedMode {
    /// The eight embedded sample rest points.
    #[default]
    Sample,
    /// No records.
    Empty,
}

impl FromStr for SeedMode {
    type Err = RestloopError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "sample" => Ok(Self::Sample),
            "empty" => Ok(Self::Empty),
            other => Err(RestloopError::Config(format!(
                "seed must be \"sample\" or \"empty\", got {other:?}"
            ))),
        }
    }
}

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/restloop.wasm" {
///     theme_file "~/.config/restloop/dusk.toml"
///     loading_delay "0"
///     seed "empty"
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` refers to the sandbox host mount.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for spans. Default: `"info"`
    pub trace_level: Option<String>,

    /// Seconds before the loading skeleton gives way to the listing.
    pub loading_delay: f64,

    pub seed: SeedMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: None,
            loading_delay: DEFAULT_LOADING_DELAY,
            seed: SeedMode::Sample,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Malformed values fall back to their defaults:
    /// - `loading_delay`: non-numeric, negative or non-finite → 1.5
    /// - `seed`: anything but `sample`/`empty` → `sample`
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use restloop::{Config, SeedMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("loading_delay".to_string(), "0.25".to_string());
    /// map.insert("seed".to_string(), "empty".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.loading_delay, 0.25);
    /// assert_eq!(config.seed, SeedMode::Empty);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let loading_delay = config
            .get("loading_delay")
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|d| d.is_finite() && *d >= 0.0)
            .unwrap_or(DEFAULT_LOADING_DELAY);

        let seed = config.get("seed").map_or(SeedMode::Sample, |s| {
            s.parse().unwrap_or_else(|e: RestloopError| {
                tracing::warn!(error = %e, "invalid seed option, using sample data");
                SeedMode::Sample
            })
        });

        Self {
            theme_name: non_blank(config.get("theme")),
            theme_file: non_blank(config.get("theme_file")),
            trace_level: non_blank(config.get("trace_level")),
            loading_delay,
            seed,
        }
    }
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Resolves the configured theme, falling back to the default on any failure.
///
/// `theme_file` wins over `theme_name`.
#[must_use]
pub fn resolve_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = infrastructure::expand_tilde(theme_file);
        return Theme::from_file(&path).unwrap_or_else(|e| {
            tracing::warn!(theme_file = %path, error = %e, "failed to load theme file, using default");
            Theme::default()
        });
    }

    config
        .theme_name
        .as_deref()
        .map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
}

/// Builds the application state: seeds the store and loads the theme.
///
/// The store starts in the loading state; dispatch [`Event::Started`] to arm
/// the loading timer.
///
/// # Errors
///
/// Returns [`RestloopError::Seed`] if the embedded sample data is malformed.
pub fn initialize(config: &Config) -> Result<AppState> {
    let _span = tracing::debug_span!("initialize", seed = ?config.seed).entered();

    let store = match config.seed {
        SeedMode::Sample => RestPointStore::seeded()?,
        SeedMode::Empty => RestPointStore::empty(),
    };
    tracing::debug!(records = store.len(), "store seeded");

    Ok(AppState::new(store, resolve_theme(config), config.loading_delay))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_every_option() {
        let config = Config::from_zellij(&map(&[
            ("theme", "catppuccin-latte"),
            ("theme_file", "~/dusk.toml"),
            ("trace_level", "debug"),
            ("loading_delay", "3"),
            ("seed", "empty"),
        ]));

        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("~/dusk.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert!((config.loading_delay - 3.0).abs() < f64::EPSILON);
        assert_eq!(config.seed, SeedMode::Empty);
    }

    #[test]
    fn bad_loading_delay_falls_back() {
        for raw in ["-1", "soon", "NaN", "inf", ""] {
            let config = Config::from_zellij(&map(&[("loading_delay", raw)]));
            assert!(
                (config.loading_delay - DEFAULT_LOADING_DELAY).abs() < f64::EPSILON,
                "{raw:?} should fall back"
            );
        }
        let zero = Config::from_zellij(&map(&[("loading_delay", "0")]));
        assert!(zero.loading_delay.abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_seed_is_config_error_and_falls_back() {
        assert!(matches!(
            "demo".parse::<SeedMode>(),
            Err(RestloopError::Config(_))
        ));
        let config = Config::from_zellij(&map(&[("seed", "demo")]));
        assert_eq!(config.seed, SeedMode::Sample);
    }

    #[test]
    fn blank_strings_are_unset() {
        let config = Config::from_zellij(&map(&[("theme", "  "), ("trace_level", "")]));
        assert!(config.theme_name.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn theme_name_selects_builtin() {
        let config = Config {
            theme_name: Some("catppuccin-frappe".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_theme(&config).name, "catppuccin-frappe");
    }

    #[test]
    fn unknown_theme_name_falls_back_to_default() {
        let config = Config {
            theme_name: Some("neon".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_theme(&config), Theme::default());
    }

    #[test]
    fn theme_file_wins_over_theme_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut custom = Theme::default();
        custom.name = "dusk".to_string();
        file.write_all(toml::to_string(&custom).unwrap().as_bytes())
            .unwrap();

        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some(file.path().to_string_lossy().into_owned()),
            ..Config::default()
        };

        assert_eq!(resolve_theme(&config).name, "dusk");
    }

    #[test]
    fn unreadable_theme_file_falls_back_to_default() {
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            theme_file: Some("/nonexistent/restloop/theme.toml".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_theme(&config), Theme::default());
    }

    #[test]
    fn initialize_honours_seed_mode() {
        let sample = initialize(&Config::default()).unwrap();
        assert_eq!(sample.store.len(), 8);
        assert!(sample.store.loading());

        let empty = initialize(&Config {
            seed: SeedMode::Empty,
            ..Config::default()
        })
        .unwrap();
        assert!(empty.store.is_empty());
    }
}
