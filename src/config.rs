// Runtime configuration. Everything comes from environment variables so the
// program itself can stay argument-free.

use crate::app::LoopMode;

pub const SINGLE_SHOT_VAR: &str = "USERSAPP_SINGLE_SHOT";
pub const TIMING_VAR: &str = "USERSAPP_TIMING";
pub const COLOR_VAR: &str = "USERSAPP_COLOR";
pub const NO_COLOR_VAR: &str = "NO_COLOR";
pub const LOG_VAR: &str = "USERSAPP_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: LoopMode,
    pub timing: bool,
    pub color: bool,
    /// Variables that were set but could not be understood. Reported once
    /// logging is up.
    pub ignored: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            mode: LoopMode::Continuous,
            timing: true,
            color: true,
            ignored: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the environment, falling back to defaults
    /// for anything missing or malformed.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = AppConfig::default();

        if let Some(single) = read_flag(&lookup, SINGLE_SHOT_VAR, &mut config.ignored) {
            config.mode = if single {
                LoopMode::SingleShot
            } else {
                LoopMode::Continuous
            };
        }
        if let Some(timing) = read_flag(&lookup, TIMING_VAR, &mut config.ignored) {
            config.timing = timing;
        }
        if let Some(color) = read_flag(&lookup, COLOR_VAR, &mut config.ignored) {
            config.color = color;
        }
        if lookup(NO_COLOR_VAR).is_some_and(|v| !v.is_empty()) {
            config.color = false;
        }
        config
    }

    pub fn warn_ignored(&self) {
        for entry in &self.ignored {
            log::warn!("ignoring unrecognised value {}", entry);
        }
    }
}

fn read_flag(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    ignored: &mut Vec<String>,
) -> Option<bool> {
    let raw = lookup(key)?;
    match parse_flag(&raw) {
        Some(value) => Some(value),
        None => {
            ignored.push(format!("{}={}", key, raw));
            None
        }
    }
}

pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.mode, LoopMode::Continuous);
    }

    #[test]
    fn flags_override_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            (SINGLE_SHOT_VAR, "yes"),
            (TIMING_VAR, "off"),
            (COLOR_VAR, "0"),
        ]));
        assert_eq!(config.mode, LoopMode::SingleShot);
        assert!(!config.timing);
        assert!(!config.color);
        assert!(config.ignored.is_empty());
    }

    #[test]
    fn no_color_wins() {
        let config = AppConfig::from_lookup(lookup(&[(COLOR_VAR, "1"), (NO_COLOR_VAR, "1")]));
        assert!(!config.color);
        let config = AppConfig::from_lookup(lookup(&[(NO_COLOR_VAR, "")]));
        assert!(config.color);
    }

    #[test]
    fn malformed_values_are_recorded() {
        let config = AppConfig::from_lookup(lookup(&[(TIMING_VAR, "sometimes")]));
        assert!(config.timing);
        assert_eq!(config.ignored, vec![format!("{}=sometimes", TIMING_VAR)]);
    }

    #[test]
    #[serial]
    fn reads_process_environment() {
        std::env::set_var(SINGLE_SHOT_VAR, "true");
        let config = AppConfig::from_env();
        std::env::remove_var(SINGLE_SHOT_VAR);
        assert_eq!(config.mode, LoopMode::SingleShot);
    }
}
