use chrono::Weekday;
use serde::{Deserialize, Deserializer};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, ErrorKind, Result};
use crate::locale::Locale;
use crate::lunar::HijriKind;
use crate::view::View;

const CONFIG_PATH_ENV_VAR: &str = "CRESCENT_CONFIG_FILE";

const DEFAULT_AGENDA_LENGTH: u32 = 30;

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("crescent").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".crescent.toml"));
    }

    locations
}

fn deserialize_weekday<'de, D>(deserializer: D) -> std::result::Result<Option<Weekday>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|day| {
            day.parse::<Weekday>().map_err(|_| {
                serde::de::Error::custom(format!("'{}' is not a day of the week", day))
            })
        })
        .transpose()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub locale: Locale,
    pub calendar: HijriKind,
    #[serde(deserialize_with = "deserialize_weekday")]
    pub week_start: Option<Weekday>,
    pub agenda_length: u32,
    pub events: Option<PathBuf>,
    pub view: View,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            locale: Locale::from_tag("en-US"),
            calendar: HijriKind::default(),
            week_start: None,
            agenda_length: DEFAULT_AGENDA_LENGTH,
            events: None,
            view: View::default(),
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;

        if config.agenda_length == 0 {
            return Err(Error::new(
                ErrorKind::ConfigParse,
                "agenda_length must be at least one day",
            ));
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        Config::from_toml(&content).map_err(|err| {
            let msg = format!("{}: {}", path.display(), err);
            err.with_msg(&msg)
        })
    }

    /// Explicit week start, otherwise the locale's.
    pub fn week_start(&self) -> Weekday {
        self.week_start.unwrap_or_else(|| self.locale.week_start())
    }
}

/// Loads `path` if given, else the first existing default location, else
/// the built-in defaults.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        log::info!("Loading config from '{}'", path.display());
        return Config::from_file(path);
    }

    match find_configfile_locations().into_iter().find(|p| p.is_file()) {
        Some(path) => {
            log::info!("Loading config from '{}'", path.display());
            Config::from_file(&path)
        }
        None => {
            log::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config.locale, Locale::English);
        assert_eq!(config.calendar, HijriKind::UmmAlQura);
        assert_eq!(config.agenda_length, 30);
        assert_eq!(config.view, View::Month);
        assert_eq!(config.week_start(), Weekday::Sun);
        assert!(config.events.is_none());
    }

    #[test]
    fn full_file() {
        let config = Config::from_toml(
            r#"
            locale = "ar-SA"
            calendar = "civil"
            week_start = "mon"
            agenda_length = 14
            events = "/srv/jamaat/events.toml"
            view = "agenda"
            "#,
        )
        .unwrap();

        assert_eq!(config.locale, Locale::Arabic);
        assert_eq!(config.calendar, HijriKind::Civil);
        assert_eq!(config.week_start(), Weekday::Mon);
        assert_eq!(config.agenda_length, 14);
        assert_eq!(config.events, Some(PathBuf::from("/srv/jamaat/events.toml")));
        assert_eq!(config.view, View::Agenda);
    }

    #[test]
    fn locale_decides_week_start() {
        let config = Config::from_toml("locale = \"ar\"").unwrap();
        assert_eq!(config.week_start(), Weekday::Sat);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::from_toml("calendar = \"julian\"").is_err());
        assert!(Config::from_toml("week_start = \"someday\"").is_err());
        assert!(Config::from_toml("agenda_length = 0").is_err());
        assert!(Config::from_toml("colour = \"blue\"").is_err());
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_suitable_config(Some(Path::new("/nonexistent/crescent.toml"))).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::IOError(_)));
    }
}
