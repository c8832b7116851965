use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use crossterm::style::Color;
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Cannot access settings file: {0}")]
    Io(#[from] io::Error),
    #[error("Error reading settings file ({path:?}), {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub wall: Color,
    pub path: Color,
    pub undo: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            wall: Color::White,
            path: Color::Red,
            undo: Color::Grey,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub cols: Option<usize>,
    #[serde(default)]
    pub rows: Option<usize>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub animate: Option<bool>,
    #[serde(default)]
    pub frame_delay_ms: Option<u64>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
    #[serde(default)]
    pub colors: Option<ColorScheme>,
}

impl Settings {
    pub const DEFAULT_COLS: usize = 12;
    pub const DEFAULT_ROWS: usize = 10;
    pub const DEFAULT_FRAME_DELAY_MS: u64 = 50;

    pub fn get_cols(&self) -> usize {
        self.cols.unwrap_or(Self::DEFAULT_COLS)
    }

    pub fn get_rows(&self) -> usize {
        self.rows.unwrap_or(Self::DEFAULT_ROWS)
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_animate(&self) -> bool {
        self.animate.unwrap_or_default()
    }

    pub fn get_frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms.unwrap_or(Self::DEFAULT_FRAME_DELAY_MS))
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    pub fn get_colors(&self) -> ColorScheme {
        self.colors.unwrap_or_default()
    }

    pub fn default_path() -> PathBuf {
        dirs::preference_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mazer")
            .join("settings.ron")
    }

    pub fn parse(settings_string: &str, path: &Path) -> Result<Self, SettingsError> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        options
            .from_str(settings_string)
            .map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Reads the settings, writing the defaults first if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(settings_string) => Self::parse(&settings_string, path),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("Settings file {:?} not found, creating default", path);
                Self::reset_config(path)?;
                Self::parse(DEFAULT_SETTINGS, path)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_parse() {
        let settings = Settings::parse(DEFAULT_SETTINGS, Path::new("default")).unwrap();
        assert_eq!(settings.get_cols(), 12);
        assert_eq!(settings.get_rows(), 10);
        assert_eq!(settings.get_seed(), None);
        assert!(settings.get_animate());
        assert_eq!(settings.get_frame_delay(), Duration::from_millis(50));
        assert_eq!(settings.get_log_level(), LogLevel::Warn);
        assert_eq!(settings.get_colors(), ColorScheme::default());
    }

    #[test]
    fn missing_fields_fall_back() {
        let settings = Settings::parse("(seed: 7)", Path::new("partial")).unwrap();
        assert_eq!(settings.get_seed(), Some(7));
        assert_eq!(settings.get_cols(), Settings::DEFAULT_COLS);
        assert!(!settings.get_animate());
    }

    #[test]
    fn invalid_settings_report_path() {
        let err = Settings::parse("(cols: \"many\")", Path::new("broken.ron")).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { ref path, .. } if path == Path::new("broken.ron")));
    }

    #[test]
    fn load_creates_missing_file() {
        let dir = std::env::temp_dir().join(format!("mazer-settings-{}", std::process::id()));
        let path = dir.join("settings.ron");
        let _ = fs::remove_file(&path);

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.get_cols(), 12);
        assert!(path.exists());

        let _ = fs::remove_dir_all(&dir);
    }
}
