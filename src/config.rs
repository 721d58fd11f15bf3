use crate::badge::{BadgeGeometry, FontPaths};
use crate::BadgeError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the printer to send badges to
pub const PRINTER_NAME: &str = "PRINTER_NAME";
/// Environment variable naming the directory generated PDFs are written to
pub const OUTPUT_DIR: &str = "OUTPUT_DIR";

fn default_output_dir() -> PathBuf {
    PathBuf::from("out")
}

/// Everything the badge printer can be configured with.
///
/// Settings are read from an optional TOML file, then overridden by the
/// `PRINTER_NAME` and `OUTPUT_DIR` environment variables:
///
/// ```toml
/// printer_name = "Bar_Code_Printer_P422T"
/// output_dir = "/var/spool/badges"
///
/// [fonts]
/// bold = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"
///
/// [geometry]
/// ticket_type_y = 90.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub printer_name: Option<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    pub fonts: FontPaths,
    pub geometry: BadgeGeometry,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            printer_name: None,
            output_dir: default_output_dir(),
            fonts: FontPaths::default(),
            geometry: BadgeGeometry::default(),
        }
    }
}

impl Settings {
    pub fn from_toml(source: &str) -> Result<Settings, BadgeError> {
        Ok(toml::from_str(source)?)
    }

    /// Read the settings file, if any, then apply the process environment
    pub fn load(path: Option<&Path>) -> Result<Settings, BadgeError> {
        let mut settings = match path {
            Some(path) => {
                debug!("reading settings from {}", path.display());
                Settings::from_toml(&fs::read_to_string(path)?)?
            }
            None => Settings::default(),
        };
        settings.apply_env(|key| std::env::var(key).ok());
        settings.geometry.validate()?;
        Ok(settings)
    }

    /// Override settings from environment variables, looked up through `lookup`.
    /// Blank values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if let Some(printer) = lookup(PRINTER_NAME) {
            self.printer_name = Some(printer);
        }
        if let Some(dir) = lookup(OUTPUT_DIR) {
            self.output_dir = PathBuf::from(dir);
        }
    }

    /// Create the output directory if it does not exist yet
    pub fn ensure_output_dir(&self) -> Result<&Path, BadgeError> {
        fs::create_dir_all(&self.output_dir)?;
        Ok(&self.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pt;

    #[test]
    fn empty_file_gives_defaults() {
        let settings = Settings::from_toml("").expect("parses");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.output_dir, PathBuf::from("out"));
        assert_eq!(settings.printer_name, None);
    }

    #[test]
    fn file_values_are_read() {
        let settings = Settings::from_toml(
            r#"
            printer_name = "Front_Desk"
            output_dir = "badges"

            [fonts]
            bold = "fonts/Inter-Bold.ttf"

            [geometry]
            ticket_type_y = 80.0
            "#,
        )
        .expect("parses");
        assert_eq!(settings.printer_name.as_deref(), Some("Front_Desk"));
        assert_eq!(settings.output_dir, PathBuf::from("badges"));
        assert_eq!(settings.fonts.bold, Some(PathBuf::from("fonts/Inter-Bold.ttf")));
        assert_eq!(settings.fonts.regular, None);
        assert_eq!(settings.geometry.ticket_type_y, Pt(80.0));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = Settings::from_toml("printer = \"typo\"");
        assert!(matches!(result, Err(BadgeError::Config(_))));
    }

    #[test]
    fn environment_overrides_the_file() {
        let mut settings = Settings::from_toml("printer_name = \"File\"").expect("parses");
        settings.apply_env(|key| match key {
            PRINTER_NAME => Some("Env".to_string()),
            OUTPUT_DIR => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(settings.printer_name.as_deref(), Some("Env"));
        assert_eq!(settings.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn output_dir_is_created() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = Settings {
            output_dir: dir.path().join("nested").join("out"),
            ..Settings::default()
        };
        let created = settings.ensure_output_dir().expect("creates");
        assert!(created.is_dir());
    }

    #[test]
    fn settings_file_is_loaded_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("badges.toml");
        fs::write(&path, "[geometry]\nwidth = -1.0\n").expect("write");
        assert!(matches!(
            Settings::load(Some(&path)),
            Err(BadgeError::InvalidGeometry(_))
        ));
    }
}
