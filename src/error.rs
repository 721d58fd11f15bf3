use std::path::PathBuf;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum BadgeError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error("failed to read font {}: {source}", .path.display())]
    /// A configured font file could not be read
    FontFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    /// The configuration file is not valid TOML for [crate::Settings]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    /// A JSON payload could not be parsed or produced
    Json(#[from] serde_json::Error),

    #[error("required field `{0}` is empty")]
    /// A required badge field was blank
    MissingField(&'static str),

    #[error("invalid badge geometry: {0}")]
    /// The badge geometry constants cannot describe a printable badge
    InvalidGeometry(String),

    #[error("a page referenced by the document is missing")]
    /// The page order references a page that is no longer in the document
    PageMissing,

    #[error("PRINTER_NAME not set; set it in the config file or environment")]
    /// No printer was configured to print to
    PrinterNotConfigured,

    #[error("the `{0}` command was not found; is CUPS installed?")]
    /// The print spooler command is not installed or not on the PATH
    PrintCommandMissing(String),

    #[error("print command exited with {status}: {output}")]
    /// The print spooler rejected the job
    PrintFailed { status: String, output: String },

    #[error("printing is not supported on this platform")]
    /// No print dispatcher exists for the current target
    UnsupportedPlatform,
}
