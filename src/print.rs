//! Sending rendered PDFs to a printer.
//!
//! Printing is platform specific, so it sits behind [PrintDispatcher]. On Unix
//! the CUPS command line tools (`lp` and `lpstat`) do the work.

use crate::BadgeError;
use log::{debug, info, warn};
use serde::Serialize;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

/// A job accepted by the print spooler
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintJob {
    /// The spooler's id for the job, or its whole reply if no id was found
    pub job_id: String,
    /// Everything the spooler printed on stdout
    pub raw: String,
}

/// Something that can put a PDF on paper
pub trait PrintDispatcher {
    /// The printer jobs are sent to, if one is configured
    fn printer(&self) -> Option<&str>;

    /// Queue a PDF for printing. Blocks until the spooler has accepted or
    /// rejected the job, not until it is printed.
    fn print_file(&self, path: &Path) -> Result<PrintJob, BadgeError>;

    /// Human-readable list of the printers the system knows about
    fn list_printers(&self) -> Result<String, BadgeError>;
}

/// Prints through CUPS' `lp`
#[derive(Debug, Clone)]
pub struct LpDispatcher {
    printer: Option<String>,
    lp: String,
    lpstat: String,
}

impl LpDispatcher {
    pub fn new(printer: Option<String>) -> LpDispatcher {
        LpDispatcher::with_commands(printer, "lp", "lpstat")
    }

    /// Use other programs in place of `lp` and `lpstat`
    pub fn with_commands<L: Into<String>, S: Into<String>>(
        printer: Option<String>,
        lp: L,
        lpstat: S,
    ) -> LpDispatcher {
        LpDispatcher {
            printer,
            lp: lp.into(),
            lpstat: lpstat.into(),
        }
    }
}

/// Run a spooler command to completion, returning its stdout
fn run(program: &str, command: &mut Command) -> Result<String, BadgeError> {
    debug!("running {command:?}");
    let output = command.output().map_err(|e| match e.kind() {
        ErrorKind::NotFound => BadgeError::PrintCommandMissing(program.to_string()),
        _ => BadgeError::Io(e),
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let combined = format!("{stdout}{stderr}").trim().to_string();
        warn!("{program} exited with {}: {combined}", output.status);
        return Err(BadgeError::PrintFailed {
            status: output.status.to_string(),
            output: combined,
        });
    }

    Ok(stdout)
}

impl PrintDispatcher for LpDispatcher {
    fn printer(&self) -> Option<&str> {
        self.printer.as_deref()
    }

    fn print_file(&self, path: &Path) -> Result<PrintJob, BadgeError> {
        let printer = self
            .printer
            .as_deref()
            .ok_or(BadgeError::PrinterNotConfigured)?;

        let raw = run(&self.lp, Command::new(&self.lp).arg("-d").arg(printer).arg(path))?;
        let job_id = parse_job_id(&raw);
        info!("sent {} to {printer} as job {job_id}", path.display());

        Ok(PrintJob { job_id, raw })
    }

    fn list_printers(&self) -> Result<String, BadgeError> {
        run(&self.lpstat, Command::new(&self.lpstat).arg("-p"))
    }
}

/// Pull the job id out of `lp`'s "request id is <id> (1 file(s))" reply,
/// falling back to the whole trimmed reply
pub fn parse_job_id(output: &str) -> String {
    output
        .split("request id is ")
        .nth(1)
        .and_then(|rest| rest.split_whitespace().next())
        .unwrap_or_else(|| output.trim())
        .to_string()
}

/// Stands in for a print spooler on platforms without one. Every job fails
/// with [BadgeError::UnsupportedPlatform].
#[derive(Debug, Clone)]
pub struct UnsupportedDispatcher {
    printer: Option<String>,
}

impl PrintDispatcher for UnsupportedDispatcher {
    fn printer(&self) -> Option<&str> {
        self.printer.as_deref()
    }

    fn print_file(&self, _path: &Path) -> Result<PrintJob, BadgeError> {
        Err(BadgeError::UnsupportedPlatform)
    }

    fn list_printers(&self) -> Result<String, BadgeError> {
        Err(BadgeError::UnsupportedPlatform)
    }
}

/// The dispatcher for the platform this was built for
pub fn system_dispatcher(printer: Option<String>) -> Box<dyn PrintDispatcher> {
    if cfg!(unix) {
        Box::new(LpDispatcher::new(printer))
    } else {
        Box::new(UnsupportedDispatcher { printer })
    }
}
