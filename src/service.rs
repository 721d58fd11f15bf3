//! The operations the badge printer offers, tied to one [Settings] and one
//! [PrintDispatcher].

use crate::badge::{badge_pdf, compute_badge_layout, BadgeFonts, BadgeRequest, LayoutResult};
use crate::config::Settings;
use crate::print::{PrintDispatcher, PrintJob};
use crate::testcard::test_card_pdf;
use crate::ticket::{sample_tickets, TicketPayload};
use crate::{BadgeError, Document};
use chrono::Local;
use log::info;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Health {
    pub ok: bool,
    pub printer: Option<String>,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrinterList {
    pub raw: String,
}

/// A PDF written to disk without printing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PdfWritten {
    pub ok: bool,
    pub pdf: PathBuf,
}

/// A badge written to disk, along with how it was laid out
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    pub ok: bool,
    pub pdf: PathBuf,
    pub layout: LayoutResult,
}

/// A PDF written to disk and accepted by the printer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Printed {
    pub ok: bool,
    pub printed: bool,
    pub pdf: PathBuf,
    pub print_job: PrintJob,
    pub target_printer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SamplePreview {
    pub description: String,
    pub pdf: PathBuf,
    pub warnings: Vec<String>,
}

pub struct BadgeService {
    settings: Settings,
    dispatcher: Box<dyn PrintDispatcher>,
}

impl BadgeService {
    pub fn new(settings: Settings, dispatcher: Box<dyn PrintDispatcher>) -> BadgeService {
        BadgeService {
            settings,
            dispatcher,
        }
    }

    /// Report the configuration the service is running with
    pub fn health(&self) -> Health {
        Health {
            ok: true,
            printer: self.dispatcher.printer().map(str::to_string),
            output_dir: self.settings.output_dir.clone(),
        }
    }

    pub fn printers(&self) -> Result<PrinterList, BadgeError> {
        Ok(PrinterList {
            raw: self.dispatcher.list_printers()?,
        })
    }

    /// Write a test card to the output directory
    pub fn pdf_test(&self) -> Result<PdfWritten, BadgeError> {
        let now = Local::now();
        let dir = self.settings.ensure_output_dir()?;
        let path = dir.join(format!("test-ticket-{}.pdf", now.format("%Y%m%d-%H%M%S")));
        write_pdf(&path, &test_card_pdf(now)?)?;
        Ok(PdfWritten { ok: true, pdf: path })
    }

    /// Write a test card and send it to the printer
    pub fn print_test(&self) -> Result<Printed, BadgeError> {
        let printer = self.target_printer()?;
        let written = self.pdf_test()?;
        self.dispatch(written.pdf, printer)
    }

    /// Lay out a request with the configured fonts and geometry, without
    /// rendering it
    pub fn layout(&self, request: &BadgeRequest) -> Result<LayoutResult, BadgeError> {
        self.settings.geometry.validate()?;
        let mut doc = Document::default();
        let fonts = BadgeFonts::install(&mut doc, &self.settings.fonts)?;
        Ok(compute_badge_layout(
            request,
            &self.settings.geometry,
            &fonts.metrics(&doc),
        ))
    }

    /// Render a ticket's badge into the output directory without printing it
    pub fn preview(&self, ticket: &TicketPayload) -> Result<Preview, BadgeError> {
        ticket.validate()?;
        let dir = self.settings.ensure_output_dir()?;
        let path = dir.join(ticket.file_name(Local::now()));
        let rendered = badge_pdf(&ticket.badge, &self.settings.geometry, &self.settings.fonts)?;
        write_pdf(&path, &rendered.pdf)?;

        Ok(Preview {
            ok: true,
            pdf: path,
            layout: rendered.layout,
        })
    }

    /// Render a ticket's badge into the output directory and print it
    pub fn print_ticket(&self, ticket: &TicketPayload) -> Result<Printed, BadgeError> {
        let printer = self.target_printer()?;
        let preview = self.preview(ticket)?;
        self.dispatch(preview.pdf, printer)
    }

    /// Render the built-in sample badges into `dir`, or the output directory
    pub fn preview_samples(&self, dir: Option<&Path>) -> Result<Vec<SamplePreview>, BadgeError> {
        let dir = match dir {
            Some(dir) => {
                fs::create_dir_all(dir)?;
                dir
            }
            None => self.settings.ensure_output_dir()?,
        };

        sample_tickets()
            .into_iter()
            .map(|sample| -> Result<SamplePreview, BadgeError> {
                let rendered = badge_pdf(
                    &sample.ticket.badge,
                    &self.settings.geometry,
                    &self.settings.fonts,
                )?;
                let path = dir.join(sample.file_name);
                write_pdf(&path, &rendered.pdf)?;
                Ok(SamplePreview {
                    description: sample.description.to_string(),
                    pdf: path,
                    warnings: rendered.layout.warnings.iter().map(ToString::to_string).collect(),
                })
            })
            .collect()
    }

    fn target_printer(&self) -> Result<String, BadgeError> {
        self.dispatcher
            .printer()
            .map(str::to_string)
            .ok_or(BadgeError::PrinterNotConfigured)
    }

    fn dispatch(&self, pdf: PathBuf, target_printer: String) -> Result<Printed, BadgeError> {
        let print_job = self.dispatcher.print_file(&pdf)?;
        Ok(Printed {
            ok: true,
            printed: true,
            pdf,
            print_job,
            target_printer,
        })
    }
}

fn write_pdf(path: &Path, pdf: &[u8]) -> Result<(), BadgeError> {
    fs::write(path, pdf)?;
    info!("wrote {} ({} bytes)", path.display(), pdf.len());
    Ok(())
}
