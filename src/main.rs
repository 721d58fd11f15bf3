use badge_print::badge::BadgeRequest;
use badge_print::{system_dispatcher, BadgeError, BadgeService, Settings, TicketPayload};
use clap::{Args, Parser, Subcommand};
use log::error;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use std::process::exit;

#[derive(Parser, Debug)]
#[command(author, version, about = "Lay out, render and print event badges")]
struct Cli {
    /// Settings file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Printer to send jobs to
    #[arg(short, long, global = true, env = "PRINTER_NAME")]
    printer: Option<String>,

    /// Directory generated PDFs are written to
    #[arg(short, long, global = true, env = "OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the configured printer and output directory
    Health,
    /// List the printers known to the print spooler
    Printers,
    /// Write a test card without printing it
    PdfTest,
    /// Write a test card and print it
    PrintTest,
    /// Render a badge without printing it
    Preview(TicketArgs),
    /// Render a badge and print it
    PrintTicket(TicketArgs),
    /// Render the sample badges without printing them
    Samples {
        /// Where to write the samples, instead of the output directory
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Show how a badge would be laid out, as JSON
    Layout(TicketArgs),
}

#[derive(Args, Debug)]
struct TicketArgs {
    /// Read the ticket from a JSON file, or `-` for stdin
    #[arg(long, conflicts_with_all = ["name", "company", "title"])]
    json: Option<PathBuf>,

    #[arg(long, default_value = "preview")]
    ticket_id: String,

    /// Attendee name
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    company: Option<String>,

    /// Job title
    #[arg(long)]
    title: Option<String>,

    #[arg(long, default_value = "Delegate")]
    ticket_type: String,
}

impl TicketArgs {
    fn into_ticket(self) -> Result<TicketPayload, BadgeError> {
        let Some(path) = self.json else {
            return Ok(TicketPayload {
                ticket_id: self.ticket_id,
                badge: BadgeRequest::new(
                    self.name.unwrap_or_default(),
                    self.company.unwrap_or_default(),
                    self.title.unwrap_or_default(),
                    self.ticket_type,
                ),
            });
        };

        let source = if path.as_os_str() == "-" {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            source
        } else {
            std::fs::read_to_string(&path)?
        };
        Ok(serde_json::from_str(&source)?)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{}", e);
        exit(1);
    }
}

fn run() -> Result<(), BadgeError> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(printer) = cli.printer {
        settings.printer_name = Some(printer);
    }
    if let Some(dir) = cli.output_dir {
        settings.output_dir = dir;
    }

    let dispatcher = system_dispatcher(settings.printer_name.clone());
    let service = BadgeService::new(settings, dispatcher);

    match cli.command {
        Command::Health => emit(&service.health()),
        Command::Printers => emit(&service.printers()?),
        Command::PdfTest => emit(&service.pdf_test()?),
        Command::PrintTest => emit(&service.print_test()?),
        Command::Preview(args) => emit(&service.preview(&args.into_ticket()?)?),
        Command::PrintTicket(args) => emit(&service.print_ticket(&args.into_ticket()?)?),
        Command::Samples { dir } => emit(&service.preview_samples(dir.as_deref())?),
        Command::Layout(args) => emit(&service.layout(&args.into_ticket()?.badge)?),
    }
}

fn emit<T: Serialize>(value: &T) -> Result<(), BadgeError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
