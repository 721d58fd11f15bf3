//! Event badge printing.
//!
//! Badges are laid out by the [badge] module, rendered into single-page PDFs
//! with a small purpose-built PDF writer, and handed to the system's print
//! spooler through a [PrintDispatcher]. [BadgeService] ties these together for
//! the command line front end.

/// Laying out badge text and rendering it to PDF
pub mod badge;

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod content;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Utility functions and structures to layout objects (mostly text) on pages
pub mod layout;

mod page;
pub use page::*;

pub mod pagesize;

mod print;
pub use print::*;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod service;
pub use service::*;

mod testcard;
pub use testcard::*;

mod ticket;
pub use ticket::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
