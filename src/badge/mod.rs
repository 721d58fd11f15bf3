//! The badge layout engine.
//!
//! [`compute_badge_layout`] maps the four free-form badge fields onto positioned,
//! sized lines of text for a fixed badge template:
//!
//! 1. the name is set as large as possible, split over two balanced lines when it
//!    has to be ([`layout_name`])
//! 2. company and title are wrapped, then re-wrapped at a smaller size when they
//!    take too many lines ([`layout_field`])
//! 3. line spacing is tightened as the line count grows, and compressed uniformly
//!    when the content would still run into the ticket type ([`plan_spacing`])
//! 4. the ticket type is always set at its fixed baseline
//!
//! The engine is a pure function. Font metrics come from a [`TextMeasure`], so the
//! same layout can be computed for any rendering backend; the crate's PDF backend
//! provides [`FontMetrics`].
//!
//! ```
//! use badge_print::badge::{compute_badge_layout, BadgeFonts, BadgeGeometry, BadgeRequest};
//! use badge_print::Document;
//!
//! let mut doc = Document::default();
//! let fonts = BadgeFonts::standard(&mut doc);
//!
//! let request = BadgeRequest::new("Fiona Tan", "Jesselton Pixel", "Software Engineer", "Delegate");
//! let layout = compute_badge_layout(&request, &BadgeGeometry::default(), &fonts.metrics(&doc));
//! assert_eq!(layout.blocks.len(), 4);
//! assert!(layout.warnings.is_empty());
//! ```

mod geometry;
mod name;
mod render;
mod shrink;
mod spacing;

pub use geometry::*;
pub use name::*;
pub use render::*;
pub use shrink::*;
pub use spacing::*;

use crate::layout::wrap_words;
use crate::units::Pt;
use crate::BadgeError;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Size of the ticket-type line
pub const TICKET_TYPE_SIZE: Pt = Pt(24.0);

fn default_ticket_type() -> String {
    "Delegate".to_string()
}

/// The text printed on one badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeRequest {
    /// Attendee display name
    pub name: String,
    pub company: String,
    /// Job title
    pub title: String,
    /// Short category label, e.g. "VIP" or "Delegate"
    #[serde(default = "default_ticket_type")]
    pub ticket_type: String,
}

impl BadgeRequest {
    pub fn new<N, C, T, K>(name: N, company: C, title: T, ticket_type: K) -> BadgeRequest
    where
        N: Into<String>,
        C: Into<String>,
        T: Into<String>,
        K: Into<String>,
    {
        BadgeRequest {
            name: name.into(),
            company: company.into(),
            title: title.into(),
            ticket_type: ticket_type.into(),
        }
    }

    /// Reject blank required fields. The layout engine itself accepts anything;
    /// this is for callers taking requests from the outside world.
    pub fn validate(&self) -> Result<(), BadgeError> {
        let fields: [(&'static str, &String); 4] = [
            ("name", &self.name),
            ("company", &self.company),
            ("title", &self.title),
            ("ticket_type", &self.ticket_type),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(BadgeError::MissingField(*field)),
            None => Ok(()),
        }
    }
}

/// The faces a badge is set in
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    Regular,
    Bold,
    Italic,
}

/// Which badge field a block of text belongs to
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Name,
    Company,
    Title,
    TicketType,
}

/// One line of text, centred horizontally on `center_x` with its baseline at
/// `baseline_y`. Coordinates are PDF coordinates: the origin is the bottom-left
/// corner of the badge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBlock {
    /// Already upper-cased and wrapped to a single line
    pub text: String,
    pub font_family: FontFamily,
    pub font_size: Pt,
    pub center_x: Pt,
    pub baseline_y: Pt,
    pub section: Section,
}

/// Something about the layout a human may want to look at. None of these stop a
/// badge from being printed.
#[derive(Debug, Clone, PartialEq, Serialize, Display)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutWarning {
    /// A single word is wider than the space available for its field
    #[display("{section:?} line {text:?} is {width}pt wide, over the {max_width}pt limit")]
    LineTooWide {
        section: Section,
        text: String,
        width: Pt,
        max_width: Pt,
    },
    /// Line spacing was scaled down to fit the content above the ticket type
    #[display("spacing compressed by {factor:.3} ({needed}pt needed, {available}pt available)")]
    Compressed {
        factor: f32,
        needed: Pt,
        available: Pt,
    },
    /// The geometry leaves no room between the content anchor and the ticket type
    #[display("no vertical room for badge content ({available}pt available)")]
    DegenerateGeometry { available: Pt },
}

/// Positioned text for one badge, ready to hand to a renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult {
    /// Name, company and title lines from top to bottom, then the ticket type
    pub blocks: Vec<TextBlock>,
    /// The line spacing the blocks were placed with
    pub spacing: Spacing,
    pub warnings: Vec<LayoutWarning>,
}

impl LayoutResult {
    /// The blocks belonging to one field
    pub fn section(&self, section: Section) -> impl Iterator<Item = &TextBlock> {
        self.blocks.iter().filter(move |block| block.section == section)
    }

    /// True when some text will visibly spill out of its space
    pub fn overflowed(&self) -> bool {
        self.warnings.iter().any(|warning| {
            matches!(
                warning,
                LayoutWarning::LineTooWide { .. } | LayoutWarning::DegenerateGeometry { .. }
            )
        })
    }
}

/// Supplies rendered text widths to the layout engine
pub trait TextMeasure {
    /// Width of `text` set in `family` at `size`
    fn measure_width(&self, text: &str, family: FontFamily, size: Pt) -> Pt;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, FontFamily, Pt) -> Pt,
{
    fn measure_width(&self, text: &str, family: FontFamily, size: Pt) -> Pt {
        self(text, family, size)
    }
}

/// Upper-case `text` and wrap it greedily into lines no wider than `max_width`
pub fn wrap<M: TextMeasure + ?Sized>(
    text: &str,
    family: FontFamily,
    size: Pt,
    max_width: Pt,
    metrics: &M,
) -> Vec<String> {
    let upper = text.to_uppercase();
    wrap_words(&upper, max_width, |line| metrics.measure_width(line, family, size))
}

/// Lines of one field, all set in the same face and size
struct Lines<'a> {
    text: &'a [String],
    family: FontFamily,
    size: Pt,
    section: Section,
}

impl<'a> Lines<'a> {
    fn new(text: &'a [String], family: FontFamily, size: Pt, section: Section) -> Lines<'a> {
        Lines {
            text,
            family,
            size,
            section,
        }
    }
}

/// Stack lines downwards from `y`, returning the baseline below the last line
fn place(blocks: &mut Vec<TextBlock>, lines: Lines, center_x: Pt, mut y: Pt, step: Pt) -> Pt {
    for line in lines.text {
        blocks.push(TextBlock {
            text: line.clone(),
            font_family: lines.family,
            font_size: lines.size,
            center_x,
            baseline_y: y,
            section: lines.section,
        });
        y -= step;
    }
    y
}

/// Lay out a badge. Never fails: text that cannot fit is still placed, and the
/// problem is reported through [`LayoutResult::warnings`].
pub fn compute_badge_layout<M: TextMeasure + ?Sized>(
    request: &BadgeRequest,
    geometry: &BadgeGeometry,
    metrics: &M,
) -> LayoutResult {
    let name = layout_name(&request.name, geometry.name_max_width(), metrics);
    let company = layout_field(&request.company, &COMPANY, geometry.max_text_width(), metrics);
    let title = layout_field(&request.title, &TITLE, geometry.max_text_width(), metrics);

    let counts = LineCounts {
        name: name.lines.len(),
        company: company.lines.len(),
        title: title.lines.len(),
    };
    let plan = plan_spacing(counts, name.size, geometry.available_height());
    let spacing = plan.spacing;

    let center_x = geometry.center_x();
    let mut blocks: Vec<TextBlock> = Vec::with_capacity(counts.total() + 1);

    let top = geometry.content_top_y();
    let name_lines = Lines::new(&name.lines, FontFamily::Bold, name.size, Section::Name);
    let y = place(&mut blocks, name_lines, center_x, top, spacing.name_line);
    let company_lines = Lines::new(&company.lines, company.family, company.size, Section::Company);
    let y = place(&mut blocks, company_lines, center_x, y - spacing.section_gap, spacing.line);
    let title_lines = Lines::new(&title.lines, title.family, title.size, Section::Title);
    place(&mut blocks, title_lines, center_x, y - spacing.section_gap, spacing.line);

    blocks.push(TextBlock {
        text: request.ticket_type.trim().to_uppercase(),
        font_family: FontFamily::Bold,
        font_size: TICKET_TYPE_SIZE,
        center_x,
        baseline_y: geometry.ticket_type_y,
        section: Section::TicketType,
    });

    let mut warnings: Vec<LayoutWarning> = plan.warning.into_iter().collect();
    for block in blocks.iter() {
        let max_width = match block.section {
            Section::Name => geometry.name_max_width(),
            _ => geometry.max_text_width(),
        };
        let width = metrics.measure_width(&block.text, block.font_family, block.font_size);
        if width > max_width {
            warnings.push(LayoutWarning::LineTooWide {
                section: block.section,
                text: block.text.clone(),
                width,
                max_width,
            });
        }
    }

    LayoutResult {
        blocks,
        spacing,
        warnings,
    }
}
