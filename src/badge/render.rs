//! Drawing a [LayoutResult] onto a PDF page.

use super::{compute_badge_layout, BadgeGeometry, BadgeRequest, FontFamily, LayoutResult, Section, TextMeasure};
use crate::colour::colours;
use crate::font::{Font, StandardFont};
use crate::info::Info;
use crate::layout::{centred_start, width_of_text};
use crate::page::{Page, SpanFont, SpanLayout};
use crate::units::Pt;
use crate::{BadgeError, Document};
use id_arena::{Arena, Id};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Font files to set badges in. Any family left unset uses the matching
/// base-14 Helvetica face.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontPaths {
    pub regular: Option<PathBuf>,
    pub bold: Option<PathBuf>,
    pub italic: Option<PathBuf>,
}

/// The fonts of one [Document] that badge text is set in
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BadgeFonts {
    pub regular: Id<Font>,
    pub bold: Id<Font>,
    pub italic: Id<Font>,
}

impl BadgeFonts {
    /// Register the Helvetica family with the document
    pub fn standard(doc: &mut Document) -> BadgeFonts {
        BadgeFonts {
            regular: doc.add_font(StandardFont::Helvetica),
            bold: doc.add_font(StandardFont::HelveticaBold),
            italic: doc.add_font(StandardFont::HelveticaOblique),
        }
    }

    /// Register the configured font files with the document, falling back to
    /// Helvetica for any family without one
    pub fn install(doc: &mut Document, paths: &FontPaths) -> Result<BadgeFonts, BadgeError> {
        let mut load = |path: &Option<PathBuf>, fallback: StandardFont| -> Result<Id<Font>, BadgeError> {
            let font = match path {
                Some(path) => Font::load_file(path)?,
                None => Font::from(fallback),
            };
            debug!("using font {} ({:?})", font.name(), fallback);
            Ok(doc.add_font(font))
        };

        Ok(BadgeFonts {
            regular: load(&paths.regular, StandardFont::Helvetica)?,
            bold: load(&paths.bold, StandardFont::HelveticaBold)?,
            italic: load(&paths.italic, StandardFont::HelveticaOblique)?,
        })
    }

    pub fn id(&self, family: FontFamily) -> Id<Font> {
        match family {
            FontFamily::Regular => self.regular,
            FontFamily::Bold => self.bold,
            FontFamily::Italic => self.italic,
        }
    }

    /// Measure text with these fonts
    pub fn metrics<'a>(&'a self, doc: &'a Document) -> FontMetrics<'a> {
        FontMetrics {
            fonts: &doc.fonts,
            ids: self,
        }
    }
}

/// [TextMeasure] backed by the fonts a badge will actually be rendered with
pub struct FontMetrics<'a> {
    fonts: &'a Arena<Font>,
    ids: &'a BadgeFonts,
}

impl TextMeasure for FontMetrics<'_> {
    fn measure_width(&self, text: &str, family: FontFamily, size: Pt) -> Pt {
        self.fonts
            .get(self.ids.id(family))
            .map(|font| width_of_text(text, font, size))
            .unwrap_or_default()
    }
}

/// Draw every block of `layout` onto a new page at the end of `doc`
pub fn render_badge(
    doc: &mut Document,
    fonts: &BadgeFonts,
    geometry: &BadgeGeometry,
    layout: &LayoutResult,
) -> Id<Page> {
    let mut page = Page::new(geometry.page_size(), None);

    for block in layout.blocks.iter() {
        let id = fonts.id(block.font_family);
        let x = match doc.fonts.get(id) {
            Some(font) => centred_start(&block.text, font, block.font_size, block.center_x),
            None => block.center_x,
        };
        page.add_span(SpanLayout {
            text: block.text.clone(),
            font: SpanFont {
                id,
                size: block.font_size,
            },
            colour: colours::INK,
            coords: (x, block.baseline_y),
        });
    }

    doc.add_page(page)
}

/// A rendered badge, along with the layout it was rendered from
#[derive(Debug, Clone)]
pub struct RenderedBadge {
    pub pdf: Vec<u8>,
    pub layout: LayoutResult,
}

/// Lay out and render a single badge into a complete PDF
pub fn badge_pdf(
    request: &BadgeRequest,
    geometry: &BadgeGeometry,
    font_paths: &FontPaths,
) -> Result<RenderedBadge, BadgeError> {
    geometry.validate()?;

    let mut doc = Document::default();
    let fonts = BadgeFonts::install(&mut doc, font_paths)?;
    let layout = compute_badge_layout(request, geometry, &fonts.metrics(&doc));

    for section in [Section::Name, Section::Company, Section::Title] {
        if let Some(block) = layout.section(section).next() {
            debug!(
                "{section:?}: {} line(s) at {}pt",
                layout.section(section).count(),
                block.font_size
            );
        }
    }
    debug!("spacing: {:?}", layout.spacing);
    for warning in layout.warnings.iter() {
        warn!("{}: {warning}", request.name.trim());
    }

    render_badge(&mut doc, &fonts, geometry, &layout);
    doc.set_info(
        Info::new()
            .title(format!("Badge: {}", request.name.trim()))
            .subject(request.ticket_type.trim())
            .clone(),
    );

    Ok(RenderedBadge {
        pdf: doc.render()?,
        layout,
    })
}
