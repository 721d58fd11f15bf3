//! A plain card for checking that the printer pipeline works end to end,
//! without any attendee data.

use crate::colour::colours;
use crate::font::StandardFont;
use crate::info::Info;
use crate::layout::{centred_start, Margins};
use crate::page::{Page, SpanFont, SpanLayout};
use crate::pagesize::{self, PageOrientation};
use crate::units::{In, Pt};
use crate::{BadgeError, Document};
use chrono::{DateTime, Local};
use pdf_writer::Content;

pub const HEADING: &str = "Event Badge — TEST";

/// Render the test card, stamped with the time it was generated
pub fn test_card_pdf(at: DateTime<Local>) -> Result<Vec<u8>, BadgeError> {
    let mut doc = Document::default();
    let bold = doc.add_font(StandardFont::HelveticaBold);
    let regular = doc.add_font(StandardFont::Helvetica);

    let mut page = Page::new(
        pagesize::TEST_CARD.landscape(),
        Some(Margins::all(In(0.2))),
    );
    let width = page.width();
    let height = page.height();

    let border = {
        let mut content = Content::new();
        let frame = page.content_box;
        content.rect(
            frame.x1.into(),
            frame.y1.into(),
            frame.width().into(),
            frame.height().into(),
        );
        content.set_stroke_gray(0.0);
        content.set_line_width(1.0);
        content.stroke();
        content
    };
    page.add_content(border);

    let heading_size = Pt(14.0);
    let heading_x = centred_start(
        HEADING,
        &doc.fonts[bold],
        heading_size,
        width / 2.0,
    );
    page.add_span(SpanLayout {
        text: HEADING.to_string(),
        font: SpanFont {
            id: bold,
            size: heading_size,
        },
        colour: colours::BLACK,
        coords: (heading_x, height - In(0.5).into()),
    });

    page.add_span(SpanLayout {
        text: format!("Generated at: {}", at.format("%Y-%m-%dT%H:%M:%S")),
        font: SpanFont {
            id: regular,
            size: Pt(10.0),
        },
        colour: colours::BLACK,
        coords: (In(0.5).into(), height - In(1.0).into()),
    });

    doc.add_page(page);
    doc.set_info(Info::new().title(HEADING).created(at).clone());
    doc.render()
}
