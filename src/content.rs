//! Content stream rendering for pages.

use crate::colour::Colour;
use crate::font::Font;
use crate::page::{PageContents, SpanFont, SpanLayout};
use id_arena::Arena;
use std::io::Write;

/// Converts high-level page contents into low-level PDF operators.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(
    contents: &[PageContents],
    fonts: &Arena<Font>,
) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => {
                render_text_spans(&mut content, spans, fonts)?;
            }
            PageContents::RawContent(c) => {
                write!(&mut content, "q\n")?;
                content.write_all(c.as_slice())?;
                write!(&mut content, "\nQ\n")?;
            }
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(
    content: &mut Vec<u8>,
    spans: &[SpanLayout],
    fonts: &Arena<Font>,
) -> Result<(), std::io::Error> {
    let Some(first) = spans.first() else {
        return Ok(());
    };

    write!(content, "q\n")?;

    let mut current_font: SpanFont = first.font;
    let mut current_colour: Colour = first.colour;

    write_font(content, current_font)?;
    write_colour(content, current_colour)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write_font(content, current_font)?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write_colour(content, current_colour)?;
        }

        // spans referencing a font from another document have nothing to encode with
        let Some(font) = fonts.get(current_font.id) else {
            continue;
        };

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        write!(content, "<{}> Tj\n", font.encode_hex(&span.text))?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_font(content: &mut Vec<u8>, font: SpanFont) -> Result<(), std::io::Error> {
    write!(content, "/F{} {} Tf\n", font.id.index(), font.size)
}

#[allow(clippy::write_with_newline)]
fn write_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    write!(content, "{} g\n", colour.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;
    use crate::font::StandardFont;
    use crate::units::Pt;

    #[test]
    fn text_spans_become_text_objects() {
        let mut fonts: Arena<Font> = Arena::new();
        let bold = fonts.alloc(StandardFont::HelveticaBold.into());
        let contents = vec![PageContents::Text(vec![SpanLayout {
            text: "VIP".to_string(),
            font: SpanFont {
                id: bold,
                size: Pt(24.0),
            },
            colour: colours::INK,
            coords: (Pt(10.0), Pt(90.0)),
        }])];

        let rendered = render_contents(&contents, &fonts).expect("renders");
        let rendered = String::from_utf8(rendered).expect("ascii content");
        assert_eq!(
            rendered,
            "q\n/F0 24 Tf\n0.1 g\nBT\n10 90 Td\n<564950> Tj\nET\nQ\n"
        );
    }

    #[test]
    fn raw_content_is_isolated_in_graphics_state() {
        let fonts: Arena<Font> = Arena::new();
        let contents = vec![PageContents::RawContent(b"0 0 10 10 re S".to_vec())];
        let rendered = render_contents(&contents, &fonts).expect("renders");
        assert_eq!(rendered, b"q\n0 0 10 10 re S\nQ\n");
    }
}
