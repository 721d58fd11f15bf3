use crate::{
    font::Font,
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    BadgeError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::render]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub fonts: Arena<Font>,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its id
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// Add a font to the document structure. Fonts are stored "globally" within
    /// the document, such that any page can refer to them by the returned id.
    pub fn add_font<F: Into<Font>>(&mut self, font: F) -> Id<Font> {
        self.fonts.alloc(font.into())
    }

    /// Render the document into PDF bytes. Until this is called, all references
    /// are un-resolved; rendering generates PDF objects and the references
    /// between them.
    pub fn render(self) -> Result<Vec<u8>, BadgeError> {
        let Document {
            info,
            pages,
            page_order,
            fonts,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        // page refs are keyed by position in the document, not arena index
        let page_refs: Vec<Ref> = (0..page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (id, font) in fonts.iter() {
            font.write(&mut refs, id, &mut writer);
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(BadgeError::PageMissing)?;
            page.write(&mut refs, page_index, &fonts, &mut writer)?;
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        Ok(writer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{colours, pagesize, Pt, SpanFont, SpanLayout, StandardFont};

    #[test]
    fn writes_a_pdf_with_referenced_fonts() {
        let mut doc = Document::default();
        let font = doc.add_font(StandardFont::Helvetica);
        let mut page = Page::new(pagesize::BADGE, None);
        page.add_span(SpanLayout {
            text: "HELLO".to_string(),
            font: SpanFont {
                id: font,
                size: Pt(12.0),
            },
            colour: colours::BLACK,
            coords: (Pt(10.0), Pt(10.0)),
        });
        doc.add_page(page);

        let out = doc.render().expect("renders");
        assert!(out.starts_with(b"%PDF-"));

        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("/BaseFont /Helvetica"));
        assert!(text.contains("/WinAnsiEncoding"));
        assert!(text.contains("/Count 1"));
    }

    #[test]
    fn empty_document_still_renders() {
        let bytes = Document::default().render().expect("renders");
        assert!(String::from_utf8_lossy(&bytes).contains("/Count 0"));
    }
}
