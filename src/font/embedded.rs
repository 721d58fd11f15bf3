use crate::refs::{ObjectReferences, RefType};
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::HashMap;

/// A TrueType or OpenType face embedded in its entirety in the generated PDF and
/// addressed through an `Identity-H` CID font, so large faces will noticeably
/// grow the output.
pub struct EmbeddedFont {
    face: OwnedFace,
}

impl EmbeddedFont {
    pub fn new(face: OwnedFace) -> EmbeddedFont {
        EmbeddedFont { face }
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    /// The full name of the face, if it declares one
    pub fn name(&self) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    fn family(&self) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Glyph used for `ch`, falling back to the replacement character, then
    /// '?', then `.notdef`
    pub fn glyph_id(&self, ch: char) -> u16 {
        let face = self.face();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
            .map(|gid| gid.0)
            .unwrap_or(0)
    }

    /// Advance width of a character in 1/1000 em
    pub fn advance(&self, ch: char) -> f32 {
        let face = self.face();
        let scaling = 1000.0 / face.units_per_em() as f32;
        face.glyph_hor_advance(GlyphId(self.glyph_id(ch)))
            .unwrap_or_default() as f32
            * scaling
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) {
        let font_id = refs.gen(RefType::Font(font_index));
        let cid_font_id = self.write_cid(refs, font_index, writer);
        let to_unicode_id = self.write_to_unicode(refs, font_index, writer);

        let mut font = writer.type0_font(font_id);
        font.base_font(Name(format!("F{font_index}").as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font_id);
        font.to_unicode(to_unicode_id);
    }

    fn write_cid(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) -> Ref {
        let font_descriptor_id = self.write_descriptor(refs, font_index, writer);

        let id = refs.gen(RefType::CidFont(font_index));

        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(format!("F{font_index}").as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(font_descriptor_id);

        let scaling = 1000.0 / self.face().units_per_em() as f32;

        let mut id_widths: Vec<(u16, f32)> = self
            .glyph_metrics()
            .into_iter()
            .map(|(gid, (width, _))| (gid, width as f32 * scaling))
            .collect();
        id_widths.sort_by_key(|(gid, _)| *gid);

        // the most popular width becomes the default
        let mut widths_counts: HashMap<u32, usize> = HashMap::new();
        for (_, width) in id_widths.iter() {
            *widths_counts.entry(width.to_bits()).or_insert(0) += 1;
        }
        let most_common_width = widths_counts
            .iter()
            .max_by_key(|(_, &count)| count)
            .map(|(&bits, _)| f32::from_bits(bits))
            .unwrap_or(1000.0);

        let mut widths = cid_font.widths();
        let mut runs = id_widths.into_iter();
        if let Some((first_gid, first_width)) = runs.next() {
            let mut start_gid = first_gid;
            let mut current: Vec<f32> = vec![first_width];
            for (gid, width) in runs {
                if (gid - start_gid) as usize != current.len() {
                    widths.consecutive(start_gid, current.drain(..));
                    start_gid = gid;
                }
                current.push(width);
            }
            widths.consecutive(start_gid, current);
        }
        widths.finish();

        cid_font.default_width(most_common_width);
        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));

        id
    }

    fn write_descriptor(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let data_id = refs.gen(RefType::FontData(font_index));
        writer
            .stream(data_id, self.face.as_slice())
            .pair(Name(b"Length1"), self.face.as_slice().len() as i32);

        let face = self.face();
        let metrics = self.glyph_metrics();
        let max_width = metrics.values().map(|&(w, _)| w).max().unwrap_or_default();
        let max_height = metrics.values().map(|&(_, h)| h).max().unwrap_or_default();
        let sum_width: usize = metrics.values().map(|&(w, _)| w as usize).sum();
        let avg_width = sum_width as f32 / metrics.len().max(1) as f32;
        let scaling = 1000.0 / face.units_per_em() as f32;

        let id = refs.gen(RefType::FontDescriptor(font_index));
        let name = self.name().unwrap_or_else(|| format!("F{font_index}"));
        let family = self.family().unwrap_or_else(|| name.clone());

        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(name.as_bytes()));
        descriptor.family(Str(family.as_bytes()));
        descriptor.weight(face.weight().to_number());

        let mut flags = FontFlags::empty();
        if face.is_monospaced() {
            flags.set(FontFlags::FIXED_PITCH, true);
        }
        if face.is_italic() {
            flags.set(FontFlags::ITALIC, true);
        }
        descriptor.flags(flags);

        descriptor.bbox(pdf_writer::Rect {
            x1: 0.0,
            y1: 0.0,
            x2: max_width as f32 * scaling,
            y2: max_height as f32 * scaling,
        });
        let italic_angle: Option<f32> = face.italic_angle().into();
        descriptor.italic_angle(italic_angle.unwrap_or_default());
        descriptor.ascent(face.ascender() as f32 * scaling);
        descriptor.descent(face.descender() as f32 * scaling);
        descriptor.leading(face.line_gap() as f32 * scaling);
        let cap_height = face.capital_height().unwrap_or_default();
        descriptor.cap_height(cap_height as f32 * scaling);
        descriptor.x_height(face.x_height().unwrap_or(cap_height) as f32 * scaling);
        // stem widths are not exposed by ttf-parser
        descriptor.stem_v(80.0);
        descriptor.avg_width(avg_width * scaling);
        descriptor.max_width(max_width as f32 * scaling);
        descriptor.missing_width(max_width as f32 * scaling);
        descriptor.font_file2(data_id);

        id
    }

    /// Every glyph reachable from a unicode cmap subtable, with the first
    /// character that maps onto it
    fn glyph_chars(&self) -> HashMap<u16, char> {
        let mut map: HashMap<u16, char> = HashMap::new();
        let Some(cmap) = self.face().tables().cmap else {
            return map;
        };

        for subtable in cmap.subtables.into_iter().filter(|table| table.is_unicode()) {
            subtable.codepoints(|codepoint: u32| {
                if let Ok(ch) = char::try_from(codepoint) {
                    if let Some(index) = subtable.glyph_index(codepoint).filter(|index| index.0 > 0)
                    {
                        map.entry(index.0).or_insert(ch);
                    }
                }
            });
        }

        map
    }

    /// (advance, height) in font units per glyph id
    fn glyph_metrics(&self) -> HashMap<u16, (u16, i16)> {
        let face = self.face();
        self.glyph_chars()
            .into_keys()
            .filter_map(|gid| {
                let glyph = GlyphId(gid);
                let advance = face.glyph_hor_advance(glyph)?;
                let height = face
                    .glyph_bounding_box(glyph)
                    .map(|bbox| bbox.y_max - bbox.y_min)
                    .unwrap_or(1000);
                Some((gid, (advance, height)))
            })
            .collect()
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::ToUnicode(font_index));

        let mut map = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo\n\
             << /Registry (Adobe)\n\
             /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n\
             <0000> <FFFF>\n\
             endcodespacerange\n",
        );

        let mut ids: Vec<(u16, char)> = self.glyph_chars().into_iter().collect();
        ids.sort_by_key(|&(id, _)| id);

        // bfchar blocks hold at most 100 entries sharing a high byte
        let mut blocks: Vec<Vec<(u16, char)>> = Vec::new();
        let mut current: Vec<(u16, char)> = Vec::new();
        let mut high_byte: u8 = 0;
        for (id, ch) in ids {
            if (id >> 8) as u8 != high_byte || current.len() >= 100 {
                if !current.is_empty() {
                    blocks.push(std::mem::take(&mut current));
                }
                high_byte = (id >> 8) as u8;
            }
            current.push((id, ch));
        }
        if !current.is_empty() {
            blocks.push(current);
        }

        for block in blocks {
            map.push_str(&format!("{} beginbfchar\n", block.len()));
            for (id, ch) in block {
                map.push_str(&format!("<{id:04x}> <{:04x}>\n", u32::from(ch)));
            }
            map.push_str("endbfchar\n");
        }

        map.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            map.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        id
    }
}
