use super::{wrap, FontFamily, TextMeasure};
use crate::units::Pt;

/// Size every field falls back to once it runs past four lines
pub const CRAMPED_SIZE: Pt = Pt(6.0);

/// How a company or title field shrinks as it takes more lines
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FieldStyle {
    pub family: FontFamily,
    /// Size the field is first wrapped at
    pub start: Pt,
    /// Size when the first wrap took more than three lines
    pub over_three: Pt,
    /// Size when the first wrap took more than two lines
    pub over_two: Pt,
}

pub const COMPANY: FieldStyle = FieldStyle {
    family: FontFamily::Regular,
    start: Pt(15.0),
    over_three: Pt(12.0),
    over_two: Pt(13.0),
};

pub const TITLE: FieldStyle = FieldStyle {
    family: FontFamily::Italic,
    start: Pt(14.0),
    over_three: Pt(11.0),
    over_two: Pt(12.0),
};

impl FieldStyle {
    /// The size to re-wrap at, given how many lines the first wrap produced
    pub fn shrink_size(&self, lines: usize) -> Pt {
        match lines {
            n if n > 4 => CRAMPED_SIZE,
            n if n > 3 => self.over_three,
            n if n > 2 => self.over_two,
            _ => self.start,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldLayout {
    pub family: FontFamily,
    pub size: Pt,
    pub lines: Vec<String>,
}

/// Wrap a field at its starting size, then wrap it once more at the size that
/// line count calls for
pub fn layout_field<M: TextMeasure + ?Sized>(
    text: &str,
    style: &FieldStyle,
    max_width: Pt,
    metrics: &M,
) -> FieldLayout {
    let first = wrap(text, style.family, style.start, max_width, metrics);
    let size = style.shrink_size(first.len());
    let lines = if size == style.start {
        first
    } else {
        wrap(text, style.family, size, max_width, metrics)
    };

    FieldLayout {
        family: style.family,
        size,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge::test_metrics::half_em;

    const MAX: Pt = Pt(255.6);

    #[test]
    fn shrink_staircase() {
        assert_eq!(COMPANY.shrink_size(1), Pt(15.0));
        assert_eq!(COMPANY.shrink_size(2), Pt(15.0));
        assert_eq!(COMPANY.shrink_size(3), Pt(13.0));
        assert_eq!(COMPANY.shrink_size(4), Pt(12.0));
        assert_eq!(COMPANY.shrink_size(5), CRAMPED_SIZE);
        assert_eq!(COMPANY.shrink_size(6), CRAMPED_SIZE);
        assert_eq!(TITLE.shrink_size(3), Pt(12.0));
        assert_eq!(TITLE.shrink_size(4), Pt(11.0));
        assert_eq!(TITLE.shrink_size(9), CRAMPED_SIZE);
    }

    #[test]
    fn short_fields_keep_their_starting_size() {
        let layout = layout_field("Acme Ltd", &COMPANY, MAX, &half_em);
        assert_eq!(layout.size, Pt(15.0));
        assert_eq!(layout.family, FontFamily::Regular);
        assert_eq!(layout.lines, vec!["ACME LTD"]);
    }

    #[test]
    fn three_lines_drop_one_step_and_rewrap() {
        // 34 characters fit per line at 15pt, 39 at 13pt
        let word = "w".repeat(30);
        let text = format!("{word} {word} {word}");
        let layout = layout_field(&text, &COMPANY, MAX, &half_em);
        assert_eq!(layout.size, Pt(13.0));
        assert_eq!(layout.lines.len(), 3);
    }

    #[test]
    fn many_lines_collapse_to_the_smallest_size() {
        let text = vec!["abcdefghijklmnopqrstuvwxyz"; 6].join(" ");
        let layout = layout_field(&text, &TITLE, MAX, &half_em);
        assert_eq!(layout.size, CRAMPED_SIZE);
        assert_eq!(layout.family, FontFamily::Italic);
        // 85 characters per line at 6pt
        assert_eq!(layout.lines.len(), 2);
    }

    #[test]
    fn size_never_grows_as_text_gets_longer() {
        let words: Vec<String> = lipsum::lipsum(120)
            .split_whitespace()
            .map(str::to_string)
            .collect();

        for style in [COMPANY, TITLE] {
            let mut previous = style.start;
            for n in 1..=words.len() {
                let text = words[..n].join(" ");
                let layout = layout_field(&text, &style, MAX, &half_em);
                assert!(
                    layout.size <= previous,
                    "{n} words set at {} after {}",
                    layout.size,
                    previous
                );
                previous = layout.size;
            }
            assert_eq!(previous, CRAMPED_SIZE);
        }
    }
}
