use super::{wrap, FontFamily, TextMeasure};
use crate::units::Pt;

/// Size a name is set at when it fits on one line
pub const NAME_SIZE_SINGLE: Pt = Pt(26.0);
/// Size of a name balanced over two lines
pub const NAME_SIZE_SPLIT: Pt = Pt(20.0);
/// Size of a name that had to be wrapped like ordinary text
pub const NAME_SIZE_WRAPPED: Pt = Pt(16.0);

/// The size and lines chosen for a name
#[derive(Debug, Clone, PartialEq)]
pub struct NameLayout {
    pub size: Pt,
    pub lines: Vec<String>,
}

/// Choose a size and line split for a name.
///
/// A name that fits on one line at [NAME_SIZE_SINGLE] is kept whole. Otherwise
/// it is split into the two most evenly sized halves that both fit at
/// [NAME_SIZE_SPLIT], preferring splits that leave at least two words on the
/// first line. Names that cannot be split that way are wrapped greedily at
/// [NAME_SIZE_WRAPPED].
pub fn layout_name<M: TextMeasure + ?Sized>(name: &str, max_width: Pt, metrics: &M) -> NameLayout {
    let upper = name.to_uppercase();
    let words: Vec<&str> = upper.split_whitespace().collect();
    if words.is_empty() {
        return NameLayout {
            size: NAME_SIZE_SINGLE,
            lines: Vec::new(),
        };
    }

    let whole = words.join(" ");
    if metrics.measure_width(&whole, FontFamily::Bold, NAME_SIZE_SINGLE) <= max_width {
        return NameLayout {
            size: NAME_SIZE_SINGLE,
            lines: vec![whole],
        };
    }

    let split = balanced_split(&words, 2, max_width, metrics)
        .or_else(|| balanced_split(&words, 1, max_width, metrics));
    if let Some((first, second)) = split {
        return NameLayout {
            size: NAME_SIZE_SPLIT,
            lines: vec![first, second],
        };
    }

    NameLayout {
        size: NAME_SIZE_WRAPPED,
        lines: wrap(&whole, FontFamily::Bold, NAME_SIZE_WRAPPED, max_width, metrics),
    }
}

/// The two-line split, with at least `min_first` words on the first line, whose
/// halves differ least in width. Both halves must fit; the leftmost of equally
/// balanced splits wins.
fn balanced_split<M: TextMeasure + ?Sized>(
    words: &[&str],
    min_first: usize,
    max_width: Pt,
    metrics: &M,
) -> Option<(String, String)> {
    let mut best: Option<(Pt, usize)> = None;

    for i in min_first..words.len() {
        let first = words[..i].join(" ");
        let second = words[i..].join(" ");
        let w1 = metrics.measure_width(&first, FontFamily::Bold, NAME_SIZE_SPLIT);
        let w2 = metrics.measure_width(&second, FontFamily::Bold, NAME_SIZE_SPLIT);
        if w1 > max_width || w2 > max_width {
            continue;
        }

        let score = (w1 - w2).abs();
        match best {
            Some((best_score, _)) if best_score <= score => {}
            _ => best = Some((score, i)),
        }
    }

    best.map(|(_, i)| (words[..i].join(" "), words[i..].join(" ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge::test_metrics::half_em;

    /// 3.65in, the default name width
    const MAX: Pt = Pt(262.8);

    #[test]
    fn short_name_stays_on_one_line() {
        // 20 characters at 26pt: 260pt
        let layout = layout_name("abcdefghij klmnopqrs", MAX, &half_em);
        assert_eq!(layout.size, NAME_SIZE_SINGLE);
        assert_eq!(layout.lines, vec!["ABCDEFGHIJ KLMNOPQRS"]);
    }

    #[test]
    fn whitespace_is_normalised() {
        let layout = layout_name("  ann \t lee ", MAX, &half_em);
        assert_eq!(layout.lines, vec!["ANN LEE"]);
    }

    #[test]
    fn first_of_equally_balanced_splits_wins() {
        let layout = layout_name("aaaa bbbb cccc dddd eeee", MAX, &half_em);
        assert_eq!(layout.size, NAME_SIZE_SPLIT);
        assert_eq!(layout.lines, vec!["AAAA BBBB", "CCCC DDDD EEEE"]);
    }

    #[test]
    fn two_words_on_the_first_line_beat_a_better_balance() {
        let name = format!("{} b c", "a".repeat(20));
        let layout = layout_name(&name, MAX, &half_em);
        assert_eq!(layout.size, NAME_SIZE_SPLIT);
        assert_eq!(layout.lines, vec![format!("{} B", "A".repeat(20)), "C".to_string()]);
    }

    #[test]
    fn single_word_first_line_when_nothing_else_fits() {
        let name = format!("{} bbbb cccc", "a".repeat(24));
        let layout = layout_name(&name, MAX, &half_em);
        assert_eq!(layout.size, NAME_SIZE_SPLIT);
        assert_eq!(layout.lines, vec!["A".repeat(24), "BBBB CCCC".to_string()]);
    }

    #[test]
    fn unsplittable_names_are_wrapped_small() {
        let name = format!("{} {}", "x".repeat(28), "y".repeat(28));
        let layout = layout_name(&name, MAX, &half_em);
        assert_eq!(layout.size, NAME_SIZE_WRAPPED);
        assert_eq!(layout.lines, vec!["X".repeat(28), "Y".repeat(28)]);

        let layout = layout_name(&"z".repeat(40), MAX, &half_em);
        assert_eq!(layout.size, NAME_SIZE_WRAPPED);
        assert_eq!(layout.lines.len(), 1);
    }

    #[test]
    fn empty_name_has_no_lines() {
        let layout = layout_name("   ", MAX, &half_em);
        assert!(layout.lines.is_empty());
    }
}
