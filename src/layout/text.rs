use crate::font::Font;
use crate::units::Pt;

/// Calculate the width of a given string of text given the font and font size
pub fn width_of_text(text: &str, font: &Font, size: Pt) -> Pt {
    text.chars().map(|ch| font.advance(ch, size)).sum()
}

/// Where a line of text has to start so that it is centred on `center_x`
pub fn centred_start(text: &str, font: &Font, size: Pt, center_x: Pt) -> Pt {
    center_x - width_of_text(text, font, size) / 2.0
}

/// Greedily packs whitespace-separated words into lines no wider than
/// `max_width`, as measured by `measure`. Words are never split: a word wider
/// than `max_width` sits on a line of its own and overflows it.
pub fn wrap_words<M>(text: &str, max_width: Pt, measure: M) -> Vec<String>
where
    M: Fn(&str) -> Pt,
{
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{current} {word}");
        if measure(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    /// every character is 1pt wide
    fn chars(text: &str) -> Pt {
        Pt(text.chars().count() as f32)
    }

    #[test]
    fn words_accumulate_until_the_line_is_full() {
        let lines = wrap_words("aaa bbb ccc dd", Pt(7.0), chars);
        assert_eq!(lines, vec!["aaa bbb", "ccc dd"]);
    }

    #[test]
    fn exact_fit_stays_on_the_line() {
        let lines = wrap_words("abc def", Pt(7.0), chars);
        assert_eq!(lines, vec!["abc def"]);
    }

    #[test]
    fn overlong_word_gets_its_own_line() {
        let lines = wrap_words("a abcdefghij b", Pt(5.0), chars);
        assert_eq!(lines, vec!["a", "abcdefghij", "b"]);
    }

    #[test]
    fn whitespace_runs_collapse() {
        let lines = wrap_words("  a \t b\n c  ", Pt(100.0), chars);
        assert_eq!(lines, vec!["a b c"]);
        assert!(wrap_words("   ", Pt(100.0), chars).is_empty());
    }

    #[test]
    fn centred_text_is_balanced_around_the_centre() {
        let font = Font::from(crate::StandardFont::Helvetica);
        let start = centred_start("WW", &font, Pt(10.0), Pt(100.0));
        assert!((start.0 - (100.0 - 9.44)).abs() < 1e-3);
    }
}
