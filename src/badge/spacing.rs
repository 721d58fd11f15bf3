use super::LayoutWarning;
use crate::units::{In, Pt};
use serde::Serialize;

/// Vertical distances between baselines
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Spacing {
    /// Between consecutive name lines
    pub name_line: Pt,
    /// Between the name, company and title sections
    pub section_gap: Pt,
    /// Between consecutive company or title lines
    pub line: Pt,
}

/// Spacing steps keyed on the total line count, tightest first. Values are
/// inches: name line, section gap, line.
const STAIRCASE: [(usize, f32, f32, f32); 5] = [
    (12, 0.30, 0.15, 0.15),
    (10, 0.32, 0.20, 0.17),
    (8, 0.34, 0.25, 0.18),
    (6, 0.36, 0.30, 0.19),
    (5, 0.38, 0.35, 0.20),
];

const BASE: (f32, f32, f32) = (0.40, 0.40, 0.20);

/// Name line spacing never drops below these, so tall names don't collide
const LARGE_NAME_FLOOR: f32 = 0.35;
const SMALL_NAME_FLOOR: f32 = 0.28;

impl Spacing {
    fn from_inches((name_line, section_gap, line): (f32, f32, f32)) -> Spacing {
        Spacing {
            name_line: In(name_line).into(),
            section_gap: In(section_gap).into(),
            line: In(line).into(),
        }
    }

    /// The spacing step for a badge with `total` lines of name, company and title
    pub fn for_lines(total: usize) -> Spacing {
        let step = STAIRCASE
            .iter()
            .find(|(threshold, ..)| total >= *threshold)
            .map(|&(_, name_line, section_gap, line)| (name_line, section_gap, line))
            .unwrap_or(BASE);
        Spacing::from_inches(step)
    }

    /// Every distance multiplied by `factor`
    pub fn scaled(self, factor: f32) -> Spacing {
        Spacing {
            name_line: self.name_line * factor,
            section_gap: self.section_gap * factor,
            line: self.line * factor,
        }
    }

    /// Height taken by blocks with the given line counts, from the first name
    /// baseline to one step below the last title line
    pub fn height_needed(&self, counts: LineCounts) -> Pt {
        self.name_line * counts.name as f32
            + self.section_gap
            + self.line * counts.company as f32
            + self.section_gap
            + self.line * counts.title as f32
    }
}

/// How many lines each section was wrapped into
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct LineCounts {
    pub name: usize,
    pub company: usize,
    pub title: usize,
}

impl LineCounts {
    pub fn total(&self) -> usize {
        self.name + self.company + self.title
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpacingPlan {
    pub spacing: Spacing,
    pub warning: Option<LayoutWarning>,
}

/// Pick line spacing for the given line counts, then compress it uniformly if
/// the content would not fit in `available`
pub fn plan_spacing(counts: LineCounts, name_size: Pt, available: Pt) -> SpacingPlan {
    let mut spacing = Spacing::for_lines(counts.total());
    let floor = if name_size >= Pt(20.0) {
        LARGE_NAME_FLOOR
    } else {
        SMALL_NAME_FLOOR
    };
    spacing.name_line = spacing.name_line.max(In(floor).into());

    if *available <= 0.0 {
        return SpacingPlan {
            spacing,
            warning: Some(LayoutWarning::DegenerateGeometry { available }),
        };
    }

    let needed = spacing.height_needed(counts);
    if needed <= available {
        return SpacingPlan {
            spacing,
            warning: None,
        };
    }

    let factor = available.ratio(needed);
    SpacingPlan {
        spacing: spacing.scaled(factor),
        warning: Some(LayoutWarning::Compressed {
            factor,
            needed,
            available,
        }),
    }
}
