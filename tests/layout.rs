use badge_print::badge::*;
use badge_print::{Document, In, Pt};

fn layout_with_helvetica(request: &BadgeRequest) -> LayoutResult {
    let mut doc = Document::default();
    let fonts = BadgeFonts::standard(&mut doc);
    compute_badge_layout(request, &BadgeGeometry::default(), &fonts.metrics(&doc))
}

fn sizes(layout: &LayoutResult, section: Section) -> Vec<Pt> {
    layout.section(section).map(|block| block.font_size).collect()
}

fn texts(layout: &LayoutResult, section: Section) -> Vec<String> {
    layout.section(section).map(|block| block.text.clone()).collect()
}

fn close(a: Pt, b: Pt) -> bool {
    (a - b).abs() < Pt(1e-3)
}

fn extreme_request() -> BadgeRequest {
    BadgeRequest::new(
        "Professor Emeritus Bartholomew Maximilian Featherstonehaugh Worthington",
        "Lorem ipsum dolor sit amet consectetur adipiscing elit ".repeat(12),
        "Deputy Director, Centre for Industrial Collaboration and Engagement ".repeat(4),
        "vip",
    )
}

#[test]
fn short_badge_keeps_every_starting_size() {
    let layout = layout_with_helvetica(&BadgeRequest::new(
        "Fiona Tan",
        "Jesselton Pixel",
        "Software Engineer",
        "Delegate",
    ));

    assert_eq!(texts(&layout, Section::Name), vec!["FIONA TAN"]);
    assert_eq!(sizes(&layout, Section::Name), vec![Pt(26.0)]);
    assert_eq!(texts(&layout, Section::Company), vec!["JESSELTON PIXEL"]);
    assert_eq!(sizes(&layout, Section::Company), vec![Pt(15.0)]);
    assert_eq!(texts(&layout, Section::Title), vec!["SOFTWARE ENGINEER"]);
    assert_eq!(sizes(&layout, Section::Title), vec![Pt(14.0)]);
    assert_eq!(texts(&layout, Section::TicketType), vec!["DELEGATE"]);
    assert!(layout.warnings.is_empty());
    assert!(close(layout.spacing.section_gap, In(0.4).into()));
}

#[test]
fn long_name_is_balanced_over_two_lines() {
    let layout = layout_with_helvetica(&BadgeRequest::new(
        "Associate Professor Dr. Chin Pei Yee",
        "UMS",
        "Dean",
        "VIP",
    ));

    assert_eq!(
        texts(&layout, Section::Name),
        vec!["ASSOCIATE PROFESSOR", "DR. CHIN PEI YEE"]
    );
    assert_eq!(sizes(&layout, Section::Name), vec![Pt(20.0), Pt(20.0)]);
    assert!(!layout.overflowed());
}

#[test]
fn accented_name_is_measured_like_its_ascii_twin() {
    let geometry = BadgeGeometry::default();
    let mut doc = Document::default();
    let fonts = BadgeFonts::standard(&mut doc);
    let metrics = fonts.metrics(&doc);

    let accented = metrics.measure_width("GÖRAN ÖSTERGÅRD", FontFamily::Bold, NAME_SIZE_SINGLE);
    let plain = metrics.measure_width("GORAN OSTERGARD", FontFamily::Bold, NAME_SIZE_SINGLE);
    assert_eq!(accented, plain);
    assert!(accented > geometry.name_max_width());

    let name = layout_name("Göran Östergård", geometry.name_max_width(), &metrics);
    assert_eq!(name.size, NAME_SIZE_SPLIT);
    assert_eq!(name.lines, vec!["GÖRAN", "ÖSTERGÅRD"]);
}

#[test]
fn company_running_past_four_lines_drops_to_six_points() {
    let layout = layout_with_helvetica(&BadgeRequest::new(
        "Andy Lee",
        "UMS Faculty of Business Economics and Accountancy ".repeat(4),
        "Director",
        "Delegate",
    ));

    let company = sizes(&layout, Section::Company);
    assert!(!company.is_empty());
    assert!(company.iter().all(|size| *size == Pt(6.0)));
    assert_eq!(sizes(&layout, Section::Title), vec![Pt(14.0)]);
}

#[test]
fn extreme_badge_is_compressed_above_the_ticket_type() {
    let geometry = BadgeGeometry::default();
    let layout = layout_with_helvetica(&extreme_request());

    let total = layout.blocks.len() - 1;
    assert!(total >= 12, "only {total} lines");

    let factor = layout
        .warnings
        .iter()
        .find_map(|warning| match warning {
            LayoutWarning::Compressed { factor, .. } => Some(*factor),
            _ => None,
        })
        .expect("content is compressed");
    assert!(factor < 1.0);
    assert!(close(layout.spacing.line, Pt::from(In(0.15)) * factor));
    assert!(close(layout.spacing.section_gap, Pt::from(In(0.15)) * factor));

    let ticket: Vec<&TextBlock> = layout.section(Section::TicketType).collect();
    assert_eq!(ticket.len(), 1);
    assert_eq!(ticket[0].baseline_y, geometry.ticket_type_y);
    assert_eq!(ticket[0].text, "VIP");

    let lowest = layout
        .blocks
        .iter()
        .filter(|block| block.section != Section::TicketType)
        .map(|block| block.baseline_y)
        .fold(geometry.height, |lowest, y| if y < lowest { y } else { lowest });
    assert!(lowest > geometry.ticket_type_y + geometry.ticket_gap - Pt(1e-3));
}

#[test]
fn lines_within_a_section_are_one_step_apart() {
    for request in [
        extreme_request(),
        BadgeRequest::new("Rosnih Binti Othman", "SABAH MAJU JAYA SEKRETARIAT", "PENGARAH SEKRETARIAT SABAH MAJU JAYA, JABATAN KETUA MENTERI SABAH", "VIP"),
    ] {
        let layout = layout_with_helvetica(&request);
        for pair in layout.blocks.windows(2) {
            let (upper, lower) = (&pair[0], &pair[1]);
            assert!(upper.baseline_y > lower.baseline_y);
            if upper.section != lower.section || upper.section == Section::TicketType {
                continue;
            }
            let step = match upper.section {
                Section::Name => layout.spacing.name_line,
                _ => layout.spacing.line,
            };
            assert!(close(upper.baseline_y - lower.baseline_y, step));
        }
    }
}

#[test]
fn lines_fit_unless_reported() {
    let geometry = BadgeGeometry::default();
    let mut doc = Document::default();
    let fonts = BadgeFonts::standard(&mut doc);
    let metrics = fonts.metrics(&doc);
    let request = BadgeRequest::new(
        "Supercalifragilisticexpialidocious",
        "Pneumonoultramicroscopicsilicovolcanoconiosis Holdings",
        "Chief Executive",
        "Delegate",
    );
    let layout = compute_badge_layout(&request, &geometry, &metrics);

    for block in layout.blocks.iter() {
        let max_width = match block.section {
            Section::Name => geometry.name_max_width(),
            _ => geometry.max_text_width(),
        };
        let width = metrics.measure_width(&block.text, block.font_family, block.font_size);
        let reported = layout.warnings.iter().any(|warning| {
            matches!(warning, LayoutWarning::LineTooWide { text, .. } if *text == block.text)
        });
        assert!(width <= max_width || reported, "{} is unreported", block.text);
    }
}

#[test]
fn layout_is_deterministic() {
    let request = extreme_request();
    assert_eq!(layout_with_helvetica(&request), layout_with_helvetica(&request));
}

#[test]
fn layout_serialises_for_inspection() {
    let layout = layout_with_helvetica(&extreme_request());
    let json = serde_json::to_value(&layout).expect("serialises");
    assert_eq!(json["blocks"][0]["section"], "name");
    assert_eq!(json["blocks"][0]["font_family"], "bold");
    assert!(json["warnings"]
        .as_array()
        .expect("warnings array")
        .iter()
        .any(|warning| warning["kind"] == "compressed"));
}
