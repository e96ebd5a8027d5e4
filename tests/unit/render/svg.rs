use super::*;
use crate::draw::text::TextShadow;
use crate::foundation::core::{Point, Rect, Vec2};

fn viewport() -> ViewportSize {
    ViewportSize::new(200.0, 100.0).unwrap()
}

fn document(list: &DrawList) -> String {
    SvgBackend::new(RenderSettings::default())
        .document(list, viewport())
        .unwrap()
}

#[test]
fn numbers_are_trimmed() {
    assert_eq!(num(1.0), "1");
    assert_eq!(num(0.125), "0.125");
    assert_eq!(num(2.50049), "2.5");
    assert_eq!(num(-0.0001), "0");
    assert_eq!(num(100.0), "100");
    assert_eq!(num(f64::NAN), "0");
}

#[test]
fn text_is_escaped() {
    assert_eq!(escape(r#"a<b & "c"'"#), "a&lt;b &amp; &quot;c&quot;&apos;");
}

#[test]
fn empty_list_is_a_bare_document() {
    let svg = document(&DrawList::new());
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg""#));
    assert!(svg.contains(r#"width="200" height="100" viewBox="0 0 200 100""#));
    assert!(!svg.contains("<defs>"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn scale_changes_size_but_not_view_box() {
    let settings = RenderSettings {
        scale: 0.5,
        clear_rgba: Some([10, 20, 30, 255]),
    };
    let svg = SvgBackend::new(settings)
        .document(&DrawList::new(), viewport())
        .unwrap();
    assert!(svg.contains(r#"width="100" height="50" viewBox="0 0 200 100""#));
    assert!(svg.contains(r##"fill="#0a141e""##));
}

#[test]
fn shapes_map_to_native_elements() {
    let mut list = DrawList::new();
    list.circle(Point::new(10.0, 20.0), 5.0, Color::WHITE);
    list.fill(Shape::ellipse(Point::new(50.0, 50.0), 20.0, 10.0), Color::BLACK);
    list.fill(
        Shape::rect(Rect::new(1.0, 2.0, 4.0, 6.0)),
        Color::WHITE.with_alpha(0.5),
    );
    let svg = document(&list);
    assert!(svg.contains(r##"<circle cx="10" cy="20" r="5" fill="#ffffff"/>"##));
    assert!(svg.contains(r#"<ellipse cx="50" cy="50" rx="10" ry="5""#));
    assert!(svg.contains(r#"<rect x="1" y="2" width="3" height="4""#));
    assert!(svg.contains(r#"fill-opacity="0.5""#));
}

#[test]
fn gradients_become_definitions() {
    let mut list = DrawList::new();
    list.fill(
        Shape::rect(Rect::new(0.0, 0.0, 10.0, 10.0)),
        Paint::vertical(0.0, 10.0, &[Color::BLACK, Color::WHITE.with_alpha(0.0)]),
    );
    list.circle(
        Point::new(5.0, 5.0),
        5.0,
        Paint::radial(Point::new(5.0, 5.0), 5.0, &[Color::WHITE, Color::BLACK]),
    );
    let svg = document(&list);
    assert!(svg.contains(r#"<linearGradient id="g0" gradientUnits="userSpaceOnUse""#));
    assert!(svg.contains(r#"<radialGradient id="g1" gradientUnits="userSpaceOnUse""#));
    assert!(svg.contains(r#"stop-opacity="0""#));
    assert!(svg.contains(r##"fill="url(#g0)""##));
    assert!(svg.contains(r##"fill="url(#g1)""##));
}

#[test]
fn strokes_keep_caps_and_dashes() {
    let mut list = DrawList::new();
    list.line(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        StrokeStyle::round(2.0).with_dash(3.0, 1.5),
        Color::WHITE,
    );
    let svg = document(&list);
    assert!(svg.contains(r#"fill="none""#));
    assert!(svg.contains(r#"stroke-linecap="round""#));
    assert!(svg.contains(r#"stroke-dasharray="3 1.5""#));
    assert!(svg.contains(r#"d="M0 0 L10 0""#));
}

#[test]
fn transforms_are_written_as_matrices() {
    let mut list = DrawList::new();
    list.with_transform(Affine::translate((5.0, -2.5)), |l| {
        l.circle(Point::ORIGIN, 1.0, Color::WHITE);
    });
    let svg = document(&list);
    assert!(svg.contains(r#"transform="matrix(1 0 0 1 5 -2.5)""#));
}

#[test]
fn text_shadow_is_a_blurred_copy_drawn_first() {
    let mut list = DrawList::new();
    list.text(TextRun {
        text: "Joy & Cheer".into(),
        anchor: Point::new(100.0, 50.0),
        size: 24.0,
        color: Color::WHITE,
        shadow: Some(TextShadow {
            offset: Vec2::new(0.0, 4.0),
            blur: 8.0,
            color: Color::BLACK.with_alpha(0.5),
        }),
    });
    let svg = SvgBackend::new(RenderSettings::default())
        .with_font_family("Noto Sans")
        .document(&list, viewport())
        .unwrap();
    assert!(svg.contains(r#"<feGaussianBlur stdDeviation="4"/>"#));
    let shadow = svg.find(r##"filter="url(#b0)""##).unwrap();
    let main = svg.rfind("Joy &amp; Cheer").unwrap();
    assert!(shadow < main);
    assert_eq!(svg.matches(r#"text-anchor="middle""#).count(), 2);
    assert!(svg.contains(r#"font-family="Noto Sans""#));
}
