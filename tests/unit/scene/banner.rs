use super::*;
use crate::draw::list::DrawCmd;
use crate::draw::text::EstimatedMetrics;

/// Every glyph one em wide, so positions are easy to reason about.
struct Monospace;

impl TextMetrics for Monospace {
    fn advance(&self, text: &str, size: f64) -> f64 {
        text.chars().count() as f64 * size
    }
}

fn size() -> ViewportSize {
    ViewportSize::new(1000.0, 2000.0).unwrap()
}

#[test]
fn hat_centres_on_first_anchor_glyph() {
    let layout = BannerLayout::new(size(), "ABCDC", 'C', &Monospace);
    let fs = 80.0;
    assert_eq!(layout.font_size, fs);
    let hat = layout.hat.unwrap();
    // text spans 500 - 200 .. 500 + 200; third glyph centre at 300 + 2.5 * 80
    assert!((hat.center_x - 500.0).abs() < 1e-9);
    assert!((hat.base_y - (200.0 - fs * 0.75 - fs * 0.05)).abs() < 1e-9);
    assert!((hat.width - fs * 0.95).abs() < 1e-12);
}

#[test]
fn missing_anchor_means_no_hat() {
    let layout = BannerLayout::new(size(), "Happy Holidays", 'C', &Monospace);
    assert!(layout.hat.is_none());

    let mut list = DrawList::new();
    draw(&mut list, size(), "Happy Holidays", 'C', &Monospace);
    assert_eq!(list.len(), 1);
    assert!(matches!(list.commands()[0], DrawCmd::Text { .. }));
}

#[test]
fn non_ascii_prefix_is_measured_by_chars() {
    let layout = BannerLayout::new(size(), "éC", 'C', &Monospace);
    let hat = layout.hat.unwrap();
    // two glyphs centred on 500: the anchor occupies 500..580
    assert!((hat.center_x - 540.0).abs() < 1e-9);
}

#[test]
fn hat_is_drawn_before_the_text() {
    let mut list = DrawList::new();
    draw(&mut list, size(), "Merry Christmas!", 'C', &EstimatedMetrics);
    assert_eq!(list.len(), 8);
    let (text, hat) = list.commands().split_last().unwrap();
    assert!(hat.iter().all(|c| matches!(c, DrawCmd::Fill { .. })));
    match text {
        DrawCmd::Text { run, .. } => {
            assert_eq!(run.text, "Merry Christmas!");
            assert_eq!(run.anchor, Point::new(500.0, 200.0));
            let shadow = run.shadow.unwrap();
            assert_eq!(shadow.offset, Vec2::new(0.0, 4.0 * 1000.0 / 1080.0));
        }
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn hat_shadow_is_offset_by_reference_pixels() {
    let mut list = DrawList::new();
    draw(&mut list, size(), "Merry Christmas!", 'C', &EstimatedMetrics);
    let t = list.commands()[0].transform();
    assert_eq!(
        t,
        Affine::translate((2.0 * 1000.0 / 1080.0, 3.0 * 1000.0 / 1080.0))
    );
    assert_eq!(list.commands()[1].transform(), Affine::IDENTITY);
}
