use super::*;
use kurbo::Shape as _;

use crate::draw::list::{DrawCmd, Shape};

fn setup() -> (ViewportSize, TreeGeometry) {
    let size = ViewportSize::new(1080.0, 1920.0).unwrap();
    (size, TreeGeometry::new(size))
}

#[test]
fn gifts_sit_on_the_hill() {
    let (size, geo) = setup();
    for spec in &GIFTS {
        let gift = spec.resolve(size, &geo);
        let ground = ground_y_at(size, gift.center_x());
        assert_eq!(gift.bottom, ground);
        assert!((1920.0 * 0.80..=1920.0 * 0.85).contains(&gift.bottom));
        assert!((gift.top() - (gift.bottom - gift.height)).abs() < 1e-12);
    }
}

#[test]
fn resolved_dimensions_follow_tree_width() {
    let (size, geo) = setup();
    let tw = geo.tree_width;
    let red = GIFTS[0].resolve(size, &geo);
    assert!((red.left - (geo.center_x - 0.32 * tw)).abs() < 1e-9);
    assert!((red.width - 0.22 * tw).abs() < 1e-9);
    assert!((red.height - red.width * 1.05).abs() < 1e-9);
    assert!((red.depth() - red.width * 0.35).abs() < 1e-12);
}

#[test]
fn top_face_is_skewed_by_depth() {
    let (size, geo) = setup();
    let gift = GIFTS[2].resolve(size, &geo);
    let face = gift.top_face();
    let back_left = face.elements()[1].end_point().unwrap();
    let d = gift.depth();
    assert!((back_left.x - (gift.left + 0.7 * d)).abs() < 1e-9);
    assert!((back_left.y - (gift.top() - 0.5 * d)).abs() < 1e-9);
}

#[test]
fn mid_depth_band_is_centred() {
    let (size, geo) = setup();
    let gift = GIFTS[1].resolve(size, &geo);
    let d = Vec2::new(0.6 * gift.depth(), -0.4 * gift.depth());
    let (u0, u1) = gift.mid_depth(d);
    assert!(((u0 + u1) / 2.0 - 0.5).abs() < 1e-12);
    assert!(((u1 - u0) * d.hypot() - gift.ribbon_width()).abs() < 1e-9);
}

#[test]
fn each_gift_draws_eighteen_commands() {
    let (size, geo) = setup();
    let mut list = DrawList::new();
    draw(&mut list, size, &geo);
    assert_eq!(list.len(), 3 * 18);

    // front face follows the four shadow ovals
    match &list.commands()[4] {
        DrawCmd::Fill {
            shape: Shape::Rect { rect },
            ..
        } => {
            let gift = GIFTS[0].resolve(size, &geo);
            assert_eq!(*rect, gift.front());
        }
        other => panic!("expected front face, got {other:?}"),
    }
}

#[test]
fn satin_bow_uses_radial_loops_and_plain_bows_are_solid() {
    let (size, geo) = setup();
    let mut red = DrawList::new();
    draw_gift(&mut red, size, &GIFTS[0].resolve(size, &geo));
    let loops = &red.commands()[15..17];
    assert!(loops.iter().all(|c| matches!(
        c,
        DrawCmd::Fill {
            paint: Paint::Radial { .. },
            ..
        }
    )));

    let mut blue = DrawList::new();
    draw_gift(&mut blue, size, &GIFTS[2].resolve(size, &geo));
    assert!(blue.commands()[15..17].iter().all(|c| matches!(
        c,
        DrawCmd::Fill {
            paint: Paint::Solid { .. },
            ..
        }
    )));
}

#[test]
fn top_face_ramp_spans_the_face_bounds() {
    let (size, geo) = setup();
    let gift = GIFTS[1].resolve(size, &geo);
    let mut list = DrawList::new();
    draw_gift(&mut list, size, &gift);
    let bounds = gift.top_face().bounding_box();
    match &list.commands()[5] {
        DrawCmd::Fill {
            paint: Paint::Linear { start, end, .. },
            ..
        } => {
            assert!((start.x - bounds.x0).abs() < 1e-9);
            assert!((end.x - bounds.x1).abs() < 1e-9);
            assert!(end.x > start.x);
        }
        other => panic!("expected top face ramp, got {other:?}"),
    }
}
