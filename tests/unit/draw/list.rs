use super::*;
use crate::foundation::color::Color;

#[test]
fn commands_keep_recording_order() {
    let mut list = DrawList::new();
    list.circle(Point::new(1.0, 2.0), 3.0, Color::WHITE);
    list.line(
        Point::ORIGIN,
        Point::new(5.0, 0.0),
        StrokeStyle::new(1.0),
        Color::BLACK,
    );
    assert_eq!(list.len(), 2);
    assert!(matches!(list.commands()[0], DrawCmd::Fill { .. }));
    assert!(matches!(list.commands()[1], DrawCmd::Stroke { .. }));
}

#[test]
fn nested_transforms_compose_and_restore() {
    let mut list = DrawList::new();
    let a = Affine::translate((10.0, 0.0));
    let b = Affine::scale(2.0);
    list.with_transform(a, |l| {
        l.with_transform(b, |l| l.circle(Point::ORIGIN, 1.0, Color::WHITE));
        l.circle(Point::ORIGIN, 1.0, Color::WHITE);
    });
    list.circle(Point::ORIGIN, 1.0, Color::WHITE);

    assert_eq!(list.commands()[0].transform(), a * b);
    assert_eq!(list.commands()[1].transform(), a);
    assert_eq!(list.commands()[2].transform(), Affine::IDENTITY);
    assert_eq!(list.current_transform(), Affine::IDENTITY);
}

#[test]
fn extend_preserves_foreign_transforms() {
    let mut inner = DrawList::new();
    inner.with_transform(Affine::scale(3.0), |l| {
        l.fill(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE)
    });
    let mut outer = DrawList::new();
    outer.extend(inner);
    assert_eq!(outer.commands()[0].transform(), Affine::scale(3.0));
}

#[test]
fn fingerprint_tracks_content() {
    let mut a = DrawList::new();
    a.circle(Point::new(1.0, 1.0), 2.0, Color::WHITE);
    let mut b = DrawList::new();
    b.circle(Point::new(1.0, 1.0), 2.0, Color::WHITE);
    assert_eq!(a.fingerprint(), b.fingerprint());
    b.circle(Point::new(1.0, 1.0), 2.0, Color::WHITE);
    assert_ne!(a.fingerprint(), b.fingerprint());
}

#[test]
fn shapes_report_bounds() {
    let e = Shape::ellipse(Point::new(10.0, 10.0), 4.0, 2.0);
    assert_eq!(e.bounding_box(), Rect::new(8.0, 9.0, 12.0, 11.0));
    let c = Shape::circle(Point::new(0.0, 0.0), 2.0);
    assert_eq!(c.bounding_box(), Rect::new(-2.0, -2.0, 2.0, 2.0));
    assert!(!c.to_path(0.1).elements().is_empty());
}

#[test]
fn serialized_commands_are_tagged() {
    let mut list = DrawList::new();
    list.circle(Point::new(1.0, 2.0), 3.0, Color::WHITE);
    let v = serde_json::to_value(&list).unwrap();
    assert_eq!(v["commands"][0]["op"], "fill");
    assert_eq!(v["commands"][0]["shape"]["kind"], "circle");
    assert_eq!(v["commands"][0]["paint"]["kind"], "solid");
}
