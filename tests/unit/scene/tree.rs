use super::*;
use crate::animation::phase::TimePhases;
use crate::config::scene_config::SceneConfig;
use crate::draw::list::DrawCmd;
use crate::draw::text::EstimatedMetrics;
use crate::foundation::core::{Affine, ViewportSize};
use crate::interaction::light_mode::LightMode;

fn geo() -> TreeGeometry {
    TreeGeometry::new(ViewportSize::new(1080.0, 1920.0).unwrap())
}

#[test]
fn outline_elements_follow_scallop_count() {
    let g = geo();
    for i in 0..g.num_layers {
        let per_side = g.scallops(i) / 2;
        assert_eq!(foliage_outline(&g, i).elements().len(), 3 + 2 * per_side);
    }
}

#[test]
fn outline_reaches_the_layer_corners() {
    let g = geo();
    let i = 4;
    let path = foliage_outline(&g, i);
    let per_side = g.scallops(i) / 2;
    let start = path.elements()[0].end_point().unwrap();
    assert_eq!(start, Point::new(g.center_x, g.layer_top(i)));

    let corner = path.elements()[per_side].end_point().unwrap();
    assert!((corner.x - (g.center_x + g.layer_width(i) / 2.0)).abs() < 1e-9);
    assert!((corner.y - g.layer_bottom(i)).abs() < 1e-9);
}

#[test]
fn cane_stem_ends_half_a_height_below_center() {
    let canes = candy_canes(&geo());
    for cane in canes {
        let path = cane_path(&cane);
        let end = path.elements().last().and_then(|el| el.end_point()).unwrap();
        assert_eq!(end, Point::new(cane.center.x, cane.center.y + cane.height / 2.0));
    }
    assert_eq!(canes[0].rotation, -16.0);
    assert_eq!(canes[1].rotation, 12.0);
}

#[test]
fn tree_layer_wraps_everything_but_the_shadow_in_sway() {
    let cfg = SceneConfig::default();
    let phases = TimePhases::at(1500);
    let ctx = FrameContext {
        size: ViewportSize::new(1080.0, 1920.0).unwrap(),
        phases,
        mode: LightMode::Rainbow,
        config: &cfg,
        metrics: &EstimatedMetrics,
    };
    let list = layer(&ctx);
    // topper 6, shadow 4, trunk 7, foliage 10 x 2 + 5 streaks, canes 2 x 2
    assert_eq!(list.len(), 6 + 4 + 7 + 25 + 4);

    let sway = geo().sway_transform(&phases);
    assert_ne!(sway, Affine::IDENTITY);
    for cmd in &list.commands()[6..10] {
        assert_eq!(cmd.transform(), Affine::IDENTITY);
    }
    for cmd in &list.commands()[10..10 + 7 + 25] {
        assert_eq!(cmd.transform(), sway);
    }
    let last = list.commands().last().unwrap();
    assert!(matches!(last, DrawCmd::Stroke { style, .. } if style.dash.is_some()));
}
