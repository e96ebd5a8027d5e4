use super::*;
use crate::draw::list::DrawCmd;

fn size() -> ViewportSize {
    ViewportSize::new(1080.0, 1920.0).unwrap()
}

#[test]
fn seeds_follow_index_hashes() {
    let f = SnowflakeSpec::new(3);
    assert_eq!(f.x, 0.24); // (3*37+13) % 100
    assert_eq!(f.y, 0.88); // (3*53+29) % 100
    assert_eq!(f.size, 0.58);
    assert_eq!(f.rotation, 142.0);
    assert_eq!(f.alpha, 0.04);
    assert_eq!(f.branches, 12);
    assert_eq!(f.complexity, 1);
    assert_eq!(f.cloud, 3);
}

#[test]
fn tints_favour_multiples_of_five_then_seven() {
    assert_eq!(SnowflakeSpec::new(0).color, Color::from_argb(0xFFE3F2FD));
    assert_eq!(SnowflakeSpec::new(35).color, Color::from_argb(0xFFE3F2FD));
    assert_eq!(SnowflakeSpec::new(14).color, Color::from_argb(0xFFF0F8FF));
    assert_eq!(SnowflakeSpec::new(1).color, Color::WHITE);
}

#[test]
fn branch_and_complexity_ranges() {
    for spec in snowflake_specs() {
        assert!([6, 8, 12].contains(&spec.branches));
        assert!((1..=3).contains(&spec.complexity));
    }
    assert_eq!(snowflake_specs().len(), SNOWFLAKE_COUNT);
}

#[test]
fn flakes_fall_between_cloud_and_ground() {
    let size = size();
    for ms in (0..18_000).step_by(900) {
        let phases = TimePhases::at(ms);
        for spec in snowflake_specs() {
            let s = spec.state(size, &phases);
            let cloud_y = CLOUDS[spec.cloud].y * size.height;
            assert!(s.center.y >= cloud_y + 0.03 * size.width - 1e-9);
            assert!(s.center.y <= size.height * 0.85 + 1e-9);
            assert!((0.0..=0.85).contains(&s.alpha));
            assert!(s.visible(size));
        }
    }
}

#[test]
fn alpha_fades_near_both_ends_of_the_fall() {
    let size = size();
    let spec = SnowflakeSpec::new(0);
    // spec.y == 0.29, so the fall restarts when sky phase reaches 0.71
    let start = TimePhases {
        sky: 0.71,
        ..TimePhases::default()
    };
    assert!(spec.state(size, &start).alpha < 1e-9);
    let middle = TimePhases {
        sky: 0.21,
        ..TimePhases::default()
    };
    let s = spec.state(size, &middle);
    assert!((s.alpha - (0.5 + 0.35 * spec.alpha)).abs() < 1e-9);
}

#[test]
fn glyph_command_count_tracks_complexity() {
    let size = size();
    let phases = TimePhases::at(0);
    for index in [0, 1, 2] {
        let spec = SnowflakeSpec::new(index);
        let state = spec.state(size, &phases);
        let mut list = DrawList::new();
        draw_snowflake(&mut list, &spec, &state);
        let n = spec.branches as usize;
        let c = spec.complexity as usize;
        let tips = if c > 1 { n } else { 0 };
        assert_eq!(list.len(), n + n * c * 2 + tips + 1);
        let rot = rotate_about_deg(state.rotation, state.center);
        assert!(list.iter().all(|cmd| cmd.transform() == rot));
        assert!(matches!(list.commands().last(), Some(DrawCmd::Fill { .. })));
    }
}
