use sdf::fractal::{MAX_ESTIMATE, MIN_ESTIMATE};
use sdf::{BulbFractal, JuliaFractal, Rgb, Surface, Terrain, Vec3};

fn sample_grid() -> Vec<Vec3> {
    let mut points = Vec::new();
    for i in -8..=8 {
        for j in -8..=8 {
            for k in [-2.5, -0.4, 0.0, 0.3, 1.1, 7.0] {
                points.push(Vec3::new(f64::from(i) * 0.3, f64::from(j) * 0.3, k));
            }
        }
    }
    points
}

#[test]
fn test_fractal_estimates_stay_in_tracer_range() {
    let surfaces = [
        Surface::from(BulbFractal::new(Vec3::ZERO)),
        Surface::from(BulbFractal::new(Vec3::new(0.5, 0.0, 0.0)).with_power(3.0)),
        Surface::from(JuliaFractal::new(Vec3::ZERO, Vec3::new(-0.2, 0.6, 0.2))),
        Surface::from(JuliaFractal::new(Vec3::ZERO, Vec3::new(0.4, -0.1, 0.0)).with_scale(2.0)),
    ];
    for surface in &surfaces {
        for p in sample_grid() {
            let d = surface.distance(p);
            assert!(
                (MIN_ESTIMATE..=MAX_ESTIMATE).contains(&d),
                "{:?} estimate {d} at {p:?} out of range",
                surface.kind()
            );
        }
    }
}

#[test]
fn test_fractal_estimates_are_deterministic() {
    let julia = JuliaFractal::new(Vec3::ZERO, Vec3::new(-0.2, 0.6, 0.2));
    for p in sample_grid() {
        assert_eq!(julia.distance(p).to_bits(), julia.distance(p).to_bits());
    }
}

#[test]
fn test_terrain_is_reproducible_across_instances() {
    let build = || {
        Terrain::new(Vec3::ZERO, 4.0, 0.15, 42)
            .with_octaves(6, 2.0, 0.5)
            .with_warp(1.5)
    };
    let (a, b) = (build(), build());
    for p in sample_grid() {
        assert_eq!(a.height_at(p.x, p.z).to_bits(), b.height_at(p.x, p.z).to_bits());
    }
}

#[test]
fn test_terrain_warp_and_ridged_change_heights() {
    let base = Terrain::new(Vec3::ZERO, 4.0, 0.15, 9);
    let warped = base.clone().with_warp(2.0);
    let ridged = base.clone().with_ridged(true);
    let disabled = base.clone().with_warp(0.0);

    let differs = |t: &Terrain| {
        sample_grid()
            .iter()
            .any(|p| t.height_at(p.x, p.z) != base.height_at(p.x, p.z))
    };
    assert!(differs(&warped), "warp should move the heightfield");
    assert!(differs(&ridged), "ridged mode should reshape the heightfield");
    assert!(!differs(&disabled), "zero warp strength is a no-op");
}

#[test]
fn test_terrain_heights_are_bounded_by_amplitude() {
    let terrain = Terrain::new(Vec3::ZERO, 2.0, 0.3, 3).with_octaves(4, 2.0, 0.5);
    // geometric series of gains: 1 + 0.5 + 0.25 + 0.125
    let bound = 2.0 * 1.875;
    for p in sample_grid() {
        let h = terrain.height_at(p.x * 10.0, p.z * 10.0);
        assert!((0.0..bound).contains(&h), "height {h} outside [0, {bound})");
    }
}

#[test]
fn test_octave_count_is_clamped() {
    let many = Terrain::new(Vec3::ZERO, 1.0, 0.2, 1).with_octaves(40, 2.0, 0.5);
    let eight = Terrain::new(Vec3::ZERO, 1.0, 0.2, 1).with_octaves(8, 2.0, 0.5);
    let none = Terrain::new(Vec3::ZERO, 1.0, 0.2, 1).with_octaves(0, 2.0, 0.5);
    let one = Terrain::new(Vec3::ZERO, 1.0, 0.2, 1).with_octaves(1, 2.0, 0.5);
    assert_eq!(many.height_at(3.3, -1.2), eight.height_at(3.3, -1.2));
    assert_eq!(none.height_at(3.3, -1.2), one.height_at(3.3, -1.2));
}

#[test]
fn test_terrain_surface_uses_its_color_source() {
    let terrain = Surface::from(
        Terrain::new(Vec3::ZERO, 1.0, 0.2, 1)
            .with_color_source(sdf::ColorSource::checker(Rgb::WHITE, Rgb::BLACK, 2.0)),
    );
    assert_eq!(terrain.color(Vec3::new(1.0, 0.0, 1.0)), Rgb::WHITE);
    assert_eq!(terrain.color(Vec3::new(3.0, 0.0, 1.0)), Rgb::BLACK);
}
