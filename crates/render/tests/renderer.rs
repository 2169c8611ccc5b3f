use render::{RenderConfig, RenderError, Renderer, Scene};
use sdf::{
    BulbFractal, ColorSource, JuliaFractal, Plane, Ray, Rgb, Sphere, Surface, Torus, Vec3,
};

fn busy_scene() -> Scene {
    let mut scene = Scene::new();
    scene.push(
        Plane::new(Vec3::new(0.0, -2.0, 0.0), Vec3::Y)
            .unwrap()
            .with_color_source(ColorSource::checker(Rgb::WHITE, Rgb::new(40, 40, 40), 1.0)),
    );
    scene.push(Surface::union(
        Sphere::new(Vec3::new(-1.0, 0.0, 6.0), 1.2).with_color(Rgb::RED),
        Sphere::new(Vec3::new(0.5, 0.0, 6.5), 1.2).with_color(Rgb::BLUE),
    ));
    scene.push(Torus::new(Vec3::new(3.0, 0.0, 8.0), 1.0, 0.3).with_color(Rgb::YELLOW));
    scene.push(BulbFractal::new(Vec3::new(-3.5, 1.0, 9.0)).with_scale(0.8));
    scene.push(JuliaFractal::new(Vec3::new(3.5, 2.0, 10.0), Vec3::new(-0.2, 0.6, 0.2)));
    scene
}

fn camera() -> Ray {
    Ray::new(Vec3::new(0.0, 0.5, -2.0), Vec3::Z).unwrap()
}

fn config(width: u32, height: u32, workers: usize) -> RenderConfig {
    RenderConfig {
        workers: Some(workers),
        ..RenderConfig::default()
    }
    .with_size(width, height)
}

#[test]
fn test_parallel_matches_serial_byte_for_byte() {
    let scene = busy_scene();
    for workers in [1, 3, 4, 8] {
        let mut renderer = Renderer::new(config(37, 23, workers)).unwrap();
        let parallel = renderer.render(&scene, &camera()).unwrap().clone();
        let serial = renderer.render_serial(&scene, &camera()).unwrap();
        assert_eq!(
            parallel.as_bytes(),
            serial.as_bytes(),
            "{workers} workers diverged from the serial frame"
        );
    }
}

#[test]
fn test_more_workers_than_rows() {
    let scene = busy_scene();
    let mut wide = Renderer::new(config(16, 3, 8)).unwrap();
    let mut single = Renderer::new(config(16, 3, 1)).unwrap();
    let a = wide.render(&scene, &camera()).unwrap().clone();
    let b = single.render(&scene, &camera()).unwrap();
    assert_eq!(&a, b);
}

#[test]
fn test_miss_writes_background_and_hit_is_shaded() {
    let mut scene = Scene::new();
    scene.push(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0).with_color(Rgb::WHITE));
    let mut renderer = Renderer::new(config(21, 21, 2)).unwrap();
    let frame = renderer
        .render(&scene, &Ray::new(Vec3::ZERO, Vec3::Z).unwrap())
        .unwrap();

    assert_eq!(frame.pixel(0, 0), Some(Rgb::new(50, 50, 50)));

    // Center pixel hits the sphere head on: normal is -Z.
    let light = RenderConfig::default().light;
    let brightness = (Vec3::new(0.0, 0.0, -1.0).dot(light) + 0.3).clamp(0.0, 1.0);
    let expected = Rgb::WHITE.scaled(brightness);
    assert_eq!(frame.pixel(10, 10), Some(expected));
}

#[test]
fn test_resize_reallocates_before_next_frame() {
    let scene = busy_scene();
    let mut renderer = Renderer::new(config(8, 8, 2)).unwrap();
    renderer.render(&scene, &camera()).unwrap();
    renderer.resize(12, 5);
    let frame = renderer.render(&scene, &camera()).unwrap();
    assert_eq!((frame.width(), frame.height()), (12, 5));
    assert_eq!(frame.as_bytes().len(), 12 * 5 * 3);
    assert_eq!(renderer.config().width, 12);
}

#[test]
fn test_degenerate_light_is_rejected() {
    let mut scene = Scene::new();
    scene.push(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0));
    let mut renderer = Renderer::new(RenderConfig {
        light: Vec3::ZERO,
        ..config(4, 4, 2)
    })
    .unwrap();
    let err = renderer.render(&scene, &camera()).unwrap_err();
    assert!(matches!(err, RenderError::Math(_)));
}
