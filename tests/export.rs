//! PNG export smoke tests using temporary directories

use kolamgen::algorithm::bias::SeededBias;
use kolamgen::algorithm::generator::{Algorithm, PatternRequest, generate};
use kolamgen::io::configuration::CANVAS_SIZE_PX;
use kolamgen::io::image::{Theme, export_pattern_png};

#[test]
fn test_export_creates_directories_and_writes_a_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("kolam.png");

    let request = PatternRequest {
        grid_size: 8,
        complexity: 0.5,
        algorithm: Algorithm::SingleStroke,
    };
    let mut bias = SeededBias::new(42);
    let generation = generate(&request, &mut bias, None);

    export_pattern_png(&generation.points, Theme::Dark, None, &path).unwrap();
    assert!(path.exists());

    let loaded = image::open(&path).unwrap();
    assert_eq!(loaded.width(), CANVAS_SIZE_PX);
    assert_eq!(loaded.height(), CANVAS_SIZE_PX);
}

#[test]
fn test_export_accepts_custom_stroke_colors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("colored.png");

    let request = PatternRequest {
        grid_size: 6,
        complexity: 0.4,
        algorithm: Algorithm::MultiStroke,
    };
    let mut bias = SeededBias::new(9);
    let generation = generate(&request, &mut bias, None);

    let stroke = Some([0xef, 0x44, 0x44, 0xff]);
    export_pattern_png(&generation.points, Theme::Light, stroke, &path).unwrap();
    assert!(path.exists());
}
