use crate::image_pipeline::common::error::ProcessingError;
use crate::image_pipeline::filters::{
    CropFilter, EdgeDetectionFilter, Filter, FilterRegistry, GaussianBlurFilter, GrayscaleFilter,
    NegativeFilter, SharpenFilter,
};
use crate::image_pipeline::raster::{Pixel, Raster};

fn params(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Deterministic colorful test image.
fn sample_raster(height: usize, width: usize) -> Raster {
    let mut raster = Raster::new(height, width, 2835, 2835);
    for y in 0..height {
        for x in 0..width {
            raster.set(
                y,
                x,
                Pixel::from_rgb8(
                    ((x * 37 + y * 11) % 256) as u8,
                    ((x * 5 + y * 53) % 256) as u8,
                    ((x * y * 7 + 90) % 256) as u8,
                ),
            );
        }
    }
    raster
}

fn assert_in_range(raster: &Raster) {
    for pixel in raster.pixels() {
        let (r, g, b) = pixel.channels();
        for channel in [r, g, b] {
            assert!((0.0..=1.0).contains(&channel), "channel out of range: {channel}");
        }
    }
}

fn assert_invalid_parameters(result: crate::image_pipeline::Result<()>, expected: &str) {
    match result {
        Err(ProcessingError::InvalidFilterParameters(name)) => assert_eq!(name, expected),
        other => panic!("expected InvalidFilterParameters({expected}), got {other:?}"),
    }
}

#[test]
fn test_crop_rejects_bad_parameters() {
    let mut raster = sample_raster(8, 8);
    assert_invalid_parameters(CropFilter.apply(&mut raster, &params(&["100"])), "crop");
    assert_invalid_parameters(CropFilter.apply(&mut raster, &params(&["100", "-100"])), "crop");
    assert_invalid_parameters(CropFilter.apply(&mut raster, &params(&["abacaba", "4"])), "crop");
    assert_invalid_parameters(CropFilter.apply(&mut raster, &params(&["1", "2", "3"])), "crop");
    assert_eq!(raster.shape(), (8, 8));
}

#[test]
fn test_crop_large_image() {
    let mut raster = Raster::new(2048, 2048, 11811, 11811);
    CropFilter.apply(&mut raster, &params(&["1999", "999"])).unwrap();
    assert_eq!(raster.shape(), (999, 1999));
    assert_eq!(raster.resolution(), (11811, 11811));
}

#[test]
fn test_crop_keeps_top_left_and_never_enlarges() {
    let original = sample_raster(6, 9);
    let mut raster = original.clone();

    CropFilter.apply(&mut raster, &params(&["4", "100"])).unwrap();
    assert_eq!(raster.shape(), (6, 4));
    assert_eq!(raster.get(5, 3), original.get(5, 3));

    CropFilter.apply(&mut raster, &params(&["100", "1"])).unwrap();
    assert_eq!(raster.shape(), (1, 4));
    assert_eq!(raster.get(0, 2), original.get(0, 2));

    let before = raster.clone();
    CropFilter.apply(&mut raster, &params(&["100", "1"])).unwrap();
    assert_eq!(raster, before);
}

#[test]
fn test_crop_to_zero() {
    let mut raster = sample_raster(3, 3);
    CropFilter.apply(&mut raster, &params(&["0", "0"])).unwrap();
    assert_eq!(raster.shape(), (0, 0));
    assert!(raster.is_empty());
}

#[test]
fn test_grayscale() {
    let mut raster = Raster::from_rows(vec![vec![Pixel::new(1.0, 0.0, 0.0), Pixel::new(0.2, 0.4, 0.6)]]).unwrap();
    assert_invalid_parameters(GrayscaleFilter.apply(&mut raster, &params(&["100"])), "grayscale");

    GrayscaleFilter.apply(&mut raster, &[]).unwrap();
    assert_eq!(raster.get(0, 0), Pixel::new(0.299, 0.299, 0.299));
    let luminance = 0.299 * 0.2 + 0.587 * 0.4 + 0.114 * 0.6;
    assert_eq!(raster.get(0, 1), Pixel::new(luminance, luminance, luminance));
}

#[test]
fn test_grayscale_is_idempotent() {
    let mut raster = sample_raster(7, 5);
    GrayscaleFilter.apply(&mut raster, &[]).unwrap();
    let once = raster.clone();
    GrayscaleFilter.apply(&mut raster, &[]).unwrap();

    assert_eq!(raster, once);
    for pixel in raster.pixels() {
        assert!((pixel.r() - pixel.g()).abs() < 1e-12 && (pixel.g() - pixel.b()).abs() < 1e-12);
    }
}

#[test]
fn test_negative_is_an_involution() {
    let original = sample_raster(6, 6);
    let mut raster = original.clone();
    assert_invalid_parameters(NegativeFilter.apply(&mut raster, &params(&["20"])), "negative");

    NegativeFilter.apply(&mut raster, &[]).unwrap();
    assert_eq!(raster.get(2, 3), {
        let (r, g, b) = original.get(2, 3).channels();
        Pixel::new(1.0 - r, 1.0 - g, 1.0 - b)
    });

    NegativeFilter.apply(&mut raster, &[]).unwrap();
    assert_eq!(raster, original);
}

#[test]
fn test_sharpen() {
    let mut raster = Raster::new(3, 3, 0, 0);
    for pixel in raster.pixels_mut() {
        *pixel = Pixel::new(0.4, 0.4, 0.4);
    }
    raster.set(1, 1, Pixel::new(0.5, 0.5, 0.5));
    assert_invalid_parameters(SharpenFilter.apply(&mut raster, &params(&["100"])), "sharpening");

    SharpenFilter.apply(&mut raster, &[]).unwrap();
    assert_eq!(raster.get(1, 1), Pixel::new(0.9, 0.9, 0.9));
    assert_eq!(raster.get(0, 1), Pixel::new(0.3, 0.3, 0.3));
    assert_eq!(raster.get(0, 0), Pixel::new(0.4, 0.4, 0.4));
}

#[test]
fn test_sharpen_keeps_uniform_image_and_range() {
    let mut uniform = Raster::new(4, 5, 0, 0);
    for pixel in uniform.pixels_mut() {
        *pixel = Pixel::new(0.3, 0.6, 0.9);
    }
    let before = uniform.clone();
    SharpenFilter.apply(&mut uniform, &[]).unwrap();
    assert_eq!(uniform, before);

    let mut raster = sample_raster(9, 9);
    SharpenFilter.apply(&mut raster, &[]).unwrap();
    SharpenFilter.apply(&mut raster, &[]).unwrap();
    assert_in_range(&raster);
}

#[test]
fn test_edge_detection_rejects_bad_parameters() {
    let mut raster = sample_raster(4, 4);
    let edge = EdgeDetectionFilter;
    assert_invalid_parameters(edge.apply(&mut raster, &params(&["100"])), "edge detection");
    assert_invalid_parameters(edge.apply(&mut raster, &params(&["-0.1"])), "edge detection");
    assert_invalid_parameters(edge.apply(&mut raster, &params(&["100", "200"])), "edge detection");
    assert_invalid_parameters(edge.apply(&mut raster, &params(&["high"])), "edge detection");
    assert_invalid_parameters(edge.apply(&mut raster, &[]), "edge detection");
    assert_eq!(raster, sample_raster(4, 4));
}

/// Three identical rows with a concave horizontal profile.
fn ridge_raster() -> Raster {
    let profile = [0.0, 0.5, 0.8, 0.9, 0.8, 0.5, 0.0];
    let row: Vec<Pixel> = profile.iter().map(|&v| Pixel::new(v, v, v)).collect();
    Raster::from_rows(vec![row.clone(), row.clone(), row]).unwrap()
}

fn white_columns(raster: &Raster) -> Vec<usize> {
    let (height, width) = raster.shape();
    (0..width)
        .filter(|&x| (0..height).all(|y| raster.get(y as isize, x as isize) == Pixel::WHITE))
        .collect()
}

#[test]
fn test_edge_detection_applied_twice() {
    let mut raster = ridge_raster();
    let threshold = params(&["0.1"]);

    EdgeDetectionFilter.apply(&mut raster, &threshold).unwrap();
    assert!(raster.pixels().iter().all(|p| *p == Pixel::WHITE || *p == Pixel::BLACK));
    assert_eq!(white_columns(&raster), vec![1, 2, 3, 4, 5]);
    let once = raster.clone();

    EdgeDetectionFilter.apply(&mut raster, &threshold).unwrap();
    assert!(raster.pixels().iter().all(|p| *p == Pixel::WHITE || *p == Pixel::BLACK));
    assert_eq!(white_columns(&raster), vec![1, 5]);
    assert_ne!(raster, once);
}

#[test]
fn test_edge_detection_threshold_bounds() {
    let mut flat = Raster::new(3, 3, 0, 0);
    EdgeDetectionFilter.apply(&mut flat, &params(&["0"])).unwrap();
    assert!(flat.pixels().iter().all(|p| *p == Pixel::WHITE));

    let mut flat = Raster::new(3, 3, 0, 0);
    EdgeDetectionFilter.apply(&mut flat, &params(&["1"])).unwrap();
    assert!(flat.pixels().iter().all(|p| *p == Pixel::BLACK));
}

#[test]
fn test_gaussian_kernel() {
    assert_eq!(GaussianBlurFilter::gaussian_kernel(0.0), vec![1.0]);

    // ceil(1.5) * 6 = 12 on each side
    let kernel = GaussianBlurFilter::gaussian_kernel(1.5);
    assert_eq!(kernel.len(), 25);
    assert!((kernel[12] - 1.0 / ((2.0 * std::f64::consts::PI).sqrt() * 1.5)).abs() < 1e-12);
    assert!((kernel[11] - kernel[13]).abs() < 1e-15);
    assert!(kernel[11] < kernel[12]);

    // raw density samples, not renormalized
    let narrow: f64 = GaussianBlurFilter::gaussian_kernel(0.5).iter().sum();
    assert!((narrow - 1.0).abs() > 0.01);
}

#[test]
fn test_blur_rejects_bad_parameters() {
    let mut raster = sample_raster(4, 4);
    assert_invalid_parameters(GaussianBlurFilter.apply(&mut raster, &params(&["100", "0.5"])), "blur");
    assert_invalid_parameters(GaussianBlurFilter.apply(&mut raster, &params(&["-0.5"])), "blur");
    assert_invalid_parameters(GaussianBlurFilter.apply(&mut raster, &params(&["wide"])), "blur");
    assert_invalid_parameters(GaussianBlurFilter.apply(&mut raster, &params(&["inf"])), "blur");
}

#[test]
fn test_blur_rejects_subnormal_sigma() {
    let original = sample_raster(3, 3);
    let mut raster = original.clone();
    assert_invalid_parameters(GaussianBlurFilter.apply(&mut raster, &params(&["1e-320"])), "blur");
    assert_eq!(raster, original);
    assert_in_range(&raster);

    // tiny but representable sigma: degenerate kernel, channels stay in range
    GaussianBlurFilter.apply(&mut raster, &params(&["1e-160"])).unwrap();
    assert_in_range(&raster);
}

#[test]
fn test_blur_with_zero_sigma_is_identity() {
    let original = sample_raster(5, 7);
    let mut raster = original.clone();
    GaussianBlurFilter.apply(&mut raster, &params(&["0"])).unwrap();
    assert_eq!(raster, original);
}

#[test]
fn test_blur_smooths() {
    let mut uniform = Raster::new(6, 6, 0, 0);
    for pixel in uniform.pixels_mut() {
        *pixel = Pixel::new(0.5, 0.5, 0.5);
    }
    GaussianBlurFilter.apply(&mut uniform, &params(&["2"])).unwrap();
    assert!(uniform.pixels().iter().all(|p| *p == Pixel::new(0.5, 0.5, 0.5)));

    let mut spot = Raster::new(9, 9, 0, 0);
    spot.set(4, 4, Pixel::WHITE);
    GaussianBlurFilter.apply(&mut spot, &params(&["1"])).unwrap();
    let center = spot.get(4, 4).r();
    assert!(center < 1.0 && center > 0.0);
    assert!(spot.get(4, 5).r() > 0.0);
    assert!(spot.get(4, 5).r() < center);
    assert_in_range(&spot);
}

#[test]
fn test_registry_resolves_builtin_filters() {
    let registry = FilterRegistry::new();
    assert_eq!(registry.aliases(), vec!["-blur", "-crop", "-edge", "-gs", "-neg", "-sharp"]);

    assert_eq!(registry.resolve("-gs").unwrap().name(), "grayscale");
    assert_eq!(registry.resolve("-edge").unwrap().name(), "edge detection");
    assert!(matches!(
        registry.resolve("-sepia"),
        Err(ProcessingError::InvalidArguments(_))
    ));
}

#[test]
fn test_every_filter_keeps_channels_in_range() {
    let registry = FilterRegistry::new();
    let chain: [(&str, &[&str]); 6] = [
        ("-sharp", &[]),
        ("-neg", &[]),
        ("-blur", &["0.7"]),
        ("-crop", &["6", "5"]),
        ("-gs", &[]),
        ("-edge", &["0.05"]),
    ];

    let mut raster = sample_raster(8, 8);
    for (alias, values) in chain {
        registry.resolve(alias).unwrap().apply(&mut raster, &params(values)).unwrap();
        assert_in_range(&raster);
    }
    assert_eq!(raster.shape(), (5, 6));
}
