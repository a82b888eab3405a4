use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use image_processor_rs::image_pipeline::{FilterRegistry, Pixel, Raster};

fn generate_raster(width: usize, height: usize) -> Raster {
    let mut raster = Raster::new(height, width, 2835, 2835);
    for y in 0..height {
        for x in 0..width {
            let value = ((x + y) % 256) as u8;
            raster.set(y, x, Pixel::from_rgb8(value, value / 2, 255 - value));
        }
    }
    raster
}

fn benchmark_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filters_256x256");
    let registry = FilterRegistry::new();
    let raster = generate_raster(256, 256);

    let cases: [(&str, &[&str]); 5] = [
        ("-gs", &[]),
        ("-neg", &[]),
        ("-sharp", &[]),
        ("-edge", &["0.1"]),
        ("-blur", &["1.5"]),
    ];

    for (alias, params) in cases {
        let params: Vec<String> = params.iter().map(|p| p.to_string()).collect();
        let filter = registry.resolve(alias).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(alias), &raster, |b, raster| {
            b.iter(|| {
                let mut raster = raster.clone();
                filter.apply(black_box(&mut raster), &params).unwrap();
            });
        });
    }

    group.finish();
}

fn benchmark_blur_sigma(c: &mut Criterion) {
    let mut group = c.benchmark_group("blur_by_sigma");
    let registry = FilterRegistry::new();
    let raster = generate_raster(128, 128);
    let blur = registry.resolve("-blur").unwrap();

    for sigma in ["0.5", "2", "5"] {
        let params = vec![sigma.to_string()];
        group.bench_with_input(BenchmarkId::from_parameter(sigma), &raster, |b, raster| {
            b.iter(|| {
                let mut raster = raster.clone();
                blur.apply(black_box(&mut raster), &params).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_filters, benchmark_blur_sigma);
criterion_main!(benches);
