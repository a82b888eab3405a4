use image_processor_rs::image_pipeline::{
    CliArguments, ImagePipeline, Pixel, PipelineConfig, ProcessingError, Raster, decode_file,
    encode_file,
};

fn flag() -> Raster {
    let rows: Vec<Vec<Pixel>> = (0..20)
        .map(|row| {
            (0..10)
                .map(|col| {
                    if row < 4 && col < 4 {
                        Pixel::from_rgb8(0, 0, 187)
                    } else if (row / 2) % 2 == 0 {
                        Pixel::from_rgb8(255, 0, 0)
                    } else {
                        Pixel::from_rgb8(255, 255, 255)
                    }
                })
                .collect()
        })
        .collect();
    let mut raster = Raster::from_rows(rows).unwrap();
    raster.set_resolution(2835, 2835);
    raster
}

#[test]
fn command_line_chain_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("flag.bmp");
    let output = dir.path().join("flag_out.bmp");
    encode_file(&input, &flag()).unwrap();

    let decoded = decode_file(&input).unwrap();
    assert_eq!(decoded.shape(), (20, 10));
    assert_eq!(decoded.get(0, 0), Pixel::new(0.0, 0.0, 187.0 / 255.0));

    let args = CliArguments::parse([
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "-crop",
        "8",
        "12",
        "-gs",
        "-blur",
        "0.5",
        "-sharp",
    ])
    .unwrap()
    .unwrap();

    let pipeline = ImagePipeline::new(PipelineConfig::default());
    pipeline
        .process_file(&args.input, &args.output, &args.filters)
        .unwrap();

    let result = decode_file(&output).unwrap();
    assert_eq!(result.shape(), (12, 8));
    assert_eq!(result.resolution(), (2835, 2835));
    for pixel in result.pixels() {
        assert!((pixel.r() - pixel.g()).abs() < 0.01);
        assert!((pixel.g() - pixel.b()).abs() < 0.01);
    }
}

#[test]
fn edge_detection_output_is_binary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("flag.bmp");
    let once = dir.path().join("flag_edge.bmp");
    let twice = dir.path().join("flag_edge_edge.bmp");
    encode_file(&input, &flag()).unwrap();

    let pipeline = ImagePipeline::new(PipelineConfig::default());
    let args = CliArguments::parse([input.to_str().unwrap(), once.to_str().unwrap(), "-edge", "0.1"])
        .unwrap()
        .unwrap();
    pipeline.process_file(&args.input, &args.output, &args.filters).unwrap();
    pipeline.process_file(&once, &twice, &args.filters).unwrap();

    for path in [&once, &twice] {
        let raster = decode_file(path).unwrap();
        assert!(
            raster
                .pixels()
                .iter()
                .all(|p| *p == Pixel::WHITE || *p == Pixel::BLACK)
        );
    }
}

#[test]
fn unknown_filter_is_an_argument_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("flag.bmp");
    encode_file(&input, &flag()).unwrap();

    let args = CliArguments::parse([
        input.to_str().unwrap(),
        dir.path().join("out.bmp").to_str().unwrap(),
        "-blur",
        "-0.5",
    ])
    .unwrap()
    .unwrap();

    let pipeline = ImagePipeline::new(PipelineConfig::default());
    let err = pipeline
        .process_file(&args.input, &args.output, &args.filters)
        .unwrap_err();
    assert!(matches!(err, ProcessingError::InvalidArguments(_)));
}
