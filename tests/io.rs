//! Validates color parsing, CLI argument handling and PNG export

use clap::Parser;
use hitomezashi::PatternError;
use hitomezashi::algorithm::controller::{PatternConfig, PatternController};
use hitomezashi::io::cli::{Cli, FileProcessor};
use hitomezashi::io::image::export_surface_as_png;
use hitomezashi::render::palette::{Palette, parse_hex_color};
use hitomezashi::render::raster::RasterSurface;
use std::path::Path;

#[test]
fn test_parse_hex_color_accepts_rgb_and_rgba() {
    assert_eq!(parse_hex_color("#dc143c").ok(), Some([220, 20, 60, 255]));
    assert_eq!(parse_hex_color("#6495ed").ok(), Some([100, 149, 237, 255]));
    assert_eq!(parse_hex_color("#DC143C").ok(), Some([220, 20, 60, 255]));
    assert_eq!(parse_hex_color("#00000080").ok(), Some([0, 0, 0, 128]));
}

#[test]
fn test_parse_hex_color_rejects_malformed_input() {
    for value in ["dc143c", "#dc143", "#dc143cff00", "#zz143c", ""] {
        match parse_hex_color(value) {
            Err(PatternError::InvalidColor { value: rejected, .. }) => {
                assert_eq!(rejected, value);
            }
            Ok(color) => unreachable!("'{value}' must not parse, got {color:?}"),
            Err(error) => unreachable!("expected InvalidColor, got: {error}"),
        }
    }
}

#[test]
fn test_cli_defaults() {
    let Ok(cli) = Cli::try_parse_from(["hitomezashi", "out.png"]) else {
        unreachable!("default arguments must parse")
    };

    assert_eq!(cli.seed, 42);
    assert_eq!(cli.subdivisions, 20);
    assert_eq!(cli.size, 500);
    assert_eq!(cli.count, 1);
    assert!((cli.seam - 0.5).abs() < f64::EPSILON);
    assert_eq!(cli.color_a, "#dc143c");
    assert_eq!(cli.color_b, "#6495ed");
    assert!(cli.skip_existing());
    assert!(cli.should_show_progress());
}

#[test]
fn test_cli_overrides() {
    let Ok(cli) = Cli::try_parse_from([
        "hitomezashi",
        "art.png",
        "--seed",
        "7",
        "-n",
        "32",
        "--size",
        "256",
        "--count",
        "3",
        "--no-skip",
        "--quiet",
    ]) else {
        unreachable!("explicit arguments must parse")
    };

    assert_eq!(cli.seed, 7);
    assert_eq!(cli.subdivisions, 32);
    assert_eq!(cli.size, 256);
    assert_eq!(cli.count, 3);
    assert!(!cli.skip_existing());
    assert!(!cli.should_show_progress());
}

#[test]
fn test_numbered_output_path_derivation() {
    let derived = FileProcessor::numbered_output_path(Path::new("art/out.png"), 2);
    assert_eq!(derived, Path::new("art/out_2.png"));

    let bare = FileProcessor::numbered_output_path(Path::new("out.png"), 10);
    assert_eq!(bare, Path::new("out_10.png"));
}

#[test]
fn test_export_writes_decodable_png() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("temp directory must be creatable")
    };
    let output = dir.path().join("pattern.png");

    let surface = RasterSurface::new(50, 50, [255, 255, 255, 255]);
    let controller = match PatternController::new(
        surface,
        PatternConfig {
            subdivisions: 5,
            ..PatternConfig::default()
        },
        Palette::new([220, 20, 60, 255], [100, 149, 237, 255]),
        42,
    ) {
        Ok(controller) => controller,
        Err(error) => unreachable!("controller construction must succeed: {error}"),
    };

    let Some(path) = output.to_str() else {
        unreachable!("temp path must be valid UTF-8")
    };
    if let Err(error) = export_surface_as_png(controller.surface(), path) {
        unreachable!("export must succeed: {error}");
    }

    match image::open(&output) {
        Ok(decoded) => {
            assert_eq!(decoded.width(), 50);
            assert_eq!(decoded.height(), 50);
        }
        Err(error) => unreachable!("exported file must decode: {error}"),
    }
}

#[test]
fn test_batch_processing_writes_numbered_outputs() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("temp directory must be creatable")
    };
    let output = dir.path().join("batch.png");
    let Some(output_str) = output.to_str() else {
        unreachable!("temp path must be valid UTF-8")
    };

    let Ok(cli) = Cli::try_parse_from([
        "hitomezashi",
        output_str,
        "--count",
        "2",
        "--size",
        "60",
        "-n",
        "6",
        "--quiet",
    ]) else {
        unreachable!("batch arguments must parse")
    };

    let mut processor = FileProcessor::new(cli);
    if let Err(error) = processor.process() {
        unreachable!("batch processing must succeed: {error}");
    }

    assert!(dir.path().join("batch_1.png").exists());
    assert!(dir.path().join("batch_2.png").exists());
    assert!(!output.exists());
}

#[test]
fn test_processor_rejects_non_png_output() {
    let Ok(cli) = Cli::try_parse_from(["hitomezashi", "out.txt", "--quiet"]) else {
        unreachable!("arguments must parse")
    };

    let mut processor = FileProcessor::new(cli);
    match processor.process() {
        Err(PatternError::InvalidParameter { .. }) => {}
        Ok(()) => unreachable!("non-PNG output must be rejected"),
        Err(error) => unreachable!("expected InvalidParameter, got: {error}"),
    }
}
