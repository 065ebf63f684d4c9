use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use planorm::cli::Args;
use planorm::normalize::{self, NormalizeOutcome, RescaleReport};
use planorm::{display, input, render, report};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.files.is_empty() {
        let _ = Args::command().print_help();
        println!();
        return;
    }

    let multiple_files = args.files.len() > 1;
    let mut any_failed = false;

    for (idx, file_path) in args.files.iter().enumerate() {
        if multiple_files {
            println!("{}", file_path.display());
        }

        if let Err(e) = process_file(file_path, &args) {
            println!("Error: {e}");
            any_failed = true;
        }

        if multiple_files && idx < args.files.len() - 1 {
            println!();
        }
    }

    if any_failed {
        std::process::exit(1);
    }
}

/// Normalize a single image file and display or save the result
fn process_file(file_path: &std::path::Path, args: &Args) -> Result<()> {
    // Stage 1: Decode the file into an owned float plane
    let mut plane = input::load_plane(file_path)?;
    let dimensions = plane.dimensions();

    // Stage 2: Normalize in place through a scoped mutable view
    let outcome = {
        let mut view = plane.view_mut();

        if args.zscore {
            let before = normalize::extrema(&view)?;
            let stats = normalize::zscore(&mut view)?;
            NormalizeOutcome {
                rescale: RescaleReport {
                    before,
                    after: None,
                },
                zscore: Some(stats),
            }
        } else {
            normalize::normalize(&mut view)?
        }
    };

    // Stage 3: Verbose statistics report
    if args.verbose {
        report::print_report(dimensions, &outcome);
    }

    // Stage 4: Render the normalized plane as 8-bit grayscale
    let image = render::render_gray(&plane)?;

    // Stage 5: Save or display
    if let Some(output) = &args.output {
        image
            .save(output)
            .with_context(|| format!("Failed to write output image: {}", output.display()))?;
    } else {
        display::print_plane(&image, args)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn write_gradient(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("input.png");
        let img = GrayImage::from_fn(8, 8, |x, y| Luma([(x * 16 + y * 8) as u8]));
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_process_file_writes_normalized_output() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = write_gradient(&dir);
        let output_path = dir.path().join("output.png");

        let args = Args {
            files: vec![input_path.clone()],
            width: None,
            height: None,
            zscore: false,
            output: Some(output_path.clone()),
            verbose: false,
        };

        process_file(&input_path, &args).unwrap();

        let saved = image::open(&output_path).unwrap();
        assert_eq!(saved.width(), 8);
        assert_eq!(saved.height(), 8);

        // Normalized output must span the full 8-bit scale
        let gray = saved.to_luma8();
        let (min, max) = gray
            .pixels()
            .fold((u8::MAX, u8::MIN), |(min, max), p| {
                (min.min(p.0[0]), max.max(p.0[0]))
            });
        assert_eq!(min, 0);
        assert_eq!(max, 255);
    }

    #[test]
    fn test_process_file_zscore_path() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = write_gradient(&dir);
        let output_path = dir.path().join("zscore.png");

        let args = Args {
            files: vec![input_path.clone()],
            width: None,
            height: None,
            zscore: true,
            output: Some(output_path.clone()),
            verbose: true,
        };

        process_file(&input_path, &args).unwrap();
        assert!(output_path.exists());
    }

    #[test]
    fn test_process_file_missing_input_fails() {
        let args = Args {
            files: vec![],
            width: None,
            height: None,
            zscore: false,
            output: None,
            verbose: false,
        };

        let path = std::path::Path::new("/nonexistent/input.png");
        let result = process_file(path, &args);
        assert!(result.is_err());
    }
}
