//! Matrix Interpolation Example
//!
//! Fills a 2D image with a constant `2 x 2` matrix pixel and evaluates the
//! linear interpolator at a continuous index, a physical point, a discrete
//! index and a corner outside the image, for `i8`, `f32` and `f64` pixels.
//!
//! Usage:
//!   cargo run --example matrix_interpolation -- --size 10 --at 4.5,4.5

use anyhow::Context;
use clap::Parser;
use lstk_core::image::{ContinuousIndex, ImageMetadata, Index, MatrixImage, PixelComponent, RealMatrix, Size};
use lstk_core::interpolation::{ImageFunction, MatrixLinearInterpolator};
use lstk_core::spatial::{Point, Spacing};
use nalgebra::Matrix2;
use tracing::info;

#[derive(Parser)]
#[command(name = "matrix_interpolation")]
#[command(about = "Evaluate a matrix linear interpolator on a constant image")]
struct Cli {
    /// Extent of the image along both axes
    #[arg(long, default_value_t = 10)]
    size: usize,

    /// Continuous index and physical point to evaluate at
    #[arg(long, value_delimiter = ',', default_values_t = [4.5, 4.5])]
    at: Vec<f64>,

    /// Discrete index to evaluate at
    #[arg(long, value_delimiter = ',', default_values_t = [4, 4])]
    index: Vec<i64>,

    /// Corner coordinate used on both axes
    #[arg(long, default_value_t = -0.3, allow_negative_numbers = true)]
    corner: f64,

    /// Pixel spacing on both axes
    #[arg(long, default_value_t = 1.0)]
    spacing: f64,
}

fn run<T: PixelComponent>(label: &str, pixel: Matrix2<T>, cli: &Cli) -> anyhow::Result<()> {
    anyhow::ensure!(cli.at.len() == 2, "--at takes two coordinates, got {}", cli.at.len());
    anyhow::ensure!(cli.index.len() == 2, "--index takes two components, got {}", cli.index.len());

    let metadata = ImageMetadata::default().with_spacing(Spacing::uniform(cli.spacing))?;
    let image = MatrixImage::<T, 2, 2, 2>::filled(Size::filled(cli.size), metadata, pixel);
    let interpolator = MatrixLinearInterpolator::with_image(&image);
    let expected: RealMatrix<2, 2> = pixel.map(Into::<f64>::into);

    let at = ContinuousIndex::new([cli.at[0], cli.at[1]]);
    let value = interpolator.evaluate_at_continuous_index(&at)?;
    check(label, "evaluate_at_continuous_index", &value, &expected)?;

    let point = Point::new([cli.at[0], cli.at[1]]);
    let value = interpolator.evaluate(&point)?;
    check(label, "evaluate", &value, &expected)?;

    let index = Index::new([cli.index[0], cli.index[1]]);
    let value = interpolator
        .evaluate_at_index(&index)
        .with_context(|| format!("{}: evaluate_at_index({:?})", label, index.0))?;
    check(label, "evaluate_at_index", &value, &expected)?;

    let corner = ContinuousIndex::filled(cli.corner);
    let value = interpolator.evaluate_at_continuous_index(&corner)?;
    info!("{}: corner {:?} -> {:?}", label, corner.0, value.as_slice());

    Ok(())
}

fn check(label: &str, operation: &str, value: &RealMatrix<2, 2>, expected: &RealMatrix<2, 2>) -> anyhow::Result<()> {
    if value != expected {
        anyhow::bail!(
            "{}: error in {}(): got {:?}, expected {:?}",
            label,
            operation,
            value.as_slice(),
            expected.as_slice()
        );
    }
    info!("{}: {}() -> {:?}", label, operation, value.as_slice());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    run("i8", Matrix2::new(7i8, 9, 11, 13), &cli)?;
    run("f32", Matrix2::new(7.0f32, 9.0, 11.0, 13.0), &cli)?;
    run("f64", Matrix2::new(7.0f64, 9.0, 11.0, 13.0), &cli)?;

    println!("All evaluations matched the fill pixel");
    Ok(())
}
