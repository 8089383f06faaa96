use lstk_core::image::{ContinuousIndex, ImageMetadata, Index, MatrixImage, PixelComponent, Size};
use lstk_core::interpolation::{ImageFunction, MatrixLinearInterpolator};
use lstk_core::spatial::Point;
use lstk_core::InterpolationError;
use nalgebra::{Matrix1, Matrix2, Matrix2x3};

const PHASES: usize = 2;
const DIMENSION: usize = 2;

fn fill_pixel<T: PixelComponent>(values: [T; 4]) -> Matrix2<T> {
    Matrix2::new(values[0], values[1], values[2], values[3])
}

fn check_reference_scenario<T: PixelComponent>(pixel: Matrix2<T>) {
    let image = MatrixImage::<T, PHASES, DIMENSION, 2>::filled(
        Size::filled(10),
        ImageMetadata::default(),
        pixel,
    );
    let interpolator = MatrixLinearInterpolator::with_image(&image);
    let expected = pixel.map(Into::<f64>::into);

    let value = interpolator
        .evaluate_at_continuous_index(&ContinuousIndex::new([4.5, 4.5]))
        .unwrap();
    assert_eq!(value, expected, "Error in evaluate_at_continuous_index()");

    let value = interpolator.evaluate(&Point::new([4.5, 4.5])).unwrap();
    assert_eq!(value, expected, "Error in evaluate()");

    let value = interpolator.evaluate_at_index(&Index::new([4, 4])).unwrap();
    assert_eq!(value, expected, "Error in evaluate_at_index()");

    // Corner of the image
    let corner = interpolator.evaluate_at_continuous_index(&ContinuousIndex::new([-0.3, -0.3]));
    assert!(corner.is_ok(), "Corner evaluation failed: {:?}", corner);
    let corner = corner.unwrap();
    for row in 0..PHASES {
        for col in 0..DIMENSION {
            assert!((corner[(row, col)] - expected[(row, col)]).abs() < 1e-12);
        }
    }
}

#[test]
fn test_reference_scenario_i8() {
    check_reference_scenario(fill_pixel::<i8>([7, 9, 11, 13]));
}

#[test]
fn test_reference_scenario_f32() {
    check_reference_scenario(fill_pixel::<f32>([7.0, 9.0, 11.0, 13.0]));
}

#[test]
fn test_reference_scenario_f64() {
    check_reference_scenario(fill_pixel::<f64>([7.0, 9.0, 11.0, 13.0]));
}

#[test]
fn test_corner_uses_clamped_neighbors() {
    let mut image = MatrixImage::<f64, 1, 1, 2>::new(Size::new([3, 3]), ImageMetadata::default());
    image.set_pixel(&Index::new([0, 0]), Matrix1::new(5.0)).unwrap();
    image.set_pixel(&Index::new([1, 0]), Matrix1::new(9.0)).unwrap();
    let interpolator = MatrixLinearInterpolator::with_image(&image);

    // x = -0.3 replicates pixel (0, 0)
    let value = interpolator
        .evaluate_at_continuous_index(&ContinuousIndex::new([-0.3, 0.0]))
        .unwrap();
    assert!((value[(0, 0)] - 5.0).abs() < 1e-12);

    // x = 0.5 blends (0, 0) and (1, 0)
    let value = interpolator
        .evaluate_at_continuous_index(&ContinuousIndex::new([0.5, -2.0]))
        .unwrap();
    assert_eq!(value[(0, 0)], 7.0);
}

#[test]
fn test_rectangular_pixels_in_3d() {
    let size = Size::new([2, 2, 2]);
    let buffer = (0..size.number_of_pixels())
        .map(|offset| Matrix2x3::from_element(offset as u16))
        .collect();
    let image = MatrixImage::from_buffer(size, ImageMetadata::default(), buffer).unwrap();
    let interpolator = MatrixLinearInterpolator::with_image(&image);

    // Average of offsets 0..8
    let value = interpolator
        .evaluate_at_continuous_index(&ContinuousIndex::filled(0.5))
        .unwrap();
    assert_eq!(value, Matrix2x3::from_element(3.5));

    let value = interpolator.evaluate_at_index(&Index::new([1, 0, 1])).unwrap();
    assert_eq!(value, Matrix2x3::from_element(5.0));
}

#[test]
fn test_out_of_bounds_index_is_reported() {
    let image = MatrixImage::<i8, 2, 2, 2>::new(Size::filled(10), ImageMetadata::default());
    let interpolator = MatrixLinearInterpolator::with_image(&image);

    let err = interpolator.evaluate_at_index(&Index::new([10, 4])).unwrap_err();
    assert!(matches!(err, InterpolationError::IndexOutOfBounds { .. }));
    assert_eq!(err.to_string(), "Index [10, 4] is outside image of size [10, 10]");
}

#[test]
fn test_non_finite_index_is_reported() {
    let image = MatrixImage::<f32, 2, 2, 2>::new(Size::filled(4), ImageMetadata::default());
    let interpolator = MatrixLinearInterpolator::with_image(&image);

    assert_eq!(
        interpolator.evaluate_at_continuous_index(&ContinuousIndex::new([f64::INFINITY, 0.0])),
        Err(InterpolationError::NonFiniteIndex { axis: 0 })
    );
}

#[test]
fn test_shared_across_threads() {
    let image = MatrixImage::<f32, 2, 2, 2>::filled(
        Size::filled(8),
        ImageMetadata::default(),
        Matrix2::new(1.0, 2.0, 3.0, 4.0),
    );
    let interpolator = MatrixLinearInterpolator::with_image(&image);

    std::thread::scope(|scope| {
        for i in 0..4 {
            let interpolator = &interpolator;
            scope.spawn(move || {
                let x = i as f64 + 0.25;
                let value = interpolator
                    .evaluate_at_continuous_index(&ContinuousIndex::new([x, x]))
                    .unwrap();
                assert_eq!(value, Matrix2::new(1.0, 2.0, 3.0, 4.0));
            });
        }
    });
}
