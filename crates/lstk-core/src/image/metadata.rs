//! Physical-space metadata and the index/point mappings it defines.

use serde::{Deserialize, Serialize};
use crate::error::{InterpolationError, Result};
use crate::image::index::{ContinuousIndex, Index};
use crate::spatial::{Direction, Point, Spacing, Vector};

/// Origin, spacing and direction of an image grid.
///
/// Mappings between index space and physical space:
/// * `index = (Direction^-1 * (point - origin)) / spacing`
/// * `point = origin + Direction * (index * spacing)`
///
/// The inverse direction is computed once at construction, so metadata can
/// only be built from a non-zero, finite spacing and an invertible direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MetadataRecord<D>", into = "MetadataRecord<D>")]
pub struct ImageMetadata<const D: usize> {
    origin: Point<D>,
    spacing: Spacing<D>,
    direction: Direction<D>,
    inverse_direction: Direction<D>,
}

/// Serialized form, without the cached inverse.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MetadataRecord<const D: usize> {
    origin: Point<D>,
    spacing: Spacing<D>,
    direction: Direction<D>,
}

impl<const D: usize> TryFrom<MetadataRecord<D>> for ImageMetadata<D> {
    type Error = InterpolationError;

    fn try_from(record: MetadataRecord<D>) -> Result<Self> {
        Self::new(record.origin, record.spacing, record.direction)
    }
}

impl<const D: usize> From<ImageMetadata<D>> for MetadataRecord<D> {
    fn from(metadata: ImageMetadata<D>) -> Self {
        Self {
            origin: metadata.origin,
            spacing: metadata.spacing,
            direction: metadata.direction,
        }
    }
}

impl<const D: usize> ImageMetadata<D> {
    /// Create validated metadata.
    ///
    /// # Errors
    /// * `InvalidSpacing` if any spacing component is zero or not finite
    /// * `SingularDirection` if the direction matrix has no inverse
    pub fn new(origin: Point<D>, spacing: Spacing<D>, direction: Direction<D>) -> Result<Self> {
        if let Some(axis) = spacing.first_invalid_axis() {
            return Err(InterpolationError::invalid_spacing(format!(
                "axis {} has spacing {}",
                axis, spacing[axis]
            )));
        }
        let inverse_direction = direction
            .try_inverse()
            .ok_or(InterpolationError::SingularDirection)?;
        Ok(Self {
            origin,
            spacing,
            direction,
            inverse_direction,
        })
    }

    /// Replace the origin.
    pub fn with_origin(mut self, origin: Point<D>) -> Self {
        self.origin = origin;
        self
    }

    /// Replace the spacing, revalidating it.
    pub fn with_spacing(self, spacing: Spacing<D>) -> Result<Self> {
        Self::new(self.origin, spacing, self.direction)
    }

    /// Replace the direction, revalidating it.
    pub fn with_direction(self, direction: Direction<D>) -> Result<Self> {
        Self::new(self.origin, self.spacing, direction)
    }

    pub fn origin(&self) -> &Point<D> {
        &self.origin
    }

    pub fn spacing(&self) -> &Spacing<D> {
        &self.spacing
    }

    pub fn direction(&self) -> &Direction<D> {
        &self.direction
    }

    /// Map a physical point to a continuous index.
    pub fn transform_physical_point_to_continuous_index(&self, point: &Point<D>) -> ContinuousIndex<D> {
        let rotated = self.inverse_direction * (*point - self.origin);
        ContinuousIndex(std::array::from_fn(|i| rotated[i] / self.spacing[i]))
    }

    /// Map a continuous index to a physical point.
    pub fn transform_continuous_index_to_physical_point(&self, index: &ContinuousIndex<D>) -> Point<D> {
        let scaled = Vector::new(std::array::from_fn(|i| index[i] * self.spacing[i]));
        self.origin + self.direction * scaled
    }

    /// Map a discrete index to the physical point at its pixel center.
    pub fn transform_index_to_physical_point(&self, index: &Index<D>) -> Point<D> {
        self.transform_continuous_index_to_physical_point(&ContinuousIndex::from(*index))
    }
}

impl<const D: usize> Default for ImageMetadata<D> {
    /// Zero origin, unit spacing, identity direction.
    fn default() -> Self {
        Self {
            origin: Point::origin(),
            spacing: Spacing::uniform(1.0),
            direction: Direction::identity(),
            inverse_direction: Direction::identity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    type Point2 = Point<2>;

    #[test]
    fn test_metadata_default_is_identity() {
        let metadata = ImageMetadata::<2>::default();
        let index = metadata.transform_physical_point_to_continuous_index(&Point2::new([4.5, 4.5]));
        assert_eq!(index, ContinuousIndex::new([4.5, 4.5]));
    }

    #[test]
    fn test_metadata_rejects_zero_spacing() {
        let result = ImageMetadata::<2>::new(
            Point2::origin(),
            Spacing::new([1.0, 0.0]),
            Direction::identity(),
        );
        assert!(matches!(result, Err(InterpolationError::InvalidSpacing(_))));
    }

    #[test]
    fn test_metadata_rejects_singular_direction() {
        let singular = Direction(nalgebra::SMatrix::<f64, 2, 2>::zeros());
        let result = ImageMetadata::default().with_direction(singular);
        assert_eq!(result, Err(InterpolationError::SingularDirection));
    }

    #[test]
    fn test_non_unit_spacing_and_origin() {
        let metadata = ImageMetadata::<2>::default()
            .with_origin(Point2::new([10.0, 20.0]))
            .with_spacing(Spacing::new([2.0, 0.5]))
            .unwrap();
        let index = metadata.transform_physical_point_to_continuous_index(&Point2::new([14.0, 21.0]));
        assert!((index[0] - 2.0).abs() < 1e-12);
        assert!((index[1] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotated_roundtrip() {
        let metadata = ImageMetadata::<2>::default()
            .with_origin(Point2::new([-3.0, 7.0]))
            .with_direction(Direction::rotation(FRAC_PI_2))
            .unwrap();
        let index = ContinuousIndex::new([2.25, -1.5]);
        let point = metadata.transform_continuous_index_to_physical_point(&index);
        let recovered = metadata.transform_physical_point_to_continuous_index(&point);
        assert!((recovered[0] - index[0]).abs() < 1e-12);
        assert!((recovered[1] - index[1]).abs() < 1e-12);
    }

    #[test]
    fn test_index_to_physical_point() {
        let metadata = ImageMetadata::<2>::default()
            .with_spacing(Spacing::new([0.5, 3.0]))
            .unwrap();
        let point = metadata.transform_index_to_physical_point(&Index::new([4, 2]));
        assert_eq!(point, Point2::new([2.0, 6.0]));
    }

    #[test]
    fn test_serde_roundtrip_rebuilds_inverse() {
        let metadata = ImageMetadata::<2>::default()
            .with_origin(Point2::new([1.0, -2.0]))
            .with_spacing(Spacing::new([0.5, 2.0]))
            .unwrap();
        let text = ron::to_string(&metadata).unwrap();
        let restored: ImageMetadata<2> = ron::from_str(&text).unwrap();
        assert_eq!(restored, metadata);
    }

    #[test]
    fn test_deserialize_rejects_zero_spacing() {
        let mut metadata = ImageMetadata::<2>::default();
        metadata.spacing = Spacing::new([1.0, 0.0]);
        let text = ron::to_string(&metadata).unwrap();
        assert!(ron::from_str::<ImageMetadata<2>>(&text).is_err());
    }
}
