//! Velocity vector types and the direction vectors derived from them.
//!
//! A velocity vector type names a motion (linear or angular) and the axes it
//! engages. The same seven axis combinations are shared by both motions; the
//! motion only decides whether the 3-axis pattern lands in the linear half
//! (positions 0–2) or the angular half (positions 3–5) of a [`DirectionVector`].

use std::fmt;

use crate::namespaces::geom_coord::*;

/// Linear or angular motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Motion {
    /// Translation along the axes.
    Linear,
    /// Rotation about the axes.
    Angular,
}

impl Motion {
    /// Index of the first direction-vector component belonging to this motion.
    #[must_use]
    pub fn offset(self) -> usize {
        match self {
            Motion::Linear => 0,
            Motion::Angular => 3,
        }
    }
}

/// The seven non-empty combinations of the x, y and z axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AxisCombination {
    /// x only.
    X,
    /// y only.
    Y,
    /// z only.
    Z,
    /// x and y.
    XY,
    /// x and z.
    XZ,
    /// y and z.
    YZ,
    /// All three axes.
    XYZ,
}

impl AxisCombination {
    /// All combinations, in vocabulary order.
    pub const ALL: [AxisCombination; 7] = [
        AxisCombination::X,
        AxisCombination::Y,
        AxisCombination::Z,
        AxisCombination::XY,
        AxisCombination::XZ,
        AxisCombination::YZ,
        AxisCombination::XYZ,
    ];

    /// Returns the `(x, y, z)` engagement flags.
    #[must_use]
    pub fn pattern(self) -> [u8; 3] {
        match self {
            AxisCombination::X => [1, 0, 0],
            AxisCombination::Y => [0, 1, 0],
            AxisCombination::Z => [0, 0, 1],
            AxisCombination::XY => [1, 1, 0],
            AxisCombination::XZ => [1, 0, 1],
            AxisCombination::YZ => [0, 1, 1],
            AxisCombination::XYZ => [1, 1, 1],
        }
    }
}

/// A velocity vector type from the `coordinates#` vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VelocityVectorType {
    /// Linear or angular.
    pub motion: Motion,
    /// Axes engaged.
    pub axes: AxisCombination,
}

impl VelocityVectorType {
    /// All 14 vector types: the linear ones first, then the angular ones.
    pub const ALL: [VelocityVectorType; 14] = [
        Self::new(Motion::Linear, AxisCombination::X),
        Self::new(Motion::Linear, AxisCombination::Y),
        Self::new(Motion::Linear, AxisCombination::Z),
        Self::new(Motion::Linear, AxisCombination::XY),
        Self::new(Motion::Linear, AxisCombination::XZ),
        Self::new(Motion::Linear, AxisCombination::YZ),
        Self::new(Motion::Linear, AxisCombination::XYZ),
        Self::new(Motion::Angular, AxisCombination::X),
        Self::new(Motion::Angular, AxisCombination::Y),
        Self::new(Motion::Angular, AxisCombination::Z),
        Self::new(Motion::Angular, AxisCombination::XY),
        Self::new(Motion::Angular, AxisCombination::XZ),
        Self::new(Motion::Angular, AxisCombination::YZ),
        Self::new(Motion::Angular, AxisCombination::XYZ),
    ];

    const fn new(motion: Motion, axes: AxisCombination) -> Self {
        Self { motion, axes }
    }

    /// Returns the vocabulary IRI of this vector type.
    #[must_use]
    pub fn iri(self) -> &'static str {
        use AxisCombination as A;
        match (self.motion, self.axes) {
            (Motion::Linear, A::X) => LINEAR_VELOCITY_VECTOR_X,
            (Motion::Linear, A::Y) => LINEAR_VELOCITY_VECTOR_Y,
            (Motion::Linear, A::Z) => LINEAR_VELOCITY_VECTOR_Z,
            (Motion::Linear, A::XY) => LINEAR_VELOCITY_VECTOR_XY,
            (Motion::Linear, A::XZ) => LINEAR_VELOCITY_VECTOR_XZ,
            (Motion::Linear, A::YZ) => LINEAR_VELOCITY_VECTOR_YZ,
            (Motion::Linear, A::XYZ) => LINEAR_VELOCITY_VECTOR_XYZ,
            (Motion::Angular, A::X) => ANGULAR_VELOCITY_VECTOR_X,
            (Motion::Angular, A::Y) => ANGULAR_VELOCITY_VECTOR_Y,
            (Motion::Angular, A::Z) => ANGULAR_VELOCITY_VECTOR_Z,
            (Motion::Angular, A::XY) => ANGULAR_VELOCITY_VECTOR_XY,
            (Motion::Angular, A::XZ) => ANGULAR_VELOCITY_VECTOR_XZ,
            (Motion::Angular, A::YZ) => ANGULAR_VELOCITY_VECTOR_YZ,
            (Motion::Angular, A::XYZ) => ANGULAR_VELOCITY_VECTOR_XYZ,
        }
    }

    /// Looks up a vector type by its full IRI. Returns `None` for any IRI
    /// outside the vocabulary table.
    #[must_use]
    pub fn from_iri(iri: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|vt| vt.iri() == iri)
    }

    /// Returns the direction vector engaged by this type.
    #[must_use]
    pub fn direction(self) -> DirectionVector {
        let mut components = [0u8; 6];
        let offset = self.motion.offset();
        components[offset..offset + 3].copy_from_slice(&self.axes.pattern());
        DirectionVector(components)
    }
}

/// Six 0/1 flags: linear x, y, z followed by angular x, y, z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DirectionVector(pub [u8; 6]);

impl DirectionVector {
    /// Returns the components in order.
    #[must_use]
    pub fn components(&self) -> [u8; 6] {
        self.0
    }

    /// Returns the number of engaged axes.
    #[must_use]
    pub fn engaged(&self) -> usize {
        self.0.iter().filter(|&&c| c != 0).count()
    }
}

impl fmt::Display for DirectionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "[{a}, {b}, {c}, {d}, {e}, {g}]")
    }
}
