//! `coordinates#` namespace: geometric coordinates and velocity vector types.
//!
//! Coordinates carry several `rdf:type`s at once: one of the geometric
//! coordinate classes (position, distance, velocity twist, acceleration twist)
//! when the quantity is a geometric relation, and exactly one velocity vector
//! type naming the direction the quantity acts along.

use crate::model::iris::*;
use crate::model::{local_name, Class, Namespace, NamespaceModule};

/// `geom-coord:PositionCoordinate`.
pub const POSITION_COORDINATE: &str =
    "https://comp-rob2b.github.io/metamodels/geometry/coordinates#PositionCoordinate";
/// `geom-coord:DistanceCoordinate`.
pub const DISTANCE_COORDINATE: &str =
    "https://comp-rob2b.github.io/metamodels/geometry/coordinates#DistanceCoordinate";
/// `geom-coord:VelocityTwistCoordinate`.
pub const VELOCITY_TWIST_COORDINATE: &str =
    "https://comp-rob2b.github.io/metamodels/geometry/coordinates#VelocityTwistCoordinate";
/// `geom-coord:AccelerationTwistCoordinate`.
pub const ACCELERATION_TWIST_COORDINATE: &str =
    "https://comp-rob2b.github.io/metamodels/geometry/coordinates#AccelerationTwistCoordinate";

/// Coordinate classes whose controllers feed the solver an acceleration-energy term.
pub const GEOMETRIC_COORDINATES: [&str; 4] = [
    POSITION_COORDINATE,
    DISTANCE_COORDINATE,
    VELOCITY_TWIST_COORDINATE,
    ACCELERATION_TWIST_COORDINATE,
];

/// `geom-coord:LinearVelocityVectorX`.
pub const LINEAR_VELOCITY_VECTOR_X: &str =
    "https://comp-rob2b.github.io/metamodels/geometry/coordinates#LinearVelocityVectorX";
/// `geom-coord:LinearVelocityVectorY`.
pub const LINEAR_VELOCITY_VECTOR_Y: &str =
    "https://comp-rob2b.github.io/metamodels/geometry/coordinates#LinearVelocityVectorY";
/// `geom-coord:LinearVelocityVectorZ`.
pub const LINEAR_VELOCITY_VECTOR_Z: &str =
    "https://comp-rob2b.github.io/metamodels/geometry/coordinates#LinearVelocityVectorZ";
/// `geom-coord:LinearVelocityVectorXY`.
pub const LINEAR_VELOCITY_VECTOR_XY: &str =
    "https://comp-rob2b.github.io/metamodels/geometry/coordinates#LinearVelocityVectorXY";
/// `geom-coord:LinearVelocityVectorXZ`.
pub const LINEAR_VELOCITY_VECTOR_XZ: &str =
    "https://comp-rob2b.github.io/metamodels/geometry/coordinates#LinearVelocityVectorXZ";
/// `geom-coord:LinearVelocityVectorYZ`.
pub const LINEAR_VELOCITY_VECTOR_YZ: &str =
    "https://comp-rob2b.github.io/metamodels/geometry/coordinates#LinearVelocityVectorYZ";
/// `geom-coord:LinearVelocityVectorXYZ`.
pub const LINEAR_VELOCITY_VECTOR_XYZ: &str =
    "https://comp-rob2b.github.io/metamodels/geometry/coordinates#LinearVelocityVectorXYZ";

/// `geom-coord:AngularVelocityVectorX`.
pub const ANGULAR_VELOCITY_VECTOR_X: &str =
    "https://comp-rob2b.github.io/metamodels/geometry/coordinates#AngularVelocityVectorX";
/// `geom-coord:AngularVelocityVectorY`.
pub const ANGULAR_VELOCITY_VECTOR_Y: &str =
    "https://comp-rob2b.github.io/metamodels/geometry/coordinates#AngularVelocityVectorY";
/// `geom-coord:AngularVelocityVectorZ`.
pub const ANGULAR_VELOCITY_VECTOR_Z: &str =
    "https://comp-rob2b.github.io/metamodels/geometry/coordinates#AngularVelocityVectorZ";
/// `geom-coord:AngularVelocityVectorXY`.
pub const ANGULAR_VELOCITY_VECTOR_XY: &str =
    "https://comp-rob2b.github.io/metamodels/geometry/coordinates#AngularVelocityVectorXY";
/// `geom-coord:AngularVelocityVectorXZ`.
pub const ANGULAR_VELOCITY_VECTOR_XZ: &str =
    "https://comp-rob2b.github.io/metamodels/geometry/coordinates#AngularVelocityVectorXZ";
/// `geom-coord:AngularVelocityVectorYZ`.
pub const ANGULAR_VELOCITY_VECTOR_YZ: &str =
    "https://comp-rob2b.github.io/metamodels/geometry/coordinates#AngularVelocityVectorYZ";
/// `geom-coord:AngularVelocityVectorXYZ`.
pub const ANGULAR_VELOCITY_VECTOR_XYZ: &str =
    "https://comp-rob2b.github.io/metamodels/geometry/coordinates#AngularVelocityVectorXYZ";

/// Returns the `coordinates#` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "geom-coord",
            iri: NS_GEOM_COORD,
            label: "Geometric Coordinates",
            comment: "Coordinate representations of geometric relations between \
                      rigid bodies, and the velocity directions they act along.",
        },
        classes: classes(),
        properties: vec![],
    }
}

fn classes() -> Vec<Class> {
    let mut classes = vec![
        Class {
            id: POSITION_COORDINATE,
            label: "PositionCoordinate",
            comment: "Coordinates of the position of a point relative to another point.",
        },
        Class {
            id: DISTANCE_COORDINATE,
            label: "DistanceCoordinate",
            comment: "Coordinates of the distance between two geometric entities.",
        },
        Class {
            id: VELOCITY_TWIST_COORDINATE,
            label: "VelocityTwistCoordinate",
            comment: "Coordinates of the velocity twist of a body relative to another.",
        },
        Class {
            id: ACCELERATION_TWIST_COORDINATE,
            label: "AccelerationTwistCoordinate",
            comment: "Coordinates of the acceleration twist of a body relative to another.",
        },
    ];
    classes.extend(crate::vector::VelocityVectorType::ALL.iter().map(|vt| Class {
        id: vt.iri(),
        label: local_name(vt.iri()),
        comment: match vt.motion {
            crate::vector::Motion::Linear => "Linear velocity direction along the named axes.",
            crate::vector::Motion::Angular => "Angular velocity direction about the named axes.",
        },
    }));
    classes
}
