//! Motion specification graphs used by the integration tests.

/// Two PID controllers sharing one ACHD solver: `ctrl1` regulates a position
/// coordinate along x and z, `ctrl2` a joint torque about all three axes.
pub const TWO_ARM_CONTROLLERS: &str = r#"
@prefix rdf:            <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix controller:     <https://secorolab.github.io/metamodels/controllers/controller#> .
@prefix pid-controller: <https://secorolab.github.io/metamodels/controllers/pid_controller#> .
@prefix constraint:     <https://secorolab.github.io/metamodels/constraints/constraint#> .
@prefix geom-coord:     <https://comp-rob2b.github.io/metamodels/geometry/coordinates#> .
@prefix embed-map:      <https://secorolab.github.io/metamodels/embed_map#> .
@prefix ex:             <https://example.org/robot#> .

ex:ctrl1 a pid-controller:PIDController ;
    controller:constraint ex:constraint1 .

ex:constraint1 constraint:quantity ex:coord1 .

ex:coord1 a geom-coord:PositionCoordinate , geom-coord:LinearVelocityVectorXZ .

ex:map1 a embed-map:EmbedMap ;
    embed-map:controller ex:ctrl1 ;
    embed-map:solver ex:achd .

ex:ctrl2 a pid-controller:PIDController ;
    controller:constraint ex:constraint2 .

ex:constraint2 constraint:quantity ex:coord2 .

ex:coord2 a ex:JointTorqueCoordinate , geom-coord:AngularVelocityVectorXYZ .

ex:map2 a embed-map:EmbedMap ;
    embed-map:controller ex:ctrl2 ;
    embed-map:solver ex:achd .
"#;

/// A PID controller with a constraint and coordinate but no embedding map.
pub const UNEMBEDDED_CONTROLLER: &str = r#"
@prefix controller:     <https://secorolab.github.io/metamodels/controllers/controller#> .
@prefix pid-controller: <https://secorolab.github.io/metamodels/controllers/pid_controller#> .
@prefix constraint:     <https://secorolab.github.io/metamodels/constraints/constraint#> .
@prefix geom-coord:     <https://comp-rob2b.github.io/metamodels/geometry/coordinates#> .
@prefix ex:             <https://example.org/robot#> .

ex:ctrl1 a pid-controller:PIDController ;
    controller:constraint ex:constraint1 .

ex:constraint1 constraint:quantity ex:coord1 .

ex:coord1 a geom-coord:DistanceCoordinate , geom-coord:LinearVelocityVectorZ .
"#;
