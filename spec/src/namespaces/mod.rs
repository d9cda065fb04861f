//! Vocabulary namespace modules.
//!
//! Each sub-module encodes one namespace of the motion specification
//! vocabulary as Rust static data: IRI constants for the terms the generator
//! matches against, plus a `module()` describing the namespace.

pub mod achd_solver;
pub mod constraint;
pub mod controller;
pub mod embed_map;
pub mod geom_coord;
pub mod pid_controller;
