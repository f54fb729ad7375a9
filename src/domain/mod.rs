// Domain layer: record models, capability ports and the shape
// contract. No external dependencies beyond std/serde when needed.

pub mod geometry;
pub mod model;
pub mod ports;
