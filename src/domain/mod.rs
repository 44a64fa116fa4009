// Domain layer: format kinds and batch result models. No external dependencies beyond std/serde.

pub mod model;
