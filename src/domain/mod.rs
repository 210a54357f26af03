// Domain layer: the pizza model and its factory functions. No dependencies beyond serde.

pub mod model;
