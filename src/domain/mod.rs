// Domain layer: models, the catalog and ports. Adapters live under crate::adapters.

pub mod catalog;
pub mod model;
pub mod ports;
