// Domain layer: run model and the decoder port. No I/O here.

pub mod model;
pub mod ports;
