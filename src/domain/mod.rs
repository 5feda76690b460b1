// Domain layer: plain data and the input port. No calculation logic lives here.

pub mod model;
pub mod ports;
