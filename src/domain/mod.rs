// Domain layer: core models and ports (interfaces). No IO beyond what the ports describe.

pub mod model;
pub mod ports;
