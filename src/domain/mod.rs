// Domain layer: records and ports (interfaces). No transport code here.

pub(crate) mod lenient;
pub mod model;
pub mod ports;
