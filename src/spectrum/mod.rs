pub mod black_body_radiation;
pub mod sampling;
