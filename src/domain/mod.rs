// Domain layer - Scale records, aggregates and domain errors
pub mod error;
pub mod scale;
