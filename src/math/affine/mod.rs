pub mod builder;
pub mod transforms;
