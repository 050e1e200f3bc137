pub mod curve;
pub mod methods;
