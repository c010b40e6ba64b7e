//! The car showroom: every creational pattern working together

mod errors;
mod registry;
mod tour;

pub use errors::ShowroomError;
pub use registry::FactoryRegistry;
pub use tour::run_showroom;
