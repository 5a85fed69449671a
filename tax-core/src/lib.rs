pub mod calculations;
pub mod jurisdictions;
pub mod models;

pub use jurisdictions::{JurisdictionResult, Registry, RegistryError};
pub use models::*;
