pub mod config_loader;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod simulation;

pub use domain::constants::*;
pub use domain::enums::*;
pub use domain::errors::*;
pub use domain::model::layer::*;
pub use domain::model::level::*;
pub use domain::model::metrics::*;
pub use infrastructure::exchange::thalex::*;
pub use simulation::*;
