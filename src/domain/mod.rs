pub mod constants;
pub mod enums;
pub mod errors;
pub mod model;
