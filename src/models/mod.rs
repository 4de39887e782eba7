pub mod appointment;
pub mod doctor;
pub mod enums;
pub mod filters;
pub mod medication;
pub mod patient;
pub mod prescription;
pub mod time_of_day;
pub mod validation;

pub use appointment::*;
pub use doctor::*;
pub use enums::*;
pub use filters::*;
pub use medication::*;
pub use patient::*;
pub use prescription::*;
pub use time_of_day::*;
pub use validation::*;
