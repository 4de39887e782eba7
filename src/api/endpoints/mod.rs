//! API endpoint handlers, one module per entity.
//!
//! Handlers own the connection for the duration of the request; it is
//! dropped on return whether the handler succeeded or not.

pub mod appointments;
pub mod doctors;
pub mod health;
pub mod medications;
pub mod patients;
pub mod prescriptions;
