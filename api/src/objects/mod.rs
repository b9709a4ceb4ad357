#![allow(clippy::missing_errors_doc)]

mod appointment;
mod customer;
mod job_request;
mod offer;

pub use appointment::Appointment;
pub use customer::{CreateCustomerInput, Customer, UpdateCustomerInput};
pub use job_request::{JobRequest, Location};
pub use offer::Offer;
