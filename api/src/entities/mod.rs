#![allow(clippy::wildcard_imports)]

pub mod prelude;

pub mod appointments;
pub mod customers;
pub mod job_requests;
pub mod locations;
pub mod offers;
pub mod workers;

pub mod sea_orm_active_enums;
