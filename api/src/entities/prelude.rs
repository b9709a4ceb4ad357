pub use super::{
    appointments::Entity as Appointments, customers::Entity as Customers,
    job_requests::Entity as JobRequests, locations::Entity as Locations, offers::Entity as Offers,
    workers::Entity as Workers,
};
