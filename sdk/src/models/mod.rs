pub mod agent;
pub mod claim;
pub mod communication;
pub mod customer;
pub mod notification;
pub mod policy;
pub mod role;
