pub mod auth;
pub mod client;
pub mod clients;
pub mod error;
pub mod http;
pub mod models;
pub mod routing;
pub mod token;
pub mod utils;
pub mod validatable;
