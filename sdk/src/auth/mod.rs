pub mod defaults;
pub mod login;
pub mod register;
pub mod register_agent;
