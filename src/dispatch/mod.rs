pub mod batch;
pub mod command;
pub mod error;
pub mod params;
pub mod route;
