pub mod routes;
pub mod startup;
pub mod errors;
pub mod openapi;
pub mod views;

pub use routes::ServerState;
pub use startup::run;
