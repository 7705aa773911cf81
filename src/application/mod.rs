// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits ABOVE the services
// - It provides the boundary between HTTP clients and the catalog
// - It validates DTO fields, then hands off to the services
// - It translates errors into status codes, nowhere else

pub mod error_handling;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
