pub mod handlers;
pub mod models;
pub mod navigation;
pub mod routes;
