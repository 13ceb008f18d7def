pub mod advisor;
pub mod config;
pub mod render;
pub mod routes;
