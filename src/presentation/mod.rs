// Presentation layer - HTTP surface
pub mod api_error;
pub mod app_state;
pub mod dto;
pub mod handlers;
pub mod routes;
