// Infrastructure layer - Storage, configuration and response adapters
pub mod config;
pub mod http_response;
pub mod memory_repository;
