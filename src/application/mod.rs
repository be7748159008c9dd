// Application layer - Use cases and repository ports
pub mod sample_data;
pub mod scale_repository;
pub mod scale_service;
