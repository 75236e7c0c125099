pub mod maximize_service;
pub mod stats_service;
