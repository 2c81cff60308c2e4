pub mod app_config;
pub mod device;
pub mod domain;
pub mod engine;
pub mod fixtures;
pub mod geofence_service;
mod geo_location_deserializer;
pub mod movement;
