// Application layer - Collaborator ports and use cases
pub mod airport_directory;
pub mod airport_service;
pub mod flight_lookup;
pub mod flight_service;
pub mod saved_flight_repository;
pub mod saved_flight_service;
pub mod traffic_service;
pub mod traffic_source;

#[cfg(test)]
pub mod testing;
