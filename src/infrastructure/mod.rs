// Infrastructure layer - External dependencies and adapters
pub mod airportdb_client;
pub mod aviationstack_client;
pub mod config;
pub mod http_client;
pub mod opensky_client;
pub mod sqlite_repository;
