// Domain layer - Pure models and functions with no I/O
pub mod airport;
pub mod flight;
pub mod geo;
pub mod saved_flight;
pub mod state_vector;
