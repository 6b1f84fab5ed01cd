/// Liveness and Prometheus-style endpoints. Neither touches the object store.
pub mod handle;
pub mod route;
pub mod schema;
