//! Greeting used by the health check.

/// Returns a greeting string with the crate version.
pub fn hello_world() -> String {
    format!("Hello from murmur_core v{}", super::version())
}
