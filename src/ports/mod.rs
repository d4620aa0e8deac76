/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the infrastructure interfaces the
/// application core depends on. They are implemented by adapters.
pub mod outbound;
