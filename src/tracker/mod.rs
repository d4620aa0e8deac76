/// Tracker domain: lock graph model, trail resolution and report assembly.
///
/// Nothing in this module performs I/O. Filesystem and network access
/// happen behind the ports and are injected by the application layer.
pub mod domain;
pub mod services;
