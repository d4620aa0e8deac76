/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_writer;
mod node_modules_locator;

pub use file_reader::{parse_lock_graph, parse_manifest, FileSystemReader};
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use node_modules_locator::NodeModulesLocator;
