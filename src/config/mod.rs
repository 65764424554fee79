pub mod entry;
pub mod loader;
pub mod resolver;

pub use entry::CompilerEntry;
pub use loader::{load_document, parse_document};
pub use resolver::ConfigResolver;
