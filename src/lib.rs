pub mod alias;
pub mod cli;
pub mod config;
pub mod error;
pub mod query;
pub mod version;

pub use alias::{Domain, Language, normalize};
pub use config::{CompilerEntry, ConfigResolver};
pub use error::{ConfigError, ConfigResult};
pub use query::Action;
