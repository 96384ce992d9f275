pub mod errors;
pub mod inspect;

pub use errors::{BingoError, ConfigError};
pub use inspect::{inspect, inspect_value};

pub type Result<T> = std::result::Result<T, BingoError>;
