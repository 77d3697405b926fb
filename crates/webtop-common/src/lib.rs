pub mod errors;
pub mod protocol;
pub mod types;

pub use errors::{ConfigError, WebtopError};
pub use protocol::{CommandRequest, CommandResult, ErrorBody};
pub use types::{Point, WindowId};

pub type Result<T> = std::result::Result<T, WebtopError>;
