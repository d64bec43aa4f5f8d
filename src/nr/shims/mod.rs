pub mod clean;
pub mod error;
pub mod generate;
pub mod io;
pub mod logging;
pub mod model;
pub mod sync;

pub use error::{Result, ToolError};
