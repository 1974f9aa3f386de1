//! Morse Tools library

pub mod encode;
pub mod decode;
pub mod common;
pub mod config;
pub mod error;

pub use encode::{EncodeArgs, EncodeCli};
pub use decode::{DecodeArgs, DecodeCli};
pub use common::{GlobalConfig, RunOutcome, init_logging, format_table};
pub use config::{InputSource, Settings};
pub use error::ToolError;
