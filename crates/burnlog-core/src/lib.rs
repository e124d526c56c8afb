pub mod client;
pub mod decode;
pub mod points;
pub mod types;

pub use client::{BoardClient, ClientError, FetchError};
pub use decode::DecodeError;
pub use points::StoryPointParser;
pub use types::*;
