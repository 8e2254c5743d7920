pub mod component;
pub mod config;
pub mod init;
pub mod menu;
pub mod signal;
pub mod tools;

pub use component::frame_sequence_encoder::{EncodeError, FrameSequenceEncoder};
pub use config::EncodeJob;
