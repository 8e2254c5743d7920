//! 功能元件模組

pub mod frame_sequence_encoder;

pub use frame_sequence_encoder::{EncodeError, FrameSequenceEncoder, JobRunner};
