//! 影格序列轉影片元件
//!
//! 呼叫外部 ffmpeg，以固定參數將編號 PNG 影格編碼為 H.264 / yuv420p 影片

mod error;
mod ffmpeg_command;
mod job_runner;
mod main;

pub use error::EncodeError;
pub use ffmpeg_command::{FfmpegCommand, PIXEL_FORMAT, VIDEO_CODEC};
pub use job_runner::{JobReport, JobRunner, TaskStatus};
pub use main::{FrameSequenceEncoder, STDERR_TAIL_LINES};
