mod ffprobe_info;
mod frame_pattern;
mod frame_scanner;
mod path_validator;

pub use ffprobe_info::{VideoInfo, get_video_info};
pub use frame_pattern::{FramePattern, PatternError};
pub use frame_scanner::{FrameSequence, START_NUMBER_RANGE, scan_frame_sequence};
pub use path_validator::{validate_directory_exists, validate_output_writable};
