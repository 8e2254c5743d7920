pub mod load;
pub mod save;
pub mod types;

pub use load::load_job_file;
pub use save::save_job_file;
pub use types::{DEFAULT_ENCODER, DEFAULT_FRAME_RATE, EncodeJob, JobFile};
