pub mod handlers;
pub mod prompt;

pub use handlers::{run_init, run_jobs};
pub use prompt::prompt_encode_job;
