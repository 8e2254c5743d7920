use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single encode job failed. Every variant is terminal for the job.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("invalid encode job: {0}")]
    InvalidJob(String),

    #[error("encoder `{program}` could not be started: {source}")]
    MissingEncoder {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("no frames matching {} were found", .pattern.display())]
    NoMatchingFrames { pattern: PathBuf },

    /// `code` is `None` when the encoder was killed by a signal.
    #[error("encoder {}: {stderr}", describe_exit(.code))]
    EncoderExit { code: Option<i32>, stderr: String },

    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    code.map_or_else(
        || "was terminated by a signal".to_string(),
        |code| format!("exited with status {code}"),
    )
}
