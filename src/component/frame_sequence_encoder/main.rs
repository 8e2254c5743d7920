use super::error::EncodeError;
use super::ffmpeg_command::FfmpegCommand;
use crate::config::{DEFAULT_ENCODER, EncodeJob};
use crate::tools::{FramePattern, FrameSequence, scan_frame_sequence, validate_output_writable};
use log::debug;
use std::ffi::{OsStr, OsString};
use std::process::{Output, Stdio};

/// Lines of encoder stderr kept in [`EncodeError::EncoderExit`].
pub const STDERR_TAIL_LINES: usize = 20;

/// Turns an [`EncodeJob`] into one blocking encoder run.
#[derive(Debug, Clone)]
pub struct FrameSequenceEncoder {
    program: OsString,
}

impl Default for FrameSequenceEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSequenceEncoder {
    #[must_use]
    pub fn new() -> Self {
        Self::with_program(DEFAULT_ENCODER)
    }

    #[must_use]
    pub fn with_program(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
        }
    }

    /// Runs the encoder for `job` and waits for it to exit.
    ///
    /// Before spawning, the job is checked for a usable pattern and frame
    /// rate, the frame sequence is located on disk and the output location is
    /// checked for writability. None of these checks touch `output_path`.
    pub fn encode(&self, job: &EncodeJob) -> Result<(), EncodeError> {
        let pattern = Self::validate_job(job)?;

        let sequence = Self::locate_frames(job, &pattern)?;
        debug!(
            "找到 {} 張影格 ({}..={})",
            sequence.count,
            sequence.first_index,
            sequence.last_index()
        );

        validate_output_writable(&job.output_path).map_err(|source| EncodeError::Io {
            path: job.output_path.clone(),
            source,
        })?;

        let ffmpeg_cmd = FfmpegCommand::new(&self.program, job);
        debug!("執行: {}", ffmpeg_cmd.display_line());

        let output = ffmpeg_cmd
            .build_command()
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| EncodeError::MissingEncoder {
                program: self.program.to_string_lossy().into_owned(),
                source,
            })?;

        Self::check_exit(&output)
    }

    fn validate_job(job: &EncodeJob) -> Result<FramePattern, EncodeError> {
        if job.frame_rate == 0 {
            return Err(EncodeError::InvalidJob(
                "frame rate must be a positive integer".to_string(),
            ));
        }
        FramePattern::parse(&job.frame_pattern).map_err(|e| EncodeError::InvalidJob(e.to_string()))
    }

    fn locate_frames(job: &EncodeJob, pattern: &FramePattern) -> Result<FrameSequence, EncodeError> {
        scan_frame_sequence(&job.source_directory, pattern).ok_or_else(|| {
            EncodeError::NoMatchingFrames {
                pattern: job.input_path(),
            }
        })
    }

    fn check_exit(output: &Output) -> Result<(), EncodeError> {
        if output.status.success() {
            return Ok(());
        }

        Err(EncodeError::EncoderExit {
            code: output.status.code(),
            stderr: stderr_tail(&output.stderr, STDERR_TAIL_LINES),
        })
    }
}

/// 保留 stderr 最後幾行（ffmpeg 會先輸出很長的版本資訊）
fn stderr_tail(stderr: &[u8], max_lines: usize) -> String {
    let text = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(max_lines);
    lines[start..].join("\n")
}
