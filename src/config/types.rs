use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_ENCODER: &str = "ffmpeg";
pub const DEFAULT_FRAME_RATE: u32 = 30;

/// One frame-sequence-to-video conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeJob {
    pub source_directory: PathBuf,
    /// printf-style file name, e.g. `shot_%04d.png`
    pub frame_pattern: String,
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    pub output_path: PathBuf,
}

impl EncodeJob {
    pub fn new(
        source_directory: impl Into<PathBuf>,
        frame_pattern: impl Into<String>,
        frame_rate: u32,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_directory: source_directory.into(),
            frame_pattern: frame_pattern.into(),
            frame_rate,
            output_path: output_path.into(),
        }
    }

    /// `source_directory` joined with `frame_pattern`, as handed to the encoder.
    #[must_use]
    pub fn input_path(&self) -> PathBuf {
        self.source_directory.join(&self.frame_pattern)
    }
}

const fn default_frame_rate() -> u32 {
    DEFAULT_FRAME_RATE
}

/// 批次工作檔（JSON）
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobFile {
    /// Encoder program; `ffmpeg` from `PATH` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoder: Option<String>,
    #[serde(default)]
    pub jobs: Vec<EncodeJob>,
}

impl JobFile {
    /// 產生範例工作檔內容
    #[must_use]
    pub fn template() -> Self {
        Self {
            encoder: Some(DEFAULT_ENCODER.to_string()),
            jobs: vec![EncodeJob::new(
                "./frames",
                "shot_%04d.png",
                DEFAULT_FRAME_RATE,
                "shot.mp4",
            )],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_rate_defaults_to_thirty() {
        let job: EncodeJob = serde_json::from_str(
            r#"{ "source_directory": "frames", "frame_pattern": "tap_%04d.png", "output_path": "tap.mp4" }"#,
        )
        .unwrap();
        assert_eq!(job.frame_rate, 30);
    }

    #[test]
    fn test_input_path_keeps_pattern_verbatim() {
        let job = EncodeJob::new("./outputs/hw3/tap_water/json/", "tap_%04d.png", 30, "tap.mp4");
        assert_eq!(
            job.input_path(),
            PathBuf::from("./outputs/hw3/tap_water/json/tap_%04d.png")
        );
    }

    #[test]
    fn test_job_file_without_encoder() {
        let file: JobFile = serde_json::from_str(r#"{ "jobs": [] }"#).unwrap();
        assert_eq!(file.encoder, None);
        assert!(file.jobs.is_empty());

        let json = serde_json::to_string(&file).unwrap();
        assert!(!json.contains("encoder"));
    }
}
