use crate::config::EncodeJob;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::Command;

pub const VIDEO_CODEC: &str = "libx264";
pub const PIXEL_FORMAT: &str = "yuv420p";

pub struct FfmpegCommand {
    program: OsString,
    frame_rate: u32,
    input_path: PathBuf,
    destination_path: PathBuf,
}

impl FfmpegCommand {
    #[must_use]
    pub fn new(program: impl AsRef<OsStr>, job: &EncodeJob) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            frame_rate: job.frame_rate,
            input_path: job.input_path(),
            destination_path: job.output_path.clone(),
        }
    }

    /// 完整參數列表（不含程式名稱）
    #[must_use]
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(10);
        args.push("-y".into());
        args.push("-framerate".into());
        args.push(self.frame_rate.to_string().into());
        args.push("-i".into());
        args.push(self.input_path.clone().into_os_string());
        args.extend(["-c:v", VIDEO_CODEC, "-pix_fmt", PIXEL_FORMAT].map(OsString::from));
        args.push(self.destination_path.clone().into_os_string());
        args
    }

    #[must_use]
    pub fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args());
        cmd
    }

    /// Shell-like rendering for logs.
    #[must_use]
    pub fn display_line(&self) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(self.args().iter().map(OsString::as_os_str))
            .map(OsStr::to_string_lossy)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[OsString]) -> Vec<String> {
        args.iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_argument_template() {
        let job = EncodeJob::new("frames", "shot_%04d.png", 30, "shot.mp4");
        let cmd = FfmpegCommand::new("ffmpeg", &job);

        assert_eq!(
            strings(&cmd.args()),
            [
                "-y",
                "-framerate",
                "30",
                "-i",
                "frames/shot_%04d.png",
                "-c:v",
                "libx264",
                "-pix_fmt",
                "yuv420p",
                "shot.mp4",
            ]
        );
    }

    #[test]
    fn test_values_are_substituted_verbatim() {
        let job = EncodeJob::new(
            "./outputs/hw3/tap_water/json/",
            "name_%03d.png",
            24,
            "out dir/name.mkv",
        );
        let cmd = FfmpegCommand::new("/usr/local/bin/ffmpeg", &job);
        let args = strings(&cmd.args());

        assert_eq!(args[2], "24");
        assert_eq!(args[4], "./outputs/hw3/tap_water/json/name_%03d.png");
        assert_eq!(args.last().map(String::as_str), Some("out dir/name.mkv"));
    }

    #[test]
    fn test_build_command_uses_program_and_args() {
        let job = EncodeJob::new("frames", "f_%04d.png", 30, "f.mp4");
        let cmd = FfmpegCommand::new("my-ffmpeg", &job);
        let command = cmd.build_command();

        assert_eq!(command.get_program(), "my-ffmpeg");
        assert_eq!(
            command.get_args().map(OsStr::to_os_string).collect::<Vec<_>>(),
            cmd.args()
        );
    }

    #[test]
    fn test_display_line() {
        let job = EncodeJob::new("frames", "f_%04d.png", 30, "f.mp4");
        let cmd = FfmpegCommand::new("ffmpeg", &job);
        assert_eq!(
            cmd.display_line(),
            "ffmpeg -y -framerate 30 -i frames/f_%04d.png -c:v libx264 -pix_fmt yuv420p f.mp4"
        );
    }
}
