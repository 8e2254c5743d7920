use crate::component::frame_sequence_encoder::{
    FrameSequenceEncoder, JobReport, JobRunner, TaskStatus,
};
use crate::config::{EncodeJob, JobFile, save_job_file};
use crate::tools::{VideoInfo, get_video_info};
use anyhow::{Result, bail};
use console::style;
use log::{info, warn};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// 執行一組工作並輸出摘要；任何工作失敗即回傳錯誤
pub fn run_jobs(
    encoder: FrameSequenceEncoder,
    jobs: Vec<EncodeJob>,
    shutdown_signal: &Arc<AtomicBool>,
    verify: bool,
) -> Result<()> {
    if jobs.is_empty() {
        println!("{}", style("沒有任何編碼工作").yellow());
        return Ok(());
    }

    let mut runner = JobRunner::new(encoder, jobs, Arc::clone(shutdown_signal));
    let reports = runner.run();

    if verify {
        for report in reports
            .iter()
            .filter(|r| r.status == TaskStatus::Completed)
        {
            verify_output(report);
        }
    }

    print_summary(reports);

    if !runner.all_succeeded() {
        bail!(
            "{} 個工作失敗，{} 個工作未執行",
            runner.count(TaskStatus::Failed),
            runner.count(TaskStatus::Pending)
        );
    }
    Ok(())
}

pub fn run_init(path: &Path, force: bool) -> Result<()> {
    save_job_file(path, &JobFile::template(), force)?;
    info!("已建立工作檔: {}", path.display());
    println!(
        "{} {}",
        style("已建立工作檔:").green(),
        style(path.display()).bold()
    );
    Ok(())
}

fn verify_output(report: &JobReport) {
    match get_video_info(&report.job.output_path) {
        Ok(info) => println!(
            "  {} {}",
            style("✓").green(),
            describe_video(&report.job.output_path, &info)
        ),
        Err(e) => warn!(
            "無法檢查輸出影片 {}: {e:#}",
            report.job.output_path.display()
        ),
    }
}

fn describe_video(path: &Path, info: &VideoInfo) -> String {
    let frames = info
        .frame_count
        .map_or_else(|| "?".to_string(), |n| n.to_string());
    format!(
        "{}: {} 格 @ {:.2} fps, {}x{}, {} / {}",
        path.display(),
        frames,
        info.frame_rate,
        info.width,
        info.height,
        info.codec_name,
        info.pixel_format
    )
}

fn print_summary(reports: &[JobReport]) {
    let completed = reports
        .iter()
        .filter(|r| r.status == TaskStatus::Completed)
        .count();
    let failed: Vec<&JobReport> = reports
        .iter()
        .filter(|r| r.status == TaskStatus::Failed)
        .collect();
    let skipped = reports
        .iter()
        .filter(|r| r.status == TaskStatus::Pending)
        .count();

    println!();
    println!("{}", style("=== 編碼任務摘要 ===").cyan().bold());
    println!("  總計: {} 個工作", reports.len());
    println!("  成功: {} 個", style(completed).green());
    if !failed.is_empty() {
        println!("  失敗: {} 個", style(failed.len()).red());
        for report in failed {
            if let Some(error) = &report.error {
                println!(
                    "    {} {}",
                    style(report.job.output_path.display()).bold(),
                    style(error).red()
                );
            }
        }
    }
    if skipped > 0 {
        println!("  未執行: {} 個", style(skipped).yellow());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_video() {
        let info = VideoInfo {
            codec_name: "h264".to_string(),
            pixel_format: "yuv420p".to_string(),
            width: 64,
            height: 48,
            frame_rate: 30.0,
            frame_count: Some(100),
            duration_seconds: Some(3.33),
        };
        assert_eq!(
            describe_video(Path::new("shot.mp4"), &info),
            "shot.mp4: 100 格 @ 30.00 fps, 64x48, h264 / yuv420p"
        );
    }

    #[test]
    fn test_run_jobs_reports_failure() {
        let dir = tempfile::TempDir::new().unwrap();
        let jobs = vec![EncodeJob::new(
            dir.path(),
            "shot_%04d.png",
            30,
            dir.path().join("shot.mp4"),
        )];

        let result = run_jobs(
            FrameSequenceEncoder::new(),
            jobs,
            &Arc::new(AtomicBool::new(false)),
            false,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_run_init_writes_template() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("jobs.json");

        run_init(&path, false).unwrap();
        assert!(path.is_file());
        assert!(run_init(&path, false).is_err());
    }
}
