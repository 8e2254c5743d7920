use super::error::EncodeError;
use super::main::FrameSequenceEncoder;
use crate::config::EncodeJob;
use log::{error, info, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

#[derive(Debug)]
pub struct JobReport {
    pub job: EncodeJob,
    pub status: TaskStatus,
    pub error: Option<EncodeError>,
    pub elapsed: Option<Duration>,
}

impl JobReport {
    const fn new(job: EncodeJob) -> Self {
        Self {
            job,
            status: TaskStatus::Pending,
            error: None,
            elapsed: None,
        }
    }
}

/// 依序執行多個編碼工作，一次只執行一個
///
/// A failed job does not stop the batch. Once the shutdown signal is set, no
/// further job is started and the remaining reports stay `Pending`.
pub struct JobRunner {
    encoder: FrameSequenceEncoder,
    reports: Vec<JobReport>,
    shutdown_signal: Arc<AtomicBool>,
}

impl JobRunner {
    #[must_use]
    pub fn new(
        encoder: FrameSequenceEncoder,
        jobs: Vec<EncodeJob>,
        shutdown_signal: Arc<AtomicBool>,
    ) -> Self {
        Self {
            encoder,
            reports: jobs.into_iter().map(JobReport::new).collect(),
            shutdown_signal,
        }
    }

    pub fn run(&mut self) -> &[JobReport] {
        info!("開始編碼任務，共 {} 個工作", self.reports.len());

        for index in 0..self.reports.len() {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("收到中斷信號，略過剩餘 {} 個工作", self.pending_count());
                break;
            }
            self.run_job(index);
        }

        info!(
            "編碼任務結束 - 成功: {}, 失敗: {}",
            self.count(TaskStatus::Completed),
            self.count(TaskStatus::Failed)
        );
        &self.reports
    }

    fn run_job(&mut self, index: usize) {
        let encoder = &self.encoder;
        let report = &mut self.reports[index];
        report.status = TaskStatus::Running;

        info!(
            "啟動編碼任務 [{}]: {} -> {}",
            index + 1,
            report.job.input_path().display(),
            report.job.output_path.display()
        );

        let started = Instant::now();
        let result = encoder.encode(&report.job);
        report.elapsed = Some(started.elapsed());

        match result {
            Ok(()) => {
                report.status = TaskStatus::Completed;
                info!(
                    "編碼完成 [{}]: {} ({:.1}s)",
                    index + 1,
                    report.job.output_path.display(),
                    started.elapsed().as_secs_f64()
                );
            }
            Err(e) => {
                error!("編碼失敗 [{}]: {e}", index + 1);
                report.status = TaskStatus::Failed;
                report.error = Some(e);
            }
        }
    }

    fn pending_count(&self) -> usize {
        self.count(TaskStatus::Pending)
    }

    #[must_use]
    pub fn count(&self, status: TaskStatus) -> usize {
        self.reports.iter().filter(|r| r.status == status).count()
    }

    #[must_use]
    pub fn reports(&self) -> &[JobReport] {
        &self.reports
    }

    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.reports
            .iter()
            .all(|r| r.status == TaskStatus::Completed)
    }
}
