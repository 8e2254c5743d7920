use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::{Term, style};
use frame_sequence_encoder::component::FrameSequenceEncoder;
use frame_sequence_encoder::config::{DEFAULT_ENCODER, DEFAULT_FRAME_RATE, EncodeJob, load_job_file};
use frame_sequence_encoder::init;
use frame_sequence_encoder::menu::{prompt_encode_job, run_init, run_jobs};
use frame_sequence_encoder::signal::setup_shutdown_signal;
use log::{info, warn};

/// Encode numbered PNG frames into an H.264 video with ffmpeg.
#[derive(Parser)]
#[command(name = "frameseq", version)]
struct Cli {
    /// Encoder program (defaults to `ffmpeg` on PATH).
    #[arg(long, global = true, env = "FRAMESEQ_ENCODER")]
    encoder: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode one frame sequence.
    Encode {
        /// Directory containing the frames.
        #[arg(long, short)]
        source: PathBuf,

        /// Frame file name pattern, e.g. shot_%04d.png.
        #[arg(long, short)]
        pattern: String,

        /// Input frame rate.
        #[arg(long, default_value_t = DEFAULT_FRAME_RATE, value_parser = clap::value_parser!(u32).range(1..))]
        fps: u32,

        /// Output video file (overwritten if it exists).
        #[arg(long, short)]
        output: PathBuf,

        /// Probe the produced video with ffprobe.
        #[arg(long)]
        verify: bool,
    },

    /// Run every job of a JSON job file, one after another.
    Batch {
        job_file: PathBuf,

        /// Probe the produced videos with ffprobe.
        #[arg(long)]
        verify: bool,
    },

    /// Write an example job file.
    Init {
        job_file: PathBuf,

        /// Replace an existing file.
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    init::init();

    if let Err(e) = run() {
        warn!("Program error: {e:#}");
        eprintln!("{} {e:#}", style("錯誤:").red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let shutdown_signal = setup_shutdown_signal()?;

    match cli.command {
        Some(Commands::Encode {
            source,
            pattern,
            fps,
            output,
            verify,
        }) => {
            let job = EncodeJob::new(source, pattern, fps, output);
            run_jobs(encoder_for(cli.encoder, None), vec![job], &shutdown_signal, verify)
        }
        Some(Commands::Batch { job_file, verify }) => {
            let file = load_job_file(&job_file)?;
            info!(
                "已載入工作檔 {}，共 {} 個工作",
                job_file.display(),
                file.jobs.len()
            );
            run_jobs(
                encoder_for(cli.encoder, file.encoder),
                file.jobs,
                &shutdown_signal,
                verify,
            )
        }
        Some(Commands::Init { job_file, force }) => run_init(&job_file, force),
        None => {
            let term = Term::stdout();
            let job = prompt_encode_job(&term)?;
            run_jobs(encoder_for(cli.encoder, None), vec![job], &shutdown_signal, false)
        }
    }
}

/// 指令列參數優先，其次為工作檔設定
fn encoder_for(flag: Option<String>, job_file: Option<String>) -> FrameSequenceEncoder {
    let program = flag
        .or(job_file)
        .unwrap_or_else(|| DEFAULT_ENCODER.to_string());
    FrameSequenceEncoder::with_program(program)
}
