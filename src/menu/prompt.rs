use crate::config::{DEFAULT_FRAME_RATE, EncodeJob};
use crate::tools::{FramePattern, validate_directory_exists};
use anyhow::Result;
use console::{Term, style};
use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;
use std::path::Path;

/// 互動式輸入四個編碼參數
pub fn prompt_encode_job(term: &Term) -> Result<EncodeJob> {
    println!("{}", style("=== 影格序列轉影片 ===").cyan().bold());
    let theme = ColorfulTheme::default();

    let source_directory: String = Input::with_theme(&theme)
        .with_prompt("影格資料夾路徑")
        .validate_with(|input: &String| -> Result<(), String> {
            validate_directory_exists(Path::new(input.trim())).map_err(|e| e.to_string())
        })
        .interact_text_on(term)?;

    let frame_pattern: String = Input::with_theme(&theme)
        .with_prompt("影格檔名樣式")
        .default("frame_%04d.png".to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            FramePattern::parse(input.trim())
                .map(drop)
                .map_err(|e| e.to_string())
        })
        .interact_text_on(term)?;

    let frame_rate: u32 = Input::with_theme(&theme)
        .with_prompt("幀率 (fps)")
        .default(DEFAULT_FRAME_RATE)
        .validate_with(|input: &u32| -> Result<(), String> {
            if *input > 0 {
                Ok(())
            } else {
                Err("幀率必須大於 0".to_string())
            }
        })
        .interact_text_on(term)?;

    let output_path: String = Input::with_theme(&theme)
        .with_prompt("輸出影片路徑")
        .default(default_output_name(frame_pattern.trim()))
        .interact_text_on(term)?;

    Ok(EncodeJob::new(
        source_directory.trim(),
        frame_pattern.trim(),
        frame_rate,
        output_path.trim(),
    ))
}

/// `tap_%04d.png` -> `tap.mp4`
fn default_output_name(frame_pattern: &str) -> String {
    let stem = frame_pattern
        .split('%')
        .next()
        .unwrap_or_default()
        .trim_end_matches(['_', '-', '.', ' ']);
    if stem.is_empty() {
        "output.mp4".to_string()
    } else {
        format!("{stem}.mp4")
    }
}
