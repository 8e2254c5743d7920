use crate::tools::FramePattern;
use std::path::Path;

/// ffmpeg's image2 demuxer looks for the first frame in `0..START_NUMBER_RANGE`
/// unless `-start_number` is given.
pub const START_NUMBER_RANGE: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSequence {
    pub first_index: u64,
    pub count: u64,
}

impl FrameSequence {
    #[must_use]
    pub const fn last_index(&self) -> u64 {
        self.first_index + self.count - 1
    }
}

/// 找出目錄中符合樣式的連續影格
///
/// A missing index ends the sequence. Returns `None` when no first frame
/// exists, which is also the case for a missing directory or a pattern whose
/// padding width differs from the files on disk.
#[must_use]
pub fn scan_frame_sequence(directory: &Path, pattern: &FramePattern) -> Option<FrameSequence> {
    let frame_exists = |index: u64| directory.join(pattern.render(index)).is_file();

    let first_index = (0..START_NUMBER_RANGE).find(|&index| frame_exists(index))?;
    let count = (first_index..)
        .take_while(|&index| frame_exists(index))
        .count() as u64;

    Some(FrameSequence { first_index, count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch_frames(dir: &Path, names: impl IntoIterator<Item = String>) {
        for name in names {
            fs::write(dir.join(name), b"png").unwrap();
        }
    }

    #[test]
    fn test_contiguous_sequence() {
        let dir = TempDir::new().unwrap();
        touch_frames(dir.path(), (0..100).map(|i| format!("shot_{i:04}.png")));

        let pattern = FramePattern::parse("shot_%04d.png").unwrap();
        let sequence = scan_frame_sequence(dir.path(), &pattern).unwrap();

        assert_eq!(sequence.first_index, 0);
        assert_eq!(sequence.count, 100);
        assert_eq!(sequence.last_index(), 99);
    }

    #[test]
    fn test_gap_truncates_sequence() {
        let dir = TempDir::new().unwrap();
        touch_frames(
            dir.path(),
            [0, 1, 2, 4, 5].iter().map(|i| format!("name_{i:03}.png")),
        );

        let pattern = FramePattern::parse("name_%03d.png").unwrap();
        let sequence = scan_frame_sequence(dir.path(), &pattern).unwrap();

        assert_eq!(sequence.count, 3);
    }

    #[test]
    fn test_padding_width_mismatch_matches_nothing() {
        let dir = TempDir::new().unwrap();
        touch_frames(dir.path(), (0..13).map(|i| format!("name_{i:03}.png")));

        let pattern = FramePattern::parse("name_%04d.png").unwrap();
        assert_eq!(scan_frame_sequence(dir.path(), &pattern), None);
    }

    #[test]
    fn test_sequence_may_start_within_search_range() {
        let dir = TempDir::new().unwrap();
        touch_frames(dir.path(), (1..=10).map(|i| format!("f{i:04}.png")));

        let pattern = FramePattern::parse("f%04d.png").unwrap();
        let sequence = scan_frame_sequence(dir.path(), &pattern).unwrap();

        assert_eq!(sequence.first_index, 1);
        assert_eq!(sequence.count, 10);
    }

    #[test]
    fn test_sequence_starting_past_search_range() {
        let dir = TempDir::new().unwrap();
        touch_frames(dir.path(), (5..10).map(|i| format!("f{i:04}.png")));

        let pattern = FramePattern::parse("f%04d.png").unwrap();
        assert_eq!(scan_frame_sequence(dir.path(), &pattern), None);
    }

    #[test]
    fn test_empty_and_missing_directory() {
        let dir = TempDir::new().unwrap();
        let pattern = FramePattern::parse("shot_%04d.png").unwrap();

        assert_eq!(scan_frame_sequence(dir.path(), &pattern), None);
        assert_eq!(
            scan_frame_sequence(&dir.path().join("missing"), &pattern),
            None
        );
    }

    #[test]
    fn test_directory_named_like_a_frame_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("shot_0000.png")).unwrap();

        let pattern = FramePattern::parse("shot_%04d.png").unwrap();
        assert_eq!(scan_frame_sequence(dir.path(), &pattern), None);
    }
}
