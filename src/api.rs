//! Process-wide detector and the free-function call surface.

use anyhow::{ensure, Result};
use std::sync::{Arc, OnceLock};
use tracing::info;

use crate::detector::{DetectionResult, Detector, DetectorConfig};
use crate::table::FrequencyTable;

static DEFAULT_DETECTOR: OnceLock<Detector> = OnceLock::new();

/// Eagerly build the builtin table so a broken build fails at startup
/// instead of on the first detection call.
pub fn init() -> &'static Detector {
    default_detector()
}

/// Install `table` as the process-wide table. Must run before anything
/// touches the default detector; a second install is an error.
pub fn init_with_table(table: FrequencyTable) -> Result<&'static Detector> {
    let detector = Detector::new(Arc::new(table), DetectorConfig::default())?;
    let mut installed = false;
    let active = DEFAULT_DETECTOR.get_or_init(|| {
        installed = true;
        detector
    });
    ensure!(installed, "default detector is already initialized");
    info!(
        "Installed custom frequency table with {} n-grams",
        active.table().len()
    );
    Ok(active)
}

/// The process-wide detector, built over the embedded table on first use.
pub fn default_detector() -> &'static Detector {
    DEFAULT_DETECTOR.get_or_init(Detector::builtin)
}

/// Name of the most likely language; `"Unknown"` without evidence.
pub fn detect_best(text: &[u8]) -> &'static str {
    default_detector().detect_best(text)
}

/// Numeric id of the most likely language; 26 without evidence.
pub fn detect_best_code(text: &[u8]) -> u16 {
    default_detector().detect_best_code(text)
}

/// Up to three ranked languages with shares, scores and a reliability flag.
pub fn detect_top3(text: &[u8]) -> DetectionResult {
    default_detector().detect_top3(text)
}
