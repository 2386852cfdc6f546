pub mod api;
pub mod detector;
pub mod language;
pub mod reader;
pub mod table;

// Re-export the call surface and main types for convenient access
pub use api::{default_detector, detect_best, detect_best_code, detect_top3, init, init_with_table};
pub use detector::{
    DetectionResult, Detector, DetectorConfig, RankedCandidate, RawResult, Script,
    MIN_DOMINANT_PERCENT, MIN_RELIABLE_BYTES, MIN_RETAINED_PERCENT, MIN_SCORE_SEPARATION,
};
pub use language::Language;

// Re-export table construction and persistence
pub use table::{builtin_table, FrequencyTable, TableBuilder, TableSnapshot, TrainingConfig};
