//! Data models for `journey-tracker`

pub mod curriculum;
pub mod item;
pub mod progress;
pub mod week;

pub use curriculum::{Assessment, Curriculum};
pub use item::{ChecklistItem, EvidenceSpec};
pub use progress::{Confidence, ProgressState};
pub use week::{DueDate, Phase, Resource, StageInfo, Week};
