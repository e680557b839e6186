mod analysis;
mod health;

pub use analysis::{Analysis, CropAnalysis, IdentificationReport, SpeciesSuggestion};
pub use health::{Disease, HealthAssessment, HealthVerdict};
