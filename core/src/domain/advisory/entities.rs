use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::identification::entities::CropAnalysis;

/// Result of the full analysis pipeline: the normalized identification
/// plus the human-readable advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdvisoryOutcome {
    pub analysis: CropAnalysis,
    pub advisory: String,
}

/// Intermediate shape of an advisory before optional summarization.
#[derive(Debug, Clone, PartialEq)]
pub enum Composition {
    NotACrop,
    NeedClearerPhoto,
    Report {
        header: String,
        tips: Vec<String>,
        health_lines: Vec<String>,
    },
}
