use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthAssessment {
    pub is_healthy_probability: f64,
    /// Provider-returned rank order is preserved.
    pub diseases: Vec<Disease>,
    pub verdict: HealthVerdict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Disease {
    pub name: String,
    pub probability: Option<f64>,
    pub treatment: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum HealthVerdict {
    #[serde(rename = "healthy")]
    Healthy,
    #[serde(rename = "moderately healthy")]
    ModeratelyHealthy,
    #[serde(rename = "needs attention")]
    NeedsAttention,
    #[serde(rename = "unhealthy")]
    Unhealthy,
    #[serde(rename = "requires immediate attention")]
    RequiresImmediateAttention,
}

fn severe_disease_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)rot|rotten|mold|blight|decay|wilt|severe|critical").unwrap())
}

impl HealthVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthVerdict::Healthy => "healthy",
            HealthVerdict::ModeratelyHealthy => "moderately healthy",
            HealthVerdict::NeedsAttention => "needs attention",
            HealthVerdict::Unhealthy => "unhealthy",
            HealthVerdict::RequiresImmediateAttention => "requires immediate attention",
        }
    }

    /// Derive the verdict from the health probability and disease list.
    ///
    /// The rules are applied as a final-override sequence, not a single
    /// prioritized match; the ordering and the strict threshold
    /// comparisons are load-bearing and must not be reshuffled.
    pub fn derive(is_healthy_probability: f64, diseases: &[Disease]) -> Self {
        let mut verdict = HealthVerdict::Healthy;

        if is_healthy_probability < 0.4 {
            verdict = HealthVerdict::Unhealthy;
        } else if is_healthy_probability < 0.7 {
            let has_significant_disease = diseases
                .iter()
                .any(|d| d.probability.is_some_and(|p| p > 0.3));
            verdict = if has_significant_disease {
                HealthVerdict::NeedsAttention
            } else {
                HealthVerdict::ModeratelyHealthy
            };
        }

        let has_serious_disease = diseases.iter().any(|d| {
            severe_disease_regex().is_match(&d.name) && d.probability.is_some_and(|p| p > 0.2)
        });
        if has_serious_disease {
            verdict = HealthVerdict::RequiresImmediateAttention;
        }

        if diseases.is_empty() && is_healthy_probability > 0.7 {
            verdict = HealthVerdict::Healthy;
        }

        verdict
    }
}

impl HealthAssessment {
    pub fn new(is_healthy_probability: f64, diseases: Vec<Disease>) -> Self {
        let verdict = HealthVerdict::derive(is_healthy_probability, &diseases);
        Self {
            is_healthy_probability,
            diseases,
            verdict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disease(name: &str, probability: Option<f64>) -> Disease {
        Disease {
            name: name.to_string(),
            probability,
            treatment: None,
        }
    }

    #[test]
    fn low_probability_is_unhealthy() {
        assert_eq!(
            HealthVerdict::derive(0.39, &[]),
            HealthVerdict::Unhealthy
        );
    }

    #[test]
    fn mid_probability_without_significant_disease_is_moderately_healthy() {
        let diseases = vec![disease("Leaf spot", Some(0.2))];
        assert_eq!(
            HealthVerdict::derive(0.55, &diseases),
            HealthVerdict::ModeratelyHealthy
        );
    }

    #[test]
    fn mid_probability_with_significant_disease_needs_attention() {
        let diseases = vec![disease("Leaf spot", Some(0.35))];
        assert_eq!(
            HealthVerdict::derive(0.55, &diseases),
            HealthVerdict::NeedsAttention
        );
    }

    #[test]
    fn serious_disease_forces_immediate_attention() {
        let diseases = vec![disease("Root rot", Some(0.25))];
        assert_eq!(
            HealthVerdict::derive(0.6, &diseases),
            HealthVerdict::RequiresImmediateAttention
        );
    }

    #[test]
    fn serious_disease_overrides_high_health_probability() {
        let diseases = vec![disease("Late blight", Some(0.21))];
        assert_eq!(
            HealthVerdict::derive(0.9, &diseases),
            HealthVerdict::RequiresImmediateAttention
        );
    }

    #[test]
    fn no_diseases_and_high_probability_is_healthy() {
        assert_eq!(HealthVerdict::derive(0.85, &[]), HealthVerdict::Healthy);
    }

    #[test]
    fn low_probability_disease_list_keeps_ladder_verdict() {
        // Non-empty list, all probabilities low, high health probability:
        // the empty-list override does not fire.
        let diseases = vec![disease("Leaf spot", Some(0.1))];
        assert_eq!(
            HealthVerdict::derive(0.9, &diseases),
            HealthVerdict::Healthy
        );
    }

    #[test]
    fn threshold_edges_are_strict() {
        // p exactly 0.4 lands in the middle branch.
        assert_eq!(
            HealthVerdict::derive(0.4, &[]),
            HealthVerdict::ModeratelyHealthy
        );
        // p exactly 0.7 skips the ladder entirely; empty list with
        // p == 0.7 does not qualify for the healthy override either.
        assert_eq!(HealthVerdict::derive(0.7, &[]), HealthVerdict::Healthy);
        // Disease probability exactly 0.3 is not significant.
        let d3 = vec![disease("Leaf spot", Some(0.3))];
        assert_eq!(
            HealthVerdict::derive(0.5, &d3),
            HealthVerdict::ModeratelyHealthy
        );
        // Severe-name disease with probability exactly 0.2 does not force
        // immediate attention.
        let d2 = vec![disease("Root rot", Some(0.2))];
        assert_eq!(
            HealthVerdict::derive(0.5, &d2),
            HealthVerdict::ModeratelyHealthy
        );
    }

    #[test]
    fn severe_keywords_match_case_insensitively() {
        let diseases = vec![disease("SEVERE Wilt complex", Some(0.3))];
        assert_eq!(
            HealthVerdict::derive(0.8, &diseases),
            HealthVerdict::RequiresImmediateAttention
        );
    }

    #[test]
    fn disease_without_probability_never_qualifies() {
        let diseases = vec![disease("Root rot", None)];
        assert_eq!(HealthVerdict::derive(0.5, &diseases), HealthVerdict::ModeratelyHealthy);
    }

    #[test]
    fn verdict_strings_match_wire_format() {
        assert_eq!(
            HealthVerdict::RequiresImmediateAttention.as_str(),
            "requires immediate attention"
        );
        assert_eq!(HealthVerdict::ModeratelyHealthy.as_str(), "moderately healthy");
    }
}
