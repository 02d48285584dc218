use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::AnalysisError;
use crate::upload::UploadQueue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
}

/// The result panel shown after an analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisReport {
    pub condition: String,
    /// Percent, 0–100.
    pub confidence: u8,
    pub severity: Severity,
    pub risk_level: RiskLevel,
    pub description: String,
    pub key_indicators: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    pub warning_signs: Vec<String>,
    pub source_files: Vec<Uuid>,
}

/// Produce the sample report for the queued files.
///
/// The content is fixed; only `source_files` reflects the input.
pub fn analyze(queue: &UploadQueue) -> Result<AnalysisReport, AnalysisError> {
    if queue.is_empty() {
        return Err(AnalysisError::NoFiles);
    }

    let source_files: Vec<Uuid> = queue.files().iter().map(|f| f.id).collect();
    tracing::info!(files = source_files.len(), "analysis complete");

    Ok(AnalysisReport {
        condition: "Type 2 Diabetes".to_string(),
        confidence: 92,
        severity: Severity::Moderate,
        risk_level: RiskLevel::Medium,
        description: "Type 2 diabetes is a chronic condition that affects the way your body \
            metabolizes sugar (glucose). With type 2 diabetes, your body either resists the \
            effects of insulin, a hormone that regulates the movement of sugar into your cells, \
            or doesn't produce enough insulin to maintain normal glucose levels."
            .to_string(),
        key_indicators: strings(&[
            "Elevated blood glucose levels (245 mg/dL)",
            "Elevated HbA1c (7.8%)",
            "Normal blood pressure",
            "Slightly elevated cholesterol",
        ]),
        recommendations: vec![
            recommendation(
                "Medication",
                "Metformin (500mg twice daily) to help control blood sugar levels.",
            ),
            recommendation(
                "Diet Changes",
                "Reduce carbohydrate intake, focus on low-glycemic foods, increase fiber intake.",
            ),
            recommendation(
                "Regular Monitoring",
                "Check blood glucose levels daily, schedule follow-up appointment in 3 months.",
            ),
        ],
        warning_signs: strings(&[
            "Extreme thirst or hunger",
            "Frequent urination",
            "Unexplained weight loss",
            "Tingling in hands or feet",
        ]),
        source_files,
    })
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn recommendation(title: &str, description: &str) -> Recommendation {
    Recommendation {
        title: title.to_string(),
        description: description.to_string(),
    }
}
