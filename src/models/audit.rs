//! Audit trace models.
//!
//! Every pricing rule applied to a request is recorded as an [`AuditStep`],
//! so a quote can be explained line by line to the customer or to support
//! staff.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a pricing decision.
///
/// # Example
///
/// ```
/// use rental_pricing::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "rental_duration".to_string(),
///     rule_name: "Rental Duration".to_string(),
///     rule_ref: "duration".to_string(),
///     input: serde_json::json!({"start_date": "2024-12-02", "end_date": "2024-12-03"}),
///     output: serde_json::json!({"days": 1}),
///     reasoning: "2024-12-02 to 2024-12-03 spans 1 day".to_string(),
/// };
/// assert_eq!(step.rule_id, "rental_duration");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The section of the pricing configuration the rule reads.
    pub rule_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during pricing.
///
/// Warnings never change the price; they flag input the booking form
/// should probably not have let through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a new warning.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: severity.into(),
        }
    }
}

/// The complete audit trace for a price calculation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of pricing steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during pricing.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

impl AuditTrace {
    /// Returns the step recorded for a rule, if that rule ran.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|s| s.rule_id == rule_id)
    }

    /// Returns true if a warning with the given code was raised.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_step(step_number: u32, rule_id: &str) -> AuditStep {
        AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: "Test Rule".to_string(),
            rule_ref: "test".to_string(),
            input: serde_json::json!({}),
            output: serde_json::json!({}),
            reasoning: "test".to_string(),
        }
    }

    #[test]
    fn test_step_lookup_by_rule_id() {
        let trace = AuditTrace {
            steps: vec![create_step(1, "rental_duration"), create_step(2, "vat")],
            warnings: vec![],
            duration_us: 10,
        };

        assert_eq!(trace.step("vat").map(|s| s.step_number), Some(2));
        assert!(trace.step("one_way_fee").is_none());
    }

    #[test]
    fn test_has_warning() {
        let trace = AuditTrace {
            steps: vec![],
            warnings: vec![AuditWarning::new("DURATION_CLAMPED", "clamped", "medium")],
            duration_us: 0,
        };

        assert!(trace.has_warning("DURATION_CLAMPED"));
        assert!(!trace.has_warning("DATES_MISSING"));
    }

    #[test]
    fn test_audit_trace_round_trips_through_json() {
        let trace = AuditTrace {
            steps: vec![create_step(1, "rental_duration")],
            warnings: vec![AuditWarning::new("DATES_MISSING", "no dates", "low")],
            duration_us: 42,
        };

        let json = serde_json::to_string(&trace).unwrap();
        let parsed: AuditTrace = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, trace);
    }
}
