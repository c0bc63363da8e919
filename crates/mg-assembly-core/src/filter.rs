//! Parameter and result records for the contig filtering job.

use serde::{Deserialize, Serialize};

use crate::upa::Upa;
use crate::wire::{self, ExtraProps, WireRecord};

/// Input to a contig filtering job.
///
/// All fields are optional at this layer; required-by-convention fields are
/// enforced (if at all) by the job runner that consumes the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterContigsParams {
    /// Assembly object to filter.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "wire::lenient_upa"
    )]
    pub assembly_input_ref: Option<Upa>,

    /// Workspace to save the filtered assembly into.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "wire::lenient_string"
    )]
    pub workspace_name: Option<String>,

    /// Minimum contig length to keep, in bases.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "wire::lenient_int"
    )]
    pub min_length: Option<i64>,

    /// Properties outside the declared schema, kept for round-tripping.
    #[serde(flatten)]
    pub extra: ExtraProps,
}

impl FilterContigsParams {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the input assembly reference.
    pub fn with_assembly_input_ref(mut self, upa: impl Into<Upa>) -> Self {
        self.assembly_input_ref = Some(upa.into());
        self
    }

    /// Builder method to set the workspace name.
    pub fn with_workspace_name(mut self, name: impl Into<String>) -> Self {
        self.workspace_name = Some(name.into());
        self
    }

    /// Builder method to set the minimum contig length.
    pub fn with_min_length(mut self, length: i64) -> Self {
        self.min_length = Some(length);
        self
    }
}

impl WireRecord for FilterContigsParams {}

/// Output of a contig filtering job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterContigsResults {
    /// Name of the generated report object.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "wire::lenient_string"
    )]
    pub report_name: Option<String>,

    /// Reference to the generated report object.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "wire::lenient_upa"
    )]
    pub report_ref: Option<Upa>,

    /// Reference to the filtered assembly object.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "wire::lenient_upa"
    )]
    pub assembly_output: Option<Upa>,

    /// Contig count before filtering.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "wire::lenient_int"
    )]
    pub n_initial_contigs: Option<i64>,

    /// Contigs dropped by the length filter.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "wire::lenient_int"
    )]
    pub n_contigs_removed: Option<i64>,

    /// Contigs surviving the length filter.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "wire::lenient_int"
    )]
    pub n_contigs_remaining: Option<i64>,

    /// Properties outside the declared schema, kept for round-tripping.
    #[serde(flatten)]
    pub extra: ExtraProps,
}

impl FilterContigsResults {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the report name.
    pub fn with_report_name(mut self, name: impl Into<String>) -> Self {
        self.report_name = Some(name.into());
        self
    }

    /// Builder method to set the report reference.
    pub fn with_report_ref(mut self, upa: impl Into<Upa>) -> Self {
        self.report_ref = Some(upa.into());
        self
    }

    /// Builder method to set the filtered assembly reference.
    pub fn with_assembly_output(mut self, upa: impl Into<Upa>) -> Self {
        self.assembly_output = Some(upa.into());
        self
    }

    /// Builder method to set all three contig counts.
    pub fn with_contig_counts(mut self, initial: i64, removed: i64, remaining: i64) -> Self {
        self.n_initial_contigs = Some(initial);
        self.n_contigs_removed = Some(removed);
        self.n_contigs_remaining = Some(remaining);
        self
    }
}

impl WireRecord for FilterContigsResults {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{from_json_str, from_json_value, to_json_string, to_json_value};
    use serde_json::json;

    #[test]
    fn test_decode_params() {
        // Scenario: a plain submission with no extra keys.
        let params: FilterContigsParams = from_json_str(
            r#"{"assembly_input_ref":"1/2/3","workspace_name":"ws1","min_length":500}"#,
        )
        .unwrap();

        assert_eq!(params.assembly_input_ref, Some(Upa::new("1/2/3")));
        assert_eq!(params.workspace_name.as_deref(), Some("ws1"));
        assert_eq!(params.min_length, Some(500));
        assert!(params.extra.is_empty());
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let params = FilterContigsParams::new().with_workspace_name("ws1");
        let encoded = to_json_string(&params).unwrap();
        assert_eq!(encoded, r#"{"workspace_name":"ws1"}"#);

        let empty = to_json_string(&FilterContigsParams::new()).unwrap();
        assert_eq!(empty, "{}");
    }

    #[test]
    fn test_params_round_trip_with_extras() {
        let payload = json!({
            "assembly_input_ref": "7/8/9",
            "workspace_name": "ws2",
            "min_length": 1000,
            "provenance": {"service": "narrative"},
        });
        let params: FilterContigsParams = from_json_value(payload.clone()).unwrap();
        assert_eq!(
            params.extra.get("provenance"),
            Some(&json!({"service": "narrative"}))
        );
        assert_eq!(to_json_value(&params).unwrap(), payload);
    }

    #[test]
    fn test_results_field_order_follows_schema() {
        let results = FilterContigsResults::new()
            .with_report_name("r")
            .with_report_ref("1/2/3")
            .with_assembly_output("4/5/6")
            .with_contig_counts(10, 3, 7);
        let encoded = to_json_string(&results).unwrap();
        assert_eq!(
            encoded,
            concat!(
                r#"{"report_name":"r","report_ref":"1/2/3","assembly_output":"4/5/6","#,
                r#""n_initial_contigs":10,"n_contigs_removed":3,"n_contigs_remaining":7}"#
            )
        );
    }

    #[test]
    fn test_contig_counts_are_consistent() {
        // Semantic invariant of a well-formed result; the schema layer itself
        // does not enforce it.
        let results = FilterContigsResults::new().with_contig_counts(120, 45, 75);
        let initial = results.n_initial_contigs.unwrap();
        let removed = results.n_contigs_removed.unwrap();
        let remaining = results.n_contigs_remaining.unwrap();
        assert_eq!(initial, removed + remaining);
    }

    #[test]
    fn test_results_round_trip() {
        let results = FilterContigsResults::new()
            .with_report_name("filter_report")
            .with_report_ref("12/34/1")
            .with_assembly_output("12/35/1")
            .with_contig_counts(2000, 512, 1488);
        let encoded = to_json_string(&results).unwrap();
        let decoded: FilterContigsResults = from_json_str(&encoded).unwrap();
        assert_eq!(decoded, results);
    }
}
