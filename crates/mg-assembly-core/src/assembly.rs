//! Parameter and result records for the assembly pipeline job.
//!
//! The wire contract for these records has drifted over time (`reads_ref`
//! became `reads_upa`, `assembly_name` became `output_assembly_name`, the
//! result's `assembly_output` became `assembly_upa`). The latest field set is
//! canonical; renamed keys from earlier revisions are still accepted on
//! decode and re-emitted under their canonical names.

use serde::{Deserialize, Serialize};

use crate::upa::Upa;
use crate::wire::{self, ExtraProps, WireRecord};

/// Input to a metagenome assembly pipeline job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssemblyPipelineParams {
    /// Paired-end reads object to assemble.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "wire::lenient_upa"
    )]
    pub reads_upa: Option<Upa>,

    /// Workspace to save output objects into.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "wire::lenient_string"
    )]
    pub workspace_name: Option<String>,

    /// Name for the assembled output object.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "wire::lenient_string"
    )]
    pub output_assembly_name: Option<String>,

    /// 0/1 flag: skip the RQCFilter cleaning step.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "wire::lenient_int"
    )]
    pub skip_rqcfilter: Option<i64>,

    /// If set, the cleaned reads are saved under this name.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "wire::lenient_string"
    )]
    pub cleaned_reads_name: Option<String>,

    /// If set, the reads-to-assembly alignment is saved under this name.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "wire::lenient_string"
    )]
    pub alignment_name: Option<String>,

    /// 0/1 flag: run the pipeline in debug mode. Hidden option, used only by
    /// integration tests; not part of the public contract.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "wire::lenient_int"
    )]
    pub debug: Option<i64>,

    /// Properties outside the declared schema, kept for round-tripping.
    #[serde(flatten)]
    pub extra: ExtraProps,
}

impl AssemblyPipelineParams {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the reads reference.
    pub fn with_reads_upa(mut self, upa: impl Into<Upa>) -> Self {
        self.reads_upa = Some(upa.into());
        self
    }

    /// Builder method to set the workspace name.
    pub fn with_workspace_name(mut self, name: impl Into<String>) -> Self {
        self.workspace_name = Some(name.into());
        self
    }

    /// Builder method to set the output assembly name.
    pub fn with_output_assembly_name(mut self, name: impl Into<String>) -> Self {
        self.output_assembly_name = Some(name.into());
        self
    }

    /// Builder method to set the skip_rqcfilter flag.
    pub fn with_skip_rqcfilter(mut self, flag: i64) -> Self {
        self.skip_rqcfilter = Some(flag);
        self
    }

    /// Builder method to set the cleaned reads name.
    pub fn with_cleaned_reads_name(mut self, name: impl Into<String>) -> Self {
        self.cleaned_reads_name = Some(name.into());
        self
    }

    /// Builder method to set the alignment name.
    pub fn with_alignment_name(mut self, name: impl Into<String>) -> Self {
        self.alignment_name = Some(name.into());
        self
    }

    /// Builder method to set the debug flag.
    pub fn with_debug(mut self, flag: i64) -> Self {
        self.debug = Some(flag);
        self
    }

    /// Bool reading of the `skip_rqcfilter` 0/1 flag. Unset means false.
    pub fn rqcfilter_skipped(&self) -> bool {
        matches!(self.skip_rqcfilter, Some(v) if v != 0)
    }

    /// Bool reading of the `debug` 0/1 flag. Unset means false.
    pub fn debug_enabled(&self) -> bool {
        matches!(self.debug, Some(v) if v != 0)
    }
}

impl WireRecord for AssemblyPipelineParams {
    const LEGACY_KEYS: &'static [(&'static str, &'static str)] = &[
        ("reads_ref", "reads_upa"),
        ("assembly_name", "output_assembly_name"),
    ];
}

/// Output of a metagenome assembly pipeline job.
///
/// The optional references are present only when the corresponding input
/// options requested them (`cleaned_reads_name`, filtering).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssemblyPipelineResults {
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

    /// Reference to the assembled output object.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "wire::lenient_upa"
    )]
    pub assembly_upa: Option<Upa>,

    /// Reference to the cleaned reads object, if one was saved.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "wire::lenient_upa"
    )]
    pub cleaned_reads_upa: Option<Upa>,

    /// Reference to the filtered reads object, if one was saved.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "wire::lenient_upa"
    )]
    pub filtered_reads_upa: Option<Upa>,

    /// Properties outside the declared schema, kept for round-tripping.
    #[serde(flatten)]
    pub extra: ExtraProps,
}

impl AssemblyPipelineResults {
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

    /// Builder method to set the assembly reference.
    pub fn with_assembly_upa(mut self, upa: impl Into<Upa>) -> Self {
        self.assembly_upa = Some(upa.into());
        self
    }

    /// Builder method to set the cleaned reads reference.
    pub fn with_cleaned_reads_upa(mut self, upa: impl Into<Upa>) -> Self {
        self.cleaned_reads_upa = Some(upa.into());
        self
    }

    /// Builder method to set the filtered reads reference.
    pub fn with_filtered_reads_upa(mut self, upa: impl Into<Upa>) -> Self {
        self.filtered_reads_upa = Some(upa.into());
        self
    }
}

impl WireRecord for AssemblyPipelineResults {
    const LEGACY_KEYS: &'static [(&'static str, &'static str)] =
        &[("assembly_output", "assembly_upa")];
}
