//! MG Assembly CLI - payload tool for the assembly/filtering job schemas.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use mg_assembly_core::wire::{from_json_str, to_json_string};
use mg_assembly_core::{
    AssemblyPipelineParams, AssemblyPipelineResults, FilterContigsParams, FilterContigsResults,
    Upa, WireRecord,
};

/// MG Assembly payload tool
#[derive(Parser)]
#[command(name = "mg-assembly")]
#[command(about = "Check and normalize MG assembly job payloads", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a payload and print a field summary
    Check {
        /// Record kind to decode as
        #[arg(value_enum)]
        kind: RecordKind,

        /// Payload file (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Decode a payload and re-emit it in canonical field order
    Normalize {
        /// Record kind to decode as
        #[arg(value_enum)]
        kind: RecordKind,

        /// Payload file (stdin when omitted)
        file: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
}

/// The four record kinds carried on the wire.
#[derive(Clone, Copy, ValueEnum)]
enum RecordKind {
    /// FilterContigsParams
    FilterParams,
    /// FilterContigsResults
    FilterResults,
    /// AssemblyPipelineParams
    AssemblyParams,
    /// AssemblyPipelineResults
    AssemblyResults,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; lenient-decode warnings surface here.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { kind, file } => {
            let input = read_input(file)?;
            check(kind, &input)?;
        }
        Commands::Normalize { kind, file, pretty } => {
            let input = read_input(file)?;
            normalize(kind, &input, pretty)?;
        }
    }

    Ok(())
}

fn read_input(file: Option<PathBuf>) -> Result<String, std::io::Error> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn check(kind: RecordKind, input: &str) -> Result<(), Box<dyn std::error::Error>> {
    match kind {
        RecordKind::FilterParams => {
            let params: FilterContigsParams = from_json_str(input)?;
            println!("FilterContigsParams:");
            print_upa("assembly_input_ref", &params.assembly_input_ref);
            print_string("workspace_name", &params.workspace_name);
            print_int("min_length", &params.min_length);
            print_extras(&params.extra);
        }
        RecordKind::FilterResults => {
            let results: FilterContigsResults = from_json_str(input)?;
            println!("FilterContigsResults:");
            print_string("report_name", &results.report_name);
            print_upa("report_ref", &results.report_ref);
            print_upa("assembly_output", &results.assembly_output);
            print_int("n_initial_contigs", &results.n_initial_contigs);
            print_int("n_contigs_removed", &results.n_contigs_removed);
            print_int("n_contigs_remaining", &results.n_contigs_remaining);
            print_extras(&results.extra);
        }
        RecordKind::AssemblyParams => {
            let params: AssemblyPipelineParams = from_json_str(input)?;
            println!("AssemblyPipelineParams:");
            print_upa("reads_upa", &params.reads_upa);
            print_string("workspace_name", &params.workspace_name);
            print_string("output_assembly_name", &params.output_assembly_name);
            print_int("skip_rqcfilter", &params.skip_rqcfilter);
            print_string("cleaned_reads_name", &params.cleaned_reads_name);
            print_string("alignment_name", &params.alignment_name);
            print_int("debug", &params.debug);
            print_extras(&params.extra);
        }
        RecordKind::AssemblyResults => {
            let results: AssemblyPipelineResults = from_json_str(input)?;
            println!("AssemblyPipelineResults:");
            print_string("report_name", &results.report_name);
            print_upa("report_ref", &results.report_ref);
            print_upa("assembly_upa", &results.assembly_upa);
            print_upa("cleaned_reads_upa", &results.cleaned_reads_upa);
            print_upa("filtered_reads_upa", &results.filtered_reads_upa);
            print_extras(&results.extra);
        }
    }

    Ok(())
}

fn normalize(kind: RecordKind, input: &str, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let output = match kind {
        RecordKind::FilterParams => reencode::<FilterContigsParams>(input, pretty)?,
        RecordKind::FilterResults => reencode::<FilterContigsResults>(input, pretty)?,
        RecordKind::AssemblyParams => reencode::<AssemblyPipelineParams>(input, pretty)?,
        RecordKind::AssemblyResults => reencode::<AssemblyPipelineResults>(input, pretty)?,
    };
    println!("{}", output);

    Ok(())
}

fn reencode<T: WireRecord>(input: &str, pretty: bool) -> Result<String, Box<dyn std::error::Error>> {
    let record: T = from_json_str(input)?;
    if pretty {
        Ok(serde_json::to_string_pretty(&record)?)
    } else {
        Ok(to_json_string(&record)?)
    }
}

fn print_string(name: &str, value: &Option<String>) {
    println!("  {:<22}{}", name, value.as_deref().unwrap_or("(unset)"));
}

fn print_upa(name: &str, value: &Option<Upa>) {
    match value {
        Some(upa) => println!("  {:<22}{}", name, upa),
        None => println!("  {:<22}(unset)", name),
    }
}

fn print_int(name: &str, value: &Option<i64>) {
    match value {
        Some(v) => println!("  {:<22}{}", name, v),
        None => println!("  {:<22}(unset)", name),
    }
}

fn print_extras(extra: &mg_assembly_core::ExtraProps) {
    if extra.is_empty() {
        return;
    }
    println!("  Extra keys:");
    for (key, value) in extra {
        println!("    {} = {}", key, value);
    }
}
