use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "seqfilter",
    version,
    about = "Filter FASTA/FASTQ records by identifier list and sequence length"
)]
pub struct Cli {
    /// Input file (FASTA/FASTQ, plain or .gz; `-` for stdin)
    #[arg(short = 'i', long)]
    pub input: PathBuf,

    /// Output file (`.gz` writes gzip; `-` for stdout)
    #[arg(short = 'o', long)]
    pub output: PathBuf,

    /// Identifier list, one ID per line
    #[arg(short = 'l', long)]
    pub list: Option<PathBuf>,

    /// Maximum sequence length to put out (0 = unbounded)
    #[arg(short = 'x', long, default_value_t = 0)]
    pub max_length: usize,

    /// Minimum sequence length to put out (0 = unbounded)
    #[arg(short = 'm', long, default_value_t = 0)]
    pub min_length: usize,

    /// Negative filtering: keep records NOT in the list
    #[arg(short = 'n', long, default_value_t = false)]
    pub negate: bool,

    /// Skip malformed records instead of aborting
    #[arg(long, default_value_t = false)]
    pub skip_malformed: bool,

    /// Do not print the summary report
    #[arg(short = 'q', long, default_value_t = false)]
    pub quiet: bool,
}
