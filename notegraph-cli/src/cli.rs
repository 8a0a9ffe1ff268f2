use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "notegraph", about = "Markdown vault + RDF graph pipeline", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full pipeline: copy, diagram, rewrite, sync
    Process {
        /// Source vault directory
        #[arg(long)]
        source: Option<PathBuf>,

        /// Destination vault directory
        #[arg(long)]
        dest: Option<PathBuf>,

        /// Directory holding .ttl files
        #[arg(long)]
        triples: Option<PathBuf>,

        /// Base IRI namespace for synthesized entities
        #[arg(long)]
        base_iri: Option<String>,

        /// Draft status written into every processed note
        #[arg(long, value_name = "BOOL")]
        draft: Option<bool>,
    },

    /// Print one entity's Mermaid diagram to stdout
    Diagram {
        /// Note name or entity local name
        name: String,

        /// Directory holding .ttl files
        #[arg(long)]
        triples: Option<PathBuf>,

        /// Base IRI namespace for synthesized entities
        #[arg(long)]
        base_iri: Option<String>,

        /// Traversal depth
        #[arg(long, default_value_t = 1)]
        layers: usize,

        /// Suppress inverse edges regardless of class depth
        #[arg(long)]
        no_inverse: bool,
    },
}
