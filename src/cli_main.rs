use clap::{Args, Parser, Subcommand};

use wren::config::AssemblyConfig;
use wren::graph::{LinkPolicy, StartPolicy};
use wren::kmer::Alphabet;

#[derive(Parser, Debug)]
#[command(name = "wren", version, about = "De Bruijn graph genome assembler", long_about = None)]
pub struct Cli {
    /// Log debug detail for every stage
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that builds a graph
#[derive(Args, Debug, Clone)]
pub struct GraphOptions {
    /// Input FASTA or FASTQ file, optionally gzipped
    #[arg(short, long)]
    pub input: String,

    /// K-mer size (default 21)
    #[arg(short)]
    pub k: Option<usize>,

    /// Read alphabet, in the order successor symbols are tried (default ACGT)
    #[arg(long)]
    pub alphabet: Option<Alphabet>,

    /// How repeated successor k-mers are linked
    #[arg(long, value_enum)]
    pub link_policy: Option<LinkPolicy>,

    /// Where the Eulerian walk starts
    #[arg(long, value_enum)]
    pub start_policy: Option<StartPolicy>,

    /// Skip the Eulerian feasibility check and accept partial walks
    #[arg(long)]
    pub no_check: bool,

    /// JSON config file; flags given on the command line take precedence
    #[arg(long)]
    pub config: Option<String>,

    /// Write the graph in DOT format
    #[arg(long)]
    pub dot: Option<String>,

    /// Write the node table as TSV
    #[arg(long)]
    pub tsv: Option<String>,
}

impl GraphOptions {
    /// Config file (or defaults) with command-line overrides applied
    pub fn resolve_config(&self) -> anyhow::Result<AssemblyConfig> {
        let mut config = match &self.config {
            Some(path) => AssemblyConfig::from_json_file(path)?,
            None => AssemblyConfig::default(),
        };
        if let Some(k) = self.k {
            config.k = k;
        }
        if let Some(alphabet) = &self.alphabet {
            config.alphabet = alphabet.clone();
        }
        if let Some(policy) = self.link_policy {
            config.link_policy = policy;
        }
        if let Some(policy) = self.start_policy {
            config.start_policy = policy;
        }
        if self.no_check {
            config.check_feasibility = false;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble reads into one sequence along an Eulerian trail
    ///
    /// The walk uses every arc, so with first-match linking a read that repeats
    /// a k-mer can come back longer than the read (ACGTACGT at k = 4 gives
    /// ACGTACGTA). Use --link-policy all-matches or --start-policy first-node
    /// --no-check to compare.
    Assemble {
        #[command(flatten)]
        graph: GraphOptions,

        /// Output FASTA(.gz) file
        #[arg(short, long)]
        output: String,

        /// Header of the output FASTA record
        #[arg(long, default_value = "assembled_sequence")]
        name: String,

        /// Write the walked path as TSV
        #[arg(long)]
        path_tsv: Option<String>,

        /// Write a JSON run report
        #[arg(long)]
        report: Option<String>,
    },

    /// Build the graph without walking it and print its statistics as JSON
    Graph {
        #[command(flatten)]
        graph: GraphOptions,
    },
}
