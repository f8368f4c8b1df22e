use clap::{Args as ClapArgs, Parser, Subcommand};

use protlinks::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter, TsvFormatter};
use protlinks::interactions::domain::{OptionValue, Query, GENE_LIST};
use protlinks::ports::outbound::TableFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tsv,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'tsv', 'json' or 'markdown'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a formatter instance for the specified output format
    pub fn create_formatter(&self) -> Box<dyn TableFormatter> {
        match self {
            OutputFormat::Tsv => Box::new(TsvFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }
}

/// Fetch protein-protein interactions from BioGRID and STRING
#[derive(Parser, Debug)]
#[command(name = "protlinks")]
#[command(version)]
#[command(about = "Fetch protein-protein interactions from BioGRID and STRING", long_about = None)]
pub struct Args {
    /// Output format: tsv, json or markdown [default: tsv]
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Config file path (defaults to ./protlinks.config.yml when present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Query the BioGRID REST API
    Biogrid(BiogridArgs),
    /// Download the STRING network of an organism and list gene neighbors
    #[command(name = "string")]
    StringDb(StringArgs),
    /// Query the STRING network API
    Network(NetworkArgs),
}

#[derive(ClapArgs, Debug)]
pub struct BiogridArgs {
    /// Gene to search for; repeat for several genes (sent as geneList)
    #[arg(short, long = "gene", value_name = "GENE")]
    pub genes: Vec<String>,

    /// Match genes against official symbols
    #[arg(long)]
    pub search_names: bool,

    /// Match genes against Entrez Gene identifiers
    #[arg(long)]
    pub search_ids: bool,

    /// Match genes against synonyms
    #[arg(long)]
    pub search_synonyms: bool,

    /// Any other BioGRID option, e.g. --option taxId=9606 --option max=50
    #[arg(long = "option", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub options: Vec<(String, String)>,

    /// BioGRID access key (falls back to the config file, then $ACCESS_KEY)
    #[arg(long)]
    pub access_key: Option<String>,
}

impl BiogridArgs {
    /// Builds the BioGRID query; validation happens in the use case
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        for (key, value) in &self.options {
            query.insert(key.clone(), parse_option_value(value));
        }
        if !self.genes.is_empty() {
            query.insert(GENE_LIST, OptionValue::List(self.genes.clone()));
        }
        for (flag, name) in [
            (self.search_ids, "searchIds"),
            (self.search_names, "searchNames"),
            (self.search_synonyms, "searchSynonyms"),
        ] {
            if flag {
                query.insert(name, true);
            }
        }
        query
    }
}

#[derive(ClapArgs, Debug)]
pub struct StringArgs {
    /// NCBI taxonomy id of the organism, e.g. 9606
    #[arg(short, long)]
    pub species: String,

    /// Gene (STRING preferred name); repeat for several genes
    #[arg(short, long = "gene", value_name = "GENE", required = true)]
    pub genes: Vec<String>,

    /// Minimum combined score, 0-1000 [default: 600]
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=1000))]
    pub min_score: Option<u32>,
}

#[derive(ClapArgs, Debug)]
pub struct NetworkArgs {
    /// NCBI taxonomy id of the organism, e.g. 9606
    #[arg(short, long)]
    pub species: String,

    /// Protein name or STRING identifier; repeat for several proteins
    #[arg(short, long = "gene", value_name = "GENE", required = true)]
    pub genes: Vec<String>,

    /// Minimum combined score, 0-1000
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=1000))]
    pub required_score: Option<u32>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

/// `true`/`false` become booleans, everything else stays text
fn parse_option_value(raw: &str) -> OptionValue {
    match raw.to_lowercase().as_str() {
        "true" => OptionValue::Bool(true),
        "false" => OptionValue::Bool(false),
        _ => OptionValue::Text(raw.to_string()),
    }
}
