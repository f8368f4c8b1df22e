mod cli;
mod config;

use cli::{Args, BiogridArgs, Command, NetworkArgs, OutputFormat, StringArgs};
use config::ConfigFile;
use protlinks::prelude::*;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    let config = load_config(args.config.as_deref())?;
    let format = resolve_format(args.format, &config)?;

    let table = match args.command {
        Command::Biogrid(biogrid) => run_biogrid(biogrid, &config)?,
        Command::StringDb(string) => run_string(string, &config)?,
        Command::Network(network) => run_network(network)?,
    };

    let output = format.create_formatter().format(&table)?;

    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = args.output {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    };

    presenter.present(&output)?;

    Ok(())
}

/// Explicit `--config` path, else `protlinks.config.yml` in the working directory
fn load_config(path: Option<&str>) -> Result<ConfigFile> {
    match path {
        Some(path) => config::load_config_from_path(Path::new(path)),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(config::discover_config(&cwd)?.unwrap_or_default())
        }
    }
}

/// `--format` wins over the config file; TSV otherwise
fn resolve_format(flag: Option<OutputFormat>, config: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = flag {
        return Ok(format);
    }
    match config.format.as_deref() {
        Some(format) => OutputFormat::from_str(format).map_err(|message| {
            ProtlinksError::Validation {
                message: format!("config file: {}", message),
            }
            .into()
        }),
        None => Ok(OutputFormat::Tsv),
    }
}

fn run_biogrid(args: BiogridArgs, config: &ConfigFile) -> Result<Table> {
    // An absent key still lets option errors surface first
    let access_key = config
        .resolve_access_key(args.access_key.clone())
        .unwrap_or_default();

    let mut use_case = GetInteractionsUseCase::new(BlockingHttpClient::new()?, access_key);
    if let Some(ref base_url) = config.biogrid_base_url {
        use_case = use_case.with_base_url(base_url.clone());
    }

    use_case.execute(&args.to_query())
}

fn run_string(args: StringArgs, config: &ConfigFile) -> Result<Table> {
    let species = SpeciesId::new(&args.species)?;
    let min_score = args
        .min_score
        .or(config.min_score)
        .unwrap_or(DEFAULT_MIN_SCORE);

    let http_client = BlockingHttpClient::new()?;
    let reporter = StderrProgressReporter::new();
    let dataset = StringDataset::load(&http_client, species, &reporter)?;
    eprintln!("🧬 Loaded {}", dataset);

    dataset.get_neighbors(&args.genes, min_score)
}

fn run_network(args: NetworkArgs) -> Result<Table> {
    let species = SpeciesId::new(&args.species)?;
    let mut request = NetworkRequest::new(args.genes, species)?;
    if let Some(score) = args.required_score {
        request = request.with_required_score(score);
    }

    GetNetworkUseCase::new(BlockingHttpClient::new()?).execute(&request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_format_flag_wins() {
        let config = ConfigFile {
            format: Some("json".to_string()),
            ..Default::default()
        };
        let format = resolve_format(Some(OutputFormat::Markdown), &config).unwrap();
        assert_eq!(format, OutputFormat::Markdown);
    }

    #[test]
    fn test_resolve_format_from_config() {
        let config = ConfigFile {
            format: Some("json".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_format(None, &config).unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_resolve_format_default_tsv() {
        let format = resolve_format(None, &ConfigFile::default()).unwrap();
        assert_eq!(format, OutputFormat::Tsv);
    }

    #[test]
    fn test_resolve_format_invalid_config_value() {
        let config = ConfigFile {
            format: Some("xml".to_string()),
            ..Default::default()
        };
        let err = resolve_format(None, &config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProtlinksError>(),
            Some(ProtlinksError::Validation { .. })
        ));
    }

    #[test]
    fn test_load_config_explicit_missing_path() {
        let result = load_config(Some("/nonexistent/protlinks.config.yml"));
        assert!(result.is_err());
    }
}
