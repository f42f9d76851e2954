use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use countries_rs::{Client, Config, Controller, CountryRecord, Outcome, Page, storage};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "countries",
    version,
    about = "Fetch REST Countries data and summarize population, regions & languages"
)]
struct Cli {
    /// API root (default: https://restcountries.com/v3.1)
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Request timeout in seconds.
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every country.
    All(OutputArgs),
    /// Search countries by (partial) name.
    Search {
        /// Name or part of a name, e.g. "peru" or "united states"
        name: String,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Number locale for grouping (en, de, fr, es, it, pt, nl).
    #[arg(long, default_value = "en")]
    locale: String,
    /// Print an HTML fragment instead of text tables.
    #[arg(long, default_value_t = false)]
    html: bool,
    /// Save fetched records to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = Config::default().with_timeout_secs(cli.timeout);
    if let Some(url) = cli.base_url {
        config = config.with_base_url(url);
    }

    let (output, query) = match cli.cmd {
        Command::All(output) => (output, None),
        Command::Search { name, output } => (output, Some(name)),
    };
    config = config.with_locale(output.locale.clone());

    let client = Client::new(&config)?;
    let controller = Controller::new(client, config.locale.clone());
    let mut page = Page::new();

    let outcome = match &query {
        Some(q) => controller.search(q, &mut page),
        None => controller.list_all(&mut page),
    };

    if let Some(msg) = page.take_alert() {
        eprintln!("{msg}");
        return Ok(ExitCode::from(2));
    }

    let records = match outcome {
        Outcome::Failed(err) => anyhow::bail!("failed to load countries: {err}"),
        Outcome::Rendered { records, .. } => records,
        Outcome::NoResults | Outcome::EmptyQuery => Vec::new(),
    };

    if output.html {
        print!("{}", page.to_html());
    } else {
        print!("{}", page.to_text());
    }

    if let Some(path) = output.out.as_ref() {
        save(&records, path, output.format.as_ref())?;
        eprintln!("Saved {} countries to {}", records.len(), path.display());
    }

    Ok(ExitCode::SUCCESS)
}

fn save(records: &[CountryRecord], path: &Path, format: Option<&OutFormat>) -> Result<()> {
    let fmt = match format {
        Some(OutFormat::Csv) => "csv",
        Some(OutFormat::Json) => "json",
        None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
    }
    .to_ascii_lowercase();
    match fmt.as_str() {
        "csv" => storage::save_csv(records, path),
        "json" => storage::save_json(records, path),
        other => anyhow::bail!("unsupported format: {}", other),
    }
}
