use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, trace};

use kundali::app::{Submission, submit};
use kundali::banner::{BannerInfo, print_banner};
use kundali::config::{Config, load_env_file};
use kundali::flow::describe_timeout;
use kundali::form::{FormInput, Gender};
use kundali::prompt::fill_missing;
use kundali::source::OutputFormat;

#[derive(Parser)]
#[command(name = "kundali", version, about = "Astrology & Kundali Generator")]
struct Cli {
    /// Full name, e.g. "Vihan Verma"
    #[arg(long)]
    name: Option<String>,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    dob: Option<String>,

    /// Time of birth (HH:MM or HH:MM:SS, 24-hour)
    #[arg(long)]
    tob: Option<String>,

    /// Place of birth, e.g. "Vadodara, Gujarat"
    #[arg(long)]
    place: Option<String>,

    /// Gender
    #[arg(long, value_enum)]
    gender: Option<Gender>,

    /// Use the hosted flow instead of the built-in mock chart
    #[arg(long, default_value_t = false)]
    api: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Load environment from this file instead of searching for .env
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Request timeout in seconds for the hosted flow (default: none)
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Never prompt; fields missing from the command line fail validation
    #[arg(long, default_value_t = false)]
    no_prompt: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .with_target(cli.verbose >= 2)
        .init();
    trace!("args: {:?}", std::env::args().collect::<Vec<_>>());

    load_env_file(cli.env_file.as_deref())?;
    let mut config = Config::from_env()?;
    if let Some(secs) = cli.timeout {
        config.timeout = Some(std::time::Duration::from_secs(secs));
    }

    let run_url = config.run_url();
    print_banner(&BannerInfo {
        source: if cli.api { "api" } else { "mock" },
        endpoint: if cli.api { run_url.as_str() } else { "—" },
        auth_status: config.auth_status(),
        timeout: &describe_timeout(config.timeout),
    });

    let mut form = FormInput {
        name: cli.name,
        dob: cli.dob,
        tob: cli.tob,
        place: cli.place,
        gender: cli.gender,
    };
    if !cli.no_prompt && io::stdin().is_terminal() {
        fill_missing(&mut form, &mut io::stdin().lock(), &mut io::stdout())?;
    }

    let submission = Submission {
        form,
        api: cli.api,
        format: cli.format,
    };
    let outcome = submit(submission, &config, &mut io::stdout(), &mut io::stderr()).await?;
    debug!(?outcome, "done");
    Ok(outcome.exit_code())
}
