use anyhow::{Context, Result};
use changelint::{
    ChangelintConfig, ChangelogValidator, Outcome, ReportFormat, load_document, write_report,
};
use clap::Parser;
use log::debug;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "changelint")]
#[command(version, about = "validate section and version headings of a changelog", long_about = None)]
struct Cli {
    /// directory containing the changelog (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    path: PathBuf,

    /// changelog file, overriding the configured name (relative to --path)
    #[arg(long)]
    file: Option<PathBuf>,

    /// configuration file (defaults to changelint.toml in --path)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// output format (json or human)
    #[arg(short, long, default_value = "human")]
    format: ReportFormat,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let outcome = handle_check(&cli)?;
    if !outcome.is_valid() {
        // return error to cause non-zero exit code
        anyhow::bail!("changelog validation failed");
    }

    Ok(())
}

fn handle_check(cli: &Cli) -> Result<Outcome> {
    let config = match &cli.config {
        Some(config_path) => ChangelintConfig::load_from_file(config_path)
            .context("failed to load configuration")?,
        None => ChangelintConfig::load_or_default(&cli.path)
            .context("failed to load configuration")?,
    };

    let file = cli
        .file
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.changelog.changelog_file_name));
    let changelog_path = resolve(&cli.path, &file);
    debug!("checking {}", changelog_path.display());

    let validator =
        ChangelogValidator::new(&config.changelog).context("invalid changelog configuration")?;
    let document = load_document(&changelog_path)?;
    let report = validator.validate(&document);

    let stdout = std::io::stdout();
    let outcome = write_report(&report, cli.format, &mut stdout.lock())?;

    Ok(outcome)
}

fn resolve(dir: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() || dir == Path::new(".") {
        file.to_path_buf()
    } else {
        dir.join(file)
    }
}
