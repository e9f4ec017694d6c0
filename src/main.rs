//! alpine-answers - Main entry point
//!
//! Small CLI around the answer file loader: validate a file, show or export
//! its mapping, or write a starter template. Invoking the installer itself is
//! out of scope; this tool only produces the mapping the installer consumes.

use tracing::{debug, error, info};

use alpine_answers::cli::{Cli, Commands};
use alpine_answers::{template, AnswerFile};

/// Initialize tracing with RUST_LOG override support
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    match cli.command {
        Commands::Validate { file } => {
            info!("Validating answer file: {:?}", file);
            let answers = load_or_exit(&file);
            let warnings = answers.validate();

            for warning in &warnings {
                eprintln!("warning: {warning}");
            }
            if cli.strict {
                if let Err(e) = answers.ensure_valid() {
                    error!("strict mode: {}", e);
                    eprintln!("✗ {:?}: {} warning(s) in strict mode", file, warnings.len());
                    return Err(e.into());
                }
            }
            println!(
                "✓ {:?}: {} option(s), {} warning(s)",
                file,
                answers.len(),
                warnings.len()
            );
        }
        Commands::Show { file, json } => {
            let answers = load_or_exit(&file);
            report_warnings(&answers, cli.strict)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&answers)?);
            } else {
                for (key, value) in answers.resolved() {
                    if value.contains('\n') {
                        println!("{key}:");
                        for line in value.lines() {
                            println!("    {line}");
                        }
                    } else {
                        println!("{key}: {value}");
                    }
                }
            }
        }
        Commands::Env { file } => {
            let answers = load_or_exit(&file);
            report_warnings(&answers, cli.strict)?;
            print!("{}", answers.to_shell_exports());
        }
        Commands::Template { output } => match output {
            Some(path) => {
                template::write_template(&path)?;
                info!("Template written to {:?}", path);
                println!("✓ Template written to {:?}", path);
            }
            None => print!("{}", template::render()),
        },
    }

    Ok(())
}

/// Load an answer file or exit with the parse/IO error.
fn load_or_exit(path: &std::path::Path) -> AnswerFile {
    match AnswerFile::load(path) {
        Ok(answers) => answers,
        Err(e) => {
            error!("Failed to load answer file: {}", e);
            eprintln!("✗ {:?}: {}", path, e);
            std::process::exit(1);
        }
    }
}

/// Print validation warnings; in strict mode any warning is fatal.
fn report_warnings(
    answers: &AnswerFile,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let warnings = answers.validate();
    for warning in &warnings {
        eprintln!("warning: {warning}");
    }
    if strict {
        if let Err(e) = answers.ensure_valid() {
            eprintln!("✗ {} warning(s) in strict mode", warnings.len());
            return Err(e.into());
        }
    }
    Ok(())
}
