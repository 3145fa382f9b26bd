use cfn_docgen::{cli::Cli, common::file_utils, config, generate_report, GeneratedReport};
use clap::Parser;
use colored::*;
use std::path::Path;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error generating requirements document: {}", e);
        process::exit(1);
    }
}

fn run() -> cfn_docgen::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    let config = config::load_config(cli.config.as_deref())?;

    let generated = generate_report(&cli.template_path, &config)?;

    if cli.dry_run {
        print!("{}", generated.report.render());
        // Summary goes to stderr so stdout stays a clean document.
        if cli.json {
            eprintln!("{}", json_summary(None, &generated)?);
        }
        return Ok(());
    }

    let output_path = file_utils::resolve_output_path(
        &cli.template_path,
        cli.output.as_deref(),
        &config.output.file_name,
    );
    file_utils::write_report(&output_path, &generated.report.render())?;

    if cli.json {
        println!("{}", json_summary(Some(&output_path), &generated)?);
    } else if !cli.quiet {
        println!(
            "{} {}",
            "System requirements document generated successfully:".green(),
            output_path.display()
        );
        println!("  - Parameters: {}", generated.parameter_count);
        println!("  - Resources: {}", generated.resource_count);
    }

    Ok(())
}

fn json_summary(output: Option<&Path>, generated: &GeneratedReport) -> cfn_docgen::Result<String> {
    let summary = match output {
        Some(path) => serde_json::json!({
            "output": path.display().to_string(),
            "parameters": generated.parameter_count,
            "resources": generated.resource_count,
        }),
        None => serde_json::json!({
            "dry_run": true,
            "parameters": generated.parameter_count,
            "resources": generated.resource_count,
        }),
    };
    Ok(serde_json::to_string_pretty(&summary)?)
}
