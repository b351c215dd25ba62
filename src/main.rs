// cargo run -- --order-file ./data/order.xlsx --spec-file ./data/state_specs.xlsx --state MN --vehicle-type MFSAB
// cargo run -- -o ./data/order.xlsx -s ./data/state_specs.xlsx --state TX --vehicle-type "Type W/C" --strict --debug

use clap::Parser;
use order_compliance::cli::{Args, OutputFormat};
use order_compliance::compliance_lib::{
    ComplianceCheckerBuilder, ComplianceError, ERRORS_LOG_FILE, utils::write_error_to_log,
};
use order_compliance::output::{render_debug_sample, render_summary};

fn run(args: &Args) -> anyhow::Result<()> {
    let checker = ComplianceCheckerBuilder::new(
        &args.order_file,
        &args.spec_file,
        args.state_tab(),
        args.vehicle_type,
    )
    .options(args.check_options())
    .order_sheet(&args.order_sheet)
    .order_column(&args.order_column)
    .build()?;

    let report = checker.check()?;
    let sample = if args.debug {
        Some(checker.debug_sample()?)
    } else {
        None
    };

    // Nothing reaches stdout unless the CSV was written
    report.export_to_csv(&args.output)?;

    match args.format {
        OutputFormat::Table => {
            println!("{}", render_summary(&report));
            println!("✅ CSV file created: {}", args.output);
            if let Some(sample) = &sample {
                println!("\n{}", render_debug_sample(sample));
            }
        }
        OutputFormat::Json => {
            // stdout carries only the JSON document
            println!("{}", report.to_json_with_sample(sample.as_ref())?);
            eprintln!("✅ CSV file created: {}", args.output);
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        match e.downcast_ref::<ComplianceError>() {
            // Wrong tab, vehicle type or column: the message alone tells the user what to fix
            Some(err) if err.is_user_facing() => {
                write_error_to_log("Compliance Check Error", &err.to_string());
                eprintln!("❌ {err}");
            }
            _ => {
                write_error_to_log("Unexpected Error", &format!("{e:?}"));
                eprintln!("❌ An error occurred: {e}");
                eprintln!("❌ Check {} for details.", ERRORS_LOG_FILE);
            }
        }
        std::process::exit(1);
    }
}
