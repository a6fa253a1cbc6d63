use anyhow::Result;
use clap::Parser;

use docs_publish::pipeline::{self, PipelineArgs};
use docs_publish::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "docs-publish",
    about = "Build and publish versioned component documentation to a Hugo site"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Process only the named component")]
    component: Option<String>,

    #[arg(long, help = "Show selected revisions without copying, building, or committing")]
    dry_run: bool,

    #[arg(long, help = "Build the site but do not commit the publishing repository")]
    skip_commit: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("docs-publish {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration (with environment overrides applied)
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    ui::display_status("starting website build");

    let pipeline_args = PipelineArgs {
        component: args.component,
        dry_run: args.dry_run,
        skip_commit: args.skip_commit,
    };

    let outcome = match pipeline::run_publish_pipeline(&config, &pipeline_args) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    for component in &outcome.components {
        ui::display_success(&format!(
            "{}: {} revision(s) published, {} skipped",
            component.name,
            component.published.len(),
            component.skipped.len()
        ));
    }

    if args.dry_run {
        ui::display_status("dry run: nothing was copied, built, or committed");
    } else if outcome.committed {
        ui::display_success("finished website build");
    } else {
        ui::display_status("finished website build (commit skipped)");
    }

    Ok(())
}
