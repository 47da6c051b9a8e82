use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};

use flipcards::package::{self, ArtifactPaths};

#[derive(Parser)]
#[command(name = "flipcards", version = "1.0.0")]
#[command(about = "Flip Cards — package the memory game as a standalone HTML file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inline the built script and style into one HTML file
    Package {
        #[command(flatten)]
        paths: PathArgs,

        /// Print a JSON report to stdout
        #[arg(long)]
        json: bool,
    },

    /// Check that an existing standalone file embeds the current artifacts verbatim
    Verify {
        #[command(flatten)]
        paths: PathArgs,
    },

    /// Repackage on every artifact change and serve the result
    Dev {
        #[command(flatten)]
        paths: PathArgs,

        /// Server port
        #[arg(long, default_value_t = 3333)]
        port: u16,
    },
}

#[derive(Args)]
struct PathArgs {
    /// Project root that relative paths resolve against
    /// (default: the directory holding this executable)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Built script artifact
    #[arg(long)]
    script: Option<PathBuf>,

    /// Built style artifact
    #[arg(long)]
    style: Option<PathBuf>,

    /// Standalone HTML output
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl PathArgs {
    fn resolve(self) -> anyhow::Result<ArtifactPaths> {
        let root = match self.root {
            Some(root) => root,
            None => package::tool_root().context("cannot locate the flipcards executable")?,
        };
        let paths = ArtifactPaths::load(&root)?.with_overrides(
            &root,
            self.script,
            self.style,
            self.output,
        );
        log::debug!("resolved paths: {paths:?}");
        Ok(paths)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Package { paths, json } => {
            let paths = paths.resolve()?;
            let report = package::package_paths(&paths)?;
            for line in report.status_lines() {
                eprintln!("{line}");
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }

        Commands::Verify { paths } => {
            let paths = paths.resolve()?;
            let result = package::verify(&paths)?;
            if !result.script_matches {
                eprintln!(
                    "mismatch: script region differs from {}",
                    paths.script.display()
                );
            }
            if !result.style_matches {
                eprintln!(
                    "mismatch: style region differs from {}",
                    paths.style.display()
                );
            }
            if !result.is_ok() {
                bail!("{} is out of date", paths.output.display());
            }
            eprintln!("{}: ok", paths.output.display());
        }

        Commands::Dev { paths, port } => {
            let paths = paths.resolve()?;
            flipcards::server::run_dev_server(paths, port)
                .map_err(|e| anyhow::anyhow!("dev server failed: {e}"))?;
        }
    }
    Ok(())
}
