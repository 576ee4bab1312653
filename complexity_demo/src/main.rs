//! Complexity demo runner
//!
//! Builds both demo units from a single sequence length and prints what each
//! operation produced: timing lines for the time demo, sampled outputs for
//! the space demo.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use complexity_core::{
    format_millis, DemoConfig, SpaceComplexityDemo, SpaceReport, TimeComplexityDemo, TimeReport,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "complexity")]
#[command(about = "Demonstrates time and space complexity classes", long_about = None)]
struct Args {
    /// Sequence length N (overrides the config file)
    #[arg(short, long)]
    n: Option<usize>,

    /// TOML config file with n, sample_len, search_target, runs
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Which demo to run
    #[arg(short, long, value_enum, default_value_t = DemoKind::All)]
    demo: DemoKind,

    /// Binary search target (defaults to N - 1)
    #[arg(short, long, allow_hyphen_values = true)]
    target: Option<i64>,

    /// Elements kept per space report sample
    #[arg(long)]
    sample_len: Option<usize>,

    /// Repetitions per timed operation
    #[arg(short, long)]
    runs: Option<usize>,

    /// Print reports as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DemoKind {
    Time,
    Space,
    All,
}

impl DemoKind {
    fn runs_time(self) -> bool {
        matches!(self, DemoKind::Time | DemoKind::All)
    }

    fn runs_space(self) -> bool {
        matches!(self, DemoKind::Space | DemoKind::All)
    }
}

impl Args {
    /// File values first, then command line overrides
    fn resolve_config(&self) -> Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => DemoConfig::default(),
        };

        if let Some(n) = self.n {
            config.n = n;
        }
        if let Some(target) = self.target {
            config.search_target = Some(target);
        }
        if let Some(sample_len) = self.sample_len {
            config.sample_len = sample_len;
        }
        if let Some(runs) = self.runs {
            config.runs = runs;
        }

        config.validate().context("invalid demo configuration")?;
        Ok(config)
    }
}

/// Everything one invocation produced, serialized as a single JSON value
#[derive(Debug, Serialize)]
struct DemoOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<TimeReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    space: Option<SpaceReport>,
}

fn run_demos(kind: DemoKind, config: &DemoConfig, headings: bool) -> DemoOutput {
    let time = kind.runs_time().then(|| {
        if headings {
            println!("\n{}", "Time complexity".bright_white().bold());
        }
        let demo = TimeComplexityDemo::new(config.n);
        let report = demo.run_repeated(config.target(), config.runs);
        info!("time demo finished in {} ms", format_millis(report.total()));
        report
    });

    let space = kind.runs_space().then(|| {
        if headings {
            println!("\n{}", "Space complexity".bright_white().bold());
        }
        SpaceComplexityDemo::new(config.n).report(config.target(), config.sample_len)
    });

    DemoOutput { time, space }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "complexity=debug,complexity_core=debug"
    } else {
        "complexity=info,complexity_core=info"
    };
    // Logs go to stderr so stdout carries only the banner or the JSON document
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(false)
                .without_time(),
        )
        .init();

    let config = args.resolve_config()?;

    if !args.json {
        print_banner(&config);
    }

    let output = run_demos(args.demo, &config, !args.json);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}

fn print_banner(config: &DemoConfig) {
    println!("{}", "  Complexity Classes Demo".bright_cyan().bold());
    println!("\n{}", "Configuration:".bright_yellow());
    println!("  • N: {}", format!("{}", config.n).bright_green());
    println!("  • Search target: {}", format!("{}", config.target()).bright_green());
    println!("  • Sample length: {}", format!("{}", config.sample_len).bright_green());
    println!("  • Runs: {}", format!("{}", config.runs).bright_green());
}
