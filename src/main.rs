use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use filesize::cli::Cli;
use filesize::core::{RenderOptions, write_reports, write_usage};
use filesize::fs::RealFileSystem;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // stdout carries the report, so diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let options = RenderOptions::default();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = if cli.paths.is_empty() {
        let program_name = std::env::args_os()
            .next()
            .map(|arg| arg.to_string_lossy().into_owned())
            .unwrap_or_else(|| "filesize".to_owned());
        let executable =
            std::env::current_exe().unwrap_or_else(|_| PathBuf::from(&program_name));
        write_usage(&mut out, &RealFileSystem, &program_name, &executable, &options)
    } else {
        write_reports(&mut out, &RealFileSystem, &cli.paths, &options)
    };

    match result.and_then(|()| out.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("filesize: {err}");
            ExitCode::from(1)
        }
    }
}
