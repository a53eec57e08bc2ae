use std::process;

use clap::Parser;
use colored::Colorize;
use kmerich::{
    cli::{Args, Command},
    run,
};

fn main() {
    let args = Args::parse();

    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if !args.quiet {
        print_header(&args.command);
    }

    if let Err(e) = run::run(&args.command) {
        eprintln!(
            "{}\n {}",
            "Application error:".blue().bold(),
            e.to_string().blue()
        );
        process::exit(1);
    }
}

fn print_header(command: &Command) {
    match command {
        Command::Count { k, path, .. } => {
            eprintln!("{}: {}", "k-length".bold(), k.to_string().blue().bold());
            eprintln!(
                "{}: {}",
                "data".bold(),
                path.display().to_string().underline().bold().blue()
            );
        }
        Command::Enrich {
            k, pulldown, input, ..
        } => {
            eprintln!("{}: {}", "k-length".bold(), k.to_string().blue().bold());
            eprintln!(
                "{}: {}",
                "pulldown".bold(),
                pulldown.display().to_string().underline().bold().blue()
            );
            eprintln!(
                "{}: {}",
                "input".bold(),
                input.display().to_string().underline().bold().blue()
            );
        }
    }
    eprintln!();
}
