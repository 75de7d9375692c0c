use chrono::Local;
use clap::Parser;
use moodjour::application::{ConfigService, MoodJournal, ReportService};
use moodjour::cli::{
    format_chart, format_insights, format_stats, format_suggestion, format_timeline, run_session,
    Cli, Commands,
};
use moodjour::error::MoodjourError;
use moodjour::infrastructure::{ExportFormat, InMemoryStore, ResolvedConfig};
use std::io;
use std::str::FromStr;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MoodjourError> {
    let resolved = ResolvedConfig::discover(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Classify { text }) => {
            let text = text.join(" ");
            let suggestion = resolved.config.classifier().classify(&text);
            println!("{}", format_suggestion(suggestion));
            Ok(())
        }
        Some(Commands::Session { demo }) => {
            let store = if demo {
                InMemoryStore::with_sample_entries(Local::now())
            } else {
                InMemoryStore::new()
            };
            let mut journal = MoodJournal::new(store, resolved.config);

            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut out = stdout.lock();
            run_session(&mut journal, stdin.lock(), &mut out, Local::now)
        }
        Some(Commands::Report { file, format }) => {
            let format = format
                .map(|f| ExportFormat::from_str(&f).map_err(MoodjourError::Export))
                .transpose()?;
            let view = ReportService::new(resolved.config).execute(&file, format, Local::now())?;

            println!("{}", format_timeline(&view.entries).trim_end());
            println!();
            print!("{}", format_stats(&view.stats));
            println!();
            print!("{}", format_chart(&view.stats.counts_by_mood));
            println!();
            print!("{}", format_insights(&view.insights));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let mut service = ConfigService::new(resolved);

            if list {
                for (k, v) in service.list().entries() {
                    println!("{} = {}", k, v);
                }
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    let path = service.set(&k, &v)?;
                    println!("Set {} = {} ({})", k, v, path.display());
                    Ok(())
                } else {
                    println!("{}", service.get(&k)?);
                    Ok(())
                }
            } else {
                println!("Usage: moodjour config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: min_text_length, trend_window, streak_insight_threshold, default_mood, export_format"
                );
                Ok(())
            }
        }
        None => {
            println!("moodjour - Mood journal with keyword-based mood suggestions");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
