use chrono::{Datelike, Local, NaiveDate, Utc};
use clap::Parser;
use dayjot::application::{
    init::init, BrowseService, ConfigService, EntryService, WriteEntryService,
};
use dayjot::cli::{self, date_argument, Cli, Commands};
use dayjot::domain::{prompts, EntryFilter, TimeReference};
use dayjot::error::{DayjotError, Result};
use dayjot::infrastructure::FileSystemRepository;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr, filtered by DAYJOT_LOG (default: warn)
fn init_tracing() {
    let filter = EnvFilter::try_from_env("DAYJOT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        println!("dayjot - Date-based personal journal");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Init { path } => init(&path),
        Commands::Write { date, text } => {
            let service = WriteEntryService::new(FileSystemRepository::discover()?);
            let entry = service.create(&date_argument(&date), text)?;
            println!("{}", cli::format_saved(&entry));
            Ok(())
        }
        Commands::Edit { id, text } => {
            let service = WriteEntryService::new(FileSystemRepository::discover()?);
            let entry = service.edit(&id, text)?;
            println!("{}", cli::format_saved(&entry));
            Ok(())
        }
        Commands::Show { date } => {
            let service = BrowseService::new(FileSystemRepository::discover()?);
            let view = service.day(&date_argument(&date))?;
            println!("{}", cli::format_day_view(&view).trim_end());
            Ok(())
        }
        Commands::List { today, memorable } => {
            let service = BrowseService::new(FileSystemRepository::discover()?);
            let filter = EntryFilter {
                created_on: today.then(|| Utc::now().format("%Y-%m-%d").to_string()),
                memorable_only: memorable,
            };
            let entries = service.list(&filter)?;
            println!("{}", cli::format_entry_list(&entries).trim_end());
            Ok(())
        }
        Commands::Favorites => {
            let service = BrowseService::new(FileSystemRepository::discover()?);
            println!("{}", cli::format_favorites(&service.favorites()?).trim_end());
            Ok(())
        }
        Commands::Fav { id } => {
            let service = EntryService::new(FileSystemRepository::discover()?);
            let entry = service.toggle_favorite(&id)?;
            if entry.is_memorable() {
                println!("Marked {} as memorable", entry.id.short());
            } else {
                println!("Removed {} from memorable", entry.id.short());
            }
            Ok(())
        }
        Commands::Delete { id, yes } => {
            let service = EntryService::new(FileSystemRepository::discover()?);
            if !yes {
                let entry = service.find(&id)?;
                if !confirm(&format!(
                    "Delete {} ({})? Are you sure you want to delete this entry? [y/N] ",
                    entry.id.short(),
                    entry.date
                ))? {
                    println!("Cancelled");
                    return Ok(());
                }
            }
            let removed = service.delete(&id)?;
            println!("Deleted {}", removed.id.short());
            Ok(())
        }
        Commands::Prompt { date } => {
            let today = Local::now().date_naive();
            let date = TimeReference::parse(&date_argument(&date))?.resolve(today);
            println!("{}", prompts::prompt_for(date));
            Ok(())
        }
        Commands::Calendar { month } => {
            let today = Local::now().date_naive();
            let (year, month) = match month {
                Some(raw) => parse_month(&raw)?,
                None => (today.year(), today.month()),
            };
            let service = BrowseService::new(FileSystemRepository::discover()?);
            let marks = service.calendar(year, month)?;
            println!("{}", cli::format_calendar(year, month, &marks, today));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileSystemRepository::discover()?);

            if list {
                let config = service.list()?;
                println!("editor = {}", config.editor);
                println!("storage_key = {}", config.storage_key);
                println!("allow_future_dates = {}", config.allow_future_dates);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: dayjot config [--list | <key> [<value>]]");
                println!("Valid keys: editor, storage_key, allow_future_dates, created");
            }
            Ok(())
        }
    }
}

/// Parse `YYYY-MM`
fn parse_month(raw: &str) -> Result<(i32, u32)> {
    NaiveDate::parse_from_str(&format!("{}-01", raw.trim()), "%Y-%m-%d")
        .map(|d| (d.year(), d.month()))
        .map_err(|_| DayjotError::InvalidTimeReference(raw.to_string()))
}

fn confirm(prompt: &str) -> Result<bool> {
    eprint!("{}", prompt);
    io::stderr().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
