use clap::Parser;
use crossterm::style::Stylize;
use search_core::config::SearchConfig;
use search_core::core::types::{CharacterSearchResult, MatchRange, MaybeUsedCharacter, UsageStatistics};
use search_core::persistence::FileDataStore;
use search_core::unicode::ucd::{self, CharacterTable};
use search_core::{CharacterService, DataInitializer, Error, RootDataStore, SettingsStore};
use std::io::{stdin, stdout, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "unicode-search")]
#[command(about = "Search Unicode characters by name or codepoint", long_about = None)]
struct Args {
    /// Config file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Settings and usage document
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// UnicodeData.txt to load characters from
    #[arg(short, long)]
    unicode_data: Option<PathBuf>,

    /// Number of results to show
    #[arg(short, long)]
    limit: Option<usize>,

    /// Restore the default character filter before starting
    #[arg(long)]
    reset_filter: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn load_characters(config: &SearchConfig) -> search_core::Result<CharacterTable> {
    let snapshot = config.snapshot_file();
    match ucd::load_snapshot(&snapshot, &config.unicode_data_file) {
        Ok(Some(table)) => {
            tracing::debug!("Loaded {} characters from {:?}", table.characters.len(), snapshot);
            return Ok(table);
        }
        Ok(None) => {}
        Err(e) => tracing::debug!("No usable character snapshot at {:?}: {}", snapshot, e),
    }

    let table = ucd::load_unicode_data(&config.unicode_data_file)?;
    tracing::info!("Parsed {} characters from {:?}", table.characters.len(), config.unicode_data_file);
    if let Err(e) = ucd::save_snapshot(&table, &config.unicode_data_file, &snapshot) {
        tracing::warn!("Failed to write character snapshot {:?}: {}", snapshot, e);
    }
    Ok(table)
}

fn highlight(text: &str, ranges: &[MatchRange]) -> String {
    let mut out = String::new();
    for (index, c) in text.chars().enumerate() {
        if ranges.iter().any(|range| range.start <= index && index < range.end) {
            out.push_str(&c.to_string().bold().yellow().to_string());
        } else {
            out.push(c);
        }
    }
    out
}

fn print_results(results: &[CharacterSearchResult<MaybeUsedCharacter>], statistics: &UsageStatistics) {
    if results.is_empty() {
        println!("No characters found.");
        return;
    }
    for (i, result) in results.iter().enumerate() {
        let character = result.item.character();
        let mut markers = String::new();
        if statistics.is_recent(&result.item) {
            markers.push_str(&" recent".green().to_string());
        }
        if statistics.is_frequent(&result.item) {
            markers.push_str(&" frequent".cyan().to_string());
        }
        println!(
            "  :{:<3} {}  U+{}  {}{}",
            i + 1,
            character.codepoint,
            highlight(&character.hexadecimal(), &result.codepoint.ranges),
            highlight(&character.name, &result.name.ranges),
            markers
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "error" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let mut config = match &args.config {
        Some(path) => SearchConfig::load_from(path),
        None => SearchConfig::load(),
    };
    if let Some(data_file) = args.data_file {
        config.data_file = data_file;
    }
    if let Some(unicode_data) = args.unicode_data {
        config.unicode_data_file = unicode_data;
    }
    if let Some(limit) = args.limit {
        config.result_limit = limit;
    }

    let table = load_characters(&config)?;
    let backend = Arc::new(FileDataStore::new(config.data_file.clone()));
    let root = Arc::new(RootDataStore::open(backend).await?);
    let service = Arc::new(
        CharacterService::new(Arc::clone(&root), table.characters)
            .with_hex_query_max_len(config.hex_query_max_len),
    );
    if args.reset_filter {
        SettingsStore::new(Arc::clone(&root)).reset_filter().await?;
        tracing::info!("Restored the default character filter");
    }
    match DataInitializer::new(Arc::clone(&root), Arc::clone(&service))
        .initialize_data()
        .await
    {
        Ok(_) => {}
        Err(Error::Configurity(e)) => {
            tracing::error!("Saved settings don't match the Unicode tables: {}", e);
            eprintln!("The saved character filter is out of date: {}", e);
            eprintln!("Run again with --reset-filter to restore the default filter.");
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    }

    println!("Unicode Search. Type a name or codepoint, ':N' to pick a result, 'exit' to quit.");
    println!("---------------------------------------------------------------");

    let mut results = Vec::new();
    let mut pending: Vec<JoinHandle<()>> = Vec::new();
    let mut input = String::new();

    loop {
        print!("\n> ");
        stdout().flush()?;
        input.clear();
        if stdin().lock().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            s if s.starts_with(':') && s.len() > 1 => {
                match s[1..].parse::<usize>() {
                    Ok(n) if n > 0 && n <= results.len() => {
                        let chosen: &CharacterSearchResult<MaybeUsedCharacter> = &results[n - 1];
                        let codepoint = chosen.item.codepoint();
                        println!("Picked {} (U+{})", codepoint, chosen.item.character().hexadecimal());
                        pending.push(service.record_usage_detached(codepoint));
                    }
                    _ => println!("No result {}", s),
                }
            }
            query => {
                let mut found = service.search(query).await?;
                found.truncate(config.result_limit);
                let statistics = service.usage_statistics().await?;
                print_results(&found, &statistics);
                results = found;
            }
        }
    }

    for handle in pending {
        let _ = handle.await;
    }
    Ok(())
}
