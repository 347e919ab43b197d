//! Interactive terminal browser.
//!
//! Every line typed on stdin replaces the search text. Lines starting with
//! `:` are commands: `:next`, `:prev`, `:genre <id>`, `:clear`, `:quit`.

use std::{sync::Arc, time::Duration};

use clap::Parser;
use moviez_api::{
    config::Config,
    models::GenreId,
    services::{
        providers::{MovieProvider, TmdbProvider},
        Debouncer, DiscoveryResolver, DiscoverySession, GenreVocabulary, ViewState, ViewStatus,
    },
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "moviez-browse", about = "Browse movies from the terminal")]
struct Args {
    /// Start filtered to this genre id
    #[arg(long)]
    genre: Option<GenreId>,

    /// Start on this page
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Quiet period before typed text is searched (defaults to SEARCH_DEBOUNCE_MS)
    #[arg(long)]
    debounce_ms: Option<u64>,
}

enum Command {
    Next,
    Previous,
    Genre(GenreId),
    ClearGenre,
    Quit,
    Search(String),
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let Some(rest) = line.trim().strip_prefix(':') else {
        return Command::Search(line.to_string());
    };

    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("next"), _) => Command::Next,
        (Some("prev"), _) => Command::Previous,
        (Some("clear"), _) => Command::ClearGenre,
        (Some("quit"), _) => Command::Quit,
        (Some("genre"), Some(id)) => match id.parse() {
            Ok(id) => Command::Genre(id),
            Err(_) => Command::Unknown(line.to_string()),
        },
        _ => Command::Unknown(line.to_string()),
    }
}

fn render(state: &ViewState) {
    match state.status {
        ViewStatus::Loading => {}
        ViewStatus::NoResults => println!("No results (page {})", state.query.page),
        ViewStatus::Ready => {
            println!(
                "-- page {}/{} --",
                state.page.current_page, state.page.total_pages
            );
            for item in &state.page.items {
                println!("{:>8}  {:>4.1}  {}", item.id, item.average_rating, item.title);
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moviez_api=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;

    let provider: Arc<dyn MovieProvider> = Arc::new(TmdbProvider::new(&config)?);
    let genres = GenreVocabulary::new(Arc::clone(&provider));
    let session = DiscoverySession::new(DiscoveryResolver::new(provider));

    if let Some(genre) = args.genre {
        session.select_genre(genre);
    }
    session.go_to_page(args.page);

    let mut updates = session.subscribe();
    let printer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            render(&state);
        }
    });

    let names: Vec<String> = genres
        .list_genres()
        .await
        .into_iter()
        .map(|g| format!("{}={}", g.id, g.name))
        .collect();
    if !names.is_empty() {
        println!("Genres: {}", names.join(", "));
    }

    session.refresh().await;

    let quiet = args
        .debounce_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.search_debounce());
    let typing = session.clone();
    let debouncer = Debouncer::spawn(quiet, move |text: String| {
        typing.set_text(text);
        let refresh = typing.refresh();
        async move {
            tokio::spawn(refresh);
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Command::Search(text) => debouncer.push(text),
            Command::Next => {
                if session.next_page() {
                    tokio::spawn(session.refresh());
                }
            }
            Command::Previous => {
                if session.previous_page() {
                    tokio::spawn(session.refresh());
                }
            }
            Command::Genre(id) => {
                session.select_genre(id);
                tokio::spawn(session.refresh());
            }
            Command::ClearGenre => {
                session.clear_genre();
                tokio::spawn(session.refresh());
            }
            Command::Quit => break,
            Command::Unknown(input) => eprintln!("Unknown command: {}", input),
        }
    }

    // The printer ends once every in-flight refresh has released the session.
    debouncer.shutdown().await;
    drop(session);
    printer.await?;
    Ok(())
}
