mod cli;
mod render;
mod session;
mod tavily;

use std::io::{BufRead, Write};
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};

use cli::Cli;
use session::Session;
use tavily::client::{SearchClient, TavilyClient, TavilyError};
use tavily::digest::digest_response;

pub const USER_AGENT: &str = concat!("asteroid/", env!("CARGO_PKG_VERSION"));

/// TCP connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Global HTTP client timeout covering DNS + connect + response body.
const HTTP_TIMEOUT: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("asteroid=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let http = reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(HTTP_TIMEOUT)
        .build()?;
    let client = TavilyClient::from_env(http)?;

    let mut session = Session::new();

    match cli.one_shot_query() {
        Some(query) => {
            run_query(&client, &mut session, &query).await?;
            println!("{}", render::render(&session));
        }
        None => repl(&client, &mut session).await?,
    }

    Ok(())
}

/// One search interaction: call the provider, project the response, and
/// replace the session views. A provider failure leaves the session as it
/// was.
async fn run_query(
    client: &impl SearchClient,
    session: &mut Session,
    query: &str,
) -> Result<(), TavilyError> {
    info!(%query, "searching");
    let response = client.search(query).await?;
    session.replace(digest_response(&response));
    Ok(())
}

/// Read queries line by line until EOF. Requests are serialized: each query
/// runs to completion before the next prompt. Blank lines are ignored;
/// anything else is forwarded to the provider as typed.
async fn repl(client: &TavilyClient, session: &mut Session) -> Result<(), std::io::Error> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "search> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim_end_matches(['\r', '\n']);
        if query.trim().is_empty() {
            continue;
        }

        match run_query(client, session, query).await {
            Ok(()) => println!("\n{}\n", render::render(session)),
            Err(e) => error!("search failed: {e}"),
        }
    }

    Ok(())
}
