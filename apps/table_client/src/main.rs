use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use client_core::{
    config::load_settings, link::table_from_url, render::render, EntryOrigin, OrderingClient,
    ViewController,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod controller;
mod ui;

use controller::{
    commands::parse_command,
    events::{UiError, UiEvent},
    orchestration::dispatch_command,
};
use ui::terminal::{draw, draw_error};

#[derive(Parser, Debug)]
#[command(about = "Order from your table")]
struct Args {
    /// Base URL of the restaurant's ordering API.
    #[arg(long)]
    server_url: Option<String>,
    /// Table number, as carried by a table link.
    #[arg(long, conflicts_with = "link")]
    table: Option<String>,
    /// Full table link (e.g. the URL in a table's QR code).
    #[arg(long)]
    link: Option<String>,
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref());
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    info!(server_url = %settings.server_url, "starting table client");

    let client = OrderingClient::new(settings.server_url.clone());
    let mut controller = ViewController::new();
    if let Err(err) = controller.load_menu(&client).await {
        debug!(error = %err, "starting with an empty menu");
    }

    let url_table = match (args.table, args.link.as_deref()) {
        (Some(table), _) => Some(table),
        (None, Some(link)) => {
            table_from_url(link).with_context(|| format!("invalid table link '{link}'"))?
        }
        (None, None) => None,
    };
    if let Some(table) = url_table {
        if let Err(err) = controller.start_session(&table, EntryOrigin::UrlParameter) {
            warn!(error = %err, "table parameter rejected; waiting for manual entry");
        }
    }

    let currency = settings.currency_symbol.as_str();
    println!("{}", draw(&render(&controller, currency)));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read input")? {
        let cmd = match parse_command(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(message) => {
                println!("{}", draw_error(&UiError::input(message)));
                continue;
            }
        };

        match dispatch_command(&mut controller, &client, cmd).await {
            UiEvent::Redraw => println!("{}", draw(&render(&controller, currency))),
            UiEvent::Info(message) => println!("{message}"),
            UiEvent::Error(err) => {
                debug!(
                    context = ?err.context(),
                    category = ?err.category(),
                    "{}",
                    err.message()
                );
                println!("{}", draw_error(&err));
            }
            UiEvent::Quit => break,
        }
    }

    Ok(())
}
