// bucketdir-cli: CLI frontend for bucketdir
// Argument parsing, fetch orchestration, output handling

mod cli;
mod output;

use std::io::{self, ErrorKind};

use url::Url;

use bucketdir_core::{
    Config, QueryParams, delete_object, fetch, parse_listing, render_block, sort_entries,
};

use output::OutputHandler;

/// Default log filter: warnings always, debug when --verbose.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Obtain the listing XML and query parameters from the chosen source.
async fn load_listing(cli: &cli::Cli, config: &Config) -> io::Result<(String, QueryParams)> {
    if let Some(path) = &cli.input {
        let xml = std::fs::read_to_string(path).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("failed to read listing '{}': {}", path.display(), e),
            )
        })?;
        let params = QueryParams::from_query(cli.query.as_deref().unwrap_or(""));
        return Ok((xml, params));
    }

    // cli::parse guarantees a URL when --input is absent
    let raw = cli.url.as_deref().unwrap_or_default();
    let url = Url::parse(raw).map_err(|e| {
        io::Error::new(
            ErrorKind::InvalidInput,
            format!("invalid page URL '{}': {}", raw, e),
        )
    })?;
    let params = QueryParams::from_url(&url);
    let client = fetch::build_client(config)?;
    let xml = fetch::fetch_listing(&client, &url).await?;
    Ok((xml, params))
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = cli::parse()?;
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    if let Some(name) = &cli.delete {
        delete_object(name);
        return Ok(());
    }

    let (xml, params) = load_listing(&cli, &config).await?;

    let mut entries = parse_listing(&xml);
    log::debug!("parsed {} listing entries", entries.len());

    let handler = OutputHandler::new(cli.output.as_deref());
    if cli.json {
        sort_entries(&mut entries, &params);
        handler.emit_entries(&entries)
    } else {
        handler.emit_block(&render_block(entries, &params, &config), &config)
    }
}
