//! `mbws2`: command-line front end for the WS2 search client.

use std::path::PathBuf;

use clap::Parser;
use log::debug;
use musicbrainz_ws2::{
    ClientConfig, EntityKind, SearchEntity, SearchResponse, Ws2Client, OMIT_PARAM,
};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(name = "mbws2", version, about = "Search the MusicBrainz WS2 API")]
struct Cli {
    /// Entity kind: annotation, area, artist, release, release-group, tag, cdstub, label, place
    entity: EntityKind,
    /// Lucene query expression
    query: String,
    /// Maximum number of results; -1 leaves it to the server
    #[arg(long, default_value_t = OMIT_PARAM, allow_hyphen_values = true)]
    limit: i64,
    /// Result offset for paging; -1 leaves it to the server
    #[arg(long, default_value_t = OMIT_PARAM, allow_hyphen_values = true)]
    offset: i64,
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    root_url: Option<String>,
    #[arg(long)]
    app: Option<String>,
    #[arg(long)]
    app_version: Option<String>,
    #[arg(long)]
    contact: Option<String>,
    /// Print the whole response as JSON
    #[arg(long)]
    json: bool,
    #[arg(short, long)]
    verbose: bool,
}

fn resolve_config(cli: &Cli) -> musicbrainz_ws2::Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    };
    if let Some(root_url) = &cli.root_url {
        config.root_url = root_url.clone();
    }
    if let Some(app) = &cli.app {
        config.client.app_name = app.clone();
    }
    if let Some(version) = &cli.app_version {
        config.client.version = version.clone();
    }
    if let Some(contact) = &cli.contact {
        config.client.contact = contact.clone();
    }
    Ok(config)
}

fn print_response<E: SearchEntity + Serialize>(
    response: &SearchResponse<E>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
        return Ok(());
    }
    println!(
        "{} of {} results (offset {})",
        response.len(),
        response.header.count,
        response.header.offset
    );
    for (entity, score) in response.scored() {
        println!("{score:>3}  {}  {}", entity.score_key(), entity.label());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut clog = colog::default_builder();
    clog.filter(
        None,
        if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        },
    );
    clog.init();

    let config = resolve_config(&cli)?;
    debug!("Using WS2 root {}", config.root_url);
    let client = Ws2Client::from_config(&config)?;

    let (query, limit, offset, json) = (cli.query.as_str(), cli.limit, cli.offset, cli.json);
    match cli.entity {
        EntityKind::Annotation => {
            print_response(&client.search_annotation(query, limit, offset)?, json)
        }
        EntityKind::Area => print_response(&client.search_area(query, limit, offset)?, json),
        EntityKind::Artist => print_response(&client.search_artist(query, limit, offset)?, json),
        EntityKind::Release => print_response(&client.search_release(query, limit, offset)?, json),
        EntityKind::ReleaseGroup => {
            print_response(&client.search_release_group(query, limit, offset)?, json)
        }
        EntityKind::Tag => print_response(&client.search_tag(query, limit, offset)?, json),
        EntityKind::CdStub => print_response(&client.search_cdstub(query, limit, offset)?, json),
        EntityKind::Label => print_response(&client.search_label(query, limit, offset)?, json),
        EntityKind::Place => print_response(&client.search_place(query, limit, offset)?, json),
        EntityKind::Freedb => {
            client.search_freedb(query, limit, offset)?;
            Ok(())
        }
        EntityKind::Recording => {
            client.search_recording(query, limit, offset)?;
            Ok(())
        }
        EntityKind::Work => {
            client.search_work(query, limit, offset)?;
            Ok(())
        }
    }
}
