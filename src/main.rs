use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

use showshelf::catalog::{JsonFileSource, RecordSource};
use showshelf::config::{Settings, DEFAULT_CATALOG_PATH, DEFAULT_IMAGE_BASE};
use showshelf::errors::api_error::{ApiError, ApiResult};
use showshelf::errors::domain::map_api_result;
use showshelf::logging::init_logging;
use showshelf::rows::{group_by_artist, RowView};
use showshelf::search::filter_shows;
use showshelf::sorting::{SortDirection, SortField, SortSpec};

/// Search a catalog of concert recordings and list matching shows by artist.
///
/// Query syntax: artist:<text> song:<text> type:<text> country:<text> year:<yyyy>,
/// plus bare words matched against every descriptive field.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Catalog JSON file
    #[arg(long, env = "SHOWSHELF_CATALOG", default_value = DEFAULT_CATALOG_PATH)]
    catalog: PathBuf,

    /// Base URL for show images
    #[arg(long, env = "SHOWSHELF_IMAGE_BASE", default_value = DEFAULT_IMAGE_BASE)]
    image_base: String,

    /// Order shows within each artist row
    #[arg(long, value_enum)]
    sort: Option<SortArg>,

    /// Reverse the sort order
    #[arg(long, requires = "sort")]
    desc: bool,

    /// Print rows as JSON
    #[arg(long)]
    json: bool,

    /// Search query, e.g. `artist:pearl year:1999`
    query: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SortArg {
    Date,
    Artist,
    Venue,
    Duration,
}

impl Args {
    fn settings(&self) -> Settings {
        let sort = self.sort.map(|arg| SortSpec {
            field: match arg {
                SortArg::Date => SortField::Date,
                SortArg::Artist => SortField::Artist,
                SortArg::Venue => SortField::Venue,
                SortArg::Duration => SortField::Duration,
            },
            direction: if self.desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            },
        });
        Settings {
            catalog_path: self.catalog.clone(),
            image_base: self.image_base.clone(),
            sort,
            json: self.json,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    let settings = args.settings();
    let query = args.query.join(" ");
    match run(&settings, &query) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(code = %err.code, "{}", err.message);
            report_error(&err, settings.json);
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings, query: &str) -> ApiResult<()> {
    let shows = map_api_result(JsonFileSource::new(&settings.catalog_path).load())?;
    let matched = filter_shows(&shows, query);
    let mut rows = group_by_artist(matched);
    if settings.sort.is_some() {
        for row in &mut rows {
            row.sort(settings.sort);
        }
    }

    let resolver = settings.resolver();
    let views: Vec<RowView> = rows.iter().map(|row| row.view(&resolver)).collect();
    info!(
        query = %query,
        total = shows.len(),
        rows = views.len(),
        "search complete"
    );

    if settings.json {
        let out = serde_json::to_string_pretty(&views)
            .map_err(|e| ApiError::new("serialize_failed", e.to_string()))?;
        println!("{out}");
    } else {
        print_rows(&views);
    }
    Ok(())
}

fn print_rows(views: &[RowView]) {
    if views.is_empty() {
        println!("No shows found.");
        return;
    }
    for view in views {
        println!("{} ({})", view.artist, view.cards.len());
        for card in &view.cards {
            let mut line = format!("  {:<7} {}", card.year_label, card.location);
            if let Some(kind) = &card.recording_type {
                line.push_str(&format!("  [{kind}]"));
            }
            if let Some(duration) = &card.duration {
                line.push_str(&format!("  {duration}"));
            }
            if let Some(event) = &card.event {
                line.push_str(&format!("  {event}"));
            }
            println!("{line}");
        }
    }
}

fn report_error(err: &ApiError, json: bool) {
    if json {
        match serde_json::to_string(err) {
            Ok(out) => println!("{out}"),
            Err(_) => eprintln!("{}: {}", err.code, err.message),
        }
    } else {
        eprintln!("error: {}", err.message);
    }
}
