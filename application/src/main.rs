use std::{io, sync::OnceLock};

use application::{args::Command, table, Args, Config, Fixture, Service};
use common::DateRange;
use service::{
    calendar::{Filter, Session},
    command::{Command as _, LoadWindow},
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    _ = start().await;
}

async fn start() -> Result<(), ()> {
    let Args { config, command } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let config = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(config.log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let output = match command {
        Command::Grid {
            from,
            days,
            kind,
            open_only,
        } => {
            let dates = DateRange::starting_at(from, days).ok_or_else(|| {
                log::error!("cannot show {days} days starting at `{from}`");
            })?;
            let filter = Filter {
                venues: None,
                kind,
                open_positions_only: open_only,
            };
            grid(&config, dates, filter).await?
        }
        Command::Eligibility => serde_json::to_string_pretty(
            &table::eligibility(),
        )
        .map_err(|e| {
            log::error!("failed to serialize eligibility table: {e}");
        })?,
    };

    println!("{output}");
    Ok(())
}

async fn grid(
    config: &Config,
    dates: DateRange,
    filter: Filter,
) -> Result<String, ()> {
    let service_config = config.service().map_err(|e| {
        log::error!("invalid `Config`: {e}");
    })?;

    let fixture = Fixture::load(&config.schedule.fixture).map_err(|e| {
        log::error!(
            "failed to load `{}` fixture: {e}",
            config.schedule.fixture.display(),
        );
    })?;
    log::info!(
        "loaded {} venues and {} items from `{}`",
        fixture.venues.len(),
        fixture.items.len(),
        config.schedule.fixture.display(),
    );

    let service = Service::new(service_config, fixture.into_backend());
    let mut session = Session::new(filter);

    let model = service
        .execute(LoadWindow {
            session: &mut session,
            dates,
        })
        .await
        .map_err(|e| {
            log::error!("failed to load `{dates}`: {e}");
        })?;
    for rejected in &model.rejected_items {
        log::warn!(
            "`Item(id: {})` of `{}` is not shown: {}",
            rejected.item_id,
            rejected.date,
            rejected.reason,
        );
    }

    serde_json::to_string_pretty(&model).map_err(|e| {
        log::error!("failed to serialize `RenderModel`: {e}");
    })
}
