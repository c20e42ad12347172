//! banmap library: fail2ban ban events to geographic coordinates
//!
//! This library scans a fail2ban log for ban events, resolves every banned
//! IPv4 address to a latitude/longitude through the ipstack geolocation
//! service, and hands the ordered coordinates to export and visualization
//! sinks.
//!
//! # Example
//!
//! ```no_run
//! use banmap::{run_pipeline, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("/var/log/fail2ban.log"),
//!     output: Some(std::path::PathBuf::from("bans.csv")),
//!     access_key: std::env::var("IPSTACK_ACCESS_KEY")?,
//!     headless: true,
//!     ..Default::default()
//! };
//!
//! let report = run_pipeline(config).await?;
//! println!("{} of {} bans located", report.resolved, report.tokens_extracted);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Lookups are async (reqwest), so library functions must run inside a Tokio
//! runtime. They are still issued strictly one at a time, in log order.

pub mod aggregate;
mod app;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod extract;
pub mod geoip;
pub mod initialization;
mod scan;

// Re-export public API
pub use aggregate::ResultAggregate;
pub use config::{Cli, Config, LogFormat, LogLevel};
pub use extract::{collect_ban_tokens, extract_ban_token, BanToken};
pub use geoip::{Coordinate, GeoLookup, GeoResolver, LookupConfig, ResolutionOutcome};
pub use run::{enrich, run_pipeline, Enrichment, HaltReason, PipelineReport};
pub use scan::LineScanner;

// Internal run module (contains the pipeline orchestration)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{info, warn};

    use crate::aggregate::ResultAggregate;
    use crate::app::{log_progress, print_outcome_statistics};
    use crate::config::{Config, LOOKUP_PROGRESS_INTERVAL};
    use crate::error_handling::{OutcomeType, ProcessingStats};
    use crate::export::{CoordinateSink, CsvExporter, MapRenderer};
    use crate::extract::{collect_ban_tokens, BanToken};
    use crate::geoip::{GeoLookup, GeoResolver, LookupConfig, ResolutionOutcome};
    use crate::initialization::init_client;

    /// Why the enrichment phase stopped before the last token.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum HaltReason {
        /// The service answered without coordinate fields
        QuotaExhausted,
        /// The request failed or the body was not JSON
        LookupFailed(String),
    }

    /// Outcome of the enrichment phase.
    #[derive(Debug, Clone, Default)]
    pub struct Enrichment {
        /// Coordinates in token order
        pub aggregate: ResultAggregate,
        /// Lookups actually issued, including the one that halted the phase
        pub lookups_issued: usize,
        /// Tokens consumed without a coordinate
        pub skipped: usize,
        /// Set when enrichment stopped early
        pub halted: Option<HaltReason>,
    }

    /// Summary of a completed pipeline run.
    #[derive(Debug, Clone)]
    pub struct PipelineReport {
        /// Lines read from the log
        pub lines_scanned: usize,
        /// Ban events found, duplicates included
        pub tokens_extracted: usize,
        /// Geolocation lookups issued
        pub lookups_issued: usize,
        /// Coordinates in the final aggregate
        pub resolved: usize,
        /// Lookups that produced no coordinate but did not stop the run
        pub skipped: usize,
        /// Set when enrichment stopped before the last token
        pub halted: Option<HaltReason>,
        /// CSV file written, if export was requested
        pub csv_path: Option<PathBuf>,
        /// Map image written, if there was anything to plot
        pub map_path: Option<PathBuf>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Resolves `tokens` in order, stopping at the first halting outcome.
    ///
    /// Exactly one lookup is issued per token until the service reports quota
    /// exhaustion (or fails outright); no token after that point is looked up,
    /// and every coordinate resolved before it is kept.
    pub async fn enrich<L: GeoLookup>(
        lookup: &L,
        tokens: &[BanToken],
        stats: &ProcessingStats,
    ) -> Enrichment {
        let mut enrichment = Enrichment::default();
        let start_time = Instant::now();
        info!("Looking up IP address location information");

        for token in tokens {
            enrichment.lookups_issued += 1;
            let outcome = match lookup.resolve(token).await {
                Ok(ResolutionOutcome::Resolved(coordinate)) => {
                    enrichment.aggregate.push(coordinate);
                    OutcomeType::Resolved
                }
                Ok(ResolutionOutcome::Skipped) => {
                    enrichment.skipped += 1;
                    warn!("No usable location for {}, skipping", token);
                    OutcomeType::Skipped
                }
                Ok(ResolutionOutcome::QuotaExhausted) => {
                    warn!(
                        "It appears either the geolocation service is down or you've reached \
                         your daily quota, we'll stop getting location data now"
                    );
                    enrichment.halted = Some(HaltReason::QuotaExhausted);
                    OutcomeType::QuotaExhausted
                }
                Err(e) => {
                    warn!(
                        "Geolocation lookup for {} failed ({}), we'll stop getting location data now",
                        token, e
                    );
                    enrichment.halted = Some(HaltReason::LookupFailed(e.to_string()));
                    OutcomeType::LookupFailed
                }
            };

            stats.increment(outcome);
            if outcome.halts_enrichment() {
                break;
            }

            if enrichment.lookups_issued % LOOKUP_PROGRESS_INTERVAL == 0 {
                log_progress(
                    "lookups",
                    start_time,
                    enrichment.lookups_issued,
                    Some(tokens.len()),
                );
            }
        }

        if enrichment.halted.is_some() {
            info!(
                "Stopped after {} of {} lookups with {} locations",
                enrichment.lookups_issued,
                tokens.len(),
                enrichment.aggregate.len()
            );
        }
        enrichment
    }

    /// Runs the whole pipeline: scan, extract, enrich, then export and plot.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The log file cannot be opened or read
    /// - The HTTP client cannot be built
    /// - The CSV file cannot be written
    ///
    /// Lookup failures and quota exhaustion are not errors; they shorten the
    /// result instead. A map that fails to render is logged and skipped.
    pub async fn run_pipeline(config: Config) -> Result<PipelineReport> {
        let start_time = Instant::now();

        info!("Reading and parsing log file {}", config.file.display());
        let extraction = collect_ban_tokens(&config.file)
            .await
            .context("Failed to scan log file")?;

        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let resolver = GeoResolver::new(client, LookupConfig::from(&config));
        let stats = ProcessingStats::new();

        let enrichment = enrich(&resolver, &extraction.tokens, &stats).await;
        print_outcome_statistics(&stats);
        let aggregate = &enrichment.aggregate;

        let csv_path = match &config.output {
            Some(path) => {
                CsvExporter::new(path)
                    .accept(aggregate)
                    .with_context(|| format!("Failed to write CSV to {}", path.display()))?;
                Some(path.clone())
            }
            None => None,
        };

        let renderer = MapRenderer::new(&config.map_path, config.headless);
        let map_path = match renderer.accept(aggregate) {
            Ok(()) if !aggregate.is_empty() => Some(config.map_path.clone()),
            Ok(()) => None,
            Err(e) => {
                warn!("Failed to render map: {}", e);
                None
            }
        };

        Ok(PipelineReport {
            lines_scanned: extraction.lines_scanned,
            tokens_extracted: extraction.tokens.len(),
            lookups_issued: enrichment.lookups_issued,
            resolved: aggregate.len(),
            skipped: enrichment.skipped,
            halted: enrichment.halted.clone(),
            csv_path,
            map_path,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
