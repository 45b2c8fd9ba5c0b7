use std::env;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use itertools::Itertools;
use log::warn;

use gedmap::utils::{console, logging};
use gedmap::{EventKind, EventKindSet, GedcomParser, Gazetteer, aggregate, resolved_codes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = env::args().skip(1);
    let gedcom_path = PathBuf::from(
        args.next()
            .context("usage: gedmap <gedcom-file> [gazetteer.json ...]")?,
    );
    let gazetteer_paths: Vec<PathBuf> = args.map(PathBuf::from).collect();

    // The resolver must be ready before any place field is parsed; a failed
    // load degrades to the empty resolver, never aborts.
    let gazetteer = if gazetteer_paths.is_empty() {
        warn!("No gazetteer tables given, places will stay unresolved");
        Gazetteer::default()
    } else {
        match gedmap::load_gazetteer(&gazetteer_paths).await {
            Ok(gazetteer) => gazetteer,
            Err(err) => {
                logging::log_degraded(
                    &format!("Gazetteer load failed ({err}), continuing unresolved"),
                    None,
                );
                Gazetteer::default()
            }
        }
    };

    logging::log_load_start("GEDCOM records", &gedcom_path);
    let text = tokio::fs::read_to_string(&gedcom_path)
        .await
        .with_context(|| format!("reading {}", gedcom_path.display()))?;

    let start = Instant::now();
    let collection = GedcomParser::new(&gazetteer).parse(&text);
    logging::log_parse_complete(&collection, Some(start.elapsed()));

    console::print_dataset_summary(&collection);
    for kind in EventKind::ALL {
        console::print_frequency_table(kind, &aggregate(&collection, kind, None));
    }

    let codes = resolved_codes(&collection, &EventKindSet::default(), None);
    let sorted: Vec<&String> = codes.iter().sorted().collect();
    console::print_resolved_codes(&sorted, &gazetteer);

    Ok(())
}
