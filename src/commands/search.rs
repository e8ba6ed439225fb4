//! Search command handler

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use opener::config::Config;
use opener::infrastructure::ActionRecord;
use opener::presentation::factory;
use opener::Job;

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};
use crate::ui::views::search::SearchView;

const COMMAND: &str = "search";

#[derive(Debug, Serialize)]
struct SearchResults<'a> {
    query: &'a str,
    job: String,
    actions: &'a [&'a ActionRecord],
}

pub fn cmd_search(
    config: &Config,
    ui: &UiContext,
    query: &str,
    job: &Job,
    catalog: Option<&Path>,
) -> Result<()> {
    if ui.json {
        emit_event(&StartEvent::new(COMMAND))?;
    }

    let path = factory::catalog_path(catalog, config).context(
        "search needs an action catalog: pass --catalog <PATH> or set [catalog] path in opener.toml",
    )?;
    let table = factory::load_action_table(&path)?;

    let results: Vec<&ActionRecord> = table
        .search(query, job)
        .into_iter()
        .filter_map(|id| table.get(id))
        .collect();
    tracing::debug!(query, job = %job, found = results.len(), "searched catalog");

    if ui.json {
        emit_event(&DataEvent::new(
            COMMAND,
            SearchResults {
                query,
                job: job.to_string(),
                actions: &results,
            },
        ))?;
        emit_event(&CompleteEvent::success(COMMAND))?;
        return Ok(());
    }

    let view = SearchView::new(query, job, &results);
    print!("{}", view.render(ui.color, ui.unicode, ui.width()));
    Ok(())
}
