//! Compare command handler

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use opener::config::Config;
use opener::presentation::factory;
use opener::{parse_action_list, parse_recorded_list, Feedback, LoadedActions, MessageType};

use crate::ui::ci::{github_actions_annotation, running_in_github_actions};
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, FeedbackEvent, StartEvent};
use crate::ui::views::compare::CompareView;

const COMMAND: &str = "compare";

#[derive(Debug, Serialize)]
struct CompareSummary<'a> {
    /// 0-indexed opener positions that were wrong
    wrong_actions: Vec<usize>,
    errors: usize,
    perfect: bool,
    feedback: &'a Feedback,
}

pub fn cmd_compare(
    config: &Config,
    ui: &UiContext,
    opener: &str,
    used: &str,
    catalog: Option<&Path>,
    strict: bool,
) -> Result<()> {
    let opener = parse_action_list(opener).context("invalid --opener")?;
    let used = parse_recorded_list(used).context("invalid --used")?;
    let used = used.as_slice();

    if ui.json {
        emit_event(&StartEvent::new(COMMAND))?;
    }

    let catalog_path = factory::catalog_path(catalog, config);
    let catalog = factory::create_catalog(catalog_path.as_deref())?;
    let comparator = factory::create_comparator(config, catalog, opener.clone());

    let mut loaded = LoadedActions::from_actions(opener);
    let mut feedback = Feedback::new();
    comparator.compare(
        used,
        |f| feedback = f,
        |position| loaded.add_wrong_action_at(position),
    );

    let entries = feedback.entries();
    let errors = feedback.count(MessageType::Error);
    tracing::info!(
        opener = loaded.actions_count(),
        recorded = used.len(),
        errors,
        "compared recording"
    );

    if ui.json {
        for (kind, message) in &entries {
            emit_event(&FeedbackEvent::new(COMMAND, *kind, message.as_str()))?;
        }
        let summary = CompareSummary {
            wrong_actions: loaded.wrong_actions().collect(),
            errors,
            perfect: feedback.count(MessageType::Success) > 0,
            feedback: &feedback,
        };
        emit_event(&DataEvent::new(COMMAND, summary))?;
        let complete = if strict && errors > 0 {
            CompleteEvent::failure(COMMAND)
        } else {
            CompleteEvent::success(COMMAND)
        };
        emit_event(&complete)?;
    } else {
        let view = CompareView::new(&comparator, &loaded, used, &entries);
        print!("{}", view.render(ui.color, ui.unicode, ui.width()));

        if ui.caps.is_ci && running_in_github_actions() {
            for (kind, message) in &entries {
                if let Some(annotation) = github_actions_annotation(*kind, message, "opener compare") {
                    println!("{}", annotation);
                }
            }
        }
    }

    if strict && errors > 0 {
        std::process::exit(1);
    }

    Ok(())
}
