//! Groups command handler

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;

use opener::config::Config;
use opener::presentation::factory;
use opener::{ActionCatalog, GroupOfActions, UnnamedCatalog};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};
use crate::ui::views::groups::GroupsView;

const COMMAND: &str = "groups";

#[derive(Debug, Serialize)]
struct GroupEntry<'a> {
    /// Opener marker selecting this group, e.g. -1
    marker: i64,
    #[serde(flatten)]
    group: &'a GroupOfActions,
}

#[derive(Debug, Serialize)]
struct GroupList<'a> {
    groups: Vec<GroupEntry<'a>>,
}

pub fn cmd_groups(config: &Config, ui: &UiContext) -> Result<()> {
    let groups = config.group_table();

    if ui.json {
        emit_event(&StartEvent::new(COMMAND))?;
        let list = GroupList {
            groups: groups
                .iter()
                .map(|(index, group)| GroupEntry {
                    marker: -i64::from(index),
                    group,
                })
                .collect(),
        };
        emit_event(&DataEvent::new(COMMAND, list))?;
        emit_event(&CompleteEvent::success(COMMAND))?;
        return Ok(());
    }

    // Names come from the configured catalog when there is one.
    let catalog: Arc<dyn ActionCatalog> = match config.catalog.path.as_deref() {
        Some(path) => factory::load_action_table(path)?,
        None => Arc::new(UnnamedCatalog),
    };

    let view = GroupsView::new(&groups, catalog.as_ref());
    print!("{}", view.render(ui.color, ui.unicode, ui.width()));
    Ok(())
}
