use opener::{ActionCatalog, GroupTable};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{truncate_end, ColoredText};

/// Configured groups with the marker that selects each one in an opener.
pub struct GroupsView<'a> {
    groups: &'a GroupTable,
    catalog: &'a dyn ActionCatalog,
}

impl<'a> GroupsView<'a> {
    pub fn new(groups: &'a GroupTable, catalog: &'a dyn ActionCatalog) -> Self {
        Self { groups, catalog }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool, width: usize) -> String {
        let mut out = String::new();

        let mut header = CommandHeader::new(Icon::Groups, "Action Groups");
        header.add("Groups", self.groups.len().to_string());
        out.push_str(&header.render(supports_color, supports_unicode, width));

        for (index, group) in self.groups.iter() {
            out.push_str(&format!(
                "{:>4}  {}\n",
                format!("-{}", index),
                ColoredText::info(group.name.as_str()).bold().render(supports_color)
            ));
            if !group.description.is_empty() {
                out.push_str(&format!(
                    "      {}\n",
                    ColoredText::dim(truncate_end(&group.description, width.saturating_sub(6)))
                        .render(supports_color)
                ));
            }
            for &action in &group.actions {
                out.push_str(&format!(
                    "      {} {} ({})\n",
                    Icon::Arrow.colored(supports_color, supports_unicode),
                    self.catalog.action_name(action),
                    action
                ));
            }
        }

        out
    }
}
