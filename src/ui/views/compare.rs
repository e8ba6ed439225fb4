use opener::{LoadedActions, MessageType, OpenerComparator, RawActionId};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{pad_end, truncate_end, ColoredText};

/// Side-by-side opener/recording table followed by the feedback log.
pub struct CompareView<'a> {
    comparator: &'a OpenerComparator,
    loaded: &'a LoadedActions,
    used: &'a [RawActionId],
    feedback: &'a [(MessageType, String)],
}

impl<'a> CompareView<'a> {
    pub fn new(
        comparator: &'a OpenerComparator,
        loaded: &'a LoadedActions,
        used: &'a [RawActionId],
        feedback: &'a [(MessageType, String)],
    ) -> Self {
        Self {
            comparator,
            loaded,
            used,
            feedback,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool, width: usize) -> String {
        let mut out = String::new();

        let mut header = CommandHeader::new(Icon::Compare, "Opener Compare");
        header.add("Opener", format!("{} action(s)", self.loaded.actions_count()));
        header.add("Recorded", format!("{} action(s)", self.used.len()));
        out.push_str(&header.render(supports_color, supports_unicode, width));

        // marker + position take 12 columns, the rest is split between the two names
        let column = width.saturating_sub(12) / 2;
        let rows = self.loaded.actions_count().max(self.used.len());
        for i in 0..rows {
            let wrong = self.loaded.is_wrong_action_at(i);
            let marker = if wrong {
                Icon::Error.colored(supports_color, supports_unicode)
            } else {
                " ".repeat(Icon::Error.render(supports_unicode).chars().count())
            };

            let expected = self
                .loaded
                .action_at(i)
                .map(|id| self.comparator.describe(id))
                .unwrap_or_default();
            let expected = pad_end(&truncate_end(&expected, column), column);
            let expected = if wrong {
                ColoredText::error(expected)
            } else {
                ColoredText::plain(expected)
            };

            let actual = self
                .used
                .get(i)
                .map(|&id| self.comparator.action_name(id))
                .unwrap_or_default();

            out.push_str(
                format!(
                    "{} {:>3}  {} {}\n",
                    marker,
                    i + 1,
                    expected.render(supports_color),
                    ColoredText::dim(truncate_end(&actual, column)).render(supports_color)
                )
                .trim_end(),
            );
            out.push('\n');
        }

        out.push('\n');
        for (kind, message) in self.feedback {
            out.push_str(&format!(
                "{} {}\n",
                Icon::from(*kind).colored(supports_color, supports_unicode),
                ColoredText::feedback(*kind, message.as_str()).render(supports_color)
            ));
        }

        let wrong = self.loaded.wrong_actions().count();
        if wrong > 0 {
            out.push('\n');
            out.push_str(
                &ColoredText::error(format!(
                    "{} of {} opener action(s) wrong",
                    wrong,
                    self.loaded.actions_count()
                ))
                .bold()
                .render(supports_color),
            );
            out.push('\n');
        }

        out
    }
}
