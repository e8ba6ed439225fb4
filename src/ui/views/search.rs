use opener::infrastructure::ActionRecord;
use opener::Job;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{pad_end, truncate_end, ColoredText};

pub struct SearchView<'a> {
    query: &'a str,
    job: &'a Job,
    results: &'a [&'a ActionRecord],
}

impl<'a> SearchView<'a> {
    pub fn new(query: &'a str, job: &'a Job, results: &'a [&'a ActionRecord]) -> Self {
        Self {
            query,
            job,
            results,
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool, width: usize) -> String {
        let mut out = String::new();

        let mut header = CommandHeader::new(Icon::Search, "Action Search");
        if !self.query.is_empty() {
            header.add("Query", format!("\"{}\"", self.query));
        }
        header.add("Job", self.job.to_string());
        out.push_str(&header.render(supports_color, supports_unicode, width));

        if self.results.is_empty() {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                ColoredText::warning("No actions match.").render(supports_color)
            ));
            return out;
        }

        let name_width = width.saturating_sub(10).min(32);
        for record in self.results {
            let name = pad_end(&truncate_end(&record.name, name_width), name_width);
            let line = format!(
                "{:>7}  {} {}",
                record.id,
                name,
                ColoredText::dim(record.job.as_deref().unwrap_or("")).render(supports_color)
            );
            out.push_str(line.trim_end());
            out.push('\n');
        }

        out.push('\n');
        out.push_str(&format!(
            "{} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success(format!("{} action(s) found", self.results.len()))
                .render(supports_color)
        ));
        out
    }
}
