use opener::config::ConfigWarning;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Render unknown-key warnings for stderr.
pub fn render_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) -> String {
    let mut out = String::new();
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        out.push_str(&format!(
            "{} {}\n",
            Icon::Warning.colored(ui.color, ui.unicode),
            ColoredText::warning(format!("Unknown config key '{}' in {}", w.key, location))
                .render(ui.color)
        ));

        if let Some(suggestion) = &w.suggestion {
            out.push_str(&format!(
                "  {} Did you mean '{}'?\n",
                Icon::Arrow.colored(ui.color, ui.unicode),
                suggestion
            ));
        }
    }
    out
}

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    if ui.json || warnings.is_empty() {
        return;
    }
    eprint!("{}", render_config_warnings(warnings, ui));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use opener::config::Config;

    use crate::ui::terminal::TerminalCapabilities;

    fn plain_ui() -> UiContext {
        let caps = TerminalCapabilities {
            supports_color: false,
            supports_unicode: false,
            is_ci: false,
            width: 80,
        };
        UiContext::from_caps(false, None, &Config::default(), caps)
    }

    #[test]
    fn warning_includes_location_and_suggestion() {
        let warnings = vec![ConfigWarning {
            key: "max_shfit".to_string(),
            file: PathBuf::from("opener.toml"),
            line: Some(2),
            suggestion: Some("max_shift".to_string()),
        }];

        let rendered = render_config_warnings(&warnings, &plain_ui());
        assert!(rendered.contains("[WARN] Unknown config key 'max_shfit' in opener.toml:2"));
        assert!(rendered.contains("[>] Did you mean 'max_shift'?"));
    }

    #[test]
    fn warning_without_line_or_suggestion() {
        let warnings = vec![ConfigWarning {
            key: "colour".to_string(),
            file: PathBuf::from("cfg.toml"),
            line: None,
            suggestion: None,
        }];

        let rendered = render_config_warnings(&warnings, &plain_ui());
        assert_eq!(rendered, "[WARN] Unknown config key 'colour' in cfg.toml\n");
    }
}
