//! Terminal capability detection for stdout.

use is_terminal::IsTerminal;

/// Width assumed when stdout is not a terminal.
const FALLBACK_WIDTH: u16 = 80;

/// Narrowest width views lay out for.
const MIN_WIDTH: u16 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
    pub width: u16,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    let is_tty = std::io::stdout().is_terminal();
    let width = if is_tty {
        crossterm::terminal::size().ok().map(|(w, _)| w)
    } else {
        None
    };
    detect_capabilities_impl(|key| std::env::var(key).ok(), is_tty, width)
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
    width: Option<u16>,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    TerminalCapabilities {
        supports_color: is_tty && !term_is_dumb && get_env("NO_COLOR").is_none(),
        supports_unicode: !term_is_dumb && !ascii_locale(&get_env),
        is_ci: is_ci_env(&get_env),
        width: width.unwrap_or(FALLBACK_WIDTH).max(MIN_WIDTH),
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["CI", "GITHUB_ACTIONS", "GITLAB_CI", "BUILDKITE", "TEAMCITY_VERSION"];
    KEYS.iter().any(|k| get_env(k).is_some())
}

/// A locale is only treated as ASCII when it is set to a non-UTF-8 value.
fn ascii_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|k| get_env(k).filter(|v| !v.is_empty()));

    match locale {
        Some(v) => {
            let v = v.to_lowercase();
            !(v.contains("utf-8") || v.contains("utf8"))
        }
        None => false,
    }
}
