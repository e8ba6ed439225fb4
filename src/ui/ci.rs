//! GitHub Actions workflow annotations for comparison feedback.

use opener::MessageType;

/// `::error title=...::message` for errors, `::notice` for infos; successes are not annotated.
pub fn github_actions_annotation(kind: MessageType, message: &str, title: &str) -> Option<String> {
    let level = match kind {
        MessageType::Error => "error",
        MessageType::Info => "notice",
        MessageType::Success => return None,
    };

    Some(format!(
        "::{} title={}::{}",
        level,
        escape_property(title),
        escape_data(message)
    ))
}

pub fn running_in_github_actions() -> bool {
    std::env::var_os("GITHUB_ACTIONS").is_some()
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
