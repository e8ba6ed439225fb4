use crossterm::style::Stylize;

use opener::MessageType;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Info,
    Arrow,
    Compare,
    Search,
    Groups,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Info) => theme::icons::INFO,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Compare) => theme::icons::COMPARE,
            (true, Icon::Search) => theme::icons::SEARCH,
            (true, Icon::Groups) => theme::icons::GROUPS,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Info) => theme::icons_ascii::INFO,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Compare) => theme::icons_ascii::COMPARE,
            (false, Icon::Search) => theme::icons_ascii::SEARCH,
            (false, Icon::Groups) => theme::icons_ascii::GROUPS,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Arrow => theme::colors::DIM,
            Icon::Info | Icon::Compare | Icon::Search | Icon::Groups => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}

impl From<MessageType> for Icon {
    fn from(kind: MessageType) -> Self {
        match kind {
            MessageType::Success => Icon::Success,
            MessageType::Info => Icon::Info,
            MessageType::Error => Icon::Error,
        }
    }
}
