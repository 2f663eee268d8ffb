//! What the terminal can show the permission tree
//!
//! - `supports_unicode` picks the checkbox, chevron and marker icons over
//!   their ASCII fallbacks.
//! - `supports_color` (outside CI) colors checked rows, the selection
//!   marker and disabled nodes.
//! - `is_tty` gates `permtree interactive`.
//! - `width` caps the rule under the interactive header.

use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// Stdout is a terminal
    pub is_tty: bool,
    pub supports_color: bool,
    /// Box-drawing and check glyphs render correctly
    pub supports_unicode: bool,
    /// Running under a CI service; auto color stays off
    pub is_ci: bool,
    /// Columns, 80 when unknown
    pub width: u16,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    scan(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
        crossterm::terminal::size().ok().map(|(columns, _)| columns),
    )
}

fn scan(
    env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
    columns: Option<u16>,
) -> TerminalCapabilities {
    let dumb = env("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));

    TerminalCapabilities {
        is_tty,
        supports_color: is_tty && !dumb && env("NO_COLOR").is_none(),
        supports_unicode: !dumb && locale_allows_unicode(&env),
        is_ci: CI_MARKERS.iter().any(|key| env(key).is_some()),
        width: columns.unwrap_or(80),
    }
}

const CI_MARKERS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "JENKINS_HOME",
    "BUILDKITE",
    "CIRCLECI",
    "TRAVIS",
    "TEAMCITY_VERSION",
];

// First locale variable that is set decides; unset means a modern UTF-8 default
fn locale_allows_unicode(env: &impl Fn(&str) -> Option<String>) -> bool {
    let Some(locale) = ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|key| env(key))
        .map(|value| value.to_lowercase())
    else {
        return true;
    };

    !(locale == "c" || locale == "posix")
}
