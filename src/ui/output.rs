use crossterm::style::Stylize;
use permtree::config::ConfigWarning;

use crate::ui::theme::{colors, icon, icons, icons_ascii};

pub fn print_config_warnings(warnings: &[ConfigWarning], color: bool, unicode: bool) {
    let mark = icon(unicode, icons::WARNING, icons_ascii::WARNING);
    let warn = if color {
        mark.with(colors::WARNING).to_string()
    } else {
        mark.to_string()
    };
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("{} Unknown config key '{}' in {}:{}", warn, w.key, w.file.display(), line);
        } else {
            eprintln!("{} Unknown config key '{}' in {}", warn, w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
