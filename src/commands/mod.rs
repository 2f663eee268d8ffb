//! Command handlers for the permtree binary.

mod apply;
mod interactive;
mod show;
mod staff;

pub use apply::{cmd_apply, ApplyOptions};
pub use interactive::cmd_interactive;
pub use show::cmd_show;
pub use staff::cmd_staff;

use std::path::Path;

use anyhow::{Context, Result};
use permtree::infrastructure::load_forest;
use permtree::{TitleStyle, TreeNode};

use crate::ui::context::UiContext;
use crate::ui::widgets::tree_menu::RenderOptions;

fn read_forest(menus: &Path, style: TitleStyle) -> Result<Vec<TreeNode>> {
    let forest = load_forest(menus, style)
        .with_context(|| format!("failed to load menus from {}", menus.display()))?;
    tracing::info!(
        file = %menus.display(),
        roots = forest.len(),
        "loaded menu tree"
    );
    Ok(forest)
}

fn render_options(ui: &UiContext, checkable: bool) -> RenderOptions {
    RenderOptions {
        unicode: ui.unicode,
        color: ui.color,
        checkable,
    }
}
