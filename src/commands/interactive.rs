use std::path::Path;

use anyhow::{bail, Context, Result};
use permtree::presentation::output::render_key_sets;
use permtree::{Config, TitleStyle, TreeView};

use crate::ui::context::UiContext;
use crate::ui::theme::{icon, icons, icons_ascii};
use crate::ui::widgets::tree_menu::{run_interactive, TreeMenu};

pub fn cmd_interactive(menus: &Path, config: &Config, ui: &UiContext) -> Result<()> {
    if ui.json {
        bail!("interactive mode does not support --json; use `permtree apply` instead");
    }
    if !ui.caps.is_tty {
        bail!("interactive mode needs a terminal");
    }

    let forest = super::read_forest(menus, TitleStyle::WithType)?;
    let view = TreeView::new(config.tree_props(forest));
    let options = super::render_options(ui, view.features().checkable);

    let mut menu = TreeMenu::new(view);
    run_interactive(&mut menu, options, ui.caps.width).context("terminal session failed")?;

    println!(
        "{} {} interaction(s)",
        icon(ui.unicode, icons::SUCCESS, icons_ascii::SUCCESS),
        menu.events().len()
    );
    print!("{}", render_key_sets(menu.view()));
    Ok(())
}
