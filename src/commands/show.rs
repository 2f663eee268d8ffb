use std::path::Path;

use anyhow::Result;
use permtree::{Config, TitleStyle, TreeView};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};
use crate::ui::widgets::tree_menu::render_rows;

pub fn cmd_show(menus: &Path, plain_titles: bool, config: &Config, ui: &UiContext) -> Result<()> {
    let style = if plain_titles {
        TitleStyle::NameOnly
    } else {
        TitleStyle::WithType
    };
    let forest = super::read_forest(menus, style)?;
    let view = TreeView::new(config.tree_props(forest));
    let rows = view.rows();

    if ui.json {
        emit_event(&StartEvent::new("show"))?;
        emit_event(&DataEvent::new("show", serde_json::json!({ "rows": rows })))?;
        emit_event(&CompleteEvent::success("show"))?;
        return Ok(());
    }

    let options = super::render_options(ui, view.features().checkable);
    print!("{}", render_rows(&rows, None, options));
    Ok(())
}
