use std::path::Path;

use anyhow::{Context, Result};
use permtree::infrastructure::{JsonEventSink, SessionState};
use permtree::presentation::output::{render_event, render_key_sets};
use permtree::{Config, TitleStyle, TreeAction, TreeEvent, TreeEventSink, TreeView};
use tracing::warn;

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};

#[derive(Debug, Clone, Copy)]
pub struct ApplyOptions<'a> {
    pub actions: &'a [TreeAction],
    pub strict: bool,
    pub multiple: bool,
    /// Session file seeding the defaults, rewritten afterwards
    pub state: Option<&'a Path>,
}

pub fn cmd_apply(
    menus: &Path,
    options: ApplyOptions<'_>,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    let forest = super::read_forest(menus, TitleStyle::WithType)?;

    let mut props = config.tree_props(forest);
    if options.strict {
        props = props.with_check_strictly(true);
    }
    if options.multiple {
        props = props.with_multiple(true);
    }
    if let Some(path) = options.state.filter(|path| path.exists()) {
        let session = SessionState::load(path)
            .with_context(|| format!("failed to read state from {}", path.display()))?;
        props = session.seed(props);
    }
    let mut view = TreeView::new(props);

    let interactions = if ui.json {
        emit_event(&StartEvent::new("apply"))?;
        replay(&mut view, options.actions, &mut JsonEventSink::stdout("apply"))
    } else {
        let unicode = ui.unicode;
        let mut print_event = |event: &TreeEvent| println!("{}", render_event(event, unicode));
        replay(&mut view, options.actions, &mut print_event)
    };

    if let Some(path) = options.state {
        SessionState::capture(&view)
            .save(path)
            .with_context(|| format!("failed to write state to {}", path.display()))?;
    }

    if ui.json {
        emit_event(&DataEvent::new(
            "apply",
            serde_json::json!({
                "expanded_keys": view.expanded_keys(),
                "checked_keys": view.checked_keys(),
                "selected_keys": view.selected_keys(),
            }),
        ))?;
        emit_event(&CompleteEvent::success("apply").with_interactions(interactions))?;
    } else {
        if interactions > 0 {
            println!();
        }
        print!("{}", render_key_sets(&view));
    }
    Ok(())
}

/// Run actions in order; returns how many produced an event
fn replay(view: &mut TreeView, actions: &[TreeAction], sink: &mut dyn TreeEventSink) -> usize {
    let mut count = 0;
    for action in actions {
        if view.handle_action(action, sink).is_some() {
            count += 1;
        } else {
            warn!(action = %action, "interaction had no effect");
        }
    }
    count
}
