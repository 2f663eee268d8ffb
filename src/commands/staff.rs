use std::path::Path;

use anyhow::{Context, Result};
use permtree::infrastructure::{load_staff, load_valid_menus, JsonEventSink};
use permtree::presentation::output::{render_event, render_staff_menus};
use permtree::{StaffPermissions, TreeEvent, TreeEventSink};
use tracing::warn;

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};

pub fn cmd_staff(menus: &Path, staff: &Path, toggles: &[String], ui: &UiContext) -> Result<()> {
    let available = load_valid_menus(menus)
        .with_context(|| format!("failed to load menus from {}", menus.display()))?;
    let staff = load_staff(staff)
        .with_context(|| format!("failed to load staff from {}", staff.display()))?;

    let mut permissions = StaffPermissions::new(available, staff.to_form());

    let mut json_sink;
    let unicode = ui.unicode;
    let mut print_event = |event: &TreeEvent| println!("{}", render_event(event, unicode));
    let sink: &mut dyn TreeEventSink = if ui.json {
        emit_event(&StartEvent::new("staff"))?;
        json_sink = JsonEventSink::stdout("staff");
        &mut json_sink
    } else {
        &mut print_event
    };

    let mut interactions = 0;
    for key in toggles {
        if permissions.toggle(key, sink).is_some() {
            interactions += 1;
        } else {
            warn!(key = %key, "toggle had no effect");
        }
    }

    permissions
        .validate()
        .context("staff permissions cannot be saved")?;

    let form = permissions.form();
    if ui.json {
        emit_event(&DataEvent::new(
            "staff",
            serde_json::json!({ "userId": form.user_id, "menus": form.menus }),
        ))?;
        emit_event(&CompleteEvent::success("staff").with_interactions(interactions))?;
    } else {
        if interactions > 0 {
            println!();
        }
        print!("{}", render_staff_menus(&form.user_id, &form.menus));
    }
    Ok(())
}
