use serde::Serialize;

use crate::model::ItemId;
use crate::ops::{AppContext, ProgressState};
use crate::view::ListView;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ItemJson {
    pub id: ItemId,
    pub text: String,
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Serialize)]
pub struct ListJson {
    pub items: Vec<ItemJson>,
    #[serde(flatten)]
    pub progress: ProgressState,
}

/// Snapshot of the rendered list, in display order
pub fn list_json(ctx: &AppContext<ListView>) -> ListJson {
    let items = ctx
        .view
        .rows()
        .iter()
        .map(|row| ItemJson {
            id: row.id,
            text: ctx
                .collection
                .find_by_id(row.id)
                .map(|item| item.text().to_string())
                .unwrap_or_default(),
            label: row.label.clone(),
            checked: row.checked,
        })
        .collect();

    // the counters as the view shows them, not re-derived
    ListJson {
        items,
        progress: ProgressState {
            total: ctx.view.total_count(),
            done: ctx.view.done_count(),
            percent: ctx.view.progress_percent(),
        },
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// `[x] 1  Buy milk` per row, then a summary line
pub fn format_list(ctx: &AppContext<ListView>) -> String {
    let mut out = String::new();
    for row in ctx.view.rows() {
        let mark = if row.checked { 'x' } else { ' ' };
        out.push_str(&format!("[{}] {}  {}\n", mark, row.id, row.label));
    }
    let total = ctx.view.total_count();
    out.push_str(&format!(
        "{} {}, {} done ({:.0}%)\n",
        total,
        if total == 1 { "item" } else { "items" },
        ctx.view.done_count(),
        ctx.view.progress_percent()
    ));
    out
}
