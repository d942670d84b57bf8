use crate::commands::CmdMessage;
use crate::error::Result;
use crate::index::{DisplayCarpark, DisplayIndex};
use crate::manager::ModelManager;
use crate::model::{Carpark, CarparkCode};
use std::sync::Arc;

/// Looks up the car park shown at `index` in the current filtered view.
pub fn resolve_index(model: &ModelManager, index: DisplayIndex) -> Result<Arc<Carpark>> {
    model.filtered_carparks().get(index).cloned()
}

pub fn listed(model: &ModelManager) -> Vec<DisplayCarpark> {
    model.filtered_carparks().indexed()
}

pub fn position_of(model: &ModelManager, code: &CarparkCode) -> Option<DisplayIndex> {
    model.filtered_carparks().position_of(code)
}

/// Reports how many car parks a search listed; an empty result is a warning.
pub fn listed_message(count: usize) -> CmdMessage {
    let content = format!("{} {} listed!", count, pluralize(count));
    if count == 0 {
        CmdMessage::warning(content)
    } else {
        CmdMessage::info(content)
    }
}

pub fn pluralize(count: usize) -> &'static str {
    if count == 1 {
        "car park"
    } else {
        "car parks"
    }
}
