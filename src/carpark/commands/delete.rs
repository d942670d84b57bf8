use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::manager::ModelManager;

use super::helpers::{listed, resolve_index};

pub fn run(model: &mut ModelManager, index: DisplayIndex) -> Result<CmdResult> {
    let target = resolve_index(model, index)?;
    let removed = model.delete_carpark(&target)?;

    let mut result = CmdResult::default().with_listed(listed(model));
    result.add_message(CmdMessage::success(format!(
        "Deleted Car Park: {}",
        removed
    )));
    result.affected.push(removed);
    Ok(result)
}
