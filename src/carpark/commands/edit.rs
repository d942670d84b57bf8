use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CarparkError, Result};
use crate::index::DisplayIndex;
use crate::manager::ModelManager;
use crate::model::CarparkEdit;

use super::helpers::{listed, position_of, resolve_index};

pub fn run(model: &mut ModelManager, index: DisplayIndex, edit: &CarparkEdit) -> Result<CmdResult> {
    if edit.is_empty() {
        return Err(CarparkError::NothingToEdit);
    }
    let target = resolve_index(model, index)?;
    let edited = edit.apply(&target)?;
    let edited = model.edit_carpark(&target, edited)?;
    let highlight = position_of(model, &edited.code);

    let mut result = CmdResult::default()
        .with_listed(listed(model))
        .with_highlight(highlight);
    result.add_message(CmdMessage::success(format!("Edited Car Park: {}", edited)));
    result.affected.push(edited);
    Ok(result)
}
