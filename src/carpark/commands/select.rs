use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::manager::ModelManager;

use super::helpers::resolve_index;

/// Checks that `index` is visible and asks the UI to jump to it.
///
/// Selection state itself belongs to the UI; the model is not touched.
pub fn run(model: &ModelManager, index: DisplayIndex) -> Result<CmdResult> {
    let selected = resolve_index(model, index)?;
    let mut result = CmdResult::default().with_highlight(Some(index));
    result.add_message(CmdMessage::success(format!(
        "Selected Car Park: {}",
        index
    )));
    result.affected.push(selected);
    Ok(result)
}
