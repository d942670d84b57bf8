use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::CarparkFilter;
use crate::manager::ModelManager;

use super::helpers::listed;

pub fn run(model: &mut ModelManager) -> Result<CmdResult> {
    model.update_filter(CarparkFilter::All);
    let mut result = CmdResult::default().with_listed(listed(model));
    if result.listed.is_empty() {
        result.add_message(CmdMessage::info("No car parks yet."));
    } else {
        result.add_message(CmdMessage::success("Listed all car parks"));
    }
    Ok(result)
}
