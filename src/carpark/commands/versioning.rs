use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::manager::ModelManager;

use super::helpers::listed;

pub fn undo(model: &mut ModelManager) -> Result<CmdResult> {
    model.undo()?;
    let mut result = CmdResult::default().with_listed(listed(model));
    result.add_message(CmdMessage::success("Undo success!"));
    Ok(result)
}

pub fn redo(model: &mut ModelManager) -> Result<CmdResult> {
    model.redo()?;
    let mut result = CmdResult::default().with_listed(listed(model));
    result.add_message(CmdMessage::success("Redo success!"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::CarparkBook;
    use crate::commands::{delete, filter};
    use crate::error::CarparkError;
    use crate::filter::FilterCriteria;
    use crate::index::DisplayIndex;
    use crate::model::fixtures::typical_carparks;

    fn model() -> ModelManager {
        ModelManager::new(CarparkBook::from_carparks(typical_carparks()).unwrap())
    }

    #[test]
    fn nothing_to_undo_or_redo() {
        let mut model = model();
        let err = undo(&mut model).unwrap_err();
        assert!(matches!(err, CarparkError::NoEarlierState));
        assert_eq!(err.to_string(), "No more commands to undo!");

        let err = redo(&mut model).unwrap_err();
        assert!(matches!(err, CarparkError::NoLaterState));
        assert_eq!(err.to_string(), "No more commands to redo!");
    }

    #[test]
    fn failed_delete_leaves_nothing_to_undo() {
        let mut model = model();
        let out_of_range = DisplayIndex::from_one_based(9).unwrap();
        assert!(delete::run(&mut model, out_of_range).is_err());
        assert!(undo(&mut model).is_err());
        assert!(redo(&mut model).is_err());
    }

    #[test]
    fn undo_keeps_active_filter() {
        let mut model = model();
        delete::run(&mut model, DisplayIndex::from_one_based(3).unwrap()).unwrap();
        filter::run(
            &mut model,
            FilterCriteria {
                night_parking: Some(true),
                ..Default::default()
            },
        )
        .unwrap();

        let result = undo(&mut model).unwrap();
        let codes: Vec<&str> = result
            .listed
            .iter()
            .map(|d| d.carpark.code.as_str())
            .collect();
        assert_eq!(codes, vec!["TBM4", "HG55"]);
        assert_eq!(result.messages[0].content, "Undo success!");

        let result = redo(&mut model).unwrap();
        assert_eq!(result.listed.len(), 1);
    }
}
