use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::manager::ModelManager;
use crate::model::Carpark;

use super::helpers::{listed, position_of};

pub fn run(model: &mut ModelManager, carpark: Carpark) -> Result<CmdResult> {
    let added = model.add_carpark(carpark)?;
    let highlight = position_of(model, &added.code);

    let mut result = CmdResult::default()
        .with_listed(listed(model))
        .with_highlight(highlight);
    result.add_message(CmdMessage::success(format!(
        "New car park added: {}",
        added
    )));
    result.affected.push(added);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::CarparkBook;
    use crate::error::CarparkError;
    use crate::model::fixtures::{carpark, typical_carparks};

    #[test]
    fn adds_and_highlights_new_carpark() {
        let mut model =
            ModelManager::new(CarparkBook::from_carparks(typical_carparks()).unwrap());
        let result = run(&mut model, carpark("NEW1", "New Street")).unwrap();

        assert_eq!(result.listed.len(), 5);
        assert_eq!(result.highlight.unwrap().one_based(), 5);
        assert_eq!(result.affected[0].code.as_str(), "NEW1");
        assert_eq!(
            result.messages[0].content,
            "New car park added: NEW1 (New Street)"
        );
    }

    #[test]
    fn duplicate_is_rejected() {
        let mut model =
            ModelManager::new(CarparkBook::from_carparks(typical_carparks()).unwrap());
        let err = run(&mut model, carpark("acb", "Again")).unwrap_err();
        assert!(matches!(err, CarparkError::DuplicateCarpark(_)));
        assert_eq!(model.history_len(), 1);
    }
}
