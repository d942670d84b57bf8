use crate::book::CarparkBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::manager::ModelManager;

pub fn run(model: &mut ModelManager) -> Result<CmdResult> {
    let removed: Vec<_> = model.current_snapshot().iter().cloned().collect();
    model.reset_data(CarparkBook::new());

    let mut result = CmdResult::default().with_affected(removed);
    result.add_message(CmdMessage::success("Car park list has been cleared!"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::versioning;
    use crate::model::fixtures::typical_carparks;

    #[test]
    fn clears_and_can_be_undone() {
        let mut model =
            ModelManager::new(CarparkBook::from_carparks(typical_carparks()).unwrap());
        let result = run(&mut model).unwrap();
        assert_eq!(result.affected.len(), 4);
        assert!(model.current_snapshot().is_empty());

        versioning::undo(&mut model).unwrap();
        assert_eq!(model.current_snapshot().len(), 4);
    }
}
