use crate::commands::CmdResult;
use crate::error::{CarparkError, Result};
use crate::filter::CarparkFilter;
use crate::manager::ModelManager;

use super::helpers::{listed, listed_message};

pub fn run(model: &mut ModelManager, keywords: Vec<String>) -> Result<CmdResult> {
    let keywords: Vec<String> = keywords
        .into_iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect();
    if keywords.is_empty() {
        return Err(CarparkError::InvalidValue(
            "At least one keyword must be provided".to_string(),
        ));
    }

    model.update_filter(CarparkFilter::Keywords(keywords));
    let listed = listed(model);
    let mut result = CmdResult::default();
    result.add_message(listed_message(listed.len()));
    Ok(result.with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::book::CarparkBook;
    use crate::model::fixtures::typical_carparks;

    fn model() -> ModelManager {
        ModelManager::new(CarparkBook::from_carparks(typical_carparks()).unwrap())
    }

    #[test]
    fn lists_matches() {
        let mut model = model();
        let result = run(&mut model, vec!["Blk".into(), "2".into()]).unwrap();
        assert_eq!(result.listed.len(), 4);

        let result = run(&mut model, vec!["Kallang".into()]).unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.messages[0].content, "1 car park listed!");
    }

    #[test]
    fn no_matches() {
        let mut model = model();
        let result = run(&mut model, vec!["Jurong".into()]).unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages[0].content, "0 car parks listed!");
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn blank_keywords_rejected() {
        let mut model = model();
        assert!(run(&mut model, vec!["  ".into()]).is_err());
        assert!(model.filter().is_all());
    }
}
