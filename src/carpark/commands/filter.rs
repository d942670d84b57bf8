use crate::commands::CmdResult;
use crate::error::{CarparkError, Result};
use crate::filter::{CarparkFilter, FilterCriteria};
use crate::manager::ModelManager;

use super::helpers::{listed, listed_message};

pub fn run(model: &mut ModelManager, criteria: FilterCriteria) -> Result<CmdResult> {
    if criteria.is_empty() {
        return Err(CarparkError::EmptyFilter);
    }

    model.update_filter(CarparkFilter::Criteria(criteria));
    let listed = listed(model);
    let mut result = CmdResult::default();
    result.add_message(listed_message(listed.len()));
    Ok(result.with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::CarparkBook;
    use crate::commands::MessageLevel;
    use crate::filter::ParkingSlot;
    use crate::model::fixtures::{time, typical_carparks};
    use crate::model::CarType;
    use chrono::Weekday;

    fn model() -> ModelManager {
        ModelManager::new(CarparkBook::from_carparks(typical_carparks()).unwrap())
    }

    #[test]
    fn empty_criteria_rejected() {
        let mut model = model();
        assert!(matches!(
            run(&mut model, FilterCriteria::default()),
            Err(CarparkError::EmptyFilter)
        ));
    }

    #[test]
    fn night_parking_and_car_type() {
        let mut model = model();
        let result = run(
            &mut model,
            FilterCriteria {
                night_parking: Some(true),
                car_type: Some(CarType::HeavyVehicle),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].carpark.code.as_str(), "HG55");
        assert_eq!(result.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn no_matches_warns() {
        let mut model = model();
        let result = run(
            &mut model,
            FilterCriteria {
                parking_at: Some(ParkingSlot {
                    day: Weekday::Sat,
                    from: time("10:00"),
                    to: time("12:00"),
                }),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.messages[0].content, "0 car parks listed!");
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn overnight_slot() {
        let mut model = model();
        let result = run(
            &mut model,
            FilterCriteria {
                parking_at: Some(ParkingSlot {
                    day: Weekday::Sat,
                    from: time("23:00"),
                    to: time("06:30"),
                }),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.messages[0].content, "1 car park listed!");
    }
}
