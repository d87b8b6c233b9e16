use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::LifeCalcError;
use crate::LifeCalcResult;

/// Luteal phase length in days; ovulation precedes the next period by this.
const LUTEAL_PHASE_DAYS: i64 = 14;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvulationInput {
    pub last_period_start_date: NaiveDate,
    pub cycle_length_days: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvulationOutput {
    pub ovulation_date: NaiveDate,
    pub fertile_window_start: NaiveDate,
    pub fertile_window_end: NaiveDate,
}

/// Estimated ovulation date and fertile window from the last period
/// start and the cycle length. The window opens five days before
/// ovulation and closes the day after.
pub fn ovulation_window(input: &OvulationInput) -> LifeCalcResult<OvulationOutput> {
    if input.cycle_length_days < LUTEAL_PHASE_DAYS as u32 {
        return Err(LifeCalcError::InvalidInput {
            field: "cycle_length_days".into(),
            reason: "cycle must be at least 14 days".into(),
        });
    }

    let ovulation_date = input.last_period_start_date
        + Duration::days(input.cycle_length_days as i64 - LUTEAL_PHASE_DAYS);

    Ok(OvulationOutput {
        ovulation_date,
        fertile_window_start: ovulation_date - Duration::days(5),
        fertile_window_end: ovulation_date + Duration::days(1),
    })
}
