use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LifeCalcError;
use crate::types::round_2dp;
use crate::LifeCalcResult;

/// Hourly burn figures assume a 70 kg reference body.
const REFERENCE_WEIGHT_KG: Decimal = dec!(70);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Exercise {
    WalkSlow,
    WalkNormal,
    WalkFast,
    RunSlow,
    RunNormal,
    RunFast,
    GolfDouble,
    GolfQuad,
    BasketballHalf,
    BasketballFull,
    Archery,
    Billiards,
    DanceWaltz,
    DanceDisco,
    DanceAerobics,
    Hiking,
    Racquetball,
    RollerSkating,
    BeautyGymnastics,
    VolleyballModerate,
    VolleyballIntense,
    BadmintonSingles,
    BadmintonDoubles,
    Boating,
    Bowling,
    #[serde(rename = "SWIMMING_BACK_25")]
    SwimmingBack25,
    #[serde(rename = "SWIMMING_BACK_40")]
    SwimmingBack40,
    #[serde(rename = "SWIMMING_BUTTERFLY_20")]
    SwimmingButterfly20,
    #[serde(rename = "SWIMMING_BUTTERFLY_40")]
    SwimmingButterfly40,
    #[serde(rename = "SWIMMING_FREE_25")]
    SwimmingFree25,
    #[serde(rename = "SWIMMING_FREE_50")]
    SwimmingFree50,
    SquashRecreational,
    SquashCompetitive,
    Skiing,
    HorseWalk,
    HorseTrot,
    IceSkating,
    IceHockey,
    BaseballFielder,
    BaseballPitcher,
    Judo,
    CyclingFlat,
    CyclingHill,
    SoccerModerate,
    SoccerIntense,
    TableTennis,
    Taekwondo,
    FencingModerate,
    FencingIntense,
    TennisSingles,
    TennisDoubles,
    FieldHockey,
    HikingTrail,
    HandballModerate,
    HandballCompetitive,
}

impl Exercise {
    /// Average burn per hour for a 70 kg body, in kcal.
    pub fn kcal_per_hour(self) -> Decimal {
        match self {
            Exercise::WalkSlow => dec!(200),
            Exercise::WalkNormal => dec!(300),
            Exercise::WalkFast => dec!(400),
            Exercise::RunSlow => dec!(500),
            Exercise::RunNormal => dec!(700),
            Exercise::RunFast => dec!(900),
            Exercise::GolfDouble => dec!(250),
            Exercise::GolfQuad => dec!(200),
            Exercise::BasketballHalf => dec!(400),
            Exercise::BasketballFull => dec!(600),
            Exercise::Archery => dec!(150),
            Exercise::Billiards => dec!(120),
            Exercise::DanceWaltz => dec!(180),
            Exercise::DanceDisco => dec!(300),
            Exercise::DanceAerobics => dec!(400),
            Exercise::Hiking => dec!(450),
            Exercise::Racquetball => dec!(600),
            Exercise::RollerSkating => dec!(500),
            Exercise::BeautyGymnastics => dec!(200),
            Exercise::VolleyballModerate => dec!(300),
            Exercise::VolleyballIntense => dec!(400),
            Exercise::BadmintonSingles => dec!(500),
            Exercise::BadmintonDoubles => dec!(350),
            Exercise::Boating => dec!(300),
            Exercise::Bowling => dec!(200),
            Exercise::SwimmingBack25 => dec!(400),
            Exercise::SwimmingBack40 => dec!(600),
            Exercise::SwimmingButterfly20 => dec!(700),
            Exercise::SwimmingButterfly40 => dec!(900),
            Exercise::SwimmingFree25 => dec!(400),
            Exercise::SwimmingFree50 => dec!(800),
            Exercise::SquashRecreational => dec!(500),
            Exercise::SquashCompetitive => dec!(700),
            Exercise::Skiing => dec!(500),
            Exercise::HorseWalk => dec!(200),
            Exercise::HorseTrot => dec!(400),
            Exercise::IceSkating => dec!(500),
            Exercise::IceHockey => dec!(700),
            Exercise::BaseballFielder => dec!(300),
            Exercise::BaseballPitcher => dec!(350),
            Exercise::Judo => dec!(700),
            Exercise::CyclingFlat => dec!(300),
            Exercise::CyclingHill => dec!(800),
            Exercise::SoccerModerate => dec!(500),
            Exercise::SoccerIntense => dec!(700),
            Exercise::TableTennis => dec!(300),
            Exercise::Taekwondo => dec!(800),
            Exercise::FencingModerate => dec!(400),
            Exercise::FencingIntense => dec!(600),
            Exercise::TennisSingles => dec!(600),
            Exercise::TennisDoubles => dec!(400),
            Exercise::FieldHockey => dec!(600),
            Exercise::HikingTrail => dec!(400),
            Exercise::HandballModerate => dec!(600),
            Exercise::HandballCompetitive => dec!(800),
        }
    }
}

/// Calories burned over a session, scaled by body weight against the
/// 70 kg reference and by duration in minutes.
pub fn calories_burned(
    exercise: Exercise,
    weight_kg: Decimal,
    duration_minutes: Decimal,
) -> LifeCalcResult<Decimal> {
    if weight_kg <= Decimal::ZERO {
        return Err(LifeCalcError::InvalidInput {
            field: "weight_kg".into(),
            reason: "weight must be positive".into(),
        });
    }
    if duration_minutes < Decimal::ZERO {
        return Err(LifeCalcError::InvalidInput {
            field: "duration_minutes".into(),
            reason: "duration must not be negative".into(),
        });
    }

    let burned = exercise.kcal_per_hour() * (weight_kg / REFERENCE_WEIGHT_KG)
        * (duration_minutes / dec!(60));
    Ok(round_2dp(burned))
}
