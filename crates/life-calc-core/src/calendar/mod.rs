mod lunar_solar;
mod zodiac;

pub use lunar_solar::{
    convert_date, lunar_to_solar, solar_to_lunar, CalendarSystem, ConvertedDate, LunarDate,
};
pub use zodiac::{star_sign, zodiac_animal, StarSign, ZodiacAnimal};
