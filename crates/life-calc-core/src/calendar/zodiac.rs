use serde::{Deserialize, Serialize};

/// Twelve-year zodiac cycle, anchored so that year 4 CE is a Rat year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZodiacAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

pub fn zodiac_animal(year: i32) -> ZodiacAnimal {
    const CYCLE: [ZodiacAnimal; 12] = [
        ZodiacAnimal::Rat,
        ZodiacAnimal::Ox,
        ZodiacAnimal::Tiger,
        ZodiacAnimal::Rabbit,
        ZodiacAnimal::Dragon,
        ZodiacAnimal::Snake,
        ZodiacAnimal::Horse,
        ZodiacAnimal::Goat,
        ZodiacAnimal::Monkey,
        ZodiacAnimal::Rooster,
        ZodiacAnimal::Dog,
        ZodiacAnimal::Pig,
    ];
    CYCLE[(year - 4).rem_euclid(12) as usize]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StarSign {
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
}

/// Western zodiac sign for a birth month and day. Capricorn wraps the
/// year boundary (Dec 22 through Jan 19).
pub fn star_sign(month: u32, day: u32) -> StarSign {
    match (month, day) {
        (1, 1..=19) => StarSign::Capricorn,
        (1, _) => StarSign::Aquarius,
        (2, 1..=18) => StarSign::Aquarius,
        (2, _) => StarSign::Pisces,
        (3, 1..=20) => StarSign::Pisces,
        (3, _) => StarSign::Aries,
        (4, 1..=19) => StarSign::Aries,
        (4, _) => StarSign::Taurus,
        (5, 1..=20) => StarSign::Taurus,
        (5, _) => StarSign::Gemini,
        (6, 1..=21) => StarSign::Gemini,
        (6, _) => StarSign::Cancer,
        (7, 1..=22) => StarSign::Cancer,
        (7, _) => StarSign::Leo,
        (8, 1..=22) => StarSign::Leo,
        (8, _) => StarSign::Virgo,
        (9, 1..=22) => StarSign::Virgo,
        (9, _) => StarSign::Libra,
        (10, 1..=22) => StarSign::Libra,
        (10, _) => StarSign::Scorpio,
        (11, 1..=22) => StarSign::Scorpio,
        (11, _) => StarSign::Sagittarius,
        (12, 1..=21) => StarSign::Sagittarius,
        _ => StarSign::Capricorn,
    }
}
