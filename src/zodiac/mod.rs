//! Zodiac sign boundaries along the ecliptic
//!
//! The twelve signs partition ecliptic longitude `[0, 360)` into
//! contiguous 30° wedges. Colors feed both the zodiac ring and the
//! constellation line art, which borrows the matching sign's color.

/// A zodiac sign's ecliptic longitude wedge and display color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZodiacSign {
    pub name: &'static str,
    /// Inclusive start of the wedge, ecliptic longitude in degrees
    pub start_degree: f64,
    /// Exclusive end of the wedge
    pub end_degree: f64,
    pub color: &'static str,
}

/// The twelve signs in ecliptic order, partitioning `[0, 360)`
pub const ZODIAC_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign { name: "Aries", start_degree: 0.0, end_degree: 30.0, color: "#ff0000" },
    ZodiacSign { name: "Taurus", start_degree: 30.0, end_degree: 60.0, color: "#00ff00" },
    ZodiacSign { name: "Gemini", start_degree: 60.0, end_degree: 90.0, color: "#ffff00" },
    ZodiacSign { name: "Cancer", start_degree: 90.0, end_degree: 120.0, color: "#c0c0c0" },
    ZodiacSign { name: "Leo", start_degree: 120.0, end_degree: 150.0, color: "#ffa500" },
    ZodiacSign { name: "Virgo", start_degree: 150.0, end_degree: 180.0, color: "#0000ff" },
    ZodiacSign { name: "Libra", start_degree: 180.0, end_degree: 210.0, color: "#00ffff" },
    ZodiacSign { name: "Scorpio", start_degree: 210.0, end_degree: 240.0, color: "#800080" },
    ZodiacSign { name: "Sagittarius", start_degree: 240.0, end_degree: 270.0, color: "#ff00ff" },
    ZodiacSign { name: "Capricorn", start_degree: 270.0, end_degree: 300.0, color: "#a52a2a" },
    ZodiacSign { name: "Aquarius", start_degree: 300.0, end_degree: 330.0, color: "#008080" },
    ZodiacSign { name: "Pisces", start_degree: 330.0, end_degree: 360.0, color: "#000080" },
];

/// Constellation names that differ from their sign's name
const SIGN_ALIASES: [(&str, &str); 2] = [("Scorpio", "Scorpius"), ("Capricorn", "Capricornus")];

/// The sign containing the given ecliptic longitude
///
/// Longitude is wrapped into `[0, 360)` first, so any finite input maps to
/// exactly one sign.
pub fn sign_for_longitude(longitude_degrees: f64) -> &'static ZodiacSign {
    // rem_euclid of a tiny negative value can round to exactly 360.0,
    // which no wedge contains.
    let mut wrapped = longitude_degrees.rem_euclid(360.0);
    if wrapped >= 360.0 {
        wrapped = 0.0;
    }
    ZODIAC_SIGNS
        .iter()
        .find(|sign| wrapped >= sign.start_degree && wrapped < sign.end_degree)
        .expect("the twelve signs cover [0, 360)")
}

/// Line color for a constellation, borrowed from the sign of the same
/// name, with a neutral fallback for non-zodiac constellations
///
/// Two constellation names differ from their sign's (Scorpius/Scorpio,
/// Capricornus/Capricorn); those are matched through an explicit alias
/// table.
pub fn sign_color_for_constellation(name: &str) -> &'static str {
    let sign_name = SIGN_ALIASES
        .iter()
        .find(|(_, constellation)| *constellation == name)
        .map(|(sign, _)| *sign)
        .unwrap_or(name);

    ZODIAC_SIGNS
        .iter()
        .find(|sign| sign.name == sign_name)
        .map(|sign| sign.color)
        .unwrap_or("#88ccff")
}
