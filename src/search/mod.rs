//! Free-text search over catalog stars and live solar-system bodies
//!
//! Matching is case-insensitive, runs in a strict priority order, and
//! returns the first hit rather than a ranked list. A miss is an ordinary
//! `None`, not an error.

use crate::scene::{CelestialBody, Constellation};

/// Resolve a query to a celestial body
///
/// The query is trimmed and lowercased, then matched in priority order:
///
/// 1. Exact match against any star's name or id, across constellations in
///    catalog declaration order.
/// 2. Exact match against a live solar-system body's name.
/// 3. Exact match against a constellation's name, or exact/substring match
///    against its localized name; the constellation's first listed star
///    stands in for its location.
///
/// An empty query or no match returns `None`.
pub fn resolve<'a>(
    query: &str,
    constellations: &'a [Constellation],
    live_bodies: &'a [CelestialBody],
) -> Option<&'a CelestialBody> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return None;
    }

    // 1. Individual stars
    for constellation in constellations {
        if let Some(star) = constellation
            .stars
            .iter()
            .find(|s| s.name.to_lowercase() == term || s.id.to_lowercase() == term)
        {
            return Some(star);
        }
    }

    // 2. Solar-system bodies
    if let Some(body) = live_bodies
        .iter()
        .find(|b| b.name.to_lowercase() == term)
    {
        return Some(body);
    }

    // 3. Constellations, proxied by their first star
    constellations
        .iter()
        .find(|c| {
            c.name.to_lowercase() == term
                || c.chinese_name == term
                || c.chinese_name.contains(&term)
        })
        .and_then(|c| c.stars.first())
}
