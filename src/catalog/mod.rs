//! Static constellation catalog: schema, loading, and scene-space indexing
//!
//! The catalog is loaded once at startup, validated eagerly, and treated
//! as read-only afterwards. Schema violations (missing fields, coordinates
//! outside their domain) are rejected at load time rather than surfacing
//! later as bad geometry.

use crate::coordinates::ra_dec_to_scene;
use crate::scene::{CelestialBody, Constellation, LineSegment};
use crate::zodiac::sign_color_for_constellation;
use crate::{Result, SkyError};
use lazy_static::lazy_static;
use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Visual radius of every constellation star, in scene units
const STAR_VISUAL_SIZE: f64 = 5.0;
/// Color of constellation stars
const STAR_COLOR: &str = "#ffffff";

/// A single star entry in the catalog
///
/// Every field consumed downstream is part of the schema; nothing is read
/// from untyped side channels.
#[derive(Debug, Clone, Deserialize)]
pub struct StarRecord {
    /// Stable identifier, unique within the constellation
    pub id: String,
    /// Display name; derived from the id when absent
    #[serde(default)]
    pub name: Option<String>,
    /// Right ascension in hours, `[0, 24)`
    pub ra: f64,
    /// Declination in degrees, `[-90, 90]`
    pub dec: f64,
    /// Apparent magnitude (lower is brighter)
    pub magnitude: f64,
    /// Optional spectral class, e.g. `"K2"`
    #[serde(default)]
    pub spectral: Option<String>,
}

impl StarRecord {
    /// Display name: the explicit name, or the id with its first letter
    /// capitalized
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => {
                let mut chars = self.id.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            }
        }
    }
}

/// A constellation record: stars plus figure edges between star ids
#[derive(Debug, Clone, Deserialize)]
pub struct ConstellationRecord {
    pub id: String,
    pub name: String,
    pub chinese_name: String,
    pub stars: Vec<StarRecord>,
    pub edges: Vec<(String, String)>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    constellations: Vec<ConstellationRecord>,
}

/// Immutable star/constellation catalog
///
/// Holds the validated constellation records and a star-id index for O(1)
/// cross-reference. Constructed once; consumers take it by reference.
#[derive(Debug)]
pub struct SkyCatalog {
    constellations: Vec<ConstellationRecord>,
    /// star id -> (constellation index, star index)
    index: HashMap<String, (usize, usize)>,
}

lazy_static! {
    static ref BUILTIN: SkyCatalog = SkyCatalog::from_json_str(include_str!("zodiac.json"))
        .expect("embedded zodiac catalog is valid");
}

impl SkyCatalog {
    /// The built-in zodiac catalog: twelve constellations along the
    /// ecliptic with their brightest stars and figure lines
    pub fn builtin() -> &'static SkyCatalog {
        &BUILTIN
    }

    /// Parse and validate a catalog from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_records(file.constellations)
    }

    /// Load and validate a catalog from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    fn from_records(constellations: Vec<ConstellationRecord>) -> Result<Self> {
        let mut index = HashMap::new();

        for (ci, constellation) in constellations.iter().enumerate() {
            if constellation.id.is_empty() {
                return Err(SkyError::DataError(format!(
                    "constellation {:?} has an empty id",
                    constellation.name
                )));
            }

            for (si, star) in constellation.stars.iter().enumerate() {
                if star.id.is_empty() {
                    return Err(SkyError::DataError(format!(
                        "constellation {} contains a star with an empty id",
                        constellation.id
                    )));
                }
                if !(0.0..24.0).contains(&star.ra) {
                    return Err(SkyError::DataError(format!(
                        "star {}: right ascension {} h outside [0, 24)",
                        star.id, star.ra
                    )));
                }
                if !(-90.0..=90.0).contains(&star.dec) {
                    return Err(SkyError::DataError(format!(
                        "star {}: declination {}° outside [-90, 90]",
                        star.id, star.dec
                    )));
                }
                if !star.magnitude.is_finite() {
                    return Err(SkyError::DataError(format!(
                        "star {}: magnitude is not finite",
                        star.id
                    )));
                }
                if index.insert(star.id.clone(), (ci, si)).is_some() {
                    return Err(SkyError::DataError(format!(
                        "duplicate star id {}",
                        star.id
                    )));
                }
            }
        }

        debug!(
            "loaded catalog: {} constellations, {} stars",
            constellations.len(),
            index.len()
        );

        Ok(Self {
            constellations,
            index,
        })
    }

    /// All constellation records, in declaration order
    pub fn constellations(&self) -> &[ConstellationRecord] {
        &self.constellations
    }

    /// Look up a star record by id across all constellations
    pub fn star(&self, id: &str) -> Option<&StarRecord> {
        self.index
            .get(id)
            .map(|&(ci, si)| &self.constellations[ci].stars[si])
    }

    /// Total number of stars
    pub fn star_count(&self) -> usize {
        self.index.len()
    }
}

/// Build positioned constellations from a catalog at the given radius
///
/// Each star maps through the equatorial-to-scene transform; each edge
/// resolves both star ids against the constellation's own star list and
/// becomes a line segment between the two positions. An edge referencing
/// a missing id is dropped with a warning and does not affect other edges.
///
/// Output is fully determined by the catalog and radius: identical inputs
/// yield bit-identical positions.
pub fn build_constellations(catalog: &SkyCatalog, radius: f64) -> Result<Vec<Constellation>> {
    if radius <= 0.0 {
        return Err(SkyError::InvalidInput(format!(
            "constellation radius {} must be positive",
            radius
        )));
    }

    let constellations = catalog
        .constellations()
        .iter()
        .map(|record| build_one(record, radius))
        .collect();

    Ok(constellations)
}

fn build_one(record: &ConstellationRecord, radius: f64) -> Constellation {
    let stars: Vec<CelestialBody> = record
        .stars
        .iter()
        .map(|star| {
            let position = ra_dec_to_scene(star.ra, star.dec, radius);
            let mut body = CelestialBody::new(
                star.id.clone(),
                star.display_name(),
                position,
                STAR_VISUAL_SIZE,
                STAR_COLOR,
            )
            .with_constellation(record.name.clone())
            .with_description(format!(
                "{} ({}) - Mag: {}",
                record.name, record.chinese_name, star.magnitude
            ));
            if let Some(spectral) = &star.spectral {
                body = body.with_spectral_class(spectral.clone());
            }
            body
        })
        .collect();

    // Local id -> star lookup for edge resolution
    let by_id: HashMap<&str, usize> = record
        .stars
        .iter()
        .enumerate()
        .map(|(i, star)| (star.id.as_str(), i))
        .collect();

    let lines = record
        .edges
        .iter()
        .filter_map(|(id1, id2)| match (by_id.get(id1.as_str()), by_id.get(id2.as_str())) {
            (Some(&i1), Some(&i2)) => {
                Some(LineSegment::new(stars[i1].position, stars[i2].position))
            }
            _ => {
                warn!(
                    "{}: dropping edge {} -> {}, star id not in constellation",
                    record.id, id1, id2
                );
                None
            }
        })
        .collect();

    Constellation {
        id: record.id.clone(),
        name: record.name.clone(),
        chinese_name: record.chinese_name.clone(),
        stars,
        lines,
        line_color: sign_color_for_constellation(&record.name).to_string(),
    }
}

/// Flat view of every constellation star, for search and point rendering
pub fn all_stars(constellations: &[Constellation]) -> impl Iterator<Item = &CelestialBody> {
    constellations.iter().flat_map(|c| c.stars.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn mini_catalog(edges: &str) -> String {
        format!(
            r#"{{
                "constellations": [
                    {{
                        "id": "Tst",
                        "name": "Test",
                        "chinese_name": "測試",
                        "stars": [
                            {{ "id": "Tst-A", "name": "Alpha", "ra": 1.0, "dec": 10.0, "magnitude": 1.0 }},
                            {{ "id": "Tst-B", "ra": 2.0, "dec": -20.0, "magnitude": 2.5 }}
                        ],
                        "edges": {}
                    }}
                ]
            }}"#,
            edges
        )
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = SkyCatalog::builtin();
        assert_eq!(catalog.constellations().len(), 12);
        assert_eq!(catalog.star_count(), 34);

        let antares = catalog.star("Sco-Antares").expect("Antares present");
        assert_eq!(antares.name.as_deref(), Some("Antares"));
        assert_relative_eq!(antares.ra, 16.49);
    }

    #[test]
    fn test_missing_field_rejected() {
        // Star without a declination
        let json = r#"{
            "constellations": [
                {
                    "id": "Bad",
                    "name": "Bad",
                    "chinese_name": "壞",
                    "stars": [{ "id": "Bad-A", "ra": 1.0, "magnitude": 1.0 }],
                    "edges": []
                }
            ]
        }"#;
        assert!(matches!(
            SkyCatalog::from_json_str(json),
            Err(SkyError::ParseError(_))
        ));
    }

    #[test]
    fn test_out_of_range_coordinates_rejected() {
        let json = mini_catalog("[]").replace("\"ra\": 1.0", "\"ra\": 24.5");
        assert!(matches!(
            SkyCatalog::from_json_str(&json),
            Err(SkyError::DataError(_))
        ));

        let json = mini_catalog("[]").replace("\"dec\": 10.0", "\"dec\": 91.0");
        assert!(matches!(
            SkyCatalog::from_json_str(&json),
            Err(SkyError::DataError(_))
        ));
    }

    #[test]
    fn test_duplicate_star_id_rejected() {
        let json = mini_catalog("[]").replace("Tst-B", "Tst-A");
        assert!(matches!(
            SkyCatalog::from_json_str(&json),
            Err(SkyError::DataError(_))
        ));
    }

    #[test]
    fn test_build_positions_and_metadata() {
        let catalog = SkyCatalog::from_json_str(&mini_catalog(r#"[["Tst-A", "Tst-B"]]"#)).unwrap();
        let constellations = build_constellations(&catalog, 2000.0).unwrap();
        assert_eq!(constellations.len(), 1);

        let c = &constellations[0];
        assert_eq!(c.stars.len(), 2);
        assert_eq!(c.lines.len(), 1);

        let alpha = &c.stars[0];
        assert_eq!(alpha.name, "Alpha");
        assert_eq!(alpha.constellation.as_deref(), Some("Test"));
        assert_relative_eq!(alpha.position.norm(), 2000.0, max_relative = 1e-6);
        assert_eq!(alpha.position, ra_dec_to_scene(1.0, 10.0, 2000.0));

        // Name derived from the id when absent
        assert_eq!(c.stars[1].name, "Tst-B");

        assert_eq!(c.lines[0].start, c.stars[0].position);
        assert_eq!(c.lines[0].end, c.stars[1].position);

        // Non-zodiac constellations get the neutral line color
        assert_eq!(c.line_color, "#88ccff");
    }

    #[test]
    fn test_zodiac_line_colors() {
        let constellations = build_constellations(SkyCatalog::builtin(), 1100.0).unwrap();

        let scorpius = constellations.iter().find(|c| c.id == "Sco").unwrap();
        assert_eq!(scorpius.line_color, "#800080");

        let capricornus = constellations.iter().find(|c| c.id == "Cap").unwrap();
        assert_eq!(capricornus.line_color, "#a52a2a");

        let aries = constellations.iter().find(|c| c.id == "Ari").unwrap();
        assert_eq!(aries.line_color, "#ff0000");
    }

    #[test]
    fn test_unresolved_edge_dropped() {
        let edges = r#"[["Tst-A", "Tst-Missing"], ["Tst-A", "Tst-B"]]"#;
        let catalog = SkyCatalog::from_json_str(&mini_catalog(edges)).unwrap();
        let constellations = build_constellations(&catalog, 1000.0).unwrap();

        // The bad edge is gone, the good one survives
        assert_eq!(constellations[0].lines.len(), 1);
        assert_eq!(
            constellations[0].lines[0].start,
            constellations[0].stars[0].position
        );
    }

    #[test]
    fn test_build_is_deterministic() {
        let catalog = SkyCatalog::builtin();
        let first = build_constellations(catalog, 1100.0).unwrap();
        let second = build_constellations(catalog, 1100.0).unwrap();

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.stars.len(), b.stars.len());
            for (sa, sb) in a.stars.iter().zip(b.stars.iter()) {
                assert_eq!(sa.position, sb.position);
            }
        }
    }

    #[test]
    fn test_invalid_radius() {
        assert!(build_constellations(SkyCatalog::builtin(), 0.0).is_err());
        assert!(build_constellations(SkyCatalog::builtin(), -10.0).is_err());
    }

    #[test]
    fn test_all_stars_flattens_in_order() {
        let constellations = build_constellations(SkyCatalog::builtin(), 1100.0).unwrap();
        let stars: Vec<_> = all_stars(&constellations).collect();
        assert_eq!(stars.len(), 34);
        assert_eq!(stars[0].id, "Ari-Hamal");
    }
}
