//! Tool to inspect the sky model from the command line
//!
//! Prints the observer's sky orientation, a constellation summary, a
//! projected solar-system table (from a bundled fixture ephemeris), and
//! optionally resolves a search query against the catalog.

use chrono::Utc;
use clap::Parser;
use nalgebra::Vector3;
use std::path::PathBuf;

use skysphere::catalog::{all_stars, build_constellations};
use skysphere::constants::{RAD2DEG, STAR_DISTANCE};
use skysphere::ephemeris::{project_solar_system, Body, FixedEphemeris};
use skysphere::observer::{FixedObserver, GeoLocation, ObserverProvider};
use skysphere::orientation::{latitude_tilt, local_sidereal_time};
use skysphere::search::resolve;
use skysphere::SkyCatalog;

#[derive(Parser)]
#[command(name = "sky_report", about = "Inspect the night-sky scene model")]
struct Args {
    /// Observer latitude in degrees
    #[arg(long)]
    latitude: Option<f64>,

    /// Observer longitude in degrees
    #[arg(long)]
    longitude: Option<f64>,

    /// Radius at which constellation stars are placed, in scene units
    #[arg(long, default_value_t = STAR_DISTANCE)]
    radius: f64,

    /// Catalog JSON file; the built-in zodiac catalog when omitted
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Resolve a search query against stars, bodies, and constellations
    #[arg(long)]
    search: Option<String>,
}

/// Plausible geocentric vectors (AU) for an offline demonstration
fn demo_ephemeris() -> FixedEphemeris {
    FixedEphemeris::new()
        .with_body(Body::Sun, Vector3::new(0.9045, 0.3865, 0.1675))
        .with_body(Body::Mercury, Vector3::new(1.2011, 0.5210, 0.1622))
        .with_body(Body::Venus, Vector3::new(0.2850, -0.6295, -0.3035))
        .with_body(Body::Moon, Vector3::new(-0.0019, 0.0014, 0.0007))
        .with_body(Body::Mars, Vector3::new(-1.4310, 1.5021, 0.7280))
        .with_body(Body::Jupiter, Vector3::new(3.9841, 2.9926, 1.1842))
        .with_body(Body::Saturn, Vector3::new(9.1034, -3.0016, -1.6355))
        .with_body(Body::Uranus, Vector3::new(12.3302, 14.1820, 6.0341))
        .with_body(Body::Neptune, Vector3::new(29.8011, -2.0215, -1.5669))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let location = match (args.latitude, args.longitude) {
        (Some(lat), Some(lon)) => GeoLocation::new(lat, lon)?,
        _ => FixedObserver::default().observer_location()?,
    };

    let loaded;
    let catalog = match &args.catalog {
        Some(path) => {
            loaded = SkyCatalog::from_file(path)?;
            &loaded
        }
        None => SkyCatalog::builtin(),
    };

    let now = Utc::now();

    println!("Sky Report");
    println!("==========");
    println!(
        "Observer: {:.4}° lat, {:.4}° lon",
        location.latitude_degrees, location.longitude_degrees
    );

    let lst = local_sidereal_time(location.longitude_degrees, now);
    let tilt = latitude_tilt(location.latitude_degrees);
    println!("Time (UTC): {}", now.format("%Y-%m-%d %H:%M"));
    println!("Sidereal rotation: {:.3} rad ({:.2}°)", lst, lst * RAD2DEG);
    println!("Latitude tilt: {:.3} rad ({:.2}°)", tilt, tilt * RAD2DEG);

    let constellations = build_constellations(catalog, args.radius)?;
    println!("\nConstellations (radius {}):", args.radius);
    for c in &constellations {
        println!(
            "  {:<4} {:<14} {}  {} stars, {} lines",
            c.id,
            c.name,
            c.chinese_name,
            c.stars.len(),
            c.lines.len()
        );
    }
    println!("Total stars: {}", all_stars(&constellations).count());

    println!("\nProjected solar system (fixture ephemeris):");
    let bodies = project_solar_system(&demo_ephemeris(), now);
    let mut visible = Vec::new();
    for (body, result) in bodies {
        match result {
            Ok(projected) => {
                println!(
                    "  {:<8} at ({:>8.1}, {:>8.1}, {:>8.1})  {}",
                    projected.name,
                    projected.position.x,
                    projected.position.y,
                    projected.position.z,
                    projected.description.as_deref().unwrap_or("")
                );
                visible.push(projected);
            }
            Err(err) => println!("  {:<8} FAILED: {}", body.name(), err),
        }
    }

    if let Some(query) = &args.search {
        println!("\nSearch: {:?}", query);
        match resolve(query, &constellations, &visible) {
            Some(hit) => println!(
                "  -> {} ({}) at ({:.1}, {:.1}, {:.1})",
                hit.name, hit.id, hit.position.x, hit.position.y, hit.position.z
            ),
            None => println!("  -> no match"),
        }
    }

    Ok(())
}
