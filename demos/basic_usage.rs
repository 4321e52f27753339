// ============================================================================
// Basic Usage Example
// ============================================================================

use geowindow::numeric::DecimalLiteral;
use geowindow::prelude::*;
use std::sync::Arc;

fn quake(lon: &str, lat: &str, magnitude: &str) -> Result<PointDocument, Box<dyn std::error::Error>> {
    Ok(PointDocument::new()
        .with_field("lon", DecimalLiteral::parse(lon)?)
        .with_field("lat", DecimalLiteral::parse(lat)?)
        .with_field("magnitude", DecimalLiteral::parse(magnitude)?))
}

fn print_points(title: &str, points: &[ProjectedPoint]) {
    println!("\n{}:", title);
    for point in points {
        match &point.attributes {
            PointAttributes::Quake {
                magnitude: Some(magnitude),
            } => println!("  lon {:>12}  lat {:>8}  M{}", point.lon, point.lat, magnitude),
            _ => println!("  lon {:>12}  lat {:>8}", point.lon, point.lat),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Geowindow Example ===\n");

    // Canonical normalization keeps every fractional digit
    for text in ["200.12", "539.07", "-189.6544", "180", "-180"] {
        let lon = DecimalLiteral::parse(text)?;
        println!("normalize({:>9}) = {}", text, normalize(&lon)?);
    }

    // Seed an in-memory catalogue around the Pacific
    let store = Arc::new(InMemoryPointStore::with_documents([
        quake("172.118", "-43.53", "7.1")?,
        quake("-178.0001", "-17.8", "6.4")?,
        quake("179.9999", "51.2", "5.0")?,
        quake("-155.28", "19.41", "4.4")?,
    ]));
    println!("\nLoaded {} documents into the {} store", store.len(), store.name());

    let service = CoordinateServiceBuilder::earthquake_catalogue()
        .build(store, Arc::new(LoggingObserver))?;

    // A window running east from 170°E across the antimeridian to 160°W
    let request = LookupRequest::new(("170", "200"), ("-60", "60"));
    let window = request.window()?;
    let query_plan = plan(&window.lon, &window.lat)?;

    println!("\n=== Query Plan for lon {} ===", window.lon);
    for query in query_plan.queries() {
        println!("  {}", query);
    }

    let response = service.lookup(&request)?;

    print_points("Coordinates (caller's window)", &response.coordinates);
    print_points("Normalized coordinates", &response.normalized_coordinates);
    print_points("All coordinates (±360 replicas)", &response.all_coordinates);

    // A window that cannot be parsed is rejected before storage is touched
    let bad = LookupRequest::new(("170", "1e3"), ("-60", "60"));
    match service.lookup(&bad) {
        Ok(_) => println!("\nunexpected success"),
        Err(err) => println!("\nRejected: {} (status {})", err, err.status_code()),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
