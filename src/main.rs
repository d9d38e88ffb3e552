//! Resplan - Entry Point
//!
//! Hälsokontroll för lagret: räknar poster per collection och
//! verifierar att albumens aggregatfält stämmer med sina
//! mediapartitioner, med reparation vid avvikelse.

#![allow(dead_code)]

mod db;
mod models;
mod services;
mod store;
mod utils;

use anyhow::Result;

use db::Database;
use models::StoredRecord;

fn main() -> Result<()> {
    // Initiera logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    tracing::info!("Startar Resplan doctor v{}", env!("CARGO_PKG_VERSION"));

    let store_dir = utils::path::get_store_dir();
    tracing::info!("Lager: {}", store_dir.display());

    let db = Database::open(&store_dir)?;

    println!("Resor:          {}", db.trips().find_all()?.len());
    println!("Resdagar:       {}", db.itinerary().find_all()?.len());
    println!("Boenden:        {}", db.accommodations().find_all()?.len());
    println!("Transporter:    {}", db.transportations().find_all()?.len());
    println!("Måltider:       {}", db.meals().find_all()?.len());
    println!("Medresenärer:   {}", db.companions().find_all()?.len());
    println!("Dokument:       {}", db.documents().find_all()?.len());
    println!("Visum:          {}", db.visas().find_all()?.len());

    let albums = db.albums().find_all()?;
    println!("Album:          {}", albums.len());

    let mut repaired = 0usize;
    for album in &albums {
        let Some(id) = album.id() else { continue };
        let media = db.albums().find_media(id)?;

        let count_ok = album.item_count as usize == media.len();
        let cover_ok = album.cover_url == models::DEFAULT_COVER
            || media.iter().any(|m| m.url == album.cover_url);

        if !count_ok || !cover_ok {
            tracing::warn!(album = %id, "Aggregatavvikelse, räknar om");
            db.albums().refresh_aggregates(id)?;
            repaired += 1;
        }
    }

    if repaired > 0 {
        println!("Reparerade aggregat i {} album", repaired);
    } else {
        println!("Alla albumaggregat stämmer");
    }

    Ok(())
}
