// templates/components/listing_map.rs
use crate::domain::Listing;
use crate::settings::MapSettings;
use maud::{html, Markup, PreEscaped};
use serde::Serialize;

const MAP_SCRIPT: &str = r#"
(function () {
  const data = JSON.parse(document.getElementById('map-data').textContent);
  const map = L.map('map').setView([data.center_lat, data.center_lon], data.zoom);
  L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
    attribution: '&copy; OpenStreetMap contributors'
  }).addTo(map);
  for (const m of data.markers) {
    L.marker([m.lat, m.lon]).addTo(map).bindPopup(m.popup);
  }
})();
"#;

#[derive(Debug, Serialize, PartialEq)]
pub struct MapMarker {
    pub lat: f64,
    pub lon: f64,
    /// Pre-rendered (escaped) popup HTML.
    pub popup: String,
}

/// Everything the client-side map needs.
#[derive(Debug, Serialize, PartialEq)]
pub struct MapView {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

/// Centres on the mean coordinate of `rows`. Rows without coordinates are
/// skipped; with nothing to plot the configured default centre is used.
pub fn map_view(rows: &[Listing], settings: &MapSettings) -> MapView {
    let markers: Vec<MapMarker> = rows
        .iter()
        .filter_map(|listing| {
            let (lat, lon) = listing.coordinates()?;
            Some(MapMarker {
                lat,
                lon,
                popup: popup(listing).into_string(),
            })
        })
        .collect();

    let (center_lat, center_lon) = if markers.is_empty() {
        (settings.center_lat, settings.center_lon)
    } else {
        let n = markers.len() as f64;
        (
            markers.iter().map(|m| m.lat).sum::<f64>() / n,
            markers.iter().map(|m| m.lon).sum::<f64>() / n,
        )
    };

    MapView {
        center_lat,
        center_lon,
        zoom: settings.zoom,
        markers,
    }
}

fn popup(listing: &Listing) -> Markup {
    html! {
        strong { (listing.name.as_deref().unwrap_or("")) }
        br;
        (listing.address.as_deref().unwrap_or(""))
        br;
        "Rent: " (listing.rent) "万円"
        br;
        "Floor plan: " (listing.floor_plan.as_deref().unwrap_or(""))
        @if let Some(url) = listing.detail_link() {
            br;
            a href=(url) target="_blank" rel="noopener" { "Details" }
        }
    }
}

/// Embeds the view as JSON inside a `<script>` element; `</` is escaped so
/// popup markup cannot close the element early.
fn view_json(view: &MapView) -> String {
    serde_json::to_string(view)
        .unwrap_or_else(|e| {
            log::error!("Map data serialization failed: {e}");
            "null".to_string()
        })
        .replace("</", "<\\/")
}

pub fn listing_map(rows: &[Listing], settings: &MapSettings) -> Markup {
    let view = map_view(rows, settings);

    html! {
        section class="card" {
            h3 { "Map" }
            @if view.markers.is_empty() {
                p class="muted" { "No listings with coordinates to show on the map." }
            }
            div id="map" {}
            script type="application/json" id="map-data" { (PreEscaped(view_json(&view))) }
            script { (PreEscaped(MAP_SCRIPT)) }
        }
    }
}
