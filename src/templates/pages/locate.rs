use maud::{html, Markup, PreEscaped};
use tracing::warn;

use crate::domain::map::MapView;
use crate::errors::ServerError;
use crate::templates::components::view_error;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const CLUSTER_CSS: &str = "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css";
const CLUSTER_BASE_CSS: &str = "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.css";
const CLUSTER_JS: &str = "https://unpkg.com/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js";
const ANT_PATH_JS: &str = "https://unpkg.com/leaflet-ant-path@1.3.0/dist/leaflet-ant-path.js";

const MAP_INIT_JS: &str = r#"
(function () {
  var data = JSON.parse(document.getElementById('map-data').textContent);
  var map = L.map('map').setView(data.center, data.zoom);
  L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
    attribution: '&copy; OpenStreetMap contributors'
  }).addTo(map);
  var cluster = L.markerClusterGroup();
  data.markers.forEach(function (m) {
    cluster.addLayer(L.marker([m.lat, m.lon]).bindPopup(m.popup, { maxWidth: 400 }));
  });
  map.addLayer(cluster);
  if (data.path.length > 1) {
    L.polyline.antPath(data.path, { delay: 100, color: 'violet', weight: 1.8, pulseColor: 'white' }).addTo(map);
  }
  var tab = document.getElementById('tab-locate');
  if (tab) tab.addEventListener('change', function () { map.invalidateSize(); });
})();
"#;

pub struct LocateVm<'a> {
    pub map: &'a Result<MapView, ServerError>,
    pub locations: &'a [&'a str],
    pub host_locations: &'a [&'a str],
}

/// A map failure replaces the whole panel with the error; nothing else in
/// the panel renders.
pub fn locate_panel(vm: &LocateVm) -> Markup {
    let json = match vm.map {
        Ok(view) => map_json(view),
        Err(e) => return panel(view_error("Map", e)),
    };
    let json = match json {
        Ok(json) => json,
        Err(e) => return panel(view_error("Map", &e)),
    };

    panel(html! {
        (map_block(&json))

        details {
            summary { "Our Locations" }
            ul class="plain" {
                @for c in vm.locations {
                    li { "🔸 " (c) }
                }
            }
        }

        details {
            summary { "Our Hosts From" }
            ul class="plain" {
                @for h in vm.host_locations {
                    li { "☀︎ " (h) }
                }
            }
        }
    })
}

fn panel(body: Markup) -> Markup {
    html! {
        section class="panel-body" { (body) }
    }
}

fn map_block(json: &str) -> Markup {
    html! {
        link rel="stylesheet" href=(LEAFLET_CSS);
        link rel="stylesheet" href=(CLUSTER_BASE_CSS);
        link rel="stylesheet" href=(CLUSTER_CSS);
        h2 { "Listings Map" }
        div id="map" class="map" {}
        script type="application/json" id="map-data" { (PreEscaped(json)) }
        script src=(LEAFLET_JS) {}
        script src=(CLUSTER_JS) {}
        script src=(ANT_PATH_JS) {}
        script { (PreEscaped(MAP_INIT_JS)) }
    }
}

/// JSON safe to inline in a `<script>` element.
pub fn map_json(view: &MapView) -> Result<String, ServerError> {
    let json = serde_json::to_string(view).map_err(|e| {
        warn!(error = %e, "map view did not serialize");
        ServerError::InternalError
    })?;
    Ok(json.replace("</", "<\\/"))
}
