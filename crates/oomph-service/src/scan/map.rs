use oomph_core::constants::SINGLE_LOCATION_ZOOM;
use oomph_mf::mf::Coordinate;
use serde::Serialize;

/// How the map should frame the coordinates of a scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MapView {
    /// A single location, centered at a fixed zoom.
    Center { coordinate: Coordinate, zoom: u8 },
    /// The bounding box of several locations.
    Bounds {
        south: f64,
        west: f64,
        north: f64,
        east: f64,
    },
}

impl MapView {
    /// `None` when there is nothing to show.
    #[must_use]
    pub fn for_coordinates(coordinates: &[Coordinate]) -> Option<Self> {
        match coordinates {
            [] => None,
            [only] => Some(Self::Center {
                coordinate: only.clone(),
                zoom: SINGLE_LOCATION_ZOOM,
            }),
            [first, rest @ ..] => {
                let start = (
                    first.latitude,
                    first.longitude,
                    first.latitude,
                    first.longitude,
                );
                let (south, west, north, east) =
                    rest.iter().fold(start, |(s, w, n, e), c| {
                        (
                            s.min(c.latitude),
                            w.min(c.longitude),
                            n.max(c.latitude),
                            e.max(c.longitude),
                        )
                    });
                Some(Self::Bounds {
                    south,
                    west,
                    north,
                    east,
                })
            }
        }
    }
}
