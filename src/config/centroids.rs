//! Postal code centroid table.
//!
//! The built-in table covers a fixed set of major US ZIP codes and is built
//! once per process. A configuration directory may add or override entries
//! through `centroids.yaml`.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Deserialize;

use crate::models::Centroid;

/// Known ZIP codes and their centroids in decimal degrees.
const BUILTIN_CENTROIDS: &[(&str, f64, f64)] = &[
    ("90001", 33.973951, -118.248405), // Los Angeles, CA
    ("90210", 34.0901, -118.4065), // Beverly Hills, CA
    ("94105", 37.7898, -122.3942), // San Francisco, CA
    ("92101", 32.7157, -117.1611), // San Diego, CA
    ("95814", 38.5816, -121.4944), // Sacramento, CA
    ("95110", 37.3382, -121.8863), // San Jose, CA
    ("10001", 40.750742, -73.99653), // New York, NY
    ("10013", 40.7182, -74.0086), // New York, NY (Tribeca)
    ("10018", 40.7505, -73.9934), // New York, NY (Times Square)
    ("11201", 40.6943, -73.9249), // Brooklyn, NY
    ("60601", 41.886258, -87.618844), // Chicago, IL
    ("60611", 41.8995, -87.6272), // Chicago, IL (Gold Coast)
    ("60614", 41.9201, -87.6538), // Chicago, IL (Lincoln Park)
    ("73301", 30.267153, -97.743057), // Austin, TX
    ("77001", 29.7604, -95.3698), // Houston, TX
    ("75201", 32.7767, -96.7970), // Dallas, TX
    ("78201", 29.4241, -98.4936), // San Antonio, TX
    ("33101", 25.7617, -80.1918), // Miami, FL
    ("32801", 28.5383, -81.3792), // Orlando, FL
    ("33601", 27.9506, -82.4572), // Tampa, FL
    ("32201", 30.3322, -81.6557), // Jacksonville, FL
    ("30301", 33.752880, -84.392708), // Atlanta, GA
    ("30309", 33.7890, -84.3847), // Atlanta, GA (Midtown)
    ("98101", 47.6062, -122.3321), // Seattle, WA
    ("98102", 47.6062, -122.3321), // Seattle, WA (Capitol Hill)
    ("02101", 42.3601, -71.0589), // Boston, MA
    ("02108", 42.3601, -71.0589), // Boston, MA (Downtown)
    ("19101", 39.9526, -75.1652), // Philadelphia, PA
    ("15201", 40.4406, -79.9959), // Pittsburgh, PA
    ("85001", 33.4484, -112.0740), // Phoenix, AZ
    ("85701", 32.2226, -110.9747), // Tucson, AZ
    ("80201", 39.7392, -104.9903), // Denver, CO
    ("80301", 40.0150, -105.2705), // Boulder, CO
    ("89101", 36.1699, -115.1398), // Las Vegas, NV
    ("89501", 39.5296, -119.8138), // Reno, NV
    ("97201", 45.5152, -122.6784), // Portland, OR
    ("84101", 40.7608, -111.8910), // Salt Lake City, UT
    ("87101", 35.0844, -106.6504), // Albuquerque, NM
    ("73101", 35.4676, -97.5164), // Oklahoma City, OK
    ("66101", 39.1142, -94.6275), // Kansas City, KS
    ("64101", 39.0997, -94.5786), // Kansas City, MO
    ("63101", 38.6270, -90.1994), // St. Louis, MO
    ("72201", 34.7465, -92.2896), // Little Rock, AR
    ("70112", 29.9511, -90.0715), // New Orleans, LA
    ("39201", 32.2988, -90.1848), // Jackson, MS
    ("35201", 33.5186, -86.8025), // Birmingham, AL
    ("37201", 36.1627, -86.7816), // Nashville, TN
    ("38101", 35.1495, -90.0490), // Memphis, TN
    ("40201", 38.2527, -85.7585), // Louisville, KY
    ("43201", 39.9612, -82.9988), // Columbus, OH
    ("44101", 41.4993, -81.6944), // Cleveland, OH
    ("45201", 39.1031, -84.5120), // Cincinnati, OH
    ("46201", 39.7684, -86.1581), // Indianapolis, IN
    ("48201", 42.3314, -83.0458), // Detroit, MI
    ("53201", 43.0389, -87.9065), // Milwaukee, WI
    ("55401", 44.9778, -93.2650), // Minneapolis, MN
    ("50301", 41.5868, -93.6250), // Des Moines, IA
    ("68101", 41.2565, -95.9345), // Omaha, NE
    ("58101", 46.8772, -96.7898), // Fargo, ND
    ("57101", 43.5446, -96.7311), // Sioux Falls, SD
    ("59101", 45.7833, -108.5007), // Billings, MT
    ("82001", 41.1390, -104.8192), // Cheyenne, WY
    ("83701", 43.6150, -116.2023), // Boise, ID
    ("99501", 61.2181, -149.9003), // Anchorage, AK
    ("96801", 21.3099, -157.8581), // Honolulu, HI
    ("05401", 44.4759, -73.2121), // Burlington, VT
    ("03101", 43.1939, -71.5724), // Manchester, NH
    ("04101", 43.6591, -70.2568), // Portland, ME
    ("02901", 41.8240, -71.4128), // Providence, RI
    ("06101", 41.7658, -72.6734), // Hartford, CT
    ("07101", 40.7178, -74.0431), // Newark, NJ
    ("19801", 39.7391, -75.5398), // Wilmington, DE
    ("21201", 39.2904, -76.6122), // Baltimore, MD
    ("25301", 38.3498, -81.6326), // Charleston, WV
    ("23219", 37.5407, -77.4360), // Richmond, VA
    ("22201", 38.8816, -77.0910), // Arlington, VA
    ("27601", 35.7796, -78.6382), // Raleigh, NC
    ("28201", 35.2271, -80.8431), // Charlotte, NC
    ("29201", 34.0007, -81.0348), // Columbia, SC
];

static BUILTIN_TABLE: LazyLock<CentroidTable> = LazyLock::new(|| {
    CentroidTable::from_entries(
        BUILTIN_CENTROIDS
            .iter()
            .map(|&(zip, lat, lon)| (zip.to_string(), Centroid::new(lat, lon))),
    )
});

/// `centroids.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct CentroidsConfig {
    /// Map of ZIP code to centroid.
    pub centroids: HashMap<String, Centroid>,
}

/// An immutable mapping from postal code to [`Centroid`].
///
/// # Example
///
/// ```
/// use shipping_quote::config::CentroidTable;
///
/// let table = CentroidTable::builtin();
/// assert!(table.get("30301").is_some());
/// assert!(table.get("99999").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CentroidTable {
    entries: HashMap<String, Centroid>,
}

impl CentroidTable {
    /// Builds a table from `(zip, centroid)` pairs. Later duplicates win.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Centroid)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The process-wide built-in table.
    pub fn builtin() -> &'static CentroidTable {
        &BUILTIN_TABLE
    }

    /// Returns a copy of this table with `overrides` added, replacing any
    /// existing entries with the same code.
    pub fn merged_with(&self, overrides: HashMap<String, Centroid>) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(overrides);
        Self { entries }
    }

    /// Looks up the centroid for a ZIP code.
    pub fn get(&self, zip: &str) -> Option<&Centroid> {
        self.entries.get(zip)
    }

    /// Returns true if the ZIP code is known.
    pub fn contains(&self, zip: &str) -> bool {
        self.entries.contains_key(zip)
    }

    /// Number of known ZIP codes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Known ZIP codes in ascending order.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}
