// Core value types shared across the calculators.
// Measures are f64 meters; everything crossing the JS boundary derives serde.

use serde::{Deserialize, Serialize};

/// A parsed width/height pair, in meters. Immutable once parsed;
/// a failed parse produces no value, never a pair with NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionPair {
    pub width: f64,
    pub height: f64,
}

impl DimensionPair {
    pub fn new(width: f64, height: f64) -> Self {
        DimensionPair { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// One room as extracted from one line of free text. Transient: exists
/// only for the duration of a single aggregation call.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomRecord {
    pub name: String,
    pub raw_dims: String,
}

/// A rectangular land plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    pub width: f64,
    pub length: f64,
}

impl Plot {
    pub fn new(width: f64, length: f64) -> Self {
        Plot { width, length }
    }

    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.length)
    }

    /// Both sides strictly positive. Range checks live at the caller,
    /// not in the parser.
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.length > 0.0
    }
}

/// An earthwork job: a plot excavated (or filled) to an average depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Earthwork {
    pub plot: Plot,
    /// Average depth or fill height, in meters.
    pub depth: f64,
}

impl Earthwork {
    pub fn new(plot: Plot, depth: f64) -> Self {
        Earthwork { plot, depth }
    }

    pub fn volume_m3(&self) -> f64 {
        self.plot.area() * self.depth
    }
}

/// Material cost table (R$/m³). Unrecognized keys fall back to
/// `default_cost`, matching the page's cost picker behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialTable {
    #[serde(default = "default_aterro")]
    pub aterro: f64,
    #[serde(default = "default_areia")]
    pub areia: f64,
    #[serde(default = "default_brita")]
    pub brita: f64,
    #[serde(default = "default_fallback_cost")]
    pub default_cost: f64,
}

fn default_aterro() -> f64 {
    80.0
}

fn default_areia() -> f64 {
    60.0
}

fn default_brita() -> f64 {
    150.0
}

fn default_fallback_cost() -> f64 {
    80.0
}

impl Default for MaterialTable {
    fn default() -> Self {
        MaterialTable {
            aterro: default_aterro(),
            areia: default_areia(),
            brita: default_brita(),
            default_cost: default_fallback_cost(),
        }
    }
}

impl MaterialTable {
    /// Cost per m³ for a material key; unknown keys get the default cost.
    pub fn cost_for(&self, key: &str) -> f64 {
        match key.trim().to_lowercase().as_str() {
            "aterro" => self.aterro,
            "areia" => self.areia,
            "brita" => self.brita,
            _ => self.default_cost,
        }
    }
}

/// Estimator configuration passed from JS. `{}` is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstimatorConfig {
    #[serde(default)]
    pub materials: MaterialTable,
}

/// Plot report request from the page form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotRequest {
    pub width: f64,
    pub length: f64,
    /// Optional unit cost (R$/m²) to append a rough estimate.
    #[serde(default)]
    pub cost_per_m2: Option<f64>,
}

/// Earthwork report request from the page form. Missing cost fields
/// read as zero, mirroring the form's empty-field handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarthworkRequest {
    pub width: f64,
    pub length: f64,
    pub depth: f64,
    #[serde(default = "default_material")]
    pub material: String,
    #[serde(default)]
    pub labor_cost_m3: f64,
    #[serde(default)]
    pub contingency_pct: f64,
}

fn default_material() -> String {
    "aterro".to_string()
}

/// Request for the assembled full report. Absent sections render as
/// their placeholder lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullReportRequest {
    #[serde(default)]
    pub plot: Option<PlotRequest>,
    #[serde(default)]
    pub earthwork: Option<EarthworkRequest>,
    #[serde(default)]
    pub rooms_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_area_and_perimeter() {
        let plot = Plot::new(20.0, 30.0);
        assert_eq!(plot.area(), 600.0);
        assert_eq!(plot.perimeter(), 100.0);
        assert!(plot.is_valid());
        assert!(!Plot::new(0.0, 30.0).is_valid());
        assert!(!Plot::new(20.0, -1.0).is_valid());
    }

    #[test]
    fn earthwork_volume() {
        let job = Earthwork::new(Plot::new(20.0, 30.0), 0.5);
        assert_eq!(job.volume_m3(), 300.0);
    }

    #[test]
    fn material_lookup_with_fallback() {
        let table = MaterialTable::default();
        assert_eq!(table.cost_for("areia"), 60.0);
        assert_eq!(table.cost_for("BRITA"), 150.0);
        assert_eq!(table.cost_for(" aterro "), 80.0);
        assert_eq!(table.cost_for("concreto"), 80.0);
        assert_eq!(table.cost_for(""), 80.0);
    }

    #[test]
    fn config_defaults_from_empty_json() {
        let config: EstimatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.materials.areia, 60.0);
        assert_eq!(config.materials.default_cost, 80.0);
    }

    #[test]
    fn earthwork_request_defaults() {
        let req: EarthworkRequest =
            serde_json::from_str(r#"{"width":10,"length":10,"depth":0.5}"#).unwrap();
        assert_eq!(req.material, "aterro");
        assert_eq!(req.labor_cost_m3, 0.0);
        assert_eq!(req.contingency_pct, 0.0);
    }
}
