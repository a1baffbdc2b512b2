// estimator_core: Adrine Planner Rust/WASM Core
// Every calculation and formatted string comes from here; the page
// script only wires inputs and writes the returned text back verbatim.

mod chapters;
mod dims;
mod earthwork;
mod error;
mod format;
mod plot;
mod report;
mod rooms;
mod types;

use wasm_bindgen::prelude::*;

pub use chapters::{ChapterCycle, WasmChapterCycle};
pub use dims::parse_dimensions;
pub use error::EstimatorError;
pub use format::{format_currency, format_measure};
pub use rooms::{aggregate as aggregate_rooms, preset_names, preset_plan_text, RoomReport, RoomsOutcome};
pub use types::*;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Main estimator interface exposed to JavaScript.
/// Requests come in as JSON or raw text; display text goes out as-is.
#[wasm_bindgen]
pub struct Estimator {
    config: EstimatorConfig,
}

#[wasm_bindgen]
impl Estimator {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<Estimator, JsValue> {
        let config: EstimatorConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;

        Ok(Estimator { config })
    }

    /// Parse a standalone dimension string for the width/height fields.
    /// Returns JSON `{ "width": w, "height": h }` or an error indicator.
    pub fn parse_dimensions(&self, input: &str) -> Result<String, JsValue> {
        let pair = dims::parse_dimensions(input)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_json::to_string(&pair)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Land plot report for the terrain form. Non-positive dimensions
    /// return the page's guidance message instead of a report.
    pub fn plot_report(&self, request_json: &str) -> Result<String, JsValue> {
        let request: PlotRequest = serde_json::from_str(request_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid request: {}", e)))?;

        Ok(self.plot_report_text(&request))
    }

    /// Earthwork report for the excavation/fill form. Guard messages
    /// mirror the page: plot first, then a positive depth.
    pub fn earthwork_report(&self, request_json: &str) -> Result<String, JsValue> {
        let request: EarthworkRequest = serde_json::from_str(request_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid request: {}", e)))?;

        Ok(self.earthwork_report_text(&request))
    }

    /// Room report from the textarea's raw multi-line text. Always
    /// returns display text; empty input yields the no-input indicator.
    pub fn rooms_report(&self, raw_text: &str) -> String {
        rooms::aggregate(raw_text).render()
    }

    /// Assembled three-section report for the document exporter.
    pub fn full_report(&self, request_json: &str) -> Result<String, JsValue> {
        let request: FullReportRequest = serde_json::from_str(request_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid request: {}", e)))?;

        let plot_text = request.plot.as_ref().map(|r| self.plot_report_text(r));
        let earthwork_text = request
            .earthwork
            .as_ref()
            .map(|r| self.earthwork_report_text(r));
        let rooms_text = request
            .rooms_text
            .as_deref()
            .map(|raw| rooms::aggregate(raw).render());

        Ok(report::assemble(
            plot_text.as_deref(),
            earthwork_text.as_deref(),
            rooms_text.as_deref(),
        ))
    }

    /// Input text for a bundled floor plan, one "name WxH" line per
    /// room, ready for the rooms textarea. Unknown keys yield nothing.
    pub fn preset_plan_text(&self, key: &str) -> Option<String> {
        rooms::preset_plan_text(key)
    }

    /// JSON array with the bundled floor plan names.
    pub fn preset_names(&self) -> Result<String, JsValue> {
        serde_json::to_string(&rooms::preset_names())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

impl Estimator {
    fn plot_report_text(&self, request: &PlotRequest) -> String {
        let plot = Plot::new(request.width, request.length);
        if !plot.is_valid() {
            return "Informe largura e comprimento maiores que zero.".to_string();
        }
        plot::report(&plot, request.cost_per_m2)
    }

    fn earthwork_report_text(&self, request: &EarthworkRequest) -> String {
        let plot = Plot::new(request.width, request.length);
        if !plot.is_valid() {
            return "Informe primeiro as dimensões do terreno.".to_string();
        }
        if request.depth <= 0.0 {
            return "Profundidade/altura deve ser maior que zero.".to_string();
        }

        let job = Earthwork::new(plot, request.depth);
        let material_cost = self.config.materials.cost_for(&request.material);
        earthwork::report(
            &job,
            &request.material,
            material_cost,
            request.labor_cost_m3,
            request.contingency_pct,
        )
    }
}
