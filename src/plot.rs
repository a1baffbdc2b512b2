// Land plot report: dimensions, area, perimeter, optional unit-cost estimate.

use crate::format::{format_currency, format_measure};
use crate::types::Plot;

pub const PLOT_HEADER: &str = "----- RELATÓRIO DO TERRENO -----";

/// Cost of covering the area at a unit cost (R$/m²).
pub fn estimate_area_cost(area_m2: f64, cost_per_m2: f64) -> f64 {
    area_m2 * cost_per_m2
}

/// Plot report text. When a unit cost is given, a rough estimate
/// without contingency is appended.
pub fn report(plot: &Plot, cost_per_m2: Option<f64>) -> String {
    let area = plot.area();
    let mut lines = vec![
        PLOT_HEADER.to_string(),
        format!("Largura: {}", format_measure(plot.width, "m")),
        format!("Comprimento: {}", format_measure(plot.length, "m")),
        format!("Área: {}", format_measure(area, "m²")),
        format!("Perímetro: {}", format_measure(plot.perimeter(), "m")),
    ];

    if let Some(cost) = cost_per_m2 {
        lines.push(format!("Custo unitário (m²): {}", format_currency(cost)));
        lines.push(format!(
            "Estimativa (sem contingência): {}",
            format_currency(estimate_area_cost(area, cost))
        ));
    }

    lines.join("\n")
}
