// Earthwork estimate: volume from plot area and average depth, costed
// by material and labor rates per m³ plus a contingency percentage.

use crate::format::{format_currency, format_measure};
use crate::types::Earthwork;

pub const EARTHWORK_HEADER: &str = "----- RELATÓRIO DE TERRAPLENAGEM -----";

/// Cost of moving a volume at a unit cost (R$/m³).
pub fn estimate_volume_cost(volume_m3: f64, cost_per_m3: f64) -> f64 {
    volume_m3 * cost_per_m3
}

/// Add a contingency percentage on top of a value.
pub fn apply_contingency(value: f64, pct: f64) -> f64 {
    value * (1.0 + pct / 100.0)
}

/// Cost breakdown for one earthwork job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarthworkEstimate {
    pub volume_m3: f64,
    pub material_cost: f64,
    pub labor_cost: f64,
    pub subtotal: f64,
    pub total: f64,
}

/// Compute the full cost breakdown.
pub fn estimate(
    job: &Earthwork,
    material_cost_m3: f64,
    labor_cost_m3: f64,
    contingency_pct: f64,
) -> EarthworkEstimate {
    let volume_m3 = job.volume_m3();
    let material_cost = estimate_volume_cost(volume_m3, material_cost_m3);
    let labor_cost = estimate_volume_cost(volume_m3, labor_cost_m3);
    let subtotal = material_cost + labor_cost;
    let total = apply_contingency(subtotal, contingency_pct);

    EarthworkEstimate {
        volume_m3,
        material_cost,
        labor_cost,
        subtotal,
        total,
    }
}

/// Earthwork report text: depth, volume, material line with its unit
/// cost, both cost components, subtotal, contingency, and total.
pub fn report(
    job: &Earthwork,
    material: &str,
    material_cost_m3: f64,
    labor_cost_m3: f64,
    contingency_pct: f64,
) -> String {
    let breakdown = estimate(job, material_cost_m3, labor_cost_m3, contingency_pct);

    let lines = vec![
        EARTHWORK_HEADER.to_string(),
        format!("Profundidade média: {}", format_measure(job.depth, "m")),
        format!(
            "Volume estimado: {}",
            format_measure(breakdown.volume_m3, "m³")
        ),
        format!(
            "Material: {} — {}/m³",
            material,
            format_currency(material_cost_m3)
        ),
        format!("Custo material: {}", format_currency(breakdown.material_cost)),
        format!(
            "Custo mão-de-obra (R$/m³): {}",
            format_currency(labor_cost_m3)
        ),
        format!("Custo mão-de-obra: {}", format_currency(breakdown.labor_cost)),
        format!("Subtotal: {}", format_currency(breakdown.subtotal)),
        format!("Contingência: {}%", format_measure(contingency_pct, "")),
        format!("Total estimado: {}", format_currency(breakdown.total)),
    ];

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Plot;

    #[test]
    fn contingency_is_multiplicative() {
        assert!((apply_contingency(27000.0, 10.0) - 29700.0).abs() < 1e-6);
        assert_eq!(apply_contingency(100.0, 0.0), 100.0);
        assert_eq!(apply_contingency(200.0, 50.0), 300.0);
    }

    #[test]
    fn breakdown_for_sample_job() {
        // 20x30 plot, 0.5 m average depth, areia at 60, labor at 30, 10%.
        let job = Earthwork::new(Plot::new(20.0, 30.0), 0.5);
        let breakdown = estimate(&job, 60.0, 30.0, 10.0);

        assert_eq!(breakdown.volume_m3, 300.0);
        assert_eq!(breakdown.material_cost, 18000.0);
        assert_eq!(breakdown.labor_cost, 9000.0);
        assert_eq!(breakdown.subtotal, 27000.0);
        assert!((breakdown.total - 29700.0).abs() < 1e-6);
    }

    #[test]
    fn report_for_sample_job() {
        let job = Earthwork::new(Plot::new(20.0, 30.0), 0.5);
        let text = report(&job, "areia", 60.0, 30.0, 10.0);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                EARTHWORK_HEADER,
                "Profundidade média: 0.5 m",
                "Volume estimado: 300.0 m³",
                "Material: areia — R$ 60.00/m³",
                "Custo material: R$ 18000.00",
                "Custo mão-de-obra (R$/m³): R$ 30.00",
                "Custo mão-de-obra: R$ 9000.00",
                "Subtotal: R$ 27000.00",
                "Contingência: 10.0%",
                "Total estimado: R$ 29700.00",
            ]
        );
    }

    #[test]
    fn zero_cost_inputs_stay_zero() {
        let job = Earthwork::new(Plot::new(10.0, 10.0), 1.0);
        let breakdown = estimate(&job, 0.0, 0.0, 0.0);
        assert_eq!(breakdown.subtotal, 0.0);
        assert_eq!(breakdown.total, 0.0);
    }
}
