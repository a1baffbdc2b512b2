// Full-report assembly: the three section texts under fixed headers.
// The document exporter consumes this text unchanged.

use crate::rooms::NO_ROOMS_MSG;

pub const REPORT_TITLE: &str = "Relatório - Calculadora de Engenharia";

pub const PLOT_SECTION: &str = "--- Terreno ---";
pub const EARTHWORK_SECTION: &str = "--- Terraplenagem ---";
pub const ROOMS_SECTION: &str = "--- Cômodos ---";

pub const NO_PLOT_MSG: &str = "Nenhum terreno calculado.";
pub const NO_EARTHWORK_MSG: &str = "Nenhuma terraplenagem calculada.";

/// Join the section reports under the fixed title. Absent sections get
/// their placeholder line so the assembled document always has all
/// three sections.
pub fn assemble(
    plot_text: Option<&str>,
    earthwork_text: Option<&str>,
    rooms_text: Option<&str>,
) -> String {
    let sections = [
        (PLOT_SECTION, plot_text.unwrap_or(NO_PLOT_MSG)),
        (EARTHWORK_SECTION, earthwork_text.unwrap_or(NO_EARTHWORK_MSG)),
        (ROOMS_SECTION, rooms_text.unwrap_or(NO_ROOMS_MSG)),
    ];

    let mut out = vec![REPORT_TITLE.to_string()];
    for (header, body) in sections {
        out.push(String::new());
        out.push(header.to_string());
        out.push(body.to_string());
    }
    out.join("\n")
}
