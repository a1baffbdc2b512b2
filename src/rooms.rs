// Room-list aggregation: one room per line, "name dims" (ex: "quarto 3x4").
// Malformed or non-positive lines are skipped silently; the report never aborts.

use crate::dims::parse_dimensions;
use crate::format::format_measure;
use crate::types::RoomRecord;

/// Header line prepended to every room report.
pub const ROOMS_HEADER: &str = "----- RELATÓRIO DE CÔMODOS -----";

/// Indicator shown when the caller supplied no usable text at all.
pub const NO_ROOMS_MSG: &str = "Nenhum cômodo informado.";

/// Outcome of one aggregation call. Empty input is a distinct terminal
/// state, not a zero-line report.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomsOutcome {
    NoInput,
    Report(RoomReport),
}

impl RoomsOutcome {
    /// Display text for the page: the report, or the no-input indicator.
    pub fn render(&self) -> String {
        match self {
            RoomsOutcome::NoInput => NO_ROOMS_MSG.to_string(),
            RoomsOutcome::Report(report) => report.render(),
        }
    }
}

/// An aggregated room report: formatted data lines plus the total area
/// (m²) of exactly the lines that made it in. Built fresh per call.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomReport {
    lines: Vec<String>,
    total_area: f64,
}

impl RoomReport {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn total_area(&self) -> f64 {
        self.total_area
    }

    /// Full report text: header, data lines, total footer.
    pub fn render(&self) -> String {
        let mut out = Vec::with_capacity(self.lines.len() + 2);
        out.push(ROOMS_HEADER.to_string());
        out.extend(self.lines.iter().cloned());
        out.push(format!("Área total: {}", format_measure(self.total_area, "m²")));
        out.join("\n")
    }
}

/// Aggregate raw multi-line room text into a report.
///
/// Per line: the first whitespace token is the room name, the remainder
/// is the dimension string. Lines that are blank, have no dimension
/// text, fail to parse, or carry a non-positive dimension contribute
/// nothing.
pub fn aggregate(raw: &str) -> RoomsOutcome {
    if raw.trim().is_empty() {
        return RoomsOutcome::NoInput;
    }

    let mut lines = Vec::new();
    let mut total_area = 0.0;

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split_whitespace();
        let name = match parts.next() {
            Some(name) => name,
            None => continue,
        };
        let dims: Vec<&str> = parts.collect();
        if dims.is_empty() {
            continue;
        }

        let record = RoomRecord {
            name: name.to_string(),
            raw_dims: dims.join(" "),
        };

        let pair = match parse_dimensions(&record.raw_dims) {
            Ok(pair) => pair,
            Err(_) => continue,
        };
        if pair.width <= 0.0 || pair.height <= 0.0 {
            continue;
        }

        let area = pair.area();
        lines.push(format!(
            "{}: {} x {} -> Área: {}",
            record.name,
            format_measure(pair.width, "m"),
            format_measure(pair.height, "m"),
            format_measure(area, "m²")
        ));
        total_area += area;
    }

    RoomsOutcome::Report(RoomReport { lines, total_area })
}

/// Bundled floor plans: (preset key, rooms as (name, width, length)).
pub const PRESET_PLANS: &[(&str, &[(&str, f64, f64)])] = &[
    (
        "casa_pequena",
        &[
            ("quarto", 3.0, 3.0),
            ("sala", 4.0, 3.0),
            ("cozinha", 3.0, 2.5),
            ("banheiro", 2.0, 1.5),
        ],
    ),
    (
        "planta_exemplo",
        &[
            ("quarto1", 3.5, 3.0),
            ("quarto2", 3.0, 2.8),
            ("sala", 4.0, 4.0),
            ("cozinha", 3.0, 3.0),
            ("banheiro", 2.0, 1.8),
        ],
    ),
];

/// Names of the bundled floor plans, in declaration order.
pub fn preset_names() -> Vec<&'static str> {
    PRESET_PLANS.iter().map(|(name, _)| *name).collect()
}

/// Render a preset plan as aggregator input text, one "name WxH" line
/// per room, exactly as the page puts it into the textarea.
pub fn preset_plan_text(key: &str) -> Option<String> {
    PRESET_PLANS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, rooms)| {
            rooms
                .iter()
                .map(|(name, w, h)| format!("{} {}x{}", name, w, h))
                .collect::<Vec<_>>()
                .join("\n")
        })
}
