//! Pure construction of the rendered output.
//!
//! Builds display lines from a response; the DOM layer only appends
//! them. Keeping this free of `web_sys` lets the formatting rules run
//! under native tests.

use crate::constants::RESULT_DECIMALS;
use crate::palette;
use crate::protocol::ConsumptionReport;

/// One line of the output region.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultLine {
    /// Visible text
    pub text: String,
    /// CSS color for the line
    pub color_hex: &'static str,
    /// Rendered bold (the total line)
    pub bold: bool,
}

/// Per-color lines in response order, then the bolded total.
pub fn result_lines(report: &ConsumptionReport) -> Vec<ResultLine> {
    let mut lines = Vec::with_capacity(report.per_color.len() + 1);
    for item in &report.per_color {
        lines.push(ResultLine {
            text: format!(
                "{}: {:.prec$} g",
                palette::display_label(&item.color),
                item.mass_g,
                prec = RESULT_DECIMALS,
            ),
            color_hex: palette::color_hex(&item.color),
            bold: false,
        });
    }
    lines.push(ResultLine {
        text: format!("Consumo total: {:.prec$} g", report.total_g, prec = RESULT_DECIMALS),
        color_hex: palette::DEFAULT_COLOR,
        bold: true,
    });
    lines
}

/// Text for the file-count label under the drop zone.
pub fn file_count_label(count: usize) -> String {
    match count {
        0 => "Nenhum arquivo selecionado".to_string(),
        1 => "1 arquivo selecionado".to_string(),
        n => format!("{n} arquivos selecionados"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ConsumptionItem;

    fn report(items: &[(&str, f64)], total: f64) -> ConsumptionReport {
        ConsumptionReport {
            per_color: items
                .iter()
                .map(|(color, mass)| ConsumptionItem {
                    color: (*color).to_string(),
                    mass_g: *mass,
                })
                .collect(),
            total_g: total,
        }
    }

    #[test]
    fn lines_follow_response_order_and_end_with_total() {
        let lines = result_lines(&report(&[("Preto", 2.0), ("Ciano", 1.5)], 3.5));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "Preto: 2.000 g");
        assert_eq!(lines[1].text, "Ciano: 1.500 g");
        assert_eq!(lines[2].text, "Consumo total: 3.500 g");
        assert!(lines[2].bold);
        assert!(!lines[0].bold);
    }

    #[test]
    fn blue_renders_as_cobalto_with_its_hex() {
        let lines = result_lines(&report(&[("Azul", 1.2345)], 1.2345));
        assert_eq!(lines[0].text, format!("Cobalto: {:.3} g", 1.2345));
        assert_eq!(lines[0].color_hex, "#0047AB");
    }

    #[test]
    fn unknown_categories_render_black() {
        let lines = result_lines(&report(&[("Magenta", 0.25)], 0.25));
        assert_eq!(lines[0].text, "Magenta: 0.250 g");
        assert_eq!(lines[0].color_hex, palette::DEFAULT_COLOR);
    }

    #[test]
    fn count_label_is_pluralized() {
        assert_eq!(file_count_label(0), "Nenhum arquivo selecionado");
        assert_eq!(file_count_label(1), "1 arquivo selecionado");
        assert_eq!(file_count_label(4), "4 arquivos selecionados");
    }
}
