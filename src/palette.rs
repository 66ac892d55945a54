//! Category color resolution for the consumption breakdown.
//!
//! The backend names categories after ink colors (in Portuguese); the
//! breakdown colors each line accordingly. Unknown names fall back to
//! black so new inks never break rendering.

/// Fallback color, also used for the total line.
pub const DEFAULT_COLOR: &str = "#000000";

/// Hex color for a category label.
pub fn color_hex(cor: &str) -> &'static str {
    match cor {
        "Ciano" => "#00AEEF",
        "Marrom" => "#8B4513",
        "Bege" => "#C8AD7F",
        "Preto" => "#000000",
        "Rosa" => "#E75480",
        "Azul" => "#0047AB",
        "Amarelo" => "#D4A900",
        "Brilho" => "#B5A642",
        "Reativo" => "#708090",
        _ => DEFAULT_COLOR,
    }
}

/// Visible label for a category.
///
/// The blue ink is sold under the trade name "Cobalto" and the reports
/// are expected to show it that way; every other label passes through.
pub fn display_label(cor: &str) -> &str {
    if cor == "Azul" { "Cobalto" } else { cor }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert_eq!(color_hex("Azul"), "#0047AB");
        assert_eq!(color_hex("Preto"), "#000000");
    }

    #[test]
    fn unknown_names_fall_back_to_black() {
        assert_eq!(color_hex("Magenta"), DEFAULT_COLOR);
        assert_eq!(color_hex(""), DEFAULT_COLOR);
    }

    #[test]
    fn blue_is_relabeled_cobalto() {
        assert_eq!(display_label("Azul"), "Cobalto");
        assert_eq!(display_label("Rosa"), "Rosa");
    }
}
