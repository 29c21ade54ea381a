use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Country colours
// ---------------------------------------------------------------------------

/// Stable colour per country, shared by every chart.
#[derive(Debug, Clone, Default)]
pub struct CountryColors {
    mapping: BTreeMap<usize, Color32>,
}

impl CountryColors {
    /// Spread the palette over the whole vocabulary so a country keeps its
    /// colour regardless of which others are selected.
    pub fn new(vocabulary_len: usize) -> Self {
        let mapping = generate_palette(vocabulary_len)
            .into_iter()
            .enumerate()
            .collect();
        CountryColors { mapping }
    }

    pub fn color_for(&self, country: usize) -> Color32 {
        self.mapping
            .get(&country)
            .copied()
            .unwrap_or(Color32::LIGHT_BLUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(7).len(), 7);
    }

    #[test]
    fn unknown_country_falls_back() {
        let colors = CountryColors::new(3);
        assert_eq!(colors.color_for(10), Color32::LIGHT_BLUE);
        assert_ne!(colors.color_for(0), colors.color_for(1));
    }
}
