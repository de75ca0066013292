//! Weather symbol codes (`Wsymb2`) and how to show them in a terminal.

/// Display meaning of a `Wsymb2` code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeatherSymbol {
    pub value: i32,
    pub meaning: &'static str,
    pub glyph: &'static str,
    /// Terminal columns the glyph occupies, 1 or 2.
    pub display_width: u8,
}

const fn symbol(
    value: i32,
    meaning: &'static str,
    glyph: &'static str,
    display_width: u8,
) -> WeatherSymbol {
    WeatherSymbol { value, meaning, glyph, display_width }
}

/// Symbol table indexed by code. Index 0 is a placeholder and is never
/// returned by [`weather_symbol`].
pub const WEATHER_SYMBOLS: [WeatherSymbol; 28] = [
    symbol(0, "No weather", "?", 1),
    symbol(1, "Clear sky", "\u{2600}", 1),
    symbol(2, "Nearly clear sky", "\u{26c5}", 2),
    symbol(3, "Variable cloudiness", "\u{26c5}", 2),
    symbol(4, "Halfclear sky", "\u{26c5}", 2),
    symbol(5, "Cloudy sky", "\u{2601}", 1),
    symbol(6, "Overcast", "\u{2601}", 1),
    symbol(7, "Fog", "\u{1f32b}", 1),
    symbol(8, "Light rain showers", "\u{1f326}", 1),
    symbol(9, "Moderate rain showers", "\u{1f326}", 1),
    symbol(10, "Heavy rain showers", "\u{1f327}", 1),
    symbol(11, "Thunderstorm", "\u{26a1}", 2),
    symbol(12, "Light sleet showers", "\u{1f328}", 1),
    symbol(13, "Moderate sleet showers", "\u{1f328}", 1),
    symbol(14, "Heavy sleet showers", "\u{1f328}", 1),
    symbol(15, "Light snow showers", "\u{1f328}", 1),
    symbol(16, "Moderate snow showers", "\u{1f328}", 1),
    symbol(17, "Heavy snow showers", "\u{1f328}", 1),
    symbol(18, "Light rain", "\u{1f327}", 1),
    symbol(19, "Moderate rain", "\u{1f327}", 1),
    symbol(20, "Heavy rain", "\u{1f327}", 1),
    symbol(21, "Thunder", "\u{26a1}", 2),
    symbol(22, "Light sleet", "\u{1f328}", 1),
    symbol(23, "Moderate sleet", "\u{1f328}", 1),
    symbol(24, "Heavy sleet", "\u{1f328}", 1),
    symbol(25, "Light snowfall", "\u{1f328}", 1),
    symbol(26, "Moderate snowfall", "\u{1f328}", 1),
    symbol(27, "Heavy snowfall", "\u{1f328}", 1),
];

/// Look up a weather symbol code.
///
/// Codes outside `1..WEATHER_SYMBOLS.len()` yield the zero value
/// `WeatherSymbol::default()`.
pub fn weather_symbol(code: i64) -> WeatherSymbol {
    usize::try_from(code)
        .ok()
        .filter(|&idx| idx >= 1)
        .and_then(|idx| WEATHER_SYMBOLS.get(idx))
        .copied()
        .unwrap_or_default()
}

impl WeatherSymbol {
    /// Glyph padded to two terminal columns.
    ///
    /// Narrow glyphs get a trailing space, wide ones a zero width space, so
    /// every symbol is two chars long and two columns wide.
    pub fn fixed_width(&self) -> String {
        if self.display_width == 1 {
            format!("{} ", self.glyph)
        } else {
            format!("{}\u{200b}", self.glyph)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_value() {
        for (idx, s) in WEATHER_SYMBOLS.iter().enumerate() {
            assert_eq!(s.value as usize, idx);
            assert!(s.display_width == 1 || s.display_width == 2);
        }
    }

    #[test]
    fn in_range_codes_return_table_entry() {
        for code in 1..=27 {
            assert_eq!(weather_symbol(code), WEATHER_SYMBOLS[code as usize]);
        }
    }

    #[test]
    fn out_of_range_codes_return_zero_value() {
        for code in [0, -1, -27, 28, 100, i64::MIN, i64::MAX] {
            let s = weather_symbol(code);
            assert_eq!(s, WeatherSymbol::default());
            assert_eq!(s.value, 0);
            assert_eq!(s.meaning, "");
            assert_eq!(s.glyph, "");
            assert_eq!(s.display_width, 0);
        }
    }

    #[test]
    fn fixed_width_pads_every_entry() {
        for s in &WEATHER_SYMBOLS {
            let padded = s.fixed_width();
            match s.display_width {
                1 => assert_eq!(padded, format!("{} ", s.glyph)),
                _ => assert_eq!(padded, format!("{}\u{200b}", s.glyph)),
            }
            assert_eq!(padded.chars().count(), s.glyph.chars().count() + 1);
        }
    }

    #[test]
    fn moderate_rain() {
        let s = weather_symbol(19);
        assert_eq!(s.meaning, "Moderate rain");
        assert_eq!(s.fixed_width(), "🌧 ");
    }

    #[test]
    fn thunder_is_wide() {
        assert_eq!(weather_symbol(21).fixed_width(), "\u{26a1}\u{200b}");
    }
}
