//! Shell colours for the doodle.

/// Colour strategy picked from the page's contrast and background flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    /// Mid-tone RGB families on a light page.
    Normal,
    /// Lightened families for a dark page.
    Dark,
    WhiteOnBlack,
    BlackOnWhite,
}

impl ColorScheme {
    pub fn from_flags(high_contrast: bool, dark_background: bool) -> Self {
        match (high_contrast, dark_background) {
            (true, true) => ColorScheme::WhiteOnBlack,
            (true, false) => ColorScheme::BlackOnWhite,
            (false, true) => ColorScheme::Dark,
            (false, false) => ColorScheme::Normal,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark | ColorScheme::WhiteOnBlack)
    }

    /// Fore and back colour of one shell, both from the same family.
    pub fn sample_pair(&self, rng: &mut fastrand::Rng) -> (String, String) {
        match self {
            ColorScheme::WhiteOnBlack => ("white".into(), "white".into()),
            ColorScheme::BlackOnWhite => ("black".into(), "black".into()),
            ColorScheme::Normal | ColorScheme::Dark => {
                let family = Family::random(rng);
                let dark = *self == ColorScheme::Dark;
                (family.sample(dark, rng), family.sample(dark, rng))
            }
        }
    }
}

/// Which RGB channels are boosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Red,
    Blue,
    Green,
    GreenBlue,
    RedBlue,
    RedGreen,
}

impl Family {
    fn random(rng: &mut fastrand::Rng) -> Self {
        match rng.usize(0..6) {
            0 => Family::Red,
            1 => Family::Blue,
            2 => Family::Green,
            3 => Family::GreenBlue,
            4 => Family::RedBlue,
            _ => Family::RedGreen,
        }
    }

    /// Boosted flags for (r, g, b).
    fn strong(&self) -> [bool; 3] {
        match self {
            Family::Red => [true, false, false],
            Family::Blue => [false, false, true],
            Family::Green => [false, true, false],
            Family::GreenBlue => [false, true, true],
            Family::RedBlue => [true, false, true],
            Family::RedGreen => [true, true, false],
        }
    }

    /// `rgb(r,g,b)` with strong channels in 150..=205 (200..=255 dark) and
    /// weak ones in 50..=150 (100..=200 dark).
    pub fn sample(&self, dark: bool, rng: &mut fastrand::Rng) -> String {
        let (strong_base, weak_base) = if dark { (200.0, 100.0) } else { (150.0, 50.0) };
        let [r, g, b] = self.strong().map(|strong| {
            if strong {
                strong_base + (rng.f64() * 55.0).round()
            } else {
                weak_base + (rng.f64() * 100.0).round()
            }
        });
        format!("rgb({r},{g},{b})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels(rgb: &str) -> [u32; 3] {
        let inner = rgb.trim_start_matches("rgb(").trim_end_matches(')');
        let parts: Vec<u32> = inner.split(',').map(|p| p.parse().unwrap()).collect();
        [parts[0], parts[1], parts[2]]
    }

    #[test]
    fn test_scheme_from_flags() {
        assert_eq!(ColorScheme::from_flags(true, true), ColorScheme::WhiteOnBlack);
        assert_eq!(ColorScheme::from_flags(true, false), ColorScheme::BlackOnWhite);
        assert_eq!(ColorScheme::from_flags(false, true), ColorScheme::Dark);
        assert_eq!(ColorScheme::from_flags(false, false), ColorScheme::Normal);
    }

    #[test]
    fn test_high_contrast_is_fixed() {
        let mut rng = fastrand::Rng::with_seed(1);
        assert_eq!(
            ColorScheme::WhiteOnBlack.sample_pair(&mut rng),
            ("white".to_string(), "white".to_string())
        );
        assert_eq!(ColorScheme::BlackOnWhite.sample_pair(&mut rng).0, "black");
    }

    #[test]
    fn test_family_channel_ranges() {
        let mut rng = fastrand::Rng::with_seed(2);
        for _ in 0..200 {
            let [r, g, b] = channels(&Family::Red.sample(false, &mut rng));
            assert!((150..=205).contains(&r));
            assert!((50..=150).contains(&g));
            assert!((50..=150).contains(&b));

            let [r, g, b] = channels(&Family::GreenBlue.sample(true, &mut rng));
            assert!((100..=200).contains(&r));
            assert!((200..=255).contains(&g));
            assert!((200..=255).contains(&b));
        }
    }
}
