use gs_core::charset::GlyphPalette;
use gs_core::config::{Gamma, GenerateConfig};
use gs_core::error::CoreError;
use gs_core::frame::{AsciiResult, PixelGrid};

use crate::luminance::{gamma_correct, luminance, palette_index};

/// Maps pixels to glyphs for a fixed palette and gamma.
///
/// Validation happens when the palette and gamma are built, so the
/// per-pixel path has no failure cases.
///
/// # Example
/// ```
/// use gs_ascii::GlyphMapper;
/// use gs_core::charset::GlyphPalette;
/// use gs_core::config::Gamma;
///
/// let mapper = GlyphMapper::new(GlyphPalette::new(" .:#@").unwrap(), Gamma::IDENTITY);
/// assert_eq!(mapper.map_pixel(0, 0, 0), ' ');
/// assert_eq!(mapper.map_pixel(255, 255, 255), '@');
/// ```
#[derive(Clone, Debug)]
pub struct GlyphMapper {
    palette: GlyphPalette,
    /// `1 / gamma`; `None` when gamma is 1.
    exponent: Option<f32>,
}

impl GlyphMapper {
    /// Create a mapper.
    #[must_use]
    pub fn new(palette: GlyphPalette, gamma: Gamma) -> Self {
        let exponent = (!gamma.is_identity()).then(|| gamma.value().recip());
        Self { palette, exponent }
    }

    /// Build a mapper from a plain config, validating palette and gamma.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyPalette`] or [`CoreError::InvalidGamma`].
    pub fn from_config(config: &GenerateConfig) -> Result<Self, CoreError> {
        Ok(Self::new(config.glyph_palette()?, config.gamma_factor()?))
    }

    /// Palette index for a normalised luminance, after gamma correction.
    #[inline(always)]
    #[must_use]
    pub fn index_for(&self, lum: f32) -> usize {
        let corrected = match self.exponent {
            Some(exp) => gamma_correct(lum, exp),
            None => lum,
        };
        palette_index(corrected, self.palette.last_index())
    }

    /// Glyph for one RGB sample.
    #[inline(always)]
    #[must_use]
    pub fn map_pixel(&self, r: u8, g: u8, b: u8) -> char {
        self.palette.glyph(self.index_for(luminance(r, g, b)))
    }

    /// Convert a whole grid. The result has the grid's dimensions.
    #[must_use]
    pub fn generate(&self, source: &PixelGrid) -> AsciiResult {
        log::trace!(
            "Generate {}×{} avec {} glyphes",
            source.width(),
            source.height(),
            self.palette.len()
        );
        AsciiResult::from_fn(source.width(), source.height(), |x, y| {
            let (r, g, b, _) = source.pixel(x, y);
            self.map_pixel(r, g, b)
        })
    }
}

/// Convert `source` with an already validated palette and gamma.
///
/// # Example
/// ```
/// use gs_ascii::generate;
/// use gs_core::charset::GlyphPalette;
/// use gs_core::config::Gamma;
/// use gs_core::frame::PixelGrid;
///
/// let grid = PixelGrid::filled(2, 2, [128, 128, 128, 255]);
/// let result = generate(&grid, &GlyphPalette::default(), Gamma::IDENTITY);
/// assert_eq!(result.as_bytes(), b"++\n++");
/// ```
#[must_use]
pub fn generate(source: &PixelGrid, palette: &GlyphPalette, gamma: Gamma) -> AsciiResult {
    GlyphMapper::new(palette.clone(), gamma).generate(source)
}

/// Convert `source` using the palette and gamma of a plain config.
///
/// Nothing is produced unless both values are valid.
///
/// # Errors
/// Returns [`CoreError::EmptyPalette`] or [`CoreError::InvalidGamma`].
///
/// # Example
/// ```
/// use gs_ascii::generate_with;
/// use gs_core::config::GenerateConfig;
/// use gs_core::error::CoreError;
/// use gs_core::frame::PixelGrid;
///
/// let grid = PixelGrid::new(4, 4);
/// let config = GenerateConfig { gamma: 0.0, ..GenerateConfig::default() };
/// assert_eq!(generate_with(&grid, &config), Err(CoreError::InvalidGamma(0.0)));
/// ```
pub fn generate_with(source: &PixelGrid, config: &GenerateConfig) -> Result<AsciiResult, CoreError> {
    Ok(GlyphMapper::from_config(config)?.generate(source))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(v: u8) -> PixelGrid {
        PixelGrid::filled(1, 1, [v, v, v, 255])
    }

    #[test]
    fn mid_gray_maps_to_plus() {
        let grid = PixelGrid::filled(2, 2, [128, 128, 128, 255]);
        let result = generate_with(&grid, &GenerateConfig::default()).unwrap();
        assert_eq!((result.width(), result.height()), (2, 2));
        for row in result.rows() {
            assert_eq!(row, &['+', '+']);
        }
        assert_eq!(result.as_str(), "++\n++");
    }

    #[test]
    fn empty_palette_fails_before_mapping() {
        let config = GenerateConfig {
            palette: String::new(),
            ..GenerateConfig::default()
        };
        assert_eq!(
            generate_with(&PixelGrid::new(3, 3), &config),
            Err(CoreError::EmptyPalette)
        );
    }

    #[test]
    fn non_positive_gamma_fails() {
        for gamma in [0.0f32, -2.0] {
            let config = GenerateConfig {
                gamma,
                ..GenerateConfig::default()
            };
            assert_eq!(
                generate_with(&PixelGrid::new(3, 3), &config),
                Err(CoreError::InvalidGamma(gamma))
            );
        }
    }

    #[test]
    fn extremes_hit_first_and_last_glyph_for_any_size() {
        for glyphs in ["#", "ab", " .:#@", " .,:;+*?%&#@"] {
            let palette = GlyphPalette::new(glyphs).unwrap();
            for g in [0.3f32, 1.0, 2.2] {
                let mapper = GlyphMapper::new(palette.clone(), Gamma::new(g).unwrap());
                assert_eq!(mapper.index_for(0.0), 0);
                assert_eq!(mapper.index_for(1.0), palette.last_index());
                assert_eq!(mapper.map_pixel(0, 0, 0), palette.glyph(0));
                assert_eq!(
                    mapper.map_pixel(255, 255, 255),
                    palette.glyph(palette.last_index())
                );
            }
        }
    }

    #[test]
    fn index_never_decreases_with_luminance() {
        let palette = GlyphPalette::default();
        for g in [0.5f32, 1.0, 1.8, 3.0] {
            let mapper = GlyphMapper::new(palette.clone(), Gamma::new(g).unwrap());
            let mut prev = 0;
            for v in 0..=255u8 {
                let idx = mapper.index_for(luminance(v, v, v));
                assert!(idx >= prev, "gamma {g}: index {idx} < {prev} à {v}");
                prev = idx;
            }
        }
    }

    #[test]
    fn gamma_one_is_uncorrected_mapping() {
        let palette = GlyphPalette::default();
        let mapper = GlyphMapper::new(palette.clone(), Gamma::IDENTITY);
        for v in 0..=255u8 {
            let lum = luminance(v, v, v);
            let expected = (lum * palette.last_index() as f32).floor() as usize;
            assert_eq!(mapper.index_for(lum), expected, "v = {v}");
        }
    }

    #[test]
    fn higher_gamma_lightens_output() {
        let palette = GlyphPalette::default();
        let plain = GlyphMapper::new(palette.clone(), Gamma::IDENTITY);
        let lifted = GlyphMapper::new(palette, Gamma::new(2.2).unwrap());
        let lum = luminance(64, 64, 64);
        assert!(lifted.index_for(lum) > plain.index_for(lum));
    }

    #[test]
    fn inverted_palette_is_accepted() {
        let palette = GlyphPalette::new("@#. ").unwrap();
        let mapper = GlyphMapper::new(palette, Gamma::IDENTITY);
        assert_eq!(mapper.generate(&gray(0)).as_str(), "@");
        assert_eq!(mapper.generate(&gray(255)).as_str(), " ");
    }

    #[test]
    fn alpha_is_ignored() {
        let mapper = GlyphMapper::new(GlyphPalette::default(), Gamma::IDENTITY);
        let opaque = PixelGrid::filled(1, 1, [200, 200, 200, 255]);
        let clear = PixelGrid::filled(1, 1, [200, 200, 200, 0]);
        assert_eq!(mapper.generate(&opaque), mapper.generate(&clear));
    }

    #[test]
    fn transparent_source_maps_the_same_at_any_size() {
        let src = PixelGrid::filled(4, 4, [255, 255, 255, 0]);
        let palette = GlyphPalette::default();
        for (w, h) in [(4, 4), (2, 2)] {
            let grid = gs_source::resize(&src, w, h).unwrap();
            let result = generate(&grid, &palette, Gamma::IDENTITY);
            assert!(result.as_str().chars().all(|c| c == '@' || c == '\n'), "{w}×{h}");
        }
    }

    #[test]
    fn output_matches_grid_shape() {
        let mut data = Vec::new();
        for y in 0..3u8 {
            for x in 0..5u8 {
                let v = x * 60 + y;
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        let grid = PixelGrid::from_rgba(5, 3, data).unwrap();
        let result = generate(&grid, &GlyphPalette::default(), Gamma::IDENTITY);
        assert_eq!(result.rows().count(), 3);
        assert!(result.rows().all(|r| r.len() == 5));
        assert_eq!(result.as_bytes().len(), 5 * 3 + 2);
        assert_eq!(result.get(0, 0), ' ');
    }

    #[test]
    fn empty_grid_gives_empty_result() {
        let result = generate(&PixelGrid::new(0, 0), &GlyphPalette::default(), Gamma::IDENTITY);
        assert_eq!(result.height(), 0);
        assert!(result.as_bytes().is_empty());
    }
}
