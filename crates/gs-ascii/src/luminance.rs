//! Luminance perceptuelle et correction gamma.

/// Poids Rec. 601 en millièmes ; leur somme vaut exactement 1000.
const WEIGHT_R: u32 = 299;
const WEIGHT_G: u32 = 587;
const WEIGHT_B: u32 = 114;

/// Dénominateur : somme des poids × valeur max d'un canal.
const LUMA_SCALE: f32 = 1000.0 * 255.0;

/// Normalised perceptual luminance in `[0.0, 1.0]`, alpha ignored.
///
/// Integer weights keep both ends exact: black is `0.0` and white is `1.0`.
///
/// # Example
/// ```
/// use gs_ascii::luminance::luminance;
/// assert_eq!(luminance(0, 0, 0), 0.0);
/// assert_eq!(luminance(255, 255, 255), 1.0);
/// assert!((luminance(128, 128, 128) - 0.502).abs() < 0.001);
/// ```
#[inline(always)]
#[must_use]
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    let weighted =
        u32::from(r) * WEIGHT_R + u32::from(g) * WEIGHT_G + u32::from(b) * WEIGHT_B;
    weighted as f32 / LUMA_SCALE
}

/// `L ^ exponent`, with `L` clamped to `[0.0, 1.0]` first.
///
/// Pass `1.0 / gamma` as the exponent.
#[inline(always)]
#[must_use]
pub fn gamma_correct(lum: f32, exponent: f32) -> f32 {
    lum.clamp(0.0, 1.0).powf(exponent)
}

/// Palette index for a corrected luminance: `floor(L * last)` clamped to `[0, last]`.
///
/// # Example
/// ```
/// use gs_ascii::luminance::palette_index;
/// assert_eq!(palette_index(0.0, 11), 0);
/// assert_eq!(palette_index(1.0, 11), 11);
/// assert_eq!(palette_index(0.5, 11), 5);
/// assert_eq!(palette_index(1.0, 0), 0);
/// ```
#[inline(always)]
#[must_use]
pub fn palette_index(lum: f32, last: usize) -> usize {
    let scaled = (lum.clamp(0.0, 1.0) * last as f32).floor();
    (scaled as usize).min(last)
}
