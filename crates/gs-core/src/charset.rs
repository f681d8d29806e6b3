use crate::error::CoreError;

/// 12 caractères — du plus clair au plus dense, palette par défaut.
pub const CHARSET_DEFAULT: &str = " .,:;+*?%&#@";

/// Ordered glyph palette. Index 0 is used for the darkest pixels, the last
/// index for the lightest.
///
/// The order is taken as given and never re-sorted; an inverted palette
/// simply produces an inverted picture.
///
/// # Example
/// ```
/// use gs_core::charset::GlyphPalette;
/// let palette = GlyphPalette::new(" .:#@").unwrap();
/// assert_eq!(palette.len(), 5);
/// assert_eq!(palette.glyph(0), ' ');
/// assert_eq!(palette.glyph(4), '@');
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphPalette {
    glyphs: Vec<char>,
}

impl GlyphPalette {
    /// Build a palette from a string, one glyph per `char`.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyPalette`] if `glyphs` is empty.
    pub fn new(glyphs: &str) -> Result<Self, CoreError> {
        Self::from_chars(glyphs.chars().collect())
    }

    /// Build a palette from an explicit glyph list.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyPalette`] if `glyphs` is empty.
    ///
    /// # Example
    /// ```
    /// use gs_core::charset::GlyphPalette;
    /// use gs_core::error::CoreError;
    /// assert_eq!(GlyphPalette::from_chars(Vec::new()), Err(CoreError::EmptyPalette));
    /// ```
    pub fn from_chars(glyphs: Vec<char>) -> Result<Self, CoreError> {
        if glyphs.is_empty() {
            return Err(CoreError::EmptyPalette);
        }
        Ok(Self { glyphs })
    }

    /// Number of glyphs. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false: an empty palette cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Highest valid index (`len() - 1`).
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.glyphs.len() - 1
    }

    /// Glyph at `index`, clamped to the last glyph.
    #[inline(always)]
    #[must_use]
    pub fn glyph(&self, index: usize) -> char {
        self.glyphs[index.min(self.last_index())]
    }

    /// Glyphs in palette order.
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.glyphs
    }
}

impl Default for GlyphPalette {
    fn default() -> Self {
        Self {
            glyphs: CHARSET_DEFAULT.chars().collect(),
        }
    }
}
