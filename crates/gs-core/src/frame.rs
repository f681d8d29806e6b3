use std::fmt;

use crate::error::CoreError;

/// Séparateur inséré entre deux lignes de la forme aplatie.
pub const ROW_SEPARATOR: char = '\n';

/// Grille de pixels immuable, RGBA row-major, 4 bytes par pixel.
///
/// # Example
/// ```
/// use gs_core::frame::PixelGrid;
/// let grid = PixelGrid::new(10, 10);
/// assert_eq!(grid.data().len(), 400);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelGrid {
    /// Crée une grille noire transparente aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use gs_core::frame::PixelGrid;
    /// let grid = PixelGrid::new(100, 50);
    /// assert_eq!(grid.width(), 100);
    /// assert_eq!(grid.height(), 50);
    /// assert_eq!(grid.data().len(), 100 * 50 * 4);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 4],
            width,
            height,
        }
    }

    /// Crée une grille uniforme, chaque pixel valant `rgba`.
    ///
    /// # Example
    /// ```
    /// use gs_core::frame::PixelGrid;
    /// let grid = PixelGrid::filled(2, 2, [128, 128, 128, 255]);
    /// assert_eq!(grid.pixel(1, 1), (128, 128, 128, 255));
    /// ```
    #[must_use]
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        Self {
            data: rgba.repeat(count),
            width,
            height,
        }
    }

    /// Wrap an existing RGBA buffer.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidSource`] if `data.len() != width * height * 4`.
    ///
    /// # Example
    /// ```
    /// use gs_core::frame::PixelGrid;
    /// assert!(PixelGrid::from_rgba(1, 1, vec![0, 0, 0, 255]).is_ok());
    /// assert!(PixelGrid::from_rgba(2, 1, vec![0, 0, 0, 255]).is_err());
    /// ```
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CoreError> {
        if data.len() != width as usize * height as usize * 4 {
            return Err(CoreError::InvalidSource { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when either dimension is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw RGBA bytes, row-major.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Accès au pixel (x, y) → (r, g, b, a).
    ///
    /// # Example
    /// ```
    /// use gs_core::frame::PixelGrid;
    /// let grid = PixelGrid::new(10, 10);
    /// assert_eq!(grid.pixel(0, 0), (0, 0, 0, 0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        match self.data.get(idx..idx + 4) {
            Some(&[r, g, b, a]) => (r, g, b, a),
            _ => (0, 0, 0, 0),
        }
    }
}

/// Résultat de la conversion : grille de glyphes et sa forme aplatie.
///
/// The flat form joins each row's glyphs and puts one [`ROW_SEPARATOR`]
/// between consecutive rows, with none after the last row.
///
/// # Example
/// ```
/// use gs_core::frame::AsciiResult;
/// let result = AsciiResult::from_fn(3, 2, |x, _| if x == 1 { '#' } else { '.' });
/// assert_eq!(result.get(1, 0), '#');
/// assert_eq!(result.as_bytes(), b".#.\n.#.");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsciiResult {
    glyphs: Vec<char>,
    text: String,
    width: u32,
    height: u32,
}

impl AsciiResult {
    /// Build a `width`×`height` result, calling `glyph_at(x, y)` once per
    /// cell in row-major order.
    pub fn from_fn<F>(width: u32, height: u32, mut glyph_at: F) -> Self
    where
        F: FnMut(u32, u32) -> char,
    {
        let mut glyphs = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                glyphs.push(glyph_at(x, y));
            }
        }

        let mut text = String::with_capacity(glyphs.len() + height as usize);
        for y in 0..height as usize {
            if y > 0 {
                text.push(ROW_SEPARATOR);
            }
            let start = y * width as usize;
            text.extend(&glyphs[start..start + width as usize]);
        }

        Self {
            glyphs,
            text,
            width,
            height,
        }
    }

    /// Number of glyphs per row.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Glyph at (x, y).
    ///
    /// # Panics
    /// Panics if (x, y) is outside the grid.
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> char {
        self.glyphs[y as usize * self.width as usize + x as usize]
    }

    /// Glyphs of row `y`.
    ///
    /// # Panics
    /// Panics if `y >= height`.
    #[must_use]
    pub fn row(&self, y: u32) -> &[char] {
        let start = y as usize * self.width as usize;
        &self.glyphs[start..start + self.width as usize]
    }

    /// Rows in top-to-bottom order.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        (0..self.height).map(|y| self.row(y))
    }

    /// Flattened form as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Flattened form as UTF-8 bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }
}

impl fmt::Display for AsciiResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
