use anyhow::{Context, Result};
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer as FirResizer};
use gs_core::error::CoreError;
use gs_core::frame::PixelGrid;

/// Largest width or height a resize may produce.
pub const MAX_DIMENSION: u32 = 8192;

/// Compute the output size for a resize request.
///
/// A `target_height` of 0 means "derive it": the height is scaled by the
/// same factor as the width and rounded, so the aspect ratio is kept. Any
/// other height is used as given and the two axes stretch independently.
/// A derived height never drops below 1.
///
/// # Errors
/// - [`CoreError::InvalidDimension`] if `target_width` is 0, or if the
///   width or the (given or derived) height exceeds [`MAX_DIMENSION`].
/// - [`CoreError::InvalidSource`] if the source has a zero dimension.
///
/// # Example
/// ```
/// use gs_source::resize::target_dimensions;
/// assert_eq!(target_dimensions(200, 100, 100, 0).unwrap(), (100, 50));
/// assert_eq!(target_dimensions(200, 100, 100, 100).unwrap(), (100, 100));
/// ```
pub fn target_dimensions(
    source_width: u32,
    source_height: u32,
    target_width: u32,
    target_height: u32,
) -> Result<(u32, u32), CoreError> {
    if target_width == 0 || target_width > MAX_DIMENSION || target_height > MAX_DIMENSION {
        return Err(CoreError::InvalidDimension {
            width: target_width,
            height: target_height,
        });
    }
    if source_width == 0 || source_height == 0 {
        return Err(CoreError::InvalidSource {
            width: source_width,
            height: source_height,
        });
    }
    if target_height > 0 {
        return Ok((target_width, target_height));
    }

    let scale_w = f64::from(target_width) / f64::from(source_width);
    let derived = (f64::from(source_height) * scale_w).round().max(1.0);
    if derived > f64::from(MAX_DIMENSION) {
        return Err(CoreError::InvalidDimension {
            width: target_width,
            height: derived.min(f64::from(u32::MAX)) as u32,
        });
    }
    Ok((target_width, derived as u32))
}

/// Resampler réutilisable wrappant fast_image_resize (Lanczos3).
///
/// # Example
/// ```
/// use gs_source::resize::Resampler;
/// let r = Resampler::new();
/// ```
pub struct Resampler {
    inner: FirResizer,
    options: ResizeOptions,
    /// Scratch copy of the source (fast_image_resize wants `&mut` on it).
    src_buf: Vec<u8>,
}

impl Resampler {
    /// Create a Lanczos3 resampler.
    ///
    /// Channels are filtered independently: no alpha premultiplication, so
    /// transparent pixels keep their RGB just as on the same-size path.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new()
                .resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3))
                .use_alpha(false),
            src_buf: Vec::new(),
        }
    }

    /// Resize `src` to `target_width`×`target_height`, deriving the height
    /// when it is 0 (see [`target_dimensions`]).
    ///
    /// # Errors
    /// Returns a [`CoreError`] for invalid dimensions, or an error if the
    /// underlying resize fails.
    ///
    /// # Example
    /// ```
    /// use gs_source::resize::Resampler;
    /// use gs_core::frame::PixelGrid;
    /// let mut r = Resampler::new();
    /// let src = PixelGrid::new(200, 100);
    /// let dst = r.resize(&src, 100, 0).unwrap();
    /// assert_eq!((dst.width(), dst.height()), (100, 50));
    /// ```
    pub fn resize(
        &mut self,
        src: &PixelGrid,
        target_width: u32,
        target_height: u32,
    ) -> Result<PixelGrid> {
        let (width, height) =
            target_dimensions(src.width(), src.height(), target_width, target_height)?;
        log::debug!(
            "Resize {}×{} → {width}×{height}",
            src.width(),
            src.height()
        );

        if src.width() == width && src.height() == height {
            return Ok(src.clone());
        }

        // R1: forced copy by fast_image_resize API (requires &mut on source)
        self.src_buf.clear();
        self.src_buf.extend_from_slice(src.data());

        let src_image =
            Image::from_slice_u8(src.width(), src.height(), &mut self.src_buf, PixelType::U8x4)
                .context("Invalid source dimensions")?;

        let mut dst_image = Image::new(width, height, PixelType::U8x4);

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .context("Resize failed")?;

        Ok(PixelGrid::from_rgba(width, height, dst_image.into_vec())?)
    }
}

impl Default for Resampler {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot resize with a fresh [`Resampler`].
///
/// # Errors
/// See [`Resampler::resize`].
///
/// # Example
/// ```
/// use gs_source::resize::resize;
/// use gs_core::frame::PixelGrid;
/// let src = PixelGrid::new(200, 100);
/// let dst = resize(&src, 100, 100).unwrap();
/// assert_eq!((dst.width(), dst.height()), (100, 100));
/// ```
pub fn resize(src: &PixelGrid, target_width: u32, target_height: u32) -> Result<PixelGrid> {
    Resampler::new().resize(src, target_width, target_height)
}
