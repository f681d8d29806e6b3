use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::charset::{CHARSET_DEFAULT, GlyphPalette};
use crate::error::CoreError;

/// Largeur de sortie par défaut, en glyphes.
pub const DEFAULT_WIDTH: u32 = 120;

/// Exposant de correction gamma, strictement positif et fini.
///
/// `1.0` leaves luminance untouched.
///
/// # Example
/// ```
/// use gs_core::config::Gamma;
/// assert_eq!(Gamma::new(2.2).unwrap().value(), 2.2);
/// assert!(Gamma::new(0.0).is_err());
/// assert_eq!(Gamma::default().value(), 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gamma(f32);

impl Gamma {
    /// No correction.
    pub const IDENTITY: Self = Self(1.0);

    /// Validate a gamma exponent.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidGamma`] if `value` is not finite or `<= 0`.
    pub fn new(value: f32) -> Result<Self, CoreError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(CoreError::InvalidGamma(value))
        }
    }

    /// Raw exponent.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// True only for an exponent of exactly 1.
    #[allow(clippy::float_cmp)]
    #[must_use]
    pub fn is_identity(self) -> bool {
        self.0 == 1.0
    }
}

impl Default for Gamma {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Paramètres d'une conversion, passés par valeur au pipeline.
///
/// Plain data: values are validated when the pipeline consumes them, not
/// when the struct is built.
///
/// # Example
/// ```
/// use gs_core::config::GenerateConfig;
/// let config = GenerateConfig::default();
/// assert_eq!(config.width, 120);
/// assert_eq!(config.height, 0);
/// assert_eq!(config.palette.chars().count(), 12);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct GenerateConfig {
    /// Largeur cible en glyphes. Doit être > 0.
    pub width: u32,
    /// Hauteur cible. 0 = dérivée du ratio de l'image source.
    pub height: u32,
    /// Glyphes du plus sombre au plus clair.
    pub palette: String,
    /// Exposant gamma appliqué à la luminance normalisée.
    pub gamma: f32,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: 0,
            palette: CHARSET_DEFAULT.to_string(),
            gamma: 1.0,
        }
    }
}

impl GenerateConfig {
    /// Validated palette.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyPalette`] if `palette` is empty.
    pub fn glyph_palette(&self) -> Result<GlyphPalette, CoreError> {
        GlyphPalette::new(&self.palette)
    }

    /// Validated gamma.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidGamma`] if `gamma` is not a positive finite number.
    pub fn gamma_factor(&self) -> Result<Gamma, CoreError> {
        Gamma::new(self.gamma)
    }

    /// Check every field without converting anything.
    ///
    /// # Errors
    /// Returns the first [`CoreError`] found, checking width, palette then gamma.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.width == 0 {
            return Err(CoreError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        self.glyph_palette()?;
        self.gamma_factor()?;
        Ok(())
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    generate: Option<GenerateSection>,
}

/// Generate section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct GenerateSection {
    width: Option<u32>,
    height: Option<u32>,
    palette: Option<String>,
    gamma: Option<f32>,
}

/// Parse TOML text and merge it over the defaults.
///
/// # Errors
/// Returns an error if the text is not valid TOML or a value fails validation.
///
/// # Example
/// ```
/// use gs_core::config::parse_config;
/// let config = parse_config("[generate]\nwidth = 80\ngamma = 2.2\n").unwrap();
/// assert_eq!(config.width, 80);
/// assert_eq!(config.height, 0);
/// assert_eq!(config.gamma, 2.2);
/// ```
pub fn parse_config(content: &str) -> Result<GenerateConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = GenerateConfig::default();
    if let Some(g) = file.generate {
        if let Some(v) = g.width {
            config.width = v;
        }
        if let Some(v) = g.height {
            config.height = v;
        }
        if let Some(v) = g.palette {
            config.palette = v;
        }
        if let Some(v) = g.gamma {
            config.gamma = v;
        }
    }

    config.validate()?;
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read, parsed, or validated.
///
/// # Example
/// ```no_run
/// use gs_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<GenerateConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Configuration rejetée : {}", path.display()))?;
    log::debug!("Config chargée depuis {}", path.display());
    Ok(config)
}
