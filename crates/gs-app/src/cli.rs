use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use gs_core::config::{GenerateConfig, load_config};

/// goscii — convert images to ASCII art.
#[derive(Parser, Debug)]
#[command(name = "goscii", version, about, long_about = None)]
pub struct Cli {
    /// Commande à exécuter.
    #[command(subcommand)]
    pub command: Command,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,
}

/// Table des commandes, construite par clap au démarrage.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the ASCII art from an image. Width defaults to 120 and the
    /// height follows the image's aspect ratio unless given.
    Generate(GenerateArgs),
    /// Print the version number of goscii.
    Version,
}

/// Arguments of `goscii generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Image à convertir (PNG, JPEG, BMP, GIF).
    pub file: PathBuf,

    /// Largeur en glyphes. Défaut : 120, ou la valeur du fichier de config.
    pub width: Option<u32>,

    /// Hauteur en glyphes. Absente ou 0 : dérivée du ratio de l'image.
    pub height: Option<u32>,

    /// Exposant de correction gamma (> 0). 1.0 = aucune correction.
    #[arg(long)]
    pub gamma: Option<f32>,

    /// Glyphes du plus sombre au plus clair.
    #[arg(long)]
    pub palette: Option<String>,

    /// Fichier de sortie. Défaut : l'image avec l'extension .txt.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fichier de configuration TOML (section [generate]).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Ne pas afficher l'art ASCII dans le terminal.
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

impl GenerateArgs {
    /// Merge defaults, the optional config file and CLI overrides, in that
    /// order, and validate the result.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be loaded or a value is invalid.
    pub fn resolve_config(&self) -> Result<GenerateConfig> {
        let mut config = match self.config {
            Some(ref path) => load_config(path)?,
            None => GenerateConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(gamma) = self.gamma {
            config.gamma = gamma;
        }
        if let Some(ref palette) = self.palette {
            config.palette.clone_from(palette);
        }

        config.validate()?;
        Ok(config)
    }
}
