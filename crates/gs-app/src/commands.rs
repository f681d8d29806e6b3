use std::io::Write;

use anyhow::Result;
use gs_ascii::GlyphMapper;
use gs_source::image::load_image;
use gs_source::resize::Resampler;

use crate::cli::{Command, GenerateArgs};
use crate::output;

/// Exécute la commande choisie, en écrivant les messages sur `out`.
///
/// # Errors
/// Returns the first error of the command; nothing is retried.
pub fn dispatch(command: &Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Generate(args) => run_generate(args, out).map(|_| ()),
        Command::Version => run_version(out),
    }
}

/// Print the version line.
///
/// # Errors
/// Returns an error if `out` cannot be written.
pub fn run_version(out: &mut impl Write) -> Result<()> {
    writeln!(out, "goscii v{}", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}

/// Decode, resize, convert, write the `.txt` file, then echo the art.
///
/// Returns the number of bytes written to the output file.
///
/// # Errors
/// Returns an error on invalid settings or any open, decode or write failure.
pub fn run_generate(args: &GenerateArgs, out: &mut impl Write) -> Result<usize> {
    writeln!(out, "Converting image '{}'...", args.file.display())?;

    let config = args.resolve_config()?;
    let mapper = GlyphMapper::from_config(&config)?;

    let source = load_image(&args.file)?;
    let resized = Resampler::new().resize(&source, config.width, config.height)?;
    log::info!(
        "{}×{} → {}×{}, gamma {}",
        source.width(),
        source.height(),
        resized.width(),
        resized.height(),
        config.gamma
    );

    let result = mapper.generate(&resized);

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| output::default_output_path(&args.file));
    let written = output::write_result(&path, &args.file, &result)?;
    writeln!(out, "Wrote {written} bytes to {}", path.display())?;

    if !args.quiet {
        writeln!(out, "Displaying ASCII art:")?;
        writeln!(out, "{result}")?;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;
    use gs_core::error::CoreError;

    fn args_for(file: &Path) -> GenerateArgs {
        GenerateArgs {
            file: file.to_path_buf(),
            width: None,
            height: None,
            gamma: None,
            palette: None,
            output: None,
            config: None,
            quiet: false,
        }
    }

    fn save_gray(dir: &Path, name: &str, w: u32, h: u32, v: u8) -> PathBuf {
        let path = dir.join(name);
        image::RgbaImage::from_pixel(w, h, image::Rgba([v, v, v, 255]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn mid_gray_image_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = save_gray(dir.path(), "gray.png", 2, 2, 128);
        let args = GenerateArgs {
            width: Some(2),
            ..args_for(&input)
        };

        let mut out = Vec::new();
        let written = run_generate(&args, &mut out).unwrap();

        let txt = dir.path().join("gray.txt");
        assert_eq!(std::fs::read(&txt).unwrap(), b"++\n++");
        assert_eq!(written, 5);

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("Converting image '"));
        assert!(printed.contains(&format!("Wrote 5 bytes to {}", txt.display())));
        assert!(printed.ends_with("Displaying ASCII art:\n++\n++\n"));
    }

    #[test]
    fn default_width_and_derived_height() {
        let dir = tempfile::tempdir().unwrap();
        let input = save_gray(dir.path(), "wide.png", 240, 60, 255);

        let mut out = Vec::new();
        let args = GenerateArgs {
            quiet: true,
            ..args_for(&input)
        };
        run_generate(&args, &mut out).unwrap();

        let text = std::fs::read_to_string(dir.path().join("wide.txt")).unwrap();
        let rows: Vec<&str> = text.split('\n').collect();
        assert_eq!(rows.len(), 30);
        assert!(rows.iter().all(|r| r.chars().count() == 120));
        assert!(!String::from_utf8(out).unwrap().contains("Displaying"));
    }

    #[test]
    fn explicit_output_and_stretch() {
        let dir = tempfile::tempdir().unwrap();
        let input = save_gray(dir.path(), "img.png", 200, 100, 0);
        let target = dir.path().join("custom.txt");
        let args = GenerateArgs {
            width: Some(10),
            height: Some(10),
            output: Some(target.clone()),
            quiet: true,
            ..args_for(&input)
        };

        let written = run_generate(&args, &mut Vec::new()).unwrap();
        assert_eq!(written, 10 * 10 + 9);
        let text = std::fs::read_to_string(target).unwrap();
        assert!(text.chars().all(|c| c == ' ' || c == '\n'));
    }

    #[test]
    fn missing_image_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_for(&dir.path().join("absent.png"));
        assert!(run_generate(&args, &mut Vec::new()).is_err());
        assert!(!dir.path().join("absent.txt").exists());
    }

    #[test]
    fn invalid_gamma_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = save_gray(dir.path(), "g.png", 4, 4, 90);
        let args = GenerateArgs {
            gamma: Some(0.0),
            ..args_for(&input)
        };
        let err = run_generate(&args, &mut Vec::new()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CoreError>(),
            Some(&CoreError::InvalidGamma(0.0))
        );
        assert!(!dir.path().join("g.txt").exists());
    }

    #[test]
    fn version_line() {
        let mut out = Vec::new();
        dispatch(&Command::Version, &mut out).unwrap();
        let line = String::from_utf8(out).unwrap();
        assert!(line.starts_with("goscii v"));
        assert!(line.ends_with('\n'));
    }
}
