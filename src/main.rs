// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Replay a gesture script against a crop widget and report native regions.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser;

use squarecrop::app::script::parse_script;
use squarecrop::constant::{DEFAULT_INITIAL_FILL, MIN_SIDE, NUDGE_STEP, RESIZE_STEP};
use squarecrop::{CropConfig, CropMessage, CropRegion, CropWidget};

/// Select a square crop region by replaying pointer, touch and key input.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Image to crop. Its natural size is read from the file.
    pub image: Option<PathBuf>,

    /// Natural image size as WxH, used when no image file is given.
    #[arg(long, value_parser = parse_size)]
    pub natural: Option<(u32, u32)>,

    /// Displayed image size as WxH. Defaults to the natural size.
    #[arg(long, value_parser = parse_size)]
    pub display: Option<(u32, u32)>,

    /// Gesture script, one message per line. `-` reads stdin.
    #[arg(long, short)]
    pub script: Option<PathBuf>,

    /// Write the cropped image here.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = MIN_SIDE)]
    pub min_side: i32,

    /// Share of the shorter side covered by the initial square.
    #[arg(long, default_value_t = DEFAULT_INITIAL_FILL)]
    pub fill: f64,

    #[arg(long, default_value_t = NUDGE_STEP)]
    pub nudge_step: i32,

    #[arg(long, default_value_t = RESIZE_STEP)]
    pub resize_step: i32,

    #[arg(long)]
    pub no_keyboard: bool,

    #[arg(long)]
    pub no_touch: bool,
}

impl Args {
    fn config(&self) -> CropConfig {
        CropConfig {
            min_side: self.min_side,
            initial_fill: self.fill,
            nudge_step: self.nudge_step,
            resize_step: self.resize_step,
            enable_keyboard: !self.no_keyboard,
            enable_touch: !self.no_touch,
            ..CropConfig::default()
        }
    }
}

fn parse_size(value: &str) -> Result<(u32, u32), String> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got `{value}`"))?;
    let w = w.trim().parse::<u32>().map_err(|e| format!("invalid width: {e}"))?;
    let h = h.trim().parse::<u32>().map_err(|e| format!("invalid height: {e}"))?;
    Ok((w, h))
}

fn read_script(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read script from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

#[cfg(feature = "image")]
type Document = image::DynamicImage;

#[cfg(not(feature = "image"))]
type Document = ();

/// Decode an image file and return it with its natural size.
#[cfg(feature = "image")]
fn open_document(path: &Path) -> anyhow::Result<(Document, (u32, u32))> {
    use image::GenericImageView;

    let document = image::ImageReader::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?
        .decode()
        .with_context(|| format!("failed to decode {}", path.display()))?;
    let size = document.dimensions();
    Ok((document, size))
}

#[cfg(not(feature = "image"))]
fn open_document(_path: &Path) -> anyhow::Result<(Document, (u32, u32))> {
    bail!("built without the `image` feature; use --natural instead of an image file")
}

#[cfg(feature = "image")]
fn save_crop(document: &Document, region: CropRegion, output: &Path) -> anyhow::Result<()> {
    use image::GenericImageView;

    let (width, height) = document.dimensions();
    let fitted = region.clamped_to(width, height);
    if fitted != region {
        log::warn!("crop region {region} trimmed to {fitted} to fit the image");
    }
    fitted
        .apply(document)?
        .save(output)
        .with_context(|| format!("failed to save {}", output.display()))?;
    log::info!("saved {} ({fitted})", output.display());
    Ok(())
}

#[cfg(not(feature = "image"))]
fn save_crop(_document: &Document, _region: CropRegion, _output: &Path) -> anyhow::Result<()> {
    bail!("built without the `image` feature; cannot write cropped images")
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let document = args.image.as_deref().map(open_document).transpose()?;
    let Some(natural) = document.as_ref().map(|(_, size)| *size).or(args.natural) else {
        bail!("either an image file or --natural WxH is required");
    };
    let display = args.display.unwrap_or(natural);

    let messages = match &args.script {
        Some(path) => parse_script(&read_script(path)?)?,
        None => Vec::new(),
    };

    let mut widget = CropWidget::new(args.config());
    let src = args
        .image
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| format!("{}x{}", natural.0, natural.1));
    widget.update(CropMessage::SourceChanged(Some(src)));
    widget.on_change(|change| println!("{change}"));

    if widget.update(CropMessage::ImageReady { display, natural }).is_none() {
        bail!("unusable image size: display {display:?}, natural {natural:?}");
    }
    for message in messages {
        widget.update(message);
    }

    if let Some(output) = &args.output {
        let Some((document, _)) = &document else {
            bail!("--output needs an image file");
        };
        let Some(region) = widget.native_region() else {
            bail!("no crop region selected");
        };
        save_crop(document, region, output)?;
    }

    Ok(())
}
