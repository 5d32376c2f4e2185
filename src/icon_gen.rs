use crate::glyph::{GlyphFace, GlyphMask, SYSTEM_FONT_CANDIDATES};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    imageops, ColorType, DynamicImage, ImageEncoder, Rgba, RgbImage, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Top of the background gradient (`#667eea`).
pub const GRADIENT_START: [u8; 3] = [102, 126, 234];
/// Bottom of the background gradient (`#764ba2`).
pub const GRADIENT_END: [u8; 3] = [118, 75, 162];

pub const ICON_LETTER: char = 'S';
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

const SHADOW_OFFSET: i32 = 2;
const SHADOW_OPACITY: f32 = 0.5;

#[derive(Debug)]
pub struct Options {
    pub output: PathBuf,
    pub sizes: Vec<u32>,
    pub font: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output: PathBuf::from("chrome-extension/icons"),
            sizes: DEFAULT_SIZES.to_vec(),
            font: None,
        }
    }
}

pub fn generate_icons(options: &Options) -> Result<()> {
    create_dir_all(&options.output).context("Can't create output directory")?;

    let face = GlyphFace::discover(options.font.as_deref(), SYSTEM_FONT_CANDIDATES);
    eprintln!("Using {} for the icon letter", face.describe());

    for &size in &options.sizes {
        let path = options.output.join(icon_file_name(size));
        render_icon(size, &path, &face)?;
    }

    println!("\n✅ All icons created successfully!");
    Ok(())
}

pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

/// Render one icon and write it to `path` as PNG, replacing any existing file.
pub fn render_icon(size: u32, path: &Path, face: &GlyphFace) -> Result<()> {
    let canvas = render_canvas(size, face);

    let mut out_file = BufWriter::new(
        File::create(path)
            .with_context(|| format!("Failed to create PNG file {}", path.display()))?,
    );
    write_png(&canvas, &mut out_file)
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    out_file.flush()?;

    println!("✓ Generated {} ({size}x{size})", path.display());
    Ok(())
}

/// Compose the gradient background, the letter shadow and the letter itself.
pub fn render_canvas(size: u32, face: &GlyphFace) -> RgbImage {
    let mut canvas = RgbaImage::from_fn(size, size, |_, y| {
        let [r, g, b] = gradient_row_color(size, y);
        Rgba([r, g, b, 255])
    });

    let font_size = (size as f32 * 0.6) as u32;
    let mask = face.rasterize(ICON_LETTER, font_size);
    if !mask.is_empty() {
        let (x, y) = glyph_origin(size, &mask);
        let left = i64::from(x + mask.left);
        let top = i64::from(y + mask.top);
        let offset = i64::from(SHADOW_OFFSET);

        let shadow = glyph_layer(&mask, [0, 0, 0], SHADOW_OPACITY);
        imageops::overlay(&mut canvas, &shadow, left + offset, top + offset);

        let letter = glyph_layer(&mask, [255, 255, 255], 1.0);
        imageops::overlay(&mut canvas, &letter, left, top);
    }

    DynamicImage::ImageRgba8(canvas).into_rgb8()
}

/// Background color of row `y`, interpolated linearly and truncated per channel.
pub fn gradient_row_color(size: u32, y: u32) -> [u8; 3] {
    let mut color = [0u8; 3];
    for (c, (&start, &end)) in color
        .iter_mut()
        .zip(GRADIENT_START.iter().zip(GRADIENT_END.iter()))
    {
        let delta = (end as i64 - start as i64) * y as i64;
        *c = (start as f64 + delta as f64 / size as f64) as u8;
    }
    color
}

/// Glyph origin that puts the mask's box in the middle of the canvas.
///
/// `x` subtracts the box's left bearing as well, not just `(size - w) / 2`:
/// otherwise the ink shifts right by the bearing and lands off center.
pub fn glyph_origin(size: u32, mask: &GlyphMask) -> (i32, i32) {
    let size = size as i32;
    let x = (size - mask.width as i32).div_euclid(2) - mask.left;
    let y = (size - mask.height as i32).div_euclid(2) - mask.top;
    (x, y)
}

/// Solid-colour layer whose alpha is the glyph coverage scaled by `opacity`.
fn glyph_layer(mask: &GlyphMask, color: [u8; 3], opacity: f32) -> RgbaImage {
    let [r, g, b] = color;
    RgbaImage::from_fn(mask.width, mask.height, |x, y| {
        let alpha = (mask.coverage(x, y) * opacity * 255.0).round() as u8;
        Rgba([r, g, b, alpha])
    })
}

fn write_png<W: Write>(image: &RgbImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgb8)?;
    Ok(())
}
