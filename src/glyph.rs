use rusttype::{point, Font, Scale};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Scalable fonts tried in order when no font is given on the command line.
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

// Built-in fixed-size "S", used when no scalable font could be loaded.
const BITMAP_S: [&str; 9] = [
    ".####.",
    "#....#",
    "#.....",
    "#.....",
    ".####.",
    ".....#",
    ".....#",
    "#....#",
    ".####.",
];

// Rows of empty cell above the bitmap glyph, like the ascender gap of a font.
const BITMAP_TOP: i32 = 2;

/// Coverage mask of a single rasterized glyph.
///
/// `left` and `top` locate the mask's top-left corner relative to the glyph
/// origin, which sits on the ascender line.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphMask {
    pub width: u32,
    pub height: u32,
    pub left: i32,
    pub top: i32,
    coverage: Vec<f32>,
}

impl GlyphMask {
    fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            left: 0,
            top: 0,
            coverage: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Coverage in `[0, 1]` at mask coordinates `(x, y)`.
    pub fn coverage(&self, x: u32, y: u32) -> f32 {
        self.coverage[(y * self.width + x) as usize]
    }
}

/// The face used to draw the icon letter.
pub enum GlyphFace {
    Scalable { font: Font<'static>, path: PathBuf },
    Bitmap,
}

impl GlyphFace {
    /// Try `preferred` first, then every candidate path, and fall back to the
    /// built-in bitmap glyph. Never fails.
    pub fn discover(preferred: Option<&Path>, candidates: &[&str]) -> Self {
        preferred
            .into_iter()
            .chain(candidates.iter().map(|candidate| Path::new(*candidate)))
            .find_map(|path| {
                try_load_font(path).map(|font| GlyphFace::Scalable {
                    font,
                    path: path.to_path_buf(),
                })
            })
            .unwrap_or(GlyphFace::Bitmap)
    }

    pub fn describe(&self) -> String {
        match self {
            GlyphFace::Scalable { path, .. } => path.display().to_string(),
            GlyphFace::Bitmap => "built-in bitmap glyph".to_string(),
        }
    }

    /// Rasterize `ch` at `pixel_size`. The bitmap face ignores the size.
    pub fn rasterize(&self, ch: char, pixel_size: u32) -> GlyphMask {
        match self {
            GlyphFace::Scalable { font, .. } => rasterize_scalable(font, ch, pixel_size),
            GlyphFace::Bitmap => rasterize_bitmap(),
        }
    }
}

/// Load a scalable font from `path`.
///
/// A missing file is the expected case on most systems and stays silent. Any
/// other read error, or data that doesn't parse as a font, is reported on
/// stderr. Either way the caller just gets `None`.
pub fn try_load_font(path: &Path) -> Option<Font<'static>> {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => return None,
        Err(err) => {
            eprintln!("warning: can't read font {}: {}", path.display(), err);
            return None;
        }
    };

    let font = Font::try_from_vec(data);
    if font.is_none() {
        eprintln!("warning: {} is not a usable font", path.display());
    }
    font
}

fn rasterize_scalable(font: &Font<'static>, ch: char, pixel_size: u32) -> GlyphMask {
    if pixel_size == 0 {
        return GlyphMask::empty();
    }

    let scale = Scale::uniform(pixel_size as f32);
    let ascent = font.v_metrics(scale).ascent;
    let glyph = font.glyph(ch).scaled(scale).positioned(point(0.0, ascent));

    let Some(bb) = glyph.pixel_bounding_box() else {
        return GlyphMask::empty();
    };

    let width = bb.width() as u32;
    let height = bb.height() as u32;
    let mut coverage = vec![0.0; (width * height) as usize];
    glyph.draw(|x, y, v| {
        if x < width && y < height {
            coverage[(y * width + x) as usize] = v.clamp(0.0, 1.0);
        }
    });

    GlyphMask {
        width,
        height,
        left: bb.min.x,
        top: bb.min.y,
        coverage,
    }
}

fn rasterize_bitmap() -> GlyphMask {
    let width = BITMAP_S[0].len() as u32;
    let height = BITMAP_S.len() as u32;
    let coverage = BITMAP_S
        .iter()
        .flat_map(|row| row.bytes().map(|b| if b == b'#' { 1.0 } else { 0.0 }))
        .collect();

    GlyphMask {
        width,
        height,
        left: 0,
        top: BITMAP_TOP,
        coverage,
    }
}
