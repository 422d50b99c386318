use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    error::{StoregenError, StoregenResult},
    model::TextOp,
};

/// RGBA8 brush color carried through Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrush {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Shaped text ready for glyph rendering, plus the backing font data.
#[derive(Clone)]
pub struct PreparedText {
    pub layout: parley::Layout<TextBrush>,
    pub font_bytes: Arc<Vec<u8>>,
    pub font_family: String,
}

impl std::fmt::Debug for PreparedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreparedText")
            .field("font_bytes_len", &self.font_bytes.len())
            .field("font_family", &self.font_family)
            .finish()
    }
}

/// Well-known font files probed when a text op names no explicit source.
/// First readable file wins; the sweep order is part of the documented
/// behavior, not an implementation detail.
const FALLBACK_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// Shapes plain text with Parley against font files resolved from disk.
///
/// Font bytes and detected family names are cached per path, so repeated ops
/// against the same face register the font blob once.
pub struct TextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    fonts: HashMap<PathBuf, LoadedFont>,
    default_path: Option<PathBuf>,
}

#[derive(Clone)]
struct LoadedFont {
    family: String,
    bytes: Arc<Vec<u8>>,
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            fonts: HashMap::new(),
            default_path: None,
        }
    }

    /// Whether any fallback candidate font file exists on this machine.
    /// Text-dependent tests use this to skip on fontless hosts.
    pub fn any_fallback_font_present() -> bool {
        FALLBACK_FONTS.iter().any(|p| Path::new(p).is_file())
    }

    /// Shape and lay out a text op. An explicit `font_source` that fails to
    /// load falls back down the candidate list with a warning; an empty sweep
    /// is a hard error, never an environment mutation.
    pub fn layout(&mut self, op: &TextOp) -> StoregenResult<PreparedText> {
        let font = self.resolve_font(op.font_source.as_deref())?;

        let brush = TextBrush {
            r: op.color.r,
            g: op.color.g,
            b: op.color.b,
            a: op.color.a,
        };

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, &op.content, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(font.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(op.size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrush> = builder.build(&op.content);
        layout.break_all_lines(None);

        Ok(PreparedText {
            layout,
            font_bytes: font.bytes,
            font_family: font.family,
        })
    }

    fn resolve_font(&mut self, source: Option<&str>) -> StoregenResult<LoadedFont> {
        if let Some(source) = source {
            match self.load_font_file(Path::new(source)) {
                Ok(font) => return Ok(font),
                Err(err) => {
                    tracing::warn!(source, %err, "font source failed to load, using fallback");
                }
            }
        }

        if let Some(path) = self.default_path.clone() {
            return self.load_font_file(&path);
        }

        for candidate in FALLBACK_FONTS {
            let path = Path::new(candidate);
            if let Ok(font) = self.load_font_file(path) {
                self.default_path = Some(path.to_path_buf());
                return Ok(font);
            }
        }

        Err(StoregenError::font(
            "no usable font: set an explicit font_source or install a system font \
             (e.g. DejaVu Sans or Liberation Sans)",
        ))
    }

    fn load_font_file(&mut self, path: &Path) -> StoregenResult<LoadedFont> {
        if let Some(font) = self.fonts.get(path) {
            return Ok(font.clone());
        }

        let bytes = std::fs::read(path).map_err(|e| {
            StoregenError::font(format!("read font '{}': {e}", path.display()))
        })?;

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            StoregenError::font(format!(
                "no font families registered from '{}'",
                path.display()
            ))
        })?;

        let family = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| StoregenError::font("registered font family has no name"))?
            .to_string();

        let font = LoadedFont {
            family,
            bytes: Arc::new(bytes),
        };
        self.fonts.insert(path.to_path_buf(), font.clone());
        Ok(font)
    }
}
