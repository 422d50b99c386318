use std::path::Path;

use anyhow::Context as _;
use image::ImageEncoder as _;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};

use crate::{compose::FrameRgba, error::StoregenResult};

/// Encode a composed frame as a PNG at best compression and return the
/// written file size in bytes. Parent directories are created as needed.
/// Premultiplied frames are converted back to straight alpha, since PNG
/// stores unassociated channels.
pub fn write_png(frame: &FrameRgba, path: &Path) -> StoregenResult<u64> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let straight;
    let data: &[u8] = if frame.premultiplied {
        straight = unpremultiply(&frame.data);
        &straight
    } else {
        &frame.data
    };

    let file = std::fs::File::create(path)
        .with_context(|| format!("create png '{}'", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    let encoder =
        PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive);
    encoder
        .write_image(
            data,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgba8,
        )
        .with_context(|| format!("encode png '{}'", path.display()))?;

    let size = std::fs::metadata(path)
        .with_context(|| format!("stat png '{}'", path.display()))?
        .len();
    Ok(size)
}

/// Divide each color channel by its alpha, rounding to nearest. Opaque and
/// fully transparent pixels pass through untouched.
fn unpremultiply(data: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    for px in out.chunks_exact_mut(4) {
        let a = px[3];
        if a == 0 || a == 255 {
            continue;
        }
        let a16 = u16::from(a);
        for c in &mut px[..3] {
            let v = (u16::from(*c) * 255 + a16 / 2) / a16;
            *c = v.min(255) as u8;
        }
    }
    out
}
