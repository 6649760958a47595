// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Embedded artwork images.
//!
//! Every image the viewer can show is compiled into the binary and
//! decoded into a format suitable for display in egui. There is no
//! dynamic loading: the manifest may only reference assets listed here.

use anyhow::{Context, Result};

/// Look up the encoded bytes for a manifest asset name.
pub fn bytes_for(name: &str) -> Option<&'static [u8]> {
    let bytes: &'static [u8] = match name {
        "woman_with_a_parasol" => include_bytes!("../../assets/images/woman_with_a_parasol.png"),
        "girl_in_a_red_hat" => include_bytes!("../../assets/images/girl_in_a_red_hat.png"),
        "mona_lisa" => include_bytes!("../../assets/images/mona_lisa.png"),
        "a_girl_at_work" => include_bytes!("../../assets/images/a_girl_at_work.png"),
        _ => return None,
    };
    Some(bytes)
}

/// Decode embedded image bytes into an egui color image.
pub fn decode(bytes: &[u8]) -> Result<egui::ColorImage> {
    let img = image::load_from_memory(bytes).context("failed to decode embedded image")?;
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_asset() {
        assert!(bytes_for("starry_night").is_none());
    }

    #[test]
    fn test_all_embedded_assets_decode() {
        let names = [
            "woman_with_a_parasol",
            "girl_in_a_red_hat",
            "mona_lisa",
            "a_girl_at_work",
        ];
        for name in names {
            let bytes = bytes_for(name).unwrap();
            let color_image = decode(bytes).unwrap();
            assert!(color_image.width() > 0, "{} decoded to zero width", name);
            assert!(color_image.height() > 0, "{} decoded to zero height", name);
        }
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        assert!(decode(b"not an image").is_err());
    }
}
