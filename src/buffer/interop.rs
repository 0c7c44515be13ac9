use image::{GrayImage, RgbaImage};

use super::{PixelBuffer, RowSource};
use crate::foundation::error::{PixmixError, PixmixResult};

impl PixelBuffer<u8> {
    /// Adopt an RGBA8 image's memory (four elements per pixel, R G B A).
    pub fn from_rgba_image(img: RgbaImage) -> PixmixResult<Self> {
        let (w, h) = img.dimensions();
        Self::from_vec(img.into_raw(), w, h, 4)
    }

    /// Adopt a gray8 image's memory (one element per pixel).
    pub fn from_gray_image(img: GrayImage) -> PixmixResult<Self> {
        let (w, h) = img.dimensions();
        Self::from_vec(img.into_raw(), w, h, 1)
    }

    /// Copy out as an RGBA8 image. Requires four elements per pixel.
    pub fn to_rgba_image(&self) -> PixmixResult<RgbaImage> {
        if self.elements_per_pixel() != 4 {
            return Err(PixmixError::format(format!(
                "rgba image needs 4 elements per pixel, buffer has {}",
                self.elements_per_pixel()
            )));
        }
        RgbaImage::from_raw(self.width(), self.height(), self.packed_rows())
            .ok_or_else(|| PixmixError::format("rgba image rejected buffer geometry"))
    }

    /// Copy out as a gray8 image. Requires one element per pixel.
    pub fn to_gray_image(&self) -> PixmixResult<GrayImage> {
        if self.elements_per_pixel() != 1 {
            return Err(PixmixError::format(format!(
                "gray image needs 1 element per pixel, buffer has {}",
                self.elements_per_pixel()
            )));
        }
        GrayImage::from_raw(self.width(), self.height(), self.packed_rows())
            .ok_or_else(|| PixmixError::format("gray image rejected buffer geometry"))
    }

    fn packed_rows(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(
            self.width() as usize * self.height() as usize * self.elements_per_pixel(),
        );
        for y in 0..self.height() {
            out.extend_from_slice(self.row(y));
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/buffer/interop.rs"]
mod tests;
