use image::{DynamicImage, GenericImageView, imageops::FilterType};

use crate::error::{Img2ColorError, Result};

/// Number of channels every tensor carries (RGB).
pub const CHANNELS: usize = 3;

/// A `[batch, height, width, channel]` image buffer in row-major order.
///
/// Intensities are expected in `[0, 1]`: centroids are scaled by 255 on the
/// way out, so a tensor already holding `[0, 255]` values produces colors
/// that saturate at 255.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    shape: [usize; 4],
    data: Vec<f32>,
}

impl ImageTensor {
    pub fn new(shape: [usize; 4], data: Vec<f32>) -> Result<Self> {
        let [batch, height, width, channels] = shape;
        if channels != CHANNELS {
            return Err(Img2ColorError::invalid_tensor(format!(
                "expected {CHANNELS} channels, got {channels}"
            )));
        }
        if batch == 0 {
            return Err(Img2ColorError::invalid_tensor("batch dimension is zero"));
        }
        let expected = shape
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| Img2ColorError::invalid_tensor(format!("shape {shape:?} overflows")))?;
        if data.len() != expected {
            return Err(Img2ColorError::invalid_tensor(format!(
                "shape {shape:?} needs {expected} values, buffer holds {}",
                data.len()
            )));
        }
        Ok(Self { shape, data })
    }

    /// Batch-of-one tensor from a decoded image, normalized into `[0, 1]`.
    /// Alpha is dropped.
    pub fn from_image(img: &DynamicImage) -> Result<Self> {
        Self::from_images(std::slice::from_ref(img))
    }

    /// Stack same-sized images into one batch.
    pub fn from_images(images: &[DynamicImage]) -> Result<Self> {
        let Some(first) = images.first() else {
            return Err(Img2ColorError::invalid_tensor("no images supplied"));
        };
        let (w, h) = first.dimensions();
        let capacity = [images.len(), w as usize, h as usize, CHANNELS]
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| Img2ColorError::invalid_tensor("batch too large"))?;
        let mut data = Vec::with_capacity(capacity);
        for img in images {
            if img.dimensions() != (w, h) {
                return Err(Img2ColorError::invalid_tensor(format!(
                    "batch images must share dimensions: {:?} vs {:?}",
                    (w, h),
                    img.dimensions()
                )));
            }
            data.extend(img.to_rgb8().into_raw().into_iter().map(|v| v as f32 / 255.0));
        }
        Self::new([images.len(), h as usize, w as usize, CHANNELS], data)
    }

    pub fn shape(&self) -> [usize; 4] {
        self.shape
    }

    pub fn batch_len(&self) -> usize {
        self.shape[0]
    }

    /// Pixels of one batch element, spatial layout discarded.
    pub fn pixels(&self, batch_index: usize) -> impl Iterator<Item = [f32; 3]> + '_ {
        let [_, height, width, _] = self.shape;
        let stride = height * width * CHANNELS;
        let start = (batch_index * stride).min(self.data.len());
        let end = (start + stride).min(self.data.len());
        self.data[start..end]
            .chunks_exact(CHANNELS)
            .map(|c| [c[0], c[1], c[2]])
    }
}

/// Down-scale so the longest side equals `max_side` (nearest-neighbour),
/// keeping the aspect ratio. Images already small enough are returned as is.
pub fn downscale(img: DynamicImage, max_side: u32) -> DynamicImage {
    let (orig_w, orig_h) = img.dimensions();
    let longest = orig_w.max(orig_h);
    if max_side == 0 || longest <= max_side {
        return img;
    }
    let ratio = max_side as f32 / longest as f32;
    let w = ((orig_w as f32) * ratio).round().max(1.0) as u32;
    let h = ((orig_h as f32) * ratio).round().max(1.0) as u32;
    DynamicImage::ImageRgba8(image::imageops::resize(&img, w, h, FilterType::Nearest))
}
