use std::io::Write;

use ndarray::Array2;
use tracing::debug;

use crate::band_pipeline::common::error::{BandError, Result};
use crate::band_pipeline::envi::types::DecodedBand;
use crate::band_pipeline::quicklook::types::{QuicklookConfig, TiffCompression};
use crate::band_pipeline::quicklook::writer::QuicklookWriter;

/// Renders a band as a Gray16 TIFF after display normalization.
pub struct GrayTiffWriter;

impl QuicklookWriter for GrayTiffWriter {
    fn write_quicklook(
        &self,
        band: &DecodedBand,
        output: &mut dyn Write,
        config: &QuicklookConfig,
    ) -> Result<()> {
        debug!(
            "Encoding quicklook TIFF: {}x{}",
            band.header.width, band.header.height
        );

        let gray = normalize_to_u16(&band.pixels, config);

        let mut buffer = Vec::new();

        {
            let compression = match config.compression {
                TiffCompression::None => tiff::encoder::Compression::Uncompressed,
                TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
                TiffCompression::Deflate => tiff::encoder::Compression::Deflate(
                    tiff::encoder::compression::DeflateLevel::Fast,
                ),
            };

            let mut encoder = tiff::encoder::TiffEncoder::new(std::io::Cursor::new(&mut buffer))
                .map_err(|e| BandError::EncodeError(e.to_string()))?
                .with_compression(compression);

            if let Some(predictor_val) = config.predictor {
                let predictor = match predictor_val {
                    2 => tiff::tags::Predictor::Horizontal,
                    _ => tiff::tags::Predictor::None,
                };
                encoder = encoder.with_predictor(predictor);
            }

            encoder
                .write_image::<tiff::encoder::colortype::Gray16>(
                    band.header.width as u32,
                    band.header.height as u32,
                    &gray,
                )
                .map_err(|e| BandError::EncodeError(e.to_string()))?;
        }

        output.write_all(&buffer)?;

        debug!("Quicklook TIFF encoding complete");
        Ok(())
    }
}

/// Map intensities onto the full u16 range.
///
/// Optional log10 first (zero pixels stay at zero), then an optional clip
/// to mean +/- n standard deviations, then min-max scaling. A constant
/// band maps to all zeros. Non-finite pixels are excluded from the clip
/// statistics; a band whose finite range cannot be established maps to
/// all zeros rather than failing.
fn normalize_to_u16(pixels: &Array2<f64>, config: &QuicklookConfig) -> Vec<u16> {
    let mut data: Vec<f64> = pixels.iter().copied().collect();

    if config.log_scale {
        for v in &mut data {
            *v = if *v == 0.0 { 0.0 } else { v.log10() };
        }
    }

    if let Some(sigma) = config.sigma {
        // Statistics over finite pixels only; infinities in the payload or
        // NaNs from a log over negatives would poison mean and variance,
        // and clamp panics on non-finite limits.
        let finite: Vec<f64> = data.iter().copied().filter(|v| v.is_finite()).collect();
        if !finite.is_empty() {
            let n = finite.len() as f64;
            let mean = finite.iter().sum::<f64>() / n;
            let variance = finite.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
            let half_window = variance.sqrt() * sigma as f64;
            let (lo, hi) = (mean - half_window, mean + half_window);
            if lo.is_finite() && hi.is_finite() {
                for v in &mut data {
                    *v = v.clamp(lo, hi);
                }
            }
        }
    }

    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range == 0.0 || !range.is_finite() {
        return vec![0; data.len()];
    }

    data.iter()
        .map(|v| ((v - min) / range * f64::from(u16::MAX)).round() as u16)
        .collect()
}
