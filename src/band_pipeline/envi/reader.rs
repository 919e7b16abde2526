use tracing::debug;

use crate::band_pipeline::common::error::Result;
use crate::band_pipeline::envi::decoder::decode_pixels;
use crate::band_pipeline::envi::header::parse_header;
use crate::band_pipeline::envi::types::DecodedBand;

pub trait BandReader {
    fn read_band(&self, header_text: &str, pixel_data: &[u8]) -> Result<DecodedBand>;
}

pub struct EnviBandReader;

impl BandReader for EnviBandReader {
    fn read_band(&self, header_text: &str, pixel_data: &[u8]) -> Result<DecodedBand> {
        debug!("Decoding ENVI band, {} payload bytes", pixel_data.len());

        let header = parse_header(header_text)?;
        let pixels = decode_pixels(&header, pixel_data)?;

        debug!("Decoded band: {}x{}", header.width, header.height);

        Ok(DecodedBand { header, pixels })
    }
}
