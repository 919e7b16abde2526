use std::io::Write;
use std::path::Path;

use tracing::{info, instrument};

use crate::band_pipeline::common::error::{BandError, Result};
use crate::band_pipeline::envi::{BandReader, EnviBandReader};
use crate::band_pipeline::quicklook::{GrayTiffWriter, QuicklookConfig, QuicklookWriter};

/// Converts one band's `.hdr`/`.img` pair into a grayscale quicklook TIFF.
pub struct BandQuicklookPipeline<R: BandReader, W: QuicklookWriter> {
    reader: R,
    writer: W,
    config: QuicklookConfig,
}

impl BandQuicklookPipeline<EnviBandReader, GrayTiffWriter> {
    pub fn new(config: QuicklookConfig) -> Self {
        Self {
            reader: EnviBandReader,
            writer: GrayTiffWriter,
            config,
        }
    }
}

impl<R: BandReader, W: QuicklookWriter> BandQuicklookPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: QuicklookConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(BandError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    #[instrument(skip(self, header_text, pixel_data, output), fields(input_size = pixel_data.len()))]
    pub fn convert(
        &self,
        header_text: &str,
        pixel_data: &[u8],
        output: &mut dyn Write,
    ) -> Result<()> {
        info!("Starting band to quicklook conversion");

        let band = {
            let _span = tracing::info_span!("decode_band").entered();
            self.reader.read_band(header_text, pixel_data)?
        };

        {
            let _span = tracing::info_span!(
                "validate_dimensions",
                width = band.header.width,
                height = band.header.height
            )
            .entered();
            self.validate_dimensions(band.header.width, band.header.height)?;
        }

        {
            let _span = tracing::info_span!("encode_quicklook").entered();
            self.writer.write_quicklook(&band, output, &self.config)?;
        }

        info!(
            width = band.header.width,
            height = band.header.height,
            "Conversion complete"
        );
        Ok(())
    }

    #[instrument(skip(self, hdr_path, img_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>, O: AsRef<Path>>(
        &self,
        hdr_path: P,
        img_path: Q,
        output_path: O,
    ) -> Result<()> {
        let hdr_path = hdr_path.as_ref();
        let img_path = img_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            header = %hdr_path.display(),
            pixels = %img_path.display(),
            output = %output_path.display(),
            "Converting band files"
        );

        let header_text = {
            let _span = tracing::info_span!("read_header_file").entered();
            std::fs::read_to_string(hdr_path).map_err(|e| {
                BandError::ResourceUnreadable(format!("{}: {}", hdr_path.display(), e))
            })?
        };

        let pixel_data = {
            let _span = tracing::info_span!("read_pixel_file").entered();
            std::fs::read(img_path).map_err(|e| {
                BandError::ResourceUnreadable(format!("{}: {}", img_path.display(), e))
            })?
        };

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                BandError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.convert(&header_text, &pixel_data, &mut output_file)?;

        Ok(())
    }

    pub fn config(&self) -> &QuicklookConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: QuicklookConfig) {
        self.config = config;
    }
}
