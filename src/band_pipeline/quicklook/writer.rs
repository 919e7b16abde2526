use std::io::Write;

use crate::band_pipeline::common::error::Result;
use crate::band_pipeline::envi::types::DecodedBand;
use crate::band_pipeline::quicklook::types::QuicklookConfig;

pub trait QuicklookWriter {
    fn write_quicklook(
        &self,
        band: &DecodedBand,
        output: &mut dyn Write,
        config: &QuicklookConfig,
    ) -> Result<()>;
}
