use sarstack_rs::band_pipeline::{BandStackPipeline, StackConfig};
use sarstack_rs::logger;

use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting sarstack...");

    let mut args = std::env::args().skip(1);
    let products_dir = args.next().unwrap_or_else(|| "data".to_string());
    let output_dir = args.next().unwrap_or_else(|| "stacks".to_string());
    let tile_size = args.next().and_then(|arg| arg.parse().ok());

    let config = StackConfig::builder()
        .band_names(vec!["Intensity_VV".to_string(), "Intensity_VH".to_string()])
        .tile_size(tile_size)
        .build();
    let pipeline = BandStackPipeline::new(config);

    info!("Band stack pipeline initialized");
    info!("Bands: {:?}", pipeline.config().band_names);
    info!(
        "Tiling: {}",
        match pipeline.config().tile_size {
            Some(size) => format!("{size}x{size}"),
            None => "disabled".to_string(),
        }
    );

    match pipeline.convert_dir(&products_dir, &output_dir) {
        Ok(written) => {
            for path in written {
                info!("Wrote {}", path.display());
            }
            info!("Stack assembly successful!");
        }
        Err(e) => error!("Stack assembly failed: {}", e),
    }

    Ok(())
}
