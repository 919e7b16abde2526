use std::fs;
use std::path::{Path, PathBuf};

use ndarray::{Array2, Array3, s};
use tracing::{info, instrument, warn};

use crate::band_pipeline::common::error::{BandError, Result};
use crate::band_pipeline::envi::{BandReader, DecodedBand, EnviBandReader};
use crate::band_pipeline::stack::{NpyStackWriter, StackConfig, StackWriter};

/// Assembles per-band time-series stacks from a directory of `*.data`
/// product directories.
///
/// Each product contributes one scene per band. Scenes are ordered by the
/// acquisition timestamp embedded in the product directory name, and a
/// scene that fails to decode or does not match the stack geometry is
/// logged and skipped; it never aborts the rest of the batch.
pub struct BandStackPipeline<R: BandReader, W: StackWriter> {
    reader: R,
    writer: W,
    config: StackConfig,
}

impl BandStackPipeline<EnviBandReader, NpyStackWriter> {
    pub fn new(config: StackConfig) -> Self {
        Self {
            reader: EnviBandReader,
            writer: NpyStackWriter,
            config,
        }
    }
}

impl<R: BandReader, W: StackWriter> BandStackPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: StackConfig) -> Self {
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

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!(
                    "Band dimensions {}x{} exceed maximum {}",
                    width, height, max
                );
                return Err(BandError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Decode one band from its `.hdr`/`.img` sidecar pair inside a
    /// product's `.data` directory.
    pub fn read_band_files(&self, data_dir: &Path, band_name: &str) -> Result<DecodedBand> {
        let hdr_path = data_dir.join(format!("{band_name}.hdr"));
        let img_path = data_dir.join(format!("{band_name}.img"));

        let header_text = fs::read_to_string(&hdr_path)
            .map_err(|e| BandError::ResourceUnreadable(format!("{}: {}", hdr_path.display(), e)))?;
        let pixel_data = fs::read(&img_path)
            .map_err(|e| BandError::ResourceUnreadable(format!("{}: {}", img_path.display(), e)))?;

        let band = self.reader.read_band(&header_text, &pixel_data)?;
        self.validate_dimensions(band.header.width, band.header.height)?;
        Ok(band)
    }

    /// Assemble one `(scene, row, col)` float32 stack for a band across all
    /// products under `products_root`.
    #[instrument(skip(self, products_root), fields(band = band_name))]
    pub fn assemble(&self, products_root: &Path, band_name: &str) -> Result<Array3<f32>> {
        let dirs = product_dirs(products_root)?;
        info!("Assembling {} from {} products", band_name, dirs.len());

        let mut scenes: Vec<Array2<f32>> = Vec::with_capacity(dirs.len());
        let mut stack_shape: Option<(usize, usize)> = None;

        for dir in &dirs {
            let band = match self.read_band_files(dir, band_name) {
                Ok(band) => band,
                Err(e) => {
                    warn!("Skipping {}: {}", dir.display(), e);
                    continue;
                }
            };

            let scene = band.pixels.mapv(|v| v as f32);
            let scene = match self.config.tile_size {
                Some(size) => {
                    let (rows, cols) = scene.dim();
                    if rows < size || cols < size {
                        warn!(
                            "Skipping {}: scene is {}x{}, smaller than tile {}x{}",
                            dir.display(),
                            rows,
                            cols,
                            size,
                            size
                        );
                        continue;
                    }
                    scene.slice(s![..size, ..size]).to_owned()
                }
                None => scene,
            };

            match stack_shape {
                Some(shape) if scene.dim() != shape => {
                    warn!(
                        "Skipping {}: scene shape {:?} does not match stack shape {:?}",
                        dir.display(),
                        scene.dim(),
                        shape
                    );
                    continue;
                }
                Some(_) => {}
                None => stack_shape = Some(scene.dim()),
            }

            scenes.push(scene);
        }

        let Some((rows, cols)) = stack_shape else {
            return Err(BandError::EmptyStack(products_root.display().to_string()));
        };

        let mut stack = Array3::<f32>::zeros((scenes.len(), rows, cols));
        for (i, scene) in scenes.iter().enumerate() {
            stack.slice_mut(s![i, .., ..]).assign(scene);
        }

        info!(
            scenes = scenes.len(),
            rows, cols, "Stack assembly complete"
        );
        Ok(stack)
    }

    /// Assemble and write one `.npy` stack per configured band name.
    ///
    /// Returns the paths written, one per band.
    #[instrument(skip(self, products_root, output_dir))]
    pub fn convert_dir<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        products_root: P,
        output_dir: Q,
    ) -> Result<Vec<PathBuf>> {
        let products_root = products_root.as_ref();
        let output_dir = output_dir.as_ref();

        info!(
            input = %products_root.display(),
            output = %output_dir.display(),
            "Converting product directory"
        );

        fs::create_dir_all(output_dir).map_err(|e| {
            BandError::OutputWriteError(format!("{}: {}", output_dir.display(), e))
        })?;

        let mut written = Vec::with_capacity(self.config.band_names.len());
        for band_name in &self.config.band_names {
            let stack = self.assemble(products_root, band_name)?;

            let output_path = output_dir.join(format!("{band_name}_stack.npy"));
            let mut output_file = fs::File::create(&output_path).map_err(|e| {
                BandError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;

            self.writer.write_stack(&stack, &mut output_file)?;
            info!(path = %output_path.display(), "Wrote band stack");
            written.push(output_path);
        }

        Ok(written)
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: StackConfig) {
        self.config = config;
    }
}

/// List `*.data` product directories, ordered by acquisition timestamp.
///
/// Directories without a recognizable timestamp sort last, by name.
fn product_dirs(root: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(root)
        .map_err(|e| BandError::ResourceUnreadable(format!("{}: {}", root.display(), e)))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_dir() && path.extension().is_some_and(|ext| ext == "data") {
            dirs.push(path);
        }
    }

    dirs.sort_by_key(|path| {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        (acquisition_key(&name).unwrap_or(u64::MAX), name)
    });
    Ok(dirs)
}

/// Extract the `yyyymmddThhmmss` acquisition token from a Sentinel-1
/// product directory name as a sortable number.
fn acquisition_key(name: &str) -> Option<u64> {
    let bytes = name.as_bytes();
    for start in 0..bytes.len().saturating_sub(14) {
        let token = &bytes[start..start + 15];
        if token[8] == b'T'
            && token[..8].iter().all(u8::is_ascii_digit)
            && token[9..].iter().all(u8::is_ascii_digit)
        {
            let digits: String = token
                .iter()
                .filter(|b| b.is_ascii_digit())
                .map(|&b| b as char)
                .collect();
            return digits.parse().ok();
        }
    }
    None
}
