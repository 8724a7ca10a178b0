//! Layered PNG compositing for drawn tokens

use crate::io::configuration::{OUTPUT_DIRECTORY, OUTPUT_EXTENSION, OUTPUT_INDEX_WIDTH};
use crate::io::error::{Result, TraitError, WithPath, file_system, invalid_parameter};
use crate::io::layers::LayerTemplate;
use crate::io::progress::ProgressReporter;
use crate::io::tokens::Token;
use clap::ValueEnum;
use image::{ImageFormat, RgbaImage, imageops};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// What to do when a layer above the base layer has no image file
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum MissingLayerPolicy {
    /// Abort the run
    #[default]
    Break,
    /// Log a warning and skip the layer
    Warn,
    /// Skip the layer silently
    Ignore,
}

/// Inputs shared by every token of a compositing run
#[derive(Clone, Copy, Debug)]
pub struct Compositor<'a> {
    layers: &'a [LayerTemplate],
    base: &'a Path,
    policy: MissingLayerPolicy,
}

impl<'a> Compositor<'a> {
    /// Create a compositor drawing `layers` bottom-up from files under `base`
    pub const fn new(
        layers: &'a [LayerTemplate],
        base: &'a Path,
        policy: MissingLayerPolicy,
    ) -> Self {
        Self {
            layers,
            base,
            policy,
        }
    }

    /// Where the image for token `index` is written
    pub fn output_path(&self, index: usize) -> PathBuf {
        self.base
            .join(OUTPUT_DIRECTORY)
            .join(format!("{index:0OUTPUT_INDEX_WIDTH$}.{OUTPUT_EXTENSION}"))
    }

    /// Composite every token in parallel, one PNG per token
    ///
    /// Each worker reads the shared layer list and writes only its own output
    /// file.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any token; see [`Self::composite`]
    pub fn composite_all(&self, tokens: &[Token], progress: &ProgressReporter) -> Result<()> {
        let output_dir = self.base.join(OUTPUT_DIRECTORY);
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| file_system(&output_dir, "create directory", e))?;

        tokens
            .par_iter()
            .enumerate()
            .try_for_each(|(index, token)| {
                self.composite(index, token)?;
                progress.inc();
                Ok(())
            })
    }

    /// Draw all layers of one token over its base layer and save the result
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A template names a feature the token lacks
    /// - The base layer is missing, or any other layer is missing under
    ///   [`MissingLayerPolicy::Break`]
    /// - A layer image cannot be decoded
    /// - The output image cannot be saved
    pub fn composite(&self, index: usize, token: &Token) -> Result<PathBuf> {
        let Some((base_layer, upper_layers)) = self.layers.split_first() else {
            return Err(invalid_parameter(
                "layers",
                &"[]",
                &"layer list must contain at least a base layer",
            ));
        };

        let base_path = base_layer.resolve(token, self.base)?;
        if !base_path.is_file() {
            return Err(TraitError::MissingLayer { path: base_path });
        }
        let mut canvas = load_rgba(&base_path)?;

        for layer in upper_layers {
            let layer_path = layer.resolve(token, self.base)?;
            if !layer_path.is_file() {
                match self.policy {
                    MissingLayerPolicy::Break => {
                        return Err(TraitError::MissingLayer { path: layer_path });
                    }
                    MissingLayerPolicy::Warn => {
                        log::warn!("Missing layer {}", layer_path.display());
                    }
                    MissingLayerPolicy::Ignore => {}
                }
                continue;
            }

            let overlay = load_rgba(&layer_path)?;
            imageops::overlay(&mut canvas, &overlay, 0, 0);
        }

        let output_path = self.output_path(index);
        canvas
            .save_with_format(&output_path, ImageFormat::Png)
            .map_err(|e| TraitError::ImageExport {
                path: output_path.clone(),
                source: e,
            })?;
        log::debug!("Wrote {}", output_path.display());

        Ok(output_path)
    }
}

fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path).with_path(path)?;
    Ok(image.to_rgba8())
}
