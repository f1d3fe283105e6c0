//! Classifier seam and the scoped session that owns a loaded classifier

use crate::inference::preprocessing::{load_image, preprocess_image};
use crate::interpretation::prediction::{Prediction, rank_scores};
use crate::io::error::{AnalysisError, Result};
use crate::taxonomy::Taxonomy;
use image::DynamicImage;
use ndarray::Array4;
use std::path::Path;
use tracing::{debug, info};

/// Everything a classifier receives for one image
#[derive(Debug, Clone, Copy)]
pub struct ClassifierInput<'a> {
    /// File the image was decoded from
    pub source: &'a Path,
    /// Preprocessed input tensor, shape `(1, side, side, channels)`
    pub tensor: &'a Array4<f32>,
}

/// An image classifier producing one score per taxonomy category
pub trait Classifier {
    /// Score an image, returning scores in taxonomy order
    ///
    /// # Errors
    ///
    /// Returns an error if the classifier cannot score this input
    fn classify(&mut self, input: &ClassifierInput<'_>) -> Result<Vec<f64>>;

    /// Free resources held by the classifier
    ///
    /// Called exactly once, when the owning session is torn down.
    fn release(&mut self) {}
}

/// Owns a loaded classifier for the duration of a batch
///
/// The classifier is released when the session is dropped or closed.
pub struct ModelSession<C: Classifier> {
    classifier: C,
    taxonomy: Taxonomy,
    classified: usize,
    released: bool,
}

impl<C: Classifier> ModelSession<C> {
    /// Acquire a classifier through `loader`
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::ModelLoad`] if the loader fails
    pub fn open<F>(loader: F) -> Result<Self>
    where
        F: FnOnce() -> Result<C>,
    {
        let classifier = loader().map_err(|e| match e {
            AnalysisError::ModelLoad { .. } => e,
            other => AnalysisError::ModelLoad {
                reason: other.to_string(),
            },
        })?;
        info!("Model loaded successfully");

        Ok(Self {
            classifier,
            taxonomy: Taxonomy::builtin(),
            classified: 0,
            released: false,
        })
    }

    /// Use a different taxonomy for labelling scores
    #[must_use]
    pub fn with_taxonomy(mut self, taxonomy: Taxonomy) -> Self {
        self.taxonomy = taxonomy;
        self
    }

    /// Taxonomy used for labelling scores
    pub const fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Number of images classified so far
    pub const fn classified(&self) -> usize {
        self.classified
    }

    /// Classify a decoded image and return its ranked predictions
    ///
    /// # Errors
    ///
    /// Returns an error if the classifier fails on this image
    pub fn classify(&mut self, source: &Path, image: &DynamicImage) -> Result<Vec<Prediction>> {
        let tensor = preprocess_image(image);
        let input = ClassifierInput {
            source,
            tensor: &tensor,
        };
        let scores = self.classifier.classify(&input)?;
        self.classified += 1;

        debug!(
            source = %source.display(),
            scores = scores.len(),
            classified = self.classified,
            "Classified image"
        );
        Ok(rank_scores(&self.taxonomy, &scores))
    }

    /// Decode, preprocess and classify an image file
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be decoded or classified
    pub fn analyze_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Vec<Prediction>> {
        let path = path.as_ref();
        let image = load_image(path)?;
        self.classify(path, &image)
    }

    /// Release the classifier now instead of at drop
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if !self.released {
            self.classifier.release();
            self.released = true;
            debug!(classified = self.classified, "Released classifier");
        }
    }
}

impl<C: Classifier> Drop for ModelSession<C> {
    fn drop(&mut self) {
        self.release();
    }
}
