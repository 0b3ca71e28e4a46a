use parterre::entities::{Gene, ItemKind};
use parterre::geometry::Shape;
use parterre::geometry::geo_traits::Region;
use parterre::geometry::primitives::Point;
use rand::Rng;
use rand::distr::{Distribution, Uniform};

use crate::error::EGAError;

/// Samples points uniformly inside a [`Shape`] by drawing from its bounding box
/// and rejecting points outside the admissible region.
///
/// Works for non-convex domains (frames, annuli), at the cost of wasted draws:
/// the expected number of draws per accepted point is `1 / shape.sampling_efficiency()`.
#[derive(Clone, Debug)]
pub struct RejectionSampler<'a> {
    shape: &'a Shape,
    x_distr: Uniform<f64>,
    y_distr: Uniform<f64>,
    max_attempts: usize,
}

impl<'a> RejectionSampler<'a> {
    pub fn new(shape: &'a Shape, max_attempts: usize) -> Self {
        assert!(max_attempts > 0);
        let bbox = shape.bbox();
        let x_distr = Uniform::new(bbox.x_min, bbox.x_max)
            .expect("bounding box of a valid shape should have a positive width");
        let y_distr = Uniform::new(bbox.y_min, bbox.y_max)
            .expect("bounding box of a valid shape should have a positive height");
        Self {
            shape,
            x_distr,
            y_distr,
            max_attempts,
        }
    }

    /// Draws a point inside the shape.
    /// Fails with [`EGAError::SamplingExhausted`] after `max_attempts` rejected draws.
    pub fn sample(&self, rng: &mut impl Rng) -> Result<Point, EGAError> {
        for _ in 0..self.max_attempts {
            let p = Point(self.x_distr.sample(rng), self.y_distr.sample(rng));
            if self.shape.contains(p) {
                return Ok(p);
            }
        }
        Err(EGAError::SamplingExhausted {
            shape: self.shape.kind(),
            attempts: self.max_attempts,
        })
    }

    /// Places an item of the given kind at a freshly sampled position.
    /// Clearance to other items is not considered here, it is left to the fitness evaluation.
    pub fn sample_gene(&self, kind: &ItemKind, rng: &mut impl Rng) -> Result<Gene, EGAError> {
        let position = self.sample(rng)?;
        Ok(Gene::new(position, kind))
    }

    pub fn shape(&self) -> &Shape {
        self.shape
    }
}
