use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::Result, logic::spots};

/// The item returned once per spot.
pub const PLACEHOLDER_ITEM: &str = "Handful of dirt";

/// A rectangular plot of ground. Dimensions are stored as given; negative or
/// zero values are accepted and simply yield no spots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Plot {
    width: f64,
    height: f64,
}

impl Plot {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Number of whole spots covering the plot, `ceil(width * height)`, never below zero.
    pub fn spot_count(&self) -> Result<usize> {
        spots::spot_count(self.width, self.height)
    }

    /// One placeholder per spot.
    pub fn items(&self) -> Result<Vec<String>> {
        self.spot_count().map(spots::fill_spots)
    }
}
