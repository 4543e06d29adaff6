use log::debug;

use crate::array::{Coord, Shape};
use crate::error::{DctError, Result};
use crate::strategy::{PlaneOrder, Strategy};

/// Ordered coordinates used for embedding and extraction.
pub type CoordinateSet = Vec<Coord>;

/// Number of coordinates `strategy` can address inside `shape`.
pub fn capacity(shape: Shape, strategy: Strategy, p: usize, q: usize) -> Result<usize> {
    Ok(strategy.plane_capacity(shape.rows(), shape.cols(), p, q)? * shape.channels())
}

/// Picks the first `count` coordinates of `strategy` for a coefficient array of `shape`.
///
/// Plane positions are expanded over the channel axis in ascending channel
/// order, so element `i` of a flattened `(h, w, c)` secret is written to the
/// same channel of the cover. The result is a pure function of the arguments.
pub fn select(
    shape: Shape,
    strategy: Strategy,
    count: usize,
    p: usize,
    q: usize,
) -> Result<CoordinateSet> {
    let available = capacity(shape, strategy, p, q)?;
    if count > available {
        return Err(DctError::CapacityError {
            requested: count,
            available,
        });
    }

    let channels = shape.channels();
    let coords: CoordinateSet = strategy
        .plane_order(shape.rows(), shape.cols(), p, q)?
        .into_iter()
        .flat_map(|(row, col)| (0..channels).map(move |channel| Coord::new(row, col, channel)))
        .take(count)
        .collect();

    debug!("{strategy} selected {} of {available} coefficients in {shape}", coords.len());

    Ok(coords)
}
