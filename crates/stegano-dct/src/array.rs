//! Dense real valued arrays of rank 1, 2 or 3.
//!
//! A [`SampleArray`] holds either pixel intensities or transform coefficients.
//! Storage is row-major with the channel axis varying fastest, which is the
//! `(height, width, channels)` layout of a decoded colour image.

use crate::error::{DctError, Result};

/// Dimensions of a [`SampleArray`].
///
/// Every shape is viewed as `rows × cols × channels`; a rank 1 shape of length
/// `n` is `1 × n × 1` and a rank 2 shape is `rows × cols × 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rank: usize,
    rows: usize,
    cols: usize,
    channels: usize,
}

impl Shape {
    pub fn d1(len: usize) -> Result<Self> {
        Self::checked(1, 1, len, 1)
    }

    pub fn d2(rows: usize, cols: usize) -> Result<Self> {
        Self::checked(2, rows, cols, 1)
    }

    pub fn d3(rows: usize, cols: usize, channels: usize) -> Result<Self> {
        Self::checked(3, rows, cols, channels)
    }

    /// Builds a shape from an axis list of length 1 to 3.
    pub fn from_dims(dims: &[usize]) -> Result<Self> {
        match *dims {
            [n] => Self::d1(n),
            [h, w] => Self::d2(h, w),
            [h, w, c] => Self::d3(h, w, c),
            _ => Err(DctError::shape(format!(
                "rank {} is not supported, only 1 to 3 axes are",
                dims.len()
            ))),
        }
    }

    fn checked(rank: usize, rows: usize, cols: usize, channels: usize) -> Result<Self> {
        if rows == 0 || cols == 0 || channels == 0 {
            return Err(DctError::shape(format!(
                "axis of length zero in {rows}x{cols}x{channels}"
            )));
        }

        Ok(Self {
            rank,
            rows,
            cols,
            channels,
        })
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// The axis lengths, as many as the rank.
    pub fn dims(&self) -> Vec<usize> {
        match self.rank {
            1 => vec![self.cols],
            2 => vec![self.rows, self.cols],
            _ => vec![self.rows, self.cols, self.channels],
        }
    }

    /// Number of positions on the `rows × cols` frequency plane.
    pub fn plane_len(&self) -> usize {
        self.rows * self.cols
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.rows * self.cols * self.channels
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols && coord.channel < self.channels
    }

    /// Flat storage offset of a coordinate, `None` when it lies outside.
    pub fn offset(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then(|| (coord.row * self.cols + coord.col) * self.channels + coord.channel)
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dims: Vec<String> = self.dims().iter().map(ToString::to_string).collect();
        write!(f, "{}", dims.join("x"))
    }
}

/// Integer position inside a [`SampleArray`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
    pub channel: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize, channel: usize) -> Self {
        Self { row, col, channel }
    }

    pub fn plane(row: usize, col: usize) -> Self {
        Self::new(row, col, 0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleArray {
    shape: Shape,
    data: Vec<f64>,
}

impl SampleArray {
    pub fn zeros(shape: Shape) -> Self {
        Self {
            shape,
            data: vec![0.0; shape.len()],
        }
    }

    pub fn from_vec(shape: Shape, data: Vec<f64>) -> Result<Self> {
        if data.len() != shape.len() {
            return Err(DctError::shape(format!(
                "{} values do not fill a {shape} array",
                data.len()
            )));
        }

        Ok(Self { shape, data })
    }

    /// A rank 1 array.
    pub fn from_samples(samples: &[f64]) -> Result<Self> {
        Self::from_vec(Shape::d1(samples.len())?, samples.to_vec())
    }

    /// A rank 2 array from nested rows, all rows must have the same length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let shape = Shape::d2(height, width)?;

        let mut data = Vec::with_capacity(shape.len());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(DctError::shape(format!(
                    "row {i} has {} elements, expected {width}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }

        Ok(Self { shape, data })
    }

    /// A rank 3 array from equally shaped rank 2 planes, one plane per channel.
    pub fn from_planes(planes: &[SampleArray]) -> Result<Self> {
        let first = planes
            .first()
            .ok_or_else(|| DctError::shape("no planes to stack"))?;
        if first.shape.rank() != 2 {
            return Err(DctError::shape("only rank 2 planes can be stacked"));
        }
        let shape = Shape::d3(first.shape.rows(), first.shape.cols(), planes.len())?;

        if let Some(odd) = planes.iter().find(|p| p.shape != first.shape) {
            return Err(DctError::shape(format!(
                "plane {} does not match {}",
                odd.shape, first.shape
            )));
        }

        let mut data = vec![0.0; shape.len()];
        for (channel, plane) in planes.iter().enumerate() {
            for (i, v) in plane.data.iter().enumerate() {
                data[i * shape.channels() + channel] = *v;
            }
        }

        Ok(Self { shape, data })
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    pub fn get(&self, coord: Coord) -> Option<f64> {
        self.shape.offset(coord).map(|i| self.data[i])
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut f64> {
        self.shape.offset(coord).map(move |i| &mut self.data[i])
    }

    /// Copies one channel out as a rank 2 array.
    pub fn plane(&self, channel: usize) -> Result<SampleArray> {
        let channels = self.shape.channels();
        if channel >= channels {
            return Err(DctError::shape(format!(
                "channel {channel} is outside of {}",
                self.shape
            )));
        }

        let data = self
            .data
            .iter()
            .skip(channel)
            .step_by(channels)
            .copied()
            .collect();

        SampleArray::from_vec(Shape::d2(self.shape.rows(), self.shape.cols())?, data)
    }

    /// Nested rows of a rank 1 or rank 2 array.
    pub fn to_rows(&self) -> Result<Vec<Vec<f64>>> {
        if self.shape.rank() == 3 {
            return Err(DctError::shape("rank 3 arrays have no row view"));
        }

        Ok(self
            .data
            .chunks(self.shape.cols())
            .map(<[f64]>::to_vec)
            .collect())
    }

    /// Element wise `a * self + b * other`.
    pub fn linear_combination(&self, a: f64, other: &SampleArray, b: f64) -> Result<SampleArray> {
        if self.shape != other.shape {
            return Err(DctError::shape(format!(
                "cannot combine {} with {}",
                self.shape, other.shape
            )));
        }

        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(x, y)| a * x + b * y)
            .collect();

        Ok(SampleArray {
            shape: self.shape,
            data,
        })
    }

    /// Largest absolute element wise difference, `None` for different shapes.
    pub fn max_abs_diff(&self, other: &SampleArray) -> Option<f64> {
        (self.shape == other.shape).then(|| {
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(x, y)| (x - y).abs())
                .fold(0.0, f64::max)
        })
    }
}
