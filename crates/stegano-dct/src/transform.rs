//! Orthonormal DCT-II and its DCT-III inverse in one, two and three dimensions.
//!
//! ```text
//! X[k] = sqrt(2/n) * c(k) * Σ x[i] * cos((2i+1)kπ / 2n)
//! x[i] = sqrt(2/n) * Σ c(k) * X[k] * cos((2i+1)kπ / 2n)
//! ```
//!
//! with `c(0) = sqrt(1/2)` and `c(k) = 1` otherwise. The 2-D transform runs the
//! 1-D transform over every row and then over every column, the 3-D transform
//! runs the 2-D transform independently on every channel plane.
//!
//! The kernel is the direct `O(n²)` sum over a precomputed cosine table. With
//! the `parallel` feature rows and planes are spread over the rayon pool; every
//! single sequence is still summed by the same sequential loop, so the output
//! is bit for bit the same.

use std::f64::consts::PI;

use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::array::SampleArray;
use crate::error::{DctError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Inverse,
}

/// Cosine table and normalisation factors for one transform length.
#[derive(Debug, Clone)]
pub struct DctPlan {
    n: usize,
    /// `cos[k * n + i] = cos((2i+1)kπ / 2n)`
    cos: Vec<f64>,
    /// `sqrt(2/n) * c(k)`
    scale: Vec<f64>,
}

impl DctPlan {
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(DctError::shape("cannot transform an empty sequence"));
        }

        let nf = n as f64;
        let mut cos = Vec::with_capacity(n * n);
        for k in 0..n {
            for i in 0..n {
                cos.push(((2 * i + 1) as f64 * k as f64 * PI / (2.0 * nf)).cos());
            }
        }

        let norm = (2.0 / nf).sqrt();
        let scale = (0..n)
            .map(|k| if k == 0 { norm * 0.5_f64.sqrt() } else { norm })
            .collect();

        Ok(Self { n, cos, scale })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// DCT-II of `input` into `output`, both of length `n`.
    pub fn forward(&self, input: &[f64], output: &mut [f64]) {
        debug_assert_eq!(input.len(), self.n);
        debug_assert_eq!(output.len(), self.n);

        for (k, out) in output.iter_mut().enumerate() {
            let basis = &self.cos[k * self.n..(k + 1) * self.n];
            let sum: f64 = input.iter().zip(basis).map(|(x, c)| x * c).sum();
            *out = self.scale[k] * sum;
        }
    }

    /// DCT-III (inverse) of `input` into `output`, both of length `n`.
    pub fn inverse(&self, input: &[f64], output: &mut [f64]) {
        debug_assert_eq!(input.len(), self.n);
        debug_assert_eq!(output.len(), self.n);

        for (i, out) in output.iter_mut().enumerate() {
            let mut sum = 0.0;
            for (k, coeff) in input.iter().enumerate() {
                sum += self.scale[k] * coeff * self.cos[k * self.n + i];
            }
            *out = sum;
        }
    }

    fn apply(&self, direction: Direction, row: &mut [f64], scratch: &mut [f64]) {
        match direction {
            Direction::Forward => self.forward(row, scratch),
            Direction::Inverse => self.inverse(row, scratch),
        }
        row.copy_from_slice(scratch);
    }
}

pub fn dct_1d(samples: &[f64]) -> Result<Vec<f64>> {
    let plan = DctPlan::new(samples.len())?;
    let mut out = vec![0.0; samples.len()];
    plan.forward(samples, &mut out);
    Ok(out)
}

pub fn idct_1d(coefficients: &[f64]) -> Result<Vec<f64>> {
    let plan = DctPlan::new(coefficients.len())?;
    let mut out = vec![0.0; coefficients.len()];
    plan.inverse(coefficients, &mut out);
    Ok(out)
}

pub fn dct_2d(input: &SampleArray) -> Result<SampleArray> {
    expect_rank(input, 2, "dct_2d")?;
    transform_plane(input, Direction::Forward)
}

pub fn idct_2d(input: &SampleArray) -> Result<SampleArray> {
    expect_rank(input, 2, "idct_2d")?;
    transform_plane(input, Direction::Inverse)
}

pub fn dct_3d(input: &SampleArray) -> Result<SampleArray> {
    expect_rank(input, 3, "dct_3d")?;
    transform_slices(input, Direction::Forward)
}

pub fn idct_3d(input: &SampleArray) -> Result<SampleArray> {
    expect_rank(input, 3, "idct_3d")?;
    transform_slices(input, Direction::Inverse)
}

/// Forward transform matching the rank of `input`.
pub fn dct(input: &SampleArray) -> Result<SampleArray> {
    match input.shape().rank() {
        1 => SampleArray::from_vec(input.shape(), dct_1d(input.as_slice())?),
        2 => dct_2d(input),
        _ => dct_3d(input),
    }
}

/// Inverse transform matching the rank of `input`.
pub fn idct(input: &SampleArray) -> Result<SampleArray> {
    match input.shape().rank() {
        1 => SampleArray::from_vec(input.shape(), idct_1d(input.as_slice())?),
        2 => idct_2d(input),
        _ => idct_3d(input),
    }
}

fn expect_rank(input: &SampleArray, rank: usize, op: &str) -> Result<()> {
    let shape = input.shape();
    if shape.rank() != rank {
        return Err(DctError::shape(format!(
            "{op} needs a rank {rank} array, got {shape}"
        )));
    }
    Ok(())
}

fn transform_plane(input: &SampleArray, direction: Direction) -> Result<SampleArray> {
    let shape = input.shape();
    let (height, width) = (shape.rows(), shape.cols());
    debug!("{direction:?} 2-D transform of {shape}");

    let row_plan = DctPlan::new(width)?;
    let col_plan = DctPlan::new(height)?;

    let mut data = input.as_slice().to_vec();
    transform_rows(&mut data, &row_plan, direction);

    let mut columns = transpose(&data, height, width);
    transform_rows(&mut columns, &col_plan, direction);

    SampleArray::from_vec(shape, transpose(&columns, width, height))
}

fn transform_slices(input: &SampleArray, direction: Direction) -> Result<SampleArray> {
    let channels = input.shape().channels();
    debug!("{direction:?} 3-D transform over {channels} slices");

    #[cfg(feature = "parallel")]
    let planes = (0..channels)
        .into_par_iter()
        .map(|c| transform_plane(&input.plane(c)?, direction))
        .collect::<Result<Vec<_>>>()?;

    #[cfg(not(feature = "parallel"))]
    let planes = (0..channels)
        .map(|c| transform_plane(&input.plane(c)?, direction))
        .collect::<Result<Vec<_>>>()?;

    SampleArray::from_planes(&planes)
}

/// Transforms every `plan.len()` long row of a row-major buffer in place.
fn transform_rows(data: &mut [f64], plan: &DctPlan, direction: Direction) {
    #[cfg(feature = "parallel")]
    data.par_chunks_mut(plan.len()).for_each_init(
        || vec![0.0; plan.len()],
        |scratch, row| plan.apply(direction, row, scratch),
    );

    #[cfg(not(feature = "parallel"))]
    {
        let mut scratch = vec![0.0; plan.len()];
        for row in data.chunks_mut(plan.len()) {
            plan.apply(direction, row, &mut scratch);
        }
    }
}

fn transpose(data: &[f64], rows: usize, cols: usize) -> Vec<f64> {
    let mut out = vec![0.0; data.len()];
    for r in 0..rows {
        for c in 0..cols {
            out[c * rows + r] = data[r * cols + c];
        }
    }
    out
}

/// Convenience for callers holding nested rows.
pub fn dct_2d_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Vec<Vec<f64>>> {
    dct_2d(&SampleArray::from_rows(rows)?)?.to_rows()
}

/// Convenience for callers holding nested rows.
pub fn idct_2d_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Vec<Vec<f64>>> {
    idct_2d(&SampleArray::from_rows(rows)?)?.to_rows()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::{Coord, Shape};

    const EPS: f64 = 1e-9;

    fn ramp(shape: Shape) -> SampleArray {
        let data = (0..shape.len())
            .map(|i| ((i * 37 + 11) % 256) as f64 - 17.5)
            .collect();
        SampleArray::from_vec(shape, data).unwrap()
    }

    fn assert_close(a: &[f64], b: &[f64], eps: f64) {
        assert_eq!(a.len(), b.len());
        for (i, (x, y)) in a.iter().zip(b).enumerate() {
            assert!((x - y).abs() <= eps, "element {i}: {x} vs {y}");
        }
    }

    #[test]
    fn dc_of_constant_sequence() {
        // a constant sequence has all energy in X[0] = sqrt(n) * v
        let x = vec![3.0; 16];
        let coeffs = dct_1d(&x).unwrap();
        assert!((coeffs[0] - 12.0).abs() < EPS);
        assert!(coeffs[1..].iter().all(|c| c.abs() < EPS));
    }

    #[test]
    fn single_element_sequence_is_identity() {
        assert_close(&dct_1d(&[42.0]).unwrap(), &[42.0], EPS);
        assert_close(&idct_1d(&[42.0]).unwrap(), &[42.0], EPS);
    }

    #[test]
    fn known_two_point_values() {
        let coeffs = dct_1d(&[1.0, 3.0]).unwrap();
        let s = 0.5_f64.sqrt();
        assert_close(&coeffs, &[4.0 * s, -2.0 * s], EPS);
    }

    #[test]
    fn one_dimensional_round_trip() {
        for n in [1, 2, 3, 7, 8, 31, 64, 256] {
            let x: Vec<f64> = (0..n).map(|i| ((i * 13) % 29) as f64 * 1.5 - 7.0).collect();
            let back = idct_1d(&dct_1d(&x).unwrap()).unwrap();
            assert_close(&back, &x, EPS);
        }
    }

    #[test]
    fn single_impulse_round_trip() {
        let mut x = vec![0.0; 17];
        x[5] = 1.0;
        assert_close(&idct_1d(&dct_1d(&x).unwrap()).unwrap(), &x, EPS);
    }

    #[test]
    fn energy_is_preserved() {
        let x: Vec<f64> = (0..32).map(|i| (i as f64).sin() * 10.0).collect();
        let coeffs = dct_1d(&x).unwrap();
        let e_x: f64 = x.iter().map(|v| v * v).sum();
        let e_c: f64 = coeffs.iter().map(|v| v * v).sum();
        assert!((e_x - e_c).abs() < 1e-8 * e_x);
    }

    #[test]
    fn empty_sequence_is_a_shape_error() {
        assert!(matches!(dct_1d(&[]), Err(DctError::ShapeError(_))));
        assert!(matches!(idct_1d(&[]), Err(DctError::ShapeError(_))));
    }

    #[test]
    fn two_dimensional_round_trip_on_rectangles() {
        for (h, w) in [(1, 1), (1, 9), (8, 8), (5, 12), (33, 16)] {
            let x = ramp(Shape::d2(h, w).unwrap());
            let back = idct_2d(&dct_2d(&x).unwrap()).unwrap();
            assert_close(back.as_slice(), x.as_slice(), EPS);
        }
    }

    #[test]
    fn two_dimensional_is_separable() {
        // row transform, then column transform, done by hand
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        let by_rows: Vec<Vec<f64>> = rows.iter().map(|r| dct_1d(r).unwrap()).collect();
        let mut expected = vec![vec![0.0; 3]; 2];
        for c in 0..3 {
            let col = dct_1d(&[by_rows[0][c], by_rows[1][c]]).unwrap();
            expected[0][c] = col[0];
            expected[1][c] = col[1];
        }

        let got = dct_2d_rows(&rows).unwrap();
        for (g, e) in got.iter().zip(&expected) {
            assert_close(g, e, EPS);
        }
        let back = idct_2d_rows(&got).unwrap();
        for (b, r) in back.iter().zip(&rows) {
            assert_close(b, r, EPS);
        }
    }

    #[test]
    fn ragged_rows_are_a_shape_error() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(matches!(dct_2d_rows(&rows), Err(DctError::ShapeError(_))));
    }

    #[test]
    fn rank_mismatch_is_a_shape_error() {
        let flat = ramp(Shape::d1(8).unwrap());
        let cube = ramp(Shape::d3(4, 4, 3).unwrap());
        assert!(matches!(dct_2d(&flat), Err(DctError::ShapeError(_))));
        assert!(matches!(dct_2d(&cube), Err(DctError::ShapeError(_))));
        assert!(matches!(idct_3d(&flat), Err(DctError::ShapeError(_))));
    }

    #[test]
    fn slices_do_not_mix() {
        let mut x = SampleArray::zeros(Shape::d3(4, 4, 3).unwrap());
        *x.get_mut(Coord::new(1, 2, 1)).unwrap() = 10.0;

        let coeffs = dct_3d(&x).unwrap();
        assert!(coeffs.plane(0).unwrap().as_slice().iter().all(|v| *v == 0.0));
        assert!(coeffs.plane(2).unwrap().as_slice().iter().all(|v| *v == 0.0));

        let expected = dct_2d(&x.plane(1).unwrap()).unwrap();
        assert_close(coeffs.plane(1).unwrap().as_slice(), expected.as_slice(), EPS);
    }

    #[test]
    fn three_dimensional_round_trip() {
        let x = ramp(Shape::d3(12, 10, 3).unwrap());
        let back = idct(&dct(&x).unwrap()).unwrap();
        assert_close(back.as_slice(), x.as_slice(), EPS);
    }

    #[test]
    fn zeros_stay_zero() {
        for shape in [
            Shape::d1(9).unwrap(),
            Shape::d2(6, 4).unwrap(),
            Shape::d3(3, 5, 2).unwrap(),
        ] {
            let zero = SampleArray::zeros(shape);
            assert!(dct(&zero).unwrap().as_slice().iter().all(|v| *v == 0.0));
            assert!(idct(&zero).unwrap().as_slice().iter().all(|v| *v == 0.0));
        }
    }

    #[test]
    fn transform_is_linear() {
        let shape = Shape::d2(7, 6).unwrap();
        let x = ramp(shape);
        let y = SampleArray::from_vec(
            shape,
            (0..shape.len()).map(|i| (i as f64 * 0.7).cos() * 40.0).collect(),
        )
        .unwrap();
        let (a, b) = (2.5, -0.75);

        let lhs = dct(&x.linear_combination(a, &y, b).unwrap()).unwrap();
        let rhs = dct(&x)
            .unwrap()
            .linear_combination(a, &dct(&y).unwrap(), b)
            .unwrap();
        assert_close(lhs.as_slice(), rhs.as_slice(), 1e-9);
    }

    /// Orthonormal 2-D DCT-II of channel `ch`, summed straight from the definition.
    #[cfg(feature = "parallel")]
    fn reference_plane(input: &SampleArray, ch: usize) -> Vec<f64> {
        use std::f64::consts::PI;

        let shape = input.shape();
        let (h, w, channels) = (shape.rows(), shape.cols(), shape.channels());
        let x = input.as_slice();
        let scale = |k: usize, n: usize| {
            let c = if k == 0 { 0.5_f64.sqrt() } else { 1.0 };
            (2.0 / n as f64).sqrt() * c
        };

        let mut out = Vec::with_capacity(h * w);
        for u in 0..h {
            for v in 0..w {
                let mut sum = 0.0;
                for i in 0..h {
                    for j in 0..w {
                        sum += x[(i * w + j) * channels + ch]
                            * ((2 * i + 1) as f64 * u as f64 * PI / (2 * h) as f64).cos()
                            * ((2 * j + 1) as f64 * v as f64 * PI / (2 * w) as f64).cos();
                    }
                }
                out.push(scale(u, h) * scale(v, w) * sum);
            }
        }
        out
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_transforms_match_the_definition() {
        let input = ramp(Shape::d3(12, 10, 3).unwrap());
        let coeffs = dct_3d(&input).unwrap();
        for ch in 0..3 {
            let plane = coeffs.plane(ch).unwrap();
            assert_close(plane.as_slice(), &reference_plane(&input, ch), EPS);
        }
        assert_close(idct_3d(&coeffs).unwrap().as_slice(), input.as_slice(), EPS);

        let wide = ramp(Shape::d2(40, 24).unwrap());
        let coeffs = dct_2d(&wide).unwrap();
        assert_close(coeffs.as_slice(), &reference_plane(&wide, 0), EPS);
        assert_close(idct_2d(&coeffs).unwrap().as_slice(), wide.as_slice(), EPS);
    }
}
