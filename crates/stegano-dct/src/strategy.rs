//! Coefficient placement strategies.
//!
//! Every strategy orders the positions of a `rows × cols` frequency plane.
//! The selector expands that order over the channel axis, see
//! [`select`](crate::select::select).

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use enum_dispatch::enum_dispatch;

use crate::error::{DctError, Result};

/// Ordering of frequency plane positions.
#[enum_dispatch]
pub trait PlaneOrder {
    /// All positions this strategy can address, in embedding order.
    fn plane_order(
        &self,
        rows: usize,
        cols: usize,
        p: usize,
        q: usize,
    ) -> Result<Vec<(usize, usize)>>;

    /// Number of positions [`plane_order`](PlaneOrder::plane_order) yields.
    fn plane_capacity(&self, rows: usize, cols: usize, _p: usize, _q: usize) -> Result<usize> {
        Ok(rows * cols)
    }
}

/// Positions closest to the geometric centre first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Center;

/// Positions with the highest `row + col` first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HighFreq;

/// Centres of the cells of a `p × q` grid, row by row.
///
/// Always the centre `i * stride + stride / 2`, never the cell corner
/// `(i + 1) * stride - 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Scattered;

/// JPEG style zigzag walk starting at the DC position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ZigZag;

/// Positions closest to a target band of the normalised radial frequency first.
///
/// The band sits at `p / (p + q)`, or in the middle when both are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FrequencyWeighted;

#[enum_dispatch(PlaneOrder)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Center,
    HighFreq,
    Scattered,
    ZigZag,
    FrequencyWeighted,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Center(Center),
        Strategy::HighFreq(HighFreq),
        Strategy::Scattered(Scattered),
        Strategy::ZigZag(ZigZag),
        Strategy::FrequencyWeighted(FrequencyWeighted),
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Center(_) => "center",
            Strategy::HighFreq(_) => "high_freq",
            Strategy::Scattered(_) => "scattered",
            Strategy::ZigZag(_) => "zigzag",
            Strategy::FrequencyWeighted(_) => "frequency_weighted",
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Center(Center)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = DctError;

    fn from_str(s: &str) -> Result<Self> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| DctError::UnknownStrategyError(s.to_string()))
    }
}

fn row_major(rows: usize, cols: usize) -> Vec<(usize, usize)> {
    (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (r, c)))
        .collect()
}

impl PlaneOrder for Center {
    fn plane_order(
        &self,
        rows: usize,
        cols: usize,
        _p: usize,
        _q: usize,
    ) -> Result<Vec<(usize, usize)>> {
        // doubled coordinates keep the centre of even sized axes integral
        let (cr, cc) = (rows as i64 - 1, cols as i64 - 1);
        let mut order = row_major(rows, cols);
        order.sort_by_key(|&(r, c)| {
            let dr = 2 * r as i64 - cr;
            let dc = 2 * c as i64 - cc;
            dr * dr + dc * dc
        });
        Ok(order)
    }
}

impl PlaneOrder for HighFreq {
    fn plane_order(
        &self,
        rows: usize,
        cols: usize,
        _p: usize,
        _q: usize,
    ) -> Result<Vec<(usize, usize)>> {
        let mut order = row_major(rows, cols);
        order.sort_by_key(|&(r, c)| (Reverse(r + c), r));
        Ok(order)
    }
}

impl Scattered {
    fn lattice(len: usize, stride: usize) -> impl Iterator<Item = usize> {
        (0..)
            .map(move |i| i * stride + stride / 2)
            .take_while(move |pos| *pos < len)
    }

    fn check_strides(p: usize, q: usize) -> Result<()> {
        if p == 0 || q == 0 {
            return Err(DctError::ParameterError(format!(
                "scattered placement needs non zero strides, got p={p} q={q}"
            )));
        }
        Ok(())
    }
}

impl PlaneOrder for Scattered {
    fn plane_order(
        &self,
        rows: usize,
        cols: usize,
        p: usize,
        q: usize,
    ) -> Result<Vec<(usize, usize)>> {
        Self::check_strides(p, q)?;
        Ok(Self::lattice(rows, p)
            .flat_map(|r| Self::lattice(cols, q).map(move |c| (r, c)))
            .collect())
    }

    fn plane_capacity(&self, rows: usize, cols: usize, p: usize, q: usize) -> Result<usize> {
        Self::check_strides(p, q)?;
        Ok(Self::lattice(rows, p).count() * Self::lattice(cols, q).count())
    }
}

impl PlaneOrder for ZigZag {
    fn plane_order(
        &self,
        rows: usize,
        cols: usize,
        _p: usize,
        _q: usize,
    ) -> Result<Vec<(usize, usize)>> {
        if rows == 0 || cols == 0 {
            return Ok(Vec::new());
        }

        let mut order = Vec::with_capacity(rows * cols);
        for diagonal in 0..rows + cols - 1 {
            let first = diagonal.saturating_sub(cols - 1);
            let last = diagonal.min(rows - 1);
            if diagonal % 2 == 1 {
                order.extend((first..=last).map(|r| (r, diagonal - r)));
            } else {
                order.extend((first..=last).rev().map(|r| (r, diagonal - r)));
            }
        }
        Ok(order)
    }
}

impl FrequencyWeighted {
    fn target_band(p: usize, q: usize) -> f64 {
        if p + q == 0 {
            0.5
        } else {
            p as f64 / (p + q) as f64
        }
    }
}

impl PlaneOrder for FrequencyWeighted {
    fn plane_order(
        &self,
        rows: usize,
        cols: usize,
        p: usize,
        q: usize,
    ) -> Result<Vec<(usize, usize)>> {
        let target = Self::target_band(p, q);
        let radial = |r: usize, c: usize| {
            let fr = r as f64 / rows as f64;
            let fc = c as f64 / cols as f64;
            (fr * fr + fc * fc).sqrt() / std::f64::consts::SQRT_2
        };

        let mut keyed: Vec<(f64, (usize, usize))> = row_major(rows, cols)
            .into_iter()
            .map(|(r, c)| ((radial(r, c) - target).abs(), (r, c)))
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

        Ok(keyed.into_iter().map(|(_, pos)| pos).collect())
    }
}
