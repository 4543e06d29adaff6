//! File based builders around [`pipeline`](crate::pipeline).

pub mod evaluate;
pub mod hide;
pub mod unveil;
