use std::collections::HashSet;

use crate::array::{Coord, SampleArray};
use crate::error::{DctError, Result};
use crate::params::check_alpha;

/// Blends secret coefficients into a copy of the cover coefficients.
///
/// For every `i`, `cover[coords[i]]` becomes `cover[coords[i]] + alpha * secret[i]`,
/// where `secret[i]` is the `i`-th element of the flattened secret. All other
/// coefficients are copied unchanged; neither input is modified.
pub fn embed(
    cover: &SampleArray,
    secret: &SampleArray,
    coords: &[Coord],
    alpha: f64,
) -> Result<SampleArray> {
    let alpha = check_alpha(alpha)?;
    if secret.len() < coords.len() {
        return Err(DctError::shape(format!(
            "{} coordinates but only {} secret coefficients",
            coords.len(),
            secret.len()
        )));
    }
    check_coords(cover, coords)?;

    let mut stego = cover.clone();
    for (coord, s) in coords.iter().zip(secret.as_slice()) {
        if let Some(c) = stego.get_mut(*coord) {
            *c += alpha * s;
        }
    }

    Ok(stego)
}

/// All coordinates inside `array` and none of them twice.
pub(crate) fn check_coords(array: &SampleArray, coords: &[Coord]) -> Result<()> {
    let shape = array.shape();
    let mut seen = HashSet::with_capacity(coords.len());
    for coord in coords {
        if !shape.contains(*coord) {
            return Err(DctError::shape(format!("{coord:?} lies outside of {shape}")));
        }
        if !seen.insert(coord) {
            return Err(DctError::shape(format!("{coord:?} is selected twice")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::Shape;

    fn cover() -> SampleArray {
        SampleArray::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap()
    }

    #[test]
    fn only_selected_coefficients_change() {
        let secret = SampleArray::from_samples(&[10.0, 4.0]).unwrap();
        let coords = [Coord::plane(1, 2), Coord::plane(0, 0)];
        let stego = embed(&cover(), &secret, &coords, 0.5).unwrap();

        assert_eq!(
            stego.to_rows().unwrap(),
            vec![vec![3.0, 2.0, 3.0], vec![4.0, 5.0, 11.0]]
        );
    }

    #[test]
    fn inputs_are_left_alone() {
        let cover = cover();
        let secret = SampleArray::from_samples(&[10.0]).unwrap();
        let before = cover.clone();
        let _ = embed(&cover, &secret, &[Coord::plane(0, 1)], 0.1).unwrap();
        assert_eq!(cover, before);
    }

    #[test]
    fn extra_secret_coefficients_are_ignored() {
        let secret = SampleArray::from_samples(&[1.0, 2.0, 3.0]).unwrap();
        let stego = embed(&cover(), &secret, &[Coord::plane(0, 0)], 1.0).unwrap();
        assert_eq!(stego.as_slice()[0], 2.0);
        assert_eq!(&stego.as_slice()[1..], &cover().as_slice()[1..]);
    }

    #[test]
    fn short_secret_is_rejected() {
        let secret = SampleArray::from_samples(&[1.0]).unwrap();
        let coords = [Coord::plane(0, 0), Coord::plane(0, 1)];
        assert!(matches!(
            embed(&cover(), &secret, &coords, 0.1),
            Err(DctError::ShapeError(_))
        ));
    }

    #[test]
    fn out_of_bounds_and_duplicates_are_rejected() {
        let secret = SampleArray::zeros(Shape::d1(2).unwrap());
        let outside = [Coord::plane(2, 0)];
        let twice = [Coord::plane(1, 1), Coord::plane(1, 1)];
        assert!(embed(&cover(), &secret, &outside, 0.1).is_err());
        assert!(embed(&cover(), &secret, &twice, 0.1).is_err());
        assert!(embed(&cover(), &secret, &[Coord::new(0, 0, 1)], 0.1).is_err());
    }

    #[test]
    fn invalid_alpha_is_rejected() {
        let secret = SampleArray::from_samples(&[1.0]).unwrap();
        assert!(matches!(
            embed(&cover(), &secret, &[Coord::plane(0, 0)], 0.0),
            Err(DctError::AlphaError(_))
        ));
    }
}
