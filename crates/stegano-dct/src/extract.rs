use crate::array::{Coord, SampleArray};
use crate::embed::check_coords;
use crate::error::{DctError, Result};
use crate::params::check_alpha;

/// Reads secret coefficients back out of stego coefficients.
///
/// With the untouched `cover` the exact blend is undone:
/// `(stego[c] - cover[c]) / alpha`. Without it (a blind receiver) the cover
/// coefficient is assumed to be negligible and `stego[c] / alpha` is returned,
/// which is only a rough approximation outside of the high frequency band.
///
/// One value per coordinate is returned, in coordinate order.
pub fn extract(
    stego: &SampleArray,
    coords: &[Coord],
    alpha: f64,
    cover: Option<&SampleArray>,
) -> Result<Vec<f64>> {
    let alpha = check_alpha(alpha)?;
    check_coords(stego, coords)?;

    if let Some(cover) = cover {
        if cover.shape() != stego.shape() {
            return Err(DctError::shape(format!(
                "cover {} does not match stego {}",
                cover.shape(),
                stego.shape()
            )));
        }
    }

    let read = |array: &SampleArray, coord: &Coord| array.get(*coord).unwrap_or_default();

    Ok(coords
        .iter()
        .map(|coord| {
            let z = read(stego, coord);
            match cover {
                Some(cover) => (z - read(cover, coord)) / alpha,
                None => z / alpha,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::Shape;
    use crate::embed::embed;

    #[test]
    fn non_blind_undoes_the_blend() {
        let cover = SampleArray::from_rows(&[[100.0, -3.0], [7.5, 42.0]]).unwrap();
        let secret = SampleArray::from_samples(&[12.0, -8.0, 0.25]).unwrap();
        let coords = [Coord::plane(1, 1), Coord::plane(0, 0), Coord::plane(0, 1)];

        let stego = embed(&cover, &secret, &coords, 0.05).unwrap();
        let recovered = extract(&stego, &coords, 0.05, Some(&cover)).unwrap();

        for (r, s) in recovered.iter().zip(secret.as_slice()) {
            assert!((r - s).abs() < 1e-9, "{r} vs {s}");
        }
    }

    #[test]
    fn blind_divides_by_alpha() {
        let stego = SampleArray::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let coords = [Coord::plane(1, 0), Coord::plane(0, 1)];
        let recovered = extract(&stego, &coords, 0.5, None).unwrap();
        assert_eq!(recovered, vec![6.0, 4.0]);
    }

    #[test]
    fn blind_is_exact_on_a_zero_cover() {
        let cover = SampleArray::zeros(Shape::d2(4, 4).unwrap());
        let secret = SampleArray::from_samples(&[5.0, 6.0]).unwrap();
        let coords = [Coord::plane(3, 3), Coord::plane(2, 3)];
        let stego = embed(&cover, &secret, &coords, 0.2).unwrap();

        let recovered = extract(&stego, &coords, 0.2, None).unwrap();
        assert!((recovered[0] - 5.0).abs() < 1e-12);
        assert!((recovered[1] - 6.0).abs() < 1e-12);
    }

    #[test]
    fn zero_alpha_is_rejected() {
        let stego = SampleArray::zeros(Shape::d2(2, 2).unwrap());
        let err = extract(&stego, &[Coord::plane(0, 0)], 0.0, None).unwrap_err();
        assert!(matches!(err, DctError::AlphaError(a) if a == 0.0));
    }

    #[test]
    fn mismatching_cover_is_rejected() {
        let stego = SampleArray::zeros(Shape::d2(2, 2).unwrap());
        let cover = SampleArray::zeros(Shape::d2(2, 3).unwrap());
        assert!(matches!(
            extract(&stego, &[Coord::plane(0, 0)], 0.1, Some(&cover)),
            Err(DctError::ShapeError(_))
        ));
    }

    #[test]
    fn coordinates_outside_are_rejected() {
        let stego = SampleArray::zeros(Shape::d2(2, 2).unwrap());
        assert!(extract(&stego, &[Coord::plane(5, 0)], 0.1, None).is_err());
    }
}
