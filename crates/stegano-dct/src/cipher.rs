//! Optional modular exponentiation stage for integer pixel values.
//!
//! A pixel `v` becomes `v^p mod q` and is restored with `v^d mod q` where
//! `d = p⁻¹ mod (q - 1)`. This only inverts for a prime `q`, a `p` coprime to
//! `q - 1` and values below `q`. The modulus is limited to 32 bits. It
//! scrambles the secret, it is no protection.

use crate::array::SampleArray;
use crate::error::{DctError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerCipher {
    p: u64,
    q: u64,
    d: u64,
}

impl PowerCipher {
    pub fn new(p: u64, q: u64) -> Result<Self> {
        if q > u64::from(u32::MAX) {
            return Err(DctError::CipherError(format!("modulus {q} does not fit in 32 bits")));
        }
        if q < 3 || !is_prime(q) {
            return Err(DctError::CipherError(format!("modulus {q} is not an odd prime")));
        }
        let d = mod_inverse(p, q - 1).ok_or_else(|| {
            DctError::CipherError(format!("exponent {p} has no inverse modulo {}", q - 1))
        })?;

        Ok(Self { p, q, d })
    }

    pub fn modulus(&self) -> u64 {
        self.q
    }

    pub fn encrypt_value(&self, v: u64) -> Result<u64> {
        self.check_range(v)?;
        Ok(pow_mod(v, self.p, self.q))
    }

    pub fn decrypt_value(&self, v: u64) -> Result<u64> {
        self.check_range(v)?;
        Ok(pow_mod(v, self.d, self.q))
    }

    /// Encrypts every element, which must be a non negative integer below `q`.
    pub fn encrypt(&self, pixels: &SampleArray) -> Result<SampleArray> {
        self.map(pixels, |v| {
            let rounded = v.round();
            if !v.is_finite() || rounded < 0.0 || (v - rounded).abs() > 1e-6 {
                return Err(DctError::CipherError(format!(
                    "{v} is not a non negative integer pixel value"
                )));
            }
            self.encrypt_value(rounded as u64)
        })
    }

    /// Decrypts recovered values, rounding them into `[0, q)` first.
    pub fn decrypt(&self, recovered: &SampleArray) -> Result<SampleArray> {
        let top = (self.q - 1) as f64;
        self.map(recovered, |v| {
            let v = if v.is_finite() { v.round().clamp(0.0, top) } else { 0.0 };
            self.decrypt_value(v as u64)
        })
    }

    fn map(&self, input: &SampleArray, f: impl Fn(f64) -> Result<u64>) -> Result<SampleArray> {
        let data = input
            .as_slice()
            .iter()
            .map(|v| f(*v).map(|x| x as f64))
            .collect::<Result<Vec<_>>>()?;
        SampleArray::from_vec(input.shape(), data)
    }

    fn check_range(&self, v: u64) -> Result<()> {
        if v >= self.q {
            return Err(DctError::CipherError(format!(
                "value {v} does not fit modulus {}",
                self.q
            )));
        }
        Ok(())
    }
}

fn pow_mod(base: u64, mut exp: u64, modulus: u64) -> u64 {
    let m = modulus as u128;
    let mut base = base as u128 % m;
    let mut acc = 1_u128 % m;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    acc as u64
}

fn mod_inverse(a: u64, m: u64) -> Option<u64> {
    let (mut old_r, mut r) = (a as i128, m as i128);
    let (mut old_s, mut s) = (1_i128, 0_i128);
    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
    }
    (old_r == 1).then(|| old_s.rem_euclid(m as i128) as u64)
}

fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::Shape;

    #[test]
    fn every_byte_round_trips() {
        let cipher = PowerCipher::new(5, 257).unwrap();
        for v in 0..=255 {
            let e = cipher.encrypt_value(v).unwrap();
            assert!(e < 257);
            assert_eq!(cipher.decrypt_value(e).unwrap(), v);
        }
    }

    #[test]
    fn small_textbook_values() {
        let cipher = PowerCipher::new(3, 5).unwrap();
        assert_eq!(cipher.encrypt_value(2).unwrap(), 3);
        assert_eq!(cipher.decrypt_value(3).unwrap(), 2);
        assert!(cipher.encrypt_value(5).is_err());
    }

    #[test]
    fn invalid_parameters() {
        assert!(PowerCipher::new(3, 256).is_err());
        assert!(PowerCipher::new(2, 257).is_err());
        assert!(PowerCipher::new(3, 2).is_err());
        assert!(PowerCipher::new(0, 257).is_err());
    }

    #[test]
    fn wide_moduli_are_rejected() {
        assert!(matches!(
            PowerCipher::new(3, 18_446_744_073_709_551_557),
            Err(DctError::CipherError(_))
        ));
        assert!(PowerCipher::new(3, u64::from(u32::MAX) + 2).is_err());
    }

    #[test]
    fn largest_32_bit_prime_modulus() {
        assert!(is_prime(4_294_967_291));
        assert!(!is_prime(u64::from(u32::MAX)));

        let cipher = PowerCipher::new(7, 4_294_967_291).unwrap();
        for v in [0, 1, 200, 255, 4_294_967_290] {
            let e = cipher.encrypt_value(v).unwrap();
            assert_eq!(cipher.decrypt_value(e).unwrap(), v);
        }
    }

    #[test]
    fn arrays_round_trip_through_noise() {
        let cipher = PowerCipher::new(7, 257).unwrap();
        let pixels = SampleArray::from_vec(
            Shape::d2(4, 4).unwrap(),
            (0..16).map(|i| (i * 16) as f64).collect(),
        )
        .unwrap();

        let scrambled = cipher.encrypt(&pixels).unwrap();
        assert_ne!(scrambled, pixels);

        let noisy = SampleArray::from_vec(
            scrambled.shape(),
            scrambled.as_slice().iter().map(|v| v + 0.3).collect(),
        )
        .unwrap();
        assert_eq!(cipher.decrypt(&noisy).unwrap(), pixels);
    }

    #[test]
    fn fractional_pixels_cannot_be_encrypted() {
        let cipher = PowerCipher::new(5, 257).unwrap();
        let pixels = SampleArray::from_samples(&[1.5]).unwrap();
        assert!(matches!(cipher.encrypt(&pixels), Err(DctError::CipherError(_))));
    }
}
