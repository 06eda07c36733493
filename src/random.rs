use crate::error::{Error, Result};

pub trait RandomSource {
    /// Fill `dest` entirely, or fail without a partial result being used.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        getrandom::fill(dest).map_err(|e| Error::RandomSource(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_random_fills_buffer() {
        let mut a = [0u8; 64];
        let mut b = [0u8; 64];
        OsRandom.fill_bytes(&mut a).unwrap();
        OsRandom.fill_bytes(&mut b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_os_random_empty_buffer() {
        let mut empty: [u8; 0] = [];
        assert!(OsRandom.fill_bytes(&mut empty).is_ok());
    }
}
