//! Rec.2020 (BT.2020) transfer function.
//!
//! Same piecewise form as Rec.709 but with constants re-derived for a
//! 12-bit signal (ITU-R BT.2020-2 table 4).
//!
//! # Range
//!
//! - Input/Output: [0, 1]
//!
//! # Reference
//!
//! ITU-R BT.2020-2

const ALPHA: f32 = 1.09929682680944;
const BETA: f32 = 0.018053968510807;

/// Rec.2020 OETF: Encodes linear to Rec.2020.
#[inline]
pub fn oetf(l: f32) -> f32 {
    if l < BETA {
        4.5 * l
    } else {
        ALPHA * l.powf(0.45) - (ALPHA - 1.0)
    }
}

/// Rec.2020 inverse OETF: Decodes Rec.2020 to linear.
#[inline]
pub fn eotf(v: f32) -> f32 {
    if v < BETA * 4.5 {
        v / 4.5
    } else {
        ((v + (ALPHA - 1.0)) / ALPHA).powf(1.0 / 0.45)
    }
}

/// Applies Rec.2020 EOTF to an RGB triplet.
#[inline]
pub fn eotf_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [eotf(rgb[0]), eotf(rgb[1]), eotf(rgb[2])]
}

/// Applies Rec.2020 OETF to an RGB triplet.
#[inline]
pub fn oetf_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [oetf(rgb[0]), oetf(rgb[1]), oetf(rgb[2])]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for i in 0..=100 {
            let v = i as f32 / 100.0;
            let linear = eotf(v);
            let back = oetf(linear);
            assert!((v - back).abs() < 1e-4, "v={}, back={}", v, back);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(oetf(0.0), 0.0);
        assert!((oetf(1.0) - 1.0).abs() < 1e-6);
    }
}
