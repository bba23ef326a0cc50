//! ICC profile (`.icc`/`.icm`) reader.
//!
//! Reads just enough of the ICC v2/v4 binary layout to extract a
//! matrix/TRC ("matrix-shaper") profile: the `rXYZ`/`gXYZ`/`bXYZ` primary
//! tags (an `XYZ ` type) and the `rTRC`/`gTRC`/`bTRC` tone curves (a `curv`
//! or `para` type). All multi-byte fields in an ICC file are big-endian;
//! every field read here is explicitly byte-swapped from that encoding.
//!
//! The result is a `Matrix -> Matrix -> Lut1D` op sequence: a chromatic
//! adaptation from the profile connection space (always D50) to D65,
//! the RGB-primaries matrix (inverted for reference-to-device direction),
//! and the per-channel tone curve.
//!
//! # Non-goals
//!
//! LUT-based (`A2B0`/`B2A0`) ICC profiles and embedded CMYK/Lab profiles
//! are not supported; only the matrix/TRC model used by display and
//! camera-gamut profiles is read.

use crate::{Lut1D, LutError, LutResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use vfx_math::Mat3;

const PCS_D50: [f32; 3] = [0.9642, 1.0, 0.8249];
/// Bradford-adapted D50 -> D65, used because ICC's profile connection
/// space is always D50 while this crate's working reference is D65.
const BRADFORD_D50_TO_D65: [[f32; 3]; 3] = [
    [0.9555766, -0.0230393, 0.0631636],
    [-0.0282895, 1.0099416, 0.0210077],
    [0.0122982, -0.0204830, 1.3299098],
];

/// The ops extracted from a matrix/TRC ICC profile.
#[derive(Debug, Clone)]
pub struct IccProfileOps {
    /// RGB-primaries matrix: device RGB -> XYZ (D50 PCS), row-major 3x3.
    pub primaries_to_xyz: [[f32; 3]; 3],
    /// Per-channel tone reproduction curve (EOTF: device code value -> linear).
    pub trc: Lut1D,
}

impl IccProfileOps {
    /// Device RGB -> XYZ(D65) matrix: Bradford D50->D65 composed with the
    /// profile's own primaries-to-XYZ(D50) matrix.
    pub fn device_to_reference_matrix(&self) -> [[f32; 3]; 3] {
        let bradford = Mat3::from_rows(BRADFORD_D50_TO_D65);
        let primaries = Mat3::from_rows(self.primaries_to_xyz);
        bradford.mul_mat(&primaries).m
    }

    /// XYZ(D65) -> device RGB matrix, the inverse of
    /// [`device_to_reference_matrix`](Self::device_to_reference_matrix).
    pub fn reference_to_device_matrix(&self) -> LutResult<[[f32; 3]; 3]> {
        Mat3::from_rows(self.device_to_reference_matrix())
            .inverse()
            .map(|m| m.m)
            .ok_or_else(|| LutError::ParseError("ICC: singular primaries matrix".into()))
    }
}

fn be_u32(b: &[u8]) -> u32 {
    u32::from_be_bytes([b[0], b[1], b[2], b[3]])
}

fn be_u16(b: &[u8]) -> u16 {
    u16::from_be_bytes([b[0], b[1]])
}

/// ICC `s15Fixed16Number`: a signed Q16.16 fixed-point value.
fn s15fixed16(b: &[u8]) -> f32 {
    (i32::from_be_bytes([b[0], b[1], b[2], b[3]]) as f32) / 65536.0
}

/// Reads an ICC profile from disk.
pub fn read_icc<P: AsRef<Path>>(path: P) -> LutResult<IccProfileOps> {
    let mut bytes = Vec::new();
    File::open(path.as_ref())?.read_to_end(&mut bytes)?;
    parse_icc(&bytes)
}

/// Parses raw ICC profile bytes into a matrix/TRC op triple.
///
/// # Errors
///
/// Returns [`LutError::ParseError`] if the file is too short, not a valid
/// ICC profile (`acsp` signature missing), or lacks the matrix/TRC tags
/// this reader understands.
pub fn parse_icc(data: &[u8]) -> LutResult<IccProfileOps> {
    if data.len() < 132 {
        return Err(LutError::ParseError("ICC: file too short for a header".into()));
    }
    if &data[36..40] != b"acsp" {
        return Err(LutError::ParseError(
            "ICC: missing 'acsp' profile file signature".into(),
        ));
    }

    let tag_count = be_u32(&data[128..132]) as usize;
    let table_start = 132;
    if data.len() < table_start + tag_count * 12 {
        return Err(LutError::ParseError("ICC: truncated tag table".into()));
    }

    let mut tags = std::collections::HashMap::new();
    for i in 0..tag_count {
        let off = table_start + i * 12;
        let sig = &data[off..off + 4];
        let tag_offset = be_u32(&data[off + 4..off + 8]) as usize;
        let tag_size = be_u32(&data[off + 8..off + 12]) as usize;
        tags.insert(sig.to_vec(), (tag_offset, tag_size));
    }

    let xyz_tag = |name: &[u8; 4]| -> LutResult<[f32; 3]> {
        let (off, size) = tags.get(name.as_slice()).copied().ok_or_else(|| {
            LutError::ParseError(format!(
                "ICC: missing tag '{}'",
                String::from_utf8_lossy(name)
            ))
        })?;
        if size < 20 || data.len() < off + 20 {
            return Err(LutError::ParseError("ICC: truncated XYZ tag".into()));
        }
        if &data[off..off + 4] != b"XYZ " {
            return Err(LutError::ParseError("ICC: XYZ tag has wrong type signature".into()));
        }
        Ok([
            s15fixed16(&data[off + 8..off + 12]),
            s15fixed16(&data[off + 12..off + 16]),
            s15fixed16(&data[off + 16..off + 20]),
        ])
    };

    let r_xyz = xyz_tag(b"rXYZ")?;
    let g_xyz = xyz_tag(b"gXYZ")?;
    let b_xyz = xyz_tag(b"bXYZ")?;

    // Columns are the primaries; rows are X, Y, Z.
    let primaries_to_xyz = [
        [r_xyz[0], g_xyz[0], b_xyz[0]],
        [r_xyz[1], g_xyz[1], b_xyz[1]],
        [r_xyz[2], g_xyz[2], b_xyz[2]],
    ];

    let curve = |name: &[u8; 4]| -> LutResult<Vec<f32>> {
        let (off, size) = tags.get(name.as_slice()).copied().ok_or_else(|| {
            LutError::ParseError(format!(
                "ICC: missing tag '{}'",
                String::from_utf8_lossy(name)
            ))
        })?;
        parse_curve(&data[off..off + size])
    };

    let r_curve = curve(b"rTRC")?;
    let g_curve = curve(b"gTRC")?;
    let b_curve = curve(b"bTRC")?;

    let len = r_curve.len().max(g_curve.len()).max(b_curve.len());
    let resample = |c: Vec<f32>| -> Vec<f32> {
        if c.len() == len {
            return c;
        }
        (0..len)
            .map(|i| {
                let t = i as f32 / (len - 1).max(1) as f32 * (c.len() - 1).max(1) as f32;
                let lo = t.floor() as usize;
                let hi = (lo + 1).min(c.len() - 1);
                let frac = t - lo as f32;
                c[lo] * (1.0 - frac) + c[hi] * frac
            })
            .collect()
    };
    let r_curve = resample(r_curve);
    let g_curve = resample(g_curve);
    let b_curve = resample(b_curve);

    let trc = Lut1D::from_rgb(r_curve, g_curve, b_curve, 0.0, 1.0)?;

    Ok(IccProfileOps { primaries_to_xyz, trc })
}

/// Parses a `curv` or `para` tone-curve tag into a sampled 1D curve.
///
/// `curv` with a single entry is interpreted as a pure gamma value
/// (`u8.8` fixed point); `curv` with zero entries is the identity; `curv`
/// with more entries is a directly-sampled curve. `para` type 0 (a single
/// gamma exponent) is supported; other parametric function types fall back
/// to an identity ramp.
fn parse_curve(tag: &[u8]) -> LutResult<Vec<f32>> {
    if tag.len() < 8 {
        return Err(LutError::ParseError("ICC: truncated curve tag".into()));
    }
    let sig = &tag[0..4];
    match sig {
        b"curv" => {
            let count = be_u32(&tag[8..12]) as usize;
            if count == 0 {
                return Ok((0..2).map(|i| i as f32).collect());
            }
            if count == 1 {
                let gamma = be_u16(&tag[12..14]) as f32 / 256.0;
                let n = 256;
                return Ok((0..n).map(|i| (i as f32 / (n - 1) as f32).powf(gamma)).collect());
            }
            if tag.len() < 12 + count * 2 {
                return Err(LutError::ParseError("ICC: truncated sampled curve".into()));
            }
            Ok((0..count)
                .map(|i| be_u16(&tag[12 + i * 2..14 + i * 2]) as f32 / 65535.0)
                .collect())
        }
        b"para" => {
            if tag.len() < 12 {
                return Err(LutError::ParseError("ICC: truncated parametric curve".into()));
            }
            let function_type = be_u16(&tag[8..10]);
            if function_type == 0 {
                let gamma = s15fixed16(&tag[12..16]);
                let n = 256;
                Ok((0..n).map(|i| (i as f32 / (n - 1) as f32).powf(gamma)).collect())
            } else {
                // Types 1-4 add linear segments; approximate unsupported
                // higher types with an identity ramp rather than fail.
                Ok((0..256).map(|i| i as f32 / 255.0).collect())
            }
        }
        _ => Err(LutError::ParseError(format!(
            "ICC: unsupported curve tag type '{}'",
            String::from_utf8_lossy(sig)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_u32(buf: &mut Vec<u8>, v: u32) {
        buf.extend_from_slice(&v.to_be_bytes());
    }
    fn push_s15f16(buf: &mut Vec<u8>, v: f32) {
        buf.extend_from_slice(&((v * 65536.0) as i32).to_be_bytes());
    }

    /// Builds a minimal synthetic ICC profile with identity-ish sRGB-like
    /// primaries and a gamma-2.2 single-entry TRC on all channels.
    fn synth_profile() -> Vec<u8> {
        let mut tags_data: Vec<u8> = Vec::new();
        let mut entries: Vec<([u8; 4], usize, usize)> = Vec::new();

        let mut push_xyz_tag = |name: [u8; 4], xyz: [f32; 3], tags_data: &mut Vec<u8>, entries: &mut Vec<_>| {
            let start = tags_data.len();
            tags_data.extend_from_slice(b"XYZ ");
            tags_data.extend_from_slice(&[0u8; 4]);
            for v in xyz {
                push_s15f16(tags_data, v);
            }
            entries.push((name, start, tags_data.len() - start));
        };

        push_xyz_tag(*b"rXYZ", [0.4360, 0.2225, 0.0139], &mut tags_data, &mut entries);
        push_xyz_tag(*b"gXYZ", [0.3851, 0.7169, 0.0971], &mut tags_data, &mut entries);
        push_xyz_tag(*b"bXYZ", [0.1431, 0.0606, 0.7139], &mut tags_data, &mut entries);

        let mut push_curv_gamma = |name: [u8; 4], gamma: f32, tags_data: &mut Vec<u8>, entries: &mut Vec<_>| {
            let start = tags_data.len();
            tags_data.extend_from_slice(b"curv");
            tags_data.extend_from_slice(&[0u8; 4]);
            push_u32(tags_data, 1);
            let fixed = (gamma * 256.0).round() as u16;
            tags_data.extend_from_slice(&fixed.to_be_bytes());
            entries.push((name, start, tags_data.len() - start));
        };
        push_curv_gamma(*b"rTRC", 2.2, &mut tags_data, &mut entries);
        push_curv_gamma(*b"gTRC", 2.2, &mut tags_data, &mut entries);
        push_curv_gamma(*b"bTRC", 2.2, &mut tags_data, &mut entries);

        let tag_count = entries.len();
        let table_start = 132usize;
        let data_start = table_start + tag_count * 12;

        let mut out = vec![0u8; 128];
        out[36..40].copy_from_slice(b"acsp");
        push_u32(&mut out, tag_count as u32); // bytes [128..132)

        for (name, rel_off, size) in &entries {
            out.extend_from_slice(name);
            push_u32(&mut out, (data_start + rel_off) as u32);
            push_u32(&mut out, *size as u32);
        }
        out.extend_from_slice(&tags_data);
        out
    }

    #[test]
    fn test_parse_synthetic_profile() {
        let data = synth_profile();
        let ops = parse_icc(&data).unwrap();
        assert!((ops.primaries_to_xyz[0][0] - 0.4360).abs() < 1e-4);
        assert_eq!(ops.trc.r.len(), 256);
        // Gamma 2.2 EOTF: trc(0.5) < 0.5 (dark-compressed code values expand).
        assert!(ops.trc.r[128] < 0.5);
    }

    #[test]
    fn test_rejects_bad_signature() {
        let mut data = vec![0u8; 200];
        data[36..40].copy_from_slice(b"nope");
        assert!(parse_icc(&data).is_err());
    }

    #[test]
    fn test_device_reference_matrix_roundtrip() {
        let data = synth_profile();
        let ops = parse_icc(&data).unwrap();
        let fwd = ops.device_to_reference_matrix();
        let inv = ops.reference_to_device_matrix().unwrap();
        let identity = Mat3::from_rows(fwd).mul_mat(&Mat3::from_rows(inv)).m;
        for r in 0..3 {
            for c in 0..3 {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert!((identity[r][c] - expected).abs() < 1e-3);
            }
        }
    }
}
