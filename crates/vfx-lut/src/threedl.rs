//! Discreet (Flame/Lustre) `.3dl` LUT format support.
//!
//! A `.3dl` file carries an optional integer "shaper" ramp (a 1D pre-LUT
//! applied before cube lookup) followed by the cube itself as rows of three
//! integers. Output bit-depth is never stated explicitly; it is inferred
//! from the largest value seen, per the table in
//! [`likely_bit_depth`].
//!
//! # Format
//!
//! ```text
//! # comment lines starting with '#' are ignored
//! 3DMESH
//! Mesh 4 10
//! 0 64 128 192 256 320 384 448 512 576 640 704 768 832 896 960 1023
//! 0 0 0
//! 64 0 0
//! ...
//! ```
//!
//! The `3DMESH`/`Mesh` tokens are optional and, when present, are informational
//! only — the shaper's own values are what drive bit-depth inference and
//! identity detection.
//!
//! # Example
//!
//! ```rust,ignore
//! use vfx_lut::threedl;
//!
//! let file = threedl::read_3dl("grade.3dl")?;
//! ```

use crate::discreet1dl::BitDepth;
use crate::{Lut1D, Lut3D, LutError, LutResult};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Parsed `.3dl` file contents.
#[derive(Debug, Clone)]
pub struct ThreeDlFile {
    /// Shaper 1D LUT, if the file carried one and it wasn't an identity ramp.
    pub shaper: Option<Lut1D>,
    /// The 3D cube.
    pub cube: Lut3D,
    /// Bit depth inferred from the file's largest integer value.
    pub file_output_bitdepth: BitDepth,
}

/// Infers a bit depth from the largest sample value found in a `.3dl` file,
/// per the table in the format's specification:
///
/// | range            | bits |
/// |------------------|------|
/// | `[0, 511]`       | 8    |
/// | `[512, 2047]`    | 10   |
/// | `[2048, 8191]`   | 12   |
/// | `[8192, 32767]`  | 14   |
/// | `[32768, ..)`    | 16   |
pub fn likely_bit_depth(max_value: u32) -> BitDepth {
    match max_value {
        0..=511 => BitDepth::Int8,
        512..=2047 => BitDepth::Int10,
        2048..=8191 => BitDepth::Int12,
        8192..=32767 => BitDepth::Int14,
        _ => BitDepth::Int16,
    }
}

/// Reads a `.3dl` file from disk.
pub fn read_3dl<P: AsRef<Path>>(path: P) -> LutResult<ThreeDlFile> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    parse_3dl(reader)
}

/// Parses `.3dl` content from any [`BufRead`].
///
/// # Errors
///
/// Returns [`LutError::ParseError`] if the cube's row count is not a perfect
/// cube, or if both a shaper and cube are absent.
pub fn parse_3dl<R: BufRead>(reader: R) -> LutResult<ThreeDlFile> {
    let mut lines: Vec<Vec<i64>> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        // Informational tokens: ignored except as markers we skip over.
        if trimmed.eq_ignore_ascii_case("3DMESH") {
            continue;
        }
        if trimmed.to_ascii_lowercase().starts_with("mesh ") {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("LUT8")
            || trimmed.eq_ignore_ascii_case("LUT10")
            || trimmed.eq_ignore_ascii_case("LUT12")
            || trimmed.eq_ignore_ascii_case("LUT16")
            || trimmed.to_ascii_lowercase().starts_with("gamma ")
        {
            continue;
        }

        let tokens: Result<Vec<i64>, _> = trimmed.split_whitespace().map(|t| t.parse()).collect();
        match tokens {
            Ok(t) if !t.is_empty() => lines.push(t),
            _ => {
                return Err(LutError::ParseError(format!(
                    "3DL: unrecognized line '{trimmed}'"
                )));
            }
        }
    }

    if lines.is_empty() {
        return Err(LutError::ParseError("3DL: no data lines found".into()));
    }

    // A shaper line has a token count other than 3 (or equals 3 only when the
    // cube itself happens to be size-1, which is degenerate and excluded by
    // the length check below).
    let (shaper_tokens, cube_lines): (Option<&Vec<i64>>, &[Vec<i64>]) =
        if lines[0].len() != 3 || lines.len() == 1 {
            (Some(&lines[0]), &lines[1..])
        } else {
            (None, &lines[..])
        };

    if cube_lines.is_empty() {
        return Err(LutError::ParseError("Cannot infer 3D LUT size".into()));
    }
    if cube_lines.iter().any(|row| row.len() != 3) {
        return Err(LutError::ParseError(
            "3DL: cube rows must have exactly 3 values".into(),
        ));
    }

    let n = cube_lines.len();
    let edge = (n as f64).cbrt().round() as usize;
    if edge < 2 || edge * edge * edge != n {
        return Err(LutError::ParseError(format!(
            "Cannot infer 3D LUT size: {n} entries is not a perfect cube"
        )));
    }

    let mut max_value: i64 = cube_lines
        .iter()
        .flat_map(|r| r.iter())
        .copied()
        .max()
        .unwrap_or(0);
    if let Some(s) = shaper_tokens {
        max_value = max_value.max(*s.iter().max().unwrap_or(&0));
    }
    let file_output_bitdepth = likely_bit_depth(max_value.max(0) as u32);
    let scale = file_output_bitdepth.max_int() as f32;

    let mut data = Vec::with_capacity(n);
    for row in cube_lines {
        data.push([row[0] as f32 / scale, row[1] as f32 / scale, row[2] as f32 / scale]);
    }
    let cube = Lut3D {
        data,
        size: edge,
        domain_min: [0.0, 0.0, 0.0],
        domain_max: [1.0, 1.0, 1.0],
        interpolation: crate::Interpolation::Tetrahedral,
    };

    let shaper = match shaper_tokens {
        Some(s) => {
            let shaper_scale = likely_bit_depth(*s.iter().max().unwrap_or(&0) as u32).max_int() as f32;
            let ramp: Vec<f32> = s.iter().map(|&v| v as f32 / shaper_scale).collect();
            if is_identity_ramp(&ramp) {
                None
            } else {
                Some(Lut1D::from_data(ramp, 0.0, 1.0)?)
            }
        }
        None => None,
    };

    Ok(ThreeDlFile {
        shaper,
        cube,
        file_output_bitdepth,
    })
}

/// True if `ramp[i] ≈ i / (len - 1)` for every entry (the identity shaper).
fn is_identity_ramp(ramp: &[f32]) -> bool {
    if ramp.len() < 2 {
        return true;
    }
    let last = ramp.len() - 1;
    ramp.iter()
        .enumerate()
        .all(|(i, &v)| (v - i as f32 / last as f32).abs() < 1e-4)
}

/// Writes a `.3dl` file (Flame dialect: no `3DMESH`/`Mesh` header lines).
pub fn write_3dl<P: AsRef<Path>>(path: P, cube: &Lut3D, shaper: Option<&Lut1D>, bit_depth: BitDepth) -> LutResult<()> {
    let file = File::create(path.as_ref())?;
    let mut w = BufWriter::new(file);
    write_3dl_flame(&mut w, cube, shaper, bit_depth)
}

/// Writes the Lustre dialect, which prefixes the Flame body with `3DMESH` and
/// a `Mesh <in> <out>` header line and trails with a `LUT<bits>`/`gamma 1.0` footer.
pub fn write_3dl_lustre<W: Write>(w: &mut W, cube: &Lut3D, shaper: Option<&Lut1D>, bit_depth: BitDepth) -> LutResult<()> {
    writeln!(w, "3DMESH")?;
    let shaper_len = shaper.map(|s| s.data.len()).unwrap_or(cube.size);
    writeln!(w, "Mesh {} {}", (shaper_len as f32).log2().round() as u32, bit_depth_tag(bit_depth))?;
    write_3dl_flame(w, cube, shaper, bit_depth)?;
    writeln!(w)?;
    writeln!(w, "LUT{}", bit_depth_tag(bit_depth))?;
    writeln!(w, "gamma 1.0")?;
    Ok(())
}

fn write_3dl_flame<W: Write>(w: &mut W, cube: &Lut3D, shaper: Option<&Lut1D>, bit_depth: BitDepth) -> LutResult<()> {
    let scale = bit_depth.max_int() as f32;
    if let Some(s) = shaper {
        let line = s
            .r
            .iter()
            .map(|v| (v * scale).round() as i64)
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(w, "{line}")?;
    } else {
        let n = cube.size;
        let line = (0..n)
            .map(|i| ((i as f32 / (n - 1) as f32) * scale).round() as i64)
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(w, "{line}")?;
    }
    for rgb in &cube.data {
        writeln!(
            w,
            "{} {} {}",
            (rgb[0] * scale).round() as i64,
            (rgb[1] * scale).round() as i64,
            (rgb[2] * scale).round() as i64,
        )?;
    }
    Ok(())
}

fn bit_depth_tag(bd: BitDepth) -> u32 {
    match bd {
        BitDepth::Int8 => 8,
        BitDepth::Int10 => 10,
        BitDepth::Int12 => 12,
        BitDepth::Int14 => 14,
        BitDepth::Int16 => 16,
        BitDepth::Float16 => 16,
        BitDepth::Float32 => 32,
    }
}

/// Writes a `.3dl` file carrying an explicit output bit-depth hint, matching
/// the naming of the other format writers in this crate.
pub fn write_3dl_with_depth<P: AsRef<Path>>(
    path: P,
    cube: &Lut3D,
    shaper: Option<&Lut1D>,
    bit_depth: BitDepth,
) -> LutResult<()> {
    write_3dl(path, cube, shaper, bit_depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rounding_down_is_identity() {
        let text = "#Tokens required by applications - do not edit\n\n3DMESH\nMesh 4 10\n0 63 127 191 255 319 383 447 511 575 639 703 767 831 895 959 1023\n0 0 0\n1023 1023 1023\n";
        // cube has only 2 rows -> not a perfect cube (2 is not cube of an integer >=2 except edge=... 2^(1/3) isn't integer)
        let result = parse_3dl(text.as_bytes());
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_simple_identity_cube() {
        // 2x2x2 identity cube, no shaper.
        let text = "\
0 0 0
1023 0 0
0 1023 0
1023 1023 0
0 0 1023
1023 0 1023
0 1023 1023
1023 1023 1023
";
        let file = parse_3dl(text.as_bytes()).unwrap();
        assert_eq!(file.cube.size, 2);
        assert!(file.shaper.is_none());
        assert_eq!(file.file_output_bitdepth, BitDepth::Int10);
        assert_eq!(file.cube.data[7], [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_parse_with_shaper_non_identity() {
        let text = "\
0 64 128 192 256 320 384 448 512 576 640 704 768 832 896 960 1020
0 0 0
1023 0 0
0 1023 0
1023 1023 0
0 0 1023
1023 0 1023
0 1023 1023
1023 1023 1023
";
        let file = parse_3dl(text.as_bytes()).unwrap();
        assert!(file.shaper.is_some());
        assert_eq!(file.cube.size, 2);
    }

    #[test]
    fn test_parse_non_cube_errors() {
        let text = "0 0 0\n1 1 1\n2 2 2\n";
        let result = parse_3dl(text.as_bytes());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Cannot infer"));
    }

    #[test]
    fn test_likely_bit_depth_table() {
        assert_eq!(likely_bit_depth(0), BitDepth::Int8);
        assert_eq!(likely_bit_depth(511), BitDepth::Int8);
        assert_eq!(likely_bit_depth(512), BitDepth::Int10);
        assert_eq!(likely_bit_depth(2047), BitDepth::Int10);
        assert_eq!(likely_bit_depth(2048), BitDepth::Int12);
        assert_eq!(likely_bit_depth(8191), BitDepth::Int12);
        assert_eq!(likely_bit_depth(8192), BitDepth::Int14);
        assert_eq!(likely_bit_depth(32767), BitDepth::Int14);
        assert_eq!(likely_bit_depth(32768), BitDepth::Int16);
        assert_eq!(likely_bit_depth(65535), BitDepth::Int16);
    }
}
