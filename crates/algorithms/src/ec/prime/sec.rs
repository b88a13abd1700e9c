//! SEC 1 point encoding for prime curves

use crate::error::{validate, Error, Result};

/// Format of a serialized elliptic-curve point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFormat {
    /// Uncompressed: 0x04 ∥ x ∥ y
    Uncompressed,
    /// Compressed: 0x02/0x03 ∥ x (recognized, not supported)
    Compressed,
}

/// Borrowed view of a decoded SEC encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SecPoint<'a> {
    Infinity,
    Affine { x: &'a [u8], y: &'a [u8] },
}

/// Split a SEC encoding into its coordinates
///
/// `0x00` is the point at infinity regardless of trailing bytes. For
/// `0x04` the remainder is split into two equal halves.
pub(crate) fn decode(bytes: &[u8]) -> Result<SecPoint<'_>> {
    let (&tag, rest) = bytes
        .split_first()
        .ok_or_else(|| Error::param("SEC point", "empty encoding"))?;

    match tag {
        0x00 => Ok(SecPoint::Infinity),
        0x04 => {
            validate::parameter(
                rest.len() % 2 == 0,
                "SEC point",
                "coordinates have unequal lengths",
            )?;
            let (x, y) = rest.split_at(rest.len() / 2);
            Ok(SecPoint::Affine { x, y })
        }
        tag => {
            validate::supported(tag != 0x02 && tag != 0x03, "compressed SEC points")?;
            Err(Error::NotImplemented {
                feature: "SEC point format",
            })
        }
    }
}

/// Uncompressed encoding of affine coordinates, each padded to `width` bytes
pub(crate) fn encode_affine(x: &[u8], y: &[u8], width: usize) -> Result<Vec<u8>> {
    validate::max_length("SEC x coordinate", x.len(), width)?;
    validate::max_length("SEC y coordinate", y.len(), width)?;

    let mut out = vec![0u8; 1 + 2 * width];
    out[0] = 0x04;
    out[1 + width - x.len()..1 + width].copy_from_slice(x);
    out[1 + 2 * width - y.len()..].copy_from_slice(y);
    Ok(out)
}

/// Encoding of the point at infinity
pub(crate) const INFINITY: [u8; 1] = [0x00];
