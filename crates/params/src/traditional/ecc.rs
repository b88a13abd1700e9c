//! Domain parameters for the SEC named prime curves
//!
//! Every value is a big-endian hex string. Base points use the uncompressed
//! SEC 1 encoding (`04 || X || Y`).

/// Largest field size of any curve in [`NAMED_CURVES`], in bits
pub const MAX_CURVE_BITS: usize = 521;

/// Largest field size of any curve in [`NAMED_CURVES`], in bytes
pub const MAX_CURVE_BYTES: usize = (MAX_CURVE_BITS + 7) / 8;

/// Hex-encoded domain parameters for one short-Weierstrass curve over GF(p)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedCurve {
    /// SEC 2 curve name
    pub name: &'static str,
    /// Field prime
    pub p: &'static str,
    /// Coefficient `a`
    pub a: &'static str,
    /// Coefficient `b`
    pub b: &'static str,
    /// Base point, uncompressed SEC encoding
    pub g: &'static str,
    /// Order of the base point
    pub n: &'static str,
    /// Cofactor
    pub h: &'static str,
}

/// secp192k1
pub const SECP192K1: NamedCurve = NamedCurve {
    name: "secp192k1",
    p: "fffffffffffffffffffffffffffffffffffffffeffffee37",
    a: "00",
    b: "03",
    g: concat!(
        "04db4ff10ec057e9ae26b07d0280b7f4341da5d1b1eae06c7d9b2f2f6d9c5628a7844",
        "163d015be86344082aa88d95e2f9d"
    ),
    n: "fffffffffffffffffffffffe26f2fc170f69466a74defd8d",
    h: "01",
};

/// secp192r1 (NIST P-192)
pub const SECP192R1: NamedCurve = NamedCurve {
    name: "secp192r1",
    p: "fffffffffffffffffffffffffffffffeffffffffffffffff",
    a: "fffffffffffffffffffffffffffffffefffffffffffffffc",
    b: "64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1",
    g: concat!(
        "04188da80eb03090f67cbf20eb43a18800f4ff0afd82ff101207192b95ffc8da78631",
        "011ed6b24cdd573f977a11e794811"
    ),
    n: "ffffffffffffffffffffffff99def836146bc9b1b4d22831",
    h: "01",
};

/// secp224k1
pub const SECP224K1: NamedCurve = NamedCurve {
    name: "secp224k1",
    p: "fffffffffffffffffffffffffffffffffffffffffffffffeffffe56d",
    a: "00",
    b: "05",
    g: concat!(
        "04a1455b334df099df30fc28a169a467e9e47075a90f7e650eb6b7a45c7e089fed7fb",
        "a344282cafbd6f7e319f7c0b0bd59e2ca4bdb556d61a5"
    ),
    n: "010000000000000000000000000001dce8d2ec6184caf0a971769fb1f7",
    h: "01",
};

/// secp224r1 (NIST P-224)
pub const SECP224R1: NamedCurve = NamedCurve {
    name: "secp224r1",
    p: "ffffffffffffffffffffffffffffffff000000000000000000000001",
    a: "fffffffffffffffffffffffffffffffefffffffffffffffffffffffe",
    b: "b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4",
    g: concat!(
        "04b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21bd376388b5f",
        "723fb4c22dfe6cd4375a05a07476444d5819985007e34"
    ),
    n: "ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d",
    h: "01",
};

/// secp256k1
pub const SECP256K1: NamedCurve = NamedCurve {
    name: "secp256k1",
    p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
    a: "00",
    b: "07",
    g: concat!(
        "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798483",
        "ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
    ),
    n: "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
    h: "01",
};

/// secp256r1 (NIST P-256)
pub const SECP256R1: NamedCurve = NamedCurve {
    name: "secp256r1",
    p: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
    a: "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc",
    b: "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
    g: concat!(
        "046b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c2964fe",
        "342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"
    ),
    n: "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
    h: "01",
};

/// secp384r1 (NIST P-384)
pub const SECP384R1: NamedCurve = NamedCurve {
    name: "secp384r1",
    p: concat!(
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffefffff",
        "fff0000000000000000ffffffff"
    ),
    a: concat!(
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffefffff",
        "fff0000000000000000fffffffc"
    ),
    b: concat!(
        "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac6563",
        "98d8a2ed19d2a85c8edd3ec2aef"
    ),
    g: concat!(
        "04aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a38550",
        "2f25dbf55296c3a545e3872760ab73617de4a96262c6f5d9e98bf9292dc29f8f4",
        "1dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f"
    ),
    n: concat!(
        "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0",
        "db248b0a77aecec196accc52973"
    ),
    h: "01",
};

/// secp521r1 (NIST P-521)
pub const SECP521R1: NamedCurve = NamedCurve {
    name: "secp521r1",
    p: concat!(
        "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
    ),
    a: concat!(
        "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffc"
    ),
    b: concat!(
        "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e15",
        "6193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00"
    ),
    g: concat!(
        "0400c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3db",
        "aa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66",
        "011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e6",
        "62c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd166",
        "50"
    ),
    n: concat!(
        "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa5",
        "1868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409"
    ),
    h: "01",
};

/// All named curves, in lookup order
pub static NAMED_CURVES: [NamedCurve; 8] = [
    SECP192K1, SECP192R1, SECP224K1, SECP224R1, SECP256K1, SECP256R1, SECP384R1, SECP521R1,
];

/// Exact-match lookup of a named curve
pub fn named_curve(name: &str) -> Option<&'static NamedCurve> {
    NAMED_CURVES.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_hex_is_well_formed() {
        for curve in NAMED_CURVES.iter() {
            for value in [curve.p, curve.a, curve.b, curve.g, curve.n, curve.h] {
                assert_eq!(value.len() % 2, 0, "{} has odd-length hex", curve.name);
                assert!(value.bytes().all(|c| c.is_ascii_hexdigit()));
            }
            // 04 || X || Y with both coordinates as wide as p
            assert_eq!(curve.g.len(), 2 + 2 * curve.p.len(), "{}", curve.name);
            assert!(curve.g.starts_with("04"));
            assert!(curve.p.len() / 2 <= MAX_CURVE_BYTES);
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(named_curve("secp256r1").map(|c| c.name), Some("secp256r1"));
        assert!(named_curve("SECP256R1").is_none());
        assert!(named_curve("secp256").is_none());
        assert!(named_curve("").is_none());
    }
}
