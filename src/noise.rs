//! Smooth 2-D value noise in `[0, 1]` for the particle field.

const OCTAVES: u32 = 4;
const FALLOFF: f64 = 0.5;

fn hash(x: i64, y: i64) -> f64 {
    let mut h = (x as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (y as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F);
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
    h ^= h >> 33;
    h = h.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    h ^= h >> 33;
    (h >> 11) as f64 / (1u64 << 53) as f64
}

fn fade(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn value_noise(x: f64, y: f64) -> f64 {
    let x0 = x.floor();
    let y0 = y.floor();
    let (xi, yi) = (x0 as i64, y0 as i64);
    let (tx, ty) = (fade(x - x0), fade(y - y0));

    // Lattice coordinates saturate for huge inputs; neighbours wrap.
    let (xn, yn) = (xi.wrapping_add(1), yi.wrapping_add(1));

    let top = lerp(hash(xi, yi), hash(xn, yi), tx);
    let bottom = lerp(hash(xi, yn), hash(xn, yn), tx);
    lerp(top, bottom, ty)
}

/// Layered value noise. Deterministic and continuous in both inputs.
pub fn noise2(x: f64, y: f64) -> f64 {
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut norm = 0.0;
    let mut frequency = 1.0;

    for _ in 0..OCTAVES {
        total += value_noise(x * frequency, y * frequency) * amplitude;
        norm += amplitude;
        amplitude *= FALLOFF;
        frequency *= 2.0;
    }

    total / norm
}
