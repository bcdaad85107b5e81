use std::f64::consts::{PI, SQRT_2};

// ---------------------------------------------------------------------------
// Real spherical harmonics
// ---------------------------------------------------------------------------

fn factorial(n: u32) -> f64 {
    (1..=n).fold(1.0, |acc, k| acc * k as f64)
}

/// Associated Legendre polynomial P_l^m(x) for m >= 0, evaluated with
/// the standard three-term recurrence:
///
///   P_m^m     = (-1)^m (2m-1)!! (1 - x²)^{m/2}
///   P_{m+1}^m = x (2m+1) P_m^m
///   P_l^m     = ((2l-1) x P_{l-1}^m - (l+m-1) P_{l-2}^m) / (l - m)
pub fn associated_legendre(l: u32, m: u32, x: f64) -> f64 {
    debug_assert!(m <= l);

    let mut pmm = 1.0;
    if m > 0 {
        let somx2 = (1.0 - x * x).sqrt();
        let mut fact = 1.0;
        for _ in 1..=m {
            pmm *= -fact * somx2;
            fact += 2.0;
        }
    }
    if l == m {
        return pmm;
    }

    let mut pmmp1 = x * (2.0 * m as f64 + 1.0) * pmm;
    if l == m + 1 {
        return pmmp1;
    }

    let mut pll = 0.0;
    for ll in (m + 2)..=l {
        pll = ((2.0 * ll as f64 - 1.0) * x * pmmp1 - (ll + m - 1) as f64 * pmm)
            / (ll - m) as f64;
        pmm = pmmp1;
        pmmp1 = pll;
    }
    pll
}

/// SH normalization constant K_l^m.
fn normalization(l: u32, m: u32) -> f64 {
    (((2 * l + 1) as f64 * factorial(l - m)) / (4.0 * PI * factorial(l + m))).sqrt()
}

/// Real spherical harmonic Y_l^m at spherical direction (theta, phi),
/// theta measured from the pole.
pub fn real_sh(l: u32, m: i32, theta: f64, phi: f64) -> f64 {
    let ma = m.unsigned_abs();
    debug_assert!(ma <= l);
    let k = normalization(l, ma);
    let p = associated_legendre(l, ma, theta.cos());

    if m > 0 {
        SQRT_2 * k * (ma as f64 * phi).cos() * p
    } else if m < 0 {
        SQRT_2 * k * (ma as f64 * phi).sin() * p
    } else {
        k * p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn factorials() {
        assert_eq!(factorial(0), 1.0);
        assert_eq!(factorial(1), 1.0);
        assert_eq!(factorial(5), 120.0);
    }

    #[test]
    fn low_order_legendre() {
        // P_0^0 = 1, P_1^0 = x, P_1^1 = -sqrt(1 - x²)
        assert!(close(associated_legendre(0, 0, 0.3), 1.0));
        assert!(close(associated_legendre(1, 0, 0.3), 0.3));
        assert!(close(associated_legendre(1, 1, 0.0), -1.0));
        // P_2^0 = (3x² - 1) / 2
        let x: f64 = 0.5;
        assert!(close(
            associated_legendre(2, 0, x),
            (3.0 * x * x - 1.0) / 2.0
        ));
    }

    #[test]
    fn y00_is_constant() {
        let expected = 1.0 / (2.0 * PI.sqrt());
        assert!(close(real_sh(0, 0, 0.0, 0.0), expected));
        assert!(close(real_sh(0, 0, 1.2, 4.5), expected));
    }

    #[test]
    fn y10_follows_cos_theta() {
        let k = (3.0 / (4.0 * PI)).sqrt();
        for theta in [0.0, 0.7, 1.5, 3.0] {
            assert!(close(real_sh(1, 0, theta, 2.0), k * theta.cos()));
        }
    }

    #[test]
    fn negative_m_uses_sine() {
        // Y_1^{-1} is proportional to sin(phi); vanishes at phi = 0.
        assert!(close(real_sh(1, -1, 1.0, 0.0), 0.0));
        assert!(real_sh(1, -1, 1.0, 1.0).abs() > 0.0);
    }
}
