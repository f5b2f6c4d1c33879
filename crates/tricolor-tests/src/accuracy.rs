//! Accuracy measurement using perceptual color difference metrics
//!
//! Uses CIEDE2000 (deltaE2000) to judge how far a conversion result is
//! from the reference. Only used for measuring; the library itself has no
//! color-difference API.

use tricolor_core::Lab;

/// Statistics from a deltaE comparison
#[derive(Debug, Clone)]
pub struct DeltaEStats {
    /// Mean deltaE across all samples
    pub mean: f64,
    /// Maximum deltaE
    pub max: f64,
    /// 95th percentile deltaE
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl DeltaEStats {
    /// Summarize a set of deltaE samples
    pub fn from_samples(mut samples: Vec<f64>) -> Self {
        samples.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let count = samples.len();
        let mean = if count == 0 {
            0.0
        } else {
            samples.iter().sum::<f64>() / count as f64
        };
        let max = samples.last().copied().unwrap_or(0.0);
        let p95_idx = (count as f64 * 0.95) as usize;
        let p95 = samples.get(p95_idx).copied().unwrap_or(max);

        Self {
            mean,
            max,
            p95,
            count,
        }
    }

    /// Check if all differences are imperceptible (deltaE < 1.0)
    pub fn is_excellent(&self) -> bool {
        self.max < 1.0
    }

    /// Check if differences are barely perceptible (deltaE < 2.0)
    pub fn is_good(&self) -> bool {
        self.max < 2.0
    }
}

/// Calculate deltaE2000 between two Lab colors
pub fn delta_e_2000(lab1: Lab, lab2: Lab) -> f64 {
    let (l1, a1, b1) = (lab1.l, lab1.a, lab1.b);
    let (l2, a2, b2) = (lab2.l, lab2.a, lab2.b);

    // Parametric weighting factors
    let k_l = 1.0;
    let k_c = 1.0;
    let k_h = 1.0;

    let c1 = (a1 * a1 + b1 * b1).sqrt();
    let c2 = (a2 * a2 + b2 * b2).sqrt();
    let c_avg = (c1 + c2) / 2.0;

    let c_avg_pow7 = c_avg.powi(7);
    let g = 0.5 * (1.0 - (c_avg_pow7 / (c_avg_pow7 + 6103515625.0_f64)).sqrt()); // 25^7

    let a1_prime = a1 * (1.0 + g);
    let a2_prime = a2 * (1.0 + g);

    let c1_prime = (a1_prime * a1_prime + b1 * b1).sqrt();
    let c2_prime = (a2_prime * a2_prime + b2 * b2).sqrt();
    let c_avg_prime = (c1_prime + c2_prime) / 2.0;

    let h1_prime = hue_degrees(a1_prime, b1);
    let h2_prime = hue_degrees(a2_prime, b2);

    let delta_h_prime = if c1_prime * c2_prime == 0.0 {
        0.0
    } else {
        let diff = h2_prime - h1_prime;
        if diff.abs() <= 180.0 {
            diff
        } else if diff > 180.0 {
            diff - 360.0
        } else {
            diff + 360.0
        }
    };

    let delta_h_prime_big =
        2.0 * (c1_prime * c2_prime).sqrt() * (delta_h_prime.to_radians() / 2.0).sin();

    let h_avg_prime = if c1_prime * c2_prime == 0.0 {
        h1_prime + h2_prime
    } else {
        let diff = (h1_prime - h2_prime).abs();
        if diff <= 180.0 {
            (h1_prime + h2_prime) / 2.0
        } else if h1_prime + h2_prime < 360.0 {
            (h1_prime + h2_prime + 360.0) / 2.0
        } else {
            (h1_prime + h2_prime - 360.0) / 2.0
        }
    };

    let t = 1.0 - 0.17 * (h_avg_prime - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_avg_prime).to_radians().cos()
        + 0.32 * (3.0 * h_avg_prime + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_avg_prime - 63.0).to_radians().cos();

    let delta_l_prime = l2 - l1;
    let delta_c_prime = c2_prime - c1_prime;
    let l_avg_prime = (l1 + l2) / 2.0;

    let l_avg_minus_50_sq = (l_avg_prime - 50.0).powi(2);
    let s_l = 1.0 + (0.015 * l_avg_minus_50_sq) / (20.0 + l_avg_minus_50_sq).sqrt();
    let s_c = 1.0 + 0.045 * c_avg_prime;
    let s_h = 1.0 + 0.015 * c_avg_prime * t;

    // Rotation term
    let delta_theta = 30.0 * (-((h_avg_prime - 275.0) / 25.0).powi(2)).exp();
    let c_avg_prime_pow7 = c_avg_prime.powi(7);
    let r_c = 2.0 * (c_avg_prime_pow7 / (c_avg_prime_pow7 + 6103515625.0_f64)).sqrt();
    let r_t = -r_c * (2.0 * delta_theta.to_radians()).sin();

    let term1 = delta_l_prime / (k_l * s_l);
    let term2 = delta_c_prime / (k_c * s_c);
    let term3 = delta_h_prime_big / (k_h * s_h);

    (term1 * term1 + term2 * term2 + term3 * term3 + r_t * term2 * term3).sqrt()
}

fn hue_degrees(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a).to_degrees();
    if h < 0.0 { h + 360.0 } else { h }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_e_same_color() {
        let lab = Lab::new(50.0, 25.0, -25.0);
        assert!(delta_e_2000(lab, lab) < 0.0001);
    }

    #[test]
    fn test_delta_e_small_lightness_step() {
        let de = delta_e_2000(Lab::new(50.0, 0.0, 0.0), Lab::new(51.0, 0.0, 0.0));
        assert!(de > 0.0 && de < 2.0, "Small L difference: deltaE={}", de);
    }

    #[test]
    fn test_delta_e_sharma_pair() {
        // Pair 1 from Sharma, Wu & Dalal's CIEDE2000 test data
        let de = delta_e_2000(
            Lab::new(50.0, 2.6772, -79.7751),
            Lab::new(50.0, 0.0, -82.7485),
        );
        assert!((de - 2.0425).abs() < 1e-4, "deltaE={}", de);
    }

    #[test]
    fn test_stats() {
        let stats = DeltaEStats::from_samples(vec![0.5, 0.1, 0.3]);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.max, 0.5);
        assert!((stats.mean - 0.3).abs() < 1e-12);
        assert!(stats.is_excellent());

        let empty = DeltaEStats::from_samples(Vec::new());
        assert_eq!(empty.count, 0);
        assert!(empty.is_good());
    }
}
