//! Apple GPU model database
//!
//! Apple device descriptions name the SoC directly ("Apple A12 GPU"), so
//! identification is a token scan like the other vendors. Capability data
//! (compute unit counts, rounding behavior) comes from published chip
//! documentation, keyed by generation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Known Apple SoC GPU generations, ordered by release
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum AppleGpu {
    /// Model not recognized
    #[default]
    Unknown,
    /// Apple A7
    A7,
    /// Apple A8
    A8,
    /// Apple A8X
    A8X,
    /// Apple A9
    A9,
    /// Apple A9X
    A9X,
    /// Apple A10
    A10,
    /// Apple A10X
    A10X,
    /// Apple A11
    A11,
    /// Apple A12
    A12,
    /// Apple A12X
    A12X,
    /// Apple A12Z
    A12Z,
    /// Apple A13
    A13,
    /// Apple A14
    A14,
}

/// Model-token lookup table, ordered longest token first
///
/// X/Z suffix variants must be tried before their base model or the base
/// token would shadow them ("a12" inside "a12x").
pub const APPLE_GPU_TOKENS: &[(&str, AppleGpu)] = &[
    ("a12x", AppleGpu::A12X),
    ("a12z", AppleGpu::A12Z),
    ("a10x", AppleGpu::A10X),
    ("a9x", AppleGpu::A9X),
    ("a8x", AppleGpu::A8X),
    ("a14", AppleGpu::A14),
    ("a13", AppleGpu::A13),
    ("a12", AppleGpu::A12),
    ("a11", AppleGpu::A11),
    ("a10", AppleGpu::A10),
    ("a9", AppleGpu::A9),
    ("a8", AppleGpu::A8),
    ("a7", AppleGpu::A7),
];

/// Identify an Apple GPU from a device description string
///
/// Tokens are matched case-insensitively anywhere in the string. Returns
/// [`AppleGpu::Unknown`] when no known model token is present.
pub fn identify_apple_gpu(gpu_description: &str) -> AppleGpu {
    let lowered = gpu_description.to_lowercase();
    for (token, gpu) in APPLE_GPU_TOKENS {
        if lowered.contains(token) {
            return *gpu;
        }
    }
    AppleGpu::Unknown
}

impl fmt::Display for AppleGpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match APPLE_GPU_TOKENS.iter().find(|(_, gpu)| gpu == self) {
            Some((token, _)) => write!(f, "Apple {}", token.to_uppercase()),
            None => write!(f, "unknown Apple"),
        }
    }
}

/// Classified Apple GPU
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppleInfo {
    /// Identified SoC GPU generation
    pub gpu_type: AppleGpu,
}

impl AppleInfo {
    /// Classify a device description string
    pub fn new(gpu_description: &str) -> Self {
        Self {
            gpu_type: identify_apple_gpu(gpu_description),
        }
    }

    /// True for the Bionic era (A11 and later)
    pub fn is_bionic(&self) -> bool {
        self.gpu_type >= AppleGpu::A11
    }

    /// True where threadgroup memory outperforms device memory (A7-A8X)
    pub fn is_local_memory_preferred_over_global(&self) -> bool {
        matches!(self.gpu_type, AppleGpu::A7 | AppleGpu::A8 | AppleGpu::A8X)
    }

    /// Round-to-nearest float rounding is available from the Bionic era on
    pub fn is_round_to_nearest_supported(&self) -> bool {
        self.is_bionic()
    }

    /// GPU core count for the identified chip
    ///
    /// Returns `0` for [`AppleGpu::Unknown`]: no data, never a guessed
    /// capacity.
    pub fn compute_units_count(&self) -> u32 {
        match self.gpu_type {
            AppleGpu::A7 => 4,
            AppleGpu::A8 => 4,
            AppleGpu::A8X => 8,
            AppleGpu::A9 => 6,
            AppleGpu::A9X => 12,
            AppleGpu::A10 => 6,
            AppleGpu::A10X => 12,
            AppleGpu::A11 => 3,
            AppleGpu::A12 => 4,
            AppleGpu::A12X => 7,
            AppleGpu::A12Z => 8,
            AppleGpu::A13 => 4,
            AppleGpu::A14 => 4,
            AppleGpu::Unknown => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn token_table_is_ordered_longest_first() {
        for pair in APPLE_GPU_TOKENS.windows(2) {
            assert!(
                pair[0].0.len() >= pair[1].0.len(),
                "token {:?} must come before {:?}",
                pair[1].0,
                pair[0].0
            );
        }
    }

    #[test]
    fn every_token_identifies_its_model() {
        for (token, gpu) in APPLE_GPU_TOKENS {
            let description = format!("Apple {} GPU", token.to_uppercase());
            assert_eq!(identify_apple_gpu(&description), *gpu, "token {}", token);
        }
    }

    #[rstest]
    #[case("Apple A14 GPU", AppleGpu::A14)]
    #[case("Apple A12X GPU", AppleGpu::A12X)]
    #[case("apple a8x gpu", AppleGpu::A8X)]
    #[case("Apple M-series", AppleGpu::Unknown)]
    fn suffix_variants_win_over_base_models(#[case] input: &str, #[case] expected: AppleGpu) {
        assert_eq!(identify_apple_gpu(input), expected);
    }

    #[rstest]
    #[case(AppleGpu::A10X, false)]
    #[case(AppleGpu::A11, true)]
    #[case(AppleGpu::A12Z, true)]
    #[case(AppleGpu::A14, true)]
    #[case(AppleGpu::Unknown, false)]
    fn bionic_threshold_is_a11(#[case] gpu: AppleGpu, #[case] expected: bool) {
        let info = AppleInfo { gpu_type: gpu };
        assert_eq!(info.is_bionic(), expected);
        assert_eq!(info.is_round_to_nearest_supported(), expected);
    }

    #[test]
    fn local_memory_preference_is_limited_to_early_chips() {
        for (_, gpu) in APPLE_GPU_TOKENS {
            let info = AppleInfo { gpu_type: *gpu };
            let expected = matches!(*gpu, AppleGpu::A7 | AppleGpu::A8 | AppleGpu::A8X);
            assert_eq!(info.is_local_memory_preferred_over_global(), expected);
        }
    }

    #[test]
    fn compute_units_are_known_for_every_named_chip() {
        for (_, gpu) in APPLE_GPU_TOKENS {
            let info = AppleInfo { gpu_type: *gpu };
            assert!(info.compute_units_count() > 0, "{:?} needs a core count", gpu);
        }
        assert_eq!(AppleInfo::default().compute_units_count(), 0);
    }

    #[test]
    fn display_uses_marketing_names() {
        assert_eq!(AppleGpu::A12Z.to_string(), "Apple A12Z");
        assert_eq!(AppleGpu::Unknown.to_string(), "unknown Apple");
    }
}
