//! Qualcomm Adreno GPU model database
//!
//! Adreno drivers report the chip model inside the GL version string
//! (e.g. `"OpenGL ES 3.2 V@415.0 (GIT@..., ...) Adreno (TM) 640"`), so
//! identification is a substring scan over known model tokens.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Known Qualcomm Adreno chip models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AdrenoGpu {
    /// Adreno 685
    Adreno685,
    /// Adreno 680
    Adreno680,
    /// Adreno 675
    Adreno675,
    /// Adreno 650
    Adreno650,
    /// Adreno 640
    Adreno640,
    /// Adreno 630
    Adreno630,
    /// Adreno 620
    Adreno620,
    /// Adreno 618
    Adreno618,
    /// Adreno 616
    Adreno616,
    /// Adreno 615
    Adreno615,
    /// Adreno 612
    Adreno612,
    /// Adreno 610
    Adreno610,
    /// Adreno 605
    Adreno605,
    /// Adreno 540
    Adreno540,
    /// Adreno 530
    Adreno530,
    /// Adreno 512
    Adreno512,
    /// Adreno 510
    Adreno510,
    /// Adreno 509
    Adreno509,
    /// Adreno 508
    Adreno508,
    /// Adreno 506
    Adreno506,
    /// Adreno 505
    Adreno505,
    /// Adreno 504
    Adreno504,
    /// Adreno 430
    Adreno430,
    /// Adreno 420
    Adreno420,
    /// Adreno 418
    Adreno418,
    /// Adreno 405
    Adreno405,
    /// Adreno 330
    Adreno330,
    /// Adreno 320
    Adreno320,
    /// Adreno 308
    Adreno308,
    /// Adreno 306
    Adreno306,
    /// Adreno 305
    Adreno305,
    /// Adreno 304
    Adreno304,
    /// Adreno 225
    Adreno225,
    /// Adreno 220
    Adreno220,
    /// Adreno 205
    Adreno205,
    /// Adreno 203
    Adreno203,
    /// Adreno 200
    Adreno200,
    /// Adreno 130
    Adreno130,
    /// Adreno 120
    Adreno120,
    /// Model not recognized
    #[default]
    Unknown,
}

/// Adreno chip series, derived from the numeric naming convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AdrenoSeries {
    /// Series not known (unrecognized model)
    Unknown,
    /// Adreno 1xx series
    Adreno1xx,
    /// Adreno 2xx series
    Adreno2xx,
    /// Adreno 3xx series
    Adreno3xx,
    /// Adreno 4xx series
    Adreno4xx,
    /// Adreno 5xx series
    Adreno5xx,
    /// Adreno 6xx series
    Adreno6xx,
}

/// Model-token lookup table, ordered longest token first
///
/// The ordering matters: a longer token must be tried before any shorter
/// token sharing its numeric prefix, or the shorter one would shadow it.
/// A unit test asserts this invariant.
pub const ADRENO_GPU_TOKENS: &[(&str, AdrenoGpu)] = &[
    ("685", AdrenoGpu::Adreno685),
    ("680", AdrenoGpu::Adreno680),
    ("675", AdrenoGpu::Adreno675),
    ("650", AdrenoGpu::Adreno650),
    ("640", AdrenoGpu::Adreno640),
    ("630", AdrenoGpu::Adreno630),
    ("620", AdrenoGpu::Adreno620),
    ("618", AdrenoGpu::Adreno618),
    ("616", AdrenoGpu::Adreno616),
    ("615", AdrenoGpu::Adreno615),
    ("612", AdrenoGpu::Adreno612),
    ("610", AdrenoGpu::Adreno610),
    ("605", AdrenoGpu::Adreno605),
    ("540", AdrenoGpu::Adreno540),
    ("530", AdrenoGpu::Adreno530),
    ("512", AdrenoGpu::Adreno512),
    ("510", AdrenoGpu::Adreno510),
    ("509", AdrenoGpu::Adreno509),
    ("508", AdrenoGpu::Adreno508),
    ("506", AdrenoGpu::Adreno506),
    ("505", AdrenoGpu::Adreno505),
    ("504", AdrenoGpu::Adreno504),
    ("430", AdrenoGpu::Adreno430),
    ("420", AdrenoGpu::Adreno420),
    ("418", AdrenoGpu::Adreno418),
    ("405", AdrenoGpu::Adreno405),
    ("330", AdrenoGpu::Adreno330),
    ("320", AdrenoGpu::Adreno320),
    ("308", AdrenoGpu::Adreno308),
    ("306", AdrenoGpu::Adreno306),
    ("305", AdrenoGpu::Adreno305),
    ("304", AdrenoGpu::Adreno304),
    ("225", AdrenoGpu::Adreno225),
    ("220", AdrenoGpu::Adreno220),
    ("205", AdrenoGpu::Adreno205),
    ("203", AdrenoGpu::Adreno203),
    ("200", AdrenoGpu::Adreno200),
    ("130", AdrenoGpu::Adreno130),
    ("120", AdrenoGpu::Adreno120),
];

/// Driver builds with the broken one-layer texture array path
///
/// Matching is a case-insensitive substring test against the raw driver
/// version string. Extending the list is a data edit only.
const ONE_LAYER_TEXTURE_ARRAY_DENYLIST: &[(AdrenoGpu, &str)] = &[
    (AdrenoGpu::Adreno630, "v@331"),
    (AdrenoGpu::Adreno630, "v@269"),
];

/// Identify an Adreno chip model from a driver version string
///
/// Tokens are matched case-insensitively anywhere in the string. Returns
/// [`AdrenoGpu::Unknown`] when no known model token is present.
pub fn identify_adreno_gpu(version_string: &str) -> AdrenoGpu {
    let lowered = version_string.to_lowercase();
    for (token, gpu) in ADRENO_GPU_TOKENS {
        if lowered.contains(token) {
            return *gpu;
        }
    }
    AdrenoGpu::Unknown
}

impl AdrenoGpu {
    /// Chip series this model belongs to
    pub fn series(&self) -> AdrenoSeries {
        use AdrenoGpu::*;
        match self {
            Adreno685 | Adreno680 | Adreno675 | Adreno650 | Adreno640 | Adreno630 | Adreno620
            | Adreno618 | Adreno616 | Adreno615 | Adreno612 | Adreno610 | Adreno605 => {
                AdrenoSeries::Adreno6xx
            }
            Adreno540 | Adreno530 | Adreno512 | Adreno510 | Adreno509 | Adreno508 | Adreno506
            | Adreno505 | Adreno504 => AdrenoSeries::Adreno5xx,
            Adreno430 | Adreno420 | Adreno418 | Adreno405 => AdrenoSeries::Adreno4xx,
            Adreno330 | Adreno320 | Adreno308 | Adreno306 | Adreno305 | Adreno304 => {
                AdrenoSeries::Adreno3xx
            }
            Adreno225 | Adreno220 | Adreno205 | Adreno203 | Adreno200 => AdrenoSeries::Adreno2xx,
            Adreno130 | Adreno120 => AdrenoSeries::Adreno1xx,
            Unknown => AdrenoSeries::Unknown,
        }
    }
}

impl fmt::Display for AdrenoGpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match ADRENO_GPU_TOKENS.iter().find(|(_, gpu)| gpu == self) {
            Some((token, _)) => write!(f, "Adreno {}", token),
            None => write!(f, "unknown Adreno"),
        }
    }
}

/// Classified Adreno chip plus driver-dependent flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdrenoInfo {
    /// Identified chip model
    pub adreno_gpu: AdrenoGpu,
    /// Whether one-layer texture arrays work on this driver build
    ///
    /// Defaults to `true`; cleared only for model/driver combinations on
    /// the fixed denylist of known-broken builds.
    pub supports_one_layer_texture_array: bool,
}

impl Default for AdrenoInfo {
    fn default() -> Self {
        Self {
            adreno_gpu: AdrenoGpu::Unknown,
            supports_one_layer_texture_array: true,
        }
    }
}

impl AdrenoInfo {
    /// Classify a driver version string
    pub fn new(version_string: &str) -> Self {
        let adreno_gpu = identify_adreno_gpu(version_string);
        let lowered = version_string.to_lowercase();
        let denylisted = ONE_LAYER_TEXTURE_ARRAY_DENYLIST
            .iter()
            .any(|(gpu, build)| *gpu == adreno_gpu && lowered.contains(build));
        Self {
            adreno_gpu,
            supports_one_layer_texture_array: !denylisted,
        }
    }

    /// True for Adreno 1xx series chips
    pub fn is_adreno_1xx(&self) -> bool {
        self.adreno_gpu.series() == AdrenoSeries::Adreno1xx
    }

    /// True for Adreno 2xx series chips
    pub fn is_adreno_2xx(&self) -> bool {
        self.adreno_gpu.series() == AdrenoSeries::Adreno2xx
    }

    /// True for Adreno 3xx series chips
    pub fn is_adreno_3xx(&self) -> bool {
        self.adreno_gpu.series() == AdrenoSeries::Adreno3xx
    }

    /// True for Adreno 4xx series chips
    pub fn is_adreno_4xx(&self) -> bool {
        self.adreno_gpu.series() == AdrenoSeries::Adreno4xx
    }

    /// True for Adreno 5xx series chips
    pub fn is_adreno_5xx(&self) -> bool {
        self.adreno_gpu.series() == AdrenoSeries::Adreno5xx
    }

    /// True for Adreno 6xx series chips
    pub fn is_adreno_6xx(&self) -> bool {
        self.adreno_gpu.series() == AdrenoSeries::Adreno6xx
    }

    /// True for Adreno 6xx or any later series
    pub fn is_adreno_6xx_or_higher(&self) -> bool {
        self.adreno_gpu.series() >= AdrenoSeries::Adreno6xx
    }

    /// Hardware wave width in threads
    ///
    /// 6xx-and-later parts run 64-wide full waves; half waves and all
    /// older series are 32-wide.
    pub fn wave_size(&self, full_wave: bool) -> u32 {
        if full_wave && self.is_adreno_6xx_or_higher() {
            64
        } else {
            32
        }
    }

    /// Register file size per compute unit in bytes
    ///
    /// Known only for 6xx parts (figures obtained with Snapdragon
    /// Profiler); returns `0` for chips without a published value.
    pub fn register_memory_size_per_compute_unit(&self) -> u32 {
        if !self.is_adreno_6xx() {
            return 0;
        }
        match self.adreno_gpu {
            AdrenoGpu::Adreno640 => 128 * 144 * 16,
            AdrenoGpu::Adreno650 => 128 * 64 * 16,
            _ => 128 * 96 * 16,
        }
    }

    /// Hardware cap on in-flight waves per compute unit
    ///
    /// Known only for 6xx parts; returns `0` for anything else.
    pub fn maximum_waves_count(&self) -> u32 {
        if !self.is_adreno_6xx() {
            return 0;
        }
        match self.adreno_gpu {
            AdrenoGpu::Adreno640 => 30,
            _ => 16,
        }
    }

    /// In-flight wave count achievable with a given register footprint
    ///
    /// Computes `register_memory / (footprint * wave_size)` clamped to the
    /// hardware cap. A zero footprint is treated as unspecified and
    /// returns the cap itself.
    pub fn maximum_waves_count_for_footprint(
        &self,
        register_footprint_per_thread: u32,
        full_wave: bool,
    ) -> u32 {
        let cap = self.maximum_waves_count();
        if register_footprint_per_thread == 0 {
            return cap;
        }
        let usage_per_wave = register_footprint_per_thread * self.wave_size(full_wave);
        (self.register_memory_size_per_compute_unit() / usage_per_wave).min(cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn token_table_is_ordered_longest_first() {
        for pair in ADRENO_GPU_TOKENS.windows(2) {
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
        for (token, gpu) in ADRENO_GPU_TOKENS {
            let description = format!("OpenGL ES 3.2 Adreno (TM) {}", token);
            assert_eq!(identify_adreno_gpu(&description), *gpu);
        }
    }

    #[rstest]
    #[case("Adreno (TM) 640", AdrenoGpu::Adreno640)]
    #[case("ADRENO (tm) 630", AdrenoGpu::Adreno630)]
    #[case("FX540 something", AdrenoGpu::Adreno540)]
    #[case("no model here", AdrenoGpu::Unknown)]
    fn identifies_models_case_insensitively(#[case] input: &str, #[case] expected: AdrenoGpu) {
        assert_eq!(identify_adreno_gpu(input), expected);
    }

    #[test]
    fn every_known_model_is_in_exactly_one_series() {
        for (_, gpu) in ADRENO_GPU_TOKENS {
            let info = AdrenoInfo {
                adreno_gpu: *gpu,
                ..Default::default()
            };
            let series_hits = [
                info.is_adreno_1xx(),
                info.is_adreno_2xx(),
                info.is_adreno_3xx(),
                info.is_adreno_4xx(),
                info.is_adreno_5xx(),
                info.is_adreno_6xx(),
            ]
            .iter()
            .filter(|hit| **hit)
            .count();
            assert_eq!(series_hits, 1, "{:?} must be in exactly one series", gpu);
        }
    }

    #[test]
    fn six_xx_or_higher_matches_six_xx_for_current_models() {
        for (_, gpu) in ADRENO_GPU_TOKENS {
            let info = AdrenoInfo {
                adreno_gpu: *gpu,
                ..Default::default()
            };
            assert_eq!(info.is_adreno_6xx(), info.is_adreno_6xx_or_higher());
        }
    }

    #[rstest]
    #[case(AdrenoGpu::Adreno640, true, 64)]
    #[case(AdrenoGpu::Adreno640, false, 32)]
    #[case(AdrenoGpu::Adreno540, true, 32)]
    #[case(AdrenoGpu::Adreno320, true, 32)]
    #[case(AdrenoGpu::Unknown, true, 32)]
    fn wave_sizes(#[case] gpu: AdrenoGpu, #[case] full_wave: bool, #[case] expected: u32) {
        let info = AdrenoInfo {
            adreno_gpu: gpu,
            ..Default::default()
        };
        assert_eq!(info.wave_size(full_wave), expected);
    }

    #[test]
    fn register_memory_is_zero_outside_6xx() {
        let info = AdrenoInfo::new("Adreno (TM) 540");
        assert_eq!(info.register_memory_size_per_compute_unit(), 0);
        assert_eq!(info.maximum_waves_count(), 0);

        let info = AdrenoInfo::new("Adreno (TM) 640");
        assert_eq!(info.register_memory_size_per_compute_unit(), 128 * 144 * 16);
        assert_eq!(info.maximum_waves_count(), 30);
    }

    #[test]
    fn waves_count_is_non_increasing_in_footprint() {
        let info = AdrenoInfo::new("Adreno (TM) 640");
        let mut previous = info.maximum_waves_count_for_footprint(1, true);
        for footprint in 2..64 {
            let current = info.maximum_waves_count_for_footprint(footprint, true);
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn waves_count_is_clamped_to_hardware_cap() {
        let info = AdrenoInfo::new("Adreno (TM) 640");
        assert_eq!(info.maximum_waves_count_for_footprint(1, true), 30);
        assert_eq!(info.maximum_waves_count_for_footprint(0, true), 30);
    }

    #[test]
    fn texture_array_denylist_only_hits_listed_builds() {
        let broken = AdrenoInfo::new("OpenGL ES 3.2 V@331.0 Adreno (TM) 630");
        assert!(!broken.supports_one_layer_texture_array);

        let fixed = AdrenoInfo::new("OpenGL ES 3.2 V@415.0 Adreno (TM) 630");
        assert!(fixed.supports_one_layer_texture_array);

        let other_model = AdrenoInfo::new("OpenGL ES 3.2 V@331.0 Adreno (TM) 640");
        assert!(other_model.supports_one_layer_texture_array);
    }

    #[test]
    fn display_uses_marketing_names() {
        assert_eq!(AdrenoGpu::Adreno640.to_string(), "Adreno 640");
        assert_eq!(AdrenoGpu::Unknown.to_string(), "unknown Adreno");
    }
}
