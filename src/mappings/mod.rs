//! Hardware database for GPU vendor and model identification

pub mod adreno;
pub mod apple;
pub mod mali;

// Re-exports for convenient usage
pub use adreno::{identify_adreno_gpu, AdrenoGpu, AdrenoInfo, AdrenoSeries, ADRENO_GPU_TOKENS};
pub use apple::{identify_apple_gpu, AppleGpu, AppleInfo, APPLE_GPU_TOKENS};
pub use mali::{identify_mali_gpu, MaliFamily, MaliGpu, MaliInfo, MALI_GPU_TOKENS};

use serde::{Deserialize, Serialize};

/// Known GPU vendors supported by this library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GpuVendor {
    /// Apple SoC GPUs
    Apple,
    /// Qualcomm Adreno GPUs
    Qualcomm,
    /// ARM Mali GPUs
    Mali,
    /// Imagination PowerVR GPUs
    PowerVR,
    /// NVIDIA GPUs
    Nvidia,
    /// AMD GPUs
    Amd,
    /// Intel GPUs
    Intel,
    /// Unknown or unsupported vendor
    #[default]
    Unknown,
}

impl std::fmt::Display for GpuVendor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GpuVendor::Apple => write!(f, "Apple"),
            GpuVendor::Qualcomm => write!(f, "Qualcomm Adreno"),
            GpuVendor::Mali => write!(f, "ARM Mali"),
            GpuVendor::PowerVR => write!(f, "Imagination PowerVR"),
            GpuVendor::Nvidia => write!(f, "NVIDIA"),
            GpuVendor::Amd => write!(f, "AMD"),
            GpuVendor::Intel => write!(f, "Intel"),
            GpuVendor::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Vendor-identifying tokens, first match wins
///
/// The short, collision-prone tokens ("amd", "arm") sit at the end so a
/// specific brand name always beats an accidental substring hit.
pub const GPU_VENDOR_TOKENS: &[(&str, GpuVendor)] = &[
    ("apple", GpuVendor::Apple),
    ("qualcomm", GpuVendor::Qualcomm),
    ("adreno", GpuVendor::Qualcomm),
    ("powervr", GpuVendor::PowerVR),
    ("nvidia", GpuVendor::Nvidia),
    ("intel", GpuVendor::Intel),
    ("radeon", GpuVendor::Amd),
    ("amd", GpuVendor::Amd),
    ("mali", GpuVendor::Mali),
    ("arm", GpuVendor::Mali),
];

/// Determine the GPU vendor from a free-text device description
///
/// Case-insensitive substring search over [`GPU_VENDOR_TOKENS`]; returns
/// [`GpuVendor::Unknown`] when nothing matches. Never fails: an
/// unrecognized string is a valid terminal classification.
pub fn detect_gpu_vendor(gpu_description: &str) -> GpuVendor {
    let lowered = gpu_description.to_lowercase();
    for (token, vendor) in GPU_VENDOR_TOKENS {
        if lowered.contains(token) {
            return *vendor;
        }
    }
    GpuVendor::Unknown
}
