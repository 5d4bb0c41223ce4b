//! # GPUCAPS - GPU Capability Classification
//!
//! A lightweight Rust library for classifying free-form GPU driver
//! strings (renderer name, vendor name, version string) into structured
//! chipset and capability information.
//!
//! ## Features
//!
//! - **Qualcomm Adreno support**: model identification plus wave size,
//!   register budget and in-flight wave formulas per chip series
//! - **Apple support**: chip identification plus Bionic-era, rounding
//!   mode and compute-unit lookups
//! - **ARM Mali support**: model identification plus
//!   Midgard/Bifrost/Valhall architecture predicates
//! - **Vendor tagging** for PowerVR, NVIDIA, AMD and Intel
//! - **Never fails**: unrecognized hardware classifies as `Unknown`
//!   with documented sentinel capabilities
//! - **Pure and deterministic**: no I/O, no probing, no global state
//! - **JSON export** of the full capability record via serde
//!
//! ## Quick Start
//!
//! ```rust
//! use gpucaps::{get_gpu_info_from_description, GpuInfo};
//!
//! let mut gpu_info = GpuInfo::default();
//! get_gpu_info_from_description("Adreno (TM) 640", &mut gpu_info);
//! println!("GPU vendor: {}", gpu_info.vendor);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod api;
pub mod error;
pub mod mappings;

// Re-export main API for easy access
pub use api::{
    get_gpu_info_from_description, is_open_gl_31_or_above, parse_gl_version, GpuInfo, VendorInfo,
};
pub use error::{ClassifyError, ClassifyResult};
pub use mappings::{
    detect_gpu_vendor, identify_adreno_gpu, identify_apple_gpu, identify_mali_gpu, AdrenoGpu,
    AdrenoInfo, AdrenoSeries, AppleGpu, AppleInfo, GpuVendor, MaliFamily, MaliGpu, MaliInfo,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version
///
/// # Example
///
/// ```
/// println!("Using gpucaps v{}", gpucaps::version());
/// ```
pub fn version() -> &'static str {
    VERSION
}

/// Prelude module for convenient imports
///
/// # Example
///
/// ```
/// use gpucaps::prelude::*;
///
/// let mut gpu_info = GpuInfo::default();
/// get_gpu_info_from_description("ARM Mali-G78", &mut gpu_info);
/// ```
pub mod prelude {
    pub use crate::api::{
        get_gpu_info_from_description, is_open_gl_31_or_above, parse_gl_version, GpuInfo,
        VendorInfo,
    };
    pub use crate::mappings::{
        detect_gpu_vendor, identify_adreno_gpu, identify_apple_gpu, identify_mali_gpu, AdrenoGpu,
        AdrenoInfo, AppleGpu, AppleInfo, GpuVendor, MaliGpu, MaliInfo,
    };
    pub use crate::version;
}
