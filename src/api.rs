//! High-level API for GPU capability classification
//!
//! The caller queries the driver for renderer/vendor/version strings and
//! numeric limits, fills a [`GpuInfo`], and hands the combined description
//! to [`get_gpu_info_from_description`]. That call sets the vendor tag and
//! the matching per-vendor payload; everything else on the record is
//! caller-owned pass-through data.

use crate::error::{ClassifyError, ClassifyResult};
use crate::mappings::{
    detect_gpu_vendor, AdrenoInfo, AppleInfo, GpuVendor, MaliInfo,
};
use log::debug;
use serde::{Deserialize, Serialize};

/// Per-vendor classification payload
///
/// At most one vendor's sub-record exists per device, so the payload is a
/// tagged union rather than three mostly-empty fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum VendorInfo {
    /// No vendor-specific data (unrecognized or out-of-scope vendor)
    #[default]
    None,
    /// Qualcomm Adreno payload
    Adreno(AdrenoInfo),
    /// Apple payload
    Apple(AppleInfo),
    /// ARM Mali payload
    Mali(MaliInfo),
}

impl VendorInfo {
    /// Adreno payload, if this device classified as Adreno
    pub fn as_adreno(&self) -> Option<&AdrenoInfo> {
        match self {
            VendorInfo::Adreno(info) => Some(info),
            _ => None,
        }
    }

    /// Apple payload, if this device classified as Apple
    pub fn as_apple(&self) -> Option<&AppleInfo> {
        match self {
            VendorInfo::Apple(info) => Some(info),
            _ => None,
        }
    }

    /// Mali payload, if this device classified as Mali
    pub fn as_mali(&self) -> Option<&MaliInfo> {
        match self {
            VendorInfo::Mali(info) => Some(info),
            _ => None,
        }
    }
}

/// Structured GPU capability record
///
/// String fields and numeric limits are opaque pass-through values the
/// caller obtained from the driver; classification only writes `vendor`
/// and `vendor_info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpuInfo {
    /// Classified GPU vendor
    pub vendor: GpuVendor,
    /// Raw renderer string as reported by the driver
    pub renderer_name: String,
    /// Raw vendor string as reported by the driver
    pub vendor_name: String,
    /// Raw version string as reported by the driver
    pub version: String,
    /// GL major version, `-1` when unknown
    pub major_version: i32,
    /// GL minor version, `-1` when unknown
    pub minor_version: i32,
    /// Supported extension names
    pub extensions: Vec<String>,
    /// Maximum shader storage buffer bindings
    pub max_ssbo_bindings: u32,
    /// Maximum image bindings
    pub max_image_bindings: u32,
    /// Maximum work group size per dimension
    pub max_work_group_size: Vec<u32>,
    /// Maximum total work group invocations
    pub max_work_group_invocations: u32,
    /// Maximum 2D texture dimension
    pub max_texture_size: u32,
    /// Maximum image units
    pub max_image_units: u32,
    /// Maximum array texture layers
    pub max_array_texture_layers: u32,
    /// Compute unit count as reported by the driver, `0` when unreported
    pub max_compute_units: u32,
    /// Wave/warp widths the compute pipeline supports
    pub supported_subgroup_sizes: Vec<u32>,
    /// Vendor-specific classification payload
    pub vendor_info: VendorInfo,
}

impl Default for GpuInfo {
    fn default() -> Self {
        Self {
            vendor: GpuVendor::Unknown,
            renderer_name: String::new(),
            vendor_name: String::new(),
            version: String::new(),
            major_version: -1,
            minor_version: -1,
            extensions: Vec::new(),
            max_ssbo_bindings: 0,
            max_image_bindings: 0,
            max_work_group_size: Vec::new(),
            max_work_group_invocations: 0,
            max_texture_size: 0,
            max_image_units: 0,
            max_array_texture_layers: 0,
            max_compute_units: 0,
            supported_subgroup_sizes: Vec::new(),
            vendor_info: VendorInfo::None,
        }
    }
}

impl GpuInfo {
    /// True when the vendor classified as Qualcomm Adreno
    pub fn is_adreno(&self) -> bool {
        self.vendor == GpuVendor::Qualcomm
    }

    /// True when the vendor classified as Apple
    pub fn is_apple(&self) -> bool {
        self.vendor == GpuVendor::Apple
    }

    /// True when the vendor classified as ARM Mali
    pub fn is_mali(&self) -> bool {
        self.vendor == GpuVendor::Mali
    }

    /// True when the vendor classified as Imagination PowerVR
    pub fn is_powervr(&self) -> bool {
        self.vendor == GpuVendor::PowerVR
    }

    /// True when the vendor classified as NVIDIA
    pub fn is_nvidia(&self) -> bool {
        self.vendor == GpuVendor::Nvidia
    }

    /// True when the vendor classified as AMD
    pub fn is_amd(&self) -> bool {
        self.vendor == GpuVendor::Amd
    }

    /// True when the vendor classified as Intel
    pub fn is_intel(&self) -> bool {
        self.vendor == GpuVendor::Intel
    }

    /// Whether round-to-nearest float rounding is available
    ///
    /// Rounding-mode ambiguity is an Apple hardware concern; every other
    /// vendor in scope supports it.
    pub fn is_round_to_nearest_supported(&self) -> bool {
        match self.vendor_info.as_apple() {
            Some(info) => info.is_round_to_nearest_supported(),
            None => true,
        }
    }

    /// Whether the device runs a fixed 32-wide wave
    ///
    /// True when Adreno hardware reports a 32-wide full wave, or when the
    /// driver-reported subgroup sizes contain 32 and nothing else.
    pub fn is_wave_size_equal_to_32(&self) -> bool {
        if let Some(info) = self.vendor_info.as_adreno() {
            if info.wave_size(true) == 32 {
                return true;
            }
        }
        !self.supported_subgroup_sizes.is_empty()
            && self.supported_subgroup_sizes.iter().all(|&size| size == 32)
    }

    /// Compute unit count for this device
    ///
    /// Apple chips use the per-chip hardware table; every other vendor
    /// falls back to the driver-reported `max_compute_units` limit.
    pub fn compute_units_count(&self) -> u32 {
        match self.vendor_info.as_apple() {
            Some(info) => info.compute_units_count(),
            None => self.max_compute_units,
        }
    }

    /// Case-insensitive membership test over the extension list
    pub fn supports_extension(&self, name: &str) -> bool {
        self.extensions
            .iter()
            .any(|extension| extension.eq_ignore_ascii_case(name))
    }

    /// Fill `major_version`/`minor_version` from the raw version string
    ///
    /// Leaves the `-1` sentinels untouched when no tuple is found.
    pub fn parse_version_string(&mut self) {
        match parse_gl_version(&self.version) {
            Ok((major, minor)) => {
                self.major_version = major;
                self.minor_version = minor;
            }
            Err(err) => debug!("keeping unknown GL version: {}", err),
        }
    }
}

/// True when the record reports OpenGL (ES) 3.1 or above
pub fn is_open_gl_31_or_above(gpu_info: &GpuInfo) -> bool {
    (gpu_info.major_version == 3 && gpu_info.minor_version >= 1) || gpu_info.major_version > 3
}

/// Extract a `major.minor` tuple from a driver version string
///
/// Takes the first whitespace-separated token that parses as
/// `<digits>.<digits>`, so `"OpenGL ES 3.2 V@415.0"` yields `(3, 2)`.
pub fn parse_gl_version(version: &str) -> ClassifyResult<(i32, i32)> {
    for token in version.split_whitespace() {
        let mut parts = token.splitn(3, '.');
        if let (Some(major), Some(minor)) = (parts.next(), parts.next()) {
            let minor = minor.trim_end_matches(|c: char| !c.is_ascii_digit());
            if let (Ok(major), Ok(minor)) = (major.parse::<i32>(), minor.parse::<i32>()) {
                return Ok((major, minor));
            }
        }
    }
    Err(ClassifyError::MalformedVersion(version.to_string()))
}

/// Classify a free-text GPU description into an existing record
///
/// Sets `vendor` and, for Qualcomm/Apple/Mali, the matching
/// [`VendorInfo`] payload; all other fields are left untouched. Never
/// fails: unrecognized descriptions classify as
/// [`GpuVendor::Unknown`] with no payload.
pub fn get_gpu_info_from_description(gpu_description: &str, gpu_info: &mut GpuInfo) {
    let vendor = detect_gpu_vendor(gpu_description);
    gpu_info.vendor = vendor;
    gpu_info.vendor_info = match vendor {
        GpuVendor::Qualcomm => VendorInfo::Adreno(AdrenoInfo::new(gpu_description)),
        GpuVendor::Apple => VendorInfo::Apple(AppleInfo::new(gpu_description)),
        GpuVendor::Mali => VendorInfo::Mali(MaliInfo::new(gpu_description)),
        _ => VendorInfo::None,
    };
    match &gpu_info.vendor_info {
        VendorInfo::Adreno(info) => debug!("classified {} as {}", vendor, info.adreno_gpu),
        VendorInfo::Apple(info) => debug!("classified {} as {}", vendor, info.gpu_type),
        VendorInfo::Mali(info) => debug!("classified {} as {}", vendor, info.gpu_version),
        VendorInfo::None => debug!("classified vendor as {}", vendor),
    }
}
