//! ARM Mali GPU model database
//!
//! Mali renderer strings carry the model name ("Mali-G78", "Mali-T880"),
//! so identification is a token scan. Capability questions are answered
//! per microarchitecture family (Midgard, Bifrost, Valhall), which is
//! derived from the model, never stored independently.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Known ARM Mali GPU models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MaliGpu {
    /// Model not recognized
    #[default]
    Unknown,
    /// Mali-T604
    T604,
    /// Mali-T622
    T622,
    /// Mali-T624
    T624,
    /// Mali-T628
    T628,
    /// Mali-T658
    T658,
    /// Mali-T678
    T678,
    /// Mali-T720
    T720,
    /// Mali-T760
    T760,
    /// Mali-T820
    T820,
    /// Mali-T830
    T830,
    /// Mali-T860
    T860,
    /// Mali-T880
    T880,
    /// Mali-G31
    G31,
    /// Mali-G51
    G51,
    /// Mali-G71
    G71,
    /// Mali-G52
    G52,
    /// Mali-G72
    G72,
    /// Mali-G76
    G76,
    /// Mali-G57
    G57,
    /// Mali-G77
    G77,
    /// Mali-G68
    G68,
    /// Mali-G78
    G78,
}

/// Mali microarchitecture families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaliFamily {
    /// Family not known (unrecognized model)
    Unknown,
    /// Midgard T-series sub-generation (T6xx)
    MidgardT6xx,
    /// Midgard T-series sub-generation (T7xx)
    MidgardT7xx,
    /// Midgard T-series sub-generation (T8xx)
    MidgardT8xx,
    /// First Bifrost generation (G31/G51/G71)
    BifrostGen1,
    /// Second Bifrost generation (G52/G72)
    BifrostGen2,
    /// Third Bifrost generation (G76)
    BifrostGen3,
    /// Valhall architecture (G57 onward)
    Valhall,
}

/// Model-token lookup table, ordered longest token first
pub const MALI_GPU_TOKENS: &[(&str, MaliGpu)] = &[
    ("t604", MaliGpu::T604),
    ("t622", MaliGpu::T622),
    ("t624", MaliGpu::T624),
    ("t628", MaliGpu::T628),
    ("t658", MaliGpu::T658),
    ("t678", MaliGpu::T678),
    ("t720", MaliGpu::T720),
    ("t760", MaliGpu::T760),
    ("t820", MaliGpu::T820),
    ("t830", MaliGpu::T830),
    ("t860", MaliGpu::T860),
    ("t880", MaliGpu::T880),
    ("g31", MaliGpu::G31),
    ("g51", MaliGpu::G51),
    ("g71", MaliGpu::G71),
    ("g52", MaliGpu::G52),
    ("g72", MaliGpu::G72),
    ("g76", MaliGpu::G76),
    ("g57", MaliGpu::G57),
    ("g77", MaliGpu::G77),
    ("g68", MaliGpu::G68),
    ("g78", MaliGpu::G78),
];

/// Identify a Mali GPU from a device description string
///
/// Tokens are matched case-insensitively anywhere in the string. Returns
/// [`MaliGpu::Unknown`] when no known model token is present.
pub fn identify_mali_gpu(gpu_description: &str) -> MaliGpu {
    let lowered = gpu_description.to_lowercase();
    for (token, gpu) in MALI_GPU_TOKENS {
        if lowered.contains(token) {
            return *gpu;
        }
    }
    MaliGpu::Unknown
}

impl MaliGpu {
    /// Microarchitecture family this model belongs to
    pub fn family(&self) -> MaliFamily {
        use MaliGpu::*;
        match self {
            T604 | T622 | T624 | T628 | T658 | T678 => MaliFamily::MidgardT6xx,
            T720 | T760 => MaliFamily::MidgardT7xx,
            T820 | T830 | T860 | T880 => MaliFamily::MidgardT8xx,
            G31 | G51 | G71 => MaliFamily::BifrostGen1,
            G52 | G72 => MaliFamily::BifrostGen2,
            G76 => MaliFamily::BifrostGen3,
            G57 | G77 | G68 | G78 => MaliFamily::Valhall,
            Unknown => MaliFamily::Unknown,
        }
    }
}

impl fmt::Display for MaliGpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match MALI_GPU_TOKENS.iter().find(|(_, gpu)| gpu == self) {
            Some((token, _)) => write!(f, "Mali-{}", token.to_uppercase()),
            None => write!(f, "unknown Mali"),
        }
    }
}

/// Classified Mali GPU
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MaliInfo {
    /// Identified GPU model
    pub gpu_version: MaliGpu,
}

impl MaliInfo {
    /// Classify a device description string
    pub fn new(gpu_description: &str) -> Self {
        Self {
            gpu_version: identify_mali_gpu(gpu_description),
        }
    }

    /// True for Midgard T6xx models
    pub fn is_mali_t6xx(&self) -> bool {
        self.gpu_version.family() == MaliFamily::MidgardT6xx
    }

    /// True for Midgard T7xx models
    pub fn is_mali_t7xx(&self) -> bool {
        self.gpu_version.family() == MaliFamily::MidgardT7xx
    }

    /// True for Midgard T8xx models
    pub fn is_mali_t8xx(&self) -> bool {
        self.gpu_version.family() == MaliFamily::MidgardT8xx
    }

    /// True for the Midgard architecture (any T-series)
    pub fn is_midgard(&self) -> bool {
        self.is_mali_t6xx() || self.is_mali_t7xx() || self.is_mali_t8xx()
    }

    /// True for first-generation Bifrost models
    pub fn is_bifrost_gen1(&self) -> bool {
        self.gpu_version.family() == MaliFamily::BifrostGen1
    }

    /// True for second-generation Bifrost models
    pub fn is_bifrost_gen2(&self) -> bool {
        self.gpu_version.family() == MaliFamily::BifrostGen2
    }

    /// True for third-generation Bifrost models
    pub fn is_bifrost_gen3(&self) -> bool {
        self.gpu_version.family() == MaliFamily::BifrostGen3
    }

    /// True for the Bifrost architecture (any generation)
    pub fn is_bifrost(&self) -> bool {
        self.is_bifrost_gen1() || self.is_bifrost_gen2() || self.is_bifrost_gen3()
    }

    /// True for the Valhall architecture
    pub fn is_valhall(&self) -> bool {
        self.gpu_version.family() == MaliFamily::Valhall
    }
}
