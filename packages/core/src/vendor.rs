// ABOUTME: Vendor record types shared by the environment inventory
// ABOUTME: One SelectedVendor describes one product already deployed in the customer environment

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category a vendor product belongs to in the environment inventory
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VendorCategory {
    WiredSwitching,
    Wireless,
    Routing,
    Firewall,
    Nac,
    Siem,
    Edr,
    IdentityProvider,
    Mfa,
    Pki,
    CloudProvider,
    SaasPlatform,
}

impl fmt::Display for VendorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VendorCategory::WiredSwitching => "Wired Switching",
            VendorCategory::Wireless => "Wireless",
            VendorCategory::Routing => "Routing",
            VendorCategory::Firewall => "Firewall",
            VendorCategory::Nac => "NAC",
            VendorCategory::Siem => "SIEM",
            VendorCategory::Edr => "EDR",
            VendorCategory::IdentityProvider => "Identity Provider",
            VendorCategory::Mfa => "MFA",
            VendorCategory::Pki => "PKI",
            VendorCategory::CloudProvider => "Cloud Provider",
            VendorCategory::SaasPlatform => "SaaS Platform",
        };
        write!(f, "{}", label)
    }
}

/// How urgently the product must integrate with the NAC rollout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationPriority {
    Critical,
    High,
    Medium,
    Low,
}

impl Default for IntegrationPriority {
    fn default() -> Self {
        IntegrationPriority::Medium
    }
}

/// When the customer expects to replace the product, if ever
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReplacementTimeline {
    Immediate,
    SixMonths,
    TwelveMonths,
    EighteenMonths,
    NoPlans,
}

impl Default for ReplacementTimeline {
    fn default() -> Self {
        ReplacementTimeline::NoPlans
    }
}

/// One hardware/software model line under a selected vendor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VendorModel {
    pub model: String,
    pub firmware: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub location: String,
    pub notes: String,
}

fn default_quantity() -> u32 {
    1
}

impl Default for VendorModel {
    fn default() -> Self {
        VendorModel {
            model: String::new(),
            firmware: String::new(),
            quantity: 1,
            location: String::new(),
            notes: String::new(),
        }
    }
}

/// A vendor product present in the customer environment, with
/// satisfaction and replacement metadata collected by the wizard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectedVendor {
    pub vendor_name: String,
    pub category: VendorCategory,
    #[serde(default)]
    pub models: Vec<VendorModel>,
    /// 1-5, collected from the vendor dialog; 3 when the user leaves it alone
    #[serde(default = "default_satisfaction")]
    pub satisfaction_rating: u8,
    #[serde(default)]
    pub pain_points: Vec<String>,
    #[serde(default)]
    pub integration_priority: IntegrationPriority,
    #[serde(default)]
    pub replacement_timeline: ReplacementTimeline,
}

fn default_satisfaction() -> u8 {
    3
}

impl SelectedVendor {
    pub fn new(vendor_name: impl Into<String>, category: VendorCategory) -> Self {
        SelectedVendor {
            vendor_name: vendor_name.into(),
            category,
            models: Vec::new(),
            satisfaction_rating: 3,
            pain_points: Vec::new(),
            integration_priority: IntegrationPriority::default(),
            replacement_timeline: ReplacementTimeline::default(),
        }
    }
}
