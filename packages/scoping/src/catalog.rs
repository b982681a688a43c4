// ABOUTME: Static vendor, use-case, and pain-point lookup tables
// ABOUTME: Read-only reference data consumed by the wizard dialog and the decision engine

use nacscope_core::{PainPointCategory, VendorCategory};

/// A use case and the business value it unlocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseCaseEntry {
    pub name: &'static str,
    pub business_value: &'static str,
}

/// A reference pain point title under a category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PainPointEntry {
    pub title: &'static str,
    pub category: PainPointCategory,
}

/// Fixed vendor lists per category. The vendor dialog only accepts
/// selections from the list for its category.
pub fn vendor_options(category: VendorCategory) -> &'static [&'static str] {
    match category {
        VendorCategory::WiredSwitching => &[
            "Cisco",
            "Aruba (HPE)",
            "Juniper",
            "Extreme Networks",
            "Arista",
            "Dell Networking",
            "Huawei",
        ],
        VendorCategory::Wireless => &[
            "Cisco",
            "Aruba (HPE)",
            "Juniper Mist",
            "Ruckus",
            "Ubiquiti",
            "Fortinet",
        ],
        VendorCategory::Routing => &["Cisco", "Juniper", "Arista", "Fortinet", "Mikrotik"],
        VendorCategory::Firewall => &[
            "Palo Alto Networks",
            "Fortinet",
            "Check Point",
            "Cisco",
            "SonicWall",
            "Sophos",
        ],
        VendorCategory::Nac => &[
            "Portnox",
            "Cisco ISE",
            "Aruba ClearPass",
            "Forescout",
            "FortiNAC",
        ],
        VendorCategory::Siem => &[
            "Splunk",
            "Microsoft Sentinel",
            "IBM QRadar",
            "Elastic Security",
            "LogRhythm",
        ],
        VendorCategory::Edr => &[
            "CrowdStrike",
            "SentinelOne",
            "Microsoft Defender for Endpoint",
            "Carbon Black",
            "Trend Micro",
        ],
        VendorCategory::IdentityProvider => &[
            "Microsoft Entra ID",
            "Okta",
            "Ping Identity",
            "Google Workspace",
            "OneLogin",
        ],
        VendorCategory::Mfa => &[
            "Duo",
            "Okta Verify",
            "Microsoft Authenticator",
            "RSA SecurID",
            "Yubico",
        ],
        VendorCategory::Pki => &[
            "Microsoft AD CS",
            "DigiCert",
            "Sectigo",
            "Keyfactor",
            "Venafi",
        ],
        VendorCategory::CloudProvider => &["AWS", "Microsoft Azure", "Google Cloud", "Oracle Cloud"],
        VendorCategory::SaasPlatform => &[
            "Microsoft 365",
            "Google Workspace",
            "Salesforce",
            "ServiceNow",
            "Workday",
        ],
    }
}

/// Returns true when `vendor` is a known option for the category.
/// Matching is case-insensitive; the stored record keeps the catalog spelling.
pub fn is_known_vendor(category: VendorCategory, vendor: &str) -> bool {
    canonical_vendor(category, vendor).is_some()
}

/// Resolve a user-typed vendor name to its catalog spelling
pub fn canonical_vendor(category: VendorCategory, vendor: &str) -> Option<&'static str> {
    vendor_options(category)
        .iter()
        .find(|option| option.eq_ignore_ascii_case(vendor.trim()))
        .copied()
}

/// NAC use cases the architecture phase maps to business value
pub fn use_case_library() -> &'static [UseCaseEntry] {
    &[
        UseCaseEntry {
            name: "802.1X wired authentication",
            business_value: "Only known devices reach the wired network",
        },
        UseCaseEntry {
            name: "802.1X wireless authentication",
            business_value: "Certificate-backed Wi-Fi replaces shared PSKs",
        },
        UseCaseEntry {
            name: "Guest access",
            business_value: "Visitors get isolated connectivity without IT tickets",
        },
        UseCaseEntry {
            name: "BYOD onboarding",
            business_value: "Personal devices enroll without helpdesk involvement",
        },
        UseCaseEntry {
            name: "IoT fingerprinting and segmentation",
            business_value: "Headless devices are identified and fenced automatically",
        },
        UseCaseEntry {
            name: "Device risk posture",
            business_value: "Non-compliant endpoints are quarantined before they connect",
        },
        UseCaseEntry {
            name: "Compliance reporting",
            business_value: "Audit evidence is generated instead of assembled by hand",
        },
        UseCaseEntry {
            name: "Conditional access integration",
            business_value: "Network access follows the same policy as application access",
        },
    ]
}

/// Reference pain point titles the wizard offers as starting points
pub fn pain_point_library() -> &'static [PainPointEntry] {
    &[
        PainPointEntry {
            title: "Unknown devices on the network",
            category: PainPointCategory::Visibility,
        },
        PainPointEntry {
            title: "Manual MAC address management",
            category: PainPointCategory::Operational,
        },
        PainPointEntry {
            title: "Flat network with no segmentation",
            category: PainPointCategory::Security,
        },
        PainPointEntry {
            title: "Audit findings on access control",
            category: PainPointCategory::Compliance,
        },
        PainPointEntry {
            title: "Shared Wi-Fi passwords",
            category: PainPointCategory::Security,
        },
        PainPointEntry {
            title: "Appliance renewal costs",
            category: PainPointCategory::Cost,
        },
        PainPointEntry {
            title: "Guest onboarding tickets",
            category: PainPointCategory::Operational,
        },
    ]
}
