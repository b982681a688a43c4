// ABOUTME: Field-level validation shared by the API boundary and managers
// ABOUTME: Returns Vec<ValidationError> rather than failing on the first problem

use crate::vendor::SelectedVendor;

/// Validation errors for session and vendor data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validates a session name for creation or rename
pub fn validate_session_name(name: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push(ValidationError::new("name", "Session name is required"));
    }

    if name.len() > 200 {
        errors.push(ValidationError::new(
            "name",
            "Session name must be 200 characters or fewer",
        ));
    }

    errors
}

/// Validates a vendor record before it enters the environment inventory
pub fn validate_vendor_record(vendor: &SelectedVendor) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if vendor.vendor_name.trim().is_empty() {
        errors.push(ValidationError::new("vendorName", "Vendor name is required"));
    }

    if !(1..=5).contains(&vendor.satisfaction_rating) {
        errors.push(ValidationError::new(
            "satisfactionRating",
            format!(
                "Satisfaction rating must be between 1 and 5, got {}",
                vendor.satisfaction_rating
            ),
        ));
    }

    errors
}

/// Validates a whole session document before an upsert: the name plus
/// every vendor record in the environment inventory
pub fn validate_session_document(session: &crate::types::ScopingSession) -> Vec<ValidationError> {
    let mut errors = validate_session_name(&session.name);

    let env = &session.current_environment;
    let vendor_lists = [
        &env.network_infrastructure.wired_vendors,
        &env.network_infrastructure.wireless_vendors,
        &env.network_infrastructure.routing_vendors,
        &env.security_ecosystem.firewall_vendors,
        &env.security_ecosystem.nac_vendors,
        &env.security_ecosystem.siem_vendors,
        &env.security_ecosystem.edr_vendors,
        &env.identity_access.identity_providers,
        &env.identity_access.mfa_vendors,
        &env.identity_access.pki_vendors,
        &env.cloud_solutions.cloud_providers,
        &env.cloud_solutions.saas_platforms,
    ];
    for list in vendor_lists {
        for vendor in list {
            errors.extend(validate_vendor_record(vendor));
        }
    }

    errors
}
