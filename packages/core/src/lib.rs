// ABOUTME: Core types, enums, and validation for Nacscope
// ABOUTME: Foundational package shared by the scoping, library, and project packages

pub mod types;
pub mod validation;
pub mod vendor;

// Re-export main types
pub use types::{
    AiAnalysis, BudgetEstimate, BudgetItem, BusinessDrivers, BusinessFoundation, ByodPolicy,
    CloudSolutions, Complexity, CurrentEnvironment, DeploymentModel, DeviceEcosystem, Frequency,
    IdentityAccess, ImplementationPlan, InfluenceLevel, IotInventory, NetworkInfrastructure,
    OrgSize, OrganizationProfile, PainPoint, PainPointCategory, Priority, Recommendation,
    RoadmapPhase, ScopingSession, SecurityEcosystem, Severity, SolutionArchitecture, Stakeholder,
    SuggestedRequirement, UseCaseMapping,
};

// Re-export vendor types
pub use vendor::{
    IntegrationPriority, ReplacementTimeline, SelectedVendor, VendorCategory, VendorModel,
};

// Re-export validation
pub use validation::{
    validate_session_document, validate_session_name, validate_vendor_record, ValidationError,
};
