// ABOUTME: The ScopingSession document tree and its enums
// ABOUTME: Root aggregate accumulated by the scoping wizard, one live instance per wizard

use crate::vendor::SelectedVendor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Organization size bands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrgSize {
    Smb,
    MidMarket,
    Enterprise,
    Global,
}

impl Default for OrgSize {
    fn default() -> Self {
        OrgSize::MidMarket
    }
}

impl fmt::Display for OrgSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrgSize::Smb => "SMB",
            OrgSize::MidMarket => "Mid-Market",
            OrgSize::Enterprise => "Enterprise",
            OrgSize::Global => "Global",
        };
        write!(f, "{}", label)
    }
}

/// How much sway a stakeholder has over the deployment decision
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InfluenceLevel {
    Low,
    Medium,
    High,
}

impl Default for InfluenceLevel {
    fn default() -> Self {
        InfluenceLevel::Medium
    }
}

/// Stance on personally-owned devices in the environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ByodPolicy {
    Undefined,
    Prohibited,
    Restricted,
    Managed,
    Unrestricted,
}

impl Default for ByodPolicy {
    fn default() -> Self {
        ByodPolicy::Undefined
    }
}

/// Pain point classification buckets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PainPointCategory {
    Security,
    Operational,
    Compliance,
    Visibility,
    Cost,
}

/// Severity levels for identified pain points
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        };
        write!(f, "{}", label)
    }
}

/// How often a pain point bites
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Rare,
    Occasional,
    Frequent,
    Constant,
}

/// Priority levels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        write!(f, "{}", label)
    }
}

/// Implementation complexity bands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

/// NAC deployment models the architecture phase can pick from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentModel {
    CloudNative,
    OnPremises,
    Hybrid,
}

impl Default for DeploymentModel {
    fn default() -> Self {
        DeploymentModel::CloudNative
    }
}

impl DeploymentModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentModel::CloudNative => "cloud_native",
            DeploymentModel::OnPremises => "on_premises",
            DeploymentModel::Hybrid => "hybrid",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "cloud_native" => Some(DeploymentModel::CloudNative),
            "on_premises" => Some(DeploymentModel::OnPremises),
            "hybrid" => Some(DeploymentModel::Hybrid),
            _ => None,
        }
    }
}

/// Organization profile collected in the first phase
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrganizationProfile {
    pub name: String,
    pub industry: String,
    #[serde(default)]
    pub size: OrgSize,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub total_employees: u32,
    #[serde(default)]
    pub it_headcount: u32,
    #[serde(default)]
    pub security_headcount: u32,
}

/// Why the organization is buying, and under what constraints
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BusinessDrivers {
    #[serde(default)]
    pub primary_drivers: Vec<String>,
    #[serde(default)]
    pub compliance_requirements: Vec<String>,
    pub timeline: String,
    pub budget_range: String,
}

/// A person with a say in the deployment
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Stakeholder {
    pub name: String,
    pub role: String,
    pub department: String,
    #[serde(default)]
    pub influence: InfluenceLevel,
    #[serde(default)]
    pub decision_authority: bool,
    #[serde(default)]
    pub pain_points: Vec<String>,
    #[serde(default)]
    pub success_criteria: Vec<String>,
}

/// First phase of the document: who the customer is and why they buy
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BusinessFoundation {
    #[serde(default)]
    pub organization: OrganizationProfile,
    #[serde(default)]
    pub drivers: BusinessDrivers,
    #[serde(default)]
    pub stakeholders: Vec<Stakeholder>,
}

/// Wired, wireless, and routing gear currently deployed
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NetworkInfrastructure {
    #[serde(default)]
    pub wired_vendors: Vec<SelectedVendor>,
    #[serde(default)]
    pub wireless_vendors: Vec<SelectedVendor>,
    #[serde(default)]
    pub routing_vendors: Vec<SelectedVendor>,
}

/// Security tooling currently deployed
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SecurityEcosystem {
    #[serde(default)]
    pub firewall_vendors: Vec<SelectedVendor>,
    #[serde(default)]
    pub nac_vendors: Vec<SelectedVendor>,
    #[serde(default)]
    pub siem_vendors: Vec<SelectedVendor>,
    #[serde(default)]
    pub edr_vendors: Vec<SelectedVendor>,
}

/// Identity and access stack currently deployed
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IdentityAccess {
    #[serde(default)]
    pub identity_providers: Vec<SelectedVendor>,
    #[serde(default)]
    pub mfa_vendors: Vec<SelectedVendor>,
    #[serde(default)]
    pub pki_vendors: Vec<SelectedVendor>,
}

/// Cloud footprint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CloudSolutions {
    #[serde(default)]
    pub cloud_providers: Vec<SelectedVendor>,
    #[serde(default)]
    pub saas_platforms: Vec<SelectedVendor>,
}

/// IoT device counters by type
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IotInventory {
    #[serde(default)]
    pub cameras: u32,
    #[serde(default)]
    pub printers: u32,
    #[serde(default)]
    pub voip_phones: u32,
    #[serde(default)]
    pub medical_devices: u32,
    #[serde(default)]
    pub industrial_controls: u32,
    #[serde(default)]
    pub other: u32,
}

impl IotInventory {
    /// Total IoT devices across all types
    pub fn total(&self) -> u32 {
        self.cameras
            + self.printers
            + self.voip_phones
            + self.medical_devices
            + self.industrial_controls
            + self.other
    }
}

/// Endpoint and IoT counters plus the BYOD stance
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeviceEcosystem {
    #[serde(default)]
    pub windows_endpoints: u32,
    #[serde(default)]
    pub macos_endpoints: u32,
    #[serde(default)]
    pub linux_endpoints: u32,
    #[serde(default)]
    pub mobile_devices: u32,
    #[serde(default)]
    pub iot: IotInventory,
    #[serde(default)]
    pub byod_policy: ByodPolicy,
}

/// Second phase of the document: everything already in the environment
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CurrentEnvironment {
    #[serde(default)]
    pub network_infrastructure: NetworkInfrastructure,
    #[serde(default)]
    pub security_ecosystem: SecurityEcosystem,
    #[serde(default)]
    pub identity_access: IdentityAccess,
    #[serde(default)]
    pub cloud_solutions: CloudSolutions,
    #[serde(default)]
    pub device_ecosystem: DeviceEcosystem,
}

/// A pain point surfaced by the decision engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PainPoint {
    pub title: String,
    pub category: PainPointCategory,
    pub severity: Severity,
    pub frequency: Frequency,
    pub impact: String,
    pub estimated_annual_cost: u32,
    /// 0.0-1.0 confidence attached by the rule that produced this entry
    pub ai_confidence: f32,
}

/// A recommendation emitted by the decision tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub trigger_condition: String,
    #[serde(default)]
    pub recommended_use_cases: Vec<String>,
    #[serde(default)]
    pub recommended_vendors: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub justification: String,
}

/// A requirement the engine suggests the customer adopt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestedRequirement {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    pub complexity: Complexity,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// Third phase of the document: engine output, regenerated wholesale
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AiAnalysis {
    #[serde(default)]
    pub pain_points: Vec<PainPoint>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub suggested_requirements: Vec<SuggestedRequirement>,
}

/// A use case mapped to the business value it unlocks
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UseCaseMapping {
    pub use_case: String,
    pub business_value: String,
}

/// Fourth phase of the document: the recommended target architecture
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SolutionArchitecture {
    #[serde(default)]
    pub deployment_model: DeploymentModel,
    pub primary_vendor: Option<String>,
    #[serde(default)]
    pub alternative_vendors: Vec<String>,
    #[serde(default)]
    pub use_case_mappings: Vec<UseCaseMapping>,
}

/// One phase of the implementation roadmap
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RoadmapPhase {
    pub name: String,
    #[serde(default)]
    pub duration_weeks: u32,
    #[serde(default)]
    pub milestones: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub risks: Vec<String>,
}

/// A single line item of the budget estimate
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BudgetItem {
    pub label: String,
    #[serde(default)]
    pub cost: u32,
}

/// Itemized budget; the total is always derived from the items
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BudgetEstimate {
    #[serde(default)]
    pub items: Vec<BudgetItem>,
}

impl BudgetEstimate {
    pub fn total(&self) -> u32 {
        self.items.iter().map(|item| item.cost).sum()
    }
}

/// Fifth phase of the document: how the rollout actually happens
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImplementationPlan {
    #[serde(default)]
    pub roadmap: Vec<RoadmapPhase>,
    #[serde(default)]
    pub budget: BudgetEstimate,
    #[serde(default)]
    pub success_factors: Vec<String>,
}

/// The root aggregate: one in-progress scoping engagement.
///
/// Exactly one instance is live per wizard; every phase reads and
/// writes its own slice, and the whole document is persisted by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScopingSession {
    pub id: String,
    pub name: String,
    /// Derived from the navigator position; recomputed before every save
    #[serde(default)]
    pub completion_percentage: u8,
    #[serde(default)]
    pub business_foundation: BusinessFoundation,
    #[serde(default)]
    pub current_environment: CurrentEnvironment,
    #[serde(default)]
    pub ai_analysis: AiAnalysis,
    #[serde(default)]
    pub solution_architecture: SolutionArchitecture,
    #[serde(default)]
    pub implementation_plan: ImplementationPlan,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ScopingSession {
    /// Build an all-defaults document, the state a freshly mounted wizard starts from
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        ScopingSession {
            id: id.into(),
            name: name.into(),
            completion_percentage: 0,
            business_foundation: BusinessFoundation::default(),
            current_environment: CurrentEnvironment::default(),
            ai_analysis: AiAnalysis::default(),
            solution_architecture: SolutionArchitecture::default(),
            implementation_plan: ImplementationPlan::default(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_session_is_all_defaults() {
        let session = ScopingSession::new("abc12345", "Acme rollout");
        assert_eq!(session.completion_percentage, 0);
        assert!(session.business_foundation.stakeholders.is_empty());
        assert!(session
            .current_environment
            .network_infrastructure
            .wired_vendors
            .is_empty());
        assert!(session.ai_analysis.pain_points.is_empty());
        assert_eq!(
            session.solution_architecture.deployment_model,
            DeploymentModel::CloudNative
        );
    }

    #[test]
    fn budget_total_sums_items() {
        let budget = BudgetEstimate {
            items: vec![
                BudgetItem {
                    label: "Licensing".into(),
                    cost: 40_000,
                },
                BudgetItem {
                    label: "Professional services".into(),
                    cost: 15_000,
                },
            ],
        };
        assert_eq!(budget.total(), 55_000);
    }

    #[test]
    fn session_json_round_trip() {
        let mut session = ScopingSession::new("abc12345", "Acme rollout");
        session.business_foundation.organization.name = "Acme Corp".into();
        session.business_foundation.drivers.compliance_requirements = vec!["PCI-DSS".into()];
        session.current_environment.device_ecosystem.byod_policy = ByodPolicy::Managed;

        let json = serde_json::to_string(&session).unwrap();
        let restored: ScopingSession = serde_json::from_str(&json).unwrap();
        assert_eq!(session, restored);
    }

    #[test]
    fn partial_document_deserializes_with_defaults() {
        let json = r#"{
            "id": "abc12345",
            "name": "Acme rollout",
            "created_at": "2026-01-10T08:30:00Z",
            "updated_at": "2026-01-10T08:30:00Z"
        }"#;
        let session: ScopingSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.completion_percentage, 0);
        assert_eq!(
            session.current_environment.device_ecosystem.byod_policy,
            ByodPolicy::Undefined
        );
    }
}
