// ABOUTME: Rule-driven decision engine producing pain points, recommendations, and requirements
// ABOUTME: Pure functions over environment snapshots; output order always equals table order

use nacscope_core::{
    BusinessFoundation, Complexity, CurrentEnvironment, Frequency, PainPoint, PainPointCategory,
    Priority, Recommendation, Severity, SuggestedRequirement,
};

/// One entry of the recommendation table: an independent trigger and
/// the recommendation it emits. Rules never suppress each other.
struct RecommendationRule {
    trigger: fn(&CurrentEnvironment) -> bool,
    build: fn() -> Recommendation,
}

/// One entry of the pain point table. Cost and confidence are fixed
/// per-rule constants, not computed from the inputs.
struct PainPointRule {
    applies: fn(&BusinessFoundation, &CurrentEnvironment) -> bool,
    build: fn() -> PainPoint,
}

/// One entry of the suggested-requirement table
struct RequirementRule {
    applies: fn(&BusinessFoundation, &CurrentEnvironment) -> bool,
    build: fn() -> SuggestedRequirement,
}

fn has_vendor_containing(vendors: &[nacscope_core::SelectedVendor], needle: &str) -> bool {
    vendors
        .iter()
        .any(|vendor| vendor.vendor_name.to_lowercase().contains(needle))
}

const RECOMMENDATION_RULES: &[RecommendationRule] = &[
    RecommendationRule {
        trigger: |env| has_vendor_containing(&env.network_infrastructure.wired_vendors, "cisco"),
        build: || Recommendation {
            trigger_condition: "Cisco infrastructure detected in the wired network".into(),
            recommended_use_cases: vec![
                "802.1X wired authentication".into(),
                "Device risk posture".into(),
            ],
            recommended_vendors: vec!["Portnox".into()],
            requirements: vec![
                "RADIUS integration with Cisco IOS-XE switches".into(),
                "Dynamic VLAN assignment via RADIUS attributes".into(),
            ],
            justification: "Cisco switching supports standards-based 802.1X and RADIUS CoA, \
                            so wired enforcement can roll out without hardware changes"
                .into(),
        },
    },
    RecommendationRule {
        trigger: |env| !env.network_infrastructure.wireless_vendors.is_empty(),
        build: || Recommendation {
            trigger_condition: "Wireless infrastructure present".into(),
            recommended_use_cases: vec![
                "802.1X wireless authentication".into(),
                "Guest access".into(),
            ],
            recommended_vendors: vec!["Portnox".into()],
            requirements: vec!["WPA2/WPA3-Enterprise SSID configuration".into()],
            justification: "Certificate-backed wireless authentication removes shared PSKs, \
                            the most common credential-theft path in wireless estates"
                .into(),
        },
    },
    RecommendationRule {
        trigger: |env| !env.cloud_solutions.cloud_providers.is_empty(),
        build: || Recommendation {
            trigger_condition: "Cloud workloads present".into(),
            recommended_use_cases: vec!["Conditional access integration".into()],
            recommended_vendors: vec!["Portnox".into()],
            requirements: vec!["Cloud RADIUS with no on-premises appliance".into()],
            justification: "A cloud-native NAC keeps the access-control plane alongside the \
                            workloads it protects instead of backhauling to a data center"
                .into(),
        },
    },
    RecommendationRule {
        trigger: |env| !env.identity_access.identity_providers.is_empty(),
        build: || Recommendation {
            trigger_condition: "Central identity provider in place".into(),
            recommended_use_cases: vec![
                "BYOD onboarding".into(),
                "Conditional access integration".into(),
            ],
            recommended_vendors: vec!["Portnox".into()],
            requirements: vec!["SAML/SCIM integration with the existing directory".into()],
            justification: "Network access can key off the directory groups the organization \
                            already maintains rather than a parallel user store"
                .into(),
        },
    },
    RecommendationRule {
        trigger: |env| !env.security_ecosystem.edr_vendors.is_empty(),
        build: || Recommendation {
            trigger_condition: "EDR agent fleet deployed".into(),
            recommended_use_cases: vec!["Device risk posture".into()],
            recommended_vendors: vec!["Portnox".into()],
            requirements: vec!["Risk score ingestion from the EDR API".into()],
            justification: "An existing EDR fleet supplies per-device risk signals that can \
                            gate network access without deploying another agent"
                .into(),
        },
    },
];

const PAIN_POINT_RULES: &[PainPointRule] = &[
    PainPointRule {
        applies: |_, env| env.security_ecosystem.nac_vendors.is_empty(),
        build: || PainPoint {
            title: "No Network Access Control".into(),
            category: PainPointCategory::Security,
            severity: Severity::Critical,
            frequency: Frequency::Constant,
            impact: "Any device that finds a port or the Wi-Fi password reaches the network \
                     without authentication or posture checks"
                .into(),
            estimated_annual_cost: 250_000,
            ai_confidence: 0.95,
        },
    },
    PainPointRule {
        applies: |_, env| env.network_infrastructure.wired_vendors.len() > 3,
        build: || PainPoint {
            title: "Multi-Vendor Switching Complexity".into(),
            category: PainPointCategory::Operational,
            severity: Severity::Medium,
            frequency: Frequency::Frequent,
            impact: "Port-level access policy is configured differently per switching vendor, \
                     so changes are slow and drift accumulates"
                .into(),
            estimated_annual_cost: 85_000,
            ai_confidence: 0.80,
        },
    },
    PainPointRule {
        applies: |foundation, _| !foundation.drivers.compliance_requirements.is_empty(),
        build: || PainPoint {
            title: "Compliance Evidence Gaps".into(),
            category: PainPointCategory::Compliance,
            severity: Severity::High,
            frequency: Frequency::Frequent,
            impact: "Access-control evidence for audits is assembled by hand from switch \
                     configs and spreadsheets"
                .into(),
            estimated_annual_cost: 120_000,
            ai_confidence: 0.85,
        },
    },
    PainPointRule {
        applies: |_, env| {
            env.device_ecosystem.byod_policy == nacscope_core::ByodPolicy::Unrestricted
        },
        build: || PainPoint {
            title: "Unmanaged BYOD Exposure".into(),
            category: PainPointCategory::Security,
            severity: Severity::High,
            frequency: Frequency::Occasional,
            impact: "Personal devices join the corporate network with no enrollment or \
                     posture requirements"
                .into(),
            estimated_annual_cost: 95_000,
            ai_confidence: 0.75,
        },
    },
    PainPointRule {
        applies: |_, env| env.device_ecosystem.iot.total() > 0,
        build: || PainPoint {
            title: "IoT Visibility Gaps".into(),
            category: PainPointCategory::Visibility,
            severity: Severity::Medium,
            frequency: Frequency::Frequent,
            impact: "Cameras, printers, and other headless devices sit on the network \
                     without an owner or an inventory entry"
                .into(),
            estimated_annual_cost: 60_000,
            ai_confidence: 0.70,
        },
    },
];

const REQUIREMENT_RULES: &[RequirementRule] = &[
    RequirementRule {
        applies: |_, env| env.security_ecosystem.nac_vendors.is_empty(),
        build: || SuggestedRequirement {
            title: "Agentless device discovery".into(),
            description: "Enumerate every device on the network before enforcement begins; \
                          discovery must not require installing software on endpoints"
                .into(),
            priority: Priority::High,
            complexity: Complexity::Medium,
            dependencies: vec![],
        },
    },
    RequirementRule {
        applies: |foundation, _| !foundation.drivers.compliance_requirements.is_empty(),
        build: || SuggestedRequirement {
            title: "Automated compliance reporting".into(),
            description: "Generate access-control evidence mapped to the named compliance \
                          frameworks on a schedule"
                .into(),
            priority: Priority::High,
            complexity: Complexity::Medium,
            dependencies: vec!["Agentless device discovery".into()],
        },
    },
    RequirementRule {
        applies: |_, env| env.device_ecosystem.iot.total() > 0,
        build: || SuggestedRequirement {
            title: "IoT fingerprinting".into(),
            description: "Classify headless devices by traffic profile and assign them to \
                          restricted segments automatically"
                .into(),
            priority: Priority::Medium,
            complexity: Complexity::High,
            dependencies: vec!["Agentless device discovery".into()],
        },
    },
    RequirementRule {
        applies: |_, env| !env.identity_access.identity_providers.is_empty(),
        build: || SuggestedRequirement {
            title: "Directory integration".into(),
            description: "Authenticate users against the existing identity provider and map \
                          directory groups to access policy"
                .into(),
            priority: Priority::High,
            complexity: Complexity::Low,
            dependencies: vec![],
        },
    },
];

/// Evaluate the recommendation table against an environment snapshot.
/// Deterministic: equal snapshots produce equal lists in table order.
pub fn run_decision_tree(environment: &CurrentEnvironment) -> Vec<Recommendation> {
    RECOMMENDATION_RULES
        .iter()
        .filter(|rule| (rule.trigger)(environment))
        .map(|rule| (rule.build)())
        .collect()
}

/// Evaluate the pain point table against the organization and environment
pub fn identify_pain_points(
    foundation: &BusinessFoundation,
    environment: &CurrentEnvironment,
) -> Vec<PainPoint> {
    PAIN_POINT_RULES
        .iter()
        .filter(|rule| (rule.applies)(foundation, environment))
        .map(|rule| (rule.build)())
        .collect()
}

/// Evaluate the requirement table against the organization and environment
pub fn suggest_requirements(
    foundation: &BusinessFoundation,
    environment: &CurrentEnvironment,
) -> Vec<SuggestedRequirement> {
    REQUIREMENT_RULES
        .iter()
        .filter(|rule| (rule.applies)(foundation, environment))
        .map(|rule| (rule.build)())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nacscope_core::{ByodPolicy, SelectedVendor, VendorCategory};
    use pretty_assertions::assert_eq;

    fn environment_with_wired(names: &[&str]) -> CurrentEnvironment {
        let mut env = CurrentEnvironment::default();
        env.network_infrastructure.wired_vendors = names
            .iter()
            .map(|name| SelectedVendor::new(*name, VendorCategory::WiredSwitching))
            .collect();
        env
    }

    #[test]
    fn empty_environment_yields_no_recommendations() {
        let env = CurrentEnvironment::default();
        assert!(run_decision_tree(&env).is_empty());
    }

    #[test]
    fn empty_environment_flags_missing_nac() {
        let foundation = BusinessFoundation::default();
        let env = CurrentEnvironment::default();
        let pain_points = identify_pain_points(&foundation, &env);
        assert!(pain_points
            .iter()
            .any(|p| p.title == "No Network Access Control" && p.severity == Severity::Critical));
    }

    #[test]
    fn cisco_wired_triggers_cisco_recommendation() {
        let env = environment_with_wired(&["Cisco"]);
        let recommendations = run_decision_tree(&env);
        assert!(recommendations
            .iter()
            .any(|r| r.trigger_condition.contains("Cisco infrastructure")));
    }

    #[test]
    fn evaluation_is_deterministic() {
        let mut env = environment_with_wired(&["Cisco", "Juniper"]);
        env.network_infrastructure
            .wireless_vendors
            .push(SelectedVendor::new("Aruba (HPE)", VendorCategory::Wireless));
        env.cloud_solutions
            .cloud_providers
            .push(SelectedVendor::new("AWS", VendorCategory::CloudProvider));

        let mut foundation = BusinessFoundation::default();
        foundation.drivers.compliance_requirements = vec!["HIPAA".into()];

        assert_eq!(run_decision_tree(&env), run_decision_tree(&env));
        assert_eq!(
            identify_pain_points(&foundation, &env),
            identify_pain_points(&foundation, &env)
        );
        assert_eq!(
            suggest_requirements(&foundation, &env),
            suggest_requirements(&foundation, &env)
        );
    }

    #[test]
    fn rules_co_occur_in_table_order() {
        let mut env = environment_with_wired(&["Cisco"]);
        env.network_infrastructure
            .wireless_vendors
            .push(SelectedVendor::new("Ruckus", VendorCategory::Wireless));

        let recommendations = run_decision_tree(&env);
        assert_eq!(recommendations.len(), 2);
        assert!(recommendations[0].trigger_condition.contains("Cisco"));
        assert!(recommendations[1].trigger_condition.contains("Wireless"));
    }

    #[test]
    fn four_wired_vendors_flag_complexity() {
        let env = environment_with_wired(&["Cisco", "Juniper", "Arista", "Extreme Networks"]);
        let pain_points = identify_pain_points(&BusinessFoundation::default(), &env);
        assert!(pain_points
            .iter()
            .any(|p| p.title == "Multi-Vendor Switching Complexity"));
    }

    #[test]
    fn unrestricted_byod_flags_exposure() {
        let mut env = CurrentEnvironment::default();
        env.device_ecosystem.byod_policy = ByodPolicy::Unrestricted;
        let pain_points = identify_pain_points(&BusinessFoundation::default(), &env);
        assert!(pain_points
            .iter()
            .any(|p| p.title == "Unmanaged BYOD Exposure"));
    }
}
