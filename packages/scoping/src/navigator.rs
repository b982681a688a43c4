// ABOUTME: Phase/step navigator for the scoping wizard
// ABOUTME: Sequences the fixed 5x3 workflow and derives the completion percentage

/// One step inside a wizard phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDef {
    pub id: &'static str,
    pub title: &'static str,
}

/// One wizard phase and its ordered steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseDef {
    pub id: &'static str,
    pub title: &'static str,
    pub steps: &'static [StepDef],
}

/// The fixed workflow: five phases, three steps each
pub static PHASES: &[PhaseDef] = &[
    PhaseDef {
        id: "business_foundation",
        title: "Business Foundation",
        steps: &[
            StepDef {
                id: "organization_profile",
                title: "Organization Profile",
            },
            StepDef {
                id: "business_drivers",
                title: "Business Drivers",
            },
            StepDef {
                id: "stakeholders",
                title: "Stakeholders",
            },
        ],
    },
    PhaseDef {
        id: "current_environment",
        title: "Current Environment",
        steps: &[
            StepDef {
                id: "network_infrastructure",
                title: "Network Infrastructure",
            },
            StepDef {
                id: "security_identity",
                title: "Security & Identity",
            },
            StepDef {
                id: "cloud_devices",
                title: "Cloud & Device Ecosystem",
            },
        ],
    },
    PhaseDef {
        id: "ai_analysis",
        title: "AI Analysis",
        steps: &[
            StepDef {
                id: "pain_points",
                title: "Pain Point Review",
            },
            StepDef {
                id: "recommendations",
                title: "Recommendations",
            },
            StepDef {
                id: "requirements",
                title: "Suggested Requirements",
            },
        ],
    },
    PhaseDef {
        id: "solution_architecture",
        title: "Solution Architecture",
        steps: &[
            StepDef {
                id: "deployment_model",
                title: "Deployment Model",
            },
            StepDef {
                id: "vendor_selection",
                title: "Vendor Selection",
            },
            StepDef {
                id: "use_case_mapping",
                title: "Use Case Mapping",
            },
        ],
    },
    PhaseDef {
        id: "implementation_planning",
        title: "Implementation Planning",
        steps: &[
            StepDef {
                id: "roadmap",
                title: "Roadmap",
            },
            StepDef {
                id: "budget",
                title: "Budget",
            },
            StepDef {
                id: "success_factors",
                title: "Success Factors",
            },
        ],
    },
];

/// Finite-state controller over the phase/step grid.
///
/// The position is always valid: navigation past either end is a no-op
/// and jump requests are clamped rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    phase_index: usize,
    step_index: usize,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Navigator {
            phase_index: 0,
            step_index: 0,
        }
    }

    /// Resume at the position whose one-based ordinal is `ordinal`
    /// (clamped into 1..=total_steps)
    pub fn from_ordinal(ordinal: usize) -> Self {
        let ordinal = ordinal.clamp(1, Self::total_steps());
        let mut remaining = ordinal - 1;
        for (phase_index, phase) in PHASES.iter().enumerate() {
            if remaining < phase.steps.len() {
                return Navigator {
                    phase_index,
                    step_index: remaining,
                };
            }
            remaining -= phase.steps.len();
        }
        // Unreachable given the clamp above, but stay valid regardless
        Navigator::new()
    }

    pub fn phase_index(&self) -> usize {
        self.phase_index
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn current_phase(&self) -> &'static PhaseDef {
        &PHASES[self.phase_index]
    }

    pub fn current_step(&self) -> &'static StepDef {
        &PHASES[self.phase_index].steps[self.step_index]
    }

    pub fn total_steps() -> usize {
        PHASES.iter().map(|phase| phase.steps.len()).sum()
    }

    /// One-based ordinal of the current position across all phases
    pub fn ordinal(&self) -> usize {
        let before: usize = PHASES[..self.phase_index]
            .iter()
            .map(|phase| phase.steps.len())
            .sum();
        before + self.step_index + 1
    }

    pub fn is_last_step(&self) -> bool {
        self.phase_index == PHASES.len() - 1
            && self.step_index == PHASES[self.phase_index].steps.len() - 1
    }

    /// Advance one step. At the final step this is a no-op; completion
    /// is a separate, explicit action. Returns whether the position moved.
    pub fn next(&mut self) -> bool {
        if self.step_index + 1 < PHASES[self.phase_index].steps.len() {
            self.step_index += 1;
            true
        } else if self.phase_index + 1 < PHASES.len() {
            self.phase_index += 1;
            self.step_index = 0;
            true
        } else {
            false
        }
    }

    /// Step back one step. At the very first step this is a no-op.
    /// Returns whether the position moved.
    pub fn previous(&mut self) -> bool {
        if self.step_index > 0 {
            self.step_index -= 1;
            true
        } else if self.phase_index > 0 {
            self.phase_index -= 1;
            self.step_index = PHASES[self.phase_index].steps.len() - 1;
            true
        } else {
            false
        }
    }

    /// Move to an arbitrary position, silently clamping out-of-range
    /// requests to the nearest valid phase/step.
    pub fn jump_to(&mut self, phase: usize, step: usize) {
        self.phase_index = phase.min(PHASES.len() - 1);
        self.step_index = step.min(PHASES[self.phase_index].steps.len() - 1);
    }

    /// Completion as a percentage of steps reached, rounded
    pub fn completion_percentage(&self) -> u8 {
        let total = Self::total_steps();
        ((self.ordinal() as f64 / total as f64) * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifteen_steps_total() {
        assert_eq!(Navigator::total_steps(), 15);
        assert_eq!(PHASES.len(), 5);
        for phase in PHASES {
            assert_eq!(phase.steps.len(), 3);
        }
    }

    #[test]
    fn position_stays_in_bounds() {
        let mut navigator = Navigator::new();
        // Walk far past both ends; the position must always be valid
        for _ in 0..40 {
            navigator.next();
            assert!(navigator.phase_index() < PHASES.len());
            assert!(navigator.step_index() < navigator.current_phase().steps.len());
        }
        assert!(navigator.is_last_step());
        for _ in 0..40 {
            navigator.previous();
            assert!(navigator.phase_index() < PHASES.len());
            assert!(navigator.step_index() < navigator.current_phase().steps.len());
        }
        assert_eq!(navigator, Navigator::new());
    }

    #[test]
    fn next_at_final_step_is_noop() {
        let mut navigator = Navigator::new();
        while navigator.next() {}
        assert!(navigator.is_last_step());
        assert!(!navigator.next());
        assert!(navigator.is_last_step());
    }

    #[test]
    fn previous_at_first_step_is_noop() {
        let mut navigator = Navigator::new();
        assert!(!navigator.previous());
        assert_eq!(navigator.phase_index(), 0);
        assert_eq!(navigator.step_index(), 0);
    }

    #[test]
    fn completion_matches_position_formula() {
        let mut navigator = Navigator::new();
        loop {
            let expected = (((navigator.phase_index() * 3 + navigator.step_index() + 1) as f64
                / 15.0)
                * 100.0)
                .round() as u8;
            assert_eq!(navigator.completion_percentage(), expected);
            if !navigator.next() {
                break;
            }
        }
        assert_eq!(navigator.completion_percentage(), 100);
    }

    #[test]
    fn jump_clamps_out_of_range() {
        let mut navigator = Navigator::new();
        navigator.jump_to(99, 99);
        assert_eq!(navigator.phase_index(), 4);
        assert_eq!(navigator.step_index(), 2);

        navigator.jump_to(1, 7);
        assert_eq!(navigator.phase_index(), 1);
        assert_eq!(navigator.step_index(), 2);
    }

    #[test]
    fn ordinal_round_trips_through_resume() {
        let mut navigator = Navigator::new();
        loop {
            let resumed = Navigator::from_ordinal(navigator.ordinal());
            assert_eq!(resumed, navigator);
            if !navigator.next() {
                break;
            }
        }
    }
}
