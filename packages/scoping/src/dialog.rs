// ABOUTME: Draft model for the vendor selection dialog
// ABOUTME: Collects one SelectedVendor; submission is impossible until a catalog vendor is chosen

use crate::catalog;
use crate::error::{Result, ScopingError};
use nacscope_core::{
    IntegrationPriority, ReplacementTimeline, SelectedVendor, VendorCategory, VendorModel,
};

/// In-progress vendor entry for one category. The draft never touches
/// the session document; `submit` hands the finished record to the
/// caller, and dropping the draft is a cancel.
#[derive(Debug, Clone)]
pub struct VendorDraft {
    category: VendorCategory,
    vendor_name: Option<&'static str>,
    models: Vec<VendorModel>,
    satisfaction_rating: u8,
    pain_points: Vec<String>,
    integration_priority: IntegrationPriority,
    replacement_timeline: ReplacementTimeline,
}

impl VendorDraft {
    pub fn new(category: VendorCategory) -> Self {
        VendorDraft {
            category,
            vendor_name: None,
            models: Vec::new(),
            satisfaction_rating: 3,
            pain_points: Vec::new(),
            integration_priority: IntegrationPriority::default(),
            replacement_timeline: ReplacementTimeline::default(),
        }
    }

    pub fn category(&self) -> VendorCategory {
        self.category
    }

    /// The options this draft will accept
    pub fn vendor_options(&self) -> &'static [&'static str] {
        catalog::vendor_options(self.category)
    }

    /// Choose a vendor. Only names from the category's catalog list are
    /// accepted; the stored record uses the catalog spelling.
    pub fn select_vendor(&mut self, vendor: &str) -> Result<()> {
        match catalog::canonical_vendor(self.category, vendor) {
            Some(name) => {
                self.vendor_name = Some(name);
                Ok(())
            }
            None => Err(ScopingError::UnknownVendor {
                vendor: vendor.to_string(),
                category: self.category.to_string(),
            }),
        }
    }

    /// Model rows are free-form and may be left empty entirely
    pub fn add_model(&mut self, model: VendorModel) {
        self.models.push(model);
    }

    pub fn set_satisfaction(&mut self, rating: u8) -> Result<()> {
        if !(1..=5).contains(&rating) {
            return Err(ScopingError::InvalidRating(rating));
        }
        self.satisfaction_rating = rating;
        Ok(())
    }

    pub fn add_pain_point(&mut self, pain_point: impl Into<String>) {
        self.pain_points.push(pain_point.into());
    }

    pub fn set_integration_priority(&mut self, priority: IntegrationPriority) {
        self.integration_priority = priority;
    }

    pub fn set_replacement_timeline(&mut self, timeline: ReplacementTimeline) {
        self.replacement_timeline = timeline;
    }

    /// Whether submit is currently possible
    pub fn can_submit(&self) -> bool {
        self.vendor_name.is_some()
    }

    /// Consume the draft and produce the vendor record. Fails while no
    /// vendor is selected, so a half-filled draft can never reach the
    /// environment inventory.
    pub fn submit(self) -> Result<SelectedVendor> {
        let vendor_name = self.vendor_name.ok_or(ScopingError::NoVendorSelected)?;
        Ok(SelectedVendor {
            vendor_name: vendor_name.to_string(),
            category: self.category,
            models: self.models,
            satisfaction_rating: self.satisfaction_rating,
            pain_points: self.pain_points,
            integration_priority: self.integration_priority,
            replacement_timeline: self.replacement_timeline,
        })
    }
}
