// ABOUTME: Nacscope scoping library - the multi-phase wizard engine
// ABOUTME: Provides the navigator, decision engine, vendor dialog, shell, and session storage

pub mod catalog;
pub mod dialog;
pub mod engine;
pub mod error;
pub mod navigator;
pub mod shell;
pub mod storage;

pub use dialog::VendorDraft;
pub use error::{Result, ScopingError};
pub use navigator::{Navigator, PhaseDef, StepDef, PHASES};
pub use shell::{WizardShell, DEFAULT_AUTOSAVE_INTERVAL};
pub use storage::{MemorySessionStore, SessionStore, SessionSummary, SqliteSessionStore};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::dialog::VendorDraft;
    pub use crate::error::{Result, ScopingError};
    pub use crate::navigator::Navigator;
    pub use crate::shell::WizardShell;
    pub use crate::storage::{MemorySessionStore, SessionStore, SqliteSessionStore};
    pub use nacscope_core::{ScopingSession, SelectedVendor, VendorCategory};
}
