//! Application services - Use case implementations
//!
//! Each stage of the pipeline is its own service: validation, attribute
//! derivation, skill resolution and layout building, composed by the
//! sheet assembly service.

pub mod derivation_service;
pub mod layout_service;
pub mod sheet_service;
pub mod skill_service;
pub mod validation_service;

// Re-export derivation service types
#[allow(unused_imports)]
pub use derivation_service::{DerivationError, DerivationService};

// Re-export layout service types
#[allow(unused_imports)]
pub use layout_service::LayoutService;

// Re-export sheet assembly service types
#[allow(unused_imports)]
pub use sheet_service::SheetAssemblyService;

// Re-export skill service types
#[allow(unused_imports)]
pub use skill_service::{SkillError, SkillResolutionService};

// Re-export validation service types
#[allow(unused_imports)]
pub use validation_service::{ValidationError, ValidationService, EXPECTED_GAME_NAME};
