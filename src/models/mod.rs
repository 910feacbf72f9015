pub mod category;
pub mod contract;
pub mod loaders;
pub mod site_profile;

pub use category::{CategoryRule, CategoryRules, ClassificationMode, DocumentCategory};
pub use contract::{Contact, ContractMetadata, ContractRecord, FileReference};
pub use loaders::{load_site_profile, parse_site_profile};
pub use site_profile::{SiteProfile, SOURCEWELL_BASE_URL};
