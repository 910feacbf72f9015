pub mod contact_extractor;
pub mod document_classifier;
pub mod header_extractor;
pub mod listing_service;
pub mod record_writer;
pub mod selectors;
pub mod term_dates;

pub use contact_extractor::ContactExtractor;
pub use document_classifier::{ClassifiedDocuments, DocumentClassifier};
pub use header_extractor::HeaderExtractor;
pub use listing_service::{ListingPage, ListingTraversal};
pub use record_writer::{RecordSink, RecordWriter};
pub use term_dates::{later_expiration, ContractTerm, TermDateReconciler};
