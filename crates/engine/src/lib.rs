//! Query-understanding and response-generation engine
//!
//! Answers free-text questions about a smartphone catalog:
//! - Keyword-cascade intent classification
//! - Fuzzy entity resolution against the catalog index
//! - Pending-comparison session state with TTL
//! - Templated Spanish responses with randomized phrasing variants

pub mod comparison;
pub mod engine;
pub mod intent;
pub mod matcher;
pub mod picker;
pub mod resolver;
pub mod response;

pub use comparison::{ComparisonManager, PendingComparison};
pub use engine::ChatEngine;
pub use intent::{FeatureCategory, Intent, IntentClassifier};
pub use matcher::similarity;
pub use picker::{FixedPicker, PhrasePicker, RandomPicker, SeededPicker};
pub use resolver::EntityResolver;
pub use response::ResponseGenerator;
