//! Engine entry point
//!
//! One call per inbound message: consult the pending-comparison state,
//! classify, resolve, render. The engine is request-scoped and stateless
//! apart from the injected session store; the catalog is shared read-only
//! across concurrent requests.

use std::sync::Arc;
use std::time::Duration;

use celubot_config::EngineConfig;
use celubot_core::{BotReply, Catalog};
use celubot_session::SessionStore;

use crate::comparison::{ComparisonManager, PendingComparison};
use crate::intent::{Intent, IntentClassifier};
use crate::picker::PhrasePicker;
use crate::resolver::EntityResolver;
use crate::response::ResponseGenerator;

pub struct ChatEngine {
    resolver: Arc<EntityResolver>,
    classifier: IntentClassifier,
    comparisons: ComparisonManager,
    generator: ResponseGenerator,
}

impl ChatEngine {
    pub fn new(
        catalog: Arc<Catalog>,
        store: Arc<dyn SessionStore>,
        config: EngineConfig,
        picker: Box<dyn PhrasePicker>,
    ) -> Self {
        let resolver = Arc::new(EntityResolver::new(catalog.clone(), &config));
        let classifier = IntentClassifier::new(resolver.clone());
        let comparisons =
            ComparisonManager::new(store, Duration::from_secs(config.pending_ttl_secs));
        let generator = ResponseGenerator::new(catalog, config, picker);

        Self {
            resolver,
            classifier,
            comparisons,
            generator,
        }
    }

    /// Handle one user message and produce the reply for the transport
    /// layer. Never fails: every error path resolves to displayable text.
    pub fn handle_message(&self, session_id: &str, message: &str) -> BotReply {
        let trimmed = message.trim();
        let folded = trimmed.to_lowercase();

        // an open comparison prompt consumes this message, whatever it
        // says, a blank one included
        if let Some(pending) = self.comparisons.take_pending(session_id) {
            if pending.awaiting_targets {
                tracing::debug!(session_id, "consuming pending comparison");
                let text = self.resume_comparison(trimmed, &pending);
                return BotReply::with_options(text, self.generator.suggest_options(&folded));
            }
        }

        if trimmed.is_empty() {
            return BotReply::with_options(
                self.generator.clarify_empty(),
                self.generator.suggest_options(""),
            );
        }

        let intent = self.classifier.classify(trimmed);
        let text = self.respond(session_id, &folded, intent);

        BotReply::with_options(text, self.generator.suggest_options(&folded))
    }

    fn respond(&self, session_id: &str, folded: &str, intent: Intent) -> String {
        match intent {
            Intent::Greeting => self.generator.greeting(),
            Intent::Farewell => self.generator.farewell(),
            Intent::Help => self.generator.help(),
            Intent::Comparison => self.start_comparison(session_id, folded),
            Intent::BrandLookup(brand_query) => {
                let products = self.resolver.resolve_brand(&brand_query);
                if products.is_empty() {
                    self.generator.model_not_found()
                } else {
                    self.generator.brand_listing(&products)
                }
            }
            Intent::ModelLookup(model) => match self.resolver.resolve_phone(&model) {
                Some(product) => self.generator.model_details(product),
                None => self.generator.model_not_found(),
            },
            Intent::Feature(category) => self.generator.feature(category, folded),
            Intent::Fallback => self.generator.fallback(),
        }
    }

    /// A comparison request with enough targets renders straight away and
    /// the session stays idle; otherwise we prompt and park the flag. A
    /// lone model named alongside the request is cached with the flag, so
    /// the follow-up only has to add the second one.
    fn start_comparison(&self, session_id: &str, folded: &str) -> String {
        let targets = self.resolver.extract_comparison_targets(folded);
        if targets.len() >= 2 {
            return self.generator.comparison(&targets);
        }

        let candidates = match self.resolver.resolve_phone(folded) {
            Some(product) => vec![product.model.to_lowercase()],
            None => Vec::new(),
        };
        self.comparisons.set_pending(
            session_id,
            &PendingComparison {
                awaiting_targets: true,
                candidates,
            },
        );
        self.generator.comparison_prompt()
    }

    /// Follow-up after a comparison prompt. The flag is already consumed;
    /// this message has to name the models, alone or together with the
    /// cached candidate, or the user starts over.
    fn resume_comparison(&self, message: &str, pending: &PendingComparison) -> String {
        let mut targets = self.resolver.extract_comparison_targets(message);

        if targets.len() < 2 {
            if let (Some(cached), Some(product)) =
                (pending.candidates.first(), self.resolver.resolve_phone(message))
            {
                let name = product.model.to_lowercase();
                if name != *cached {
                    targets = vec![cached.clone(), name];
                }
            }
        }

        if targets.len() >= 2 {
            self.generator.comparison(&targets)
        } else {
            self.generator.comparison_retry()
        }
    }
}
