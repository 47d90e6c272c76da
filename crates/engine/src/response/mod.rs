//! Response generation
//!
//! Turns a classified intent plus resolved entities into the text the user
//! sees. Rankings and tables are deterministic; only the surrounding
//! phrasing varies, chosen through the injected [`PhrasePicker`].

mod compare;
mod details;
mod features;
mod options;
pub(crate) mod templates;
mod util;

use std::sync::Arc;

use celubot_config::EngineConfig;
use celubot_core::{Catalog, Product};

use crate::intent::FeatureCategory;
use crate::picker::PhrasePicker;
use features::FeatureRenderer;

pub struct ResponseGenerator {
    catalog: Arc<Catalog>,
    config: EngineConfig,
    picker: Box<dyn PhrasePicker>,
}

impl ResponseGenerator {
    pub fn new(catalog: Arc<Catalog>, config: EngineConfig, picker: Box<dyn PhrasePicker>) -> Self {
        Self {
            catalog,
            config,
            picker,
        }
    }

    fn variant(&self, pool: &[&str]) -> String {
        pool[self.picker.pick(pool.len())].to_string()
    }

    pub fn greeting(&self) -> String {
        self.variant(templates::GREETINGS)
    }

    pub fn farewell(&self) -> String {
        self.variant(templates::FAREWELLS)
    }

    pub fn help(&self) -> String {
        templates::HELP_BODY.to_string()
    }

    pub fn fallback(&self) -> String {
        format!(
            "No estoy seguro de haber entendido. {}\n\n{}",
            "Esto es lo que sé hacer:", templates::HELP_BODY
        )
    }

    pub fn clarify_empty(&self) -> String {
        self.variant(templates::EMPTY_MESSAGE_PROMPTS)
    }

    pub fn feature(&self, category: FeatureCategory, folded_query: &str) -> String {
        let renderer = FeatureRenderer {
            catalog: &self.catalog,
            config: &self.config,
            picker: self.picker.as_ref(),
        };
        renderer.render(category, folded_query)
    }

    /// Brand lineup, in catalog order.
    pub fn brand_listing(&self, products: &[&Product]) -> String {
        let brand = &products[0].brand;
        let mut lines = vec![format!("📱 *Modelos {brand} en catálogo:*")];
        for product in products {
            lines.push(format!(
                "- *{}* | ${}",
                product.model,
                util::format_price(product.price)
            ));
        }
        lines.push(String::new());
        lines.push(self.variant(templates::OUTROS));
        lines.join("\n")
    }

    pub fn model_details(&self, product: &Product) -> String {
        details::phone_details(product, self.config.budget_price)
    }

    pub fn model_not_found(&self) -> String {
        self.variant(templates::MODEL_NOT_FOUND)
    }

    /// Comparison table for resolved model names. Names that fail to look
    /// up are dropped; fewer than two left degrades to the retry phrase.
    pub fn comparison(&self, model_names: &[String]) -> String {
        let products: Vec<&Product> = model_names
            .iter()
            .filter_map(|name| self.catalog.get_by_model(name))
            .collect();

        if products.len() < 2 {
            tracing::warn!(
                requested = model_names.len(),
                resolved = products.len(),
                "comparison targets did not survive catalog lookup"
            );
            return self.comparison_retry();
        }

        compare::comparison_table(&products)
    }

    pub fn comparison_prompt(&self) -> String {
        self.variant(templates::COMPARISON_PROMPTS)
    }

    pub fn comparison_retry(&self) -> String {
        self.variant(templates::COMPARISON_RETRIES)
    }

    /// Follow-up options for a message, independent of its intent.
    pub fn suggest_options(&self, folded_query: &str) -> Vec<String> {
        options::suggest(folded_query)
    }
}
