//! Intent classification
//!
//! Keyword-driven router over the lowercased message. Classification is an
//! ordered table of rules evaluated in priority order; the first rule that
//! fires wins. Keyword sets are Spanish-first with the common English
//! synonyms the storefront sees in practice.

use std::sync::Arc;

use crate::resolver::EntityResolver;

/// Classified purpose of a user message.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Greeting,
    Farewell,
    Help,
    Comparison,
    /// Folded brand query, ready for `resolve_brand`.
    BrandLookup(String),
    /// Resolved model name, as spelled in the catalog.
    ModelLookup(String),
    Feature(FeatureCategory),
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureCategory {
    Price,
    Camera,
    Display,
    Battery,
    Network5g,
    Performance,
    Recommendation,
}

const GREETING: &[&str] = &[
    "hola", "buenas", "buenos dias", "buenos días", "saludos", "hello", "hi", "hey",
];
const FAREWELL: &[&str] = &[
    "adios", "adiós", "chau", "chao", "hasta luego", "nos vemos", "bye", "goodbye", "gracias",
];
const HELP: &[&str] = &[
    "ayuda", "ayudame", "ayúdame", "help", "que puedes hacer", "qué puedes hacer",
];
const COMPARISON: &[&str] = &[
    "comparar", "compara", "comparame", "comparacion", "comparación", "comparativa", "compare",
    "versus", "vs", "diferencia", "diferencias",
];

const PRICE: &[&str] = &[
    "economico", "económico", "economicos", "económicos", "economica", "económica", "barato",
    "baratos", "barata", "precio", "precios", "cheap", "budget",
];
const CAMERA: &[&str] = &[
    "camara", "cámara", "camaras", "cámaras", "foto", "fotos", "fotografia", "fotografía",
    "selfie", "selfies", "camera",
];
const DISPLAY: &[&str] = &[
    "pantalla", "pantallas", "display", "resolucion", "resolución", "hz", "refresco",
];
const BATTERY: &[&str] = &[
    "bateria", "batería", "baterias", "baterías", "battery", "autonomia", "autonomía",
    "duracion", "duración", "carga",
];
const NETWORK_5G: &[&str] = &["5g", "red", "redes", "network", "conectividad"];
const PERFORMANCE: &[&str] = &[
    "ram", "procesador", "rendimiento", "performance", "velocidad", "rapido", "rápido", "gamer",
    "juegos",
];
const RECOMMENDATION: &[&str] = &[
    "recomienda", "recomiendas", "recomiendame", "recomiéndame", "recomendacion",
    "recomendación", "sugerencia", "sugiereme", "sugiéreme", "recommend", "mejor celular",
    "mejor telefono", "mejor teléfono",
];

/// Phrases that mark a brand-listing request ("modelos de samsung").
const BRAND_QUALIFIERS: &[&str] = &[
    "modelos de", "celulares de", "telefonos de", "teléfonos de", "equipos de", "models of",
    "phones of",
];

/// Feature buckets in priority order.
const FEATURE_BUCKETS: &[(FeatureCategory, &[&str])] = &[
    (FeatureCategory::Price, PRICE),
    (FeatureCategory::Camera, CAMERA),
    (FeatureCategory::Display, DISPLAY),
    (FeatureCategory::Battery, BATTERY),
    (FeatureCategory::Network5g, NETWORK_5G),
    (FeatureCategory::Performance, PERFORMANCE),
    (FeatureCategory::Recommendation, RECOMMENDATION),
];

pub struct IntentClassifier {
    resolver: Arc<EntityResolver>,
}

struct Ctx<'a> {
    folded: &'a str,
    tokens: Vec<String>,
}

type Rule = fn(&IntentClassifier, &Ctx) -> Option<Intent>;

/// The cascade, highest priority first.
const RULES: &[(&str, Rule)] = &[
    ("greeting", IntentClassifier::greeting),
    ("farewell", IntentClassifier::farewell),
    ("help", IntentClassifier::help),
    ("comparison", IntentClassifier::comparison),
    ("brand", IntentClassifier::brand),
    ("model", IntentClassifier::model),
    ("feature", IntentClassifier::feature),
];

impl IntentClassifier {
    pub fn new(resolver: Arc<EntityResolver>) -> Self {
        Self { resolver }
    }

    pub fn classify(&self, message: &str) -> Intent {
        let folded = message.trim().to_lowercase();
        let ctx = Ctx {
            tokens: tokenize(&folded),
            folded: &folded,
        };

        for (name, rule) in RULES {
            if let Some(intent) = rule(self, &ctx) {
                tracing::debug!(rule = name, ?intent, "intent classified");
                return intent;
            }
        }

        Intent::Fallback
    }

    fn greeting(&self, ctx: &Ctx) -> Option<Intent> {
        matches_bucket(ctx, GREETING).then_some(Intent::Greeting)
    }

    fn farewell(&self, ctx: &Ctx) -> Option<Intent> {
        matches_bucket(ctx, FAREWELL).then_some(Intent::Farewell)
    }

    fn help(&self, ctx: &Ctx) -> Option<Intent> {
        matches_bucket(ctx, HELP).then_some(Intent::Help)
    }

    /// Explicit comparison vocabulary, or a message that already names at
    /// least two phones.
    fn comparison(&self, ctx: &Ctx) -> Option<Intent> {
        if matches_bucket(ctx, COMPARISON) {
            return Some(Intent::Comparison);
        }
        if self.resolver.extract_comparison_targets(ctx.folded).len() >= 2 {
            return Some(Intent::Comparison);
        }
        None
    }

    /// Brand lookup only when the message asks for a brand's lineup or is
    /// nothing but the brand name; otherwise a model or feature rule gets
    /// its chance.
    fn brand(&self, ctx: &Ctx) -> Option<Intent> {
        let mut tail = None;
        for qualifier in BRAND_QUALIFIERS {
            if let Some(pos) = ctx.folded.find(qualifier) {
                tail = Some(&ctx.folded[pos + qualifier.len()..]);
                break;
            }
        }

        if let Some(tail) = tail {
            // first token after the qualifier that names a brand
            return tokenize(tail)
                .into_iter()
                .find(|token| !self.resolver.resolve_brand(token).is_empty())
                .map(Intent::BrandLookup);
        }

        // bare brand name: the whole message, ignoring spaces and punctuation
        let text_compact: String = ctx
            .folded
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        let brands = self.resolver.resolve_brand(ctx.folded);
        let first = brands.first().copied().or_else(|| {
            // brands spelled without spaces still count as a bare mention
            self.resolver.resolve_brand(&text_compact).first().copied()
        })?;

        if first.brand.to_lowercase().replace(' ', "") == text_compact {
            Some(Intent::BrandLookup(first.brand.to_lowercase()))
        } else {
            None
        }
    }

    fn model(&self, ctx: &Ctx) -> Option<Intent> {
        self.resolver
            .resolve_phone(ctx.folded)
            .map(|p| Intent::ModelLookup(p.model.clone()))
    }

    fn feature(&self, ctx: &Ctx) -> Option<Intent> {
        FEATURE_BUCKETS
            .iter()
            .find(|(_, bucket)| matches_bucket(ctx, bucket))
            .map(|&(category, _)| Intent::Feature(category))
    }
}

/// Split on anything that is not alphanumeric.
fn tokenize(folded: &str) -> Vec<String> {
    folded
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Single-word terms must match a whole token; multi-word terms match as a
/// substring of the message.
fn matches_bucket(ctx: &Ctx, bucket: &[&str]) -> bool {
    bucket.iter().any(|term| {
        if term.contains(' ') {
            ctx.folded.contains(term)
        } else {
            ctx.tokens.iter().any(|t| t == term)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use celubot_config::EngineConfig;
    use celubot_core::{Catalog, Product};
    use std::sync::Arc;

    fn phone(brand: &str, model: &str) -> Product {
        Product {
            model: model.into(),
            brand: brand.into(),
            price: 500,
            screen_size: 6.1,
            resolution_width: 1080,
            resolution_height: 2400,
            ram_gb: 6,
            storage_gb: 128,
            battery_mah: 4500,
            fast_charging_w: None,
            rear_cameras: None,
            rear_camera_mp: None,
            front_camera_mp: None,
            refresh_rate_hz: None,
            has_5g: true,
            avg_rating: None,
            processor_ghz: None,
            has_ois: None,
        }
    }

    fn classifier() -> IntentClassifier {
        let catalog = Arc::new(Catalog::new(vec![
            phone("Apple", "iPhone 13"),
            phone("Samsung", "Galaxy S21"),
            phone("Samsung", "Galaxy A52"),
        ]));
        let resolver = Arc::new(EntityResolver::new(catalog, &EngineConfig::default()));
        IntentClassifier::new(resolver)
    }

    #[test]
    fn greetings_and_farewells() {
        let c = classifier();
        assert_eq!(c.classify("Hola!"), Intent::Greeting);
        assert_eq!(c.classify("buenos días"), Intent::Greeting);
        assert_eq!(c.classify("adiós, gracias"), Intent::Farewell);
    }

    #[test]
    fn help_request() {
        let c = classifier();
        assert_eq!(c.classify("ayuda"), Intent::Help);
        assert_eq!(c.classify("qué puedes hacer?"), Intent::Help);
    }

    #[test]
    fn comparison_by_keyword_and_by_targets() {
        let c = classifier();
        assert_eq!(c.classify("comparar"), Intent::Comparison);
        assert_eq!(c.classify("iphone 13 vs galaxy s21"), Intent::Comparison);
        // two models without any comparison word still compare
        assert_eq!(c.classify("iphone 13 y galaxy s21"), Intent::Comparison);
    }

    #[test]
    fn brand_lookup_needs_qualifier_or_bare_brand() {
        let c = classifier();
        assert!(matches!(
            c.classify("qué modelos de Samsung tienen?"),
            Intent::BrandLookup(_)
        ));
        assert!(matches!(c.classify("samsung"), Intent::BrandLookup(_)));
        // a specific model mentioning the brand is a model lookup
        assert_eq!(
            c.classify("samsung galaxy s21"),
            Intent::ModelLookup("Galaxy S21".into())
        );
    }

    #[test]
    fn model_lookup() {
        let c = classifier();
        assert_eq!(
            c.classify("iPhone 13"),
            Intent::ModelLookup("iPhone 13".into())
        );
        assert_eq!(
            c.classify("ifone 13"),
            Intent::ModelLookup("iPhone 13".into())
        );
    }

    #[test]
    fn feature_buckets() {
        let c = classifier();
        assert_eq!(
            c.classify("celular economico"),
            Intent::Feature(FeatureCategory::Price)
        );
        assert_eq!(
            c.classify("cuál tiene mejor cámara?"),
            Intent::Feature(FeatureCategory::Camera)
        );
        assert_eq!(
            c.classify("pantalla grande"),
            Intent::Feature(FeatureCategory::Display)
        );
        assert_eq!(
            c.classify("batería duradera"),
            Intent::Feature(FeatureCategory::Battery)
        );
        assert_eq!(
            c.classify("tienen 5g?"),
            Intent::Feature(FeatureCategory::Network5g)
        );
        assert_eq!(
            c.classify("mucha ram para juegos"),
            Intent::Feature(FeatureCategory::Performance)
        );
        assert_eq!(
            c.classify("qué me recomiendas"),
            Intent::Feature(FeatureCategory::Recommendation)
        );
    }

    #[test]
    fn price_beats_network_when_both_present() {
        let c = classifier();
        assert_eq!(
            c.classify("celular economico con 5g"),
            Intent::Feature(FeatureCategory::Price)
        );
    }

    #[test]
    fn gibberish_falls_back() {
        let c = classifier();
        assert_eq!(c.classify("asdf qwerty"), Intent::Fallback);
    }
}
