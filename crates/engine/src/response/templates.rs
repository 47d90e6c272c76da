//! Phrase pools for the response generator
//!
//! Every pool holds equivalent phrasings; which one is used only affects
//! wording, never the ranked data. The first variant of each pool is the
//! canonical one tests assert against (via `FixedPicker(0)`).

pub const GREETINGS: &[&str] = &[
    "¡Hola! 👋 Soy el asistente de la tienda. Cuéntame qué celular o características estás buscando.",
    "¡Hola! ¿Buscas un celular nuevo? Puedo recomendarte por cámara, batería, pantalla o precio.",
    "¡Buenas! Dime qué celular te interesa o qué características necesitas.",
];

pub const FAREWELLS: &[&str] = &[
    "¡Hasta luego! 👋 Vuelve cuando quieras comparar más celulares.",
    "¡Gracias por visitarnos! Que disfrutes tu próximo celular.",
    "¡Chau! Aquí estaré si necesitas otra recomendación.",
];

pub const EMPTY_MESSAGE_PROMPTS: &[&str] = &[
    "Por favor, cuéntame qué celular o características estás buscando",
    "No recibí tu mensaje. ¿Qué celular o características te interesan?",
];

/// The storefront widget recognizes an open comparison by this sentence,
/// so every variant must contain it verbatim.
pub const COMPARISON_PROMPTS: &[&str] = &[
    "¿Qué modelos te gustaría comparar? Escríbeme al menos dos, por ejemplo: iPhone 13 vs Galaxy S21",
    "¡Claro! ¿Qué modelos te gustaría comparar? Necesito al menos dos nombres, separados por 'vs' o comas.",
    "Perfecto. ¿Qué modelos te gustaría comparar? Dime dos o más, por ejemplo: 'Galaxy S21 y Redmi Note 11'.",
];

pub const COMPARISON_RETRIES: &[&str] = &[
    "No pude reconocer al menos dos modelos en tu mensaje. Intenta de nuevo, por ejemplo: 'comparar iPhone 13 con Galaxy S21'.",
    "Necesito al menos dos modelos del catálogo para comparar. Prueba con algo como 'iPhone 13 vs Galaxy S21'.",
];

pub const MODEL_NOT_FOUND: &[&str] = &[
    "No encontré ese modelo en nuestro catálogo. ¿Quieres que te recomiende algo similar?",
    "Ese modelo no está en nuestro catálogo por ahora. Puedo sugerirte alternativas si me dices qué buscas.",
];

pub const PRICE_INTROS: &[&str] = &[
    "💵 *Celulares más económicos:*",
    "💵 *Las opciones más económicas del catálogo:*",
];

pub const PRICE_5G_INTROS: &[&str] = &[
    "📱 *Opciones económicas con 5G:*",
    "📱 *5G sin gastar de más:*",
];

pub const CAMERA_INTROS: &[&str] = &[
    "📸 *Celulares con mejor cámara:*",
    "📸 *Los mejores para fotografía:*",
];

pub const DISPLAY_INTROS: &[&str] = &[
    "🖥️ *Celulares con mejor pantalla:*",
    "🖥️ *Las pantallas más destacadas:*",
];

pub const BATTERY_INTROS: &[&str] = &[
    "🔋 *Celulares con mejor batería:*",
    "🔋 *Los que más duran lejos del cargador:*",
];

pub const NETWORK_INTROS: &[&str] = &[
    "📶 *Celulares con 5G:*",
    "📶 *Nuestros modelos con 5G:*",
];

pub const PERFORMANCE_INTROS: &[&str] = &[
    "⚡ *Celulares con mejor rendimiento:*",
    "⚡ *Los más potentes del catálogo:*",
];

pub const RECOMMENDATION_INTROS: &[&str] = &[
    "⭐ *Los mejor valorados por nuestros clientes:*",
    "⭐ *Nuestras recomendaciones destacadas:*",
];

pub const OUTROS: &[&str] = &[
    "¿Te interesa alguno en particular?",
    "¿Quieres más detalles de alguno?",
    "¿Necesitas más información?",
];

/// Annotation for prices under the budget threshold.
pub const BARGAINS: &[&str] = &[
    "¡una ganga!",
    "excelente relación calidad-precio",
    "difícil de superar a ese precio",
];

/// Annotation for batteries above the big-battery threshold. Fixed, not
/// pooled.
pub const BIG_BATTERY_NOTE: &str = "duración excepcional";

/// Category-specific degradation strings, used whenever a ranking cannot
/// be produced.
pub const NO_PRICE_DATA: &str = "No tenemos opciones económicas en este momento.";
pub const NO_PRICE_5G_DATA: &str =
    "Actualmente no tenemos opciones económicas con 5G en nuestro catálogo.";
pub const NO_CAMERA_DATA: &str =
    "No tenemos información detallada sobre cámaras en este momento.";
pub const NO_DISPLAY_DATA: &str =
    "No tenemos información detallada sobre pantallas en este momento.";
pub const NO_BATTERY_DATA: &str = "No tenemos información sobre baterías en este momento.";
pub const NO_NETWORK_DATA: &str = "Actualmente no tenemos modelos con 5G en nuestro catálogo.";
pub const NO_PERFORMANCE_DATA: &str =
    "No tenemos información de rendimiento para mostrar en este momento.";
pub const NO_RECOMMENDATION_DATA: &str =
    "Todavía no tenemos suficientes calificaciones para recomendarte un modelo.";

/// What the assistant can do; used for help requests and as the generic
/// fallback.
pub const HELP_BODY: &str = "Puedo ayudarte a encontrar celulares por:\n\
- 📸 Calidad de cámara\n\
- 🖥️ Tamaño y resolución de pantalla\n\
- 🔋 Duración de batería\n\
- ⚡ Rendimiento (RAM/procesador)\n\
- 💵 Rango de precios\n\
- 📶 Tecnología 5G\n\
\n\
Ejemplos:\n\
'Quiero un celular con buena cámara y batería duradera'\n\
'Mostrarme opciones económicas con 5G'\n\
'Cuál tiene mejor pantalla?'";
