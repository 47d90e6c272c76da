//! Follow-up option suggestions
//!
//! A keyword-to-options mapping keyed on the tokenized query. It is
//! deliberately independent of the intent cascade, so the options shown
//! under a reply may diverge from the intent that produced it.

const DEFAULT_OPTIONS: &[&str] = &["Ver celulares económicos", "Comparar modelos", "Ayuda"];

/// First matching row wins, top to bottom.
const OPTION_RULES: &[(&[&str], &[&str])] = &[
    (
        &["comparar", "compara", "comparacion", "comparación", "vs", "versus", "diferencia"],
        &["Comparar otros modelos", "Ver el más económico", "Ayuda"],
    ),
    (
        &["economico", "económico", "barato", "baratos", "precio", "precios"],
        &["Ver celulares 5G económicos", "Comparar precios", "Ver todos los modelos"],
    ),
    (
        &["camara", "cámara", "foto", "fotos", "selfie"],
        &["Comparar cámaras", "Ver los mejor valorados", "Ver precios"],
    ),
    (
        &["pantalla", "display", "resolucion", "resolución"],
        &["Comparar pantallas", "Ver celulares para juegos", "Ver precios"],
    ),
    (
        &["bateria", "batería", "carga", "autonomia", "autonomía"],
        &["Ver carga rápida", "Comparar baterías", "Ver precios"],
    ),
    (
        &["5g", "red", "redes"],
        &["Ver 5G económicos", "Comparar modelos 5G", "Ver todos los modelos"],
    ),
    (
        &["ram", "procesador", "rendimiento", "juegos", "gamer"],
        &["Comparar rendimiento", "Ver los más potentes", "Ver precios"],
    ),
    (
        &["hola", "buenas", "ayuda", "help"],
        &["Ver opciones", "Celulares económicos", "Comparar modelos"],
    ),
];

/// Options for a message, from the first rule whose keyword set intersects
/// its tokens; the default set when nothing matches.
pub(crate) fn suggest(folded_query: &str) -> Vec<String> {
    let tokens: Vec<&str> = folded_query
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    let row = OPTION_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| tokens.contains(k)))
        .map(|(_, options)| *options)
        .unwrap_or(DEFAULT_OPTIONS);

    row.iter().map(|s| s.to_string()).collect()
}
