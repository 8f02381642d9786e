//! Process-wide token catalogs used by the normalizer.
//!
//! Both sets are loaded once on first use and never mutated, so they are safe
//! for unlimited concurrent read access across worker threads. Tokens are
//! stored in the post-normalization form (upper-case, ASCII).

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Common Spanish connectors that carry no identity information.
pub static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "DE", "DEL", "LA", "EL", "LOS", "LAS", "Y", "E", "AL", "A", "EN", "POR", "PARA", "CON",
    ]
    .into_iter()
    .collect()
});

/// Corporate-suffix and public-administration boilerplate frequent in Mexican
/// registry names ("SA DE CV", "H AYUNTAMIENTO", ejidal designations, ...).
pub static INSTITUTIONAL_TERMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Corporate forms and their expansions
        "SA",
        "SAPI",
        "CV",
        "RL",
        "SRL",
        "SC",
        "AC",
        "SCL",
        "SNC",
        "SPR",
        "SOCIEDAD",
        "ANONIMA",
        "RESPONSABILIDAD",
        "LIMITADA",
        "PROMOTORA",
        "INVERSION",
        "COOPERATIVA",
        "COOP",
        "CAPITAL",
        "VARIABLE",
        // Public administration / ejidal
        "H",
        "AYUNTAMIENTO",
        "MUNICIPAL",
        "MUNICIPIO",
        "LOC",
        "EJIDO",
        "COMUNIDAD",
        "COLONIA",
        "DELEGACION",
        "ALCALDIA",
    ]
    .into_iter()
    .collect()
});
