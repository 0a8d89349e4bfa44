//! Closed option lists offered by the agenda forms.
//!
//! Selections are checked advisorily: an empty value is always allowed and
//! an unknown value is logged but still stored.

pub const ACTIVITIES: &[&str] = &[
    "La Tribu",
    "Senderista",
    "Enfermería",
    "Cocina",
    "Confección y Diseño",
    "Restaurante",
    "Transporte Terrestre",
    "Transporte Acuatico",
    "Transporte Aereo",
    "Migración",
    "Parque Nacional",
    "Refugio Silvestre",
    "Centro de Atracción",
    "Lugar para Caminata",
    "Acarreo",
    "Oficina de trámite",
    "Primeros Auxilios",
    "Farmacia",
    "Taller",
    "Abobado",
    "Mensajero",
    "Tienda",
    "Polizas",
    "Aerolínea",
    "Guía",
    "Banco",
    "Otros",
];

pub const SKILL_LEVELS: &[&str] = &["Rápido", "Intermedio", "Básico", "Iniciante"];

pub const PARTICIPATIONS: &[&str] = &[
    "Solo de La Tribu",
    "constante",
    "inconstante",
    "El Camino de Costa Rica",
    "Parques Nacionales",
    "Paseo | Recreativo",
    "Revisar/Eliminar",
];

/// True when `value` is empty or one of `options`. An empty option list
/// accepts anything.
pub fn is_known_option<S: AsRef<str>>(options: &[S], value: &str) -> bool {
    value.is_empty() || options.is_empty() || options.iter().any(|o| o.as_ref() == value)
}

/// Logs a warning for a selection outside its option list.
pub fn check_option<S: AsRef<str>>(field: &'static str, options: &[S], value: &str) {
    if !is_known_option(options, value) {
        tracing::warn!(field, value, "value is not one of the known options");
    }
}
