//! Conversión de fechas
//!
//! El formulario trabaja con la representación `datetime-local` de HTML
//! (`YYYY-MM-DDTHH:MM`, hora local sin zona); el almacén guarda instantes
//! absolutos en UTC. La zona local es un offset fijo configurable.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

/// Formato editable del formulario
pub const LOCAL_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Formatos aceptados al leer el formulario (algunos navegadores envían segundos)
const ACCEPTED_INPUT_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Convertir un valor `datetime-local` a instante absoluto
///
/// Devuelve `None` si el valor está vacío o no tiene un formato válido.
pub fn parse_local_input(value: &str, offset: &FixedOffset) -> Option<DateTime<Utc>> {
    let naive = parse_local_naive(value)?;

    offset
        .from_local_datetime(&naive)
        .single()
        .map(|local| local.with_timezone(&Utc))
}

/// Leer un valor `datetime-local` sin aplicar zona
pub fn parse_local_naive(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    ACCEPTED_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Convertir un instante a la representación editable del formulario
///
/// Se pierde la precisión por debajo del minuto.
pub fn to_local_input(instant: &DateTime<Utc>, offset: &FixedOffset) -> String {
    instant
        .with_timezone(offset)
        .format(LOCAL_INPUT_FORMAT)
        .to_string()
}

/// Formato corto para el listado: `Mon, Nov 11, 15:41` (24 horas, sin año)
pub fn format_display_date(instant: &DateTime<Utc>, offset: &FixedOffset) -> String {
    instant
        .with_timezone(offset)
        .format("%a, %b %-d, %H:%M")
        .to_string()
}

/// Parsear un offset del tipo `+02:00`, `-0530` o `Z`
pub fn parse_utc_offset(value: &str) -> Option<FixedOffset> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("z") || value.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0);
    }

    value.parse::<FixedOffset>().ok()
}
