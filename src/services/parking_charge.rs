//! Cálculo del cobro de estacionamiento
//!
//! Se factura por hora iniciada: `ceil(|salida - entrada| / 1h) * tarifa`.

use chrono::{DateTime, Utc};

/// Tarifa por hora, en unidades de moneda
pub const HOURLY_RATE: i64 = 10;

const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;

/// Horas facturables entre dos instantes
///
/// La diferencia es absoluta: una salida anterior a la entrada también se
/// factura. Una estancia de duración cero factura 0 horas.
pub fn billed_hours(entry: &DateTime<Utc>, exit: &DateTime<Utc>) -> i64 {
    if exit < entry {
        tracing::warn!(
            "⚠️ Salida {} anterior a la entrada {}, se factura la diferencia absoluta",
            exit,
            entry
        );
    }

    let elapsed = exit.signed_duration_since(*entry).num_milliseconds().abs();
    (elapsed + MILLIS_PER_HOUR - 1) / MILLIS_PER_HOUR
}

/// Calcular el cobro de una estancia
pub fn calculate_parking_charge(entry: &DateTime<Utc>, exit: &DateTime<Utc>) -> i64 {
    billed_hours(entry, exit) * HOURLY_RATE
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_partial_hours_round_up() {
        // 10:00 -> 12:30 = 2.5 horas = 3 horas facturadas
        assert_eq!(calculate_parking_charge(&at(10, 0), &at(12, 30)), 30);
    }

    #[test]
    fn test_exact_hours() {
        assert_eq!(calculate_parking_charge(&at(10, 0), &at(12, 0)), 20);
        assert_eq!(billed_hours(&at(10, 0), &at(11, 0)), 1);
    }

    #[test]
    fn test_zero_duration_bills_nothing() {
        assert_eq!(calculate_parking_charge(&at(10, 0), &at(10, 0)), 0);
    }

    #[test]
    fn test_one_second_bills_full_hour() {
        let entry = at(10, 0);
        let exit = entry + Duration::seconds(1);
        assert_eq!(calculate_parking_charge(&entry, &exit), HOURLY_RATE);
    }

    #[test]
    fn test_swapped_times_are_symmetric() {
        assert_eq!(
            calculate_parking_charge(&at(12, 30), &at(10, 0)),
            calculate_parking_charge(&at(10, 0), &at(12, 30))
        );
    }

    #[test]
    fn test_multi_day_stay() {
        let entry = at(10, 0);
        let exit = entry + Duration::hours(49) + Duration::minutes(1);
        assert_eq!(billed_hours(&entry, &exit), 50);
        assert_eq!(calculate_parking_charge(&entry, &exit), 500);
    }

    #[test]
    fn test_charge_formula_over_range() {
        let entry = at(0, 0);
        for minutes in 0..(24 * 60) {
            let exit = entry + Duration::minutes(minutes);
            let charge = calculate_parking_charge(&entry, &exit);
            let expected = ((minutes + 59) / 60) * HOURLY_RATE;
            assert_eq!(charge, expected, "minutes = {}", minutes);
            assert!(charge >= 0);
            assert_eq!(charge == 0, minutes == 0);
        }
    }
}
