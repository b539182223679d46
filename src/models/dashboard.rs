//! Modelo del dashboard
//!
//! Listado de vehículos con sus contadores derivados. Los contadores se
//! recalculan siempre a partir del listado actual.

use serde::Serialize;
use uuid::Uuid;

use crate::models::vehicle::{VehicleRecord, VehicleType};

/// Plazas del estacionamiento
pub const DEFAULT_CAPACITY: i64 = 50;

/// Vehículos por tipo; los tipos desconocidos no se cuentan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VehicleTypeCounts {
    pub car: usize,
    pub truck: usize,
    pub microbus: usize,
}

impl VehicleTypeCounts {
    pub fn record(&mut self, vehicle_type: VehicleType) {
        match vehicle_type {
            VehicleType::Car => self.car += 1,
            VehicleType::Truck => self.truck += 1,
            VehicleType::Microbus => self.microbus += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.car + self.truck + self.microbus
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_parked: usize,
    /// Puede ser negativo si hay más vehículos que plazas
    pub empty_slots: i64,
    pub type_counts: VehicleTypeCounts,
}

impl DashboardSummary {
    pub fn from_vehicles(vehicles: &[VehicleRecord], capacity: i64) -> Self {
        let mut type_counts = VehicleTypeCounts::default();
        for kind in vehicles.iter().filter_map(VehicleRecord::kind) {
            type_counts.record(kind);
        }

        let total_parked = vehicles.len();
        Self {
            total_parked,
            empty_slots: capacity - total_parked as i64,
            type_counts,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub vehicles: Vec<VehicleRecord>,
    pub summary: DashboardSummary,
    capacity: i64,
}

impl DashboardView {
    pub fn new(vehicles: Vec<VehicleRecord>, capacity: i64) -> Self {
        let summary = DashboardSummary::from_vehicles(&vehicles, capacity);
        Self {
            vehicles,
            summary,
            capacity,
        }
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// Quitar un vehículo del listado y recalcular los contadores
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.vehicles.len();
        self.vehicles.retain(|vehicle| vehicle.id != id);
        self.summary = DashboardSummary::from_vehicles(&self.vehicles, self.capacity);
        self.vehicles.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::ParkingStatus;
    use chrono::{TimeZone, Utc};

    fn vehicle(kind: &str) -> VehicleRecord {
        VehicleRecord {
            id: Uuid::new_v4(),
            license_number: "123".to_string(),
            vehicle_type: kind.to_string(),
            owner_name: "A".to_string(),
            owner_phone: "555".to_string(),
            status: ParkingStatus::In,
            address: "X".to_string(),
            entry_time: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            exit_time: None,
            parking_charge: 0,
        }
    }

    #[test]
    fn test_summary_counts() {
        let vehicles = vec![vehicle("Car"), vehicle("Car"), vehicle("Truck"), vehicle("Microbus")];
        let summary = DashboardSummary::from_vehicles(&vehicles, DEFAULT_CAPACITY);

        assert_eq!(summary.total_parked, 4);
        assert_eq!(summary.empty_slots, 46);
        assert_eq!(summary.type_counts, VehicleTypeCounts { car: 2, truck: 1, microbus: 1 });
        assert_eq!(summary.type_counts.total(), summary.total_parked);
    }

    #[test]
    fn test_unknown_types_are_ignored_in_breakdown() {
        let vehicles = vec![vehicle("Car"), vehicle("Bicycle")];
        let summary = DashboardSummary::from_vehicles(&vehicles, DEFAULT_CAPACITY);

        assert_eq!(summary.total_parked, 2);
        assert_eq!(summary.type_counts.total(), 1);
    }

    #[test]
    fn test_empty_slots_are_not_clamped() {
        let vehicles: Vec<VehicleRecord> = (0..3).map(|_| vehicle("Car")).collect();
        let summary = DashboardSummary::from_vehicles(&vehicles, 2);
        assert_eq!(summary.empty_slots, -1);
    }

    #[test]
    fn test_remove_recomputes_from_remaining_listing() {
        let vehicles = vec![vehicle("Car"), vehicle("Truck")];
        let target = vehicles[1].id;
        let mut view = DashboardView::new(vehicles, DEFAULT_CAPACITY);

        assert!(view.remove(target));
        assert_eq!(view.summary.total_parked, 1);
        assert_eq!(view.summary.empty_slots, 49);
        assert_eq!(view.summary.type_counts.truck, 0);

        assert!(!view.remove(Uuid::new_v4()));
        assert_eq!(view.summary.total_parked, 1);
    }

    #[test]
    fn test_type_counts_json_keys() {
        let json = serde_json::to_value(VehicleTypeCounts { car: 1, truck: 2, microbus: 3 }).unwrap();
        assert_eq!(json, serde_json::json!({ "Car": 1, "Truck": 2, "Microbus": 3 }));
    }
}
