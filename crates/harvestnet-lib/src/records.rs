//! Typed input records.
//!
//! A logistics row carries both a transport lane and the facility observed at
//! its origin, so lanes and facility locations are projections of the same
//! record stream.

use serde::{Deserialize, Serialize};

/// Transport lane between two locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportLane {
    pub origin: String,
    pub destination: String,
    pub cost: f64,
    pub time: f64,
    pub capacity: f64,
}

impl TransportLane {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        cost: f64,
        time: f64,
        capacity: f64,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            cost,
            time,
            capacity,
        }
    }
}

/// Facility observation used by the distribution clusterer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub demand: f64,
    pub transport_cost: f64,
    pub service_radius: f64,
    pub region: String,
    pub population: f64,
    pub delivery_time: f64,
    pub actual_delivery_time: f64,
    pub promised_delivery_time: f64,
    pub revenue: f64,
    pub actual_load: f64,
    pub transport_capacity: f64,
}

/// One logistics row as supplied by the ingestion boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticsRecord {
    pub origin: String,
    pub destination: String,
    pub transport_cost: f64,
    pub transport_time: f64,
    pub transport_capacity: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub demand: f64,
    pub service_radius: f64,
    pub region: String,
    pub population: f64,
    pub delivery_time: f64,
    pub actual_delivery_time: f64,
    pub promised_delivery_time: f64,
    pub revenue: f64,
    pub actual_load: f64,
}

impl LogisticsRecord {
    /// Column names a logistics source must provide.
    pub const COLUMNS: &'static [&'static str] = &[
        "origin",
        "destination",
        "transport_cost",
        "transport_time",
        "transport_capacity",
        "latitude",
        "longitude",
        "demand",
        "service_radius",
        "region",
        "population",
        "delivery_time",
        "actual_delivery_time",
        "promised_delivery_time",
        "revenue",
        "actual_load",
    ];

    pub fn lane(&self) -> TransportLane {
        TransportLane {
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            cost: self.transport_cost,
            time: self.transport_time,
            capacity: self.transport_capacity,
        }
    }

    pub fn facility(&self) -> FacilityLocation {
        FacilityLocation {
            latitude: self.latitude,
            longitude: self.longitude,
            demand: self.demand,
            transport_cost: self.transport_cost,
            service_radius: self.service_radius,
            region: self.region.clone(),
            population: self.population,
            delivery_time: self.delivery_time,
            actual_delivery_time: self.actual_delivery_time,
            promised_delivery_time: self.promised_delivery_time,
            revenue: self.revenue,
            actual_load: self.actual_load,
            transport_capacity: self.transport_capacity,
        }
    }
}

/// One inventory observation for a warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub warehouse: String,
    pub inventory_level: f64,
    pub demand: f64,
    pub lead_time: f64,
    pub storage_cost: f64,
}

impl InventoryRecord {
    /// Column names an inventory source must provide.
    pub const COLUMNS: &'static [&'static str] = &[
        "warehouse",
        "inventory_level",
        "demand",
        "lead_time",
        "storage_cost",
    ];
}
