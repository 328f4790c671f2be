#![allow(dead_code)]

use std::path::PathBuf;

use harvestnet_lib::{FacilityLocation, InventoryRecord, LogisticsRecord};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Builder for `LogisticsRecord` values with sensible defaults.
pub struct LogisticsRecordBuilder {
    record: LogisticsRecord,
}

impl LogisticsRecordBuilder {
    #[must_use]
    pub fn new(origin: &str, destination: &str) -> Self {
        Self {
            record: LogisticsRecord {
                origin: origin.to_string(),
                destination: destination.to_string(),
                transport_cost: 1.0,
                transport_time: 1.0,
                transport_capacity: 100.0,
                latitude: 0.0,
                longitude: 0.0,
                demand: 10.0,
                service_radius: 5.0,
                region: "North".to_string(),
                population: 1000.0,
                delivery_time: 24.0,
                actual_delivery_time: 20.0,
                promised_delivery_time: 24.0,
                revenue: 50.0,
                actual_load: 90.0,
            },
        }
    }

    pub fn cost(mut self, cost: f64) -> Self {
        self.record.transport_cost = cost;
        self
    }

    pub fn time(mut self, time: f64) -> Self {
        self.record.transport_time = time;
        self
    }

    pub fn position(mut self, latitude: f64, longitude: f64) -> Self {
        self.record.latitude = latitude;
        self.record.longitude = longitude;
        self
    }

    pub fn late(mut self) -> Self {
        self.record.actual_delivery_time = self.record.promised_delivery_time + 1.0;
        self
    }

    pub fn load(mut self, actual_load: f64, capacity: f64) -> Self {
        self.record.actual_load = actual_load;
        self.record.transport_capacity = capacity;
        self
    }

    pub fn build(self) -> LogisticsRecord {
        self.record
    }

    pub fn facility(self) -> FacilityLocation {
        self.record.facility()
    }
}

pub fn inventory(warehouse: &str, demand: f64, lead_time: f64, storage_cost: f64) -> InventoryRecord {
    InventoryRecord {
        warehouse: warehouse.to_string(),
        inventory_level: 100.0,
        demand,
        lead_time,
        storage_cost,
    }
}
