// Traffic service - Use case for aircraft around a point
use crate::application::traffic_source::LiveTrafficSource;
use crate::domain::geo::{compute_bounding_box, BoundingBox, GeoPoint};
use crate::domain::state_vector::{
    normalize_states, partition_by_ground_state, GroundPartition, StateVector,
};
use std::sync::Arc;

pub const DEFAULT_LOCATION_RADIUS_KM: f64 = 50.0;

/// Aircraft around a coordinate, split by ground state.
#[derive(Debug, Clone)]
pub struct LocationTraffic {
    pub center: GeoPoint,
    pub radius_km: f64,
    pub bbox: BoundingBox,
    pub aircraft: GroundPartition,
}

#[derive(Clone)]
pub struct TrafficService {
    source: Arc<dyn LiveTrafficSource>,
}

impl TrafficService {
    pub fn new(source: Arc<dyn LiveTrafficSource>) -> Self {
        Self { source }
    }

    /// Callsign-sorted aircraft inside the box around `center`.
    pub async fn aircraft_around(
        &self,
        center: GeoPoint,
        radius_km: f64,
    ) -> anyhow::Result<(BoundingBox, Vec<StateVector>)> {
        let bbox = compute_bounding_box(center, radius_km);
        tracing::debug!(?bbox, radius_km, "querying live states");

        let payload = self.source.states_within(bbox).await?;
        let aircraft = normalize_states(&payload);

        tracing::debug!("{} aircraft within {} km", aircraft.len(), radius_km);
        Ok((bbox, aircraft))
    }

    pub async fn location_traffic(
        &self,
        center: GeoPoint,
        radius_km: f64,
    ) -> anyhow::Result<LocationTraffic> {
        let (bbox, aircraft) = self.aircraft_around(center, radius_km).await?;

        Ok(LocationTraffic {
            center,
            radius_km,
            bbox,
            aircraft: partition_by_ground_state(aircraft),
        })
    }
}
