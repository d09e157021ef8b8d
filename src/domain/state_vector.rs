// Live aircraft state vectors and their normalization/ranking
use serde_json::Value;
use std::cmp::Ordering;

pub const UNKNOWN_CALLSIGN: &str = "(unknown)";

// Positional layout of one entry in the live-state `states` array
const IDX_ICAO24: usize = 0;
const IDX_CALLSIGN: usize = 1;
const IDX_LONGITUDE: usize = 5;
const IDX_LATITUDE: usize = 6;
const IDX_BARO_ALTITUDE: usize = 7;
const IDX_ON_GROUND: usize = 8;
const IDX_VELOCITY: usize = 9;
const IDX_TRUE_TRACK: usize = 10;

/// One observed aircraft. Fields the upstream left null stay `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    pub icao24: String,
    pub callsign: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude_m: Option<f64>,
    pub ground_speed_mps: Option<f64>,
    pub heading_deg: Option<f64>,
    pub on_ground: Option<bool>,
}

impl StateVector {
    pub fn from_row(fields: &[Value]) -> Self {
        let number = |idx: usize| fields.get(idx).and_then(Value::as_f64);

        Self {
            icao24: fields
                .get(IDX_ICAO24)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            callsign: normalize_callsign(fields.get(IDX_CALLSIGN).and_then(Value::as_str)),
            latitude: number(IDX_LATITUDE),
            longitude: number(IDX_LONGITUDE),
            altitude_m: number(IDX_BARO_ALTITUDE),
            ground_speed_mps: number(IDX_VELOCITY),
            heading_deg: number(IDX_TRUE_TRACK),
            on_ground: fields.get(IDX_ON_GROUND).and_then(Value::as_bool),
        }
    }
}

/// Aircraft split by ground state, each list keeping callsign order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroundPartition {
    pub airborne: Vec<StateVector>,
    pub landed: Vec<StateVector>,
    /// Vectors whose on-ground flag was missing upstream.
    pub unknown: Vec<StateVector>,
}

impl GroundPartition {
    pub fn total(&self) -> usize {
        self.airborne.len() + self.landed.len() + self.unknown.len()
    }
}

fn normalize_callsign(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(callsign) if !callsign.is_empty() => callsign.to_string(),
        _ => UNKNOWN_CALLSIGN.to_string(),
    }
}

/// Build the callsign-sorted aircraft list from a live-state payload.
///
/// A payload without a `states` array (null, missing, wrong type) yields an
/// empty list. Entries that are not arrays are skipped.
pub fn normalize_states(payload: &Value) -> Vec<StateVector> {
    let Some(rows) = payload.get("states").and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut states: Vec<StateVector> = rows
        .iter()
        .filter_map(Value::as_array)
        .map(|fields| StateVector::from_row(fields))
        .collect();

    sort_by_callsign(&mut states);
    states
}

/// Stable ascending sort by callsign using [`collate`].
pub fn sort_by_callsign(states: &mut [StateVector]) {
    states.sort_by(|a, b| collate(&a.callsign, &b.callsign));
}

fn ground_rank(on_ground: Option<bool>) -> u8 {
    match on_ground {
        Some(false) => 0,
        Some(true) => 1,
        None => 2,
    }
}

/// Split callsign-sorted vectors into airborne, landed and unknown groups.
///
/// Airborne sorts ahead of landed. The sort is stable, so callsign order
/// survives inside every group.
pub fn partition_by_ground_state(mut states: Vec<StateVector>) -> GroundPartition {
    states.sort_by_key(|s| ground_rank(s.on_ground));

    let mut partition = GroundPartition::default();
    for state in states {
        match state.on_ground {
            Some(false) => partition.airborne.push(state),
            Some(true) => partition.landed.push(state),
            None => partition.unknown.push(state),
        }
    }
    partition
}

fn collation_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().filter(|c| c.is_alphanumeric())
}

/// Locale-style string comparison.
///
/// Letters and digits are compared case-insensitively with punctuation and
/// whitespace ignored. Ties fall back to lowercase-before-uppercase and then
/// to plain code point order so the result is total.
pub fn collate(a: &str, b: &str) -> Ordering {
    let primary = |s| collation_chars(s).flat_map(char::to_lowercase);
    let tertiary = |s| collation_chars(s).map(char::is_uppercase);

    primary(a)
        .cmp(primary(b))
        .then_with(|| tertiary(a).cmp(tertiary(b)))
        .then_with(|| a.cmp(b))
}
