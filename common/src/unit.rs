//! Marker types.

/// Marker type describing an arrival.
#[derive(Clone, Copy, Debug)]
pub struct Arrival;

/// Marker type describing a departure.
#[derive(Clone, Copy, Debug)]
pub struct Departure;
