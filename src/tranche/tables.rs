//! Static tranche tables

use super::Tranche;

/// Number of tranches in each table
pub const TRANCHE_COUNT: usize = 5;

pub static POP_TRANCHES: [Tranche; TRANCHE_COUNT] = [
    Tranche { id: "p1", label: "<5M", min: 0.0, max: 5_000_000.0 },
    Tranche { id: "p2", label: "5–20M", min: 5_000_000.0, max: 20_000_000.0 },
    Tranche { id: "p3", label: "20–60M", min: 20_000_000.0, max: 60_000_000.0 },
    Tranche { id: "p4", label: "60–150M", min: 60_000_000.0, max: 150_000_000.0 },
    Tranche { id: "p5", label: ">150M", min: 150_000_000.0, max: f64::INFINITY },
];

pub static AREA_TRANCHES: [Tranche; TRANCHE_COUNT] = [
    Tranche { id: "a1", label: "<100k", min: 0.0, max: 100_000.0 },
    Tranche { id: "a2", label: "100–500k", min: 100_000.0, max: 500_000.0 },
    Tranche { id: "a3", label: "500k–1M", min: 500_000.0, max: 1_000_000.0 },
    Tranche { id: "a4", label: "1–3M", min: 1_000_000.0, max: 3_000_000.0 },
    Tranche { id: "a5", label: ">3M", min: 3_000_000.0, max: f64::INFINITY },
];
