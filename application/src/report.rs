//! Console rendering of an occupancy [`Report`].

use std::fmt;

use service::read::occupancy::Report;

/// [`Report`] of a named hotel, displayed as a console block.
#[derive(Clone, Copy, Debug)]
pub struct Rendered<'r> {
    /// Name of the hotel the [`Report`] is made for.
    pub hotel: &'r str,

    /// [`Report`] to render.
    pub report: &'r Report,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            date,
            total,
            occupied,
            available,
            under_maintenance,
            occupancy,
            revenue,
        } = self.report;

        writeln!(f, "--- OCCUPANCY REPORT: {} ({date}) ---", self.hotel)?;
        writeln!(f, "Total rooms:       {total}")?;
        writeln!(f, "Occupied:          {occupied}")?;
        writeln!(f, "Available:         {available}")?;
        writeln!(f, "Under maintenance: {under_maintenance}")?;
        writeln!(f, "Occupancy:         {occupancy}%")?;
        write!(f, "Total revenue:     {revenue}")
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::{Date, Money, Percent};
    use service::read::occupancy::Report;

    use super::Rendered;

    #[test]
    fn renders_every_figure() {
        let report = Report {
            date: Date::from_str("2026-10-17").unwrap(),
            total: 4,
            occupied: 2,
            available: 2,
            under_maintenance: 0,
            occupancy: Percent::from_str("50").unwrap(),
            revenue: Money::from_str("0USD").unwrap(),
        };

        let out = Rendered {
            hotel: "Hotel Coralina",
            report: &report,
        }
        .to_string();

        assert_eq!(
            out,
            "--- OCCUPANCY REPORT: Hotel Coralina (2026-10-17) ---\n\
             Total rooms:       4\n\
             Occupied:          2\n\
             Available:         2\n\
             Under maintenance: 0\n\
             Occupancy:         50%\n\
             Total revenue:     0USD",
        );
    }
}
