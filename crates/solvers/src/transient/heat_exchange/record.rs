/// One row of the simulation history.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Simulation time.
    pub t: f64,

    /// Bar temperature.
    pub bar: f64,

    /// Water temperature.
    pub water: f64,

    /// Heat transfer coefficient at this record's temperature difference.
    pub h: f64,
}
