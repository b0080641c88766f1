//! Per-step record of a hedging run.

/// State after one step of the hedging loop.
///
/// For the terminal entry `delta` is the hedge ratio carried into expiry and
/// `option_value` is the payoff.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TraceEntry {
    /// Step index, `0..=n_steps`
    pub step: usize,
    /// Time remaining to expiry in years
    pub time_left: f64,
    /// Spot price at this step
    pub spot: f64,
    /// Hedge ratio held after the step
    pub delta: f64,
    /// Option market value (payoff at expiry)
    pub option_value: f64,
    /// Cash account after the step
    pub cash: f64,
    /// Shares held after the step
    pub stock_holding: f64,
    /// `stock_holding * spot + cash`
    pub hedge_value: f64,
    /// `hedge_value - option_value`
    pub pnl: f64,
}

/// Ordered trace of one hedging run, `n_steps + 1` entries long.
///
/// Produced only by the simulator, which always appends the terminal entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationTrace {
    premium: f64,
    seed: Option<u64>,
    entries: Vec<TraceEntry>,
}

impl SimulationTrace {
    pub(crate) fn with_capacity(premium: f64, capacity: usize) -> Self {
        Self {
            premium,
            seed: None,
            entries: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, entry: TraceEntry) {
        self.entries.push(entry);
    }

    pub(crate) fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Premium received at inception.
    #[inline]
    pub fn premium(&self) -> f64 {
        self.premium
    }

    /// Seed of the synthetic path, if this run generated one.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Number of rebalancing steps.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` only for a trace that has not been filled yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in step order.
    #[inline]
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// Iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, TraceEntry> {
        self.entries.iter()
    }

    /// The expiry entry.
    #[inline]
    pub fn terminal(&self) -> Option<&TraceEntry> {
        self.entries.last()
    }

    /// P&L at every step.
    pub fn pnl(&self) -> Vec<f64> {
        self.entries.iter().map(|entry| entry.pnl).collect()
    }

    /// Hedging error at expiry.
    #[inline]
    pub fn final_pnl(&self) -> f64 {
        self.terminal().map_or(f64::NAN, |entry| entry.pnl)
    }

    /// Spot path the run stepped through.
    pub fn spots(&self) -> Vec<f64> {
        self.entries.iter().map(|entry| entry.spot).collect()
    }
}

impl<'a> IntoIterator for &'a SimulationTrace {
    type Item = &'a TraceEntry;
    type IntoIter = std::slice::Iter<'a, TraceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
