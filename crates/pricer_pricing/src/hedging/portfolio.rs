//! Self-financing stock and cash position.

/// Hedge held against one short call over one simulation run.
///
/// Starts with the premium in cash and no stock. The only mutation is
/// [`HedgePortfolio::rebalance`], which moves value between the two legs
/// without adding or removing any.
///
/// # Examples
/// ```
/// use pricer_pricing::hedging::HedgePortfolio;
///
/// let mut portfolio = HedgePortfolio::new(10.0);
/// let trade = portfolio.rebalance(0.6, 100.0);
///
/// assert_eq!(trade, 0.6);
/// assert_eq!(portfolio.stock_holding(), 0.6);
/// assert!((portfolio.cash() - (10.0 - 60.0)).abs() < 1e-12);
/// assert!((portfolio.value(100.0) - 10.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HedgePortfolio {
    cash: f64,
    stock_holding: f64,
}

impl HedgePortfolio {
    /// Opens the position with `premium` in cash.
    #[inline]
    pub fn new(premium: f64) -> Self {
        Self {
            cash: premium,
            stock_holding: 0.0,
        }
    }

    /// Cash account (negative when borrowing).
    #[inline]
    pub fn cash(&self) -> f64 {
        self.cash
    }

    /// Shares held.
    #[inline]
    pub fn stock_holding(&self) -> f64 {
        self.stock_holding
    }

    /// Trades to hold `target` shares at `spot`, returning the shares traded.
    #[inline]
    pub fn rebalance(&mut self, target: f64, spot: f64) -> f64 {
        let trade = target - self.stock_holding;
        self.cash -= trade * spot;
        self.stock_holding += trade;
        trade
    }

    /// Mark-to-market value at `spot`.
    #[inline]
    pub fn value(&self, spot: f64) -> f64 {
        self.stock_holding * spot + self.cash
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_holds_premium_only() {
        let portfolio = HedgePortfolio::new(10.45);
        assert_eq!(portfolio.cash(), 10.45);
        assert_eq!(portfolio.stock_holding(), 0.0);
        assert_eq!(portfolio.value(123.0), 10.45);
    }

    #[test]
    fn test_rebalance_is_value_neutral() {
        let mut portfolio = HedgePortfolio::new(10.0);
        for (target, spot) in [(0.6, 100.0), (0.7, 104.0), (0.3, 95.0), (1.0, 120.0)] {
            let before = portfolio.value(spot);
            portfolio.rebalance(target, spot);
            assert_relative_eq!(portfolio.value(spot), before, epsilon = 1e-10);
            assert_relative_eq!(portfolio.stock_holding(), target, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_rebalance_sells_down() {
        let mut portfolio = HedgePortfolio::new(0.0);
        portfolio.rebalance(0.8, 50.0);
        let trade = portfolio.rebalance(0.5, 60.0);
        assert_relative_eq!(trade, -0.3, epsilon = 1e-15);
        assert_relative_eq!(portfolio.cash(), -40.0 + 18.0, epsilon = 1e-12);
    }

    #[test]
    fn test_same_target_no_trade() {
        let mut portfolio = HedgePortfolio::new(5.0);
        portfolio.rebalance(0.4, 100.0);
        let cash = portfolio.cash();
        assert_eq!(portfolio.rebalance(0.4, 110.0), 0.0);
        assert_eq!(portfolio.cash(), cash);
    }
}
