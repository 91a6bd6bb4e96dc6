//! Discrete cash dividends on the lattice time grid.
//!
//! The lattice uses an escrowed-style adjustment: once a dividend's pay date
//! has passed, its raw cash amount is subtracted from every node price at
//! that step. Amounts are neither discounted nor compounded.

use super::TimeGrid;
use dl_core::{Real, Time};
use dl_instruments::Dividend;

/// Known cash dividends, queried against lattice step dates.
#[derive(Debug, Clone, Copy)]
pub struct DividendSchedule<'a> {
    dividends: &'a [Dividend],
}

impl<'a> DividendSchedule<'a> {
    /// Wrap a list of dividends. Order does not matter.
    pub fn new(dividends: &'a [Dividend]) -> Self {
        Self { dividends }
    }

    /// The underlying dividends.
    pub fn dividends(&self) -> &'a [Dividend] {
        self.dividends
    }

    /// Total cash paid strictly before time `t`.
    ///
    /// A dividend paid exactly at `t` is not yet counted.
    pub fn paid_before(&self, t: Time) -> Real {
        self.dividends
            .iter()
            .filter(|d| t > d.time)
            .map(|d| d.amount)
            .sum()
    }

    /// Cumulative dividend offset for every point of `grid`.
    ///
    /// Entry `j` is the sum of the amounts whose pay time is strictly before
    /// `grid.time(j)`. The result has `grid.size()` entries and is
    /// non-decreasing. A dividend paid exactly at the last grid point (the
    /// option's expiry) never shows up in it.
    pub fn offsets(&self, grid: &TimeGrid) -> Vec<Real> {
        let mut paid = vec![0.0; grid.size()];
        for div in self.dividends {
            for (offset, &t) in paid.iter_mut().zip(grid.times()) {
                if t > div.time {
                    *offset += div.amount;
                }
            }
        }
        paid
    }
}
