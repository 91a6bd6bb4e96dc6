//! Immutable copy of a fully evaluated lattice.

use dl_core::{errors::Error, errors::Result, Price, Real, Size};

/// One node of an evaluated lattice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeNode {
    /// Time step `j`.
    pub step: Size,
    /// Number of down-moves `i` from the root.
    pub down_moves: Size,
    /// Dividend-adjusted underlying price.
    pub price: Price,
    /// American option value.
    pub value: Real,
}

/// Every `(price, value)` pair of an evaluated lattice.
///
/// Nodes are stored row after row in flat arrays; node `(j, i)` lives at
/// `j(j + 1)/2 + i`.
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeSnapshot {
    steps: Size,
    prices: Vec<Price>,
    values: Vec<Real>,
}

impl LatticeSnapshot {
    pub(crate) fn new(steps: Size, prices: Vec<Price>, values: Vec<Real>) -> Self {
        debug_assert_eq!(prices.len(), Self::node_count(steps));
        debug_assert_eq!(values.len(), Self::node_count(steps));
        Self {
            steps,
            prices,
            values,
        }
    }

    /// Number of nodes in a lattice with `steps` periods.
    pub fn node_count(steps: Size) -> Size {
        (steps + 1) * (steps + 2) / 2
    }

    /// Flat storage index of node `(j, i)`.
    pub fn flat_index(j: Size, i: Size) -> Size {
        j * (j + 1) / 2 + i
    }

    /// Number of time steps.
    pub fn steps(&self) -> Size {
        self.steps
    }

    /// Option value at the root, i.e. today.
    pub fn root_value(&self) -> Real {
        self.values[0]
    }

    /// Node `(j, i)`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `j > steps` or `i > j`.
    pub fn node(&self, j: Size, i: Size) -> Result<LatticeNode> {
        if j > self.steps {
            return Err(Error::IndexOutOfRange {
                index: j,
                size: self.steps + 1,
            });
        }
        if i > j {
            return Err(Error::IndexOutOfRange { index: i, size: j + 1 });
        }
        Ok(self.at(j, i))
    }

    /// Nodes of row `j`, highest price first.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `j > steps`.
    pub fn row(&self, j: Size) -> Result<impl Iterator<Item = LatticeNode> + '_> {
        if j > self.steps {
            return Err(Error::IndexOutOfRange {
                index: j,
                size: self.steps + 1,
            });
        }
        Ok((0..=j).map(move |i| self.at(j, i)))
    }

    /// Every node, row by row from the root.
    pub fn nodes(&self) -> impl Iterator<Item = LatticeNode> + '_ {
        (0..=self.steps).flat_map(move |j| (0..=j).map(move |i| self.at(j, i)))
    }

    fn at(&self, j: Size, i: Size) -> LatticeNode {
        let k = Self::flat_index(j, i);
        LatticeNode {
            step: j,
            down_moves: i,
            price: self.prices[k],
            value: self.values[k],
        }
    }
}
