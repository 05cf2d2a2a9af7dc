//! Report rendering port trait.

use std::io::Write;

use crate::domain::error::CashflowError;
use crate::domain::plan::{Allocation, Assessment, RebalancePlan};

/// Port for writing rebalancing reports.
pub trait ReportPort {
    /// Current holdings followed by the minimum capital for a full rebalance.
    fn write_assessment(
        &self,
        assessment: &Assessment,
        out: &mut dyn Write,
    ) -> Result<(), CashflowError>;

    fn write_fully_rebalanced(
        &self,
        assessment: &Assessment,
        out: &mut dyn Write,
    ) -> Result<(), CashflowError>;

    /// Per-position amounts and the resulting portfolio.
    fn write_allocation(
        &self,
        allocation: &Allocation,
        out: &mut dyn Write,
    ) -> Result<(), CashflowError>;

    /// Default implementation: every section in session order.
    fn write_plan(
        &self,
        plan: &RebalancePlan,
        show_full: bool,
        out: &mut dyn Write,
    ) -> Result<(), CashflowError> {
        self.write_assessment(&plan.assessment, out)?;
        if show_full {
            self.write_fully_rebalanced(&plan.assessment, out)?;
        }
        self.write_allocation(&plan.allocation, out)
    }
}
