//! In-memory [`PayrollStore`] that records every batch it receives.

use anyhow::{Result, bail};

use super::PayrollStore;
use crate::types::{CrewId, NewEarning, NewPayroll, NewWorker, Payroll, PayrollId, WorkerId};

#[derive(Default)]
pub struct MemoryStore {
    pub workers: Vec<(WorkerId, NewWorker)>,
    pub crews: Vec<(CrewId, String)>,
    pub payrolls: Vec<Payroll>,
    /// One entry per `create_earnings` call.
    pub earning_batches: Vec<Vec<NewEarning>>,
    /// When set, the next `create_earnings` call fails.
    pub fail_earnings: bool,
    next_id: i64,
}

impl MemoryStore {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

impl PayrollStore for MemoryStore {
    fn create_workers(&mut self, workers: &[NewWorker]) -> Result<Vec<WorkerId>> {
        let mut ids = Vec::with_capacity(workers.len());
        for worker in workers {
            let id = self.next_id();
            self.workers.push((id, worker.clone()));
            ids.push(id);
        }
        Ok(ids)
    }

    fn create_crews(&mut self, names: &[String]) -> Result<Vec<CrewId>> {
        let mut ids = Vec::with_capacity(names.len());
        for name in names {
            let id = self.next_id();
            self.crews.push((id, name.clone()));
            ids.push(id);
        }
        Ok(ids)
    }

    fn create_payrolls(&mut self, payrolls: &[NewPayroll]) -> Result<Vec<PayrollId>> {
        let mut ids = Vec::with_capacity(payrolls.len());
        for payroll in payrolls {
            let id = self.next_id();
            self.payrolls.push(Payroll {
                id,
                pay_period: payroll.pay_period,
                period_start: payroll.period_start,
                period_end: payroll.period_end,
            });
            ids.push(id);
        }
        Ok(ids)
    }

    fn create_earnings(&mut self, earnings: &[NewEarning]) -> Result<usize> {
        if self.fail_earnings {
            bail!("earnings insert rejected");
        }
        self.earning_batches.push(earnings.to_vec());
        Ok(earnings.len())
    }

    fn worker_ids(&mut self) -> Result<Vec<WorkerId>> {
        Ok(self.workers.iter().map(|(id, _)| *id).collect())
    }

    fn crew_ids(&mut self) -> Result<Vec<CrewId>> {
        Ok(self.crews.iter().map(|(id, _)| *id).collect())
    }

    fn payrolls(&mut self) -> Result<Vec<Payroll>> {
        Ok(self.payrolls.clone())
    }
}
