//! Bounded per-process reference history.
//!
//! A `History` keeps the last `CAPACITY` page references of a process, each
//! tagged with whether it faulted. Pushing past capacity silently drops the
//! oldest record. The working set of a process is the set of distinct pages
//! referenced by the live records.
//!
//! ```text
//!   records: [r3, r4, r1, r2]     start = 2, count = 4
//!   oldest  = records[start]
//!   at(t)   = records[(start + count - 1 - t) % CAPACITY]
//! ```

mod working_set;

pub use working_set::WorkingSet;

/// Default window: 2048 references.
pub const HISTORY_SIZE: usize = 1 << 11;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Record {
    pub page: usize,
    pub fault: bool,
}

impl Record {
    pub fn hit(page: usize) -> Self {
        Record { page, fault: false }
    }

    pub fn fault(page: usize) -> Self {
        Record { page, fault: true }
    }
}

#[derive(Debug, PartialEq)]
pub enum HistoryError {
    OutOfRange { t: usize, len: usize },
}

#[derive(Debug, Clone)]
pub struct History<const CAPACITY: usize> {
    records: Vec<Record>,
    /// Slot of the oldest live record
    start: usize,
    count: usize,
}

impl<const CAPACITY: usize> History<CAPACITY> {
    pub fn init() -> Self {
        History {
            records: vec![Record::default(); CAPACITY],
            start: 0,
            count: 0,
        }
    }

    pub fn push(&mut self, record: Record) {
        if CAPACITY == 0 {
            return;
        }
        if self.count < CAPACITY {
            let slot = (self.start + self.count) % CAPACITY;
            self.records[slot] = record;
            self.count += 1;
        } else {
            self.records[self.start] = record;
            self.start = (self.start + 1) % CAPACITY;
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The record `t` steps older than the newest one.
    pub fn at(&self, t: usize) -> Result<Record, HistoryError> {
        if t >= self.count {
            return Err(HistoryError::OutOfRange { t, len: self.count });
        }
        let slot = (self.start + self.count - 1 - t) % CAPACITY;
        Ok(self.records[slot])
    }

    /// Live records, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        (0..self.count).map(move |i| &self.records[(self.start + i) % CAPACITY])
    }

    pub fn fault_sum(&self) -> usize {
        self.iter().filter(|r| r.fault).count()
    }

    /// Distinct pages referenced by the live records. Every recorded page must be below `pages`.
    pub fn working_set(&self, pages: usize) -> WorkingSet {
        let mut set = WorkingSet::new(pages);
        for record in self.iter() {
            set.insert(record.page);
        }
        set
    }

    /// `working_set` and `fault_sum` in a single scan.
    pub fn working_set_and_fault_sum(&self, pages: usize) -> (WorkingSet, usize) {
        let mut set = WorkingSet::new(pages);
        let mut faults = 0;
        for record in self.iter() {
            set.insert(record.page);
            if record.fault {
                faults += 1;
            }
        }
        (set, faults)
    }
}

impl<const CAPACITY: usize> Default for History<CAPACITY> {
    fn default() -> Self {
        Self::init()
    }
}
