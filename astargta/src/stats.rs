//! Search statistics, aggregatable across seeds.

use std::fmt::Display;

use derive_more::AddAssign;

#[derive(Default, Clone, Copy, AddAssign)]
pub struct Timing {
    /// Whole extension, search plus traceback.
    pub total: f32,
    /// Running A*.
    pub astar: f32,
    /// Back-walk and emission.
    pub traceback: f32,
}

#[derive(Default, Clone, Copy, AddAssign)]
pub struct SearchStats {
    /// States pushed onto the open heap.
    pub explored: usize,
    /// States popped and processed; stale pops are not counted.
    pub expanded: usize,
    /// Successors whose identity was already in the open index.
    pub repeated: usize,
    /// Repeated successors that replaced the indexed entry.
    pub replaced: usize,
    /// Successors dropped by heuristic pruning.
    pub pruned: usize,

    pub timing: Timing,
    pub sample_size: usize,
}

impl SearchStats {
    fn format_scl<T: Display + num_traits::AsPrimitive<f32>>(
        &self,
        width: usize,
        title: &str,
        val: T,
    ) -> (String, String) {
        (
            format!("{:>width$}", title),
            format!("{:>width$}", val.as_() / self.sample_size as f32),
        )
    }

    fn format_raw<T: Display>(&self, width: usize, title: &str, val: T) -> (String, String) {
        (format!("{:>width$}", title), format!("{:>width$}", val))
    }

    pub fn values(&self) -> (Vec<String>, Vec<String>) {
        [
            self.format_raw(6, "nr", self.sample_size),
            self.format_scl(9, "explored", self.explored),
            self.format_scl(9, "expanded", self.expanded),
            self.format_scl(8, "repeat", self.repeated),
            self.format_scl(8, "replace", self.replaced),
            self.format_scl(8, "pruned", self.pruned),
            self.format_scl(8, "t(ms)", 1000. * self.timing.total),
            self.format_scl(8, "astar", 1000. * self.timing.astar),
            self.format_scl(8, "trace", 1000. * self.timing.traceback),
        ]
        .into_iter()
        .unzip()
    }

    /// Print a header line and the per-sample averages.
    pub fn print(&self) {
        let (header, values) = self.values();
        eprintln!("{}", header.join(" "));
        eprintln!("{}", values.join(" "));
    }
}
