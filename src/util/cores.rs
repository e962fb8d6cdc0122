/// Returns the number of logical CPU cores available on the system.
///
/// Backed by `num_cpus::get()`, which honours cgroup quotas on Linux and
/// never returns 0.
pub fn count_cores() -> usize {
    num_cpus::get().max(1)
}
