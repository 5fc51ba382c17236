/// Compiled examples known to run on a CPU-only simulator target.
///
/// Anything that needs a GPU simulator, remote QPU credentials or MPI is
/// deliberately absent.
const CPU_COMPATIBLE_TESTS: &[&str] = &[
    "bernstein_vazirani",
    "building_kernels",
    "expectation_values",
    "ghz_state",
    "grover",
    "hadamard_test",
    "iterative_qpe",
    "multi_controlled_operations",
    "noise_modeling",
    "phase_estimation",
    "quantum_fourier_transform",
    "random_walk_qpe",
    "trotter_evolution",
    "variational_algorithms",
    "vqe_h2",
];

/// Ordered allow-list of compiled test identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSelector {
    names: &'static [&'static str],
}

impl TestSelector {
    /// The allow-list shipped with the harness.
    pub fn cpu_compatible() -> Self {
        Self {
            names: CPU_COMPATIBLE_TESTS,
        }
    }

    pub fn names(&self) -> &[&'static str] {
        self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name filter expression handed to the test tool (`-R`).
    pub fn to_filter(&self) -> String {
        self.names
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl Default for TestSelector {
    fn default() -> Self {
        Self::cpu_compatible()
    }
}
