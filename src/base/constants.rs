/// Defines the directory where the simulation result files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/richsim/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/richsim/test";

/// Defines the default absolute ceiling of the time step
pub const DEFAULT_DT_MAX: f64 = 0.1;

/// Defines the default coefficient of the Courant-like stability bound
pub const DEFAULT_COURANT: f64 = 0.05;

/// Defines the default minimum specific moisture capacity (used at saturation)
pub const DEFAULT_C_MIN: f64 = 1e-8;
