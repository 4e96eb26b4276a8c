/// Score given to rows whose value-per-dollar cannot be computed.
pub const SCORE_SENTINEL: f64 = -1e9;

/// Default nutrient ceiling, large enough to mean "no ceiling".
pub const CEILING_DISABLED: f64 = 999.0;

/// Ceilings at or above this value leave the guardrail switched off.
pub const GUARDRAIL_DISABLED_AT: f64 = 900.0;

/// Fraction of a ceiling at which a guardrail starts refusing units.
pub const GUARDRAIL_FRACTION: f64 = 0.9;

// ─────────────────────────────────────────────────────────────────────────────
// Parameter defaults
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_BUDGET: f64 = 40.0;
pub const DEFAULT_MAX_ITEMS: usize = 15;

/// Protein weight (reward).
pub const DEFAULT_W_PROTEIN: f64 = 1.0;

/// Fiber weight (reward).
pub const DEFAULT_W_FIBER: f64 = 0.3;

/// Carbs weight (penalty).
pub const DEFAULT_W_CARBS: f64 = 0.1;

/// Fat weight (penalty).
pub const DEFAULT_W_FAT: f64 = 0.2;

// ─────────────────────────────────────────────────────────────────────────────
// Well-known locations
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_CATALOG_PATH: &str = "data/eso_new_ver1.csv";
pub const DEFAULT_PARAMS_PATH: &str = "data/params.json";
