//! Simulation constants and tuning parameters.

/// Frame rate of the fixed-step driver (Hz).
pub const FRAME_RATE: f64 = 60.0;

/// Minimum wall-clock delta (ms) that triggers a simulation step.
/// Smaller deltas are dropped, not accumulated.
pub const FRAME_BUDGET_MS: f64 = 1000.0 / FRAME_RATE;

// --- Radar ---

/// Radar display radius in distance units ("km").
pub const RADAR_RADIUS: f64 = 200.0;

/// Full beam width of the sweep in degrees.
pub const SWEEP_BEAM_WIDTH_DEG: f64 = 30.0;

/// Time for one full 360° sweep revolution (ms).
pub const SCAN_PERIOD_MS: f64 = 12_000.0;

/// Phosphor decay window: a contact fades out this long after its last scan (ms).
pub const SCAN_FADE_MS: f64 = 3_000.0;

// --- Motion ---

/// Distance below which a unit is treated as converged on its destination.
pub const CONVERGENCE_EPSILON: f64 = 1.0;

/// Contacts spawn at this multiple of the radar radius.
pub const SPAWN_RANGE_FACTOR: f64 = 1.2;

// --- Combat ---

/// Missile detonates when closer than this to its target.
pub const FUSE_RADIUS: f64 = 10.0;

/// Explosion marker lifetime (ms).
pub const EXPLOSION_DURATION_MS: f64 = 500.0;

/// Missile fuse timer assigned at launch (ms).
pub const MISSILE_FUSE_MS: f64 = 10_000.0;

/// Points per destroyed enemy.
pub const SCORE_PER_KILL: u32 = 10;

/// Bonus multiplier applied to remaining base health on victory.
pub const BASE_HEALTH_BONUS_FACTOR: u32 = 10;

// --- Base ---

/// Starting (and maximum) base health.
pub const BASE_MAX_HEALTH: i32 = 100;

/// Enemies closer than this to the center hit the base.
pub const BASE_IMPACT_RADIUS: f64 = 5.0;

/// Health lost per enemy impact.
pub const BASE_IMPACT_DAMAGE: i32 = 10;

// --- Stealth ---

/// Per-tick probability that a stealth fighter inside radar range toggles visibility.
pub const STEALTH_FLICKER_PROBABILITY: f64 = 0.02;

// --- Display ---

/// Interval between status marquee messages (ms of simulated time).
pub const MARQUEE_INTERVAL_MS: f64 = 10_000.0;

/// Status messages cycled by the target panel marquee.
pub const MARQUEE_MESSAGES: [&str; 20] = [
    "TARGET INFO",
    "SYSTEM STATUS: NOMINAL",
    "AWAITING COMMAND",
    "SCANNING FOR THREATS",
    "WEAPONS HOT",
    "BASE INTEGRITY MONITOR: ONLINE",
    "RADAR SWEEP IN PROGRESS",
    "MONITORING AIRSPACE",
    "NO NEW CONTACTS",
    "THREAT LEVEL: LOW",
    "STANDBY FOR ORDERS",
    "AMMUNITION CHECK: PASSED",
    "COMMUNICATIONS LINK: SECURE",
    "SATELLITE UPLINK: ACTIVE",
    "TRACKING MULTIPLE SIGNATURES",
    "CAUTION: HOSTILE ACTIVITY DETECTED",
    "VERIFY TARGET IFF",
    "DEFENSE GRID ONLINE",
    "ENGAGEMENT PROTOCOLS ENABLED",
    "ALL SYSTEMS OPERATIONAL",
];
