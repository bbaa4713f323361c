//! Evaluation weight tables.
//!
//! Configuration constants, not runtime-derived. Changing them changes play
//! style without altering algorithmic behavior; callers may construct
//! modified tables and hand them to a search.

/// Line-game weights. Holes dominate; heights escalate sharply near the
/// hidden band; clears outrank stacking once the board gets tall.
#[derive(Clone, Debug)]
pub struct LineWeights {
    pub hole: f32,
    pub covered_hole: f32,
    pub deep_hole: f32,
    pub hole_column: f32,
    pub max_height: f32,
    pub height_squared: f32,
    pub avg_height: f32,
    pub height_variance: f32,
    pub center_height: f32,
    pub danger_height: f32,
    pub bumpiness: f32,
    pub cliff: f32,
    pub blocked_column: f32,
    pub lines_cleared: f32,
    /// Simultaneous-clear bonus, indexed by lines cleared (0-4).
    pub clear_bonus: [f32; 5],
    pub almost_complete_row: f32,
    pub nearly_complete_row: f32,
    pub well_depth: f32,
    pub single_well: f32,
    pub flat: f32,
    pub low_profile: f32,
    pub perfect_clear: f32,
    /// Spin clear bonus, indexed by lines cleared (0-3).
    pub spin_bonus: [f32; 4],
    /// Mini-spin clear bonus, indexed by lines cleared (0-2).
    pub spin_mini_bonus: [f32; 3],
}

impl Default for LineWeights {
    fn default() -> Self {
        Self {
            hole: -250.0,
            covered_hole: -50.0,
            deep_hole: -100.0,
            hole_column: -40.0,
            max_height: -15.0,
            height_squared: -3.0,
            avg_height: -5.0,
            height_variance: -8.0,
            center_height: -8.0,
            danger_height: -100.0,
            bumpiness: -5.0,
            cliff: -20.0,
            blocked_column: -25.0,
            lines_cleared: 800.0,
            clear_bonus: [0.0, 300.0, 700.0, 1200.0, 2000.0],
            almost_complete_row: 15.0,
            nearly_complete_row: 5.0,
            well_depth: 3.0,
            single_well: 5.0,
            flat: 40.0,
            low_profile: 80.0,
            perfect_clear: 500.0,
            spin_bonus: [400.0, 800.0, 1200.0, 1600.0],
            spin_mini_bonus: [100.0, 200.0, 400.0],
        }
    }
}

/// Pair-game weights, tuned for chain building.
#[derive(Clone, Debug)]
pub struct PairWeights {
    /// Scale of the potential-estimator term (applied as expected^2 / 100).
    pub potential: f32,
    /// Scale of the in-search chain reward (chain^3 for chains of 10+).
    pub chain_power: f32,
    /// Scale of the internal one-drop chain probe.
    pub chain_probe: f32,
    pub same_color_above: f32,
    pub vertical_pair: f32,
    pub trigger_ready: f32,
    pub height: f32,
    pub max_height: f32,
    pub valley: f32,
    /// Entry-column penalty; the topmost entry column is central, so a tall
    /// stack there raises loss risk directly.
    pub entry_column: f32,
    pub connectivity_2: f32,
    pub connectivity_3: f32,
    pub isolated: f32,
    pub flatness: f32,
    pub stair: f32,
    pub edge_stack: f32,
}

impl Default for PairWeights {
    fn default() -> Self {
        Self {
            potential: 500.0,
            chain_power: 100.0,
            chain_probe: 20.0,
            same_color_above: 15.0,
            vertical_pair: 8.0,
            trigger_ready: 25.0,
            height: -2.0,
            max_height: -5.0,
            valley: -20.0,
            entry_column: -100.0,
            connectivity_2: 3.0,
            connectivity_3: 12.0,
            isolated: -8.0,
            flatness: 2.0,
            stair: 8.0,
            edge_stack: 5.0,
        }
    }
}
