use serde::{Deserialize, Serialize};

/// Piecewise-constant voltage waveform: `levels[i]` holds from `times[i]`
/// until `times[i+1]`. Built as a list of constant segments, each contributing
/// a (start, level) and an (end, level) point so plotters drawing straight
/// lines between points reproduce the vertical edges.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Waveform {
    pub times: Vec<f32>,
    pub levels: Vec<f32>,
}

impl Waveform {
    pub fn new() -> Self {
        Waveform {
            times: Vec::new(),
            levels: Vec::new(),
        }
    }

    pub fn with_capacity(points: usize) -> Self {
        Waveform {
            times: Vec::with_capacity(points),
            levels: Vec::with_capacity(points),
        }
    }

    /// Append one constant segment holding `level` over [start, end).
    pub fn push_segment(&mut self, start: f32, end: f32, level: f32) {
        self.times.push(start);
        self.levels.push(level);
        self.times.push(end);
        self.levels.push(level);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Total covered time, from the first breakpoint to the last. Equals the
    /// bit count for any waveform produced by the encoders.
    pub fn span(&self) -> f32 {
        match (self.times.first(), self.times.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }

    /// Step-function lookup: the level held at time `t`, or `None` outside
    /// the covered range.
    pub fn level_at(&self, t: f32) -> Option<f32> {
        if self.is_empty() || t < self.times[0] || t >= *self.times.last().unwrap() {
            return None;
        }
        let mut level = self.levels[0];
        for i in 0..self.times.len() {
            if self.times[i] > t {
                break;
            }
            level = self.levels[i];
        }
        Some(level)
    }

    /// Shift every level by `delta`. Used to stack several schemes on one
    /// shared chart grid, one track per scheme.
    pub fn offset_levels(&mut self, delta: f32) {
        for level in self.levels.iter_mut() {
            *level += delta;
        }
    }
}
