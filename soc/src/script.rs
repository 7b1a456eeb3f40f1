//! Scripted button input: a timeline of held/released segments, measured in
//! poll ticks.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonLevel {
    Held,
    Released,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptSegment {
    pub level: ButtonLevel,
    pub ticks: u32,
}

impl ScriptSegment {
    pub const fn held(ticks: u32) -> Self {
        Self {
            level: ButtonLevel::Held,
            ticks,
        }
    }

    pub const fn released(ticks: u32) -> Self {
        Self {
            level: ButtonLevel::Released,
            ticks,
        }
    }
}

/// Button timeline. The button is released before the first segment's
/// tick and after the last segment ends.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonScript {
    segments: Vec<ScriptSegment>,
}

impl ButtonScript {
    pub fn new(segments: Vec<ScriptSegment>) -> Self {
        Self { segments }
    }

    /// Append a segment.
    pub fn then(mut self, segment: ScriptSegment) -> Self {
        self.segments.push(segment);
        self
    }

    pub fn segments(&self) -> &[ScriptSegment] {
        &self.segments
    }

    /// Total ticks covered by the script.
    pub fn len(&self) -> u64 {
        self.segments.iter().map(|s| u64::from(s.ticks)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the button is held at `tick` (0-based).
    pub fn held_at(&self, tick: u64) -> bool {
        let mut start = 0u64;
        for segment in &self.segments {
            let end = start + u64::from(segment.ticks);
            if tick < end {
                return segment.level == ButtonLevel::Held;
            }
            start = end;
        }
        false
    }

    /// Per-tick held state for the whole script.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.segments.iter().flat_map(|s| {
            std::iter::repeat(s.level == ButtonLevel::Held).take(s.ticks as usize)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_script_is_released() {
        let script = ButtonScript::default();
        assert!(script.is_empty());
        assert!(!script.held_at(0));
    }

    #[test]
    fn held_at_walks_segments() {
        let script = ButtonScript::default()
            .then(ScriptSegment::released(2))
            .then(ScriptSegment::held(3))
            .then(ScriptSegment::released(1));
        assert_eq!(script.len(), 6);

        let levels: Vec<_> = (0..8).map(|t| script.held_at(t)).collect();
        assert_eq!(
            levels,
            vec![false, false, true, true, true, false, false, false]
        );
    }

    #[test]
    fn iter_matches_held_at() {
        let script = ButtonScript::new(vec![
            ScriptSegment::held(4),
            ScriptSegment::released(2),
            ScriptSegment::held(1),
        ]);
        let from_iter: Vec<_> = script.iter().collect();
        let from_index: Vec<_> = (0..script.len()).map(|t| script.held_at(t)).collect();
        assert_eq!(from_iter, from_index);
    }
}
