use rand::Rng;

/// Selection seam for the quiz handlers. The production picker is uniformly
/// random; tests swap in a fixed one.
pub trait QuestionPicker: Send + Sync {
    /// Returns an index in `0..len`. Never called with `len == 0`.
    fn pick_index(&self, len: usize) -> usize;
}

pub struct RandomPicker;

impl QuestionPicker for RandomPicker {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always picks the same index (clamped to the set).
#[cfg(test)]
pub struct FixedPicker(pub usize);

#[cfg(test)]
impl QuestionPicker for FixedPicker {
    fn pick_index(&self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}
