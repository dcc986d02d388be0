/// Set of finalized cells, indexed by flat grid index.
///
/// Clearing bumps a generation counter instead of touching every slot, so a
/// fresh search costs nothing proportional to the grid size.
#[derive(Debug, Clone)]
pub struct Visited {
    stamps: Vec<u32>,
    generation: u32,
    count: usize,
}

impl Visited {
    /// A visited set for a grid of `len` cells.
    pub fn new(len: usize) -> Self {
        Self {
            stamps: vec![0; len],
            generation: 1,
            count: 0,
        }
    }

    /// Mark `idx` visited. Returns `false` if it already was.
    #[inline]
    pub fn insert(&mut self, idx: usize) -> bool {
        if self.stamps[idx] == self.generation {
            return false;
        }
        self.stamps[idx] = self.generation;
        self.count += 1;
        true
    }

    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        self.stamps[idx] == self.generation
    }

    pub fn clear(&mut self) {
        self.count = 0;
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: old stamps could alias the new generation.
            self.stamps.fill(0);
            self.generation = 1;
        }
    }

    /// Number of cells marked since the last clear.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
