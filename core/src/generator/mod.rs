use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    /// Builds a populated board where `safe` holds no bomb and is already visible.
    fn generate(self, config: GameConfig, safe: Coord2) -> Result<Board>;
}

/// Uniform integer source, `random_int(max)` yields a value in `[0, max)`.
pub trait RandomSource {
    fn random_int(&mut self, max: CellCount) -> CellCount;
}

impl<R: rand::Rng + ?Sized> RandomSource for R {
    fn random_int(&mut self, max: CellCount) -> CellCount {
        self.random_range(0..max)
    }
}

/// Replays a fixed list of draws, then counts upward from zero. Every index is
/// eventually drawn, so rejection sampling always finishes.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedSource<'a> {
    draws: &'a [CellCount],
    position: usize,
}

impl<'a> ScriptedSource<'a> {
    pub fn new(draws: &'a [CellCount]) -> Self {
        Self { draws, position: 0 }
    }
}

impl RandomSource for ScriptedSource<'_> {
    fn random_int(&mut self, max: CellCount) -> CellCount {
        let draw = match self.draws.get(self.position) {
            Some(&draw) => draw,
            None => ((self.position - self.draws.len()) % usize::from(max)) as CellCount,
        };
        self.position += 1;
        draw % max
    }
}
