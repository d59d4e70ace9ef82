//! Activation arena for microcontrollers.
//!
//! MCUs have no heap allocator. The caller owns a `[Number; N]` scratch
//! buffer (typically a `static` or a long-lived stack array) and binds it to
//! a model once, through `SequentialModel::arena`. The arena splits it into two regions, ping and pong; a
//! model alternates its intermediate activations between them so a stage
//! always reads one region and writes the other. Storage of a consumed
//! activation is reused by the stage after next, which is what the aliased
//! `union` buffers of generated C code achieve, but here the two regions
//! are disjoint borrows checked by the compiler.

use crate::error::{FxError, FxResult};
use crate::number::Number;

/// One of the two activation regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Ping,
    Pong,
}

impl Region {
    pub const fn other(self) -> Self {
        match self {
            Region::Ping => Region::Pong,
            Region::Pong => Region::Ping,
        }
    }

    const fn index(self) -> usize {
        match self {
            Region::Ping => 0,
            Region::Pong => 1,
        }
    }
}

/// Element counts of the ping and pong regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BufferPlan {
    regions: [usize; 2],
}

impl BufferPlan {
    /// Grow `region` so it can hold `len` elements.
    pub fn reserve(&mut self, region: Region, len: usize) {
        let slot = &mut self.regions[region.index()];
        *slot = (*slot).max(len);
    }

    pub const fn region_len(&self, region: Region) -> usize {
        self.regions[region.index()]
    }

    /// Scratch elements needed for both regions.
    pub const fn total(&self) -> usize {
        self.regions[0] + self.regions[1]
    }
}

/// Scratch buffer partitioned according to a `BufferPlan`.
///
/// Only built by a model for its own plan; callers see it wrapped in
/// `ModelArena`.
pub(crate) struct Arena<'a> {
    buf: &'a mut [Number],
    plan: BufferPlan,
}

impl<'a> Arena<'a> {
    /// Bind a scratch buffer to a plan. Extra elements are left unused.
    pub(crate) fn new(buf: &'a mut [Number], plan: BufferPlan) -> FxResult<Self> {
        if buf.len() < plan.total() {
            return Err(FxError::ArenaTooSmall {
                required: plan.total(),
                available: buf.len(),
            });
        }
        Ok(Self { buf, plan })
    }

    /// Disjoint mutable views of the ping and pong regions.
    pub(crate) fn regions(&mut self) -> (&mut [Number], &mut [Number]) {
        let ping = self.plan.region_len(Region::Ping);
        let pong = self.plan.region_len(Region::Pong);
        let (head, tail) = self.buf.split_at_mut(ping);
        (head, &mut tail[..pong])
    }

    /// Zero the whole scratch buffer.
    pub(crate) fn clear(&mut self) {
        self.buf.fill(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(ping: usize, pong: usize) -> BufferPlan {
        let mut plan = BufferPlan::default();
        plan.reserve(Region::Ping, ping);
        plan.reserve(Region::Pong, pong);
        plan
    }

    #[test]
    fn plan_keeps_largest_reservation() {
        let mut plan = BufferPlan::default();
        plan.reserve(Region::Ping, 33);
        plan.reserve(Region::Pong, 1664);
        plan.reserve(Region::Ping, 10);
        assert_eq!(plan.region_len(Region::Ping), 33);
        assert_eq!(plan.region_len(Region::Pong), 1664);
        assert_eq!(plan.total(), 1697);
    }

    #[test]
    fn regions_do_not_overlap() {
        let mut buf = [0 as Number; 12];
        let mut arena = Arena::new(&mut buf, plan(4, 6)).unwrap();
        let (ping, pong) = arena.regions();
        ping.fill(1);
        pong.fill(2);
        assert_eq!(ping.len(), 4);
        assert_eq!(pong.len(), 6);
        assert_eq!(buf, [1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 0, 0]);
    }

    #[test]
    fn undersized_buffer_is_rejected() {
        let mut buf = [0 as Number; 5];
        let err = Arena::new(&mut buf, plan(4, 6)).err();
        assert_eq!(err, Some(FxError::ArenaTooSmall { required: 10, available: 5 }));
    }
}
