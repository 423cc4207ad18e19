//! Fixed-capacity collections.
//!
//! Collections are organized by data structure type:
//! - `ring_buffer`: bulk FIFO byte/word buffer over `N` slots
//! - `queue`: element-at-a-time FIFO wrapper over the ring buffer
//! - `static_list`: doubly linked list over an index-based node pool
//! - `bit_set`: up to 64 flags in one word

pub mod bit_set;
pub mod queue;
pub mod ring_buffer;
pub mod static_list;

pub use bit_set::{BitRef, BitSet};
pub use queue::Queue;
pub use ring_buffer::RingBuffer;
pub use static_list::{NodeId, NodePool, StaticList};
