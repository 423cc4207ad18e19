//! # `ballast` - Fixed-Capacity Containers and Sum Types
//!
//! Containers and tagged types for firmware and other contexts where heap
//! allocation is unavailable or forbidden. Every type stores its elements
//! inline, sized by a const generic, and never touches an allocator.
//!
//! ## Guarantees
//!
//! - **No allocation**: capacities are `const N: usize`; all storage lives in
//!   the value itself, so containers can sit in `static`s or on the stack.
//! - **Explicit exhaustion**: a full container refuses insertion with a
//!   [`CapacityError`] that hands the value back, and bulk transfers report
//!   how many elements actually moved.
//! - **One live alternative**: [`Variant`], [`Optional`] and [`Outcome`]
//!   construct, destroy and move exactly the alternative their tag names.
//! - **Stable layout**: [`Optional`] and [`Outcome`] are `repr(C, u8)`, a tag
//!   byte followed by the payload.
//!
//! ## Key Features
//!
//! - **Ring buffer** ([`RingBuffer`], [`Queue`]): two-chunk bulk copy with a
//!   wrap flag separating full from empty
//! - **Linked list** ([`StaticList`]): index-linked nodes from a fixed pool,
//!   with stable [`NodeId`] handles and O(1) insert/erase anywhere
//! - **Variant** ([`Variant`]): up to eight alternatives selected by type
//! - **Support**: [`BitSet`], [`SpinMutex`], [`defer`], [`RawStorage`]
//! - **Hashing** ([`hash`]): `const fn` FNV-1a for compile-time identifiers
//!
//! ## Cargo Features
//!
//! - `std`: implements `std::error::Error` for the error types and links
//!   `std` (the crate is `no_std` otherwise)
//! - `tracing`: emits `tracing` events under the `ballast` target when a
//!   container refuses an element or a bulk transfer comes up short; on
//!   `no_std` targets this links `alloc`, which `tracing` needs for its
//!   dispatcher, so a global allocator must be present
//!
//! ## Example
//!
//! ```rust
//! use ballast::{RingBuffer, StaticList, Variant};
//!
//! let mut ring: RingBuffer<u8, 4> = RingBuffer::new();
//! assert_eq!(ring.write(&[1, 2, 3]), 3);
//! assert_eq!(ring.write(&[4, 5]), 1);
//!
//! let mut out = [0u8; 3];
//! assert_eq!(ring.read(&mut out), 3);
//! assert_eq!(out, [1, 2, 3]);
//! assert_eq!(ring.occupied(), 1);
//!
//! let mut list: StaticList<&str, 2> = StaticList::new();
//! let first = list.push_back("a").unwrap();
//! list.push_back("b").unwrap();
//! assert!(list.push_back("c").is_err());
//! assert_eq!(list.erase(first), Some("a"));
//!
//! let mut v: Variant<i32, f32> = Variant::new();
//! v.emplace(1.5f32);
//! assert_eq!(v.get_if::<f32, _>(), Some(&1.5));
//! assert_eq!(v.get_if::<i32, _>(), None);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod hash;
pub mod storage;
pub mod sync;
pub mod tagged;

mod trace;

pub use collections::{BitSet, NodeId, Queue, RingBuffer, StaticList};
pub use error::{CapacityError, ParseBitsError};
pub use storage::RawStorage;
pub use sync::{defer, Defer, SpinMutex};
pub use tagged::{Optional, Outcome, Variant};

// Compile-time layout claims.
const _: () = {
    use core::mem;

    // Raw storage adds nothing around the value.
    assert!(mem::size_of::<RawStorage<u64>>() == mem::size_of::<u64>());
    assert!(mem::align_of::<RawStorage<u64>>() == mem::align_of::<u64>());

    // Tag byte, padding to the payload's alignment, payload.
    assert!(mem::size_of::<Optional<u32>>() == 8);
    assert!(mem::size_of::<Outcome<u16, u8>>() == 4);

    // A ring buffer is its slots plus begin, end and the wrap flag.
    assert!(mem::size_of::<RingBuffer<u8, 8>>() <= 8 + mem::size_of::<usize>() * 3);
};
