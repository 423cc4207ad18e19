//! End-to-end behavior of the core primitives through the public API

use ballast::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::thread;

#[test]
fn test_ring_buffer_fill_then_drain_scenario() {
    let mut ring: RingBuffer<u8, 4> = RingBuffer::new();

    assert_eq!(ring.write(&[1, 2, 3]), 3);
    // Only one slot left
    assert_eq!(ring.write(&[4, 5]), 1);
    assert!(ring.is_full());
    assert_eq!(ring.free(), 0);

    let mut out = [0u8; 3];
    assert_eq!(ring.read(&mut out), 3);
    assert_eq!(out, [1, 2, 3]);
    assert_eq!(ring.occupied(), 1);
    assert_eq!(ring.peek(), Some(&4));
}

#[test]
fn test_ring_buffer_exact_transfers_report_shortfall() {
    let mut ring: RingBuffer<u32, 3> = RingBuffer::new();
    ring.write_all(&[7, 8]).unwrap();

    let err = ring.write_all(&[9, 10]).unwrap_err();
    assert_eq!(err.into_inner(), 2);
    // Nothing was written by the failed call
    assert_eq!(ring.occupied(), 2);

    let mut out = [0u32; 3];
    assert!(ring.read_exact(&mut out).is_err());
    assert_eq!(ring.occupied(), 2);
}

#[test]
fn test_static_list_capacity_and_reuse() {
    let mut list: StaticList<u32, 3> = StaticList::new();
    let ids: Vec<NodeId> = (0..3).map(|i| list.push_back(i).unwrap()).collect();

    let err = list.push_back(99).unwrap_err();
    assert_eq!(*err.rejected(), 99);
    assert_eq!(list.len(), 3);

    assert_eq!(list.erase(ids[1]), Some(1));
    assert_eq!(list.len(), 2);
    list.push_back(3).unwrap();
    assert_eq!(list.len(), 3);

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 2, 3]);
}

#[test]
fn test_static_list_pop_both_ends_empties() {
    let mut list: StaticList<char, 2> = StaticList::new();
    list.push_back('x').unwrap();
    list.push_back('y').unwrap();
    assert_eq!(list.pop_front(), Some('x'));
    assert_eq!(list.pop_back(), Some('y'));
    assert!(list.is_empty());
    assert_eq!(list.pop_back(), None);
}

#[test]
fn test_variant_destroys_before_constructing() {
    let log = Rc::new(RefCell::new(Vec::<&str>::new()));

    struct Probe(&'static str, Rc<RefCell<Vec<&'static str>>>);
    impl Drop for Probe {
        fn drop(&mut self) {
            self.1.borrow_mut().push(self.0);
        }
    }

    let mut v: Variant<Probe, u64> = Variant::new();
    assert_eq!(v.index(), None);
    assert!(v.get_if::<u64, _>().is_none());

    v.emplace(Probe("probe dropped", Rc::clone(&log)));
    v.emplace_with(|| {
        log.borrow_mut().push("u64 built");
        42u64
    });
    assert_eq!(*log.borrow(), vec!["probe dropped", "u64 built"]);
    assert_eq!(v.get_if::<u64, _>(), Some(&42));

    v.emplace(Probe("second probe", Rc::clone(&log)));
    assert!(v.get_if::<u64, _>().is_none());
    drop(v);
    assert_eq!(log.borrow().last(), Some(&"second probe"));
}

#[test]
fn test_optional_and_outcome_contracts() {
    assert_eq!(Optional::some(5).unwrap(), 5);
    assert!(Optional::<u8>::default().is_none());

    let res: Outcome<u16, &str> = Outcome::err_value("nack");
    assert!(res.is_err());
    assert!(!res.is_ok());
    assert_eq!(res.unwrap_or(3), 3);
    assert_eq!(Outcome::<u16, &str>::ok_value(8).unwrap_or(3), 8);
}

#[test]
fn test_outcome_works_with_question_mark() {
    fn read_sensor(raw: Outcome<u16, &'static str>) -> Result<u16, &'static str> {
        let value = raw.into_result()?;
        Ok(value * 2)
    }
    assert_eq!(read_sensor(Outcome::ok_value(21)), Ok(42));
    assert_eq!(read_sensor(Outcome::err_value("crc")), Err("crc"));
}

#[test]
fn test_spin_mutex_shares_ring_buffer_across_threads() {
    let shared: Arc<SpinMutex<RingBuffer<u32, 64>>> = Arc::new(SpinMutex::new(RingBuffer::new()));

    let writers: Vec<_> = (0..4u32)
        .map(|t| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for i in 0..8u32 {
                    shared.with_lock(|ring| ring.push(t * 100 + i)).unwrap();
                }
            })
        })
        .collect();
    for w in writers {
        w.join().unwrap();
    }

    let mut drained = Vec::new();
    shared.with_lock(|ring| {
        while let Some(v) = ring.pop() {
            drained.push(v);
        }
    });
    assert_eq!(drained.len(), 32);
    drained.sort_unstable();
    drained.dedup();
    assert_eq!(drained.len(), 32);
}

#[test]
fn test_defer_releases_on_early_return() {
    let released = RefCell::new(false);
    let work = |fail: bool| -> Result<(), ()> {
        let _guard = defer(|| *released.borrow_mut() = true);
        if fail {
            return Err(());
        }
        Ok(())
    };
    assert!(work(true).is_err());
    assert!(*released.borrow());
}

#[test]
fn test_bit_set_register_flags() {
    let mut flags = BitSet::<8>::parse("0000_0101").unwrap();
    assert!(flags.get(0) && flags.get(2));
    flags.bit_mut(7).set(true);
    assert_eq!(flags.value(), 0b1000_0101);
    assert!(BitSet::<8>::parse("2").is_err());
}

#[test]
fn test_error_display() {
    let err = CapacityError::new(5u8);
    assert_eq!(err.to_string(), "container capacity exhausted");
    assert_eq!(
        ParseBitsError::InvalidDigit(3).to_string(),
        "invalid bit digit at offset 3"
    );
}
