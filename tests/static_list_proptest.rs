use ballast::collections::{NodeId, StaticList};
use proptest::prelude::*;
use std::collections::VecDeque;

const CAP: usize = 6;

#[derive(Debug, Clone)]
enum Operation {
    PushBack(u16),
    PushFront(u16),
    PopFront,
    PopBack,
    // Erase the k-th element (modulo length).
    EraseNth(usize),
    // Insert before the k-th element (modulo length + 1; len means the end).
    InsertNth(usize, u16),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        any::<u16>().prop_map(Operation::PushBack),
        any::<u16>().prop_map(Operation::PushFront),
        Just(Operation::PopFront),
        Just(Operation::PopBack),
        any::<usize>().prop_map(Operation::EraseNth),
        (any::<usize>(), any::<u16>()).prop_map(|(k, v)| Operation::InsertNth(k, v)),
    ]
}

fn nth_id<const N: usize>(list: &StaticList<u16, N>, n: usize) -> Option<NodeId> {
    let mut id = list.first_id();
    for _ in 0..n {
        id = id.and_then(|id| list.next_id(id));
    }
    id
}

proptest! {
    #[test]
    fn test_static_list_matches_vec_deque(ops in proptest::collection::vec(operation(), 1..120)) {
        let mut model: VecDeque<u16> = VecDeque::new();
        let mut list: StaticList<u16, CAP> = StaticList::new();

        for op in ops {
            match op {
                Operation::PushBack(v) => {
                    let res = list.push_back(v);
                    if model.len() < CAP {
                        prop_assert!(res.is_ok());
                        model.push_back(v);
                    } else {
                        prop_assert_eq!(res.unwrap_err().into_inner(), v);
                    }
                }
                Operation::PushFront(v) => {
                    let res = list.push_front(v);
                    prop_assert_eq!(res.is_ok(), model.len() < CAP);
                    if res.is_ok() {
                        model.push_front(v);
                    }
                }
                Operation::PopFront => prop_assert_eq!(list.pop_front(), model.pop_front()),
                Operation::PopBack => prop_assert_eq!(list.pop_back(), model.pop_back()),
                Operation::EraseNth(k) => {
                    if !model.is_empty() {
                        let n = k % model.len();
                        let id = nth_id(&list, n).unwrap();
                        prop_assert_eq!(list.erase(id), model.remove(n));
                        prop_assert_eq!(list.erase(id), None, "Stale erase must be rejected");
                    }
                }
                Operation::InsertNth(k, v) => {
                    let n = k % (model.len() + 1);
                    let pos = nth_id(&list, n);
                    let res = list.insert(pos, v);
                    prop_assert_eq!(res.is_ok(), model.len() < CAP);
                    if res.is_ok() {
                        model.insert(n, v);
                    }
                }
            }

            prop_assert_eq!(list.len(), model.len(), "Length mismatch");
            prop_assert_eq!(list.front(), model.front());
            prop_assert_eq!(list.back(), model.back());
        }

        // Final consistency check, both directions
        prop_assert!(list.iter().eq(model.iter()));
        prop_assert!(list.iter().rev().eq(model.iter().rev()));
    }
}
