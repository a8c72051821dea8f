use std::cell::Cell;

use grow_array::GrowArr;
use grow_array::types::Event;
use grow_array::types::Global;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Reserve(usize),
    Resize(usize),
    Emplace(u32),
    Pop,
    Truncate(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..300).prop_map(Op::Reserve),
        (0usize..300).prop_map(Op::Resize),
        any::<u32>().prop_map(Op::Emplace),
        Just(Op::Pop),
        (0usize..300).prop_map(Op::Truncate),
    ]
}

fn expected_growth(capacity: usize, requested: usize) -> usize {
    return (capacity + capacity / 2).max(requested);
}

proptest! {
    #[test]
    fn ops_keep_len_within_capacity(init in 0usize..64, ops in proptest::collection::vec(arb_op(), 1..60)) {
        let mut arr = GrowArr::<u32>::with_len(init).unwrap();
        let mut model = vec![0u32; init];
        prop_assert_eq!(arr.capacity(), init);

        for op in ops {
            let old_cap = arr.capacity();
            let old_ptr = arr.as_ptr();
            match op {
                Op::Reserve(c) => {
                    arr.reserve(c).unwrap();
                    if c <= old_cap {
                        prop_assert_eq!(arr.capacity(), old_cap);
                        prop_assert_eq!(arr.as_ptr(), old_ptr);
                    } else {
                        prop_assert_eq!(arr.capacity(), expected_growth(old_cap, c));
                    }
                }
                Op::Resize(n) => {
                    arr.resize(n).unwrap();
                    model.resize(n, 0);
                }
                Op::Emplace(v) => {
                    arr.emplace_back(v).unwrap();
                    model.push(v);
                    if model.len() > old_cap {
                        prop_assert_eq!(arr.capacity(), expected_growth(old_cap, model.len()));
                    }
                    prop_assert_eq!(arr.back(), Some(&v));
                }
                Op::Pop => {
                    prop_assert_eq!(arr.pop(), model.pop());
                }
                Op::Truncate(n) => {
                    arr.truncate(n);
                    model.truncate(n);
                }
            }
            prop_assert!(arr.len() <= arr.capacity());
            prop_assert!(arr.capacity() >= old_cap);
            prop_assert_eq!(arr.as_slice(), model.as_slice());
        }
    }

    #[test]
    fn appends_relocate_linearly(n in 1usize..3000) {
        let relocated = Cell::new(0usize);
        let grows = Cell::new(0usize);
        let observer = |event: Event| {
            if let Event::Grow { relocated: moved, .. } = event {
                relocated.set(relocated.get() + moved);
                grows.set(grows.get() + 1);
            }
        };

        let mut arr = GrowArr::<usize, Global, usize, _>::new_in(Global, observer);
        for i in 0..n {
            arr.emplace_back(i).unwrap();
        }
        prop_assert_eq!(arr.len(), n);
        prop_assert!(relocated.get() <= 4 * n);
        prop_assert!(grows.get() <= n);
        for (i, item) in arr.iter().enumerate() {
            prop_assert_eq!(*item, i);
        }
    }

    #[test]
    fn resize_from_len_to_double(init in 1usize..4096) {
        let mut resized = GrowArr::<i32>::with_len(init).unwrap();
        let untouched = GrowArr::<i32>::with_len(init).unwrap();

        resized.resize(init * 2).unwrap();
        prop_assert_eq!(resized.capacity(), expected_growth(init, init * 2));
        prop_assert_eq!(resized.capacity(), init * 2);
        prop_assert_eq!(untouched.capacity(), init);
        prop_assert!(resized.iter().all(|v| *v == 0));
    }
}

#[test]
fn resize_two_to_eight() {
    let mut arr = GrowArr::<i32>::with_len(2).unwrap();
    arr[0] = -1;
    arr[1] = -2;

    arr.resize(8).unwrap();
    assert_eq!(arr.len(), 8);
    assert!(arr.capacity() >= 8);
    assert_eq!(&arr.as_slice()[2..], &[0; 6]);
    assert_eq!(&arr.as_slice()[..2], &[-1, -2]);
}

#[test]
fn emplace_past_initial_len() {
    let grows = Cell::new(0);
    let mut arr = GrowArr::<i32, Global, usize, _>::with_observer(
        |event: Event| {
            if matches!(event, Event::Grow { .. }) {
                grows.set(grows.get() + 1);
            }
        },
        4,
    )
    .unwrap();
    assert_eq!(arr.capacity(), 4);
    let before = grows.get();

    arr.emplace_back(7).unwrap();
    arr.emplace_back(9).unwrap();
    arr.emplace_back(11).unwrap();

    assert_eq!(arr.len(), 7);
    assert_eq!(arr.back(), Some(&11));
    assert!(grows.get() > before);
    assert_eq!(arr, [0, 0, 0, 0, 7, 9, 11]);
}
