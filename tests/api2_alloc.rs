use std::cell::RefCell;

use allocator_api2::alloc::Global as Api2Global;
use grow_array::GrowArr;
use grow_array::types::Event;

#[test]
fn grows_on_an_allocator_api2_allocator() {
    let grows = RefCell::new(Vec::new());
    {
        let mut arr = GrowArr::<u64, Api2Global, u32, _>::new_in(Api2Global, |e: Event| {
            if let Event::Grow { from, to, .. } = e {
                grows.borrow_mut().push((from, to));
            }
        });
        for v in 0..10u64 {
            arr.emplace_back(v * v).unwrap();
        }
        assert_eq!(arr.len(), 10);
        assert_eq!(arr.capacity(), 13);
        assert_eq!(arr.back(), Some(&81));
        assert_eq!(arr.iter().sum::<u64>(), 285);

        arr.resize(30).unwrap();
        assert_eq!(arr.capacity(), 30);
        assert_eq!(arr[9], 81);
        assert_eq!(arr[29], 0);
    }
    assert_eq!(*grows.borrow(), [(0, 1), (1, 2), (2, 3), (3, 4), (4, 6), (6, 9), (9, 13), (13, 30)]);
}
