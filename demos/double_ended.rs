//! Double-ended priority queue walkthrough
//!
//! Run with:
//!
//! ```bash
//! cargo run --example double_ended
//! ```

use std::cmp::Ordering;

use minmax_heap::container::VecBy;
use minmax_heap::heap::MinMaxHeap;
use minmax_heap::{ops, DoubleEndedHeap};

#[derive(Debug, Clone)]
struct Job {
    name: &'static str,
    cost: u32,
}

fn by_cost(a: &Job, b: &Job) -> Ordering {
    a.cost.cmp(&b.cost)
}

fn main() {
    // The free functions work on any container, here a plain Vec.
    let mut h = vec![2, 1, 5];
    ops::init(&mut h);
    ops::push(&mut h, 3);
    println!("min: {:?}", ops::pop_min(&mut h));
    println!("max: {:?}", ops::pop_max(&mut h));

    // A comparator-ordered container supports out-of-band updates via fix.
    let jobs = vec![
        Job { name: "index", cost: 40 },
        Job { name: "compact", cost: 90 },
        Job { name: "backup", cost: 15 },
        Job { name: "vacuum", cost: 60 },
    ];
    let mut queue = VecBy::from_vec(jobs, by_cost);
    ops::init(&mut queue);

    let i = queue
        .as_slice()
        .iter()
        .position(|j| j.name == "index")
        .unwrap_or(0);
    queue.as_mut_slice()[i].cost = 120;
    ops::fix(&mut queue, i);

    println!("cheapest job: {:?}", ops::pop_min(&mut queue));
    println!("costliest job: {:?}", ops::pop_max(&mut queue));

    // The owned heap keeps a bounded window of the largest values.
    let mut top: MinMaxHeap<u32> = MinMaxHeap::with_capacity(4);
    for v in [17, 3, 99, 42, 8, 64, 23, 71] {
        top.push(v);
        if top.len() > 3 {
            top.pop_min();
        }
    }
    println!("top three: {:?}", top.into_sorted_vec());
}
