use std::cmp::Reverse;
use priority_queue::PriorityQueue;


pub type MyMinHeap<I, P> = PriorityQueue<I, Priority<P>>;


/// Inverts the ordering of `P`, so the smallest key pops first.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority<P: Ord> (Reverse<P>);

impl<P: Ord> Priority<P> {
    pub fn new(key: P) -> Self {
        Self (Reverse(key))
    }
    pub fn into_inner(self) -> P {
        (self.0).0
    }
}
