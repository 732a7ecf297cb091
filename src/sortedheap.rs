use std::fmt;

use crate::{msort, node::{self, Chain, NodeId}, Heap, Key, ListFmt};

#[cfg(test)]
use crate::node::ChainError;

#[cfg(test)]
#[derive(Debug, PartialEq)]
enum SortedHeapError {
	BrokenChain(ChainError),
	OutOfOrder(NodeId)
}

/// A chain of keys kept in ascending order from head to tail, so the head is always the minimum.
/// - Find min: O(1)
/// - Pop min: O(1)
/// - Push: O(n) (linear scan for the insertion point)
/// - Union: O(n + m) (ordered merge of both chains)
/// - Heapify: O(n log(n)) (merge sort, then an O(n) build)
#[derive(Clone, Debug, Default)]
pub struct SortedHeap {
	chain: Chain
}

impl SortedHeap {
	/// Create an empty SortedHeap
	pub fn new() -> Self {
		Self{chain: Chain::new()}
	}

	/// Find the first node whose value is >= `value`, or None if every node is smaller
	fn search(&self, value: Key) -> Option<NodeId> {
		self.chain.ids().find(|&id|self.chain.value(id) >= value)
	}

	#[cfg(test)]
	fn check(&self) -> Result<(), SortedHeapError> {
		use SortedHeapError::*;
		self.chain.check().map_err(BrokenChain)?;
		let mut prev: Option<Key> = None;
		for id in self.chain.ids() {
			let v = self.chain.value(id);
			if prev.is_some_and(|p|p > v) {
				return Err(OutOfOrder(id))
			}
			prev = Some(v);
		}
		Ok(())
	}
}

impl Heap for SortedHeap {
	fn make_heap(&mut self, values: &[Key]) {
		let mut buf = values.to_vec();
		msort::sort(&mut buf);
		self.chain = buf.into_iter().collect();
		trace!("sortedheap: built from {} values", self.chain.len());
		#[cfg(all(test, not(feature = "stress_tests")))]{
			assert_eq!(self.check(), Ok(()))
		}
	}

	fn insert(&mut self, value: Key) {
		match self.search(value) {
			Some(at) => { self.chain.insert_before(at, value); },
			None => { self.chain.push_back(value); }
		}
		trace!("sortedheap: inserted {}", value);
		#[cfg(all(test, not(feature = "stress_tests")))]{
			assert_eq!(self.check(), Ok(()))
		}
	}

	fn peek_min(&self) -> Option<Key> {
		self.chain.head().map(|h|self.chain.value(h))
	}

	fn pop_min(&mut self) -> Option<Key> {
		let head = self.chain.head()?;
		let res = self.chain.unlink(head);
		trace!("sortedheap: extracted {}, {} left", res, self.chain.len());
		#[cfg(all(test, not(feature = "stress_tests")))]{
			assert_eq!(self.check(), Ok(()))
		}
		Some(res)
	}

	fn union(&mut self, other: Self) {
		trace!("sortedheap: union of {} and {} nodes", self.chain.len(), other.chain.len());
		let left = self.chain.take();
		let right = other.chain;
		let (mut a, mut b) = (left.ids().peekable(), right.ids().peekable());
		let mut merged = Chain::new();
		loop {
			// ties take from the left
			let v = match (a.peek().copied(), b.peek().copied()) {
				(Some(i), Some(j)) => if right.value(j) < left.value(i) {
					b.next();
					right.value(j)
				} else {
					a.next();
					left.value(i)
				},
				(Some(i), None) => { a.next(); left.value(i) },
				(None, Some(j)) => { b.next(); right.value(j) },
				(None, None) => break
			};
			merged.push_back(v);
		}
		self.chain = merged;
		#[cfg(all(test, not(feature = "stress_tests")))]{
			assert_eq!(self.check(), Ok(()))
		}
	}

	fn len(&self) -> usize {
		self.chain.len()
	}

	fn iter(&self) -> node::Iter<'_> {
		self.chain.iter()
	}
}

impl fmt::Display for SortedHeap {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", ListFmt(self.chain.iter()))
	}
}

impl<'a> IntoIterator for &'a SortedHeap {
	type Item = Key;
	type IntoIter = node::Iter<'a>;
	fn into_iter(self) -> Self::IntoIter {
		self.chain.iter()
	}
}

impl Extend<Key> for SortedHeap {
	fn extend<T: IntoIterator<Item = Key>>(&mut self, iter: T) {
		for v in iter {
			self.insert(v)
		}
	}
}

impl FromIterator<Key> for SortedHeap {
	fn from_iter<T: IntoIterator<Item = Key>>(iter: T) -> Self {
		let mut buf: Vec<Key> = iter.into_iter().collect();
		msort::sort(&mut buf);
		Self{chain: buf.into_iter().collect()}
	}
}
