use std::fmt;

use crate::{node::{self, Chain, NodeId}, Heap, Key, ListFmt};

#[cfg(test)]
use crate::node::ChainError;

#[cfg(test)]
#[derive(Debug, PartialEq)]
enum MinHeapError {
	BrokenChain(ChainError),
	MissingMin,
	NotMinimal(NodeId)
}

/// An unordered chain of keys plus a cached reference to the minimal node.
/// - Find min: O(1)
/// - Push: O(1)
/// - Pop min: O(n) (the remaining chain is rescanned for the new minimum)
/// - Union: O(n + m)
/// - Heapify: O(n)
/// When several nodes share the minimal value, the one cached first is popped first;
/// callers should not rely on which of them that is.
#[derive(Clone, Debug, Default)]
pub struct MinHeap {
	chain: Chain,
	min: Option<NodeId>
}

impl MinHeap {
	/// Create an empty MinHeap
	pub fn new() -> Self {
		Self{chain: Chain::new(), min: None}
	}

	/// Find the first node holding the smallest value in the chain
	fn scan_min(&self) -> Option<NodeId> {
		let mut ids = self.chain.ids();
		let mut res = ids.next()?;
		for id in ids {
			if self.chain.value(id) < self.chain.value(res) {
				res = id
			}
		}
		Some(res)
	}

	#[cfg(test)]
	fn check(&self) -> Result<(), MinHeapError> {
		use MinHeapError::*;
		self.chain.check().map_err(BrokenChain)?;
		let Some(min) = self.min else {
			return if self.chain.is_empty() { Ok(()) } else { Err(MissingMin) }
		};
		if !self.chain.ids().any(|id|id == min) {
			return Err(MissingMin)
		}
		match self.chain.ids().find(|&id|self.chain.value(id) < self.chain.value(min)) {
			Some(id) => Err(NotMinimal(id)),
			None => Ok(())
		}
	}
}

impl Heap for MinHeap {
	fn make_heap(&mut self, values: &[Key]) {
		self.chain.clear();
		self.min = None;
		for &v in values {
			self.insert(v)
		}
	}

	fn insert(&mut self, value: Key) {
		let id = self.chain.push_back(value);
		// ties keep the node that was cached first
		if self.min.map_or(true, |m|value < self.chain.value(m)) {
			self.min = Some(id)
		}
		trace!("minheap: inserted {}, min is now {:?}", value, self.peek_min());
		#[cfg(all(test, not(feature = "stress_tests")))]{
			assert_eq!(self.check(), Ok(()))
		}
	}

	fn peek_min(&self) -> Option<Key> {
		self.min.map(|m|self.chain.value(m))
	}

	fn pop_min(&mut self) -> Option<Key> {
		let min = self.min?;
		let res = self.chain.unlink(min);
		self.min = self.scan_min();
		trace!("minheap: extracted {}, {} left", res, self.chain.len());
		#[cfg(all(test, not(feature = "stress_tests")))]{
			assert_eq!(self.check(), Ok(()))
		}
		Some(res)
	}

	fn union(&mut self, other: Self) {
		if other.chain.is_empty() {
			return
		}
		trace!("minheap: union of {} and {} nodes", self.chain.len(), other.chain.len());
		if self.chain.is_empty() {
			*self = other;
			return
		}
		self.chain.append(other.chain);
		self.min = self.scan_min();
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

impl fmt::Display for MinHeap {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", ListFmt(self.chain.iter()))
	}
}

impl<'a> IntoIterator for &'a MinHeap {
	type Item = Key;
	type IntoIter = node::Iter<'a>;
	fn into_iter(self) -> Self::IntoIter {
		self.chain.iter()
	}
}

impl Extend<Key> for MinHeap {
	fn extend<T: IntoIterator<Item = Key>>(&mut self, iter: T) {
		for v in iter {
			self.insert(v)
		}
	}
}

impl FromIterator<Key> for MinHeap {
	fn from_iter<T: IntoIterator<Item = Key>>(iter: T) -> Self {
		let mut res = Self::new();
		res.extend(iter);
		res
	}
}

#[cfg(test)]
mod tests {
	use crate::{Heap, EMPTY};

	use super::{MinHeap, MinHeapError};

	#[test]
	fn make_extract_sort() {
		let mut heap = MinHeap::new();
		heap.make_heap(&[5, 3, 8, 1]);
		assert_eq!(heap.to_string(), "[5, 3, 8, 1]");
		assert_eq!(heap.min_val(), 1);
		assert_eq!(heap.extract_min(), 1);
		assert_eq!(heap.to_string(), "[5, 3, 8]");
		assert_eq!(heap.sort_heap(), [3, 5, 8]);
		assert!(heap.is_empty());
		assert_eq!(heap.min_val(), EMPTY);
	}

	#[test]
	fn make_heap_discards_old_chain() {
		let mut heap: MinHeap = [-4, 10].into_iter().collect();
		heap.make_heap(&[7, 9]);
		assert_eq!(heap.to_string(), "[7, 9]");
		assert_eq!(heap.peek_min(), Some(7));
		heap.make_heap(&[]);
		assert_eq!(heap.peek_min(), None);
		assert_eq!(heap.len(), 0);
	}

	#[test]
	fn ties_keep_first_cached() {
		let mut heap = MinHeap::new();
		heap.make_heap(&[2, 1, 3, 1]);
		let first = heap.min.unwrap();
		heap.insert(1);
		assert_eq!(heap.min, Some(first));
		assert_eq!(heap.pop_min(), Some(1));
		// the chain keeps its order minus the popped node
		assert_eq!(heap.to_string(), "[2, 3, 1, 1]");
		assert_eq!(heap.sort_heap(), [1, 1, 2, 3]);
	}

	#[test]
	fn extract_from_ends() {
		let mut heap: MinHeap = [1, 5, 6, 0].into_iter().collect();
		assert_eq!(heap.pop_min(), Some(0));
		assert_eq!(heap.to_string(), "[1, 5, 6]");
		assert_eq!(heap.pop_min(), Some(1));
		assert_eq!(heap.to_string(), "[5, 6]");
		heap.insert(4);
		assert_eq!(heap.peek_min(), Some(4));
		assert_eq!(heap.to_string(), "[5, 6, 4]");
	}

	#[test]
	fn union_splices_chains() {
		let mut a: MinHeap = [4, 2].into_iter().collect();
		let b: MinHeap = [3, 1].into_iter().collect();
		a.union(b);
		assert_eq!(a.to_string(), "[4, 2, 3, 1]");
		assert_eq!(a.peek_min(), Some(1));
		assert_eq!(a.len(), 4);
		a.insert(0);
		assert_eq!(a.sort_heap(), [0, 1, 2, 3, 4]);
	}

	#[test]
	fn union_with_empty_sides() {
		let mut a = MinHeap::new();
		a.union([6, 5].into_iter().collect());
		assert_eq!(a.to_string(), "[6, 5]");
		assert_eq!(a.peek_min(), Some(5));
		a.union(MinHeap::new());
		assert_eq!(a.to_string(), "[6, 5]");
		let mut b = MinHeap::new();
		b.union(MinHeap::new());
		assert!(b.is_empty());
		assert_eq!(b.extract_min(), EMPTY);
	}

	#[test]
	fn detects_stale_min() {
		let mut heap: MinHeap = [3, 2, 9].into_iter().collect();
		let first = heap.chain.head();
		let second = heap.chain.ids().nth(1);
		heap.min = first;
		assert_eq!(heap.check(), Err(MinHeapError::NotMinimal(second.unwrap())));
		heap.min = None;
		assert_eq!(heap.check(), Err(MinHeapError::MissingMin));
	}
}
