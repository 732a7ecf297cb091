#[macro_use] extern crate log;

pub mod node;
pub mod minheap;
pub mod sortedheap;
pub mod msort;
pub mod source;
pub mod console;

pub use crate::minheap::MinHeap;
pub use crate::sortedheap::SortedHeap;

use std::{fmt, io, path::PathBuf};

use quick_error::quick_error;

/// The key type stored by every heap in this crate
pub type Key = i32;

/// Value returned by `Heap::min_val` and `Heap::extract_min` when the heap is empty.
/// A heap that legitimately contains this value is indistinguishable from an empty one
/// through those two methods; use `Heap::peek_min` / `Heap::pop_min` to tell them apart.
pub const EMPTY: Key = Key::MAX;



quick_error! {
    #[derive(Debug)]
    pub enum Error {
        Io(e: io::Error) {
            display("I/O error {}", e)
            from()
        }
        IoWithFilename(e: io::Error, path: PathBuf) {
            display("I/O error {}, file {:?}", e, path)
        }
        NotAFile(path: PathBuf) {
            display("Not a readable file: {:?}", path)
        }
        InvalidNumber(text: String) {
            display("Invalid number {:?}", text)
        }
    }
}



/// A min priority queue of `Key`s.
/// Both implementations in this crate keep their elements in a doubly linked chain,
/// and differ in which operations pay for keeping the minimum at hand.
pub trait Heap: Default + fmt::Display {
	/// Discard the current contents and rebuild from `values`
	fn make_heap(&mut self, values: &[Key]);
	/// Add one element.  Equal elements may coexist
	fn insert(&mut self, value: Key);
	/// Get the minimum element without removing it
	fn peek_min(&self) -> Option<Key>;
	/// Get the minimum element and remove it
	fn pop_min(&mut self) -> Option<Key>;
	/// Move every element of `other` into this heap.
	/// `other` is consumed, so nothing can observe or mutate its old chain afterwards
	fn union(&mut self, other: Self);
	/// Get the number of elements in the heap
	fn len(&self) -> usize;
	/// Iterate over the elements in chain order (head to tail) without removing them
	fn iter(&self) -> node::Iter<'_>;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// `peek_min`, with `EMPTY` standing in for an empty heap
	fn min_val(&self) -> Key {
		self.peek_min().unwrap_or(EMPTY)
	}

	/// `pop_min`, with `EMPTY` standing in for an empty heap
	fn extract_min(&mut self) -> Key {
		self.pop_min().unwrap_or(EMPTY)
	}

	/// Lazily pop elements in ascending order.
	/// Elements the iterator is not advanced over stay in the heap
	fn drain_sorted(&mut self) -> DrainSorted<'_, Self> {
		DrainSorted{heap: self}
	}

	/// Remove every element, returning them in ascending order
	fn sort_heap(&mut self) -> Vec<Key> {
		self.drain_sorted().collect()
	}
}

pub struct DrainSorted<'a, H: Heap> {
	heap: &'a mut H
}

impl<'a, H: Heap> Iterator for DrainSorted<'a, H> {
	type Item = Key;
	fn next(&mut self) -> Option<Self::Item> {
		self.heap.pop_min()
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		let n = self.heap.len();
		(n, Some(n))
	}
}

impl<'a, H: Heap> ExactSizeIterator for DrainSorted<'a, H> {}

/// Formats a sequence of keys as `[a, b, c]`, or `[]` when empty
pub struct ListFmt<I>(pub I);

impl<I: Iterator<Item = Key> + Clone> fmt::Display for ListFmt<I> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("[")?;
		for (i, v) in self.0.clone().enumerate() {
			if i != 0 {
				f.write_str(", ")?;
			}
			write!(f, "{}", v)?;
		}
		f.write_str("]")
	}
}

#[cfg(test)]
mod tests {
	use rand::distributions::{Distribution, Uniform};

	use super::*;

	const TRIALS: usize = 50;
	const MAX_LEN: usize = 200;

	fn random_values(rng: &mut impl rand::Rng) -> Vec<Key> {
		let len = Uniform::new_inclusive(0, MAX_LEN).sample(rng);
		// a narrow range so duplicates are common
		let dist = Uniform::new_inclusive(-50, 50);
		(0..len).map(|_|dist.sample(rng)).collect()
	}

	fn drains_sorted<H: Heap>() {
		let mut rng = rand::thread_rng();
		for _ in 0..TRIALS {
			let values = random_values(&mut rng);
			let mut expected = values.clone();
			expected.sort();
			let mut heap = H::default();
			heap.make_heap(&values);
			assert_eq!(heap.len(), values.len());
			assert_eq!(heap.peek_min(), expected.first().copied());
			assert_eq!(heap.sort_heap(), expected);
			assert!(heap.is_empty());
		}
	}

	fn unions_sorted<H: Heap>() {
		let mut rng = rand::thread_rng();
		for _ in 0..TRIALS {
			let (a, b) = (random_values(&mut rng), random_values(&mut rng));
			eprintln!("Union of {} and {} values", a.len(), b.len());
			let mut expected: Vec<Key> = a.iter().chain(&b).copied().collect();
			expected.sort();
			let mut left = H::default();
			left.make_heap(&a);
			let mut right = H::default();
			right.make_heap(&b);
			left.union(right);
			assert_eq!(left.len(), expected.len());
			assert_eq!(left.sort_heap(), expected);
		}
	}

	fn empty_is_idempotent<H: Heap>() {
		let mut heap = H::default();
		heap.make_heap(&[]);
		for _ in 0..3 {
			assert_eq!(heap.min_val(), EMPTY);
			assert_eq!(heap.extract_min(), EMPTY);
			assert_eq!(heap.pop_min(), None);
			assert_eq!(heap.len(), 0);
			assert_eq!(heap.to_string(), "[]");
		}
		assert_eq!(heap.sort_heap(), Vec::<Key>::new());
	}

	fn interleaved<H: Heap>() {
		let mut rng = rand::thread_rng();
		let op_dist = Uniform::new_inclusive(0, 3);
		let val_dist = Uniform::new_inclusive(-1000, 1000);
		let mut heap = H::default();
		let mut naive: Vec<Key> = Vec::new();
		for _ in 0..2000 {
			match op_dist.sample(&mut rng) {
				0 => {
					let idx = naive.iter().enumerate().min_by_key(|&(_, v)|v).map(|(i, _)|i);
					let expected = idx.map(|i|naive.remove(i));
					assert_eq!(heap.pop_min(), expected);
				},
				_ => {
					let v = val_dist.sample(&mut rng);
					heap.insert(v);
					naive.push(v);
				}
			}
			assert_eq!(heap.peek_min(), naive.iter().min().copied());
			assert_eq!(heap.len(), naive.len());
		}
	}

	#[test]
	fn minheap_drains_sorted() {
		drains_sorted::<MinHeap>()
	}

	#[test]
	fn sortedheap_drains_sorted() {
		drains_sorted::<SortedHeap>()
	}

	#[test]
	fn minheap_unions_sorted() {
		unions_sorted::<MinHeap>()
	}

	#[test]
	fn sortedheap_unions_sorted() {
		unions_sorted::<SortedHeap>()
	}

	#[test]
	fn empty_heaps_are_idempotent() {
		empty_is_idempotent::<MinHeap>();
		empty_is_idempotent::<SortedHeap>();
	}

	#[test]
	fn interleaved_against_naive() {
		interleaved::<MinHeap>();
		interleaved::<SortedHeap>();
	}

	#[test]
	fn drain_stops_early() {
		let mut heap: SortedHeap = [4, 1, 3, 2].into_iter().collect();
		let first: Vec<Key> = heap.drain_sorted().take(2).collect();
		assert_eq!(first, [1, 2]);
		assert_eq!(heap.to_string(), "[3, 4]");
		assert_eq!(heap.drain_sorted().len(), 2);
	}

	#[test]
	fn list_format() {
		assert_eq!(ListFmt([1, 2, 5].into_iter()).to_string(), "[1, 2, 5]");
		assert_eq!(ListFmt(std::iter::empty::<Key>()).to_string(), "[]");
	}
}
