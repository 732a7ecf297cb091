use std::mem;

use crate::Key;

/// Index of a node inside the arena of the `Chain` that owns it.
/// Only meaningful for that chain; ids are recycled after `Chain::unlink`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
pub struct Node {
	value: Key,
	prev: Option<NodeId>,
	next: Option<NodeId>
}

#[cfg(test)]
#[derive(Debug, PartialEq)]
pub(crate) enum ChainError {
	BrokenPrevLink(NodeId),
	DanglingHead(NodeId),
	DanglingTail(NodeId),
	WrongTail,
	WrongCount
}

/// A doubly linked list of keys.
/// The nodes live in an arena owned by the chain and link to each other by index,
/// so the previous/next relations never own anything.
/// - Push back / insert before a known node / unlink a known node: O(1)
/// - Append another chain: O(m) in the size of the appended chain, O(1) if self is empty
#[derive(Clone, Debug, Default)]
pub struct Chain {
	nodes: Vec<Node>,
	free: Vec<NodeId>,
	head: Option<NodeId>,
	tail: Option<NodeId>,
	len: usize
}

impl Chain {
	pub fn new() -> Self {
		Self{nodes: Vec::new(), free: Vec::new(), head: None, tail: None, len: 0}
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.head.is_none()
	}

	pub fn head(&self) -> Option<NodeId> {
		self.head
	}

	pub fn tail(&self) -> Option<NodeId> {
		self.tail
	}

	pub fn value(&self, id: NodeId) -> Key {
		self.nodes[id.0].value
	}

	pub fn next_of(&self, id: NodeId) -> Option<NodeId> {
		self.nodes[id.0].next
	}

	fn alloc(&mut self, value: Key, prev: Option<NodeId>, next: Option<NodeId>) -> NodeId {
		let node = Node{value, prev, next};
		match self.free.pop() {
			Some(id) => {
				self.nodes[id.0] = node;
				id
			},
			None => {
				self.nodes.push(node);
				NodeId(self.nodes.len() - 1)
			}
		}
	}

	/// Append a new node after the tail and return its id
	pub fn push_back(&mut self, value: Key) -> NodeId {
		let id = self.alloc(value, self.tail, None);
		match self.tail {
			Some(tail) => self.nodes[tail.0].next = Some(id),
			None => self.head = Some(id)
		}
		self.tail = Some(id);
		self.len += 1;
		id
	}

	/// Splice a new node in immediately before `at`, which must be in this chain
	pub fn insert_before(&mut self, at: NodeId, value: Key) -> NodeId {
		let prev = self.nodes[at.0].prev;
		let id = self.alloc(value, prev, Some(at));
		self.nodes[at.0].prev = Some(id);
		match prev {
			Some(p) => self.nodes[p.0].next = Some(id),
			None => self.head = Some(id)
		}
		self.len += 1;
		id
	}

	/// Remove a node, joining its neighbours to each other, and return its value.
	/// The id must not be used again until it is handed out by another insertion.
	pub fn unlink(&mut self, id: NodeId) -> Key {
		let Node{value, prev, next} = self.nodes[id.0].clone();
		match prev {
			Some(p) => self.nodes[p.0].next = next,
			None => self.head = next
		}
		match next {
			Some(n) => self.nodes[n.0].prev = prev,
			None => self.tail = prev
		}
		let node = &mut self.nodes[id.0];
		node.prev = None;
		node.next = None;
		self.len -= 1;
		if self.len == 0 {
			// nothing is linked anymore, so the arena can be reset instead of growing the free list
			self.nodes.clear();
			self.free.clear();
		} else {
			self.free.push(id);
		}
		value
	}

	/// Move every node of `other` onto the end of this chain, in order.
	/// Ids previously handed out by `other` are invalid afterwards.
	pub fn append(&mut self, other: Chain) {
		if other.is_empty() {
			return
		}
		if self.is_empty() {
			*self = other;
			return
		}
		let base = self.nodes.len();
		let shift = |id: Option<NodeId>|id.map(|NodeId(i)|NodeId(i + base));
		let Chain{nodes, free, head, tail, len} = other;
		self.nodes.extend(nodes.into_iter().map(|n|Node{value: n.value, prev: shift(n.prev), next: shift(n.next)}));
		self.free.extend(free.into_iter().map(|NodeId(i)|NodeId(i + base)));
		let other_head = shift(head);
		if let (Some(t), Some(h)) = (self.tail, other_head) {
			self.nodes[t.0].next = Some(h);
			self.nodes[h.0].prev = Some(t);
		}
		self.tail = shift(tail);
		self.len += len;
	}

	/// Drop every node
	pub fn clear(&mut self) {
		*self = Self::new()
	}

	/// Detach the whole chain, leaving this one empty
	pub fn take(&mut self) -> Chain {
		mem::take(self)
	}

	/// Ids of the nodes from head to tail
	pub fn ids(&self) -> Ids<'_> {
		Ids{chain: self, cursor: self.head}
	}

	/// Values of the nodes from head to tail
	pub fn iter(&self) -> Iter<'_> {
		Iter{ids: self.ids()}
	}

	#[cfg(test)]
	pub(crate) fn check(&self) -> Result<(), ChainError> {
		use ChainError::*;
		if let Some(h) = self.head {
			if self.nodes[h.0].prev.is_some() {
				return Err(DanglingHead(h))
			}
		}
		if let Some(t) = self.tail {
			if self.nodes[t.0].next.is_some() {
				return Err(DanglingTail(t))
			}
		}
		let mut prev = None;
		let mut count = 0;
		for id in self.ids() {
			if self.nodes[id.0].prev != prev {
				return Err(BrokenPrevLink(id))
			}
			prev = Some(id);
			count += 1;
			if count > self.len {
				return Err(WrongCount)
			}
		}
		if prev != self.tail {
			Err(WrongTail)
		} else if count != self.len {
			Err(WrongCount)
		} else { Ok(()) }
	}
}

impl FromIterator<Key> for Chain {
	fn from_iter<T: IntoIterator<Item = Key>>(iter: T) -> Self {
		let iter = iter.into_iter();
		let mut res = Self{nodes: Vec::with_capacity(iter.size_hint().0), ..Self::new()};
		iter.for_each(|value|{ res.push_back(value); });
		res
	}
}

#[derive(Clone)]
pub struct Ids<'a> {
	chain: &'a Chain,
	cursor: Option<NodeId>
}

impl<'a> Iterator for Ids<'a> {
	type Item = NodeId;
	fn next(&mut self) -> Option<Self::Item> {
		let res = self.cursor?;
		self.cursor = self.chain.next_of(res);
		Some(res)
	}
}

#[derive(Clone)]
pub struct Iter<'a> {
	ids: Ids<'a>
}

impl<'a> Iterator for Iter<'a> {
	type Item = Key;
	fn next(&mut self) -> Option<Self::Item> {
		self.ids.next().map(|id|self.ids.chain.value(id))
	}
}
