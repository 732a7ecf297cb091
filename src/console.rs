//! Menu driven command loop over two heaps, A and B, of the same kind.
//! Input lines come from any iterator and output goes to any writer,
//! so the loop can be driven by stdin, a script file, or a test.

use std::{io::{self, Write}, mem, str::FromStr};

use crate::{source, Error, Heap, Key, MinHeap, SortedHeap};

const EMPTY_MSG: &str = "The heap is empty. Therefore, there is no minimum value.";

/// Which heap implementation a session uses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
	Min,
	Sorted
}

impl FromStr for Kind {
	type Err = Error;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"1" | "min" => Ok(Kind::Min),
			"2" | "sorted" => Ok(Kind::Sorted),
			_ => Err(Error::InvalidNumber(s.to_owned()))
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
	A,
	B
}

/// One menu entry.  Entries 1-5 act on A, 6-10 on B
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
	MakeHeap(Side),
	Insert(Side),
	Minimum(Side),
	ExtractMin(Side),
	Sort(Side),
	Union,
	Stop
}

impl Command {
	pub fn from_choice(choice: Key) -> Option<Self> {
		use Command::*;
		let side = if choice <= 5 { Side::A } else { Side::B };
		Some(match choice {
			1 | 6 => MakeHeap(side),
			2 | 7 => Insert(side),
			3 | 8 => Minimum(side),
			4 | 9 => ExtractMin(side),
			5 | 10 => Sort(side),
			11 => Union,
			12 => Stop,
			_ => return None
		})
	}
}

/// How a session ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
	Stopped,
	Exhausted
}

/// Write the heap's elements in ascending order as `[a, b, c]` followed by a newline,
/// popping them one at a time.  The heap is empty afterwards.
pub fn write_sorted<H: Heap, W: Write>(heap: &mut H, out: &mut W) -> io::Result<()> {
	write!(out, "[")?;
	for (i, v) in heap.drain_sorted().enumerate() {
		if i != 0 {
			write!(out, ", ")?;
		}
		write!(out, "{}", v)?;
	}
	writeln!(out, "]")
}

pub struct Console<I, W> {
	input: I,
	out: W
}

impl<I: Iterator<Item = String>, W: Write> Console<I, W> {
	pub fn new(input: I, out: W) -> Self {
		Self{input, out}
	}

	pub fn into_output(self) -> W {
		self.out
	}

	fn next_line(&mut self) -> Option<String> {
		let line = self.input.next();
		if line.is_none() {
			debug!("console input exhausted");
		}
		line
	}

	/// Read lines until one holds a single integer.  None if the input runs out first
	fn read_number(&mut self) -> Result<Option<Key>, Error> {
		while let Some(line) = self.next_line() {
			match source::parse_value(&line) {
				Ok(v) => return Ok(Some(v)),
				Err(e) => {
					debug!("{}", e);
					writeln!(self.out, "Invalid input. Please enter a number:")?;
				}
			}
		}
		Ok(None)
	}

	/// Read lines until one names a readable file of integers.  None if the input runs out first
	fn read_file(&mut self) -> Result<Option<Vec<Key>>, Error> {
		writeln!(self.out, "Please enter the path of your file:")?;
		while let Some(line) = self.next_line() {
			match source::read_values(line.trim()) {
				Ok(values) => return Ok(Some(values)),
				Err(e) => {
					debug!("{}", e);
					writeln!(self.out, "Invalid file path.\nPlease enter a valid path for your file:")?;
				}
			}
		}
		Ok(None)
	}

	fn print_menu(&mut self) -> io::Result<()> {
		writeln!(self.out, "Which of the following operations you wish to do next?")?;
		writeln!(self.out, "A:\n\t1. Make-Heap\n\t2. Insert\n\t3. Minimum\n\t4. Extract-Minimum\n\t5. Heap-Sort")?;
		writeln!(self.out, "B:\n\t6. Make-Heap\n\t7. Insert\n\t8. Minimum\n\t9. Extract-Minimum\n\t10. Heap-Sort")?;
		writeln!(self.out, "11. Union\n12. Stop")?;
		writeln!(self.out, "Please enter your choice:")
	}

	/// Run menu commands against a fresh pair of heaps until Stop is chosen or the input runs out
	pub fn session<H: Heap>(&mut self) -> Result<Outcome, Error> {
		let (mut a, mut b) = (H::default(), H::default());
		loop {
			self.print_menu()?;
			let Some(choice) = self.read_number()? else { return Ok(Outcome::Exhausted) };
			let Some(cmd) = Command::from_choice(choice) else {
				writeln!(self.out, "You have entered a wrong number of operation!\nPlease try again.")?;
				writeln!(self.out, "A = {}\nB = {}", a, b)?;
				continue
			};
			debug!("command {:?}", cmd);
			match cmd {
				Command::MakeHeap(s) => {
					let Some(values) = self.read_file()? else { return Ok(Outcome::Exhausted) };
					pick(&mut a, &mut b, s).make_heap(&values);
				},
				Command::Insert(s) => {
					writeln!(self.out, "Please enter the number you wish to add:")?;
					let Some(v) = self.read_number()? else { return Ok(Outcome::Exhausted) };
					pick(&mut a, &mut b, s).insert(v);
				},
				Command::Minimum(s) => match pick(&mut a, &mut b, s).peek_min() {
					Some(v) => writeln!(self.out, "The minimum is:\n{}", v)?,
					None => writeln!(self.out, "{}", EMPTY_MSG)?
				},
				Command::ExtractMin(s) => match pick(&mut a, &mut b, s).pop_min() {
					Some(v) => writeln!(self.out, "{} has been extracted.", v)?,
					None => writeln!(self.out, "{}", EMPTY_MSG)?
				},
				Command::Sort(s) => {
					write!(self.out, "Sorted {:?} = ", s)?;
					write_sorted(pick(&mut a, &mut b, s), &mut self.out)?;
				},
				Command::Union => a.union(mem::take(&mut b)),
				Command::Stop => return Ok(Outcome::Stopped)
			}
			writeln!(self.out, "A = {}\nB = {}", a, b)?;
		}
	}

	/// The outer loop: choose a heap kind (unless `kind` fixes it), run a session,
	/// and repeat while the answer to "continue?" is exactly "Y"
	pub fn run(&mut self, kind: Option<Kind>) -> Result<(), Error> {
		if kind.is_none() {
			writeln!(self.out, "Which of the following choices do you wish to use to implement the heap?")?;
			writeln!(self.out, "1. Minimum-Heap\n2. Sorted-Heap")?;
		}
		loop {
			let chosen = match kind {
				Some(k) => Some(k),
				None => {
					writeln!(self.out, "Please enter your choice:")?;
					let Some(choice) = self.read_number()? else { return Ok(()) };
					match choice {
						1 => Some(Kind::Min),
						2 => Some(Kind::Sorted),
						_ => None
					}
				}
			};
			let outcome = match chosen {
				Some(Kind::Min) => self.session::<MinHeap>()?,
				Some(Kind::Sorted) => self.session::<SortedHeap>()?,
				None => {
					writeln!(self.out, "You have entered a wrong number of implementation!\nPlease try again.")?;
					Outcome::Stopped
				}
			};
			if outcome == Outcome::Exhausted {
				return Ok(())
			}
			writeln!(self.out, "Do you want to continue? (Y/n)")?;
			match self.next_line() {
				Some(answer) if answer.trim_end() == "Y" => (),
				_ => return Ok(())
			}
		}
	}
}

fn pick<'a, H>(a: &'a mut H, b: &'a mut H, side: Side) -> &'a mut H {
	match side {
		Side::A => a,
		Side::B => b
	}
}
