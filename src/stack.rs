use crate::memory::Address;

/// Maximum number of nested calls
pub const STACK_DEPTH: usize = 16;

/// A bounded LIFO of return addresses
///
/// Only push and pop are offered; callers turn a `None` into the matching
/// overflow/underflow fault since they know where the offending call sits.
#[derive(Debug, Clone, Default)]
pub struct CallStack {
  slots: [Address; STACK_DEPTH],
  // next free slot
  sp: usize,
}

impl CallStack {
  pub fn new() -> Self {
    Self::default()
  }

  /// Push a return address, `None` if the stack is already full
  #[must_use]
  pub fn push(&mut self, return_address: Address) -> Option<()> {
    let slot = self.slots.get_mut(self.sp)?;
    *slot = return_address;
    self.sp += 1;
    Some(())
  }

  /// Pop the most recent return address, `None` if the stack is empty
  #[must_use]
  pub fn pop(&mut self) -> Option<Address> {
    self.sp = self.sp.checked_sub(1)?;
    Some(self.slots[self.sp])
  }

  fn live(&self) -> &[Address] {
    &self.slots[..self.sp]
  }
}

// slots above sp are stale leftovers from earlier calls
impl PartialEq for CallStack {
  fn eq(&self, other: &Self) -> bool {
    self.live() == other.live()
  }
}

impl Eq for CallStack {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lifo_order() {
    let mut stack = CallStack::new();
    assert_eq!(stack.push(0x002), Some(()));
    assert_eq!(stack.push(0x102), Some(()));
    assert_eq!(stack.pop(), Some(0x102));
    assert_eq!(stack.pop(), Some(0x002));
    assert_eq!(stack.sp, 0);
  }

  #[test]
  fn overflow_at_depth() {
    let mut stack = CallStack::new();
    for i in 0..STACK_DEPTH {
      assert_eq!(stack.push(i as Address * 2), Some(()));
    }
    assert_eq!(stack.push(0xFFE), None);
    assert_eq!(stack.sp, STACK_DEPTH);
    // the failed push did not clobber the top entry
    assert_eq!(stack.pop(), Some(30));
  }

  #[test]
  fn underflow_when_empty() {
    let mut stack = CallStack::new();
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.sp, 0);
  }

  #[test]
  fn emptied_stack_equals_new() {
    let mut stack = CallStack::new();
    assert_eq!(stack.push(0x004), Some(()));
    assert_eq!(stack.push(0x104), Some(()));
    assert_ne!(stack, CallStack::new());
    assert_eq!(stack.pop(), Some(0x104));
    assert_eq!(stack.pop(), Some(0x004));
    assert_eq!(stack, CallStack::new());
  }

  #[test]
  fn equality_ignores_stale_slots() {
    let mut a = CallStack::new();
    let mut b = CallStack::new();
    assert_eq!(a.push(0x002), Some(()));
    assert_eq!(a.push(0x300), Some(()));
    assert_eq!(a.pop(), Some(0x300));
    assert_eq!(b.push(0x002), Some(()));
    assert_eq!(a, b);
  }
}
