use std::cell::RefCell;
use std::rc::Rc;

/// A value that increments a shared counter whenever it, or any clone of it, is dropped.
#[derive(Debug, Clone)]
#[allow(unused)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    #[allow(unused)]
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(0)))
    }

    /// Returns the number of drops counted so far.
    #[allow(unused)]
    pub fn drops(&self) -> usize {
        *self.0.borrow()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        *self.0.borrow_mut() += 1;
    }
}
