use std::cell::Cell;
use std::rc::Rc;

/// Stacking value every paper starts with before it is first picked up.
pub const BASE_Z: u32 = 1;

/// Shared "highest z-index" counter. Cloning hands out another handle to the
/// same counter, so the composition root creates one and passes clones down.
#[derive(Clone, Debug)]
pub struct ZOrder {
    top: Rc<Cell<u32>>,
}

impl ZOrder {
    pub fn new() -> Self {
        Self {
            top: Rc::new(Cell::new(BASE_Z)),
        }
    }

    /// Current global maximum.
    pub fn top(&self) -> u32 {
        self.top.get()
    }

    /// Bump the counter and return the new top value (saturates at `u32::MAX`).
    pub fn raise(&self) -> u32 {
        // pinned at u32::MAX rather than wrapping below the other papers
        let next = self.top.get().saturating_add(1);
        self.top.set(next);
        next
    }
}

#[cfg(test)]
impl ZOrder {
    fn starting_at(top: u32) -> Self {
        Self {
            top: Rc::new(Cell::new(top)),
        }
    }
}

impl Default for ZOrder {
    fn default() -> Self {
        Self::new()
    }
}

// Props equality: two handles are equal when they point at the same counter.
impl PartialEq for ZOrder {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.top, &other.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raise_is_strictly_increasing() {
        let z = ZOrder::new();
        assert_eq!(z.top(), BASE_Z);
        let a = z.raise();
        let b = z.raise();
        assert!(a > BASE_Z);
        assert!(b > a);
        assert_eq!(z.top(), b);
    }

    #[test]
    fn raise_at_the_ceiling_does_not_overflow() {
        let z = ZOrder::starting_at(u32::MAX - 1);
        assert_eq!(z.raise(), u32::MAX);
        assert_eq!(z.raise(), u32::MAX);
        assert_eq!(z.top(), u32::MAX);
    }

    #[test]
    fn clones_share_one_counter() {
        let z = ZOrder::new();
        let other = z.clone();
        let a = z.raise();
        let b = other.raise();
        assert!(b > a);
        assert_eq!(z.top(), other.top());
        assert_eq!(z, other);
        assert_ne!(z, ZOrder::new());
    }
}
