use std::fmt::{Debug, Display};

use gxhash::HashMap;

/// Handle to a string held by an [`Interner`]. Only meaningful together
/// with the interner that produced it.
#[derive(Clone, PartialEq, Eq, Copy, Hash, Default)]
pub struct Atom(pub(super) u32);

impl Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "atom#{}", self.0)
    }
}

impl Debug for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Atom({})", self.0)
    }
}

/// String interning table. Every distinct string is stored once and
/// addressed by a stable [`Atom`]; interned text lives as long as the
/// interner itself.
///
/// There is deliberately no global instance. Whoever needs interning gets
/// handed a `&mut Interner`, which keeps token code testable in isolation
/// and leaves any locking discipline to the caller.
pub struct Interner {
    map: HashMap<&'static str, Atom>,
    vec: Vec<&'static str>,
    buf: String,
    full: Vec<String>,
}

impl Interner {
    pub fn with_capacity(cap: usize) -> Interner {
        let cap = cap.next_power_of_two();

        Interner {
            map: HashMap::default(),
            vec: Vec::new(),
            buf: String::with_capacity(cap),
            full: Vec::new(),
        }
    }

    /// Interns `name`, returning the existing atom if the exact byte
    /// sequence was seen before. Embedded NUL bytes are preserved.
    pub fn intern(&mut self, name: &str) -> Atom {
        if let Some(id) = self.map.get(name) {
            return *id;
        }

        let name = unsafe { self.alloc(name) };
        let id = Atom(self.map.len() as u32);

        self.map.insert(name, id);
        self.vec.push(name);

        debug_assert!(self.lookup(id) == name);
        debug_assert!(self.intern(name) == id);

        id
    }

    /// Resolves an atom back to its text. Panics on an atom that did not
    /// come from this interner.
    pub fn lookup(&self, id: Atom) -> &str {
        self.vec[id.0 as usize]
    }

    unsafe fn alloc(&mut self, name: &str) -> &'static str {
        let cap = self.buf.capacity();
        if cap < self.buf.len() + name.len() {
            let new_cap = (cap.max(name.len()) + 1).next_power_of_two();
            log::trace!("interner arena grew to {new_cap} bytes");
            let new_buf = String::with_capacity(new_cap);
            let old_buf = std::mem::replace(&mut self.buf, new_buf);
            self.full.push(old_buf);
        }

        let interned = {
            let start = self.buf.len();
            self.buf.push_str(name);
            &self.buf[start..]
        };

        unsafe { &*(interned as *const str) }
    }
}
