pub use interner::{Atom, Interner};

mod interner;
