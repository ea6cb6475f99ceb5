use std::hash::Hash;
use crate::Elem;

// Keys of a term mapping. Must be usable as a hash key with value-based equality.

pub trait Gen: Elem + Eq + Hash + Ord {}
