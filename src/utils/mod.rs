//! Utils module split into submodules

mod partitions;

pub(crate) use partitions::{Bipartition, OperandSet, full_set, generate_bipartitions, slots};
