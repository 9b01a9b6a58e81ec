use log::debug;

/// A set of operand slots, one bit per slot.
pub type OperandSet = u32;

/// One way of splitting an operand set into two non-empty, disjoint halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bipartition {
    pub left: OperandSet,
    pub right: OperandSet,
}

/// The set holding slots `0..len`.
pub fn full_set(len: usize) -> OperandSet {
    u32::try_from(len)
        .ok()
        .and_then(|bits| 1u32.checked_shl(bits))
        .map_or(OperandSet::MAX, |bit| bit - 1)
}

/// Slots contained in `set`, in input order.
pub fn slots(set: OperandSet) -> impl Iterator<Item = usize> {
    (0..OperandSet::BITS as usize).filter(move |&slot| set & (1 << slot) != 0)
}

/// Generate every split of `set` exactly once.
///
/// The lowest slot of `set` always lands in `left`, so a split and its mirror
/// are never both produced. Splits come out ordered by the size of `left`,
/// then by the slots of `left` in input order. Sets with fewer than two slots
/// have no splits.
pub fn generate_bipartitions(set: OperandSet) -> Vec<Bipartition> {
    debug!(
        "Generating bipartitions for operand set {:#b} ({} slots)",
        set,
        set.count_ones()
    );

    if set.count_ones() < 2 {
        return Vec::new();
    }

    let anchor = set & set.wrapping_neg();
    let rest = set & !anchor;

    // Walk the proper submasks of `rest` downwards; the empty one is last.
    let mut result = Vec::new();
    let mut sub = rest;
    loop {
        sub = sub.wrapping_sub(1) & rest;
        result.push(Bipartition {
            left: anchor | sub,
            right: rest & !sub,
        });
        if sub == 0 {
            break;
        }
    }

    result.sort_by_cached_key(|split| {
        (
            split.left.count_ones(),
            slots(split.left).collect::<Vec<_>>(),
        )
    });

    debug!("Generated {} bipartitions", result.len());
    result
}
