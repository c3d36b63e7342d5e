//! Height bookkeeping and rotations on an arena of [`BinaryNode`]s.
//!
//! Every function takes the subtree root index and returns the index of the
//! node now occupying that position; callers relink it into the parent.

use crate::node::{Arena, BinaryNode};

#[inline]
pub(crate) fn height<T>(arena: &Arena<BinaryNode<T>>, idx: Option<u32>) -> u32 {
    idx.map_or(0, |i| arena[i].height)
}

#[inline]
pub(crate) fn update_height<T>(arena: &mut Arena<BinaryNode<T>>, idx: u32) {
    let h = 1 + height(arena, arena[idx].left).max(height(arena, arena[idx].right));
    arena[idx].height = h;
}

/// `height(left) - height(right)`.
#[inline]
pub(crate) fn balance<T>(arena: &Arena<BinaryNode<T>>, idx: Option<u32>) -> i64 {
    match idx {
        Some(i) => height(arena, arena[i].left) as i64 - height(arena, arena[i].right) as i64,
        None => 0,
    }
}

/// ```text
///     n          nl
///    /             \
///   nl     →        n
///     \            /
///      b          b
/// ```
pub(crate) fn rotate_right<T>(arena: &mut Arena<BinaryNode<T>>, n: u32) -> u32 {
    let Some(nl) = arena[n].left else {
        return n;
    };
    let b = arena[nl].right;
    arena[n].left = b;
    arena[nl].right = Some(n);
    update_height(arena, n);
    update_height(arena, nl);
    nl
}

/// Mirror of [`rotate_right`].
pub(crate) fn rotate_left<T>(arena: &mut Arena<BinaryNode<T>>, n: u32) -> u32 {
    let Some(nr) = arena[n].right else {
        return n;
    };
    let b = arena[nr].left;
    arena[n].right = b;
    arena[nr].left = Some(n);
    update_height(arena, n);
    update_height(arena, nr);
    nr
}

/// Restores balance at `n` after `value` was inserted below it. The case is
/// picked by comparing `value` with the heavy child's value.
pub(crate) fn rebalance_after_insert<T: Ord>(arena: &mut Arena<BinaryNode<T>>, n: u32, value: &T) -> u32 {
    update_height(arena, n);
    let bf = balance(arena, Some(n));

    if bf > 1 {
        if let Some(l) = arena[n].left {
            if *value > arena[l].value {
                tracing::debug!("avl: left-right rotation");
                let nl = rotate_left(arena, l);
                arena[n].left = Some(nl);
            } else {
                tracing::debug!("avl: right rotation");
            }
            return rotate_right(arena, n);
        }
    } else if bf < -1 {
        if let Some(r) = arena[n].right {
            if *value < arena[r].value {
                tracing::debug!("avl: right-left rotation");
                let nr = rotate_right(arena, r);
                arena[n].right = Some(nr);
            } else {
                tracing::debug!("avl: left rotation");
            }
            return rotate_left(arena, n);
        }
    }
    n
}

/// Restores balance at `n` after a removal below it. The case is picked by
/// the heavy child's own balance factor.
pub(crate) fn rebalance_after_delete<T>(arena: &mut Arena<BinaryNode<T>>, n: u32) -> u32 {
    update_height(arena, n);
    let bf = balance(arena, Some(n));

    if bf > 1 {
        let l = arena[n].left;
        if balance(arena, l) < 0 {
            if let Some(l) = l {
                let nl = rotate_left(arena, l);
                arena[n].left = Some(nl);
            }
        }
        return rotate_right(arena, n);
    }
    if bf < -1 {
        let r = arena[n].right;
        if balance(arena, r) > 0 {
            if let Some(r) = r {
                let nr = rotate_right(arena, r);
                arena[n].right = Some(nr);
            }
        }
        return rotate_left(arena, n);
    }
    n
}

/// Leftmost node under `idx`.
pub(crate) fn min_node<T>(arena: &Arena<BinaryNode<T>>, mut idx: u32) -> u32 {
    while let Some(l) = arena[idx].left {
        idx = l;
    }
    idx
}

/// Checks stored heights and balance factors. Returns the subtree height.
pub(crate) fn check_heights<T>(arena: &Arena<BinaryNode<T>>, idx: Option<u32>) -> Result<u32, String> {
    let Some(i) = idx else {
        return Ok(0);
    };
    let lh = check_heights(arena, arena[i].left)?;
    let rh = check_heights(arena, arena[i].right)?;
    let h = 1 + lh.max(rh);
    if arena[i].height != h {
        return Err(format!("node {} stores height {} but has {}", arena[i].id, arena[i].height, h));
    }
    if lh.abs_diff(rh) > 1 {
        return Err(format!("node {} unbalanced: {} vs {}", arena[i].id, lh, rh));
    }
    Ok(h)
}
