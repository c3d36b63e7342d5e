//! Box-drawing text dumps of the structures.
//!
//! ```text
//! 20
//! ├─ 10
//! └─ 30
//!    └─ 40
//! ```

use std::fmt::Display;

use crate::layout::BinaryShape;

/// Renders one child subtree given the indentation of its line.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;

/// Lays out `children` below a parent line. Missing children are skipped,
/// but an empty rendered child still occupies a `│` line.
pub fn print_tree(tab: &str, children: &[Option<&PrintChild<'_>>]) -> String {
    let mut out = String::new();
    let Some(last) = children.iter().rposition(Option::is_some) else {
        return out;
    };

    for (i, child_opt) in children.iter().enumerate().take(last + 1) {
        let Some(child_fn) = *child_opt else {
            continue;
        };

        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let child = child_fn(&child_tab);
        let branch = if child.is_empty() {
            "│"
        } else if is_last {
            "└─"
        } else {
            "├─"
        };

        out.push('\n');
        out.push_str(tab);
        out.push_str(branch);
        if !child.is_empty() {
            out.push(' ');
            out.push_str(&child);
        }
    }

    out
}

/// Dumps a binary tree. An absent left child next to a present right child
/// is printed as `∅` so the sides stay distinguishable.
pub fn print_binary<S: BinaryShape>(shape: &S) -> String
where
    S::Value: Display,
{
    match shape.root() {
        Some(root) => print_binary_node(shape, root, ""),
        None => "∅".to_string(),
    }
}

fn print_binary_node<S: BinaryShape>(shape: &S, idx: u32, tab: &str) -> String
where
    S::Value: Display,
{
    let mut out = shape.value(idx).to_string();
    let left = shape.left(idx);
    let right = shape.right(idx);
    if left.is_none() && right.is_none() {
        return out;
    }
    let render = |child: Option<u32>| {
        move |tab: &str| match child {
            Some(c) => print_binary_node(shape, c, tab),
            None => "∅".to_string(),
        }
    };
    let l: &PrintChild<'_> = &render(left);
    let r: &PrintChild<'_> = &render(right);
    let children = if right.is_some() {
        [Some(l), Some(r)]
    } else {
        [Some(l), None]
    };
    out.push_str(&print_tree(tab, &children));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_tree_uses_last_present_child_for_corner() {
        let a: &PrintChild<'_> = &|_: &str| "a".to_string();
        let b: &PrintChild<'_> = &|_: &str| "b".to_string();
        let out = print_tree("", &[Some(a), Some(b), None]);
        assert_eq!(out, "\n├─ a\n└─ b");
    }

    #[test]
    fn print_tree_nests_tabs() {
        let leaf: &PrintChild<'_> = &|_: &str| "leaf".to_string();
        let inner: &PrintChild<'_> = &|tab: &str| format!("inner{}", print_tree(tab, &[Some(leaf)]));
        let out = print_tree("", &[Some(inner)]);
        assert_eq!(out, "\n└─ inner\n   └─ leaf");
    }

    #[test]
    fn print_tree_without_children_is_empty() {
        assert_eq!(print_tree("", &[None, None]), "");
    }
}
