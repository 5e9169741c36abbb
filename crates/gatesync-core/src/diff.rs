// ── Ordered set difference ──
//
// Shared by tag reconciliation and list-valued attribute reconciliation
// (binary media types). Inputs are treated as sets: duplicates collapse and
// the iteration order of the result is unspecified; callers must not rely
// on it.

use std::collections::HashSet;

/// Compute the elements to add to (or remove from) the remote list so it
/// matches the new list.
///
/// With `want_additions` the result is `new − old`; otherwise `old − new`.
/// An empty new list yields no additions, and — preserving the behavior of
/// the system this replaces — also no removals: the empty new list itself is
/// returned instead of the old one. Callers that want "clear everything"
/// semantics must not reach for this branch.
pub fn elements_to_add_or_remove(
    old: &[String],
    new: &[String],
    want_additions: bool,
) -> Vec<String> {
    if new.is_empty() {
        return Vec::new();
    }
    if old.is_empty() {
        return if want_additions {
            new.to_vec()
        } else {
            Vec::new()
        };
    }

    let old_set: HashSet<&str> = old.iter().map(String::as_str).collect();
    let new_set: HashSet<&str> = new.iter().map(String::as_str).collect();

    let difference = if want_additions {
        &new_set - &old_set
    } else {
        &old_set - &new_set
    };
    difference.into_iter().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    fn sorted(mut items: Vec<String>) -> Vec<String> {
        items.sort();
        items
    }

    #[test]
    fn additions_are_new_minus_old() {
        let result =
            elements_to_add_or_remove(&strings(&["x", "y"]), &strings(&["y", "z"]), true);
        assert_eq!(sorted(result), strings(&["z"]));
    }

    #[test]
    fn removals_are_old_minus_new() {
        let result =
            elements_to_add_or_remove(&strings(&["x", "y"]), &strings(&["y", "z"]), false);
        assert_eq!(sorted(result), strings(&["x"]));
    }

    #[test]
    fn empty_old_list_adds_everything_and_removes_nothing() {
        let new = strings(&["a", "b"]);
        assert_eq!(sorted(elements_to_add_or_remove(&[], &new, true)), new);
        assert!(elements_to_add_or_remove(&[], &new, false).is_empty());
    }

    #[test]
    fn empty_new_list_adds_nothing() {
        assert!(elements_to_add_or_remove(&strings(&["a"]), &[], true).is_empty());
    }

    // Pins the historical degenerate branch: an empty new list removes
    // nothing, even though everything arguably should be removed. Changing
    // this is a behavior change for every caller, not a bug fix here.
    #[test]
    fn removals_with_empty_new_list_remove_nothing() {
        assert!(elements_to_add_or_remove(&strings(&["a", "b"]), &[], false).is_empty());
    }

    #[test]
    fn duplicate_entries_collapse() {
        let result = elements_to_add_or_remove(
            &strings(&["x"]),
            &strings(&["y", "y", "x"]),
            true,
        );
        assert_eq!(sorted(result), strings(&["y"]));
    }

    #[test]
    fn equal_sets_yield_empty_both_ways() {
        let list = strings(&["a", "b"]);
        assert!(elements_to_add_or_remove(&list, &list, true).is_empty());
        assert!(elements_to_add_or_remove(&list, &list, false).is_empty());
    }
}
