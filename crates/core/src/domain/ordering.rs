// Queue Ordering Engine
//
// Pure functions over an ordered sequence of recipe references. No I/O.
// Every mutating function returns a new sequence and leaves the input alone,
// so a failed operation can never leak a half-applied order to the store.

use super::error::{DomainError, Result};
use super::queue::RecipeId;

/// Append `recipe_id` at the end. Never fails and never deduplicates.
pub fn append(sequence: &[RecipeId], recipe_id: RecipeId) -> Vec<RecipeId> {
    let mut appended = Vec::with_capacity(sequence.len() + 1);
    appended.extend_from_slice(sequence);
    appended.push(recipe_id);
    appended
}

/// First element, or `None` when the sequence is empty.
///
/// `None` is the empty signal; `Some(0)` is a legitimate recipe reference.
pub fn peek_first(sequence: &[RecipeId]) -> Option<RecipeId> {
    sequence.first().copied()
}

/// Remove the first occurrence of `recipe_id`, keeping everything else in order.
///
/// Later duplicates are left untouched. The result is exactly one element
/// shorter than the input.
pub fn remove_first_match(sequence: &[RecipeId], recipe_id: RecipeId) -> Result<Vec<RecipeId>> {
    let index = first_index_of(sequence, recipe_id)?;

    let mut remaining = Vec::with_capacity(sequence.len() - 1);
    remaining.extend_from_slice(&sequence[..index]);
    remaining.extend_from_slice(&sequence[index + 1..]);
    Ok(remaining)
}

/// Relocate the first occurrence of `recipe_id` to `target`.
///
/// Valid targets are the insertion slots left after taking the recipe out,
/// i.e. `0..=len - 1` of the original sequence. Out-of-range targets are
/// rejected, never clamped. Moving a recipe onto its own index is a no-op.
pub fn move_to_position(
    sequence: &[RecipeId],
    recipe_id: RecipeId,
    target: i64,
) -> Result<Vec<RecipeId>> {
    let current = first_index_of(sequence, recipe_id)?;

    // sequence is non-empty here, so max >= 0
    let max = sequence.len() as i64 - 1;
    if !(0..=max).contains(&target) {
        return Err(DomainError::InvalidPosition {
            position: target,
            max,
        });
    }

    let mut reordered = sequence.to_vec();
    let recipe = reordered.remove(current);
    reordered.insert(target as usize, recipe);
    Ok(reordered)
}

fn first_index_of(sequence: &[RecipeId], recipe_id: RecipeId) -> Result<usize> {
    sequence
        .iter()
        .position(|&r| r == recipe_id)
        .ok_or(DomainError::NotPresent(recipe_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_append_to_empty_creates_single_element() {
        assert_eq!(append(&[], 42), vec![42]);
    }

    #[test]
    fn test_append_keeps_duplicates() {
        assert_eq!(append(&[5, 7], 5), vec![5, 7, 5]);
    }

    #[test]
    fn test_peek_first() {
        assert_eq!(peek_first(&[5, 7, 9]), Some(5));
        assert_eq!(peek_first(&[]), None);
        // reference 0 is distinguishable from "empty"
        assert_eq!(peek_first(&[0]), Some(0));
    }

    #[test]
    fn test_remove_middle_element() {
        assert_eq!(remove_first_match(&[5, 7, 9], 7).unwrap(), vec![5, 9]);
    }

    #[test]
    fn test_remove_only_first_duplicate() {
        assert_eq!(
            remove_first_match(&[3, 5, 3, 5], 5).unwrap(),
            vec![3, 3, 5]
        );
    }

    #[test]
    fn test_remove_from_empty_is_not_present() {
        assert_eq!(
            remove_first_match(&[], 1),
            Err(DomainError::NotPresent(1))
        );
    }

    #[test]
    fn test_remove_absent_is_not_present() {
        assert_eq!(
            remove_first_match(&[5, 7, 9], 8),
            Err(DomainError::NotPresent(8))
        );
    }

    #[test]
    fn test_move_last_to_front() {
        assert_eq!(move_to_position(&[5, 7, 9], 9, 0).unwrap(), vec![9, 5, 7]);
    }

    #[test]
    fn test_move_front_to_last() {
        assert_eq!(move_to_position(&[5, 7, 9], 5, 2).unwrap(), vec![7, 9, 5]);
    }

    #[test]
    fn test_move_to_own_index_is_noop() {
        assert_eq!(move_to_position(&[5, 7, 9], 7, 1).unwrap(), vec![5, 7, 9]);
        assert_eq!(move_to_position(&[5], 5, 0).unwrap(), vec![5]);
    }

    #[test]
    fn test_move_single_element_out_of_range() {
        assert_eq!(
            move_to_position(&[5], 5, 3),
            Err(DomainError::InvalidPosition {
                position: 3,
                max: 0
            })
        );
    }

    #[test]
    fn test_move_negative_position() {
        assert!(matches!(
            move_to_position(&[5, 7], 7, -1),
            Err(DomainError::InvalidPosition { position: -1, .. })
        ));
    }

    #[test]
    fn test_move_relocates_first_duplicate_only() {
        assert_eq!(
            move_to_position(&[1, 4, 2, 4], 4, 3).unwrap(),
            vec![1, 2, 4, 4]
        );
        assert_eq!(
            move_to_position(&[1, 2, 4, 3, 4], 4, 0).unwrap(),
            vec![4, 1, 2, 3, 4]
        );
    }

    #[test]
    fn test_move_checks_presence_before_position() {
        assert_eq!(
            move_to_position(&[], 5, 99),
            Err(DomainError::NotPresent(5))
        );
        assert_eq!(
            move_to_position(&[1, 2], 5, 99),
            Err(DomainError::NotPresent(5))
        );
    }

    fn sorted(mut v: Vec<RecipeId>) -> Vec<RecipeId> {
        v.sort_unstable();
        v
    }

    proptest! {
        #[test]
        fn prop_remove_absent_is_not_present(
            seq in prop::collection::vec(0i64..50, 0..20),
            r in 50i64..100,
        ) {
            prop_assert_eq!(remove_first_match(&seq, r), Err(DomainError::NotPresent(r)));
        }

        #[test]
        fn prop_append_then_remove_round_trips(
            seq in prop::collection::vec(0i64..50, 0..20),
            r in 50i64..100,
        ) {
            let appended = append(&seq, r);
            prop_assert_eq!(remove_first_match(&appended, r).unwrap(), seq);
        }

        #[test]
        fn prop_peek_first_is_head(seq in prop::collection::vec(any::<i64>(), 1..20)) {
            prop_assert_eq!(peek_first(&seq), Some(seq[0]));
        }

        #[test]
        fn prop_remove_shrinks_by_exactly_one(
            seq in prop::collection::vec(0i64..5, 1..20),
            pick in any::<prop::sample::Index>(),
        ) {
            let r = seq[pick.index(seq.len())];
            let remaining = remove_first_match(&seq, r).unwrap();
            prop_assert_eq!(remaining.len(), seq.len() - 1);
        }

        #[test]
        fn prop_move_preserves_multiset_and_length(
            seq in prop::collection::vec(0i64..5, 1..20),
            pick in any::<prop::sample::Index>(),
            target in any::<prop::sample::Index>(),
        ) {
            let r = seq[pick.index(seq.len())];
            let target = target.index(seq.len()) as i64;
            let moved = move_to_position(&seq, r, target).unwrap();

            prop_assert_eq!(moved.len(), seq.len());
            prop_assert_eq!(moved[target as usize], r);
            prop_assert_eq!(sorted(moved.clone()), sorted(seq.clone()));
        }

        #[test]
        fn prop_move_keeps_relative_order_of_others(
            seq in prop::collection::vec(0i64..5, 1..20),
            pick in any::<prop::sample::Index>(),
            target in any::<prop::sample::Index>(),
        ) {
            let r = seq[pick.index(seq.len())];
            let target = target.index(seq.len()) as i64;
            let moved = move_to_position(&seq, r, target).unwrap();

            let mut others_before = seq.clone();
            let first = others_before.iter().position(|&x| x == r).unwrap();
            others_before.remove(first);
            let mut others_after = moved;
            others_after.remove(target as usize);
            prop_assert_eq!(others_after, others_before);
        }

        #[test]
        fn prop_move_past_end_is_invalid(
            seq in prop::collection::vec(0i64..5, 1..20),
            extra in 0i64..10,
        ) {
            let r = seq[0];
            let target = seq.len() as i64 + extra;
            let is_invalid = matches!(
                move_to_position(&seq, r, target),
                Err(DomainError::InvalidPosition { .. })
            );
            prop_assert!(is_invalid);
        }
    }
}
