use crate::Offset;

/// First index whose element equals `value`.
pub fn index_of<T, Q>(items: &[T], value: &Q) -> Option<usize>
where
    T: PartialEq<Q>,
    Q: ?Sized,
{
    items.iter().position(|item| item == value)
}

/// Index `offset` steps away from the first match, if it is in bounds.
pub fn index_at_offset<T, Q>(items: &[T], value: &Q, offset: Offset) -> Option<usize>
where
    T: PartialEq<Q>,
    Q: ?Sized,
{
    let target = offset.apply(index_of(items, value)?)?;
    (target < items.len()).then_some(target)
}

/// Element `offset` steps away from the first element equal to `value`.
///
/// A missing match and an out-of-bounds target both yield `None`; the scan
/// never panics and never mutates `items`.
pub fn element_at_offset<'a, T, Q>(items: &'a [T], value: &Q, offset: Offset) -> Option<&'a T>
where
    T: PartialEq<Q>,
    Q: ?Sized,
{
    index_at_offset(items, value, offset).and_then(|target| items.get(target))
}

pub fn has_element_at_offset<T, Q>(items: &[T], value: &Q, offset: Offset) -> bool
where
    T: PartialEq<Q>,
    Q: ?Sized,
{
    element_at_offset(items, value, offset).is_some()
}

pub fn previous_item<'a, T, Q>(items: &'a [T], value: &Q) -> Option<&'a T>
where
    T: PartialEq<Q>,
    Q: ?Sized,
{
    element_at_offset(items, value, Offset::PREVIOUS)
}

pub fn has_next_item<T, Q>(items: &[T], value: &Q) -> bool
where
    T: PartialEq<Q>,
    Q: ?Sized,
{
    has_element_at_offset(items, value, Offset::NEXT)
}

#[cfg(test)]
mod tests {
    use super::{
        element_at_offset, has_element_at_offset, has_next_item, index_at_offset, index_of,
        previous_item,
    };
    use crate::Offset;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct Friend {
        name: &'static str,
    }

    fn friends() -> Vec<Friend> {
        ["Ross", "Rachel", "Joey"]
            .into_iter()
            .map(|name| Friend { name })
            .collect()
    }

    #[rstest]
    #[case(&[1, 2, 3], 1, Offset::NEXT, Some(2))]
    #[case(&[1, 2, 3], 3, Offset::PREVIOUS, Some(2))]
    #[case(&[1, 2, 3], 1, Offset::PREVIOUS, None)]
    #[case(&[1, 2, 3], 3, Offset::NEXT, None)]
    #[case(&[1, 2, 3], 9, Offset::NEXT, None)]
    #[case(&[], 1, Offset::NEXT, None)]
    #[case(&[1, 2, 3], 2, Offset::new(0), Some(2))]
    #[case(&[1, 2, 3], 1, Offset::new(2), Some(3))]
    #[case(&[1, 2, 3], 1, Offset::new(3), None)]
    #[case(&[1, 2, 3], 2, Offset::new(isize::MAX), None)]
    #[case(&[1, 2, 3], 2, Offset::new(isize::MIN), None)]
    fn element_at_offset_cases(
        #[case] items: &[i32],
        #[case] value: i32,
        #[case] offset: Offset,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(element_at_offset(items, &value, offset).copied(), expected);
        assert_eq!(
            has_element_at_offset(items, &value, offset),
            expected.is_some()
        );
    }

    #[test]
    fn first_occurrence_wins() {
        let items = ['a', 'x', 'b', 'x', 'c'];
        assert_eq!(index_of(&items, &'x'), Some(1));
        assert_eq!(previous_item(&items, &'x'), Some(&'a'));
        assert_eq!(element_at_offset(&items, &'x', Offset::NEXT), Some(&'b'));
    }

    #[test]
    fn previous_item_of_strings() {
        let items = ["lemon", "kiwi", "peach"].map(String::from);
        assert_eq!(previous_item(&items, "peach").map(String::as_str), Some("kiwi"));
        assert_eq!(previous_item(&items, "lemon"), None);
    }

    #[test]
    fn structural_equality_matches_distinct_instance() {
        let items = friends();
        let rachel = Friend { name: "Rachel" };
        assert!(has_next_item(&items, &rachel));
        assert_eq!(previous_item(&items, &rachel), Some(&Friend { name: "Ross" }));
    }

    #[test]
    fn replaced_sequence_changes_result() {
        assert!(has_next_item(&[1, 2, 3], &1));
        assert!(!has_next_item(&[3, 2, 1], &1));

        assert_eq!(previous_item(&[1, 2, 3], &3), Some(&2));
        assert_eq!(previous_item(&[2, 1, 3], &3), Some(&1));
    }

    #[test]
    fn single_element_has_no_neighbours() {
        let items = [5];
        assert_eq!(element_at_offset(&items, &5, Offset::NEXT), None);
        assert_eq!(element_at_offset(&items, &5, Offset::PREVIOUS), None);
        assert_eq!(element_at_offset(&items, &5, Offset::new(0)), Some(&5));
    }

    #[test]
    fn element_and_index_agree_on_bounds() {
        let items = [1, 3, 1, 3];
        for raw in -5isize..=5 {
            let offset = Offset::new(raw);
            for value in [1, 3, 7] {
                assert_eq!(
                    element_at_offset(&items, &value, offset),
                    index_at_offset(&items, &value, offset).map(|idx| &items[idx])
                );
            }
        }
        assert_eq!(previous_item(&items, &3), Some(&1));
    }

    #[test]
    fn index_at_offset_stays_in_bounds() {
        let items = [10, 20, 30];
        assert_eq!(index_at_offset(&items, &20, Offset::NEXT), Some(2));
        assert_eq!(index_at_offset(&items, &30, Offset::NEXT), None);
        assert_eq!(index_at_offset(&items, &10, Offset::PREVIOUS), None);
    }

    proptest! {
        #[test]
        fn previous_is_element_before_first_match(
            items in prop::collection::vec(0u8..16, 1..24),
            pick in any::<prop::sample::Index>(),
        ) {
            let value = items[pick.index(items.len())];
            let first = items.iter().position(|item| *item == value);
            let expected = first.and_then(|idx| idx.checked_sub(1)).map(|idx| &items[idx]);
            prop_assert_eq!(previous_item(&items, &value), expected);
        }

        #[test]
        fn last_element_has_no_next(
            items in prop::collection::vec(0u8..16, 0..24),
            value in 0u8..16,
        ) {
            let mut items: Vec<u8> = items.into_iter().filter(|item| *item != value).collect();
            items.push(value);
            prop_assert!(!has_next_item(&items, &value));
        }

        #[test]
        fn missing_value_is_absent(
            items in prop::collection::vec(0u8..16, 0..24),
            offset in -4isize..4,
        ) {
            let offset = Offset::new(offset);
            prop_assert_eq!(element_at_offset(&items, &200u8, offset), None);
            prop_assert!(!has_element_at_offset(&items, &200u8, offset));
        }

        #[test]
        fn repeated_calls_agree(
            items in prop::collection::vec(0u8..16, 0..24),
            value in 0u8..16,
            offset in -4isize..4,
        ) {
            let offset = Offset::new(offset);
            prop_assert_eq!(
                element_at_offset(&items, &value, offset),
                element_at_offset(&items, &value, offset)
            );
        }
    }
}
