//! Balanced contiguous partitioning.

/// Split `items` into exactly `group_count` contiguous groups whose sizes
/// differ by at most one, larger groups first.
///
/// Each step takes `ceil(remaining / groups_left)` items off the front,
/// so the partition is exhaustive: concatenating the groups reproduces
/// the input. `group_count` of zero yields no groups; a `group_count`
/// beyond the item count yields singleton groups followed by empty ones.
pub fn partition_into_balanced_groups<T>(items: &[T], group_count: usize) -> Vec<&[T]> {
    let mut groups = Vec::with_capacity(group_count);
    let mut rest = items;

    for groups_left in (1..=group_count).rev() {
        let mut chunk = rest.len() / groups_left;
        if rest.len() % groups_left > 0 {
            chunk += 1;
        }
        let (head, tail) = rest.split_at(chunk.min(rest.len()));
        groups.push(head);
        rest = tail;
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(groups: &[&[u32]]) -> Vec<usize> {
        groups.iter().map(|g| g.len()).collect()
    }

    #[test]
    fn even_split() {
        let items: Vec<u32> = (0..4).collect();
        let groups = partition_into_balanced_groups(&items, 2);
        assert_eq!(sizes(&groups), [2, 2]);
        assert_eq!(groups[0], [0, 1]);
        assert_eq!(groups[1], [2, 3]);
    }

    #[test]
    fn remainder_goes_to_leading_groups() {
        let items: Vec<u32> = (0..5).collect();
        let groups = partition_into_balanced_groups(&items, 2);
        assert_eq!(sizes(&groups), [3, 2]);

        let items: Vec<u32> = (0..7).collect();
        let groups = partition_into_balanced_groups(&items, 3);
        assert_eq!(sizes(&groups), [3, 2, 2]);
    }

    #[test]
    fn single_group_takes_everything() {
        let items: Vec<u32> = (0..6).collect();
        let groups = partition_into_balanced_groups(&items, 1);
        assert_eq!(sizes(&groups), [6]);
        assert_eq!(groups[0], items.as_slice());
    }

    #[test]
    fn zero_groups_yields_nothing() {
        let items: Vec<u32> = (0..3).collect();
        assert!(partition_into_balanced_groups(&items, 0).is_empty());
    }

    #[test]
    fn more_groups_than_items() {
        let items: Vec<u32> = (0..2).collect();
        let groups = partition_into_balanced_groups(&items, 4);
        assert_eq!(sizes(&groups), [1, 1, 0, 0]);
    }

    #[test]
    fn partition_is_exhaustive_and_balanced() {
        for len in 0..40usize {
            let items: Vec<u32> = (0..len as u32).collect();
            for group_count in 1..10usize {
                if len < group_count {
                    continue;
                }
                let groups = partition_into_balanced_groups(&items, group_count);
                assert_eq!(groups.len(), group_count);

                let total: usize = groups.iter().map(|g| g.len()).sum();
                assert_eq!(total, len, "len={len} groups={group_count}");

                let max = groups.iter().map(|g| g.len()).max().unwrap();
                let min = groups.iter().map(|g| g.len()).min().unwrap();
                assert!(max - min <= 1, "len={len} groups={group_count}");

                let rejoined: Vec<u32> = groups.iter().flat_map(|g| g.iter().copied()).collect();
                assert_eq!(rejoined, items);
            }
        }
    }
}
