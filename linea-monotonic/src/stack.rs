//! Monotonic-stack scans.
//!
//! Every scan walks left to right with an [`ArrayStack`] of indices still
//! waiting for an answer. When the current value beats the value at the top
//! index, that index is resolved and popped; the current index is pushed
//! afterwards. Indices left on the stack at the end have no answer.

use linea_collections::{ArrayStack, Stack};

/// Pops the top index if `resolves` accepts it.
#[inline]
fn pop_if(stack: &mut ArrayStack<usize>, resolves: impl Fn(usize) -> bool) -> Option<usize> {
    match stack.peek() {
        Ok(&top) if resolves(top) => stack.pop().ok(),
        _ => None,
    }
}

/// Runs one scan, calling `resolve(waiting, current)` for every index pair
/// where `beats(values[current], values[waiting])` first holds.
fn scan<T>(
    values: &[T],
    beats: impl Fn(&T, &T) -> bool,
    mut resolve: impl FnMut(usize, usize),
) {
    let mut stack = ArrayStack::new();
    for (i, value) in values.iter().enumerate() {
        while let Some(waiting) = pop_if(&mut stack, |top| beats(value, &values[top])) {
            resolve(waiting, i);
        }
        stack.push(i);
    }
}

/// For each position, the first strictly greater value to its right.
///
/// ```
/// use linea_monotonic::next_greater_element;
///
/// assert_eq!(
///     next_greater_element(&[2, 1, 2, 4, 3]),
///     vec![Some(4), Some(2), Some(4), None, None],
/// );
/// ```
pub fn next_greater_element<T: PartialOrd + Clone>(nums: &[T]) -> Vec<Option<T>> {
    let mut answer = vec![None; nums.len()];
    scan(nums, |current, waiting| waiting < current, |waiting, i| {
        answer[waiting] = Some(nums[i].clone());
    });
    answer
}

/// For each position, the first strictly smaller value to its right.
pub fn next_smaller_element<T: PartialOrd + Clone>(nums: &[T]) -> Vec<Option<T>> {
    let mut answer = vec![None; nums.len()];
    scan(nums, |current, waiting| waiting > current, |waiting, i| {
        answer[waiting] = Some(nums[i].clone());
    });
    answer
}

/// For each day, how many days until a strictly warmer one; 0 if none.
pub fn daily_temperatures<T: PartialOrd>(temps: &[T]) -> Vec<usize> {
    let mut answer = vec![0; temps.len()];
    scan(temps, |current, waiting| waiting < current, |waiting, i| {
        answer[waiting] = i - waiting;
    });
    answer
}

/// Area of the largest axis-aligned rectangle under a histogram of
/// unit-width bars.
///
/// The stack holds bars of non-decreasing height. A lower bar closes every
/// taller bar above it: the closed bar's rectangle spans from just after the
/// new stack top to just before the current bar. A virtual zero-height bar
/// past the end closes whatever is left.
///
/// ```
/// use linea_monotonic::largest_rectangle_area;
///
/// assert_eq!(largest_rectangle_area(&[2, 1, 5, 6, 2, 3]), 10);
/// ```
pub fn largest_rectangle_area(heights: &[u64]) -> u64 {
    let n = heights.len();
    let mut stack = ArrayStack::new();
    let mut best = 0;

    for i in 0..=n {
        let height = heights.get(i).copied().unwrap_or(0);
        while let Some(bar) = pop_if(&mut stack, |top| height < heights[top]) {
            let width = match stack.peek() {
                Ok(&left) => i - left - 1,
                Err(_) => i,
            };
            best = best.max(heights[bar].saturating_mul(width as u64));
        }
        stack.push(i);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_greater_basic() {
        assert_eq!(
            next_greater_element(&[2, 1, 2, 4, 3]),
            vec![Some(4), Some(2), Some(4), None, None]
        );
    }

    #[test]
    fn next_greater_equal_values_do_not_resolve() {
        assert_eq!(next_greater_element(&[3, 3, 3]), vec![None, None, None]);
        assert_eq!(
            next_greater_element(&[1, 1, 2]),
            vec![Some(2), Some(2), None]
        );
    }

    #[test]
    fn next_greater_empty_and_single() {
        assert!(next_greater_element::<i32>(&[]).is_empty());
        assert_eq!(next_greater_element(&[7]), vec![None]);
    }

    #[test]
    fn next_smaller_basic() {
        assert_eq!(
            next_smaller_element(&[4, 5, 2, 10, 8]),
            vec![Some(2), Some(2), None, Some(8), None]
        );
    }

    #[test]
    fn next_greater_on_floats() {
        assert_eq!(
            next_greater_element(&[0.5, -1.0, 2.5]),
            vec![Some(2.5), Some(2.5), None]
        );
    }

    #[test]
    fn daily_temperatures_basic() {
        assert_eq!(
            daily_temperatures(&[73, 74, 75, 71, 69, 72, 76, 73]),
            vec![1, 1, 4, 2, 1, 1, 0, 0]
        );
    }

    #[test]
    fn daily_temperatures_monotone_inputs() {
        assert_eq!(daily_temperatures(&[30, 40, 50, 60]), vec![1, 1, 1, 0]);
        assert_eq!(daily_temperatures(&[60, 50, 40]), vec![0, 0, 0]);
    }

    #[test]
    fn largest_rectangle_basic() {
        assert_eq!(largest_rectangle_area(&[2, 1, 5, 6, 2, 3]), 10);
    }

    #[test]
    fn largest_rectangle_edge_shapes() {
        assert_eq!(largest_rectangle_area(&[]), 0);
        assert_eq!(largest_rectangle_area(&[0, 0]), 0);
        assert_eq!(largest_rectangle_area(&[4]), 4);
        assert_eq!(largest_rectangle_area(&[2, 4]), 4);
        assert_eq!(largest_rectangle_area(&[3, 3, 3]), 9);
        assert_eq!(largest_rectangle_area(&[1, 2, 3, 4, 5]), 9);
        assert_eq!(largest_rectangle_area(&[5, 4, 3, 2, 1]), 9);
    }
}
