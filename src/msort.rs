//! Top-down merge sort.
//! Stable: of two elements that compare equal, the one that came first stays first.
//! Uses one scratch buffer of at most half the slice length for the whole sort.

pub fn sort_by<T, F>(v: &mut [T], mut is_less: F)
    where T: Clone, F: FnMut(&T, &T) -> bool
{
    let mut scratch = Vec::with_capacity(v.len() / 2);
    sort_rec(v, &mut scratch, &mut is_less);
}

pub fn sort<T: Clone + Ord>(v: &mut [T]) {
    sort_by(v, |a, b| a < b);
}

fn sort_rec<T, F>(v: &mut [T], scratch: &mut Vec<T>, is_less: &mut F)
    where T: Clone, F: FnMut(&T, &T) -> bool
{
    if v.len() < 2 {
        return;
    }
    let mid = v.len() / 2;
    sort_rec(&mut v[..mid], scratch, is_less);
    sort_rec(&mut v[mid..], scratch, is_less);

    // Move the left run out of the way; the right run is merged in place from where it is.
    // The write position k = i + (j - mid) never passes j, so no unread element is overwritten.
    scratch.clear();
    scratch.extend_from_slice(&v[..mid]);
    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < scratch.len() && j < v.len() {
        // Take from the right only when strictly smaller, so equal elements keep their order
        if is_less(&v[j], &scratch[i]) {
            v[k] = v[j].clone();
            j += 1;
        } else {
            v[k] = scratch[i].clone();
            i += 1;
        }
        k += 1;
    }
    // Whatever is left of the right run is already in its final place
    for x in scratch.drain(i..) {
        v[k] = x;
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use rand::distributions::{Distribution, Uniform};

    use super::{sort, sort_by};

    #[test]
    fn small_cases() {
        let mut empty: [i32; 0] = [];
        sort(&mut empty);
        let mut one = [4];
        sort(&mut one);
        assert_eq!(one, [4]);
        let mut v = [5, 3, 8, 1];
        sort(&mut v);
        assert_eq!(v, [1, 3, 5, 8]);
        let mut v = [2, -1, 2, i32::MAX, i32::MIN, 0];
        sort(&mut v);
        assert_eq!(v, [i32::MIN, -1, 0, 2, 2, i32::MAX]);
    }

    #[test]
    fn stable() {
        // sort on the key only, the tag records the original position
        let mut v: Vec<(i32, usize)> = [3, 1, 3, 2, 1, 3].into_iter().enumerate().map(|(i, k)| (k, i)).collect();
        sort_by(&mut v, |a, b| a.0 < b.0);
        assert_eq!(v, [(1, 1), (1, 4), (2, 3), (3, 0), (3, 2), (3, 5)]);
    }

    #[test]
    fn matches_std() {
        let mut rng = rand::thread_rng();
        let len_dist = Uniform::new_inclusive(0usize, 500);
        let val_dist = Uniform::new_inclusive(-100, 100);
        for _ in 0..100 {
            let len = len_dist.sample(&mut rng);
            let mut v: Vec<i32> = (0..len).map(|_| val_dist.sample(&mut rng)).collect();
            let mut expected = v.clone();
            expected.sort();
            sort(&mut v);
            assert_eq!(v, expected);
        }
    }
}
