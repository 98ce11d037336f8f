use proptest::prelude::*;
use streams::prelude::*;

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1000..1000_i32, 0..64)
}

proptest! {
    #[test]
    fn prop_range_collects_ascending(a in -500..500_i64, b in -500..500_i64) {
        let got = range(a, b).collect();
        let want: Vec<i64> = (a..b).collect();
        prop_assert_eq!(got.len() as i64, (b - a).max(0));
        prop_assert_eq!(got, want);
    }

    #[test]
    fn prop_sum_is_triangular(n in 0..5000_u64) {
        prop_assert_eq!(reduce(range(0, n), 0, |acc, x| acc + x), n * n.saturating_sub(1) / 2);
    }

    #[test]
    fn prop_map_commutes_with_collect(data in small_vec()) {
        let f = |x: i32| x.wrapping_mul(3) - 7;
        let mapped = map(from_iter(data.clone()), f).collect();
        let want: Vec<i32> = from_iter(data).collect().into_iter().map(f).collect();
        prop_assert_eq!(mapped, want);
    }

    #[test]
    fn prop_filter_keeps_exactly_matching(data in small_vec(), modulus in 1..7_i32) {
        let pred = |x: &i32| x.rem_euclid(modulus) == 0;
        let kept = filter(from_iter(data.clone()), pred).collect();
        let want: Vec<i32> = data.into_iter().filter(|x| pred(x)).collect();
        prop_assert_eq!(kept, want);
    }

    #[test]
    fn prop_zip_is_positionally_aligned(a in small_vec(), b in small_vec()) {
        let pairs = zip(elements(&a), elements(&b)).collect();
        prop_assert_eq!(pairs.len(), a.len().min(b.len()));
        for (i, pair) in pairs.iter().enumerate() {
            prop_assert_eq!(*pair.first, a[i]);
            prop_assert_eq!(*pair.second, b[i]);
        }
    }

    #[test]
    fn prop_take_is_prefix(data in small_vec(), n in 0..80_usize) {
        let taken = take(from_iter(data.clone()), n);
        prop_assert_eq!(taken.len(), n.min(data.len()));
        prop_assert_eq!(&taken[..], &data[..taken.len()]);
    }

    #[test]
    fn prop_for_each_control_stops_at_first_break(data in small_vec(), stop in -1000..1000_i32) {
        let mut seen = Vec::new();
        for_each_control(elements(&data), |x| {
            seen.push(*x);
            if *x == stop { Control::Break } else { Control::Continue }
        });
        let want = match data.iter().position(|x| *x == stop) {
            Some(i) => &data[..=i],
            None => &data[..],
        };
        prop_assert_eq!(&seen[..], want);
    }

    #[test]
    fn prop_enumerate_pairs_index_with_element(data in small_vec()) {
        let got = enumerate(&data).collect();
        prop_assert_eq!(got.len(), data.len());
        for (i, item) in got.into_iter().enumerate() {
            prop_assert_eq!(item.index, i);
            prop_assert_eq!(*item.value, data[i]);
        }
    }

    #[test]
    fn prop_chain_concatenates(a in small_vec(), b in small_vec()) {
        let got = chain(from_iter(a.clone()), from_iter(b.clone())).collect();
        let want: Vec<i32> = a.into_iter().chain(b).collect();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn prop_fill_writes_prefix(data in small_vec(), len in 0..80_usize) {
        let mut buf = vec![i32::MIN; len];
        let written = fill(&mut buf, from_iter(data.clone()));
        prop_assert_eq!(written, len.min(data.len()));
        prop_assert_eq!(&buf[..written], &data[..written]);
        prop_assert!(buf[written..].iter().all(|x| *x == i32::MIN));
    }
}

#[test]
fn test_enumerate_xyz() {
    let letters = ["x", "y", "z"];
    let got = enumerate(&letters).map(|i| (i.index, *i.value));
    assert_eq!(got.collect(), vec![(0, "x"), (1, "y"), (2, "z")]);
}

#[test]
fn test_exhausted_streams_stay_done() {
    let data = [1, 2];
    let (tx, rx) = crossbeam_channel::unbounded::<i32>();
    drop(tx);

    let mut streams: Vec<Box<dyn Stream<Item = i32> + '_>> = vec![
        range(0, 0).boxed(),
        elements(&data).map(|x| *x).filter(|_| false).boxed(),
        receive(rx).boxed(),
        zip(range(0, 1), empty::<i32>()).map(|p| p.first).boxed(),
        chain(empty(), range(0, 0)).boxed(),
        from_fn(|| Step::Done).fuse().boxed(),
    ];
    for s in &mut streams {
        for _ in 0..3 {
            assert_eq!(s.advance(), Step::Done);
        }
    }
}
