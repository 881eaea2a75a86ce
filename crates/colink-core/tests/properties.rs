use colink_core::{compute, compute_with_config, AdjacencyMatrix, CommonLinkConfig};
use proptest::prelude::*;

fn square_bool_matrix(max_n: usize) -> impl Strategy<Value = (usize, Vec<bool>)> {
    (0..=max_n).prop_flat_map(|n| (Just(n), prop::collection::vec(any::<bool>(), n * n)))
}

fn naive(n: usize, cells: &[bool]) -> Vec<u32> {
    let mut out = vec![0u32; n * n];
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                if cells[i * n + k] && cells[k * n + j] {
                    out[i * n + j] += 1;
                }
            }
        }
    }
    out
}

fn symmetrize(n: usize, cells: &[bool]) -> Vec<bool> {
    (0..n * n)
        .map(|idx| {
            let (i, j) = (idx / n, idx % n);
            cells[i * n + j] || cells[j * n + i]
        })
        .collect()
}

proptest! {
    #[test]
    fn output_is_n_by_n((n, cells) in square_bool_matrix(12)) {
        let links = compute(&AdjacencyMatrix::square(n, cells).unwrap()).unwrap();
        prop_assert_eq!(links.len(), n);
        prop_assert_eq!(links.as_slice().len(), n * n);
    }

    #[test]
    fn matches_triple_loop((n, cells) in square_bool_matrix(12)) {
        let expected = naive(n, &cells);
        let links = compute(&AdjacencyMatrix::square(n, cells).unwrap()).unwrap();
        prop_assert_eq!(links.as_slice(), expected.as_slice());
    }

    #[test]
    fn symmetric_input_gives_symmetric_output((n, cells) in square_bool_matrix(12)) {
        let adj = AdjacencyMatrix::square(n, symmetrize(n, &cells)).unwrap();
        prop_assert!(adj.is_symmetric().unwrap());
        prop_assert!(compute(&adj).unwrap().is_symmetric());
    }

    #[test]
    fn diagonal_counts_self_return_paths((n, cells) in square_bool_matrix(12)) {
        let links = compute(&AdjacencyMatrix::square(n, cells.clone()).unwrap()).unwrap();
        for i in 0..n {
            let expected = (0..n).filter(|&k| cells[i * n + k] && cells[k * n + i]).count() as u32;
            prop_assert_eq!(links.get(i, i), Some(expected));
        }
    }

    #[test]
    fn labels_are_preserved((n, cells) in square_bool_matrix(10)) {
        let rows: Vec<String> = (0..n).map(|i| format!("r{}", i)).collect();
        let cols: Vec<String> = (0..n).rev().map(|i| format!("c{}", i)).collect();
        let adj = AdjacencyMatrix::square(n, cells)
            .unwrap()
            .with_row_labels(rows.clone())
            .unwrap()
            .with_col_labels(cols.clone())
            .unwrap();

        let links = compute(&adj).unwrap();
        prop_assert_eq!(links.row_labels().unwrap(), rows.as_slice());
        prop_assert_eq!(links.col_labels().unwrap(), cols.as_slice());
    }

    #[test]
    fn parallel_matches_sequential((n, cells) in square_bool_matrix(24)) {
        let adj = AdjacencyMatrix::square(n, cells).unwrap();
        let parallel = CommonLinkConfig::new().with_parallel_threshold(1);
        let sequential = CommonLinkConfig::new().sequential();
        prop_assert_eq!(
            compute_with_config(&adj, &parallel).unwrap(),
            compute_with_config(&adj, &sequential).unwrap()
        );
    }
}

#[test]
fn zero_matrix_gives_zero_output() {
    for n in 0..16 {
        let adj = AdjacencyMatrix::square(n, vec![0i32; n * n]).unwrap();
        let links = compute(&adj).unwrap();
        assert!(links.as_slice().iter().all(|&c| c == 0));
    }
}

#[test]
fn identity_matrix_gives_identity() {
    for n in 1..16 {
        let data: Vec<bool> = (0..n * n).map(|idx| idx / n == idx % n).collect();
        let expected: Vec<u32> = data.iter().map(|&b| b as u32).collect();
        let links = compute(&AdjacencyMatrix::square(n, data).unwrap()).unwrap();
        assert_eq!(links.as_slice(), expected.as_slice());
    }
}

#[test]
fn input_is_not_mutated() {
    let adj = AdjacencyMatrix::from_rows(vec![vec![0.5, 0.0], vec![2.0, 1.0]]).unwrap();
    let before = adj.clone();
    compute(&adj).unwrap();
    assert_eq!(adj, before);
}
