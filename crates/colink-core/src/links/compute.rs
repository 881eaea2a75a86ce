//! Common-link kernel: the boolean square of an adjacency matrix.

use crate::error::{ColinkError, Result};
use crate::links::CommonLinkConfig;
use crate::matrix::{AdjacencyMatrix, CommonLinkMatrix};
use crate::types::{LinkCount, Truthy};
use rayon::prelude::*;

/// Compute the common-link matrix with the default configuration.
///
/// Entry (i, j) of the result counts the intermediaries k with A(i, k) and
/// A(k, j) both truthy. Self-loops count as intermediaries. Labels are
/// copied from `adj` unchanged.
///
/// # Errors
/// - [`ColinkError::Shape`] if `adj` is not square.
/// - [`ColinkError::NotTruthy`] if an entry has no boolean reading.
/// - [`ColinkError::TooLarge`] if the node count exceeds the configured bound.
/// - [`ColinkError::Validation`] if the configuration is invalid.
pub fn compute<T: Truthy>(adj: &AdjacencyMatrix<T>) -> Result<CommonLinkMatrix> {
    compute_with_config(adj, &CommonLinkConfig::default())
}

/// Compute the common-link matrix with an explicit configuration.
pub fn compute_with_config<T: Truthy>(
    adj: &AdjacencyMatrix<T>,
    config: &CommonLinkConfig,
) -> Result<CommonLinkMatrix> {
    config.validate()?;

    if !adj.is_square() {
        return Err(ColinkError::Shape {
            rows: adj.rows(),
            cols: adj.cols(),
        });
    }

    let n = adj.rows();
    if n > config.max_nodes {
        return Err(ColinkError::TooLarge {
            nodes: n,
            max: config.max_nodes,
        });
    }

    // Everything is validated before the output is allocated.
    let cells = adj.to_bool()?;
    let (row_labels, col_labels) = adj.labels();

    if n == 0 {
        return Ok(CommonLinkMatrix::from_parts(0, Vec::new(), row_labels, col_labels));
    }

    // out[i] lists every k with an edge i→k, so row i of the result is the
    // sum of rows out[i] of the boolean matrix.
    let out: Vec<Vec<usize>> = cells
        .chunks(n)
        .map(|row| {
            row.iter()
                .enumerate()
                .filter_map(|(k, &edge)| edge.then_some(k))
                .collect()
        })
        .collect();

    let parallel = config.use_parallel(n);
    log::debug!(
        "Computing common links: nodes={}, edges={}, parallel={}",
        n,
        out.iter().map(Vec::len).sum::<usize>(),
        parallel
    );

    let fill_row = |(i, row): (usize, &mut [LinkCount])| {
        for &k in &out[i] {
            for &j in &out[k] {
                row[j] += 1;
            }
        }
    };

    let mut counts: Vec<LinkCount> = vec![0; n * n];
    if parallel {
        counts.par_chunks_mut(n).enumerate().for_each(fill_row);
    } else {
        counts.chunks_mut(n).enumerate().for_each(fill_row);
    }

    Ok(CommonLinkMatrix::from_parts(n, counts, row_labels, col_labels))
}
