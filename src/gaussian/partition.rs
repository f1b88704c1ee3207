// Copyright (c) Radzivon Bartoshyk. All rights reserved.
//
// Redistribution and use in source and binary forms, with or without modification,
// are permitted provided that the following conditions are met:
//
// 1.  Redistributions of source code must retain the above copyright notice, this
// list of conditions and the following disclaimer.
//
// 2.  Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3.  Neither the name of the copyright holder nor the names of its
// contributors may be used to endorse or promote products derived from
// this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use std::ops::Range;

/// Splits `0..total` into `parts` contiguous ranges with boundaries at `k * total / parts`.
///
/// The ranges are in order, never overlap and cover every index exactly once.
/// When `total` is smaller than `parts` some of the ranges are empty.
/// `parts == 0` is treated as a single part.
pub fn partition(total: usize, parts: usize) -> Vec<Range<usize>> {
    let parts = parts.max(1);
    let boundary = |k: usize| -> usize {
        // k * total / parts without overflowing on huge totals
        ((k as u128 * total as u128) / parts as u128) as usize
    };
    (0..parts).map(|k| boundary(k)..boundary(k + 1)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_exact_cover(total: usize, parts: usize) {
        let ranges = partition(total, parts);
        assert_eq!(ranges.len(), parts.max(1));
        let mut seen = vec![0u8; total];
        for range in ranges.iter() {
            assert!(range.start <= range.end);
            for i in range.clone() {
                seen[i] += 1;
            }
        }
        assert!(
            seen.iter().all(|&v| v == 1),
            "Every index must be covered once for total {total} parts {parts}"
        );
        assert_eq!(ranges.first().map(|r| r.start), Some(0));
        assert_eq!(ranges.last().map(|r| r.end), Some(total));
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_partition_covers_all() {
        for total in 0..200 {
            for parts in 1..9 {
                assert_exact_cover(total, parts);
            }
        }
    }

    #[test]
    fn test_partition_boundaries() {
        assert_eq!(partition(10, 4), vec![0..2, 2..5, 5..7, 7..10]);
        assert_eq!(partition(16, 4), vec![0..4, 4..8, 8..12, 12..16]);
    }

    #[test]
    fn test_partition_small_total() {
        assert_eq!(partition(3, 4), vec![0..0, 0..1, 1..2, 2..3]);
        assert_eq!(partition(0, 4), vec![0..0, 0..0, 0..0, 0..0]);
    }

    #[test]
    fn test_partition_zero_parts() {
        assert_eq!(partition(5, 0), vec![0..5]);
    }
}
