use crate::config::EdgePolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    LeftEdge,
    RightEdge,
}

/// Result of bounding one occurrence. `start..end` is a byte range of the
/// document that always falls on char boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowScan {
    Window { start: usize, end: usize },
    Skipped(SkipReason),
}

/// Bounds the occurrence at byte `offset` by `search_range + 1` spaces on
/// each side. Both walks start one byte away from `offset`.
pub fn scan_window(
    document: &str,
    offset: usize,
    search_range: usize,
    policy: EdgePolicy,
) -> WindowScan {
    let bytes = document.as_bytes();

    let start = match left_boundary(bytes, offset, search_range) {
        Some(space) => space + 1,
        None => match policy {
            EdgePolicy::Clamp => 0,
            EdgePolicy::Skip => return WindowScan::Skipped(SkipReason::LeftEdge),
        },
    };

    let end = match right_boundary(bytes, offset, search_range) {
        Some(space) => space,
        None => match policy {
            EdgePolicy::Clamp => bytes.len(),
            EdgePolicy::Skip => return WindowScan::Skipped(SkipReason::RightEdge),
        },
    };

    WindowScan::Window { start, end }
}

/// Index of the `(skip + 1)`-th space found walking left from `offset - 1`.
fn left_boundary(bytes: &[u8], offset: usize, skip: usize) -> Option<usize> {
    let limit = offset.min(bytes.len());
    bytes[..limit]
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, &b)| b == b' ')
        .nth(skip)
        .map(|(i, _)| i)
}

/// Index of the `(skip + 1)`-th space found walking right from `offset + 1`.
fn right_boundary(bytes: &[u8], offset: usize, skip: usize) -> Option<usize> {
    bytes
        .iter()
        .enumerate()
        .skip(offset.saturating_add(1))
        .filter(|(_, &b)| b == b' ')
        .nth(skip)
        .map(|(i, _)| i)
}
