//! Stack growth for deeply nested input.
//!
//! Type expressions nest through parentheses, records and tuples, and the
//! parser descends into each level recursively. A hostile or generated file
//! with thousands of nested parentheses would overflow the native stack, so
//! the recursive entry points run inside [`ensure_sufficient_stack`].
//!
//! On native targets this grows the stack with `stacker`; on WASM it calls
//! the closure directly.

/// Grow when less than this much stack remains.
pub const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment.
pub const GROWTH: usize = 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Nested {
        inner: Option<Box<Nested>>,
    }

    // Unlink iteratively so dropping a deep chain does not recurse.
    impl Drop for Nested {
        fn drop(&mut self) {
            let mut next = self.inner.take();
            while let Some(mut node) = next {
                next = node.inner.take();
            }
        }
    }

    fn build(depth: usize) -> Nested {
        let mut node = Nested { inner: None };
        for _ in 0..depth {
            node = Nested {
                inner: Some(Box::new(node)),
            };
        }
        node
    }

    fn depth(node: &Nested) -> usize {
        ensure_sufficient_stack(|| match &node.inner {
            None => 0,
            Some(inner) => depth(inner) + 1,
        })
    }

    #[test]
    fn test_shallow_nesting() {
        assert_eq!(depth(&build(3)), 3);
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        assert_eq!(depth(&build(200_000)), 200_000);
    }

    #[test]
    fn test_passes_result_through() {
        let result: Result<u8, String> = ensure_sufficient_stack(|| Ok(9));
        assert_eq!(result, Ok(9));
    }
}
