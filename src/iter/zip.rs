use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::buffer::BufferRef;

// One struct + constructor + iterator impl per input count. Items are
// `(index, a_i, b_i, ...)`; iteration stops at the shortest input.
macro_rules! impl_zip {
    (@elem $B:ident $T:ident) => { $T };
    ($(#[$meta:meta])* $name:ident, $ctor:ident; $($field:ident: $B:ident),+) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<T, $($B),+> {
            $($field: $B,)+
            pos: usize,
            end: usize,
            _elem: PhantomData<fn() -> T>,
        }

        $(#[$meta])*
        pub fn $ctor<T: Copy, $($B: BufferRef<T>),+>($($field: $B),+) -> $name<T, $($B),+> {
            let end = [$($field.len()),+].into_iter().min().unwrap_or(0);
            $name {
                $($field,)+
                pos: 0,
                end,
                _elem: PhantomData,
            }
        }

        impl<T: Copy, $($B: BufferRef<T>),+> Iterator for $name<T, $($B),+> {
            type Item = (usize, $(impl_zip!(@elem $B T)),+);

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                if self.pos >= self.end {
                    return None;
                }
                let i = self.pos;
                self.pos += 1;
                Some((i, $(*self.$field.get(i)?),+))
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                let n = self.end - self.pos;
                (n, Some(n))
            }
        }

        impl<T: Copy, $($B: BufferRef<T>),+> ExactSizeIterator for $name<T, $($B),+> {}

        impl<T: Copy, $($B: BufferRef<T>),+> FusedIterator for $name<T, $($B),+> {}
    };
}

impl_zip!(
    /// Walk two buffers in lock step, yielding `(i, a[i], b[i])`.
    ///
    /// ```
    /// use linbuf::iter::zip2;
    /// let a = [1, -2, 3, -4];
    /// let b = [-1, 2, -3, 4];
    /// let v: Vec<_> = zip2(&a, &b).collect();
    /// assert_eq!(v, vec![(0, 1, -1), (1, -2, 2), (2, 3, -3), (3, -4, 4)]);
    /// ```
    Zip2, zip2; a: A, b: B
);

impl_zip!(
    /// Walk three buffers in lock step, yielding `(i, a[i], b[i], c[i])`.
    Zip3, zip3; a: A, b: B, c: C
);

impl_zip!(
    /// Walk four buffers in lock step, yielding `(i, a[i], b[i], c[i], d[i])`.
    Zip4, zip4; a: A, b: B, c: C, d: D
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view;

    #[test]
    fn stops_at_shortest() {
        let a = [1.0_f64, 2.0, 3.0];
        let b = [10.0_f64, 20.0];
        let c = [100.0_f64, 200.0, 300.0, 400.0];
        let z = zip3(&a, &b, &c);
        assert_eq!(z.len(), 2);
        let v: Vec<_> = z.collect();
        assert_eq!(v, vec![(0, 1.0, 10.0, 100.0), (1, 2.0, 20.0, 200.0)]);
    }

    #[test]
    fn zip_over_views() {
        // Split interleaved x/y pairs and zip them back together.
        let xy = [1, 10, 2, 20, 3, 30];
        let xs = view::stride(&xy, 0, 2, 3).unwrap();
        let ys = view::stride(&xy, 1, 2, 3).unwrap();
        let rev = view::reverse(&xy, 3).unwrap();
        let w = [7, 7, 7];
        let v: Vec<_> = zip4(xs, ys, rev, &w).collect();
        assert_eq!(
            v,
            vec![(0, 1, 10, 2, 7), (1, 2, 20, 10, 7), (2, 3, 30, 1, 7)]
        );
    }

    #[test]
    fn empty_input() {
        let a: [u8; 0] = [];
        let b = [1u8, 2];
        assert_eq!(zip2(&a, &b).next(), None);
    }
}
