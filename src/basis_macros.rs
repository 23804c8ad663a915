macro_rules! hermite_basis {
    ($type:ident) => {
        impl Basis<$type> for Hermite {
            // Columns are p0, v0, p1, v1; rows the t³, t², t and 1
            // coefficients.
            const MATRIX: [[$type; 4]; 4] = [
                [2., 1., -2., 1.],
                [-3., -2., 3., -1.],
                [0., 1., 0., 0.],
                [1., 0., 0., 0.],
            ];

            #[inline]
            fn weights(t: $type) -> [$type; 4] {
                let t2 = t * t;
                let t3 = t2 * t;
                [
                    2.0 * t3 - 3.0 * t2 + 1.0,
                    t3 - 2.0 * t2 + t,
                    -2.0 * t3 + 3.0 * t2,
                    t3 - t2,
                ]
            }
        }
    };
}
