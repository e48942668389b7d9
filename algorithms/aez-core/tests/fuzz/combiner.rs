use aez_core::{xor2, xor3, xor4, Block};
use bolero::check;

#[test]
fn fuzz_combiner_laws() {
    check!()
        .with_type::<(Block, Block, Block, Block)>()
        .for_each(|(a, b, c, d)| {
            // =============================================================================
            // ALGEBRAIC LAWS
            // =============================================================================

            // 1. Commutativity
            assert_eq!(xor2(a, b), xor2(b, a), "xor2 is not commutative");

            // 2. Self-cancellation
            assert_eq!(xor2(a, a), [0u8; 16], "a ^ a must be zero");

            // 3. Identity
            assert_eq!(xor2(a, &[0u8; 16]), *a, "a ^ 0 must be a");

            // =============================================================================
            // WIDE FORMS REDUCE TO CHAINED xor2
            // =============================================================================

            assert_eq!(
                xor3(a, b, c),
                xor2(&xor2(a, b), c),
                "xor3 disagrees with chained xor2"
            );
            assert_eq!(
                xor4(a, b, c, d),
                xor2(&xor2(a, b), &xor2(c, d)),
                "xor4 disagrees with chained xor2"
            );
        });
}

#[test]
fn fuzz_combiner_matches_portable() {
    use aez_core::kernels::portable;

    check!()
        .with_type::<(Block, Block, Block, Block)>()
        .for_each(|(a, b, c, d)| {
            // The dispatched backend must be bit-identical to the portable
            // one, whichever kernel is live on this machine.
            assert_eq!(xor2(a, b), portable::xor2(a, b));
            assert_eq!(xor3(a, b, c), portable::xor3(a, b, c));
            assert_eq!(xor4(a, b, c, d), portable::xor4(a, b, c, d));
        });
}
