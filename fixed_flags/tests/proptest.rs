// tests/proptest.rs

use fixed_flags::{Capacity, Flags, FlagsError, SelectLayout};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

//
// -----------------------------------------------------------------------------
// Helper Functions
// -----------------------------------------------------------------------------

/// An operation applied to a flag set and mirrored on a `Vec<bool>` model.
#[derive(Clone, Copy, Debug)]
enum Op {
    Set(usize, bool),
    Flip(usize),
    Reset,
}

fn op_strategy(max_pos: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0..max_pos, any::<bool>()).prop_map(|(p, v)| Op::Set(p, v)),
        3 => (0..max_pos).prop_map(Op::Flip),
        1 => Just(Op::Reset),
    ]
}

/// Applies `ops` to a fresh `Flags<N>` and to a model of `N` booleans, then
/// checks every position (and a few past the end) agrees.
fn check_against_model<const N: usize>(ops: &[Op]) -> Result<(), TestCaseError>
where
    Capacity<N>: SelectLayout,
{
    let mut flags = Flags::<N>::new();
    let mut model = vec![false; N];

    for &op in ops {
        match op {
            Op::Set(pos, value) => {
                flags.set(pos, value);
                if pos < N {
                    model[pos] = value;
                }
            }
            Op::Flip(pos) => {
                flags.flip(pos);
                if pos < N {
                    model[pos] = !model[pos];
                }
            }
            Op::Reset => {
                flags.reset();
                model.iter_mut().for_each(|b| *b = false);
            }
        }
    }

    for (pos, &expected) in model.iter().enumerate() {
        prop_assert_eq!(flags.get(pos), expected, "pos {} of {}", pos, N);
        prop_assert_eq!(flags[pos], expected);
    }
    for pos in N..N + 70 {
        prop_assert!(!flags.get(pos));
    }

    Ok(())
}

fn run_for_n(n: usize, ops: &[Op]) -> Result<(), TestCaseError> {
    match n {
        1 => check_against_model::<1>(ops),
        7 => check_against_model::<7>(ops),
        8 => check_against_model::<8>(ops),
        9 => check_against_model::<9>(ops),
        16 => check_against_model::<16>(ops),
        17 => check_against_model::<17>(ops),
        32 => check_against_model::<32>(ops),
        33 => check_against_model::<33>(ops),
        63 => check_against_model::<63>(ops),
        64 => check_against_model::<64>(ops),
        65 => check_against_model::<65>(ops),
        72 => check_against_model::<72>(ops),
        80 => check_against_model::<80>(ops),
        96 => check_against_model::<96>(ops),
        100 => check_against_model::<100>(ops),
        128 => check_against_model::<128>(ops),
        200 => check_against_model::<200>(ops),
        1000 => check_against_model::<1000>(ops),
        _ => Ok(()),
    }
}

const SIZES: [usize; 18] = [
    1, 7, 8, 9, 16, 17, 32, 33, 63, 64, 65, 72, 80, 96, 100, 128, 200, 1000,
];

//
// -----------------------------------------------------------------------------
// Flags Properties - Model Equivalence
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_matches_bool_model(
        size_idx in 0..SIZES.len(),
        ops in prop::collection::vec(op_strategy(1100), 0..200)
    ) {
        run_for_n(SIZES[size_idx], &ops)?;
    }
}

//
// -----------------------------------------------------------------------------
// Flags Properties - Single Bit Operations
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_set_touches_only_its_bit(pos in 0usize..96, value in any::<bool>(), seed in any::<u128>()) {
        let mut flags = Flags::<96>::new();
        for p in 0..96 {
            flags.set(p, (seed >> p) & 1 == 1);
        }
        let before = flags;

        flags.set(pos, value);

        prop_assert_eq!(flags.get(pos), value);
        for other in (0..96).filter(|&o| o != pos) {
            prop_assert_eq!(flags.get(other), before.get(other));
        }
    }

    #[test]
    fn prop_flip_is_its_own_inverse(pos in 0usize..80, seed in any::<u128>()) {
        let mut flags = Flags::<80>::new();
        for p in 0..80 {
            flags.set(p, (seed >> p) & 1 == 1);
        }
        let before = flags;

        flags.flip(pos);
        prop_assert_ne!(flags.get(pos), before.get(pos));
        flags.flip(pos);
        prop_assert_eq!(flags, before);
    }

    #[test]
    fn prop_reset_clears_everything(seed in any::<u64>()) {
        let mut flags = Flags::<50>::new();
        for p in 0..50 {
            flags.set(p, (seed >> p) & 1 == 1);
        }
        flags.reset();
        for p in 0..50 {
            prop_assert!(!flags.get(p));
        }
        prop_assert_eq!(flags, Flags::<50>::new());
    }
}

//
// -----------------------------------------------------------------------------
// Flags Properties - Out Of Range
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_out_of_range_changes_nothing(
        pos in 17usize..10_000,
        value in any::<bool>(),
        seed in any::<u32>()
    ) {
        let mut flags = Flags::<17>::new();
        for p in 0..17 {
            flags.set(p, (seed >> p) & 1 == 1);
        }
        let before = flags;

        flags.set(pos, value);
        flags.flip(pos);

        prop_assert_eq!(flags, before);
        prop_assert!(!flags.get(pos));
        prop_assert_eq!(
            flags.try_get(pos),
            Err(FlagsError::PositionOutOfRange { pos, len: 17 })
        );
    }

    #[test]
    fn prop_strict_agrees_with_silent(pos in 0usize..140, value in any::<bool>()) {
        let mut silent = Flags::<130>::new();
        let mut strict = Flags::<130>::new();

        silent.set(pos, value);
        let result = strict.try_set(pos, value);

        prop_assert_eq!(result.is_ok(), pos < 130);
        prop_assert_eq!(silent, strict);
        prop_assert_eq!(strict.try_get(pos).unwrap_or(false), silent.get(pos));
    }
}

//
// -----------------------------------------------------------------------------
// Invariants - Backing Storage
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_unused_bits_stay_zero(ops in prop::collection::vec(op_strategy(200), 0..100)) {
        // 70 flags live in [u8; 9]; the top two bits of the last byte are unused.
        let mut flags = Flags::<70>::new();
        for op in ops {
            match op {
                Op::Set(pos, value) => flags.set(pos, value),
                Op::Flip(pos) => flags.flip(pos),
                Op::Reset => flags.reset(),
            }
        }
        let bytes = flags.as_bytes();
        prop_assert_eq!(bytes.len(), 9);
        prop_assert_eq!(bytes[8] & 0b1100_0000, 0);
    }

    #[test]
    fn prop_copies_do_not_alias(pos in 0usize..300) {
        let mut original = Flags::<300>::new();
        let copy = original;

        original.set(pos, true);

        prop_assert!(original.get(pos));
        prop_assert!(!copy.get(pos));
    }
}
