use fixed_flags::{Capacity, Flags, SelectLayout};
use std::mem::size_of;

fn main() {
    println!("=== Flag Set Size Classes ===\n");

    report::<8>("Set of 8");
    report::<16>("Set of 16");
    report::<32>("Set of 32");
    report::<64>("Set of 64");
    report::<72>("Array of 8");
    report::<80>("Array of 16");
    report::<96>("Array of 32");
    report::<128>("Array of 64");
}

fn report<const N: usize>(label: &str)
where
    Capacity<N>: SelectLayout,
{
    let flags = Flags::<N>::new();
    println!(
        "  {label}: class {} ({} bytes, {} flags)",
        flags.size_class(),
        size_of::<Flags<N>>(),
        N
    );
}
