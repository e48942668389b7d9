//! Basic Usage Example
//!
//! Combines blocks with XOR and runs both keyed permutations, printing
//! which backend the dispatcher selected.

#![allow(clippy::pedantic, clippy::nursery)]

fn main() {
    let tweak = *b"block sixteen by";
    let mask = [0x55u8; 16];
    let key_material: [u8; 48] = core::array::from_fn(|i| i as u8);

    println!("Backend: {}", aez_core::active_backend());

    let mixed = aez_core::xor2(&tweak, &mask);
    println!("xor2:    {}", hex::encode(mixed));

    let mut state = mixed;
    aez_core::aes4(&mut state, &key_material);
    println!("aes4:    {}", hex::encode(state));

    let mut state = mixed;
    aez_core::aes10(&mut state, &key_material);
    println!("aes10:   {}", hex::encode(state));
}
