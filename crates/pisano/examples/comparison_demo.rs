//! Greater-than proof walkthrough with the reference operands.
//!
//! Run with: `cargo run --example comparison_demo`

use num_bigint::BigUint;
use num_traits::One;
use pisano::embedding::EmbeddingScheme;
use pisano::{compare, FibEmbedding};

fn main() {
    let e = FibEmbedding::new((BigUint::one() << 127u32) - 1u32).expect("modulus >= 2");

    let a = BigUint::from(3_457_834_959_399u64);
    let b = BigUint::from(345_995u64);

    // Only a party holding both raw values can produce this.
    let proof = compare::prove(&e, &a, &b).expect("a > b");

    // The verifier sees only the embedded points.
    let ea = e.encode(&a);
    let eb = e.encode(&b);
    println!("verify(proof, Ea, Eb) = {}", compare::verify(&proof, &ea, &eb).expect("same space"));

    // The reverse claim cannot be proven at all.
    match compare::prove(&e, &b, &a) {
        Err(err) => println!("prove(b, a): {err}"),
        Ok(_) => unreachable!("b < a"),
    }
}
