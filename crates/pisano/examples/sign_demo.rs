//! Sign/verify walkthrough over all three embedding spaces, using the
//! reference digests and secret keys.
//!
//! Run with: `cargo run --example sign_demo`

use num_bigint::BigUint;
use num_traits::One;
use pisano::embedding::{AnyScheme, Embedding};
use pisano::{sign, CycSqrEmbedding, ExpEmbedding, FibEmbedding};

fn main() {
    let h = BigUint::from(324_235_324_349_912u64);
    let secret = BigUint::from(7_794_992_043u64);

    let exp = ExpEmbedding::demo_params();
    let fib = FibEmbedding::new((BigUint::one() << 127u32) - 1u32).expect("modulus >= 2");
    let cyc = CycSqrEmbedding::demo_params();
    println!(" exp: M = {}", exp.modulus());
    println!(" fib: M = {}", fib.modulus());
    println!(" cyc: S = {}", cyc.bits());

    let schemes = vec![AnyScheme::Exp(exp), AnyScheme::Fib(fib), AnyScheme::Cyc(cyc)];

    for scheme in schemes {
        let keys = sign::keygen(&scheme, &secret);
        let sig = sign::sign(&scheme, &h, keys.private()).expect("same space");
        let ok = sign::verify(&scheme, &h, &sig, keys.public()).expect("same space");
        let forged =
            sign::verify(&scheme, &(&h + 1u32), &sig, keys.public()).expect("same space");
        println!(
            "{:>4}: verify = {ok}, verify(h + 1) = {forged}",
            keys.public().family()
        );
    }
}
