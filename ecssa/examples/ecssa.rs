use curve::Point;
use ecssa::{Signature, Ssa};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sha2::{Digest, Sha256};

fn main() {
    let ssa = Ssa::default();
    let mut rng = StdRng::seed_from_u64(42);
    let (prvkey, pubkey) = ssa.keypair(&mut rng).expect("keypair");

    let mhd = Sha256::digest(b"hello ecssa");
    let sig = ssa.sign(&mhd, &prvkey, None).expect("sign");

    let pubkey_bytes = bincode::serialize(&pubkey).expect("serialize pubkey");
    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");

    let pubkey2: Point = bincode::deserialize(&pubkey_bytes).expect("deserialize pubkey");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");

    let ok = ssa.verify(&mhd, &pubkey2, &sig2);
    assert!(ok);
}
