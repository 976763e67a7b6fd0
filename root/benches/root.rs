use criterion::{criterion_group, criterion_main, Criterion};
use natroot::{
  cases::{reference_cases, run_cases},
  root, RootSolver,
};
use natroot_util::nat::Nat;
use num_bigint::BigUint;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

fn random_nat(rng: &mut XorShiftRng, limbs: usize) -> Nat {
  Nat::new((0..limbs).map(|_| rng.gen()).collect())
}

fn bench_nth_root(c: &mut Criterion) {
  for limbs in [2, 4, 8] {
    for r in [2, 3, 6] {
      c.bench_function(&format!("{}-bit {r}-th root", limbs * 32), move |b| {
        let mut rng = XorShiftRng::from_seed([0u8; 16]);
        b.iter(|| {
          let mut n = random_nat(&mut rng, limbs);
          root(&mut n, r);
          n
        });
      });

      c.bench_function(&format!("{}-bit {r}-th baseline", limbs * 32), move |b| {
        let mut rng = XorShiftRng::from_seed([0u8; 16]);
        b.iter(|| BigUint::from_slice(random_nat(&mut rng, limbs).limbs()).nth_root(r));
      });
    }
  }
}

fn bench_reference_table(c: &mut Criterion) {
  c.bench_function("reference table", move |b| {
    b.iter(|| run_cases(&RootSolver::default(), reference_cases()));
  });

  c.bench_function("reference table, gap only", move |b| {
    b.iter(|| run_cases(&RootSolver::gap_only(), reference_cases()));
  });
}

criterion_group!(benches, bench_nth_root, bench_reference_table);
criterion_main!(benches);
