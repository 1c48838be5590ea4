/// Fake worker identities and crew names.
use fake::Fake;
use fake::faker::company::en::{BsAdj, BsNoun};
use fake::faker::name::en::{FirstName, LastName};
use rand::Rng;

use crate::types::NewWorker;

pub fn fake_workers<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<NewWorker> {
    (0..count)
        .map(|_| NewWorker {
            first_name: FirstName().fake_with_rng(&mut *rng),
            last_name: LastName().fake_with_rng(&mut *rng),
        })
        .collect()
}

/// Crew names look like "<adjective> <noun>". Duplicates are possible.
pub fn fake_crew_names<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<String> {
    (0..count)
        .map(|_| {
            let adjective: String = BsAdj().fake_with_rng(&mut *rng);
            let noun: String = BsNoun().fake_with_rng(&mut *rng);
            format!("{adjective} {noun}")
        })
        .collect()
}
