//! Synthetic candidate generator.
//!
//! Produces syntactically valid but otherwise arbitrary candidates for the
//! recruitment tests. Names come from small built-in pools, the vacancy is
//! drawn uniformly from the configured designations, the email is derived
//! from the name and the contact number is ten random digits.
//!
//! ```
//! use recruitdata::{GeneratorConfig, RecordGenerator};
//!
//! let mut generator = RecordGenerator::with_seed(&GeneratorConfig::default(), 7);
//! let batch = generator.generate(3);
//! assert_eq!(batch.len(), 3);
//! ```

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::GeneratorConfig;
use crate::models::{Candidate, CONTACT_NO_LEN};

const FIRST_NAMES: &[&str] = &[
    "Aaliyah", "Amara", "Benjamin", "Carlos", "Chloe", "Daniel", "Elena", "Ethan", "Fatima",
    "Gabriel", "Hannah", "Isaac", "Jasmine", "Kenji", "Laura", "Liam", "Maya", "Mohammed",
    "Nadia", "Noah", "Olivia", "Priya", "Rafael", "Sofia", "Thomas", "Uma", "Victor", "Wei",
    "Yusuf", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Anderson", "Bauer", "Campbell", "Dubois", "Fernandez", "Garcia", "Hansen", "Ibrahim",
    "Jensen", "Kowalski", "Larsen", "Martin", "Nakamura", "Nguyen", "Okafor", "Patel",
    "Quinn", "Rossi", "Schmidt", "Silva", "Tanaka", "Usman", "Virtanen", "Walker", "Xu",
    "Yamamoto", "Zhang", "Kumar", "Lopez", "Murphy",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net", "mail.test"];

/// Generator of recruitment candidates.
pub struct RecordGenerator {
    designations: Vec<String>,
    rng: StdRng,
}

impl RecordGenerator {
    /// Generator seeded from OS entropy; every run differs.
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            designations: config.designations().to_vec(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Generator with a fixed seed, for reproducible batches.
    pub fn with_seed(config: &GeneratorConfig, seed: u64) -> Self {
        Self {
            designations: config.designations().to_vec(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate `count` candidates.
    pub fn generate(&mut self, count: usize) -> Vec<Candidate> {
        (0..count).map(|_| self.next_candidate()).collect()
    }

    /// Generate one candidate.
    pub fn next_candidate(&mut self) -> Candidate {
        let firstname = pick(&mut self.rng, FIRST_NAMES).to_string();
        let lastname = pick(&mut self.rng, LAST_NAMES).to_string();
        // GeneratorConfig guarantees at least one designation.
        let vacancy = self
            .designations
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_default();
        let email = generate_email(&mut self.rng, &firstname, &lastname);
        let contact_no = generate_digits(&mut self.rng, CONTACT_NO_LEN);

        Candidate {
            firstname,
            lastname,
            vacancy,
            email,
            contact_no: Some(contact_no),
        }
    }
}

fn pick<R: Rng>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool[rng.gen_range(0..pool.len())]
}

/// `first.last<n>@domain`, lowercased, local part reduced to ASCII alphanumerics.
fn generate_email<R: Rng>(rng: &mut R, firstname: &str, lastname: &str) -> String {
    let local = |name: &str| -> String {
        name.chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_ascii_lowercase()
    };
    let suffix: u32 = rng.gen_range(1..100);
    let domain = pick(rng, EMAIL_DOMAINS);
    format!("{}.{}{}@{}", local(firstname), local(lastname), suffix, domain)
}

/// Exactly `len` random decimal digits; leading zeros allowed.
fn generate_digits<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn config() -> GeneratorConfig {
        GeneratorConfig::default()
    }

    #[test]
    fn test_generate_zero() {
        let mut generator = RecordGenerator::new(&config());
        assert!(generator.generate(0).is_empty());
    }

    #[test]
    fn test_generate_count() {
        let mut generator = RecordGenerator::new(&config());
        assert_eq!(generator.generate(25).len(), 25);
    }

    #[test]
    fn test_vacancy_domain_closure() {
        let config = GeneratorConfig::new(["Software Engineer", "Payroll Administrator", "Senior QA Lead"]).unwrap();
        let allowed: HashSet<&str> = config.designations().iter().map(String::as_str).collect();
        let mut generator = RecordGenerator::with_seed(&config, 42);

        let batch = generator.generate(1000);
        assert!(batch.iter().all(|c| allowed.contains(c.vacancy.as_str())));

        let seen: HashSet<&str> = batch.iter().map(|c| c.vacancy.as_str()).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_field_invariants() {
        let mut generator = RecordGenerator::with_seed(&config(), 1);

        for candidate in generator.generate(200) {
            assert!(!candidate.firstname.is_empty());
            assert!(!candidate.lastname.is_empty());

            let (local, domain) = candidate.email.split_once('@').unwrap();
            assert!(!local.is_empty());
            assert!(domain.contains('.'));

            let contact = candidate.contact_no.unwrap();
            assert_eq!(contact.len(), CONTACT_NO_LEN);
            assert!(contact.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_seeded_generators_agree() {
        let mut a = RecordGenerator::with_seed(&config(), 99);
        let mut b = RecordGenerator::with_seed(&config(), 99);
        assert_eq!(a.generate(10), b.generate(10));
    }

    #[test]
    fn test_email_local_part() {
        let mut rng = StdRng::seed_from_u64(3);
        let email = generate_email(&mut rng, "Jo-Anne", "O'Brien");
        assert!(email.starts_with("joanne.obrien"));
    }

    #[test]
    fn test_generate_digits() {
        let mut rng = StdRng::seed_from_u64(5);
        let digits = generate_digits(&mut rng, 10);
        assert_eq!(digits.len(), 10);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
        assert!(generate_digits(&mut rng, 0).is_empty());
    }
}
